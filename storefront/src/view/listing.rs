//! # Listing View Models
//!
//! Pure transformations from auction records to display fragments. Nothing
//! here touches the network or any UI binding, so the whole module is
//! testable without a rendering surface.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use shared::AuctionListing;

use super::countdown::{parse_end_time, time_remaining_label, ENDED_LABEL};

/// Character budget for card descriptions.
const DESCRIPTION_BUDGET: usize = 100;

/// Placeholder shown when no image can be resolved.
const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/300x200?text=Auction+Item";

/// Title-keyword fallback imagery, checked in order.
static KEYWORD_IMAGES: Lazy<Vec<(Vec<&'static str>, &'static str)>> = Lazy::new(|| {
    vec![
        (vec!["watch", "rolex"], "RolexSubmariner.jpg"),
        (vec!["laptop", "rtx"], "Rtx4070.jpg"),
        (vec!["vase", "ming"], "mingvases.jpeg"),
        (vec!["ring", "diamond"], "Ring2C.jpg"),
        (vec!["mustang", "car"], "Mustang.jpg"),
        (vec!["painting", "art"], "oilpaint.jpg"),
    ]
});

/// Display-ready auction card.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingCard {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub price_label: String,
    pub bid_count_label: String,
    pub status_label: &'static str,
    pub image_url: String,
    pub time_remaining: String,
    pub end_time: Option<DateTime<Utc>>,
}

impl ListingCard {
    pub fn from_listing(listing: &AuctionListing, now: DateTime<Utc>) -> Self {
        let end_time = parse_end_time(&listing.end_time);
        let time_remaining = match end_time {
            Some(end) => time_remaining_label(now, end),
            // An unreadable deadline renders as ended rather than counting
            // down from garbage.
            None => ENDED_LABEL.to_string(),
        };

        Self {
            id: listing.id,
            title: listing.title.clone(),
            description: truncate_text(&listing.description, DESCRIPTION_BUDGET),
            price_label: format_currency(listing.current_price),
            bid_count_label: format!("{} bids", listing.bid_count),
            status_label: if listing.is_active { "LIVE" } else { "ENDED" },
            image_url: display_image(listing),
            time_remaining,
            end_time,
        }
    }
}

/// First listing-supplied image, else a keyword match against the title,
/// else the generic placeholder.
pub fn display_image(listing: &AuctionListing) -> String {
    if let Some(image) = listing.images.first() {
        return image.url.clone();
    }

    let title = listing.title.to_lowercase();
    for (keywords, file) in KEYWORD_IMAGES.iter() {
        if keywords.iter().any(|keyword| title.contains(*keyword)) {
            return (*file).to_string();
        }
    }

    PLACEHOLDER_IMAGE.to_string()
}

/// Truncate to `budget` characters with an ellipsis marker.
pub fn truncate_text(text: &str, budget: usize) -> String {
    if text.chars().count() <= budget {
        return text.to_string();
    }
    let cut: String = text.chars().take(budget).collect();
    format!("{}...", cut)
}

/// Dollar amount with thousands grouping. Whole amounts drop the cents;
/// fractional amounts show two decimals. Amounts here are non-negative.
pub fn format_currency(amount: f64) -> String {
    let cents = (amount * 100.0).round() as i64;
    let whole = cents / 100;
    let fraction = cents % 100;
    if fraction == 0 {
        format!("${}", group_thousands(whole))
    } else {
        format!("${}.{:02}", group_thousands(whole), fraction)
    }
}

fn group_thousands(value: i64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::AuctionImage;

    fn listing(title: &str) -> AuctionListing {
        AuctionListing {
            id: 1,
            title: title.to_string(),
            description: "Authentic vintage piece in excellent condition".to_string(),
            current_price: 8500.0,
            bid_count: 23,
            end_time: "2025-10-01T15:30:00".to_string(),
            is_active: true,
            images: Vec::new(),
            category_id: Some(2),
        }
    }

    #[test]
    fn test_currency_grouping() {
        assert_eq!(format_currency(8500.0), "$8,500");
        assert_eq!(format_currency(1_234_567.0), "$1,234,567");
        assert_eq!(format_currency(999.0), "$999");
        assert_eq!(format_currency(1850.5), "$1,850.50");
        assert_eq!(format_currency(0.0), "$0");
    }

    #[test]
    fn test_truncation_budget() {
        let short = "brief";
        assert_eq!(truncate_text(short, 100), "brief");

        let long = "x".repeat(150);
        let truncated = truncate_text(&long, 100);
        assert_eq!(truncated.chars().count(), 103);
        assert!(truncated.ends_with("..."));
    }

    #[test]
    fn test_display_image_prefers_listing_images() {
        let mut with_image = listing("Vintage Rolex Submariner");
        with_image.images.push(AuctionImage {
            url: "/uploads/1.jpg".to_string(),
        });
        assert_eq!(display_image(&with_image), "/uploads/1.jpg");
    }

    #[test]
    fn test_display_image_keyword_fallback() {
        assert_eq!(
            display_image(&listing("Vintage Rolex Submariner")),
            "RolexSubmariner.jpg"
        );
        assert_eq!(display_image(&listing("Gaming Laptop")), "Rtx4070.jpg");
        assert_eq!(display_image(&listing("1969 Ford Mustang")), "Mustang.jpg");
        assert_eq!(display_image(&listing("Mystery box")), PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_card_from_listing() {
        let now = chrono::DateTime::parse_from_rfc3339("2025-10-01T15:00:00Z")
            .unwrap()
            .with_timezone(&chrono::Utc);
        let card = ListingCard::from_listing(&listing("Vintage Rolex Submariner"), now);

        assert_eq!(card.price_label, "$8,500");
        assert_eq!(card.bid_count_label, "23 bids");
        assert_eq!(card.status_label, "LIVE");
        assert_eq!(card.time_remaining, "30m 0s");
    }

    #[test]
    fn test_card_with_unparseable_end_time() {
        let now = chrono::Utc::now();
        let mut broken = listing("Mystery box");
        broken.end_time = "whenever".to_string();
        let card = ListingCard::from_listing(&broken, now);
        assert_eq!(card.time_remaining, ENDED_LABEL);
        assert_eq!(card.end_time, None);
    }
}
