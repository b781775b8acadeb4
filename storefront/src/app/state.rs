//! # Application State Types
//!
//! All state-related types for the client: catalog screen state, the bid
//! dialog, and the sell form with its image selection and fee estimate.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use shared::{AuctionListing, Category};

use crate::app::handlers::draft::DraftAutosave;
use crate::services::api::catalog::CatalogQuery;

/// Catalog screen state: reference data, the current listings page and the
/// countdown labels keyed by auction id.
#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    pub categories: Vec<Category>,
    /// Listings are replaced wholesale on each fetch, never patched.
    pub auctions: Vec<AuctionListing>,
    pub current_page: u32,
    pub total_pages: u32,
    /// Filters behind the current page, reused when refreshing after a bid.
    pub query: CatalogQuery,
    pub time_labels: HashMap<i64, String>,
}

/// Phases of one bid attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BidPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

/// State of the bid dialog for one auction.
#[derive(Debug, Clone, Default)]
pub struct BidForm {
    pub auction_id: i64,
    pub bidder_name: String,
    /// Amount as typed, parsed at validation time.
    pub amount: String,
    pub phase: BidPhase,
    pub error: Option<String>,
}

impl BidForm {
    /// Fresh dialog for an auction, pre-filling the signed-in name.
    pub fn open(auction_id: i64, bidder_name: Option<String>) -> Self {
        Self {
            auction_id,
            bidder_name: bidder_name.unwrap_or_default(),
            ..Self::default()
        }
    }
}

/// Auction sale modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuctionType {
    Standard,
    Reserve,
    BuyNow,
}

/// Sell-form fields, serialized verbatim as the draft payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SellForm {
    pub title: String,
    pub description: String,
    pub category_id: Option<i64>,
    pub condition: String,
    pub starting_bid: Option<f64>,
    pub reserve_price: Option<f64>,
    pub buy_now_price: Option<f64>,
    pub shipping_cost: Option<f64>,
    pub location: String,
    pub duration_hours: Option<u32>,
    pub payment_methods: Vec<String>,
    pub auction_type: Option<AuctionType>,
}

/// One client-side image candidate awaiting upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedImage {
    pub name: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

/// Accepted image MIME types.
pub const ALLOWED_IMAGE_TYPES: [&str; 4] = ["image/jpeg", "image/png", "image/gif", "image/webp"];
/// Per-file size ceiling.
pub const MAX_IMAGE_BYTES: usize = 16 * 1024 * 1024;
/// Image-set capacity.
pub const MAX_IMAGES: usize = 10;

/// Why a candidate image was not added to the set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageRejection {
    UnsupportedType { name: String },
    TooLarge { name: String },
    SetFull { name: String },
}

impl ImageRejection {
    /// Warning text for the notification surface.
    pub fn message(&self) -> String {
        match self {
            ImageRejection::UnsupportedType { name } => {
                format!("{} is not a supported image format", name)
            }
            ImageRejection::TooLarge { name } => {
                format!("{} is too large. Maximum size is 16MB", name)
            }
            ImageRejection::SetFull { name } => {
                format!("Maximum {} images allowed, skipping {}", MAX_IMAGES, name)
            }
        }
    }
}

/// Ordered image selection. Index 0 is the primary image.
#[derive(Debug, Clone, Default)]
pub struct ImageSet {
    images: Vec<SelectedImage>,
}

impl ImageSet {
    /// Accept a candidate after MIME-type, size and capacity checks.
    /// Rejections carry enough context for a user-facing warning.
    pub fn add(&mut self, candidate: SelectedImage) -> Result<(), ImageRejection> {
        if !ALLOWED_IMAGE_TYPES.contains(&candidate.content_type.as_str()) {
            return Err(ImageRejection::UnsupportedType {
                name: candidate.name,
            });
        }
        if candidate.data.len() > MAX_IMAGE_BYTES {
            return Err(ImageRejection::TooLarge {
                name: candidate.name,
            });
        }
        if self.images.len() >= MAX_IMAGES {
            return Err(ImageRejection::SetFull {
                name: candidate.name,
            });
        }
        self.images.push(candidate);
        Ok(())
    }

    pub fn remove(&mut self, index: usize) {
        if index < self.images.len() {
            self.images.remove(index);
        }
    }

    /// Promote an image to primary: remove it from its position and
    /// reinsert at index 0. The only reordering operation that exists.
    pub fn make_primary(&mut self, index: usize) {
        if index == 0 || index >= self.images.len() {
            return;
        }
        let image = self.images.remove(index);
        self.images.insert(0, image);
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn as_slice(&self) -> &[SelectedImage] {
        &self.images
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SelectedImage> {
        self.images.iter()
    }
}

/// Percentage of the estimated sale price kept as the final value fee.
pub const FINAL_VALUE_FEE_RATE: f64 = 0.10;
/// Percentage kept for payment processing.
pub const PAYMENT_FEE_RATE: f64 = 0.03;

/// Advisory fee estimate for the sell form. Display only, never binding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeeBreakdown {
    pub estimated_sale_price: f64,
    pub final_value_fee: f64,
    pub payment_fee: f64,
    pub total_fees: f64,
    pub you_receive: f64,
}

impl FeeBreakdown {
    /// Estimate from the highest potential sale price for the selected
    /// auction type.
    pub fn for_form(form: &SellForm) -> Self {
        let mut estimate = form.starting_bid.unwrap_or(0.0);
        if form.auction_type == Some(AuctionType::Reserve) {
            if let Some(reserve) = form.reserve_price {
                if reserve > estimate {
                    estimate = reserve;
                }
            }
        }
        if form.auction_type == Some(AuctionType::BuyNow) {
            if let Some(buy_now) = form.buy_now_price {
                if buy_now > estimate {
                    estimate = buy_now;
                }
            }
        }

        let final_value_fee = estimate * FINAL_VALUE_FEE_RATE;
        let payment_fee = estimate * PAYMENT_FEE_RATE;
        let total_fees = final_value_fee + payment_fee;
        Self {
            estimated_sale_price: estimate,
            final_value_fee,
            payment_fee,
            total_fees,
            you_receive: estimate - total_fees,
        }
    }
}

/// Sell screen state.
#[derive(Debug, Clone, Default)]
pub struct SellState {
    pub form: SellForm,
    pub images: ImageSet,
    pub autosave: DraftAutosave,
    pub submitting: bool,
}

/// Global application state shared across workflows.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub catalog: CatalogState,
    /// Present while a bid dialog is open.
    pub bid: Option<BidForm>,
    pub sell: SellState,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(name: &str) -> SelectedImage {
        SelectedImage {
            name: name.to_string(),
            content_type: "image/jpeg".to_string(),
            data: vec![0u8; 64],
        }
    }

    #[test]
    fn test_fee_breakdown_standard() {
        let form = SellForm {
            starting_bid: Some(100.0),
            auction_type: Some(AuctionType::Standard),
            ..SellForm::default()
        };
        let fees = FeeBreakdown::for_form(&form);
        assert_eq!(fees.estimated_sale_price, 100.0);
        assert_eq!(fees.final_value_fee, 10.0);
        assert_eq!(fees.payment_fee, 3.0);
        assert_eq!(fees.total_fees, 13.0);
        assert_eq!(fees.you_receive, 87.0);
    }

    #[test]
    fn test_fee_breakdown_uses_highest_potential_price() {
        let form = SellForm {
            starting_bid: Some(100.0),
            reserve_price: Some(250.0),
            auction_type: Some(AuctionType::Reserve),
            ..SellForm::default()
        };
        assert_eq!(FeeBreakdown::for_form(&form).estimated_sale_price, 250.0);

        // A reserve value set while the type is standard is ignored.
        let form = SellForm {
            starting_bid: Some(100.0),
            reserve_price: Some(250.0),
            auction_type: Some(AuctionType::Standard),
            ..SellForm::default()
        };
        assert_eq!(FeeBreakdown::for_form(&form).estimated_sale_price, 100.0);

        let form = SellForm {
            starting_bid: Some(100.0),
            buy_now_price: Some(500.0),
            auction_type: Some(AuctionType::BuyNow),
            ..SellForm::default()
        };
        assert_eq!(FeeBreakdown::for_form(&form).estimated_sale_price, 500.0);
    }

    #[test]
    fn test_image_set_cap() {
        let mut set = ImageSet::default();
        for i in 0..MAX_IMAGES {
            assert!(set.add(image(&format!("photo-{}.jpg", i))).is_ok());
        }
        let rejection = set.add(image("one-too-many.jpg")).unwrap_err();
        assert!(matches!(rejection, ImageRejection::SetFull { .. }));
        assert_eq!(set.len(), MAX_IMAGES);
        assert_eq!(set.as_slice()[0].name, "photo-0.jpg");
        assert_eq!(set.as_slice()[9].name, "photo-9.jpg");
    }

    #[test]
    fn test_image_set_type_and_size_checks() {
        let mut set = ImageSet::default();

        let mut wrong_type = image("document.pdf");
        wrong_type.content_type = "application/pdf".to_string();
        assert!(matches!(
            set.add(wrong_type),
            Err(ImageRejection::UnsupportedType { .. })
        ));

        let mut too_big = image("huge.jpg");
        too_big.data = vec![0u8; MAX_IMAGE_BYTES + 1];
        assert!(matches!(
            set.add(too_big),
            Err(ImageRejection::TooLarge { .. })
        ));

        assert!(set.is_empty());
    }

    #[test]
    fn test_make_primary_reorders() {
        let mut set = ImageSet::default();
        for name in ["a.jpg", "b.jpg", "c.jpg"] {
            set.add(image(name)).unwrap();
        }

        set.make_primary(2);
        let names: Vec<&str> = set.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["c.jpg", "a.jpg", "b.jpg"]);

        // Promoting the current primary or an out-of-range index is a no-op.
        set.make_primary(0);
        set.make_primary(9);
        let names: Vec<&str> = set.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["c.jpg", "a.jpg", "b.jpg"]);
    }

    #[test]
    fn test_auction_type_wire_values() {
        assert_eq!(
            serde_json::to_string(&AuctionType::BuyNow).unwrap(),
            "\"buynow\""
        );
        assert_eq!(
            serde_json::from_str::<AuctionType>("\"reserve\"").unwrap(),
            AuctionType::Reserve
        );
    }
}
