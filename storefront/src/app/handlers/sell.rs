//! # Sell Handlers
//!
//! Auction authoring: image selection, fee recalculation, full-form
//! validation and the create-then-upload submission flow.

use std::sync::Arc;

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use parking_lot::RwLock;
use shared::CreateAuctionRequest;

use crate::app::handlers::draft;
use crate::app::state::{
    AppState, AuctionType, FeeBreakdown, ImageSet, SelectedImage, SellForm,
};
use crate::core::clock::Clock;
use crate::core::error::{AppError, Result};
use crate::core::service::ApiService;
use crate::core::storage::KeyValueStore;
use crate::session::SessionStore;
use crate::utils::validation::{self, ValidationResult};
use crate::view::notifications::NotificationManager;

/// Add candidate images to the selection. Every rejected file produces a
/// warning notification; accepted files keep their relative order.
pub fn add_images(
    state: &Arc<RwLock<AppState>>,
    notifications: &NotificationManager,
    candidates: Vec<SelectedImage>,
) -> usize {
    let mut accepted = 0;
    let mut state = state.write();
    for candidate in candidates {
        match state.sell.images.add(candidate) {
            Ok(()) => accepted += 1,
            Err(rejection) => notifications.warning(rejection.message()),
        }
    }
    accepted
}

pub fn remove_image(state: &Arc<RwLock<AppState>>, index: usize) {
    state.write().sell.images.remove(index);
}

pub fn make_primary(state: &Arc<RwLock<AppState>>, index: usize) {
    state.write().sell.images.make_primary(index);
}

/// Current advisory fee estimate; recomputed on every price-field change.
pub fn fee_breakdown(state: &Arc<RwLock<AppState>>) -> FeeBreakdown {
    FeeBreakdown::for_form(&state.read().sell.form)
}

/// Full submission validation: field rules first, then the image set,
/// auction type, payment methods and per-type price relations.
pub fn validate_submission(form: &SellForm, image_count: usize) -> ValidationResult {
    let fields = validation::validate_listing_form(form);
    if !fields.is_valid {
        return fields;
    }

    if image_count == 0 {
        return ValidationResult::err("Please upload at least one image of your item");
    }

    let Some(auction_type) = form.auction_type else {
        return ValidationResult::err("Please select an auction type");
    };

    if form.payment_methods.is_empty() {
        return ValidationResult::err("Please select at least one payment method");
    }

    let starting = form.starting_bid.unwrap_or(0.0);
    match auction_type {
        AuctionType::Reserve => {
            if form.reserve_price.unwrap_or(0.0) <= starting {
                return ValidationResult::err("Reserve price must be higher than starting bid");
            }
        }
        AuctionType::BuyNow => {
            if form.buy_now_price.unwrap_or(0.0) <= starting {
                return ValidationResult::err("Buy It Now price must be higher than starting bid");
            }
        }
        AuctionType::Standard => {}
    }

    ValidationResult::ok()
}

/// Result of a completed submission. Upload failures are per-file and do
/// not undo the created auction.
#[derive(Debug)]
pub struct SubmissionOutcome {
    pub auction_id: i64,
    pub uploaded: usize,
    pub failed_uploads: Vec<(String, AppError)>,
}

/// Validate the full form, create the auction, then upload each selected
/// image tagged with the new auction id and a primary flag for index 0.
///
/// A failed image upload is logged and recorded in the outcome; the auction
/// still counts as created once the base record succeeds. Success clears
/// the persisted draft and resets the form.
pub async fn submit_listing<A>(
    api: &A,
    session: &SessionStore,
    store: &dyn KeyValueStore,
    clock: &dyn Clock,
    notifications: &NotificationManager,
    state: &Arc<RwLock<AppState>>,
) -> Result<SubmissionOutcome>
where
    A: ApiService + ?Sized,
{
    let credential = session
        .credential()
        .ok_or_else(|| AppError::Validation("Sign in to create an auction".to_string()))?;

    let (form, images) = {
        let state = state.read();
        (state.sell.form.clone(), state.sell.images.clone())
    };

    let check = validate_submission(&form, images.len());
    if let Some(error) = check.error {
        notifications.warning(error.clone());
        return Err(AppError::Validation(error));
    }

    state.write().sell.submitting = true;

    let request = build_create_request(&form, clock.now());
    let created = match api.create_auction(&credential, &request).await {
        Ok(listing) => listing,
        Err(e) => {
            state.write().sell.submitting = false;
            notifications.error(e.user_message().to_string());
            return Err(e);
        }
    };

    // Images go up one at a time; a failed file is logged and skipped.
    let mut uploaded = 0;
    let mut failed_uploads = Vec::new();
    for (index, image) in images.iter().enumerate() {
        match api
            .upload_image(&credential, image, created.id, index == 0)
            .await
        {
            Ok(_) => uploaded += 1,
            Err(e) => {
                tracing::error!(file = %image.name, error = %e, "Image upload failed");
                failed_uploads.push((image.name.clone(), e));
            }
        }
    }

    draft::clear_draft(store);
    {
        let mut state = state.write();
        state.sell.form = SellForm::default();
        state.sell.images = ImageSet::default();
        state.sell.submitting = false;
    }
    notifications.success("Auction created successfully!");

    Ok(SubmissionOutcome {
        auction_id: created.id,
        uploaded,
        failed_uploads,
    })
}

/// Wire request from the validated form. The end timestamp is now plus the
/// selected duration.
fn build_create_request(form: &SellForm, now: DateTime<Utc>) -> CreateAuctionRequest {
    let duration = form.duration_hours.unwrap_or(0);
    let end_time =
        (now + Duration::hours(duration as i64)).to_rfc3339_opts(SecondsFormat::Secs, true);

    CreateAuctionRequest {
        title: form.title.trim().to_string(),
        description: form.description.trim().to_string(),
        starting_price: form.starting_bid.unwrap_or(0.0),
        reserve_price: form.reserve_price,
        buyout_price: form.buy_now_price,
        end_time,
        category_id: form.category_id.unwrap_or(0),
        condition: form.condition.clone(),
        shipping_cost: form.shipping_cost.unwrap_or(0.0),
        location: form.location.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::ManualClock;

    fn valid_form() -> SellForm {
        SellForm {
            title: "Vintage Rolex Submariner".to_string(),
            description: "Authentic vintage Rolex Submariner in excellent condition".to_string(),
            category_id: Some(2),
            condition: "used".to_string(),
            starting_bid: Some(100.0),
            duration_hours: Some(72),
            payment_methods: vec!["card".to_string()],
            auction_type: Some(AuctionType::Standard),
            ..SellForm::default()
        }
    }

    #[test]
    fn test_validate_submission_requires_images() {
        let result = validate_submission(&valid_form(), 0);
        assert_eq!(
            result.error.as_deref(),
            Some("Please upload at least one image of your item")
        );
        assert!(validate_submission(&valid_form(), 1).is_valid);
    }

    #[test]
    fn test_validate_submission_requires_payment_method() {
        let mut form = valid_form();
        form.payment_methods.clear();
        assert_eq!(
            validate_submission(&form, 1).error.as_deref(),
            Some("Please select at least one payment method")
        );
    }

    #[test]
    fn test_validate_submission_price_relations() {
        let mut form = valid_form();
        form.auction_type = Some(AuctionType::Reserve);
        form.reserve_price = Some(100.0);
        assert_eq!(
            validate_submission(&form, 1).error.as_deref(),
            Some("Reserve price must be higher than starting bid")
        );
        form.reserve_price = Some(100.01);
        assert!(validate_submission(&form, 1).is_valid);

        let mut form = valid_form();
        form.auction_type = Some(AuctionType::BuyNow);
        form.buy_now_price = Some(50.0);
        assert!(!validate_submission(&form, 1).is_valid);
        form.buy_now_price = Some(250.0);
        assert!(validate_submission(&form, 1).is_valid);
    }

    #[test]
    fn test_build_create_request_end_time() {
        let clock = ManualClock::new(
            chrono::DateTime::parse_from_rfc3339("2025-10-01T12:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
        );
        let request = build_create_request(&valid_form(), clock.now());
        assert_eq!(request.end_time, "2025-10-04T12:00:00Z");
        assert_eq!(request.starting_price, 100.0);
        assert_eq!(request.category_id, 2);
    }
}
