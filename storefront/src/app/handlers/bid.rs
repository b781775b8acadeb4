//! # Bid Handlers
//!
//! One bid attempt walks `Idle → Validating → Submitting` and ends
//! `Succeeded` or `Failed`. Validation failures never reach the network. A
//! success re-fetches the current listing page so the UI always shows the
//! server's authoritative prices; there is no optimistic update.

use std::sync::Arc;

use parking_lot::RwLock;
use shared::BidRequest;

use crate::app::handlers::catalog;
use crate::app::state::{AppState, BidForm, BidPhase};
use crate::core::error::{AppError, Result};
use crate::core::service::ApiService;
use crate::session::SessionStore;
use crate::view::listing::format_currency;
use crate::view::notifications::NotificationManager;

/// Minimum bidder-name length.
const MIN_BIDDER_NAME_LEN: usize = 2;

/// Local pre-checks for a bid. The server remains the authority on the
/// minimum-increment rule; this only blocks obviously invalid input before
/// it costs a request.
pub fn validate_bid(
    bidder_name: &str,
    amount: Option<f64>,
    current_price: f64,
) -> std::result::Result<f64, String> {
    let name = bidder_name.trim();
    if name.is_empty() {
        return Err("Please enter your name".to_string());
    }
    if name.chars().count() < MIN_BIDDER_NAME_LEN {
        return Err("Name must be at least 2 characters long".to_string());
    }

    let amount = match amount {
        Some(amount) if amount > 0.0 => amount,
        _ => return Err("Please enter a valid bid amount".to_string()),
    };
    if amount <= current_price {
        return Err(format!(
            "Bid must be higher than the current price of {}",
            format_currency(current_price)
        ));
    }

    Ok(amount)
}

/// Open the bid dialog for an auction: fetch fresh detail so the price
/// shown (and pre-checked against) is current, and pre-fill the signed-in
/// user's name.
pub async fn open_bid_dialog<A>(
    api: &A,
    state: &Arc<RwLock<AppState>>,
    notifications: &NotificationManager,
    session: &SessionStore,
    auction_id: i64,
) -> Result<()>
where
    A: ApiService + ?Sized,
{
    let detail = match api.auction(auction_id).await {
        Ok(detail) => detail,
        Err(e) => {
            notifications.error("Failed to load auction details");
            return Err(e);
        }
    };

    let bidder_name = session.profile().map(|profile| profile.username);
    let mut state = state.write();
    if let Some(listing) = state
        .catalog
        .auctions
        .iter_mut()
        .find(|listing| listing.id == auction_id)
    {
        *listing = detail.auction;
    }
    state.bid = Some(BidForm::open(auction_id, bidder_name));
    Ok(())
}

/// Submit the open bid dialog. Each call is one independent attempt; there
/// is no dedup or queueing of repeated presses.
pub async fn place_bid<A>(
    api: &A,
    state: &Arc<RwLock<AppState>>,
    notifications: &NotificationManager,
) -> Result<()>
where
    A: ApiService + ?Sized,
{
    let (auction_id, bidder_name, raw_amount, current_price) = {
        let state = state.read();
        let form = state
            .bid
            .as_ref()
            .ok_or_else(|| AppError::Validation("No bid in progress".to_string()))?;
        let current_price = state
            .catalog
            .auctions
            .iter()
            .find(|auction| auction.id == form.auction_id)
            .map(|auction| auction.current_price)
            .unwrap_or(0.0);
        (
            form.auction_id,
            form.bidder_name.clone(),
            form.amount.clone(),
            current_price,
        )
    };

    set_phase(state, BidPhase::Validating, None);
    let amount = raw_amount.trim().parse::<f64>().ok();
    let amount = match validate_bid(&bidder_name, amount, current_price) {
        Ok(amount) => amount,
        Err(message) => {
            set_phase(state, BidPhase::Failed, Some(message.clone()));
            notifications.warning(message.clone());
            return Err(AppError::Validation(message));
        }
    };

    set_phase(state, BidPhase::Submitting, None);
    let request = BidRequest {
        auction_id,
        amount,
        bidder_name: bidder_name.clone(),
    };

    match api.place_bid(&request).await {
        Ok(_updated) => {
            set_phase(state, BidPhase::Succeeded, None);
            notifications.success(format!("Bid placed successfully by {}!", bidder_name));
            state.write().bid = None;
            // Authoritative state comes from a full re-fetch, not from
            // patching the one listing.
            let _ = catalog::refresh_auctions(api, state, notifications).await;
            Ok(())
        }
        Err(e) => {
            let message = e.user_message().to_string();
            set_phase(state, BidPhase::Failed, Some(message.clone()));
            notifications.error(message);
            Err(e)
        }
    }
}

fn set_phase(state: &Arc<RwLock<AppState>>, phase: BidPhase, error: Option<String>) {
    let mut state = state.write();
    if let Some(form) = state.bid.as_mut() {
        form.phase = phase;
        form.error = error;
    }
}
