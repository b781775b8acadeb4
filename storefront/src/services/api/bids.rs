//! # Bid Endpoints

use shared::{AuctionListing, BidRequest, BidResponse};

use super::client::ApiClient;
use crate::core::error::Result;

/// Submit a bid. The server is the final authority on the minimum increment
/// rule; the response carries the updated listing.
#[tracing::instrument(
    skip(client, request),
    fields(auction_id = request.auction_id, amount = request.amount)
)]
pub async fn place_bid(client: &ApiClient, request: &BidRequest) -> Result<AuctionListing> {
    let response: BidResponse = client.post("/bids", request, None).await?;
    tracing::info!(
        auction_id = response.auction.id,
        current_price = response.auction.current_price,
        "Bid accepted"
    );
    Ok(response.auction)
}
