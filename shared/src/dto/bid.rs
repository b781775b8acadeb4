use serde::{Deserialize, Serialize};

use super::catalog::AuctionListing;

/// Bid submission. Constructed, validated, submitted, discarded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BidRequest {
    pub auction_id: i64,
    pub amount: f64,
    pub bidder_name: String,
}

/// Bid acceptance envelope carrying the updated listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BidResponse {
    pub auction: AuctionListing,
}
