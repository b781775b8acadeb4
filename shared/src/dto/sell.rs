use serde::{Deserialize, Serialize};

use super::catalog::AuctionListing;

/// Auction creation request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateAuctionRequest {
    pub title: String,
    pub description: String,
    pub starting_price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reserve_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyout_price: Option<f64>,
    pub end_time: String,
    pub category_id: i64,
    pub condition: String,
    pub shipping_cost: f64,
    #[serde(default)]
    pub location: String,
}

/// Auction creation response envelope
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateAuctionResponse {
    pub auction: AuctionListing,
}

/// Image upload receipt. The backend may include the stored location.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UploadResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}
