use serde::{Deserialize, Serialize};

/// Category reference data, fetched once per page load
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// One listing image
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuctionImage {
    pub url: String,
}

/// An auction listing as returned by the backend.
///
/// `current_price` is monotonically non-decreasing over the auction's life;
/// the server enforces that, the client only displays it. `end_time` is an
/// ISO-8601 timestamp string, with or without an offset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuctionListing {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub current_price: f64,
    #[serde(default)]
    pub bid_count: u32,
    pub end_time: String,
    pub is_active: bool,
    #[serde(default)]
    pub images: Vec<AuctionImage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
}

/// One page of auction listings, replaced wholesale on each fetch
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuctionsPage {
    pub auctions: Vec<AuctionListing>,
    pub current_page: u32,
    pub pages: u32,
}

/// Single-listing detail envelope
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuctionDetail {
    pub auction: AuctionListing,
}
