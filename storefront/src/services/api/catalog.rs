//! # Catalog Endpoints
//!
//! Category reference data and paginated auction listing queries.

use shared::{AuctionDetail, AuctionsPage, Category};

use super::client::ApiClient;
use crate::core::error::Result;

/// Listings fetched per page.
pub const PAGE_SIZE: u32 = 12;

/// Sort orders offered by the listing screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    EndingSoon,
    Newest,
    PriceLow,
    PriceHigh,
    MostBids,
}

impl SortOrder {
    /// Wire value for the `sort` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::EndingSoon => "ending_soon",
            SortOrder::Newest => "newest",
            SortOrder::PriceLow => "price_low",
            SortOrder::PriceHigh => "price_high",
            SortOrder::MostBids => "most_bids",
        }
    }
}

/// Query parameters for the paginated auction listing.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogQuery {
    pub page: u32,
    pub category_id: Option<i64>,
    pub search: Option<String>,
    pub sort: Option<SortOrder>,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self {
            page: 1,
            category_id: None,
            search: None,
            sort: None,
        }
    }
}

impl CatalogQuery {
    /// Same filters, different page.
    pub fn with_page(&self, page: u32) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }

    fn query_string(&self) -> String {
        let mut params = vec![
            format!("page={}", self.page),
            format!("per_page={}", PAGE_SIZE),
        ];
        if let Some(category_id) = self.category_id {
            params.push(format!("category_id={}", category_id));
        }
        if let Some(search) = &self.search {
            params.push(format!("search={}", search));
        }
        if let Some(sort) = self.sort {
            params.push(format!("sort={}", sort.as_str()));
        }
        params.join("&")
    }
}

/// Fetch the category reference list.
pub async fn categories(client: &ApiClient) -> Result<Vec<Category>> {
    client.get("/categories", None).await
}

/// Fetch one page of auction listings.
#[tracing::instrument(skip(client), fields(page = query.page))]
pub async fn auctions(client: &ApiClient, query: &CatalogQuery) -> Result<AuctionsPage> {
    let path = format!("/auctions?{}", query.query_string());
    let page: AuctionsPage = client.get(&path, None).await?;
    tracing::debug!(
        count = page.auctions.len(),
        pages = page.pages,
        "Auctions fetched"
    );
    Ok(page)
}

/// Fetch a single auction with full detail.
pub async fn auction(client: &ApiClient, id: i64) -> Result<AuctionDetail> {
    client.get(&format!("/auctions/{}", id), None).await
}
