//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and modularity.

use async_trait::async_trait;
use shared::{
    AuctionDetail, AuctionListing, AuctionsPage, AuthResponse, BidRequest, Category,
    CreateAuctionRequest, SignupRequest, UploadResponse,
};

use crate::app::state::SelectedImage;
use crate::core::error::Result;
use crate::services::api::catalog::CatalogQuery;

/// Backend API operations used by the workflows.
///
/// This trait allows for dependency injection and mocking in tests; the bid
/// and authoring workflows only ever talk to the backend through it.
#[async_trait]
pub trait ApiService: Send + Sync {
    /// Login with username and password
    async fn login(&self, username: String, password: String) -> Result<AuthResponse>;

    /// Register a new account
    async fn signup(&self, request: SignupRequest) -> Result<AuthResponse>;

    /// Invalidate the server-side session for a credential
    async fn logout(&self, token: &str) -> Result<()>;

    /// Fetch the category reference list
    async fn categories(&self) -> Result<Vec<Category>>;

    /// Fetch one page of auction listings
    async fn auctions(&self, query: &CatalogQuery) -> Result<AuctionsPage>;

    /// Fetch a single auction with full detail
    async fn auction(&self, id: i64) -> Result<AuctionDetail>;

    /// Submit a bid; returns the updated listing
    async fn place_bid(&self, request: &BidRequest) -> Result<AuctionListing>;

    /// Create a new auction record
    async fn create_auction(
        &self,
        token: &str,
        request: &CreateAuctionRequest,
    ) -> Result<AuctionListing>;

    /// Upload one listing image, tagged with its auction and primary flag
    async fn upload_image(
        &self,
        token: &str,
        image: &SelectedImage,
        auction_id: i64,
        is_primary: bool,
    ) -> Result<UploadResponse>;
}
