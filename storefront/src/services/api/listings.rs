//! # Listing Creation Endpoints
//!
//! Auction creation and per-image upload for the sell flow.

use shared::{AuctionListing, CreateAuctionRequest, CreateAuctionResponse, UploadResponse};

use super::client::ApiClient;
use crate::app::state::SelectedImage;
use crate::core::error::Result;

/// Create a new auction record.
#[tracing::instrument(skip(client, token, request), fields(title = %request.title))]
pub async fn create_auction(
    client: &ApiClient,
    token: &str,
    request: &CreateAuctionRequest,
) -> Result<AuctionListing> {
    let response: CreateAuctionResponse = client.post("/auctions", request, Some(token)).await?;
    tracing::info!(auction_id = response.auction.id, "Auction created");
    Ok(response.auction)
}

/// Upload one listing image, tagged with its auction and primary flag.
pub async fn upload_image(
    client: &ApiClient,
    token: &str,
    image: &SelectedImage,
    auction_id: i64,
    is_primary: bool,
) -> Result<UploadResponse> {
    let fields = [
        ("auction_id", auction_id.to_string()),
        ("is_primary", is_primary.to_string()),
    ];
    client
        .upload_file(
            "/upload",
            &image.name,
            &image.content_type,
            image.data.clone(),
            &fields,
            Some(token),
        )
        .await
}
