//! # API Client
//!
//! Main HTTP client for backend API communication.

use reqwest::header::AUTHORIZATION;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::ErrorResponse;

use crate::core::error::{AppError, Result};

/// Development backend address, used when no environment override is set.
const DEV_API_BASE_URL: &str = "http://localhost:5000/api";

/// Environment variable carrying the backend base URL.
const API_URL_ENV: &str = "AUCTIONHUB_API_URL";

/// Resolved client configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Resolve the base URL from the environment, falling back to the
    /// development default. Environment selection is an external input;
    /// the client never guesses from its surroundings.
    pub fn from_env() -> Self {
        let base_url = std::env::var(API_URL_ENV)
            .ok()
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEV_API_BASE_URL.to_string());
        Self { base_url }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEV_API_BASE_URL.to_string(),
        }
    }
}

/// HTTP client for communicating with the backend API server.
///
/// Maintains one connection pool for all requests. Bodies are JSON both
/// ways; when a credential is supplied it travels verbatim in the
/// `Authorization` header, no scheme prefix. Each operation makes exactly
/// one attempt, with no retry or coalescing.
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with default configuration.
    ///
    /// The client is configured with a 10 second timeout to prevent freezing.
    pub fn new(config: ApiConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: config.base_url,
        }
    }

    /// Resolve an endpoint path against the configured base address.
    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str, token: Option<&str>) -> Result<T> {
        let request = self.client.get(self.endpoint(path));
        execute(authorize(request, token)).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B, token: Option<&str>) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.client.post(self.endpoint(path)).json(body);
        execute(authorize(request, token)).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B, token: Option<&str>) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.client.put(self.endpoint(path)).json(body);
        execute(authorize(request, token)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str, token: Option<&str>) -> Result<T> {
        let request = self.client.delete(self.endpoint(path));
        execute(authorize(request, token)).await
    }

    /// Multipart upload: a single `file` part plus arbitrary string metadata
    /// fields, authorized the same way as the JSON calls.
    pub async fn upload_file<T: DeserializeOwned>(
        &self,
        path: &str,
        file_name: &str,
        content_type: &str,
        data: Vec<u8>,
        fields: &[(&str, String)],
        token: Option<&str>,
    ) -> Result<T> {
        let part = reqwest::multipart::Part::bytes(data)
            .file_name(file_name.to_string())
            .mime_str(content_type)
            .map_err(|e| AppError::Validation(format!("Invalid content type: {}", e)))?;

        let mut form = reqwest::multipart::Form::new().part("file", part);
        for (key, value) in fields {
            form = form.text(key.to_string(), value.clone());
        }

        let request = self.client.post(self.endpoint(path)).multipart(form);
        execute(authorize(request, token)).await
    }
}

/// Attach the raw stored credential, when present.
fn authorize(request: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    match token {
        Some(token) => request.header(AUTHORIZATION, token),
        None => request,
    }
}

/// Send the request and decode the JSON body. A non-success status yields
/// the server's `error` message when the envelope parses, otherwise the
/// numeric status.
async fn execute<T: DeserializeOwned>(request: RequestBuilder) -> Result<T> {
    let response = request
        .send()
        .await
        .map_err(|e| AppError::Network(format!("Network error: {}", e)))?;

    let status = response.status();
    if status.is_success() {
        response
            .json::<T>()
            .await
            .map_err(|e| AppError::Api(format!("Failed to parse response: {}", e)))
    } else {
        let message = response
            .json::<ErrorResponse>()
            .await
            .map(|body| body.error)
            .unwrap_or_else(|_| format!("HTTP {}", status.as_u16()));
        tracing::warn!(status = status.as_u16(), error = %message, "Request failed");
        Err(AppError::Api(message))
    }
}

// Implement ApiService for ApiClient by delegating to the endpoint modules.
#[async_trait::async_trait]
impl crate::core::service::ApiService for ApiClient {
    async fn login(&self, username: String, password: String) -> Result<shared::AuthResponse> {
        crate::services::api::auth::login(self, username, password).await
    }

    async fn signup(&self, request: shared::SignupRequest) -> Result<shared::AuthResponse> {
        crate::services::api::auth::signup(self, request).await
    }

    async fn logout(&self, token: &str) -> Result<()> {
        crate::services::api::auth::logout(self, token).await
    }

    async fn categories(&self) -> Result<Vec<shared::Category>> {
        crate::services::api::catalog::categories(self).await
    }

    async fn auctions(
        &self,
        query: &crate::services::api::catalog::CatalogQuery,
    ) -> Result<shared::AuctionsPage> {
        crate::services::api::catalog::auctions(self, query).await
    }

    async fn auction(&self, id: i64) -> Result<shared::AuctionDetail> {
        crate::services::api::catalog::auction(self, id).await
    }

    async fn place_bid(&self, request: &shared::BidRequest) -> Result<shared::AuctionListing> {
        crate::services::api::bids::place_bid(self, request).await
    }

    async fn create_auction(
        &self,
        token: &str,
        request: &shared::CreateAuctionRequest,
    ) -> Result<shared::AuctionListing> {
        crate::services::api::listings::create_auction(self, token, request).await
    }

    async fn upload_image(
        &self,
        token: &str,
        image: &crate::app::state::SelectedImage,
        auction_id: i64,
        is_primary: bool,
    ) -> Result<shared::UploadResponse> {
        crate::services::api::listings::upload_image(self, token, image, auction_id, is_primary)
            .await
    }
}
