//! # Authentication Endpoints
//!
//! Login, signup and logout against the backend session endpoints.

use shared::{AuthResponse, LoginRequest, SignupRequest};

use super::client::ApiClient;
use crate::core::error::Result;

/// Login with username and password.
#[tracing::instrument(skip(client, password), fields(username = %username))]
pub async fn login(client: &ApiClient, username: String, password: String) -> Result<AuthResponse> {
    tracing::info!("Attempting login");
    let request = LoginRequest { username, password };

    let response: AuthResponse = client.post("/login", &request, None).await?;
    tracing::info!(user = %response.user.username, "Login successful");
    Ok(response)
}

/// Register a new account.
#[tracing::instrument(skip(client, request), fields(username = %request.username))]
pub async fn signup(client: &ApiClient, request: SignupRequest) -> Result<AuthResponse> {
    let response: AuthResponse = client.post("/register", &request, None).await?;
    tracing::info!(user = %response.user.username, "Signup successful");
    Ok(response)
}

/// Invalidate the server-side session for the given credential.
pub async fn logout(client: &ApiClient, token: &str) -> Result<()> {
    let _: serde_json::Value = client
        .post("/logout", &serde_json::json!({}), Some(token))
        .await?;
    Ok(())
}
