//! # Auth Handlers
//!
//! Login, signup and logout orchestration: validate locally, call the
//! backend, persist the session pair, notify.

use shared::SignupRequest;

use crate::core::error::{AppError, Result};
use crate::core::service::ApiService;
use crate::session::SessionStore;
use crate::utils::validation;
use crate::view::notifications::NotificationManager;

/// Log in and persist the returned session.
pub async fn handle_login<A>(
    api: &A,
    session: &SessionStore,
    notifications: &NotificationManager,
    username: &str,
    password: &str,
) -> Result<()>
where
    A: ApiService + ?Sized,
{
    let check = validation::validate_login(username, password);
    if let Some(error) = check.error {
        notifications.warning(error.clone());
        return Err(AppError::Validation(error));
    }

    match api.login(username.to_string(), password.to_string()).await {
        Ok(response) => {
            session.save(response.token, response.user);
            notifications.success("Login successful");
            Ok(())
        }
        Err(e) => {
            notifications.error(e.user_message().to_string());
            Err(e)
        }
    }
}

/// Register a new account and persist the returned session.
pub async fn handle_signup<A>(
    api: &A,
    session: &SessionStore,
    notifications: &NotificationManager,
    request: SignupRequest,
    confirm_password: Option<&str>,
) -> Result<()>
where
    A: ApiService + ?Sized,
{
    let check = validation::validate_signup(&request, confirm_password);
    if let Some(error) = check.error {
        notifications.warning(error.clone());
        return Err(AppError::Validation(error));
    }

    match api.signup(request).await {
        Ok(response) => {
            session.save(response.token, response.user);
            notifications.success("Account created successfully!");
            Ok(())
        }
        Err(e) => {
            notifications.error(e.user_message().to_string());
            Err(e)
        }
    }
}

/// Invalidate the server session, then clear local state unconditionally.
/// The credential is gone locally even when the server call fails.
pub async fn handle_logout<A>(
    api: &A,
    session: &SessionStore,
    notifications: &NotificationManager,
) -> Result<()>
where
    A: ApiService + ?Sized,
{
    if let Some(credential) = session.credential() {
        if let Err(e) = api.logout(&credential).await {
            tracing::warn!(error = %e, "Logout request failed");
        }
    }
    session.clear();
    notifications.info("Logged out successfully");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::SelectedImage;
    use crate::core::clock::ManualClock;
    use crate::core::storage::MemoryStore;
    use crate::services::api::catalog::CatalogQuery;
    use async_trait::async_trait;
    use shared::{
        AuctionDetail, AuctionListing, AuctionsPage, AuthResponse, BidRequest, Category,
        CreateAuctionRequest, UploadResponse, UserInfo,
    };
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Mock backend that accepts any login and counts calls.
    #[derive(Default)]
    struct MockApi {
        login_calls: AtomicUsize,
        logout_fails: bool,
    }

    #[async_trait]
    impl ApiService for MockApi {
        async fn login(
            &self,
            username: String,
            _password: String,
        ) -> crate::core::error::Result<AuthResponse> {
            self.login_calls.fetch_add(1, Ordering::SeqCst);
            Ok(AuthResponse {
                token: "issued-token".to_string(),
                user: UserInfo {
                    id: 7,
                    username,
                    email: None,
                    is_admin: false,
                },
            })
        }

        async fn signup(
            &self,
            request: shared::SignupRequest,
        ) -> crate::core::error::Result<AuthResponse> {
            Ok(AuthResponse {
                token: "issued-token".to_string(),
                user: UserInfo {
                    id: 8,
                    username: request.username,
                    email: Some(request.email),
                    is_admin: false,
                },
            })
        }

        async fn logout(&self, _token: &str) -> crate::core::error::Result<()> {
            if self.logout_fails {
                Err(AppError::Network("Network error: connection refused".to_string()))
            } else {
                Ok(())
            }
        }

        async fn categories(&self) -> crate::core::error::Result<Vec<Category>> {
            Ok(Vec::new())
        }

        async fn auctions(
            &self,
            _query: &CatalogQuery,
        ) -> crate::core::error::Result<AuctionsPage> {
            Ok(AuctionsPage {
                auctions: Vec::new(),
                current_page: 1,
                pages: 1,
            })
        }

        async fn auction(&self, _id: i64) -> crate::core::error::Result<AuctionDetail> {
            Err(AppError::Api("not found".to_string()))
        }

        async fn place_bid(
            &self,
            _request: &BidRequest,
        ) -> crate::core::error::Result<AuctionListing> {
            Err(AppError::Api("unexpected".to_string()))
        }

        async fn create_auction(
            &self,
            _token: &str,
            _request: &CreateAuctionRequest,
        ) -> crate::core::error::Result<AuctionListing> {
            Err(AppError::Api("unexpected".to_string()))
        }

        async fn upload_image(
            &self,
            _token: &str,
            _image: &SelectedImage,
            _auction_id: i64,
            _is_primary: bool,
        ) -> crate::core::error::Result<UploadResponse> {
            Err(AppError::Api("unexpected".to_string()))
        }
    }

    fn fixture() -> (SessionStore, NotificationManager) {
        let store = Arc::new(MemoryStore::new());
        let clock = Arc::new(ManualClock::new(chrono::Utc::now()));
        (
            SessionStore::new(store),
            NotificationManager::new(clock),
        )
    }

    #[tokio::test]
    async fn test_login_saves_session() {
        let api = MockApi::default();
        let (session, notifications) = fixture();

        handle_login(&api, &session, &notifications, "alice", "secret1")
            .await
            .unwrap();

        assert!(session.is_authenticated());
        assert_eq!(session.credential().as_deref(), Some("issued-token"));
    }

    #[tokio::test]
    async fn test_login_rejects_empty_fields_without_network() {
        let api = MockApi::default();
        let (session, notifications) = fixture();

        let result = handle_login(&api, &session, &notifications, "alice", "").await;

        assert!(matches!(result, Err(AppError::Validation(_))));
        assert_eq!(api.login_calls.load(Ordering::SeqCst), 0);
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn test_logout_clears_session_even_when_request_fails() {
        let api = MockApi {
            logout_fails: true,
            ..MockApi::default()
        };
        let (session, notifications) = fixture();
        session.save(
            "token".to_string(),
            UserInfo {
                id: 1,
                username: "alice".to_string(),
                email: None,
                is_admin: false,
            },
        );

        handle_logout(&api, &session, &notifications).await.unwrap();
        assert!(!session.is_authenticated());
    }
}
