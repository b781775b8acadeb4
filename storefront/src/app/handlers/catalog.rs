//! # Catalog Handlers
//!
//! Loading of reference data and listing pages into the application state,
//! including the filter and sort re-fetch paths.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::app::state::AppState;
use crate::core::error::Result;
use crate::core::service::ApiService;
use crate::services::api::catalog::{CatalogQuery, SortOrder};
use crate::view::notifications::NotificationManager;

/// Fetch the category list into state. Reference data, loaded once per
/// bootstrap.
pub async fn load_categories<A>(
    api: &A,
    state: &Arc<RwLock<AppState>>,
    notifications: &NotificationManager,
) -> Result<()>
where
    A: ApiService + ?Sized,
{
    match api.categories().await {
        Ok(categories) => {
            tracing::debug!(count = categories.len(), "Categories loaded");
            state.write().catalog.categories = categories;
            Ok(())
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to load categories");
            notifications.error("Failed to load categories");
            Err(e)
        }
    }
}

/// Fetch one listings page into state, replacing the previous page
/// wholesale. The query is remembered so later refreshes keep the filters.
pub async fn load_auctions<A>(
    api: &A,
    state: &Arc<RwLock<AppState>>,
    notifications: &NotificationManager,
    query: CatalogQuery,
) -> Result<()>
where
    A: ApiService + ?Sized,
{
    match api.auctions(&query).await {
        Ok(page) => {
            let mut state = state.write();
            state.catalog.auctions = page.auctions;
            state.catalog.current_page = page.current_page;
            state.catalog.total_pages = page.pages;
            state.catalog.query = query;
            state.catalog.time_labels.clear();
            Ok(())
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to load auctions");
            notifications.error("Failed to load auctions");
            Err(e)
        }
    }
}

/// Re-fetch the current page with its remembered filters.
pub async fn refresh_auctions<A>(
    api: &A,
    state: &Arc<RwLock<AppState>>,
    notifications: &NotificationManager,
) -> Result<()>
where
    A: ApiService + ?Sized,
{
    let query = state.read().catalog.query.clone();
    load_auctions(api, state, notifications, query).await
}

/// Fetch another page of the current query, keeping its filters.
pub async fn go_to_page<A>(
    api: &A,
    state: &Arc<RwLock<AppState>>,
    notifications: &NotificationManager,
    page: u32,
) -> Result<()>
where
    A: ApiService + ?Sized,
{
    let query = state.read().catalog.query.with_page(page);
    load_auctions(api, state, notifications, query).await
}

/// Restart from page 1 with a category filter.
pub async fn filter_by_category<A>(
    api: &A,
    state: &Arc<RwLock<AppState>>,
    notifications: &NotificationManager,
    category_id: i64,
) -> Result<()>
where
    A: ApiService + ?Sized,
{
    let query = CatalogQuery {
        category_id: Some(category_id),
        ..CatalogQuery::default()
    };
    load_auctions(api, state, notifications, query).await
}

/// Restart from page 1 with a search term; an empty term clears the search.
pub async fn search<A>(
    api: &A,
    state: &Arc<RwLock<AppState>>,
    notifications: &NotificationManager,
    term: &str,
) -> Result<()>
where
    A: ApiService + ?Sized,
{
    let term = term.trim();
    let query = CatalogQuery {
        search: (!term.is_empty()).then(|| term.to_string()),
        ..CatalogQuery::default()
    };
    load_auctions(api, state, notifications, query).await
}

/// Restart from page 1 with a sort order.
pub async fn sort_auctions<A>(
    api: &A,
    state: &Arc<RwLock<AppState>>,
    notifications: &NotificationManager,
    order: SortOrder,
) -> Result<()>
where
    A: ApiService + ?Sized,
{
    let query = CatalogQuery {
        sort: Some(order),
        ..CatalogQuery::default()
    };
    load_auctions(api, state, notifications, query).await
}
