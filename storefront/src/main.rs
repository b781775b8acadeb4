use std::sync::Arc;

use storefront::app::tasks::countdown;
use storefront::app::App;
use storefront::core::storage::FileStore;
use storefront::services::api::ApiConfig;
use storefront::view::listing::ListingCard;
use storefront::view::pagination::{pagination_controls, PageControl};
use tracing_subscriber::EnvFilter;

/// Durable store next to the binary, holding the session and any listing
/// draft between runs.
const STORE_PATH: &str = "./auctionhub-store.json";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let store = Arc::new(FileStore::open(STORE_PATH));
    let app = App::new(ApiConfig::from_env(), store);

    if let Some(profile) = app.session.profile() {
        println!("Welcome back, {}!", profile.username);
    }

    app.bootstrap().await;

    render_catalog(&app);

    // Let the countdown refresh labels a couple of times before exiting.
    let ticker = tokio::spawn(countdown::run(app.state.clone(), app.clock.clone()));
    tokio::time::sleep(std::time::Duration::from_secs(3)).await;
    ticker.abort();

    let state = app.state.read();
    if !state.catalog.time_labels.is_empty() {
        println!("\nCountdowns:");
        for auction in &state.catalog.auctions {
            if let Some(label) = state.catalog.time_labels.get(&auction.id) {
                println!("  {} - {}", auction.title, label);
            }
        }
    }
    drop(state);

    for note in app.notifications.visible() {
        println!("! {}", note.message);
    }
}

fn render_catalog(app: &App) {
    let now = app.clock.now();
    let state = app.state.read();

    if !state.catalog.categories.is_empty() {
        let names: Vec<&str> = state
            .catalog
            .categories
            .iter()
            .map(|category| category.name.as_str())
            .collect();
        println!("Categories: {}", names.join(", "));
    }

    if state.catalog.auctions.is_empty() {
        println!("No active auctions at the moment.");
        return;
    }

    println!("\nLive Auctions:");
    for listing in &state.catalog.auctions {
        let card = ListingCard::from_listing(listing, now);
        println!(
            "[{}] {} - {} ({}) ends in {}",
            card.status_label, card.title, card.price_label, card.bid_count_label,
            card.time_remaining
        );
        println!("      {}", card.description);
    }

    let controls = pagination_controls(state.catalog.current_page, state.catalog.total_pages);
    if !controls.is_empty() {
        let rendered: Vec<String> = controls
            .iter()
            .map(|control| match control {
                PageControl::Previous(_) => "Previous".to_string(),
                PageControl::Page { number, current } => {
                    if *current {
                        format!("[{}]", number)
                    } else {
                        number.to_string()
                    }
                }
                PageControl::Next(_) => "Next".to_string(),
            })
            .collect();
        println!("\nPages: {}", rendered.join(" "));
    }
}
