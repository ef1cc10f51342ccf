//! Minimal console walkthrough of the client core.
//!
//! Points at the backend named by `NESTLING_API_URL` (default localhost:3000),
//! loads the baby list, and fetches badges for the first baby found.

use nestling_client::state::AppState;
use nestling_client::{ApiClient, ClientConfig, Services};
use tracing::{info, Level};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let config = ClientConfig::from_env();
    info!(base_url = %config.base_url, "connecting");
    let services = Services::new(ApiClient::with_config(config));
    let mut state = AppState::new();

    state.babies.fetch_babies(&services.babies).await;
    if let Some(message) = &state.babies.error {
        eprintln!("could not load babies: {message}");
        return;
    }
    println!("{} babies registered", state.babies.babies.len());

    if let Some(baby) = state.babies.babies.first() {
        let baby_id = baby.id.clone();
        state.badges.fetch_badges(&services.badges, &baby_id).await;
        match &state.badges.error {
            Some(message) => eprintln!("could not load badges: {message}"),
            None => println!(
                "{} has earned {} badges",
                baby.name,
                state.badges.baby_badges.len()
            ),
        }
    }
}
