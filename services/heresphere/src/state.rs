//! Application state shared across handlers

use stash::StashClient;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub stash_client: StashClient,
    /// Token appended to stream URLs handed to the player
    pub api_key: Option<String>,
}
