//! Stash library for the HereSphere bridge
//!
//! This crate talks to the Stash GraphQL API and turns what it returns into
//! values the player-facing service can use: the scene record itself and
//! the catalog of streams a player can choose from.

pub mod client;
pub mod error;
pub mod models;
pub mod stream;

pub use client::StashClient;
pub use error::{ResolutionError, StashError, StashResult};
pub use models::SceneRecord;
pub use stream::{ResolutionOrder, Source, Stream, StreamName, StreamOptions, get_streams};
