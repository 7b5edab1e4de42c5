//! # Storage Layer
//!
//! Submitted artists and the favorites list are persisted through the
//! [`ArtistRepository`] trait, which the API layer receives by injection. The
//! directory pipeline and the validator never see storage, so swapping the
//! backing store (file, embedded database, remote API) touches nothing else.
//!
//! ## Contract
//!
//! - `load` returns the whole collection. Missing or unparseable content is
//!   "no data": it yields an empty list and never an error.
//! - `save` overwrites the whole collection.
//! - Mutations are read-modify-write of the full list. There is no locking;
//!   two writers race and the later one wins.
//!
//! ## Implementations
//!
//! - [`fs::FileRepository`]: JSON files in the data directory, written atomically.
//! - [`memory::InMemoryRepository`]: for tests, with write-failure simulation.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── submitted_artists.json   # Vec<Artist>
//! ├── favorite_artists.json    # Vec<String> of artist ids
//! └── config.json              # GigbookConfig
//! ```

use crate::error::Result;
use crate::model::Artist;
use serde::de::DeserializeOwned;
use tracing::warn;

pub mod fs;
pub mod memory;

pub trait ArtistRepository {
    /// Load all submitted artists. Never fails.
    fn load(&self) -> Vec<Artist>;

    /// Replace the stored collection.
    fn save(&mut self, artists: &[Artist]) -> Result<()>;

    /// Load favorite artist ids. Never fails.
    fn load_favorites(&self) -> Vec<String>;

    /// Replace the stored favorites.
    fn save_favorites(&mut self, ids: &[String]) -> Result<()>;
}

/// Parses a stored JSON list, treating malformed content as empty.
pub(crate) fn parse_list<T: DeserializeOwned>(content: &str, what: &str) -> Vec<T> {
    if content.trim().is_empty() {
        return Vec::new();
    }
    match serde_json::from_str(content) {
        Ok(items) => items,
        Err(e) => {
            warn!(error = %e, "ignoring unreadable {}", what);
            Vec::new()
        }
    }
}
