use super::ArtistRepository;
use crate::error::{GigbookError, Result};
use crate::model::Artist;

/// In-memory repository for tests. Nothing survives the process.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    artists: Vec<Artist>,
    favorites: Vec<String>,
    simulate_write_error: bool,
    writes: usize,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_artists(artists: Vec<Artist>) -> Self {
        Self {
            artists,
            ..Self::default()
        }
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }

    /// Number of successful writes, artists and favorites combined.
    pub fn writes(&self) -> usize {
        self.writes
    }

    fn check_writable(&self) -> Result<()> {
        if self.simulate_write_error {
            return Err(GigbookError::Store("Simulated write error".to_string()));
        }
        Ok(())
    }
}

impl ArtistRepository for InMemoryRepository {
    fn load(&self) -> Vec<Artist> {
        self.artists.clone()
    }

    fn save(&mut self, artists: &[Artist]) -> Result<()> {
        self.check_writable()?;
        self.artists = artists.to_vec();
        self.writes += 1;
        Ok(())
    }

    fn load_favorites(&self) -> Vec<String> {
        self.favorites.clone()
    }

    fn save_favorites(&mut self, ids: &[String]) -> Result<()> {
        self.check_writable()?;
        self.favorites = ids.to_vec();
        self.writes += 1;
        Ok(())
    }
}
