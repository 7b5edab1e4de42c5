use super::{parse_list, ArtistRepository};
use crate::error::{GigbookError, Result};
use crate::model::Artist;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use tracing::{debug, warn};

pub const ARTISTS_FILE: &str = "submitted_artists.json";
pub const FAVORITES_FILE: &str = "favorite_artists.json";

pub struct FileRepository {
    root: PathBuf,
}

impl FileRepository {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn artists_path(&self) -> PathBuf {
        self.root.join(ARTISTS_FILE)
    }

    pub fn favorites_path(&self) -> PathBuf {
        self.root.join(FAVORITES_FILE)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(GigbookError::Io)?;
        }
        Ok(())
    }

    fn read_or_empty(&self, path: &Path) -> String {
        if !path.exists() {
            return String::new();
        }
        match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "could not read stored data");
                String::new()
            }
        }
    }

    fn write_json<T: Serialize + ?Sized>(&self, file: &str, value: &T) -> Result<()> {
        self.ensure_dir()?;
        let target = self.root.join(file);
        let content = serde_json::to_string_pretty(value).map_err(GigbookError::Serialization)?;

        // Atomic write
        let tmp = self.root.join(format!(".{}.{}.tmp", file, process::id()));
        fs::write(&tmp, content).map_err(GigbookError::Io)?;
        fs::rename(&tmp, &target).map_err(GigbookError::Io)?;
        debug!(path = %target.display(), "wrote collection");
        Ok(())
    }
}

impl ArtistRepository for FileRepository {
    fn load(&self) -> Vec<Artist> {
        parse_list(&self.read_or_empty(&self.artists_path()), "submitted artists")
    }

    fn save(&mut self, artists: &[Artist]) -> Result<()> {
        self.write_json(ARTISTS_FILE, artists)
    }

    fn load_favorites(&self) -> Vec<String> {
        parse_list(&self.read_or_empty(&self.favorites_path()), "favorites")
    }

    fn save_favorites(&mut self, ids: &[String]) -> Result<()> {
        self.write_json(FAVORITES_FILE, ids)
    }
}
