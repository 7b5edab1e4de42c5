use crate::config::GigbookConfig;
use crate::directory::DirectoryPage;
use crate::error::{GigbookError, Result};
use crate::model::{Artist, Category, Location};
use crate::source::DataSource;
use crate::store::ArtistRepository;

pub mod browse;
pub mod config;
pub mod dashboard;
pub mod favorites;
pub mod lookups;
pub mod onboard;
pub mod review;
pub mod show;

pub use dashboard::DashboardStats;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_artists: Vec<Artist>,
    pub listed_artists: Vec<Artist>,
    pub directory: Option<DirectoryPage>,
    pub stats: Option<DashboardStats>,
    pub categories: Vec<Category>,
    pub locations: Vec<Location>,
    pub config: Option<GigbookConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_artists(mut self, artists: Vec<Artist>) -> Self {
        self.affected_artists = artists;
        self
    }

    pub fn with_listed_artists(mut self, artists: Vec<Artist>) -> Self {
        self.listed_artists = artists;
        self
    }

    pub fn with_directory(mut self, page: DirectoryPage) -> Self {
        self.directory = Some(page);
        self
    }

    pub fn with_stats(mut self, stats: DashboardStats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_categories(mut self, categories: Vec<Category>) -> Self {
        self.categories = categories;
        self
    }

    pub fn with_locations(mut self, locations: Vec<Location>) -> Self {
        self.locations = locations;
        self
    }

    pub fn with_config(mut self, config: GigbookConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// Catalog artists followed by approved submissions that do not shadow a
/// catalog id. This is the list the public directory shows.
pub(crate) fn directory_artists<D: DataSource, R: ArtistRepository>(
    source: &D,
    repo: &R,
) -> Result<(Vec<Artist>, Vec<Category>, Vec<Location>)> {
    let catalog = source.fetch()?;
    let mut artists = catalog.artists;
    let approved: Vec<Artist> = repo
        .load()
        .into_iter()
        .filter(|a| a.is_approved() && !artists.iter().any(|c| c.id == a.id))
        .collect();
    artists.extend(approved);
    Ok((artists, catalog.categories, catalog.locations))
}

/// Finds an artist by id, checking the catalog first and then submissions.
pub(crate) fn find_artist<D: DataSource, R: ArtistRepository>(
    source: &D,
    repo: &R,
    id: &str,
) -> Result<Artist> {
    match source.fetch_artist(id) {
        Ok(artist) => Ok(artist),
        Err(GigbookError::ArtistNotFound(_)) => repo
            .load()
            .into_iter()
            .find(|a| a.id == id)
            .ok_or_else(|| GigbookError::ArtistNotFound(id.to_string())),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MockDirectory;
    use crate::store::memory::InMemoryRepository;

    fn submission(id: &str, rating: f32) -> Artist {
        let mut a: Artist = serde_json::from_str(&format!(
            r#"{{"id":"{}","name":"Sub {}","category":["Band"],"languages":["English"]}}"#,
            id, id
        ))
        .unwrap();
        a.rating = Some(rating);
        a
    }

    #[test]
    fn directory_includes_only_approved_submissions() {
        let repo = InMemoryRepository::with_artists(vec![
            submission("100", 0.0),
            submission("101", 4.5),
            submission("1", 4.5),
        ]);
        let (artists, categories, _) = directory_artists(&MockDirectory::new(), &repo).unwrap();
        assert_eq!(artists.len(), 7);
        assert_eq!(artists.last().map(|a| a.id.as_str()), Some("101"));
        assert_eq!(artists.iter().filter(|a| a.id == "1").count(), 1);
        assert_eq!(categories.len(), 8);
    }

    #[test]
    fn find_artist_falls_back_to_submissions() {
        let repo = InMemoryRepository::with_artists(vec![submission("100", 0.0)]);
        let source = MockDirectory::new();
        assert_eq!(find_artist(&source, &repo, "3").unwrap().name, "Anita Desai");
        assert_eq!(find_artist(&source, &repo, "100").unwrap().name, "Sub 100");
        assert!(matches!(
            find_artist(&source, &repo, "nope"),
            Err(GigbookError::ArtistNotFound(_))
        ));
    }

    #[test]
    fn find_artist_surfaces_fetch_failures() {
        let repo = InMemoryRepository::new();
        let source = MockDirectory::new().failing("offline");
        assert!(matches!(
            find_artist(&source, &repo, "1"),
            Err(GigbookError::Fetch(_))
        ));
    }
}
