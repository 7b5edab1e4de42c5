//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. Every gigbook
//! operation goes through [`GigbookApi`], whatever the UI.
//!
//! ## Role and Responsibilities
//!
//! The facade:
//! - **Dispatches** to the matching command function
//! - **Supplies settings** from [`GigbookConfig`] (page size, search mode, delays)
//! - **Owns the submission gate**, so only one onboarding submission is in flight
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no business logic, no terminal I/O and no formatting.
//!
//! ## Generic Over Repository and Source
//!
//! `GigbookApi<R: ArtistRepository, D: DataSource>`:
//! - Production: `GigbookApi<FileRepository, MockDirectory>`
//! - Testing: `GigbookApi<InMemoryRepository, MockDirectory>` with zero delays

use crate::commands;
use crate::config::GigbookConfig;
use crate::directory::{FilterState, SearchMode, SortKey};
use crate::error::Result;
use crate::source::DataSource;
use crate::store::ArtistRepository;
use crate::validation::{OnboardForm, SubmissionGate};
use chrono::Utc;
use std::path::{Path, PathBuf};

pub struct GigbookApi<R: ArtistRepository, D: DataSource> {
    repo: R,
    source: D,
    config: GigbookConfig,
    gate: SubmissionGate,
    data_dir: PathBuf,
}

impl<R: ArtistRepository, D: DataSource> GigbookApi<R, D> {
    pub fn new(repo: R, source: D, config: GigbookConfig, data_dir: impl Into<PathBuf>) -> Self {
        Self {
            repo,
            source,
            config,
            gate: SubmissionGate::new(),
            data_dir: data_dir.into(),
        }
    }

    /// One page of the public directory. `mode` overrides the configured
    /// search mode when given.
    pub fn browse(
        &self,
        filter: FilterState,
        sort: SortKey,
        page: usize,
        mode: Option<SearchMode>,
    ) -> Result<commands::CmdResult> {
        let query = commands::browse::BrowseQuery {
            filter,
            sort,
            page,
            page_size: self.config.page_size,
            search_mode: mode.unwrap_or(self.config.search_mode),
        };
        commands::browse::run(&self.source, &self.repo, query)
    }

    pub fn show_artist(&self, id: &str) -> Result<commands::CmdResult> {
        commands::show::run(&self.source, &self.repo, id)
    }

    pub fn categories(&self) -> Result<commands::CmdResult> {
        commands::lookups::categories(&self.source)
    }

    pub fn locations(&self) -> Result<commands::CmdResult> {
        commands::lookups::locations(&self.source)
    }

    pub fn fee_ranges(&self) -> Vec<&'static str> {
        commands::lookups::fee_ranges()
    }

    pub fn onboard(&mut self, form: &OnboardForm) -> Result<commands::CmdResult> {
        commands::onboard::run(
            &mut self.repo,
            &self.gate,
            form,
            self.config.submit_delay(),
            Utc::now(),
        )
    }

    pub fn is_submitting(&self) -> bool {
        self.gate.is_submitting()
    }

    pub fn dashboard(&self, query: &DashboardQuery) -> Result<commands::CmdResult> {
        commands::dashboard::run(&self.repo, query)
    }

    pub fn approve(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::review::approve(&mut self.repo, id)
    }

    pub fn remove(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::review::remove(&mut self.repo, id)
    }

    pub fn toggle_favorite(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::favorites::toggle(&self.source, &mut self.repo, id)
    }

    pub fn favorites(&self) -> Result<commands::CmdResult> {
        commands::favorites::list(&self.source, &self.repo)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.data_dir, action)
    }

    pub fn settings(&self) -> &GigbookConfig {
        &self.config
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::browse::BrowseQuery;
pub use commands::dashboard::{DashboardQuery, TableSort};
pub use commands::{CmdMessage, CmdResult, DashboardStats, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GigbookError;
    use crate::source::MockDirectory;
    use crate::store::memory::InMemoryRepository;

    fn api() -> GigbookApi<InMemoryRepository, MockDirectory> {
        let config = GigbookConfig {
            page_size: 4,
            fetch_delay_ms: 0,
            submit_delay_ms: 0,
            ..GigbookConfig::default()
        };
        GigbookApi::new(InMemoryRepository::new(), MockDirectory::new(), config, "unused")
    }

    fn form() -> OnboardForm {
        OnboardForm {
            name: "Sana Qureshi".into(),
            bio: "Sufi and ghazal singer for intimate evening concerts.".into(),
            category: vec!["Singer".into()],
            languages: vec!["Urdu".into()],
            fee_range: "₹1,00,000+".into(),
            location: "Hyderabad, Telangana".into(),
            profile_image: None,
        }
    }

    #[test]
    fn browse_uses_configured_page_size() {
        let result = api()
            .browse(FilterState::new(), SortKey::Default, 1, None)
            .unwrap();
        let dir = result.directory.unwrap();
        assert_eq!(dir.page.page_size, 4);
        assert_eq!(dir.page.total_pages, 2);
    }

    #[test]
    fn browse_mode_override_applies() {
        let api = api();
        let filter = FilterState::new().with_search("punjabi");
        let broad = api
            .browse(filter.clone(), SortKey::Default, 1, None)
            .unwrap();
        assert_eq!(broad.directory.unwrap().matched, 2);
        let minimal = api
            .browse(filter, SortKey::Default, 1, Some(SearchMode::Minimal))
            .unwrap();
        assert_eq!(minimal.directory.unwrap().matched, 0);
    }

    #[test]
    fn onboard_then_approve_reaches_the_directory() {
        let mut api = api();
        let submitted = api.onboard(&form()).unwrap();
        let id = submitted.affected_artists[0].id.clone();
        assert!(!api.is_submitting());

        let before = api
            .browse(FilterState::new(), SortKey::Default, 1, None)
            .unwrap();
        assert_eq!(before.directory.unwrap().total_artists, 6);

        api.approve(&id).unwrap();
        let after = api
            .browse(FilterState::new(), SortKey::Default, 1, None)
            .unwrap();
        assert_eq!(after.directory.unwrap().total_artists, 7);

        let stats = api.dashboard(&DashboardQuery::default()).unwrap().stats.unwrap();
        assert_eq!(stats.approved, 1);

        api.remove(&id).unwrap();
        assert!(matches!(
            api.show_artist(&id),
            Err(GigbookError::ArtistNotFound(_))
        ));
    }

    #[test]
    fn favorites_round_through_the_facade() {
        let mut api = api();
        api.toggle_favorite("2").unwrap();
        let listed = api.favorites().unwrap().listed_artists;
        assert_eq!(listed[0].name, "Rajesh Kumar");
    }

    #[test]
    fn lookups_dispatch() {
        let api = api();
        assert_eq!(api.categories().unwrap().categories.len(), 8);
        assert_eq!(api.locations().unwrap().locations.len(), 10);
        assert_eq!(api.fee_ranges().len(), 5);
    }
}
