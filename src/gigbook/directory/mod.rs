//! # Directory pipeline
//!
//! The artist directory is a three stage pipeline over an in-memory list:
//!
//! ```text
//! artists ──► filter ──► sort ──► paginate ──► DirectoryPage
//! ```
//!
//! Each stage is a pure function in its own module ([`filter`], [`sort`],
//! [`paginate`]). [`DirectoryView`] holds the user-facing state (filters, sort
//! key, current page) and enforces the one rule that ties the stages together:
//! changing the filters or the sort key sends the view back to page 1.

pub mod filter;
pub mod paginate;
pub mod sort;

pub use filter::{filter_artists, matches, FilterField, FilterState, SearchMode};
pub use paginate::{page_buttons, paginate, Page, PageButton, Paginator, DEFAULT_PAGE_SIZE};
pub use sort::{price_value, sort_artists, SortKey};

use crate::model::Artist;
use tracing::debug;

/// One rendered page of the directory, with the counts the results header needs.
#[derive(Debug, Clone)]
pub struct DirectoryPage {
    pub page: Page<Artist>,
    /// Size of the unfiltered input.
    pub total_artists: usize,
    /// Artists left after filtering.
    pub matched: usize,
    pub buttons: Vec<PageButton>,
    pub filters_active: bool,
}

impl DirectoryPage {
    pub fn is_filtered(&self) -> bool {
        self.matched != self.total_artists
    }
}

#[derive(Debug, Clone)]
pub struct DirectoryView {
    filter: FilterState,
    sort: SortKey,
    pager: Paginator,
    mode: SearchMode,
}

impl Default for DirectoryView {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE, SearchMode::default())
    }
}

impl DirectoryView {
    pub fn new(page_size: usize, mode: SearchMode) -> Self {
        Self {
            filter: FilterState::default(),
            sort: SortKey::default(),
            pager: Paginator::new(page_size),
            mode,
        }
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort
    }

    pub fn page(&self) -> usize {
        self.pager.page()
    }

    pub fn search_mode(&self) -> SearchMode {
        self.mode
    }

    pub fn set_filter(&mut self, filter: FilterState) {
        self.filter = filter;
        self.pager.reset();
    }

    /// Edits the filters in place; the view returns to page 1 afterwards.
    pub fn update_filter(&mut self, edit: impl FnOnce(&mut FilterState)) {
        edit(&mut self.filter);
        self.pager.reset();
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
        self.pager.reset();
    }

    /// Requests a page of the current result set. Pages outside the result set
    /// are ignored.
    pub fn go_to_page(&mut self, page: usize, artists: &[Artist]) -> bool {
        let matched = filter_artists(artists, &self.filter, self.mode).len();
        let total = paginate::total_pages(matched, self.pager.page_size());
        self.pager.go_to(page, total)
    }

    pub fn render(&self, artists: &[Artist]) -> DirectoryPage {
        let filtered = filter_artists(artists, &self.filter, self.mode);
        let sorted = sort_artists(&filtered, self.sort);
        let page = self.pager.slice(&sorted);
        debug!(
            total = artists.len(),
            matched = sorted.len(),
            page = page.page,
            sort = %self.sort,
            "rendered directory page"
        );

        DirectoryPage {
            buttons: page_buttons(page.page, page.total_pages),
            total_artists: artists.len(),
            matched: sorted.len(),
            filters_active: !self.filter.is_empty(),
            page,
        }
    }
}
