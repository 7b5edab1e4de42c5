use crate::commands::{directory_artists, CmdMessage, CmdResult};
use crate::directory::{DirectoryView, FilterState, SearchMode, SortKey};
use crate::error::Result;
use crate::source::DataSource;
use crate::store::ArtistRepository;

#[derive(Debug, Clone)]
pub struct BrowseQuery {
    pub filter: FilterState,
    pub sort: SortKey,
    pub page: usize,
    pub page_size: usize,
    pub search_mode: SearchMode,
}

impl Default for BrowseQuery {
    fn default() -> Self {
        Self {
            filter: FilterState::default(),
            sort: SortKey::default(),
            page: 1,
            page_size: crate::directory::DEFAULT_PAGE_SIZE,
            search_mode: SearchMode::default(),
        }
    }
}

pub fn run<D: DataSource, R: ArtistRepository>(
    source: &D,
    repo: &R,
    query: BrowseQuery,
) -> Result<CmdResult> {
    let (artists, categories, locations) = directory_artists(source, repo)?;

    let mut view = DirectoryView::new(query.page_size, query.search_mode);
    view.set_filter(query.filter);
    view.set_sort(query.sort);

    let mut result = CmdResult::default()
        .with_categories(categories)
        .with_locations(locations);

    if query.page != 1 && !view.go_to_page(query.page, &artists) {
        result.add_message(CmdMessage::warning(format!(
            "Page {} does not exist, showing page {}",
            query.page,
            view.page()
        )));
    }

    let rendered = view.render(&artists);
    if rendered.matched == 0 {
        result.add_message(CmdMessage::info(
            "No artists found. Try adjusting your filters or search terms to find more artists.",
        ));
        if rendered.filters_active {
            result.add_message(CmdMessage::info(
                "Current filters are too restrictive. Consider removing some filters.",
            ));
        }
    }

    Ok(result.with_directory(rendered))
}
