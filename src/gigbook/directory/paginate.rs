//! Page slicing and page-navigation state.
//!
//! Pages are 1-based. An empty list has zero pages and nothing is rendered.

use serde::Serialize;

pub const DEFAULT_PAGE_SIZE: usize = 12;

#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_items: usize,
    /// Zero-based offset of the first item of this page in the full list.
    pub start_index: usize,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// `(first, last, total)` for a "Showing first to last of total" line,
    /// 1-based and inclusive. `None` when the page holds nothing.
    pub fn summary(&self) -> Option<(usize, usize, usize)> {
        if self.items.is_empty() {
            return None;
        }
        Some((
            self.start_index + 1,
            self.start_index + self.items.len(),
            self.total_items,
        ))
    }
}

pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// Slices `items` into the requested page. Out of range pages yield no items.
pub fn paginate<T: Clone>(items: &[T], page_size: usize, page: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total = total_pages(items.len(), page_size);
    let start_index = page.saturating_sub(1).saturating_mul(page_size);
    let page_items = if page == 0 || start_index >= items.len() {
        Vec::new()
    } else {
        let end = (start_index + page_size).min(items.len());
        items[start_index..end].to_vec()
    };

    Page {
        items: page_items,
        page,
        page_size,
        total_pages: total,
        total_items: items.len(),
        start_index,
    }
}

/// Current-page state for a paged list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator {
    page: usize,
    page_size: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Paginator {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Moves to `page` if it exists. Requests outside `1..=total_pages` are
    /// ignored and the current page is kept. Returns whether the page moved.
    pub fn go_to(&mut self, page: usize, total_pages: usize) -> bool {
        if page < 1 || page > total_pages {
            return false;
        }
        self.page = page;
        true
    }

    pub fn next(&mut self, total_pages: usize) -> bool {
        self.go_to(self.page + 1, total_pages)
    }

    pub fn previous(&mut self, total_pages: usize) -> bool {
        match self.page.checked_sub(1) {
            Some(page) => self.go_to(page, total_pages),
            None => false,
        }
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }

    pub fn slice<T: Clone>(&self, items: &[T]) -> Page<T> {
        paginate(items, self.page_size, self.page)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "page", rename_all = "lowercase")]
pub enum PageButton {
    Page(usize),
    Ellipsis,
}

/// Page buttons for a pager: the first and last pages, the current page and its
/// neighbours. Every other run of pages collapses into a single ellipsis.
pub fn page_buttons(current: usize, total_pages: usize) -> Vec<PageButton> {
    let mut buttons = Vec::new();
    let mut in_gap = false;
    for page in 1..=total_pages {
        let visible = page == 1 || page == total_pages || page.abs_diff(current) <= 1;
        if visible {
            buttons.push(PageButton::Page(page));
            in_gap = false;
        } else if !in_gap {
            buttons.push(PageButton::Ellipsis);
            in_gap = true;
        }
    }
    buttons
}
