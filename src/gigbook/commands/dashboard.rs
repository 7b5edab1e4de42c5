//! Submissions dashboard: the reviewer's table of onboarded artists.
//!
//! Stats always describe the whole stored collection; the search, category
//! and sort options only shape the table rows.

use crate::commands::{CmdMessage, CmdResult};
use crate::directory::{price_value, sort::compare_names};
use crate::error::Result;
use crate::model::Artist;
use crate::store::ArtistRepository;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TableSort {
    #[default]
    Name,
    Location,
    Fee,
}

impl TableSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            TableSort::Name => "name",
            TableSort::Location => "location",
            TableSort::Fee => "fee",
        }
    }
}

impl fmt::Display for TableSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TableSort {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(TableSort::Name),
            "location" => Ok(TableSort::Location),
            "fee" | "feerange" => Ok(TableSort::Fee),
            other => Err(format!(
                "Unknown sort field: {} (expected name, location or fee)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DashboardQuery {
    pub search: String,
    /// A category name, or `None`/`"all"` for every category.
    pub category: Option<String>,
    pub sort: TableSort,
    pub descending: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total: usize,
    pub pending_review: usize,
    pub approved: usize,
    /// Distinct categories across all submissions, in first-seen order.
    pub categories: Vec<String>,
}

impl DashboardStats {
    pub fn from_artists(artists: &[Artist]) -> Self {
        let approved = artists.iter().filter(|a| a.is_approved()).count();
        let mut categories: Vec<String> = Vec::new();
        for category in artists.iter().flat_map(|a| a.category.iter()) {
            if !categories.contains(category) {
                categories.push(category.clone());
            }
        }
        Self {
            total: artists.len(),
            pending_review: artists.len() - approved,
            approved,
            categories,
        }
    }
}

pub fn run<R: ArtistRepository>(repo: &R, query: &DashboardQuery) -> Result<CmdResult> {
    let artists = repo.load();
    let stats = DashboardStats::from_artists(&artists);

    let term = query.search.trim().to_lowercase();
    let category = query
        .category
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty() && !c.eq_ignore_ascii_case(ALL_CATEGORIES));

    let mut rows: Vec<Artist> = artists
        .into_iter()
        .filter(|a| {
            term.is_empty()
                || a.name.to_lowercase().contains(&term)
                || a.location.to_lowercase().contains(&term)
        })
        .filter(|a| category.is_none_or(|c| a.category.iter().any(|ac| ac == c)))
        .collect();

    rows.sort_by(|a, b| {
        let ord = compare_rows(a, b, query.sort);
        if query.descending {
            ord.reverse()
        } else {
            ord
        }
    });

    let mut result = CmdResult::default()
        .with_stats(stats)
        .with_listed_artists(rows);
    if result.listed_artists.is_empty() {
        result.add_message(CmdMessage::info("No artists found"));
    }
    Ok(result)
}

fn compare_rows(a: &Artist, b: &Artist, sort: TableSort) -> Ordering {
    match sort {
        TableSort::Name => compare_names(&a.name, &b.name),
        TableSort::Location => compare_names(&a.location, &b.location),
        TableSort::Fee => price_value(&a.fee_range).cmp(&price_value(&b.fee_range)),
    }
}
