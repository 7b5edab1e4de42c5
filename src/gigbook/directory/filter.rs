//! Directory filtering.
//!
//! An artist is kept when it passes every criterion of the [`FilterState`]
//! (AND logic). Each criterion that has nothing selected passes everything, so
//! an empty filter returns the input list unchanged.

use crate::model::Artist;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which artist fields the free-text search looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// name, bio, location, categories and languages
    #[default]
    Broad,
    /// name and bio only
    Minimal,
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchMode::Broad => f.write_str("broad"),
            SearchMode::Minimal => f.write_str("minimal"),
        }
    }
}

impl FromStr for SearchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "broad" => Ok(SearchMode::Broad),
            "minimal" => Ok(SearchMode::Minimal),
            other => Err(format!("Unknown search mode: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Category,
    Location,
    PriceRange,
    SearchTerm,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    pub category: Vec<String>,
    pub location: Vec<String>,
    pub price_range: Vec<String>,
    pub search_term: String,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.category = categories.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_locations<I, S>(mut self, locations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.location = locations.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_price_ranges<I, S>(mut self, ranges: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.price_range = ranges.into_iter().map(Into::into).collect();
        self
    }

    fn has_search(&self) -> bool {
        !self.search_term.trim().is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    /// Number of active chips: one per selected value, plus one for a search term.
    pub fn active_count(&self) -> usize {
        self.category.len()
            + self.location.len()
            + self.price_range.len()
            + usize::from(self.has_search())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn toggle_category(&mut self, value: &str) {
        toggle(&mut self.category, value);
    }

    pub fn toggle_location(&mut self, value: &str) {
        toggle(&mut self.location, value);
    }

    pub fn toggle_price_range(&mut self, value: &str) {
        toggle(&mut self.price_range, value);
    }

    /// Removes a single active chip. For the search term, `value` is ignored.
    pub fn remove(&mut self, field: FilterField, value: &str) {
        match field {
            FilterField::Category => self.category.retain(|v| v != value),
            FilterField::Location => self.location.retain(|v| v != value),
            FilterField::PriceRange => self.price_range.retain(|v| v != value),
            FilterField::SearchTerm => self.search_term.clear(),
        }
    }
}

fn toggle(values: &mut Vec<String>, value: &str) {
    if let Some(pos) = values.iter().position(|v| v == value) {
        values.remove(pos);
    } else {
        values.push(value.to_string());
    }
}

pub fn matches(artist: &Artist, filter: &FilterState, mode: SearchMode) -> bool {
    matches_search(artist, &filter.search_term, mode)
        && matches_category(artist, &filter.category)
        && matches_location(artist, &filter.location)
        && matches_price(artist, &filter.price_range)
}

pub fn filter_artists(artists: &[Artist], filter: &FilterState, mode: SearchMode) -> Vec<Artist> {
    if filter.is_empty() {
        return artists.to_vec();
    }
    artists
        .iter()
        .filter(|a| matches(a, filter, mode))
        .cloned()
        .collect()
}

fn matches_search(artist: &Artist, term: &str, mode: SearchMode) -> bool {
    if term.trim().is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    let hit = |s: &str| s.to_lowercase().contains(&needle);

    if hit(&artist.name) || hit(&artist.bio) {
        return true;
    }
    match mode {
        SearchMode::Minimal => false,
        SearchMode::Broad => {
            hit(&artist.location)
                || artist.category.iter().any(|c| hit(c))
                || artist.languages.iter().any(|l| hit(l))
        }
    }
}

fn matches_category(artist: &Artist, selected: &[String]) -> bool {
    selected.is_empty() || artist.category.iter().any(|c| selected.contains(c))
}

fn matches_location(artist: &Artist, selected: &[String]) -> bool {
    if selected.is_empty() {
        return true;
    }
    let location = artist.location.to_lowercase();
    selected
        .iter()
        .any(|loc| location.contains(&loc.to_lowercase()))
}

fn matches_price(artist: &Artist, selected: &[String]) -> bool {
    selected.is_empty() || selected.iter().any(|r| *r == artist.fee_range)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::seed_artists;

    fn ids(artists: &[Artist]) -> Vec<&str> {
        artists.iter().map(|a| a.id.as_str()).collect()
    }

    #[test]
    fn empty_filter_is_identity() {
        let artists = seed_artists();
        let filtered = filter_artists(&artists, &FilterState::default(), SearchMode::Broad);
        assert_eq!(filtered, artists);
    }

    #[test]
    fn blank_search_term_is_ignored() {
        let artists = seed_artists();
        let filter = FilterState::new().with_search("   ");
        assert!(filter.is_empty());
        assert_eq!(
            filter_artists(&artists, &filter, SearchMode::Broad).len(),
            artists.len()
        );
    }

    #[test]
    fn search_is_case_insensitive() {
        let artists = seed_artists();
        let filter = FilterState::new().with_search("PRIYA");
        assert_eq!(ids(&filter_artists(&artists, &filter, SearchMode::Broad)), vec!["1"]);
    }

    #[test]
    fn broad_search_checks_tags_and_location_minimal_does_not() {
        let artists = seed_artists();
        let by_language = FilterState::new().with_search("haryanvi");
        assert_eq!(
            ids(&filter_artists(&artists, &by_language, SearchMode::Broad)),
            vec!["4"]
        );
        assert!(filter_artists(&artists, &by_language, SearchMode::Minimal).is_empty());

        let by_location = FilterState::new().with_search("kochi");
        assert_eq!(
            ids(&filter_artists(&artists, &by_location, SearchMode::Broad)),
            vec!["5"]
        );
        assert!(filter_artists(&artists, &by_location, SearchMode::Minimal).is_empty());
    }

    #[test]
    fn category_requires_intersection() {
        let artists = seed_artists();
        let filter = FilterState::new().with_categories(["Dancer", "Comedian"]);
        assert_eq!(
            ids(&filter_artists(&artists, &filter, SearchMode::Broad)),
            vec!["1", "5", "6"]
        );
    }

    #[test]
    fn category_match_is_exact() {
        let artists = seed_artists();
        let filter = FilterState::new().with_categories(["dancer"]);
        assert!(filter_artists(&artists, &filter, SearchMode::Broad).is_empty());
    }

    #[test]
    fn location_is_substring_match() {
        let artists = seed_artists();
        let filter = FilterState::new().with_locations(["maharashtra"]);
        assert_eq!(
            ids(&filter_artists(&artists, &filter, SearchMode::Broad)),
            vec!["1", "6"]
        );
    }

    #[test]
    fn price_range_is_exact_label_match() {
        let artists = seed_artists();
        let filter = FilterState::new().with_price_ranges(["₹15,000 - ₹30,000"]);
        assert_eq!(
            ids(&filter_artists(&artists, &filter, SearchMode::Broad)),
            vec!["2", "6"]
        );

        let partial = FilterState::new().with_price_ranges(["15,000"]);
        assert!(filter_artists(&artists, &partial, SearchMode::Broad).is_empty());
    }

    #[test]
    fn criteria_are_combined_with_and() {
        let artists = seed_artists();
        let filter = FilterState::new()
            .with_categories(["Dancer"])
            .with_locations(["Kerala"]);
        assert_eq!(ids(&filter_artists(&artists, &filter, SearchMode::Broad)), vec!["5"]);
    }

    #[test]
    fn adding_criteria_never_grows_the_result() {
        let artists = seed_artists();
        let base = FilterState::new().with_search("e");
        let narrowed = base.clone().with_categories(["Singer"]);
        let wide = filter_artists(&artists, &base, SearchMode::Broad);
        let narrow = filter_artists(&artists, &narrowed, SearchMode::Broad);
        assert!(narrow.len() <= wide.len());
        assert!(narrow.iter().all(|a| wide.contains(a)));
    }

    #[test]
    fn missing_tag_lists_never_match_selection() {
        let artist: Artist = serde_json::from_str(r#"{"id":"x","name":"Bare"}"#).unwrap();
        let filter = FilterState::new().with_categories(["Singer"]);
        assert!(!matches(&artist, &filter, SearchMode::Broad));
        assert!(matches(&artist, &FilterState::default(), SearchMode::Broad));
    }

    #[test]
    fn active_count_and_chip_removal() {
        let mut filter = FilterState::new()
            .with_search("dj")
            .with_categories(["DJ", "Singer"])
            .with_price_ranges(["₹1,00,000+"]);
        assert_eq!(filter.active_count(), 4);

        filter.remove(FilterField::Category, "Singer");
        filter.remove(FilterField::SearchTerm, "");
        assert_eq!(filter.category, vec!["DJ"]);
        assert!(filter.search_term.is_empty());
        assert_eq!(filter.active_count(), 2);

        filter.toggle_price_range("₹1,00,000+");
        filter.toggle_location("Pune");
        assert!(filter.price_range.is_empty());
        assert_eq!(filter.location, vec!["Pune"]);

        filter.clear();
        assert!(filter.is_empty());
    }
}
