//! Directory ordering. Every sort is stable, so ties keep their input order.
//! Fee sorts use `price_value`, the first number in the fee label.

use crate::model::Artist;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortKey {
    /// Keep the input order.
    #[default]
    #[serde(rename = "default")]
    Default,
    #[serde(rename = "name-asc")]
    NameAsc,
    #[serde(rename = "name-desc")]
    NameDesc,
    #[serde(rename = "price-asc")]
    PriceAsc,
    #[serde(rename = "price-desc")]
    PriceDesc,
    #[serde(rename = "rating-desc")]
    RatingDesc,
}

impl SortKey {
    pub const ALL: [SortKey; 6] = [
        SortKey::Default,
        SortKey::NameAsc,
        SortKey::NameDesc,
        SortKey::PriceAsc,
        SortKey::PriceDesc,
        SortKey::RatingDesc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Default => "default",
            SortKey::NameAsc => "name-asc",
            SortKey::NameDesc => "name-desc",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::RatingDesc => "rating-desc",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|key| key.as_str() == wanted)
            .ok_or_else(|| {
                let valid: Vec<_> = Self::ALL.iter().map(SortKey::as_str).collect();
                format!("Unknown sort key '{}' (expected one of: {})", s, valid.join(", "))
            })
    }
}

/// Lower bound of a fee label: the first run of digits (thousands separators
/// allowed) in the text. "₹15,000 - ₹30,000" gives 15000. Labels without a
/// number give 0.
pub fn price_value(fee_range: &str) -> u64 {
    let Some(start) = fee_range.find(|c: char| c.is_ascii_digit()) else {
        return 0;
    };
    fee_range[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == ',')
        .filter(char::is_ascii_digit)
        .collect::<String>()
        .parse()
        .unwrap_or(0)
}

/// Case-insensitive name ordering with a case-sensitive tie-break, so names
/// that differ only by case still order deterministically.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Returns a sorted copy; ties keep their relative input order.
pub fn sort_artists(artists: &[Artist], key: SortKey) -> Vec<Artist> {
    let mut sorted = artists.to_vec();
    match key {
        SortKey::Default => {}
        SortKey::NameAsc => sorted.sort_by(|a, b| compare_names(&a.name, &b.name)),
        SortKey::NameDesc => sorted.sort_by(|a, b| compare_names(&b.name, &a.name)),
        SortKey::PriceAsc => sorted.sort_by_key(|a| price_value(&a.fee_range)),
        SortKey::PriceDesc => {
            sorted.sort_by(|a, b| price_value(&b.fee_range).cmp(&price_value(&a.fee_range)))
        }
        SortKey::RatingDesc => {
            sorted.sort_by(|a, b| b.rating_or_zero().total_cmp(&a.rating_or_zero()))
        }
    }
    sorted
}
