use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An artist record, either from the directory catalog or from an onboarding
/// submission persisted by a repository.
///
/// Serialized in camelCase so stored collections keep the same shape as the
/// directory feed (`feeRange`, `profileImage`, `submittedAt`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub category: Vec<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub fee_range: String,
    #[serde(default)]
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
    #[serde(default = "default_availability")]
    pub availability: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<DateTime<Utc>>,
}

fn default_availability() -> bool {
    true
}

impl Artist {
    /// Rating used for ordering and review status; a missing rating counts as 0.
    pub fn rating_or_zero(&self) -> f32 {
        self.rating.unwrap_or(0.0)
    }

    /// Submissions stay pending until a reviewer gives them a rating.
    pub fn is_approved(&self) -> bool {
        self.rating_or_zero() > 0.0
    }
}

/// The fixed, ordered set of price bands an artist can quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FeeRange {
    Band5kTo15k,
    Band15kTo30k,
    Band30kTo50k,
    Band50kTo1L,
    Band1LPlus,
}

impl FeeRange {
    pub const ALL: [FeeRange; 5] = [
        FeeRange::Band5kTo15k,
        FeeRange::Band15kTo30k,
        FeeRange::Band30kTo50k,
        FeeRange::Band50kTo1L,
        FeeRange::Band1LPlus,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FeeRange::Band5kTo15k => "₹5,000 - ₹15,000",
            FeeRange::Band15kTo30k => "₹15,000 - ₹30,000",
            FeeRange::Band30kTo50k => "₹30,000 - ₹50,000",
            FeeRange::Band50kTo1L => "₹50,000 - ₹1,00,000",
            FeeRange::Band1LPlus => "₹1,00,000+",
        }
    }

    pub fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(FeeRange::label).collect()
    }
}

impl fmt::Display for FeeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FeeRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|band| band.label() == wanted)
            .ok_or_else(|| format!("Unknown fee range: {}", s))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    pub city: String,
    pub state: String,
    pub country: String,
}

impl Location {
    pub fn label(&self) -> String {
        format!("{}, {}", self.city, self.state)
    }
}

/// Everything the directory feed returns in one fetch.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub artists: Vec<Artist>,
    pub categories: Vec<Category>,
    pub locations: Vec<Location>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fee_range_parses_exact_labels_only() {
        assert_eq!(
            "₹15,000 - ₹30,000".parse::<FeeRange>(),
            Ok(FeeRange::Band15kTo30k)
        );
        assert!("15,000 - 30,000".parse::<FeeRange>().is_err());
        assert!("".parse::<FeeRange>().is_err());
    }

    #[test]
    fn fee_ranges_are_ordered() {
        let labels = FeeRange::labels();
        assert_eq!(labels.first(), Some(&"₹5,000 - ₹15,000"));
        assert_eq!(labels.last(), Some(&"₹1,00,000+"));
        assert!(FeeRange::Band5kTo15k < FeeRange::Band1LPlus);
    }

    #[test]
    fn missing_fields_deserialize_to_defaults() {
        let artist: Artist = serde_json::from_str(r#"{"id":"7","name":"Solo"}"#).unwrap();
        assert!(artist.category.is_empty());
        assert!(artist.languages.is_empty());
        assert!(artist.availability);
        assert_eq!(artist.rating_or_zero(), 0.0);
        assert!(!artist.is_approved());
    }

    #[test]
    fn serializes_in_camel_case() {
        let artist = Artist {
            id: "1".into(),
            name: "A".into(),
            bio: String::new(),
            category: vec![],
            languages: vec![],
            fee_range: "₹1,00,000+".into(),
            location: String::new(),
            profile_image: None,
            rating: Some(4.5),
            experience: None,
            availability: false,
            submitted_at: None,
        };
        let json = serde_json::to_string(&artist).unwrap();
        assert!(json.contains("\"feeRange\""));
        assert!(!json.contains("profileImage"));
    }
}
