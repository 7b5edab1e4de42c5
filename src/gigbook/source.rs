//! # Directory data source
//!
//! The directory feed is read-only: one fetch returns the artists together with
//! the category and location lookups used to build filter options. A fetch
//! either succeeds whole or fails with a human-readable message.
//!
//! [`MockDirectory`] serves a fixed seed catalog after a configurable delay and
//! can be told to fail, which is how the CLI and tests exercise the error path.

use crate::error::{GigbookError, Result};
use crate::model::{Artist, Catalog, Category, Location};
use std::thread;
use std::time::Duration;
use tracing::debug;

pub const FETCH_FAILED: &str = "Failed to fetch data";

pub trait DataSource {
    fn fetch(&self) -> Result<Catalog>;

    fn fetch_artist(&self, id: &str) -> Result<Artist>;
}

#[derive(Debug, Clone, Default)]
pub struct MockDirectory {
    delay: Duration,
    failure: Option<String>,
}

impl MockDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Makes every fetch fail with `message`.
    pub fn failing(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(message.into());
        self
    }

    fn wait(&self) -> Result<()> {
        if !self.delay.is_zero() {
            debug!(delay_ms = self.delay.as_millis() as u64, "simulating fetch delay");
            thread::sleep(self.delay);
        }
        match &self.failure {
            Some(message) if message.trim().is_empty() => {
                Err(GigbookError::Fetch(FETCH_FAILED.to_string()))
            }
            Some(message) => Err(GigbookError::Fetch(message.clone())),
            None => Ok(()),
        }
    }
}

impl DataSource for MockDirectory {
    fn fetch(&self) -> Result<Catalog> {
        self.wait()?;
        Ok(Catalog {
            artists: seed_artists(),
            categories: seed_categories(),
            locations: seed_locations(),
        })
    }

    fn fetch_artist(&self, id: &str) -> Result<Artist> {
        self.wait()?;
        seed_artists()
            .into_iter()
            .find(|a| a.id == id)
            .ok_or_else(|| GigbookError::ArtistNotFound(id.to_string()))
    }
}

#[allow(clippy::too_many_arguments)]
fn seed(
    id: &str,
    name: &str,
    bio: &str,
    category: &[&str],
    languages: &[&str],
    fee_range: &str,
    location: &str,
    rating: f32,
    experience: &str,
    availability: bool,
) -> Artist {
    Artist {
        id: id.to_string(),
        name: name.to_string(),
        bio: bio.to_string(),
        category: category.iter().map(|s| s.to_string()).collect(),
        languages: languages.iter().map(|s| s.to_string()).collect(),
        fee_range: fee_range.to_string(),
        location: location.to_string(),
        profile_image: Some("/api/placeholder/300/400".to_string()),
        rating: Some(rating),
        experience: Some(experience.to_string()),
        availability,
        submitted_at: None,
    }
}

pub fn seed_artists() -> Vec<Artist> {
    vec![
        seed(
            "1",
            "Priya Sharma",
            "Classical Indian dancer with 15 years of experience in Bharatanatyam and Kathak. Performed at national and international stages.",
            &["Dancer", "Cultural Performer"],
            &["Hindi", "English", "Tamil"],
            "₹30,000 - ₹50,000",
            "Mumbai, Maharashtra",
            4.8,
            "15+ years",
            true,
        ),
        seed(
            "2",
            "Rajesh Kumar",
            "Professional DJ and music producer specializing in Bollywood, Electronic, and Fusion music for weddings and corporate events.",
            &["DJ", "Music Producer"],
            &["Hindi", "English", "Punjabi"],
            "₹15,000 - ₹30,000",
            "Delhi, NCR",
            4.6,
            "8+ years",
            true,
        ),
        seed(
            "3",
            "Anita Desai",
            "Motivational speaker and corporate trainer with expertise in leadership development and team building workshops.",
            &["Speaker", "Trainer"],
            &["English", "Hindi", "Gujarati"],
            "₹5,000 - ₹15,000",
            "Bangalore, Karnataka",
            4.9,
            "12+ years",
            false,
        ),
        seed(
            "4",
            "Arjun Singh",
            "Bollywood playback singer and live performer. Winner of multiple singing competitions and featured in regional films.",
            &["Singer", "Performer"],
            &["Hindi", "English", "Punjabi", "Haryanvi"],
            "₹50,000 - ₹1,00,000",
            "Chandigarh, Punjab",
            4.7,
            "10+ years",
            true,
        ),
        seed(
            "5",
            "Meera Nair",
            "Contemporary dance choreographer and performer specializing in fusion dance forms for modern events and shows.",
            &["Dancer", "Choreographer"],
            &["English", "Malayalam", "Tamil"],
            "₹30,000 - ₹50,000",
            "Kochi, Kerala",
            4.5,
            "7+ years",
            true,
        ),
        seed(
            "6",
            "Vikram Joshi",
            "Stand-up comedian and entertainment host with experience in corporate events, weddings, and private parties.",
            &["Comedian", "Host"],
            &["Hindi", "English", "Marathi"],
            "₹15,000 - ₹30,000",
            "Pune, Maharashtra",
            4.4,
            "5+ years",
            true,
        ),
    ]
}

pub fn seed_categories() -> Vec<Category> {
    [
        ("1", "Singer", "🎤", "Vocal performers and musicians"),
        ("2", "Dancer", "💃", "Classical and contemporary dancers"),
        ("3", "DJ", "🎧", "Music mixing and entertainment"),
        ("4", "Speaker", "🎯", "Motivational and keynote speakers"),
        ("5", "Comedian", "😄", "Stand-up and entertainment comedy"),
        ("6", "Host", "🎭", "Event hosting and anchoring"),
        ("7", "Cultural Performer", "🎨", "Traditional and cultural arts"),
        ("8", "Music Producer", "🎵", "Music production and arrangement"),
    ]
    .into_iter()
    .map(|(id, name, icon, description)| Category {
        id: id.to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
        description: description.to_string(),
    })
    .collect()
}

pub fn seed_locations() -> Vec<Location> {
    [
        ("1", "Mumbai", "Maharashtra"),
        ("2", "Delhi", "Delhi"),
        ("3", "Bangalore", "Karnataka"),
        ("4", "Chennai", "Tamil Nadu"),
        ("5", "Hyderabad", "Telangana"),
        ("6", "Pune", "Maharashtra"),
        ("7", "Kolkata", "West Bengal"),
        ("8", "Ahmedabad", "Gujarat"),
        ("9", "Jaipur", "Rajasthan"),
        ("10", "Kochi", "Kerala"),
    ]
    .into_iter()
    .map(|(id, city, state)| Location {
        id: id.to_string(),
        city: city.to_string(),
        state: state.to_string(),
        country: "India".to_string(),
    })
    .collect()
}
