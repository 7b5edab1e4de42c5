//! Onboarding form validation.
//!
//! Validation is eager: every field is checked on each attempt and each invalid
//! field reports exactly one message, in form order. A form with no field errors
//! becomes a [`ValidatedSubmission`], which is the only thing that can be turned
//! into a persisted [`Artist`].
//!
//! | Field | Rule |
//! |-------|------|
//! | name | required, 2 to 50 characters |
//! | bio | required, 20 to 500 characters |
//! | category | at least one entry |
//! | languages | at least one entry |
//! | fee range | required, one of [`FeeRange`] |
//! | location | required, at least 3 characters |
//!
//! Surrounding whitespace is trimmed before checking, so a whitespace-only
//! value counts as missing.

use crate::error::{GigbookError, Result};
use crate::model::{Artist, FeeRange};
use chrono::{DateTime, Utc};
use std::cell::Cell;
use std::fmt;

pub const NAME_MIN: usize = 2;
pub const NAME_MAX: usize = 50;
pub const BIO_MIN: usize = 20;
pub const BIO_MAX: usize = 500;
pub const LOCATION_MIN: usize = 3;

/// Experience label given to freshly onboarded artists.
pub const NEW_ARTIST_EXPERIENCE: &str = "New";

/// Raw onboarding input, exactly as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OnboardForm {
    pub name: String,
    pub bio: String,
    pub category: Vec<String>,
    pub languages: Vec<String>,
    pub fee_range: String,
    pub location: String,
    pub profile_image: Option<String>,
}

/// Form fields that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedSubmission {
    pub name: String,
    pub bio: String,
    pub category: Vec<String>,
    pub languages: Vec<String>,
    pub fee_range: FeeRange,
    pub location: String,
    pub profile_image: Option<String>,
}

impl ValidatedSubmission {
    /// Maps validated fields onto a new artist record with onboarding defaults.
    pub fn into_artist(self, id: String, submitted_at: DateTime<Utc>) -> Artist {
        Artist {
            id,
            name: self.name,
            bio: self.bio,
            category: self.category,
            languages: self.languages,
            fee_range: self.fee_range.label().to_string(),
            location: self.location,
            profile_image: self.profile_image,
            rating: Some(0.0),
            experience: Some(NEW_ARTIST_EXPERIENCE.to_string()),
            availability: true,
            submitted_at: Some(submitted_at),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Bio,
    Category,
    Languages,
    FeeRange,
    Location,
}

impl FormField {
    pub fn key(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Bio => "bio",
            FormField::Category => "category",
            FormField::Languages => "languages",
            FormField::FeeRange => "feeRange",
            FormField::Location => "location",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: FormField,
    pub message: String,
}

/// Per-field error messages, in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: Vec<FieldError>,
}

impl FieldErrors {
    pub fn push(&mut self, field: FormField, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn has(&self, field: FormField) -> bool {
        self.get(field).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect::<Vec<_>>()
            .join("; ");
        f.write_str(&joined)
    }
}

pub fn validate(form: &OnboardForm) -> std::result::Result<ValidatedSubmission, FieldErrors> {
    let mut errors = FieldErrors::default();

    let name = form.name.trim();
    if let Some(message) = check_length(
        name,
        "Artist name is required",
        NAME_MIN,
        Some(NAME_MAX),
        "Name",
    ) {
        errors.push(FormField::Name, message);
    }

    let bio = form.bio.trim();
    if let Some(message) = check_length(bio, "Bio is required", BIO_MIN, Some(BIO_MAX), "Bio") {
        errors.push(FormField::Bio, message);
    }

    let category = clean_list(&form.category);
    if category.is_empty() {
        errors.push(FormField::Category, "Please select at least one category");
    }

    let languages = clean_list(&form.languages);
    if languages.is_empty() {
        errors.push(FormField::Languages, "Please select at least one language");
    }

    let fee_range = if form.fee_range.trim().is_empty() {
        errors.push(FormField::FeeRange, "Fee range is required");
        None
    } else {
        match form.fee_range.parse::<FeeRange>() {
            Ok(band) => Some(band),
            Err(_) => {
                errors.push(FormField::FeeRange, "Please select a valid fee range");
                None
            }
        }
    };

    let location = form.location.trim();
    if let Some(message) = check_length(
        location,
        "Location is required",
        LOCATION_MIN,
        None,
        "Location",
    ) {
        errors.push(FormField::Location, message);
    }

    match fee_range {
        Some(fee_range) if errors.is_empty() => Ok(ValidatedSubmission {
            name: name.to_string(),
            bio: bio.to_string(),
            category,
            languages,
            fee_range,
            location: location.to_string(),
            profile_image: form
                .profile_image
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
        }),
        _ => Err(errors),
    }
}

fn check_length(
    value: &str,
    required: &str,
    min: usize,
    max: Option<usize>,
    label: &str,
) -> Option<String> {
    if value.is_empty() {
        return Some(required.to_string());
    }
    let len = value.chars().count();
    if len < min {
        return Some(format!("{} must be at least {} characters", label, min));
    }
    match max {
        Some(max) if len > max => Some(format!("{} must not exceed {} characters", label, max)),
        _ => None,
    }
}

/// Drops blank entries and duplicates, keeping first-seen order.
fn clean_list(values: &[String]) -> Vec<String> {
    let mut cleaned: Vec<String> = Vec::with_capacity(values.len());
    for value in values {
        let value = value.trim();
        if !value.is_empty() && !cleaned.iter().any(|v| v == value) {
            cleaned.push(value.to_string());
        }
    }
    cleaned
}

/// Allows one submission in flight at a time.
///
/// [`SubmissionGate::begin`] hands out a guard; while it is alive further
/// attempts are refused. Dropping the guard reopens the gate regardless of
/// whether the attempt succeeded.
#[derive(Debug, Default)]
pub struct SubmissionGate {
    in_flight: Cell<bool>,
}

impl SubmissionGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> Result<SubmissionGuard<'_>> {
        if self.in_flight.replace(true) {
            return Err(GigbookError::Submission(
                "A submission is already in progress".to_string(),
            ));
        }
        Ok(SubmissionGuard { gate: self })
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.get()
    }
}

pub struct SubmissionGuard<'a> {
    gate: &'a SubmissionGate,
}

impl Drop for SubmissionGuard<'_> {
    fn drop(&mut self) {
        self.gate.in_flight.set(false);
    }
}
