use crate::commands::{CmdMessage, CmdResult};
use crate::error::{GigbookError, Result};
use crate::model::Artist;
use crate::store::ArtistRepository;
use crate::validation::{validate, OnboardForm, SubmissionGate};
use chrono::{DateTime, Utc};
use std::thread;
use std::time::Duration;
use tracing::{info, warn};

pub const SUBMIT_FAILED: &str = "Error submitting form. Please try again.";

/// Validates `form` and appends the resulting artist to the repository.
///
/// Field problems come back as [`GigbookError::Validation`] before anything is
/// stored. The form is borrowed, so after a failed save the caller still holds
/// it and can submit again.
pub fn run<R: ArtistRepository>(
    repo: &mut R,
    gate: &SubmissionGate,
    form: &OnboardForm,
    delay: Duration,
    now: DateTime<Utc>,
) -> Result<CmdResult> {
    let submission = validate(form).map_err(GigbookError::Validation)?;
    let _guard = gate.begin()?;

    if !delay.is_zero() {
        thread::sleep(delay);
    }

    let mut artists = repo.load();
    let id = next_id(&artists, now);
    let artist = submission.into_artist(id, now);
    artists.push(artist.clone());

    if let Err(e) = repo.save(&artists) {
        warn!(error = %e, "failed to store submission");
        return Err(GigbookError::Submission(SUBMIT_FAILED.to_string()));
    }
    info!(id = %artist.id, name = %artist.name, "artist submitted");

    let mut result = CmdResult::default().with_affected_artists(vec![artist.clone()]);
    result.add_message(CmdMessage::success(format!(
        "Artist profile submitted successfully: {} (id {})",
        artist.name, artist.id
    )));
    Ok(result)
}

/// Millisecond timestamp of the submission, bumped until no stored artist has it.
fn next_id(existing: &[Artist], now: DateTime<Utc>) -> String {
    let mut candidate = now.timestamp_millis();
    while existing.iter().any(|a| a.id == candidate.to_string()) {
        candidate += 1;
    }
    candidate.to_string()
}
