use crate::commands::{CmdMessage, CmdResult};
use crate::error::{GigbookError, Result};
use crate::store::ArtistRepository;
use tracing::info;

pub const APPROVED_RATING: f32 = 4.5;
pub const APPROVED_EXPERIENCE: &str = "Verified";

pub fn approve<R: ArtistRepository>(repo: &mut R, id: &str) -> Result<CmdResult> {
    let mut artists = repo.load();
    let artist = artists
        .iter_mut()
        .find(|a| a.id == id)
        .ok_or_else(|| GigbookError::ArtistNotFound(id.to_string()))?;
    artist.rating = Some(APPROVED_RATING);
    artist.experience = Some(APPROVED_EXPERIENCE.to_string());
    let approved = artist.clone();

    repo.save(&artists)?;
    info!(id, "artist approved");

    let mut result = CmdResult::default().with_affected_artists(vec![approved.clone()]);
    result.add_message(CmdMessage::success(format!(
        "Artist approved: {}",
        approved.name
    )));
    Ok(result)
}

pub fn remove<R: ArtistRepository>(repo: &mut R, id: &str) -> Result<CmdResult> {
    let mut artists = repo.load();
    let pos = artists
        .iter()
        .position(|a| a.id == id)
        .ok_or_else(|| GigbookError::ArtistNotFound(id.to_string()))?;
    let removed = artists.remove(pos);

    repo.save(&artists)?;
    let mut favorites = repo.load_favorites();
    if let Some(fav) = favorites.iter().position(|f| f == id) {
        favorites.remove(fav);
        repo.save_favorites(&favorites)?;
    }
    info!(id, "artist removed");

    let mut result = CmdResult::default().with_affected_artists(vec![removed.clone()]);
    result.add_message(CmdMessage::success(format!(
        "Artist removed: {}",
        removed.name
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::dashboard::{self, DashboardQuery};
    use crate::source::seed_artists;
    use crate::store::memory::InMemoryRepository;

    fn pending() -> InMemoryRepository {
        let artists = seed_artists()
            .into_iter()
            .take(3)
            .map(|mut a| {
                a.rating = Some(0.0);
                a.experience = Some("New".into());
                a
            })
            .collect();
        InMemoryRepository::with_artists(artists)
    }

    #[test]
    fn approve_rates_and_verifies() {
        let mut repo = pending();
        approve(&mut repo, "2").unwrap();
        let stored = repo.load();
        assert_eq!(stored[1].rating, Some(4.5));
        assert_eq!(stored[1].experience.as_deref(), Some("Verified"));
        assert!(!stored[0].is_approved());

        let stats = dashboard::run(&repo, &DashboardQuery::default())
            .unwrap()
            .stats
            .unwrap();
        assert_eq!((stats.approved, stats.pending_review), (1, 2));
    }

    #[test]
    fn remove_deletes_only_that_artist() {
        let mut repo = pending();
        let result = remove(&mut repo, "1").unwrap();
        assert_eq!(result.affected_artists[0].name, "Priya Sharma");
        let ids: Vec<_> = repo.load().into_iter().map(|a| a.id).collect();
        assert_eq!(ids, vec!["2", "3"]);
    }

    #[test]
    fn remove_drops_the_artist_from_favorites() {
        let mut repo = pending();
        repo.save_favorites(&["1".to_string(), "3".to_string()])
            .unwrap();
        remove(&mut repo, "1").unwrap();
        assert_eq!(repo.load_favorites(), vec!["3"]);
    }

    #[test]
    fn unknown_id_leaves_collection_untouched() {
        let mut repo = pending();
        assert!(matches!(
            approve(&mut repo, "9"),
            Err(GigbookError::ArtistNotFound(_))
        ));
        assert!(matches!(
            remove(&mut repo, "9"),
            Err(GigbookError::ArtistNotFound(_))
        ));
        assert_eq!(repo.writes(), 0);
    }

    #[test]
    fn write_failure_propagates() {
        let mut repo = pending();
        repo.set_simulate_write_error(true);
        assert!(matches!(approve(&mut repo, "1"), Err(GigbookError::Store(_))));
        assert!(!repo.load()[0].is_approved());
    }
}
