use crate::commands::{directory_artists, find_artist, CmdMessage, CmdResult};
use crate::error::Result;
use crate::source::DataSource;
use crate::store::ArtistRepository;
use tracing::info;

/// Adds the artist to favorites, or takes it out if it is already there.
///
/// Only adding requires the id to resolve. An id whose artist has since been
/// removed can still be taken out.
pub fn toggle<D: DataSource, R: ArtistRepository>(
    source: &D,
    repo: &mut R,
    id: &str,
) -> Result<CmdResult> {
    let mut ids = repo.load_favorites();

    let (added, artist) = match ids.iter().position(|f| f == id) {
        Some(pos) => {
            ids.remove(pos);
            (false, find_artist(source, &*repo, id).ok())
        }
        None => {
            let artist = find_artist(source, &*repo, id)?;
            ids.push(id.to_string());
            (true, Some(artist))
        }
    };
    repo.save_favorites(&ids)?;
    info!(id, added, "favorites updated");

    let verb = if added { "Added to" } else { "Removed from" };
    let label = artist.as_ref().map_or(id, |a| a.name.as_str()).to_string();
    let mut result = CmdResult::default().with_affected_artists(artist.into_iter().collect());
    result.add_message(CmdMessage::success(format!("{} favorites: {}", verb, label)));
    Ok(result)
}

/// Favorite artists in the order they were added. Ids that no longer resolve
/// to an artist are skipped.
pub fn list<D: DataSource, R: ArtistRepository>(source: &D, repo: &R) -> Result<CmdResult> {
    let ids = repo.load_favorites();
    let (mut known, _, _) = directory_artists(source, repo)?;
    known.extend(repo.load().into_iter().filter(|a| !a.is_approved()));

    let favorites = ids
        .iter()
        .filter_map(|id| known.iter().find(|a| &a.id == id).cloned())
        .collect::<Vec<_>>();

    let mut result = CmdResult::default().with_listed_artists(favorites);
    if result.listed_artists.is_empty() {
        result.add_message(CmdMessage::info("No favorite artists yet"));
    }
    Ok(result)
}
