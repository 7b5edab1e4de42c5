use crate::commands::{find_artist, CmdResult};
use crate::error::Result;
use crate::source::DataSource;
use crate::store::ArtistRepository;

pub fn run<D: DataSource, R: ArtistRepository>(source: &D, repo: &R, id: &str) -> Result<CmdResult> {
    let artist = find_artist(source, repo, id.trim())?;
    Ok(CmdResult::default().with_listed_artists(vec![artist]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GigbookError;
    use crate::source::MockDirectory;
    use crate::store::memory::InMemoryRepository;

    #[test]
    fn shows_catalog_artist() {
        let result = run(&MockDirectory::new(), &InMemoryRepository::new(), " 2 ").unwrap();
        assert_eq!(result.listed_artists.len(), 1);
        assert_eq!(result.listed_artists[0].name, "Rajesh Kumar");
    }

    #[test]
    fn unknown_id_is_not_found() {
        let err = run(&MockDirectory::new(), &InMemoryRepository::new(), "404").unwrap_err();
        assert!(matches!(err, GigbookError::ArtistNotFound(id) if id == "404"));
    }
}
