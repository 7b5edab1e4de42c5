use gigbook::model::Artist;
use gigbook::source::seed_artists;
use gigbook::store::fs::{FileRepository, ARTISTS_FILE, FAVORITES_FILE};
use gigbook::store::ArtistRepository;
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, FileRepository) {
    let dir = TempDir::new().unwrap();
    let repo = FileRepository::new(dir.path().join("data"));
    (dir, repo)
}

#[test]
fn test_missing_files_load_empty() {
    let (_dir, repo) = setup();
    assert!(repo.load().is_empty());
    assert!(repo.load_favorites().is_empty());
}

#[test]
fn test_save_creates_dir_and_round_trips() {
    let (_dir, mut repo) = setup();
    let artists: Vec<Artist> = seed_artists().into_iter().take(2).collect();

    repo.save(&artists).unwrap();
    assert!(repo.artists_path().exists());
    assert_eq!(repo.load(), artists);

    let on_disk = fs::read_to_string(repo.artists_path()).unwrap();
    assert!(on_disk.contains("\"feeRange\""));
}

#[test]
fn test_corrupt_file_loads_empty() {
    let (_dir, repo) = setup();
    fs::create_dir_all(repo.root()).unwrap();
    fs::write(repo.root().join(ARTISTS_FILE), "{not json").unwrap();
    fs::write(repo.root().join(FAVORITES_FILE), "42").unwrap();

    assert!(repo.load().is_empty());
    assert!(repo.load_favorites().is_empty());
}

#[test]
fn test_favorites_are_stored_separately() {
    let (_dir, mut repo) = setup();
    repo.save_favorites(&["3".to_string(), "1".to_string()]).unwrap();
    assert_eq!(repo.load_favorites(), vec!["3", "1"]);
    assert!(repo.load().is_empty());
}

#[test]
fn test_atomic_write_leaves_no_tmp_files() {
    let (_dir, mut repo) = setup();
    repo.save(&seed_artists()).unwrap();
    repo.save_favorites(&["2".to_string()]).unwrap();

    for entry in fs::read_dir(repo.root()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap().to_string();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_save_replaces_previous_collection() {
    let (_dir, mut repo) = setup();
    repo.save(&seed_artists()).unwrap();
    repo.save(&seed_artists()[..1]).unwrap();
    assert_eq!(repo.load().len(), 1);
}
