//! Fixture directory resolution from the environment.
//!
//! Kept in its own test binary with a single test so nothing else in the
//! process reads the variable while it is being changed.

use std::path::{Path, PathBuf};
use vhs::cassette::{DEFAULT_FIXTURE_DIR, FIXTURE_DIR_ENV};
use vhs::{BodySchema, FixtureStore, PlaybackConfig};

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

#[test]
fn test_fixture_dir_follows_environment() {
    std::env::set_var(FIXTURE_DIR_ENV, fixtures_dir());

    let store = FixtureStore::from_env();
    assert_eq!(store.root(), fixtures_dir());
    assert!(!store.load("vinyl_multiple").unwrap().is_empty());

    let config = PlaybackConfig {
        schema: BodySchema::Tagged,
        ..Default::default()
    };
    assert_eq!(config.fixture_store().root(), fixtures_dir());
    assert_eq!(config.fixture_store().schema(), BodySchema::Tagged);

    let pinned = PlaybackConfig {
        fixture_dir: Some(PathBuf::from("/tmp/pinned")),
        ..Default::default()
    };
    assert_eq!(pinned.fixture_store().root(), Path::new("/tmp/pinned"));

    std::env::remove_var(FIXTURE_DIR_ENV);

    assert_eq!(FixtureStore::from_env().root(), Path::new(DEFAULT_FIXTURE_DIR));
    assert_eq!(
        PlaybackConfig::default().fixture_store().root(),
        Path::new(DEFAULT_FIXTURE_DIR)
    );
}
