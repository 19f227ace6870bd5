//! Fixture lookup by name.

use super::Cassette;
use crate::error::VcrError;
use crate::track::BodySchema;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable naming the fixture directory.
pub const FIXTURE_DIR_ENV: &str = "VHS_FIXTURE_DIR";

/// Fixture directory used when nothing else is configured.
pub const DEFAULT_FIXTURE_DIR: &str = "tests/fixtures";

/// A directory of `<name>.json` fixtures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureStore {
    root: PathBuf,
    schema: BodySchema,
}

impl FixtureStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            schema: BodySchema::default(),
        }
    }

    /// Use `$VHS_FIXTURE_DIR`, falling back to `tests/fixtures`.
    pub fn from_env() -> Self {
        let root = std::env::var_os(FIXTURE_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_FIXTURE_DIR));
        Self::new(root)
    }

    pub fn with_schema(mut self, schema: BodySchema) -> Self {
        self.schema = schema;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn schema(&self) -> BodySchema {
        self.schema
    }

    /// Load the fixture `<name>.json`.
    ///
    /// `name` excludes the extension. Errors echo back `<name>.json`.
    pub fn load(&self, name: &str) -> Result<Cassette, VcrError> {
        let resource = format!("{name}.json");
        let path = self.root.join(&resource);
        if !path.is_file() {
            debug!("Fixture {:?} does not exist", path);
            return Err(VcrError::FixtureMissing { resource });
        }
        let bytes = std::fs::read(&path).map_err(|source| VcrError::Io {
            resource: resource.clone(),
            source,
        })?;
        Cassette::from_slice(&resource, &bytes, self.schema)
    }

    /// Load a fixture from an explicit path. Errors carry the path as given.
    pub fn load_path(path: &Path, schema: BodySchema) -> Result<Cassette, VcrError> {
        let resource = path.display().to_string();
        let bytes = std::fs::read(path).map_err(|source| match source.kind() {
            std::io::ErrorKind::NotFound => VcrError::FixtureMissing {
                resource: resource.clone(),
            },
            _ => VcrError::Io {
                resource: resource.clone(),
                source,
            },
        })?;
        Cassette::from_slice(&resource, &bytes, schema)
    }
}

impl Default for FixtureStore {
    fn default() -> Self {
        Self::new(DEFAULT_FIXTURE_DIR)
    }
}
