//! Playback configuration file.
//!
//! ```yaml
//! order:
//!   properties: [method, path, query]
//! replay: unlimited
//! fixtureDir: tests/fixtures
//! schema: headers
//! ```

use crate::cassette::FixtureStore;
use crate::sequence::{PlaybackOrder, ReplayMode};
use crate::track::BodySchema;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackConfig {
    #[serde(default)]
    pub order: PlaybackOrder,

    #[serde(default)]
    pub replay: ReplayMode,

    /// Overrides `VHS_FIXTURE_DIR`.
    #[serde(default)]
    pub fixture_dir: Option<PathBuf>,

    #[serde(default)]
    pub schema: BodySchema,
}

impl PlaybackConfig {
    /// Load from a YAML (or JSON) file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, anyhow::Error> {
        let contents = std::fs::read_to_string(path)?;
        let config: PlaybackConfig = serde_yaml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if let PlaybackOrder::Properties(matchers) = &self.order {
            if matchers.is_empty() {
                anyhow::bail!(
                    "'order.properties' must name at least one match type \
                     (method, url, scheme, path, query, headers, body)"
                );
            }
        }
        Ok(())
    }

    /// Fixture store for this configuration.
    pub fn fixture_store(&self) -> FixtureStore {
        let store = match &self.fixture_dir {
            Some(dir) => FixtureStore::new(dir),
            None => FixtureStore::from_env(),
        };
        store.with_schema(self.schema)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::MatchType;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config: PlaybackConfig = serde_yaml::from_str("{}").unwrap();
        assert!(matches!(config.order, PlaybackOrder::CassetteOrder));
        assert_eq!(config.replay, ReplayMode::Once);
        assert_eq!(config.schema, BodySchema::Headers);
        assert!(config.fixture_dir.is_none());
    }

    #[test]
    fn test_from_yaml_file() {
        let file = write_config(
            r#"
order:
  properties: [method, path, query]
replay: unlimited
fixtureDir: /tmp/cassettes
schema: tagged
"#,
        );
        let config = PlaybackConfig::from_file(file.path()).unwrap();

        match &config.order {
            PlaybackOrder::Properties(matchers) => {
                let names: Vec<&str> = matchers.iter().map(MatchType::name).collect();
                assert_eq!(names, vec!["method", "path", "query"]);
            }
            other => panic!("unexpected order {other:?}"),
        }
        assert_eq!(config.replay, ReplayMode::Unlimited);
        assert_eq!(config.fixture_store().root(), Path::new("/tmp/cassettes"));
        assert_eq!(config.fixture_store().schema(), BodySchema::Tagged);
    }

    #[test]
    fn test_from_json_file() {
        let file = write_config(r#"{"order": "cassetteOrder", "replay": "once"}"#);
        let config = PlaybackConfig::from_file(file.path()).unwrap();
        assert!(matches!(config.order, PlaybackOrder::CassetteOrder));
    }

    #[test]
    fn test_empty_properties_rejected() {
        let file = write_config("order:\n  properties: []\n");
        let err = PlaybackConfig::from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("order.properties"));
    }

    #[test]
    fn test_unknown_match_type_rejected() {
        let file = write_config("order:\n  properties: [color]\n");
        assert!(PlaybackConfig::from_file(file.path()).is_err());
    }

    #[test]
    fn test_missing_file() {
        assert!(PlaybackConfig::from_file("/nonexistent/vhs.yaml").is_err());
    }
}
