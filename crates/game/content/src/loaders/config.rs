//! Arena configuration loader.

use std::path::Path;

use game_core::GameConfig;
use runtime::RuntimeConfig;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Combined configuration for the synchronous core and the cooperative runtime.
///
/// ```toml
/// [game]
/// seed = 42
/// max_encounter_rounds = 30
///
/// [runtime]
/// round_tick_ms = 50
/// treasure_chance = 0.25
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub game: GameConfig,
    pub runtime: RuntimeConfig,
}

impl ArenaConfig {
    /// Use one seed for both layers.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.game.seed = seed;
        self.runtime.seed = seed;
        self
    }
}

/// Loader for arena configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing sections and keys fall back to their defaults.
    pub fn load(path: &Path) -> LoadResult<ArenaConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<ArenaConfig> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let config = ConfigLoader::parse(
            r#"
            [game]
            seed = 42

            [runtime]
            round_tick_ms = 50
            treasure_chance = 0.25
            "#,
        )
        .unwrap();

        assert_eq!(config.game.seed, 42);
        assert_eq!(
            config.game.max_encounter_rounds,
            GameConfig::DEFAULT_MAX_ENCOUNTER_ROUNDS
        );
        assert_eq!(config.runtime.round_tick_ms, 50);
        assert_eq!(config.runtime.treasure_chance, 0.25);
        assert_eq!(
            config.runtime.exploration_yield_every,
            RuntimeConfig::DEFAULT_EXPLORATION_YIELD_EVERY
        );
    }

    #[test]
    fn empty_file_is_default() {
        assert_eq!(ConfigLoader::parse("").unwrap(), ArenaConfig::default());
    }

    #[test]
    fn load_reports_path_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let err = ConfigLoader::load(&path).unwrap_err();
        assert!(err.to_string().contains("absent.toml"));
    }

    #[test]
    fn rejects_malformed_toml() {
        assert!(ConfigLoader::parse("[game\nseed = 1").is_err());
    }

    #[test]
    fn shared_seed() {
        let config = ArenaConfig::default().with_seed(9);
        assert_eq!(config.game.seed, 9);
        assert_eq!(config.runtime.seed, 9);
    }
}
