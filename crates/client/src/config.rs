//! Environment-driven settings for the arena binary.
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Result;
use game_content::{ArenaConfig, ConfigLoader};

/// Settings read from the process environment (after `.env` is loaded).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArenaSettings {
    /// Overrides the seed of both the core and the runtime layer.
    pub seed: Option<u64>,
    /// TOML file with `[game]` and `[runtime]` sections.
    pub config_path: Option<PathBuf>,
    /// Draw a fresh seed for this run when no explicit seed is given.
    pub random_seed: bool,
}

impl ArenaSettings {
    pub const SEED_VAR: &'static str = "ARENA_SEED";
    pub const CONFIG_VAR: &'static str = "ARENA_CONFIG";
    pub const RANDOM_SEED_VAR: &'static str = "ARENA_RANDOM_SEED";

    /// Construct settings from process environment variables.
    ///
    /// - `ARENA_SEED`
    /// - `ARENA_CONFIG`
    /// - `ARENA_RANDOM_SEED` (`true`/`false`)
    ///
    /// Unparseable values are ignored.
    pub fn from_env() -> Self {
        Self {
            seed: read_env::<u64>(Self::SEED_VAR),
            config_path: read_env::<String>(Self::CONFIG_VAR)
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
            random_seed: read_env::<bool>(Self::RANDOM_SEED_VAR).unwrap_or(false),
        }
    }

    /// Load the configured file (or defaults) and apply the seed override.
    ///
    /// An explicit seed wins over `random_seed`; a drawn seed is shared by
    /// both layers.
    pub fn resolve(&self) -> Result<ArenaConfig> {
        let config = match &self.config_path {
            Some(path) => ConfigLoader::load(path)?,
            None => ArenaConfig::default(),
        };
        Ok(match self.seed {
            Some(seed) => config.with_seed(seed),
            None if self.random_seed => {
                let drawn = config.runtime.clone().with_random_seed().seed;
                config.with_seed(drawn)
            }
            None => config,
        })
    }
}

fn read_env<T: FromStr>(key: &str) -> Option<T> {
    env::var(key).ok()?.trim().parse().ok()
}
