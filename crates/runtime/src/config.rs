//! Tunables for cooperative behaviors.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Runtime configuration shared by every context a scheduler drives.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Pause between battle rounds, in milliseconds.
    pub round_tick_ms: u64,
    /// Gathering time for a node of quality 1.0 at efficiency 1.0, in milliseconds.
    pub gather_base_ms: u64,
    /// Exploration yields after every this many areas.
    pub exploration_yield_every: usize,
    /// Chance that an explored area holds treasure.
    pub treasure_chance: f64,
    /// Health a context starts battles with.
    pub starting_health: u32,
    /// Seed for each context's random source.
    pub seed: u64,
}

impl RuntimeConfig {
    pub const DEFAULT_ROUND_TICK_MS: u64 = 100;
    pub const DEFAULT_GATHER_BASE_MS: u64 = 1_000;
    pub const DEFAULT_EXPLORATION_YIELD_EVERY: usize = 3;
    pub const DEFAULT_TREASURE_CHANCE: f64 = 0.2;
    pub const DEFAULT_STARTING_HEALTH: u32 = 100;

    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Replace the seed with one drawn from the thread RNG.
    ///
    /// Runs seeded this way cannot be replayed unless the seed is logged.
    pub fn with_random_seed(mut self) -> Self {
        self.seed = rand::random();
        self
    }

    pub fn round_tick(&self) -> Duration {
        Duration::from_millis(self.round_tick_ms)
    }

    pub fn gather_base_time(&self) -> Duration {
        Duration::from_millis(self.gather_base_ms)
    }

    /// Yield cadence, never below one area.
    pub fn yield_every(&self) -> usize {
        self.exploration_yield_every.max(1)
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            round_tick_ms: Self::DEFAULT_ROUND_TICK_MS,
            gather_base_ms: Self::DEFAULT_GATHER_BASE_MS,
            exploration_yield_every: Self::DEFAULT_EXPLORATION_YIELD_EVERY,
            treasure_chance: Self::DEFAULT_TREASURE_CHANCE,
            starting_health: Self::DEFAULT_STARTING_HEALTH,
            seed: game_core::GameConfig::DEFAULT_SEED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_seed_only_touches_the_seed() {
        let base = RuntimeConfig {
            round_tick_ms: 7,
            ..RuntimeConfig::default()
        };
        let drawn = base.clone().with_random_seed();

        assert_eq!(drawn.round_tick_ms, 7);
        assert_eq!(
            RuntimeConfig {
                seed: base.seed,
                ..drawn.clone()
            },
            base
        );
        assert_ne!(drawn.seed, base.clone().with_random_seed().seed);
    }

    #[test]
    fn yield_cadence_never_drops_to_zero() {
        let config = RuntimeConfig {
            exploration_yield_every: 0,
            ..RuntimeConfig::default()
        };
        assert_eq!(config.yield_every(), 1);
    }
}
