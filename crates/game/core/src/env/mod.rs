//! Per-operation context handed to strategies.
//!
//! [`Environment`] carries the keys strategies recognize. It is read-only
//! from a strategy's point of view; callers build a fresh one (or reuse one)
//! per operation. When deserialized from a map, unknown keys are ignored and
//! missing keys fall back to the documented defaults.

mod rng;

pub use rng::{PcgRng, RandomSource, SequenceRng, mix_seed};

use crate::config::GameConfig;
use crate::entity::Vec2;

/// External context for a single strategy call.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Environment {
    /// Distance between an enemy and the player.
    pub distance_to_player: Option<f64>,
    /// Obstacle positions, in the order movement strategies should consider them.
    pub obstacles: Vec<Vec2>,
    /// Region tag used for regional pricing.
    pub region: Option<String>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_distance(mut self, distance: f64) -> Self {
        self.distance_to_player = Some(distance);
        self
    }

    pub fn with_obstacle(mut self, obstacle: Vec2) -> Self {
        self.obstacles.push(obstacle);
        self
    }

    pub fn with_obstacles(mut self, obstacles: impl IntoIterator<Item = Vec2>) -> Self {
        self.obstacles.extend(obstacles);
        self
    }

    pub fn in_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Distance to the player, or [`GameConfig::DEFAULT_DISTANCE`] when unreported.
    ///
    /// Negative or non-finite values are treated as absent.
    pub fn distance(&self) -> f64 {
        match self.distance_to_player {
            Some(d) if d.is_finite() && d >= 0.0 => d,
            _ => GameConfig::DEFAULT_DISTANCE,
        }
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }
}
