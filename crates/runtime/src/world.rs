//! What cooperative behaviors act on.

use game_core::Enemy;
use serde::{Deserialize, Serialize};

/// A gatherable resource deposit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResourceNode {
    pub kind: String,
    pub quantity: u32,
    /// Yield multiplier; also speeds up gathering.
    pub quality: f64,
}

impl ResourceNode {
    pub fn new(kind: impl Into<String>, quantity: u32, quality: f64) -> Self {
        Self {
            kind: kind.into(),
            quantity,
            quality,
        }
    }
}

/// Areas to explore, nodes to gather and enemies to fight.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct World {
    pub areas: Vec<String>,
    pub nodes: Vec<ResourceNode>,
    pub enemies: Vec<Enemy>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_areas<I, S>(mut self, areas: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.areas.extend(areas.into_iter().map(Into::into));
        self
    }

    pub fn with_node(mut self, node: ResourceNode) -> Self {
        self.nodes.push(node);
        self
    }

    pub fn with_enemy(mut self, enemy: Enemy) -> Self {
        self.enemies.push(enemy);
        self
    }

    pub fn enemies_alive(&self) -> usize {
        self.enemies.iter().filter(|enemy| enemy.is_alive()).count()
    }
}
