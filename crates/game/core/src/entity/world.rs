//! Positioned world entities with resource pools.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Add, Mul, Sub};

use crate::combat::CombatTactic;
use crate::config::GameConfig;
use crate::entity::Character;
use crate::env::Environment;
use crate::error::SetupError;
use crate::movement::MovementStrategy;
use crate::outcome::{Outcome, StrategyKind, Tag};
use crate::resources::ResourceStrategy;

/// Continuous 2D coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn distance(self, other: Vec2) -> f64 {
        (other - self).length()
    }

    pub fn dot(self, other: Vec2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Unit vector in the same direction, or `None` for a zero-length vector.
    pub fn normalized(self) -> Option<Vec2> {
        let len = self.length();
        (len > f64::EPSILON).then(|| Vec2::new(self.x / len, self.y / len))
    }

    /// Counter-clockwise perpendicular.
    pub fn perpendicular(self) -> Vec2 {
        Vec2::new(-self.y, self.x)
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;
    fn mul(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

/// An entity placed in the world: position, bounded resources, and
/// movement / resource / combat-tactic strategy bindings.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameEntity {
    name: String,
    position: Vec2,
    resources: BTreeMap<String, u32>,
    max_resources: BTreeMap<String, u32>,
    alive: bool,
    #[cfg_attr(feature = "serde", serde(skip))]
    movement: Option<MovementStrategy>,
    #[cfg_attr(feature = "serde", serde(skip))]
    resource_strategy: Option<ResourceStrategy>,
    #[cfg_attr(feature = "serde", serde(skip))]
    tactic: Option<CombatTactic>,
}

impl GameEntity {
    pub fn new(name: impl Into<String>, position: Vec2) -> Result<Self, SetupError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(SetupError::EmptyName);
        }
        Ok(Self {
            name,
            position,
            resources: BTreeMap::new(),
            max_resources: BTreeMap::new(),
            alive: true,
            movement: None,
            resource_strategy: None,
            tactic: None,
        })
    }

    /// Declare a resource with its bound and starting amount (clamped).
    pub fn with_resource(mut self, name: impl Into<String>, amount: u32, max: u32) -> Self {
        let name = name.into();
        self.max_resources.insert(name.clone(), max);
        self.resources.insert(name, amount.min(max));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn set_alive(&mut self, alive: bool) {
        self.alive = alive;
    }

    pub fn resources(&self) -> &BTreeMap<String, u32> {
        &self.resources
    }

    pub fn resource(&self, name: &str) -> u32 {
        self.resources.get(name).copied().unwrap_or(0)
    }

    /// Bound for `name`, or [`GameConfig::DEFAULT_RESOURCE_MAX`] if undeclared.
    pub fn resource_max(&self, name: &str) -> u32 {
        self.max_resources
            .get(name)
            .copied()
            .unwrap_or(GameConfig::DEFAULT_RESOURCE_MAX)
    }

    /// Set a resource, clamped to `[0, max]`. Returns the stored amount.
    pub fn set_resource(&mut self, name: &str, amount: u32) -> u32 {
        let clamped = amount.min(self.resource_max(name));
        self.resources.insert(name.to_owned(), clamped);
        clamped
    }

    /// Add to a resource, clamped to its max. Returns the amount actually added.
    pub fn add_resource(&mut self, name: &str, amount: u32) -> u32 {
        let before = self.resource(name);
        self.set_resource(name, before.saturating_add(amount)) - before
    }

    /// Spend exactly `amount` if available. Returns false (and spends nothing) otherwise.
    pub fn spend_resource(&mut self, name: &str, amount: u32) -> bool {
        let available = self.resource(name);
        if available < amount {
            return false;
        }
        self.resources.insert(name.to_owned(), available - amount);
        true
    }

    // ===== strategy binding =====

    pub fn attach_movement_strategy(
        &mut self,
        strategy: MovementStrategy,
    ) -> Option<MovementStrategy> {
        self.movement.replace(strategy)
    }

    pub fn attach_resource_strategy(
        &mut self,
        strategy: ResourceStrategy,
    ) -> Option<ResourceStrategy> {
        self.resource_strategy.replace(strategy)
    }

    pub fn attach_combat_tactic(&mut self, tactic: CombatTactic) -> Option<CombatTactic> {
        self.tactic.replace(tactic)
    }

    pub fn movement_strategy(&self) -> Option<MovementStrategy> {
        self.movement
    }

    pub fn resource_strategy(&self) -> Option<ResourceStrategy> {
        self.resource_strategy
    }

    pub fn combat_tactic(&self) -> Option<&CombatTactic> {
        self.tactic.as_ref()
    }

    // ===== dispatch =====

    /// Take one step toward `target` with the bound movement strategy.
    pub fn move_toward(&mut self, target: Vec2, env: &Environment) -> Outcome {
        if !self.alive {
            return Outcome::actor_dead(self.name.as_str(), Tag::ActorDead);
        }
        match self.movement {
            Some(strategy) => strategy.execute(self, target, env),
            None => Outcome::missing(self.name.as_str(), StrategyKind::Movement),
        }
    }

    /// Run the bound resource strategy over this entity's resources.
    pub fn manage_resources(&mut self, env: &Environment) -> Outcome {
        if !self.alive {
            return Outcome::actor_dead(self.name.as_str(), Tag::ActorDead);
        }
        match self.resource_strategy {
            Some(strategy) => strategy.manage(self, env),
            None => Outcome::missing(self.name.as_str(), StrategyKind::Resource),
        }
    }

    /// Pick a target among `candidates` with the bound combat tactic.
    pub fn select_target(&self, candidates: &[&Character], env: &Environment) -> Outcome {
        match &self.tactic {
            Some(tactic) => tactic.select_target(self, candidates, env),
            None => Outcome::missing(self.name.as_str(), StrategyKind::CombatTactic),
        }
    }

    /// Choose how to attack `target` with the bound combat tactic.
    pub fn choose_attack_type(&self, target: &Character, env: &Environment) -> Outcome {
        match &self.tactic {
            Some(tactic) => tactic.choose_attack_type(self, target, env),
            None => Outcome::missing(self.name.as_str(), StrategyKind::CombatTactic),
        }
    }

    /// Check resource bounds, e.g. after loading a snapshot.
    pub fn check_invariants(&self) -> Result<(), SetupError> {
        if self.name.trim().is_empty() {
            return Err(SetupError::EmptyName);
        }
        for (resource, &amount) in &self.resources {
            let max = self.resource_max(resource);
            if amount > max {
                return Err(SetupError::ResourceAboveMax {
                    name: self.name.clone(),
                    resource: resource.clone(),
                    amount,
                    max,
                });
            }
        }
        Ok(())
    }
}
