//! Player-side combatants.

use crate::combat::{BattleStrategy, damage};
use crate::config::GameConfig;
use crate::env::Environment;
use crate::error::SetupError;
use crate::outcome::{Outcome, StrategyKind};

/// Class tag used by combat tactics to rank targets.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CharacterClass {
    Warrior,
    Mage,
    Rogue,
    Healer,
    Archer,
    Monster,
}

/// Result of soaking up one hit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DamageTaken {
    /// Health actually removed.
    pub applied: u32,
    /// Nominal damage cancelled by defense.
    pub absorbed: u32,
}

/// A named combatant with health, attack and defense.
///
/// Invariants: `0 <= health <= max_health`, `max_health > 0`, `level >= 1`,
/// and `alive` holds exactly when `health > 0`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Character {
    name: String,
    class: CharacterClass,
    level: u32,
    health: u32,
    max_health: u32,
    attack_power: i32,
    defense: i32,
    alive: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    experience: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    gold: u32,
    #[cfg_attr(feature = "serde", serde(skip))]
    battle: Option<BattleStrategy>,
}

impl Character {
    /// Start building a character. Defaults: level 1, 100/100 health,
    /// attack 10, defense 5.
    pub fn builder(name: impl Into<String>, class: CharacterClass) -> CharacterBuilder {
        CharacterBuilder::new(name.into(), class)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn class(&self) -> CharacterClass {
        self.class
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    pub fn attack_power(&self) -> i32 {
        self.attack_power
    }

    pub fn defense(&self) -> i32 {
        self.defense
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn experience(&self) -> u32 {
        self.experience
    }

    pub fn gold(&self) -> u32 {
        self.gold
    }

    /// True when health is strictly below `percent` of max health.
    pub fn health_below(&self, percent: u32) -> bool {
        (self.health as u64) * 100 < (self.max_health as u64) * percent as u64
    }

    // ===== strategy binding =====

    pub fn battle_strategy(&self) -> Option<BattleStrategy> {
        self.battle
    }

    /// Bind a battle strategy, returning the one it replaces.
    pub fn attach_battle_strategy(&mut self, strategy: BattleStrategy) -> Option<BattleStrategy> {
        self.battle.replace(strategy)
    }

    pub fn detach_battle_strategy(&mut self) -> Option<BattleStrategy> {
        self.battle.take()
    }

    /// Attack `target` with the bound battle strategy.
    pub fn attack(&self, target: &mut Character, env: &Environment) -> Outcome {
        match self.battle {
            Some(strategy) => strategy.execute_attack(self, target, env),
            None => Outcome::missing(self.name.as_str(), StrategyKind::Battle),
        }
    }

    /// Defend against `incoming` nominal damage with the bound battle strategy.
    pub fn defend(&mut self, incoming: u32, env: &Environment) -> Outcome {
        match self.battle {
            Some(strategy) => strategy.execute_defense(self, incoming, env),
            None => Outcome::missing(self.name.as_str(), StrategyKind::Battle),
        }
    }

    // ===== health =====

    /// Fraction of the defense stat applied against incoming hits.
    ///
    /// Unbound characters defend at full value.
    pub fn defense_effectiveness(&self) -> f64 {
        self.battle
            .map_or(1.0, |strategy| strategy.defense_effectiveness())
    }

    /// Take a hit of `amount` nominal damage and return the health lost.
    ///
    /// Defense is applied with [`Self::defense_effectiveness`]; any positive
    /// amount against a live character removes at least one point.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        self.absorb(amount, self.defense_effectiveness()).applied
    }

    pub(crate) fn absorb(&mut self, nominal: u32, effectiveness: f64) -> DamageTaken {
        if !self.alive || nominal == 0 {
            return DamageTaken::default();
        }
        let reduction = damage::defense_reduction(self.defense, effectiveness);
        let mitigated = damage::mitigate(nominal, reduction);
        let before = self.health;
        self.set_health(damage::apply_damage(self.health, mitigated));
        DamageTaken {
            applied: before - self.health,
            absorbed: nominal - mitigated.min(nominal),
        }
    }

    /// Restore up to `amount` health. Dead characters cannot be healed.
    pub fn heal(&mut self, amount: u32) -> u32 {
        if !self.alive {
            return 0;
        }
        let before = self.health;
        self.set_health(self.health.saturating_add(amount));
        self.health - before
    }

    /// Set health, clamped to `[0, max_health]`. Zero clears the alive flag.
    pub fn set_health(&mut self, health: u32) {
        self.health = health.min(self.max_health);
        self.alive = self.health > 0;
    }

    // ===== progression (mutated by progression strategies) =====

    pub(crate) fn raise_max_health(&mut self, amount: u32) {
        self.max_health = self.max_health.saturating_add(amount);
    }

    pub(crate) fn raise_attack(&mut self, amount: u32) {
        self.attack_power = self.attack_power.saturating_add(amount as i32);
    }

    pub(crate) fn raise_defense(&mut self, amount: u32) {
        self.defense = self.defense.saturating_add(amount as i32);
    }

    pub(crate) fn restore_full_health(&mut self) {
        self.set_health(self.max_health);
    }

    pub(crate) fn gain_levels(&mut self, levels: u32) {
        self.level = self.level.saturating_add(levels);
    }

    pub(crate) fn add_experience(&mut self, xp: u32) {
        self.experience = self.experience.saturating_add(xp);
    }

    /// Convert banked experience into skill points, keeping the remainder.
    pub(crate) fn redeem_skill_points(&mut self) -> u32 {
        let points = self.experience / GameConfig::XP_PER_SKILL_POINT;
        self.experience %= GameConfig::XP_PER_SKILL_POINT;
        points
    }

    pub(crate) fn add_gold(&mut self, gold: u32) {
        self.gold = self.gold.saturating_add(gold);
    }

    /// Check the model invariants, e.g. after loading a snapshot.
    pub fn check_invariants(&self) -> Result<(), SetupError> {
        if self.name.trim().is_empty() {
            return Err(SetupError::EmptyName);
        }
        if self.max_health == 0 {
            return Err(SetupError::ZeroMaxHealth {
                name: self.name.clone(),
            });
        }
        if self.level == 0 {
            return Err(SetupError::ZeroLevel {
                name: self.name.clone(),
            });
        }
        if self.health > self.max_health {
            return Err(SetupError::HealthAboveMax {
                name: self.name.clone(),
                health: self.health,
                max: self.max_health,
            });
        }
        if self.alive != (self.health > 0) {
            return Err(SetupError::AliveMismatch {
                name: self.name.clone(),
                health: self.health,
            });
        }
        Ok(())
    }
}

/// Builder for [`Character`] with validation on [`CharacterBuilder::build`].
#[derive(Clone, Debug)]
pub struct CharacterBuilder {
    name: String,
    class: CharacterClass,
    level: u32,
    max_health: u32,
    health: Option<u32>,
    attack_power: i32,
    defense: i32,
    experience: u32,
    gold: u32,
    battle: Option<BattleStrategy>,
}

impl CharacterBuilder {
    fn new(name: String, class: CharacterClass) -> Self {
        Self {
            name,
            class,
            level: 1,
            max_health: 100,
            health: None,
            attack_power: 10,
            defense: 5,
            experience: 0,
            gold: 0,
            battle: None,
        }
    }

    pub fn level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    /// Set max health; current health follows unless set explicitly.
    pub fn max_health(mut self, max_health: u32) -> Self {
        self.max_health = max_health;
        self
    }

    /// Current health, clamped to max health at build time.
    pub fn health(mut self, health: u32) -> Self {
        self.health = Some(health);
        self
    }

    pub fn attack(mut self, attack_power: i32) -> Self {
        self.attack_power = attack_power;
        self
    }

    pub fn defense(mut self, defense: i32) -> Self {
        self.defense = defense;
        self
    }

    pub fn experience(mut self, experience: u32) -> Self {
        self.experience = experience;
        self
    }

    pub fn gold(mut self, gold: u32) -> Self {
        self.gold = gold;
        self
    }

    pub fn battle_strategy(mut self, strategy: BattleStrategy) -> Self {
        self.battle = Some(strategy);
        self
    }

    pub fn build(self) -> Result<Character, SetupError> {
        if self.name.trim().is_empty() {
            return Err(SetupError::EmptyName);
        }
        if self.max_health == 0 {
            return Err(SetupError::ZeroMaxHealth { name: self.name });
        }
        if self.level == 0 {
            return Err(SetupError::ZeroLevel { name: self.name });
        }
        let health = self.health.unwrap_or(self.max_health).min(self.max_health);
        Ok(Character {
            name: self.name,
            class: self.class,
            level: self.level,
            health,
            max_health: self.max_health,
            attack_power: self.attack_power,
            defense: self.defense,
            alive: health > 0,
            experience: self.experience,
            gold: self.gold,
            battle: self.battle,
        })
    }
}
