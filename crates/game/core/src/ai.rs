//! Enemy decision-making.
//!
//! Each [`AiStrategy`] turns a situation (enemy, player, environment) into one
//! action per turn and can grade how threatening the player is. Strategies
//! that attack bind a battle strategy to the enemy when needed, then strike
//! through it, so damage always follows the battle rules.
//!
//! Randomness comes from the simulation's [`RandomSource`]; every random
//! comparison draws exactly one fresh value.

use tracing::debug;

use crate::combat::BattleStrategy;
use crate::config::GameConfig;
use crate::entity::{Character, Enemy};
use crate::env::{Environment, RandomSource};
use crate::outcome::{Effect, Outcome, Tag, ThreatLevel};

/// Flee chance for the defensive AI when badly hurt.
const DEFENSIVE_FLEE_CHANCE: f64 = 0.6;
/// Health percent (strict) under which the defensive AI considers fleeing.
const DEFENSIVE_FLEE_HEALTH: u32 = 30;
/// Health percent (strict) under which the tactical AI switches to defensive strikes.
const TACTICAL_WOUNDED_HEALTH: u32 = 40;
/// Strength ratio under which the tactical AI disengages.
const OUTMATCHED_RATIO: f64 = 0.6;
/// Strength ratio at or above which the tactical AI rates the player a low threat.
const DOMINANT_RATIO: f64 = 1.5;

/// Parameters of the tactical AI, clamped to `[0, 1]` at construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TacticalProfile {
    aggression: f64,
    caution: f64,
}

impl TacticalProfile {
    pub fn new(aggression: f64, caution: f64) -> Self {
        Self {
            aggression: unit(aggression),
            caution: unit(caution),
        }
    }

    pub fn aggression(&self) -> f64 {
        self.aggression
    }

    pub fn caution(&self) -> f64 {
        self.caution
    }
}

fn unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AiStrategy {
    /// Attacks every turn.
    Aggressive,
    /// Flees when badly hurt, attacks only at close range, else holds.
    Defensive,
    /// Uniform pick among attack, defend, wait and retreat.
    Random,
    /// Weighs combined stats against the player.
    Tactical(TacticalProfile),
}

impl AiStrategy {
    pub fn tactical(aggression: f64, caution: f64) -> Self {
        Self::Tactical(TacticalProfile::new(aggression, caution))
    }

    /// Decide and perform this turn's action for `enemy`.
    pub fn decide_action(
        &self,
        enemy: &mut Enemy,
        player: &mut Character,
        env: &Environment,
        rng: &mut dyn RandomSource,
    ) -> Outcome {
        if !enemy.is_alive() {
            return Outcome::actor_dead(enemy.name(), Tag::AttackerDead);
        }
        if !player.is_alive() {
            return Outcome::target_dead(enemy.name());
        }

        let outcome = match self {
            Self::Aggressive => {
                ensure_battle_strategy(enemy, BattleStrategy::Aggressive);
                enemy.attack(player, env)
            }
            Self::Defensive => {
                if enemy.health_below(DEFENSIVE_FLEE_HEALTH)
                    && rng.next_f64() < DEFENSIVE_FLEE_CHANCE
                {
                    narrate(enemy, Tag::Flee)
                } else if env.distance() <= GameConfig::MELEE_RANGE {
                    ensure_battle_strategy(enemy, BattleStrategy::Defensive);
                    enemy.attack(player, env)
                } else {
                    narrate(enemy, Tag::Hold)
                }
            }
            Self::Random => match rng.pick(4) {
                0 => {
                    ensure_battle_strategy(enemy, BattleStrategy::Balanced);
                    enemy.attack(player, env)
                }
                1 => narrate(enemy, Tag::Defend),
                2 => narrate(enemy, Tag::Wait),
                _ => narrate(enemy, Tag::Retreat),
            },
            Self::Tactical(profile) => decide_tactically(profile, enemy, player, env, rng),
        };

        debug!(
            enemy = enemy.name(),
            ai = ?self,
            tag = %outcome.tag,
            "enemy acted"
        );
        outcome
    }

    /// Grade how dangerous `player` is to `enemy`.
    pub fn evaluate_threat(&self, enemy: &Enemy, player: &Character, _env: &Environment) -> Outcome {
        let level = match self {
            Self::Tactical(_) => {
                let ratio = strength_ratio(enemy, player);
                if ratio < OUTMATCHED_RATIO {
                    ThreatLevel::High
                } else if ratio >= DOMINANT_RATIO {
                    ThreatLevel::Low
                } else {
                    ThreatLevel::Medium
                }
            }
            Self::Aggressive | Self::Defensive | Self::Random => {
                level_threat(enemy.level(), player.level())
            }
        };
        Outcome::applied(enemy.name(), Tag::Threat, Effect::Threat(level))
    }
}

fn decide_tactically(
    profile: &TacticalProfile,
    enemy: &mut Enemy,
    player: &mut Character,
    env: &Environment,
    rng: &mut dyn RandomSource,
) -> Outcome {
    let ratio = strength_ratio(enemy, player);
    debug!(enemy = enemy.name(), ratio, "tactical assessment");

    if ratio < OUTMATCHED_RATIO {
        return if rng.next_f64() < profile.caution {
            narrate(enemy, Tag::Flee)
        } else {
            narrate(enemy, Tag::Retreat)
        };
    }

    let style = if enemy.health_below(TACTICAL_WOUNDED_HEALTH) && rng.next_f64() < profile.caution
    {
        BattleStrategy::Defensive
    } else if rng.next_f64() < profile.aggression {
        BattleStrategy::Aggressive
    } else if env.distance() <= GameConfig::MELEE_RANGE {
        BattleStrategy::Balanced
    } else {
        return narrate(enemy, Tag::Observe);
    };

    enemy.attach_battle_strategy(style);
    enemy.attack(player, env)
}

/// `(attack + health + defense)` of the enemy over the player's, guarded against zero.
pub fn strength_ratio(enemy: &Character, player: &Character) -> f64 {
    let sum = |c: &Character| {
        c.attack_power().max(0) as i64 + c.health() as i64 + c.defense().max(0) as i64
    };
    sum(enemy) as f64 / sum(player).max(1) as f64
}

/// Low when the player is below the enemy's level, high when more than two above.
pub fn level_threat(enemy_level: u32, player_level: u32) -> ThreatLevel {
    if player_level < enemy_level {
        ThreatLevel::Low
    } else if player_level > enemy_level.saturating_add(2) {
        ThreatLevel::High
    } else {
        ThreatLevel::Medium
    }
}

fn ensure_battle_strategy(enemy: &mut Enemy, fallback: BattleStrategy) {
    if enemy.battle_strategy().is_none() {
        enemy.attach_battle_strategy(fallback);
    }
}

fn narrate(enemy: &Enemy, tag: Tag) -> Outcome {
    Outcome::applied(enemy.name(), tag, Effect::None)
}
