//! Battle strategies: how a character attacks and defends.

use tracing::debug;

use super::damage;
use crate::config::GameConfig;
use crate::entity::Character;
use crate::env::Environment;
use crate::outcome::{Effect, Outcome, Tag};

/// Interchangeable attack/defense styles.
///
/// | Variant    | Attack multiplier | Defense effectiveness |
/// |------------|-------------------|-----------------------|
/// | Aggressive | 1.2               | 0.5                   |
/// | Defensive  | 0.8               | 1.5                   |
/// | Balanced   | 1.0               | 1.0                   |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BattleStrategy {
    Aggressive,
    Defensive,
    Balanced,
}

impl BattleStrategy {
    pub const fn attack_multiplier(self) -> f64 {
        match self {
            Self::Aggressive => 1.2,
            Self::Defensive => 0.8,
            Self::Balanced => 1.0,
        }
    }

    pub const fn defense_effectiveness(self) -> f64 {
        match self {
            Self::Aggressive => 0.5,
            Self::Defensive => 1.5,
            Self::Balanced => 1.0,
        }
    }

    const fn attack_tag(self) -> Tag {
        match self {
            Self::Aggressive => Tag::AggressiveAttack,
            Self::Defensive => Tag::DefensiveAttack,
            Self::Balanced => Tag::BalancedAttack,
        }
    }

    const fn guard_tag(self) -> Tag {
        match self {
            Self::Aggressive => Tag::AggressiveGuard,
            Self::Defensive => Tag::DefensiveGuard,
            Self::Balanced => Tag::BalancedGuard,
        }
    }

    /// Strike `target` once.
    ///
    /// The target mitigates with its own bound strategy's defense
    /// effectiveness. Dead attackers or targets leave everything untouched.
    pub fn execute_attack(
        self,
        attacker: &Character,
        target: &mut Character,
        _env: &Environment,
    ) -> Outcome {
        if !attacker.is_alive() {
            return Outcome::actor_dead(attacker.name(), Tag::AttackerDead);
        }
        if !target.is_alive() {
            return Outcome::target_dead(attacker.name());
        }

        let nominal = damage::attack_damage(attacker.attack_power(), self.attack_multiplier())
            .max(GameConfig::MIN_DAMAGE);
        let taken = target.absorb(nominal, target.defense_effectiveness());

        debug!(
            attacker = attacker.name(),
            target = target.name(),
            strategy = %self,
            nominal,
            applied = taken.applied,
            "attack resolved"
        );

        Outcome::applied(
            attacker.name(),
            self.attack_tag(),
            Effect::Damage {
                target: target.name().to_owned(),
                dealt: taken.applied,
                absorbed: taken.absorbed,
                remaining_health: target.health(),
            },
        )
    }

    /// Soak `incoming` nominal damage using this strategy's effectiveness.
    pub fn execute_defense(
        self,
        defender: &mut Character,
        incoming: u32,
        _env: &Environment,
    ) -> Outcome {
        if !defender.is_alive() {
            return Outcome::actor_dead(defender.name(), Tag::ActorDead);
        }

        let taken = defender.absorb(incoming, self.defense_effectiveness());
        Outcome::applied(
            defender.name(),
            self.guard_tag(),
            Effect::Damage {
                target: defender.name().to_owned(),
                dealt: taken.applied,
                absorbed: taken.absorbed,
                remaining_health: defender.health(),
            },
        )
    }
}
