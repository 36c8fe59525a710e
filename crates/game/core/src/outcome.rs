//! Outcome records returned by every strategy operation.
//!
//! A single record type covers the whole core: callers check [`Status`] to
//! tell success from a missing binding or a dead participant, read the
//! typed [`Effect`] for numeric deltas, and hand the narrative [`Tag`] to a
//! presentation layer. Tags are metadata, not contract.

use crate::combat::AttackType;
use crate::entity::Vec2;
use crate::resources::ResourceReport;

/// Strategy families an entity or the façade can bind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum StrategyKind {
    Battle,
    Ai,
    Movement,
    Resource,
    CombatTactic,
    Development,
    Trading,
    Quest,
}

/// Whether the operation was applied, and if not, why.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    /// The bound strategy ran.
    Applied,
    /// No strategy of this kind is bound; nothing was mutated.
    MissingBinding(StrategyKind),
    /// The acting entity is not alive; nothing was mutated.
    ActorDead,
    /// The target is not alive; nothing was mutated.
    TargetDead,
}

impl Status {
    #[inline]
    pub fn is_applied(self) -> bool {
        matches!(self, Status::Applied)
    }
}

/// Narrative tag for presentation layers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Tag {
    // battle
    AggressiveAttack,
    DefensiveAttack,
    BalancedAttack,
    AggressiveGuard,
    DefensiveGuard,
    BalancedGuard,
    AttackerDead,
    TargetDead,
    // ai
    Flee,
    Retreat,
    Hold,
    Defend,
    Wait,
    Observe,
    Threat,
    // movement
    Move,
    Arrive,
    Avoid,
    AlreadyThere,
    // resources and tactics
    Conserve,
    Consume,
    TargetSelected,
    NoTarget,
    AttackChosen,
    // progression
    Develop,
    Price,
    QuestAssigned,
    QuestProgress,
    QuestIncomplete,
    QuestCompleted,
    AlreadyCredited,
    // failures
    NoStrategy,
    ActorDead,
}

/// Threat assessment produced by AI strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum ThreatLevel {
    Low,
    Medium,
    High,
}

/// Stat changes applied by a development strategy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DevelopmentReport {
    pub skill_points: u32,
    pub max_health: u32,
    pub attack: u32,
    pub defense: u32,
}

/// Quest figures after an assignment, progress update or completion check.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QuestReport {
    pub xp_reward: u32,
    pub gold_reward: u32,
    pub goal: u32,
    pub progress: u32,
    pub xp_credited: u32,
    pub gold_credited: u32,
}

/// Typed numeric deltas carried by an outcome.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Effect {
    #[default]
    None,
    /// Damage exchange. `dealt` is the health the target actually lost.
    Damage {
        target: String,
        dealt: u32,
        absorbed: u32,
        remaining_health: u32,
    },
    Movement {
        from: Vec2,
        to: Vec2,
        travelled: f64,
    },
    Resources(ResourceReport),
    Threat(ThreatLevel),
    Target {
        index: usize,
        name: String,
    },
    AttackType(AttackType),
    Development(DevelopmentReport),
    Price(u32),
    Quest(QuestReport),
}

/// Descriptive record returned by every operation.
#[derive(Clone, Debug, PartialEq)]
pub struct Outcome {
    /// Identity of the acting entity (or item / quest for façade calls).
    pub actor: String,
    pub status: Status,
    pub tag: Tag,
    pub effect: Effect,
}

impl Outcome {
    pub fn applied(actor: impl Into<String>, tag: Tag, effect: Effect) -> Self {
        Self {
            actor: actor.into(),
            status: Status::Applied,
            tag,
            effect,
        }
    }

    pub fn missing(actor: impl Into<String>, kind: StrategyKind) -> Self {
        Self {
            actor: actor.into(),
            status: Status::MissingBinding(kind),
            tag: Tag::NoStrategy,
            effect: Effect::None,
        }
    }

    pub fn actor_dead(actor: impl Into<String>, tag: Tag) -> Self {
        Self {
            actor: actor.into(),
            status: Status::ActorDead,
            tag,
            effect: Effect::None,
        }
    }

    pub fn target_dead(actor: impl Into<String>) -> Self {
        Self {
            actor: actor.into(),
            status: Status::TargetDead,
            tag: Tag::TargetDead,
            effect: Effect::None,
        }
    }

    #[inline]
    pub fn is_applied(&self) -> bool {
        self.status.is_applied()
    }

    /// Health the target lost, or 0 for non-damage outcomes.
    pub fn damage_dealt(&self) -> u32 {
        match self.effect {
            Effect::Damage { dealt, .. } => dealt,
            _ => 0,
        }
    }

    /// Damage soaked up by defense, or 0 for non-damage outcomes.
    pub fn damage_absorbed(&self) -> u32 {
        match self.effect {
            Effect::Damage { absorbed, .. } => absorbed,
            _ => 0,
        }
    }

    pub fn threat(&self) -> Option<ThreatLevel> {
        match self.effect {
            Effect::Threat(level) => Some(level),
            _ => None,
        }
    }

    pub fn price(&self) -> Option<u32> {
        match self.effect {
            Effect::Price(price) => Some(price),
            _ => None,
        }
    }

    pub fn target_index(&self) -> Option<usize> {
        match self.effect {
            Effect::Target { index, .. } => Some(index),
            _ => None,
        }
    }

    pub fn position(&self) -> Option<Vec2> {
        match self.effect {
            Effect::Movement { to, .. } => Some(to),
            _ => None,
        }
    }
}
