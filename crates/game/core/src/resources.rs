//! Resource-management strategies.

use crate::entity::GameEntity;
use crate::env::Environment;
use crate::outcome::{Effect, Outcome, Tag};

const LOW_FRACTION: f64 = 0.3;
const SURPLUS_FRACTION: f64 = 0.8;

const MANA: &str = "mana";
const HEALTH: &str = "health";
const MANA_UPKEEP: u32 = 10;
const HEALTH_RESTORE: u32 = 20;
const HEALTH_RESTORE_BELOW: f64 = 0.5;

/// Fill level of a single resource relative to its bound.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum ResourceLevel {
    /// Under 30% of max.
    Low,
    Balanced,
    /// Over 80% of max.
    Surplus,
}

impl ResourceLevel {
    pub fn classify(amount: u32, max: u32) -> Self {
        let fraction = fraction(amount, max);
        if fraction < LOW_FRACTION {
            Self::Low
        } else if fraction > SURPLUS_FRACTION {
            Self::Surplus
        } else {
            Self::Balanced
        }
    }
}

fn fraction(amount: u32, max: u32) -> f64 {
    if max == 0 {
        0.0
    } else {
        amount as f64 / max as f64
    }
}

/// Classification of every resource plus any changes a strategy made.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResourceReport {
    pub levels: Vec<(String, ResourceLevel)>,
    pub mana_spent: u32,
    pub health_restored: u32,
}

impl ResourceReport {
    pub fn level_of(&self, resource: &str) -> Option<ResourceLevel> {
        self.levels
            .iter()
            .find(|(name, _)| name == resource)
            .map(|&(_, level)| level)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ResourceStrategy {
    /// Classify only; never mutates.
    Conservative,
    /// Burns mana upkeep and tops up low health.
    Aggressive,
}

impl ResourceStrategy {
    pub fn manage(self, entity: &mut GameEntity, _env: &Environment) -> Outcome {
        let mut report = ResourceReport::default();

        let tag = match self {
            Self::Conservative => Tag::Conserve,
            Self::Aggressive => {
                if entity.spend_resource(MANA, MANA_UPKEEP) {
                    report.mana_spent = MANA_UPKEEP;
                }
                if entity.resources().contains_key(HEALTH) {
                    let max = entity.resource_max(HEALTH);
                    if fraction(entity.resource(HEALTH), max) < HEALTH_RESTORE_BELOW {
                        report.health_restored = entity.add_resource(HEALTH, HEALTH_RESTORE);
                    }
                }
                Tag::Consume
            }
        };

        report.levels = entity
            .resources()
            .iter()
            .map(|(name, &amount)| {
                let level = ResourceLevel::classify(amount, entity.resource_max(name));
                (name.clone(), level)
            })
            .collect();

        Outcome::applied(entity.name(), tag, Effect::Resources(report))
    }
}
