//! Combat tactics: which target to pick and how to strike it.

use crate::entity::{Character, CharacterClass, GameEntity};
use crate::env::Environment;
use crate::outcome::{Effect, Outcome, Tag};

/// Attack style chosen by a combat tactic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum AttackType {
    /// Concentrated strike on a priority class.
    Focused,
    Standard,
    /// Careful strike that keeps guard up.
    Cautious,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CombatTactic {
    /// Prefer classes in list order; unknown classes go last.
    Priority(Vec<CharacterClass>),
    /// Prefer the weakest target by current health.
    Defensive,
}

impl CombatTactic {
    pub fn priority(classes: impl IntoIterator<Item = CharacterClass>) -> Self {
        Self::Priority(classes.into_iter().collect())
    }

    /// Index into `candidates` of the preferred live target.
    ///
    /// Ties keep input order.
    pub fn pick(&self, candidates: &[&Character]) -> Option<usize> {
        let live = candidates
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_alive());
        match self {
            Self::Priority(order) => live
                .min_by_key(|(index, c)| (Self::rank(order, c.class()), *index))
                .map(|(index, _)| index),
            Self::Defensive => live
                .min_by_key(|(index, c)| (c.health(), *index))
                .map(|(index, _)| index),
        }
    }

    fn rank(order: &[CharacterClass], class: CharacterClass) -> usize {
        order
            .iter()
            .position(|&c| c == class)
            .unwrap_or(order.len())
    }

    pub fn select_target(
        &self,
        entity: &GameEntity,
        candidates: &[&Character],
        _env: &Environment,
    ) -> Outcome {
        match self.pick(candidates) {
            Some(index) => Outcome::applied(
                entity.name(),
                Tag::TargetSelected,
                Effect::Target {
                    index,
                    name: candidates[index].name().to_owned(),
                },
            ),
            None => Outcome::applied(entity.name(), Tag::NoTarget, Effect::None),
        }
    }

    pub fn attack_type(&self, target: &Character) -> AttackType {
        match self {
            Self::Priority(order) if order.contains(&target.class()) => AttackType::Focused,
            Self::Priority(_) => AttackType::Standard,
            Self::Defensive => AttackType::Cautious,
        }
    }

    pub fn choose_attack_type(
        &self,
        entity: &GameEntity,
        target: &Character,
        _env: &Environment,
    ) -> Outcome {
        Outcome::applied(
            entity.name(),
            Tag::AttackChosen,
            Effect::AttackType(self.attack_type(target)),
        )
    }
}
