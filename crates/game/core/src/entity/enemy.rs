//! Hostile combatants driven by AI strategies.

use std::ops::{Deref, DerefMut};

use crate::ai::AiStrategy;
use crate::entity::Character;
use crate::env::{Environment, RandomSource};
use crate::outcome::{Outcome, StrategyKind};

/// A [`Character`] with an enemy type tag and an optional AI strategy.
///
/// Dereferences to the underlying character, so stats, health and the
/// battle-strategy binding are shared with the player-side API.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Enemy {
    character: Character,
    kind: String,
    #[cfg_attr(feature = "serde", serde(skip))]
    ai: Option<AiStrategy>,
}

impl Enemy {
    pub fn new(character: Character, kind: impl Into<String>) -> Self {
        Self {
            character,
            kind: kind.into(),
            ai: None,
        }
    }

    pub fn with_ai(mut self, ai: AiStrategy) -> Self {
        self.ai = Some(ai);
        self
    }

    /// Enemy type tag, e.g. `"goblin"`.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn character(&self) -> &Character {
        &self.character
    }

    pub fn character_mut(&mut self) -> &mut Character {
        &mut self.character
    }

    pub fn ai_strategy(&self) -> Option<AiStrategy> {
        self.ai
    }

    /// Bind an AI strategy, returning the one it replaces.
    pub fn attach_ai_strategy(&mut self, ai: AiStrategy) -> Option<AiStrategy> {
        self.ai.replace(ai)
    }

    pub fn detach_ai_strategy(&mut self) -> Option<AiStrategy> {
        self.ai.take()
    }

    /// Let the bound AI decide and perform this enemy's action.
    pub fn take_turn(
        &mut self,
        player: &mut Character,
        env: &Environment,
        rng: &mut dyn RandomSource,
    ) -> Outcome {
        match self.ai {
            Some(ai) => ai.decide_action(self, player, env, rng),
            None => Outcome::missing(self.character.name(), StrategyKind::Ai),
        }
    }

    /// Ask the bound AI how dangerous `player` is.
    pub fn assess(&self, player: &Character, env: &Environment) -> Outcome {
        match self.ai {
            Some(ai) => ai.evaluate_threat(self, player, env),
            None => Outcome::missing(self.character.name(), StrategyKind::Ai),
        }
    }
}

impl Deref for Enemy {
    type Target = Character;

    fn deref(&self) -> &Character {
        &self.character
    }
}

impl DerefMut for Enemy {
    fn deref_mut(&mut self) -> &mut Character {
        &mut self.character
    }
}

impl AsRef<Character> for Enemy {
    fn as_ref(&self) -> &Character {
        &self.character
    }
}
