//! Game-system façade.
//!
//! [`GameSystem`] binds one progression strategy per concern and delegates
//! through those bindings. It adds no rules of its own: an unbound concern
//! yields a [`Status::MissingBinding`](crate::Status::MissingBinding) outcome
//! and leaves every argument untouched.

use tracing::debug;

use crate::config::GameConfig;
use crate::entity::Character;
use crate::env::{Environment, PcgRng, RandomSource};
use crate::outcome::{Outcome, StrategyKind};
use crate::progression::{DevelopmentStrategy, Item, Quest, QuestStrategy, TradingStrategy};

/// Single entry point for progression and the seam used by save/load and UI
/// collaborators. Owns the simulation's random source.
pub struct GameSystem {
    config: GameConfig,
    rng: Box<dyn RandomSource>,
    development: Option<DevelopmentStrategy>,
    trading: Option<TradingStrategy>,
    quest: Option<QuestStrategy>,
}

impl GameSystem {
    /// Creates a system drawing randomness from `rng`.
    pub fn new(config: GameConfig, rng: Box<dyn RandomSource>) -> Self {
        Self {
            config,
            rng,
            development: None,
            trading: None,
            quest: None,
        }
    }

    /// Creates a system with a [`PcgRng`] seeded from `config.seed`.
    pub fn from_config(config: GameConfig) -> Self {
        let rng = Box::new(PcgRng::seeded(config.seed));
        Self::new(config, rng)
    }

    pub fn seeded(seed: u64) -> Self {
        Self::from_config(GameConfig::with_seed(seed))
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The simulation's random source, for collaborators that run AI turns
    /// or encounters alongside the façade.
    pub fn rng_mut(&mut self) -> &mut dyn RandomSource {
        self.rng.as_mut()
    }

    // ===== bindings =====

    pub fn set_development_strategy(
        &mut self,
        strategy: DevelopmentStrategy,
    ) -> Option<DevelopmentStrategy> {
        debug!(?strategy, "development strategy bound");
        self.development.replace(strategy)
    }

    pub fn set_trading_strategy(&mut self, strategy: TradingStrategy) -> Option<TradingStrategy> {
        debug!("trading strategy bound");
        self.trading.replace(strategy)
    }

    pub fn set_quest_strategy(&mut self, strategy: QuestStrategy) -> Option<QuestStrategy> {
        debug!(?strategy, "quest strategy bound");
        self.quest.replace(strategy)
    }

    pub fn development_strategy(&self) -> Option<DevelopmentStrategy> {
        self.development
    }

    pub fn trading_strategy(&self) -> Option<&TradingStrategy> {
        self.trading.as_ref()
    }

    pub fn quest_strategy(&self) -> Option<QuestStrategy> {
        self.quest
    }

    // ===== delegation =====

    pub fn develop_character(&mut self, character: &mut Character, xp: u32) -> Outcome {
        match self.development {
            Some(strategy) => strategy.develop(character, xp, self.rng.as_mut()),
            None => Outcome::missing(character.name(), StrategyKind::Development),
        }
    }

    pub fn calculate_price(&self, item: &Item, env: &Environment) -> Outcome {
        match &self.trading {
            Some(strategy) => strategy.calculate_price(item, env),
            None => Outcome::missing(item.name.as_str(), StrategyKind::Trading),
        }
    }

    pub fn assign_quest(&self, player: &Character, quest: &mut Quest) -> Outcome {
        match self.quest {
            Some(strategy) => strategy.assign(player, quest),
            None => Outcome::missing(quest.title(), StrategyKind::Quest),
        }
    }

    pub fn record_quest_progress(&self, quest: &mut Quest, amount: u32) -> Outcome {
        match self.quest {
            Some(strategy) => strategy.record_progress(quest, amount),
            None => Outcome::missing(quest.title(), StrategyKind::Quest),
        }
    }

    pub fn evaluate_quest_completion(&self, player: &mut Character, quest: &mut Quest) -> Outcome {
        match self.quest {
            Some(strategy) => strategy.evaluate_completion(player, quest),
            None => Outcome::missing(quest.title(), StrategyKind::Quest),
        }
    }
}

impl Default for GameSystem {
    fn default() -> Self {
        Self::from_config(GameConfig::default())
    }
}

impl std::fmt::Debug for GameSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSystem")
            .field("config", &self.config)
            .field("development", &self.development)
            .field("trading", &self.trading)
            .field("quest", &self.quest)
            .finish_non_exhaustive()
    }
}
