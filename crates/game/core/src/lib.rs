//! Strategy-driven game rules shared by the runtime, content and client crates.
//!
//! `game-core` owns the entity model (characters, enemies, positioned world
//! entities) and every synchronous strategy that acts on it: battle, AI,
//! movement, resource management, combat tactics and the progression
//! strategies behind [`GameSystem`]. Entities own their strategy bindings;
//! dispatching with nothing bound returns an [`Outcome`] whose [`Status`]
//! says so instead of failing.
//!
//! Randomness always flows through an injected [`RandomSource`].
pub mod ai;
pub mod combat;
pub mod config;
pub mod encounter;
pub mod entity;
pub mod env;
pub mod error;
pub mod movement;
pub mod outcome;
pub mod progression;
pub mod resources;
pub mod system;

pub use ai::{AiStrategy, TacticalProfile};
pub use combat::{AttackType, BattleStrategy, CombatTactic};
pub use config::GameConfig;
pub use encounter::{Encounter, EncounterReport, Winner};
pub use entity::{Character, CharacterBuilder, CharacterClass, DamageTaken, Enemy, GameEntity, Vec2};
pub use env::{Environment, PcgRng, RandomSource, SequenceRng, mix_seed};
pub use error::{ErrorSeverity, GameError, SetupError};
pub use movement::{MovementStrategy, Step};
pub use outcome::{
    DevelopmentReport, Effect, Outcome, QuestReport, Status, StrategyKind, Tag, ThreatLevel,
};
pub use progression::{
    Attribute, DevelopmentStrategy, Economy, Item, ItemType, Quest, QuestStrategy, Rarity,
    TradingStrategy,
};
pub use resources::{ResourceLevel, ResourceReport, ResourceStrategy};
pub use system::GameSystem;
