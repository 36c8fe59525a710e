//! Entity model: characters, enemies and positioned world entities.
//!
//! Entities own their strategy bindings. Strategies never own entities; they
//! receive them per call through the dispatch methods defined here, which
//! report a missing binding instead of failing.

mod character;
mod enemy;
mod world;

pub use character::{Character, CharacterBuilder, CharacterClass, DamageTaken};
pub use enemy::Enemy;
pub use world::{GameEntity, Vec2};
