//! Progression strategies coordinated by [`crate::GameSystem`].
//!
//! - `development`: experience → skill points → stats
//! - `trading`: regional item pricing
//! - `quest`: adaptive quest scaling, progress and one-time crediting

mod development;
mod quest;
mod trading;

pub use development::{Attribute, DevelopmentStrategy};
pub use quest::{Quest, QuestStrategy};
pub use trading::{Economy, Item, ItemType, Rarity, TradingStrategy};
