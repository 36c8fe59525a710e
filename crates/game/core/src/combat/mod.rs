//! Combat resolution.
//!
//! - `damage`: pure arithmetic (rounding, defense reduction, minimum damage)
//! - `battle`: [`BattleStrategy`] attack/defense styles
//! - `tactic`: [`CombatTactic`] target selection and attack type

mod battle;
pub mod damage;
mod tactic;

pub use battle::BattleStrategy;
pub use tactic::{AttackType, CombatTactic};
