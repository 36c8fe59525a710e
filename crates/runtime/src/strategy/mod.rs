//! Cooperative behaviors run on a [`ConcurrentContext`](crate::ConcurrentContext).
//!
//! A behavior only suspends through [`Scope::yield_now`] and [`Scope::sleep`];
//! both report a pending stop request so the behavior can return
//! [`RunStatus::Stopped`] right there. Mutations made before a stop stay.

mod battle;
mod exploration;
mod gathering;

pub use battle::BattleBehavior;
pub use exploration::ExplorationBehavior;
pub use gathering::GatheringBehavior;

use async_trait::async_trait;

use crate::context::Scope;
use crate::world::World;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum BehaviorKind {
    Exploration,
    Gathering,
    Battle,
}

/// How a run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum RunStatus {
    /// Ran to the end of its work list.
    Completed,
    /// Observed a stop request at a yield point.
    Stopped,
    /// Context health reached zero.
    Defeated,
    /// Declined to start on the current state.
    Refused,
    /// The context had no strategy attached.
    MissingBinding,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunReport {
    pub context: String,
    pub behavior: Option<BehaviorKind>,
    pub status: RunStatus,
    /// Units of work performed (areas, nodes or rounds).
    pub steps: u32,
}

/// A long-running behavior that interleaves with others on one thread.
#[async_trait(?Send)]
pub trait ConcurrentStrategy {
    fn kind(&self) -> BehaviorKind;

    /// Run to completion, yielding only through `scope`.
    async fn execute(&self, scope: &mut Scope<'_>, world: &mut World) -> RunStatus;
}
