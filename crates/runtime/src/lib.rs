//! Cooperative concurrent behaviors over the game-core entity model.
//!
//! A [`ConcurrentContext`] holds one long-running session: its state bag,
//! at most one attached [`ConcurrentStrategy`], and the records of the runs
//! it started. Behaviors (exploration, gathering, battle) suspend only at
//! explicit yield points and exit at the next one after a stop request.
//! [`Scheduler`] interleaves several contexts on a single-threaded tokio
//! `LocalSet`.
//!
//! Modules are organized by responsibility:
//! - [`context`] hosts the session state and the yield scope
//! - [`strategy`] defines the behavior contract and the built-in behaviors
//! - [`scheduler`] runs sessions side by side
//! - [`config`] and [`error`] carry tunables and failures
pub mod config;
pub mod context;
pub mod error;
pub mod scheduler;
pub mod strategy;
pub mod world;

pub use config::RuntimeConfig;
pub use context::{ConcurrentContext, ContextState, Scope, StopHandle, TaskRecord, TaskState};
pub use error::{Result, RuntimeError};
pub use scheduler::{Scheduler, Session};
pub use strategy::{
    BattleBehavior, BehaviorKind, ConcurrentStrategy, ExplorationBehavior, GatheringBehavior,
    RunReport, RunStatus,
};
pub use world::{ResourceNode, World};
