//! Errors surfaced by the cooperative runtime.
//!
//! Behavioral conditions (a stop request, a refused restart, a defeat) are
//! reported through [`crate::RunReport`]; these variants cover failures of
//! the scheduling machinery itself.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("context `{context}` has no concurrent strategy attached")]
    StrategyNotSet { context: String },

    #[error("cooperative task join failed")]
    TaskJoin(#[source] tokio::task::JoinError),

    #[error("failed to build the cooperative runtime")]
    RuntimeBuild(#[source] std::io::Error),
}
