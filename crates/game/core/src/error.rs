//! Common error infrastructure for game-core.
//!
//! Most recoverable conditions (missing strategy bindings, dead participants)
//! are reported through [`crate::Outcome`] rather than as errors. The types
//! here cover the remaining failures: constructing or loading entities whose
//! data violates the model's invariants.

use thiserror::Error;

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - can retry with same or alternative input.
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: empty entity name, zero maximum health
    Validation,

    /// Internal error - unexpected state inconsistency.
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all game-core errors.
///
/// Provides a uniform interface for error classification across the crate
/// and for downstream crates that wrap these errors.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Invariant violations detected while building or loading entities.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("entity name must not be empty")]
    EmptyName,

    #[error("{name}: maximum health must be greater than zero")]
    ZeroMaxHealth { name: String },

    #[error("{name}: level must be at least 1")]
    ZeroLevel { name: String },

    #[error("{name}: health {health} exceeds maximum {max}")]
    HealthAboveMax { name: String, health: u32, max: u32 },

    #[error("{name}: alive flag disagrees with health {health}")]
    AliveMismatch { name: String, health: u32 },

    #[error("{name}: resource `{resource}` holds {amount}, above its bound {max}")]
    ResourceAboveMax {
        name: String,
        resource: String,
        amount: u32,
        max: u32,
    },

    #[error("quest title must not be empty")]
    EmptyQuestTitle,

    #[error("{title}: progress {progress} recorded on a quest that was never assigned")]
    UnassignedProgress { title: String, progress: u32 },
}

impl GameError for SetupError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::AliveMismatch { .. } | Self::UnassignedProgress { .. } => {
                ErrorSeverity::Internal
            }
            _ => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyName => "empty_name",
            Self::ZeroMaxHealth { .. } => "zero_max_health",
            Self::ZeroLevel { .. } => "zero_level",
            Self::HealthAboveMax { .. } => "health_above_max",
            Self::AliveMismatch { .. } => "alive_mismatch",
            Self::ResourceAboveMax { .. } => "resource_above_max",
            Self::EmptyQuestTitle => "empty_quest_title",
            Self::UnassignedProgress { .. } => "unassigned_progress",
        }
    }
}
