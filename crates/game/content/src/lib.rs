//! Persistence and configuration for the arena.
//!
//! This crate keeps game data outside the rules crates:
//! - session snapshots (characters, enemies, world entities, quests) as JSON or RON
//! - arena configuration (core + runtime tunables) as TOML
//! - cooperative-runtime worlds as RON
//!
//! Strategy bindings are never persisted; callers reattach them after load.

pub mod snapshot;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use snapshot::Snapshot;

#[cfg(feature = "loaders")]
pub use loaders::{
    ArenaConfig, ConfigLoader, ContentStore, LoadResult, SnapshotFormat, SnapshotLoader,
    WorldLoader,
};
