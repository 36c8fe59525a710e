//! Console front end for the arena.
//!
//! The binary is the composition root: it reads [`ArenaSettings`] from the
//! environment, loads the TOML configuration they point at, plays the
//! [`demo`] scenario and prints every record through the [`presenter`].
pub mod config;
pub mod demo;
pub mod presenter;

pub use config::ArenaSettings;
pub use demo::{core_demo, runtime_demo};
pub use presenter::{format_encounter, format_outcome, format_run_report};
