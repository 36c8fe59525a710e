//! Loaders and savers backed by files.
//!
//! - [`SnapshotLoader`]: session snapshots as JSON or RON, chosen by extension
//! - [`ConfigLoader`]: `ArenaConfig` from TOML
//! - [`WorldLoader`]: cooperative-runtime worlds from RON
//! - [`ContentStore`]: all of the above rooted at one data directory

pub mod config;
pub mod snapshot;
pub mod store;
pub mod world;

pub use config::{ArenaConfig, ConfigLoader};
pub use snapshot::{SnapshotFormat, SnapshotLoader};
pub use store::ContentStore;
pub use world::WorldLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

pub(crate) fn write_file(path: &Path, content: &str) -> LoadResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!("Failed to create directory {}: {}", parent.display(), e)
        })?;
    }
    std::fs::write(path, content)
        .map_err(|e| anyhow::anyhow!("Failed to write file {}: {}", path.display(), e))
}
