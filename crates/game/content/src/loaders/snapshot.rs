//! Snapshot persistence as JSON or RON.

use std::path::Path;

use game_core::GameError;
use tracing::debug;

use crate::Snapshot;
use crate::loaders::{LoadResult, read_file, write_file};

/// On-disk encoding of a snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnapshotFormat {
    Json,
    Ron,
}

impl SnapshotFormat {
    /// Pick the format from a `.json` or `.ron` extension.
    pub fn from_path(path: &Path) -> LoadResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Self::Json),
            Some(ext) if ext.eq_ignore_ascii_case("ron") => Ok(Self::Ron),
            _ => Err(anyhow::anyhow!(
                "Unsupported snapshot extension for {} (expected .json or .ron)",
                path.display()
            )),
        }
    }
}

/// Loader and saver for [`Snapshot`] files.
pub struct SnapshotLoader;

impl SnapshotLoader {
    pub fn to_string(snapshot: &Snapshot, format: SnapshotFormat) -> LoadResult<String> {
        match format {
            SnapshotFormat::Json => serde_json::to_string_pretty(snapshot)
                .map_err(|e| anyhow::anyhow!("Failed to encode snapshot JSON: {}", e)),
            SnapshotFormat::Ron => {
                ron::ser::to_string_pretty(snapshot, ron::ser::PrettyConfig::default())
                    .map_err(|e| anyhow::anyhow!("Failed to encode snapshot RON: {}", e))
            }
        }
    }

    /// Decode and validate a snapshot.
    pub fn from_str(content: &str, format: SnapshotFormat) -> LoadResult<Snapshot> {
        let snapshot: Snapshot = match format {
            SnapshotFormat::Json => serde_json::from_str(content)
                .map_err(|e| anyhow::anyhow!("Failed to parse snapshot JSON: {}", e))?,
            SnapshotFormat::Ron => ron::from_str(content)
                .map_err(|e| anyhow::anyhow!("Failed to parse snapshot RON: {}", e))?,
        };
        snapshot
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid snapshot [{}]: {}", e.error_code(), e))?;
        Ok(snapshot)
    }

    /// Save a snapshot, choosing the format from the file extension.
    pub fn save(path: &Path, snapshot: &Snapshot) -> LoadResult<()> {
        let format = SnapshotFormat::from_path(path)?;
        let content = Self::to_string(snapshot, format)?;
        write_file(path, &content)?;
        debug!(path = %path.display(), ?format, "snapshot saved");
        Ok(())
    }

    /// Load a snapshot, choosing the format from the file extension.
    pub fn load(path: &Path) -> LoadResult<Snapshot> {
        let format = SnapshotFormat::from_path(path)?;
        let content = read_file(path)?;
        Self::from_str(&content, format)
    }
}
