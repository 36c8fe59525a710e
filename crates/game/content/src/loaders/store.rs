//! Content store rooted at a data directory.

use std::path::{Path, PathBuf};

use runtime::World;

use crate::Snapshot;
use crate::loaders::{ArenaConfig, ConfigLoader, LoadResult, SnapshotLoader, WorldLoader};

/// Loads configuration and worlds, and saves/loads snapshots, under one
/// data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── worlds/
/// │   └── cave.ron
/// └── saves/
///     ├── slot1.json
///     └── slot2.ron
/// ```
pub struct ContentStore {
    data_dir: PathBuf,
}

impl ContentStore {
    /// Creates a new content store pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load configuration from `config.toml`, or defaults when it is absent.
    pub fn load_config(&self) -> LoadResult<ArenaConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            return Ok(ArenaConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load a world from `worlds/{name}.ron`.
    pub fn load_world(&self, name: &str) -> LoadResult<World> {
        let path = self.data_dir.join("worlds").join(format!("{}.ron", name));
        WorldLoader::load(&path)
    }

    /// Save to `saves/{file_name}`; the extension picks JSON or RON.
    pub fn save_snapshot(&self, file_name: &str, snapshot: &Snapshot) -> LoadResult<PathBuf> {
        let path = self.data_dir.join("saves").join(file_name);
        SnapshotLoader::save(&path, snapshot)?;
        Ok(path)
    }

    /// Load from `saves/{file_name}`.
    pub fn load_snapshot(&self, file_name: &str) -> LoadResult<Snapshot> {
        let path = self.data_dir.join("saves").join(file_name);
        SnapshotLoader::load(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{Character, CharacterClass};

    #[test]
    fn store_paths() {
        let store = ContentStore::new("/tmp/data");
        assert_eq!(store.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn missing_config_means_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = ContentStore::new(dir.path());
        assert_eq!(store.load_config().unwrap(), ArenaConfig::default());
    }

    #[test]
    fn saves_land_under_saves_dir() {
        let dir = tempfile::tempdir().unwrap();
        let store = ContentStore::new(dir.path());
        let snapshot = Snapshot {
            characters: vec![Character::builder("Bran", CharacterClass::Archer).build().unwrap()],
            ..Snapshot::default()
        };

        let path = store.save_snapshot("slot1.ron", &snapshot).unwrap();

        assert_eq!(path, dir.path().join("saves").join("slot1.ron"));
        assert_eq!(store.load_snapshot("slot1.ron").unwrap(), snapshot);
    }
}
