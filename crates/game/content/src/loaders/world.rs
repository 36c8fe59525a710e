//! Cooperative-runtime world loader.
//!
//! Loads the areas, resource nodes and enemies a scheduler session acts on.

use std::path::Path;

use game_core::GameError;
use runtime::World;

use crate::loaders::{LoadResult, read_file};

/// Loader for [`World`] data from RON files.
pub struct WorldLoader;

impl WorldLoader {
    /// Load a world from a RON file and check its enemies' invariants.
    pub fn load(path: &Path) -> LoadResult<World> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<World> {
        let world: World = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse world RON: {}", e))?;
        for enemy in &world.enemies {
            enemy
                .check_invariants()
                .map_err(|e| anyhow::anyhow!("Invalid world [{}]: {}", e.error_code(), e))?;
        }
        Ok(world)
    }
}
