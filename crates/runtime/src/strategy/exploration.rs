use async_trait::async_trait;
use tracing::debug;

use super::{BehaviorKind, ConcurrentStrategy, RunStatus};
use crate::context::Scope;
use crate::world::World;

/// Walks the world's areas in order, rolling for treasure in each.
///
/// Refuses to start while the context still holds explored areas or
/// treasure from an earlier run, whether it completed or was stopped; clear
/// the state first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExplorationBehavior;

pub(crate) fn treasure_key(area_index: usize) -> String {
    format!("treasure_{area_index}")
}

#[async_trait(?Send)]
impl ConcurrentStrategy for ExplorationBehavior {
    fn kind(&self) -> BehaviorKind {
        BehaviorKind::Exploration
    }

    async fn execute(&self, scope: &mut Scope<'_>, world: &mut World) -> RunStatus {
        if scope.state.has_exploration() {
            return RunStatus::Refused;
        }

        let chance = scope.config().treasure_chance;
        let every = scope.config().yield_every();

        for (index, area) in world.areas.iter().enumerate() {
            scope.state.explored.push(area.clone());
            let found = scope.rng.next_f64() < chance;
            if found {
                scope.state.treasures.insert(treasure_key(index));
            }
            scope.step();
            debug!(context = scope.name(), area = %area, found, "explored");

            if (index + 1) % every == 0 && scope.yield_now().await.is_break() {
                return RunStatus::Stopped;
            }
        }
        RunStatus::Completed
    }
}
