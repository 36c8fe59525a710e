use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use super::{BehaviorKind, ConcurrentStrategy, RunStatus};
use crate::context::Scope;
use crate::world::World;

/// Collects every resource node, sleeping `base / (efficiency × quality)`
/// per node and banking `floor(quantity × quality × efficiency)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GatheringBehavior {
    efficiency: f64,
}

impl GatheringBehavior {
    pub fn new(efficiency: f64) -> Self {
        let efficiency = if efficiency.is_finite() { efficiency.max(0.0) } else { 0.0 };
        Self { efficiency }
    }

    pub fn efficiency(&self) -> f64 {
        self.efficiency
    }
}

impl Default for GatheringBehavior {
    fn default() -> Self {
        Self::new(1.0)
    }
}

#[async_trait(?Send)]
impl ConcurrentStrategy for GatheringBehavior {
    fn kind(&self) -> BehaviorKind {
        BehaviorKind::Gathering
    }

    async fn execute(&self, scope: &mut Scope<'_>, world: &mut World) -> RunStatus {
        let base = scope.config().gather_base_time();

        for node in &world.nodes {
            let rate = self.efficiency * node.quality;
            // unproductive nodes cost a plain yield and bank nothing
            let flow = if rate.is_finite() && rate > 0.0 {
                let pause = Duration::try_from_secs_f64(base.as_secs_f64() / rate)
                    .unwrap_or(Duration::MAX);
                scope.sleep(pause).await
            } else {
                scope.yield_now().await
            };
            if flow.is_break() {
                return RunStatus::Stopped;
            }

            let amount = if rate > 0.0 {
                (node.quantity as f64 * rate).floor() as u32
            } else {
                0
            };
            let total = scope.state.resources.entry(node.kind.clone()).or_default();
            *total = total.saturating_add(amount);
            scope.step();
            debug!(context = scope.name(), kind = %node.kind, amount, "gathered");
        }
        RunStatus::Completed
    }
}
