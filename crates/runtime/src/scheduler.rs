//! Runs several contexts side by side on one thread.
//!
//! Sessions are spawned onto a [`LocalSet`] in insertion order, so the
//! ready queue starts in that order and they interleave only at yield
//! points.

use tokio::task::LocalSet;
use tracing::info;

use crate::context::ConcurrentContext;
use crate::error::{Result, RuntimeError};
use crate::strategy::RunReport;
use crate::world::World;

/// A context, the world it acted on, and how its run ended.
#[derive(Debug)]
pub struct Session {
    pub context: ConcurrentContext,
    pub world: World,
    pub report: RunReport,
}

#[derive(Debug, Default)]
pub struct Scheduler {
    pending: Vec<(ConcurrentContext, World)>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a context. It must already have a strategy attached.
    pub fn add(&mut self, context: ConcurrentContext, world: World) -> Result<()> {
        if context.behavior().is_none() {
            return Err(RuntimeError::StrategyNotSet {
                context: context.name().to_owned(),
            });
        }
        self.pending.push((context, world));
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Run every queued context to the end, returning sessions in queue order.
    pub async fn run(self) -> Result<Vec<Session>> {
        let local = LocalSet::new();
        local
            .run_until(async move {
                let handles: Vec<_> = self
                    .pending
                    .into_iter()
                    .map(|(mut context, mut world)| {
                        tokio::task::spawn_local(async move {
                            let report = context.run(&mut world).await;
                            Session {
                                context,
                                world,
                                report,
                            }
                        })
                    })
                    .collect();
                info!(sessions = handles.len(), "scheduler started");

                let mut sessions = Vec::with_capacity(handles.len());
                for handle in handles {
                    sessions.push(handle.await.map_err(RuntimeError::TaskJoin)?);
                }
                Ok(sessions)
            })
            .await
    }

    /// Build a current-thread tokio runtime and run every queued context on it.
    pub fn block_on(self) -> Result<Vec<Session>> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(RuntimeError::RuntimeBuild)?;
        runtime.block_on(self.run())
    }
}
