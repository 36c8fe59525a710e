//! Long-running session state and the cooperative scope handed to strategies.

use std::collections::{BTreeMap, BTreeSet};
use std::ops::ControlFlow;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use game_core::{PcgRng, RandomSource, mix_seed};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::RuntimeConfig;
use crate::strategy::{BehaviorKind, ConcurrentStrategy, RunReport, RunStatus};
use crate::world::World;

/// Mutable state bag shared by every behavior run on one context.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextState {
    /// Remaining health; battles end in defeat when it reaches zero.
    pub health: u32,
    /// Areas visited, in order.
    pub explored: Vec<String>,
    /// Treasure entries named `treasure_{area index}`.
    pub treasures: BTreeSet<String>,
    /// Gathered amounts by resource kind.
    pub resources: BTreeMap<String, u32>,
    /// Two lines per battle round.
    pub battle_log: Vec<String>,
}

impl ContextState {
    pub fn with_health(health: u32) -> Self {
        Self {
            health,
            ..Self::default()
        }
    }

    pub fn has_treasure(&self) -> bool {
        !self.treasures.is_empty()
    }

    /// Whether an earlier exploration left visited areas or treasure behind.
    pub fn has_exploration(&self) -> bool {
        !self.explored.is_empty() || self.has_treasure()
    }

    /// Forget everything except health.
    pub fn clear(&mut self) {
        *self = Self::with_health(self.health);
    }
}

/// Cloneable stop flag observed by strategies at every yield point.
#[derive(Clone, Debug, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn stop(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    fn reset(&self) {
        self.0.store(false, Ordering::Release);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaskState {
    Running,
    Finished(RunStatus),
}

/// Bookkeeping for one run of the attached strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TaskRecord {
    pub id: u64,
    pub behavior: BehaviorKind,
    pub state: TaskState,
}

impl TaskRecord {
    pub fn is_finished(&self) -> bool {
        matches!(self.state, TaskState::Finished(_))
    }
}

/// What a running strategy may touch: the context's state, its random
/// source and configuration, and the yield helpers.
pub struct Scope<'a> {
    name: &'a str,
    config: &'a RuntimeConfig,
    stop: &'a StopHandle,
    pub state: &'a mut ContextState,
    pub rng: &'a mut dyn RandomSource,
    steps: u32,
}

impl Scope<'_> {
    pub fn name(&self) -> &str {
        self.name
    }

    pub fn config(&self) -> &RuntimeConfig {
        self.config
    }

    pub fn is_stopped(&self) -> bool {
        self.stop.is_stopped()
    }

    /// Count one unit of work toward the run report.
    pub fn step(&mut self) {
        self.steps += 1;
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Hand control back to the scheduler, then report whether to go on.
    pub async fn yield_now(&self) -> ControlFlow<()> {
        tokio::task::yield_now().await;
        self.checkpoint()
    }

    /// Sleep for `duration` (a yield point), then report whether to go on.
    pub async fn sleep(&self, duration: Duration) -> ControlFlow<()> {
        tokio::time::sleep(duration).await;
        self.checkpoint()
    }

    fn checkpoint(&self) -> ControlFlow<()> {
        if self.stop.is_stopped() {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }
}

/// One long-running session: a name, a state bag, at most one attached
/// concurrent strategy, and the records of the runs it has started.
pub struct ConcurrentContext {
    name: String,
    config: RuntimeConfig,
    state: ContextState,
    strategy: Option<Box<dyn ConcurrentStrategy>>,
    rng: Box<dyn RandomSource>,
    stop: StopHandle,
    tasks: Vec<TaskRecord>,
    next_task: u64,
}

impl ConcurrentContext {
    pub fn new(name: impl Into<String>, config: RuntimeConfig) -> Self {
        let name = name.into();
        let rng = Box::new(PcgRng::seeded(mix_seed(config.seed, stream_of(&name))));
        Self {
            name,
            state: ContextState::with_health(config.starting_health),
            config,
            strategy: None,
            rng,
            stop: StopHandle::default(),
            tasks: Vec::new(),
            next_task: 0,
        }
    }

    pub fn with_rng(mut self, rng: Box<dyn RandomSource>) -> Self {
        self.rng = rng;
        self
    }

    pub fn with_strategy(mut self, strategy: impl ConcurrentStrategy + 'static) -> Self {
        self.attach_strategy(strategy);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn state(&self) -> &ContextState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut ContextState {
        &mut self.state
    }

    /// Bind a concurrent strategy, replacing any previous one.
    pub fn attach_strategy(&mut self, strategy: impl ConcurrentStrategy + 'static) {
        self.strategy = Some(Box::new(strategy));
    }

    pub fn detach_strategy(&mut self) -> Option<Box<dyn ConcurrentStrategy>> {
        self.strategy.take()
    }

    pub fn behavior(&self) -> Option<BehaviorKind> {
        self.strategy.as_ref().map(|strategy| strategy.kind())
    }

    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// Ask the running strategy to exit at its next yield point.
    ///
    /// The request outlives the run: later runs also stop at their first
    /// yield until [`ConcurrentContext::resume`] is called.
    pub fn stop(&self) {
        self.stop.stop();
    }

    /// Clear a previous stop request.
    pub fn resume(&self) {
        self.stop.reset();
    }

    pub fn tasks(&self) -> &[TaskRecord] {
        &self.tasks
    }

    pub fn pending_tasks(&self) -> usize {
        self.tasks.iter().filter(|task| !task.is_finished()).count()
    }

    /// Drop finished task records; running ones are kept.
    pub fn cleanup(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|task| !task.is_finished());
        before - self.tasks.len()
    }

    /// Run the attached strategy against `world` until it finishes, is
    /// refused, or observes a stop request.
    pub async fn run(&mut self, world: &mut World) -> RunReport {
        let Self {
            name,
            config,
            state,
            strategy,
            rng,
            stop,
            tasks,
            next_task,
        } = self;

        let Some(strategy) = strategy.as_deref() else {
            warn!(context = %name, "no concurrent strategy attached");
            return RunReport {
                context: name.clone(),
                behavior: None,
                status: RunStatus::MissingBinding,
                steps: 0,
            };
        };

        let behavior = strategy.kind();
        let id = *next_task;
        *next_task += 1;
        tasks.push(TaskRecord {
            id,
            behavior,
            state: TaskState::Running,
        });
        info!(context = %name, %behavior, task = id, "run started");

        let mut scope = Scope {
            name: name.as_str(),
            config,
            stop,
            state,
            rng: rng.as_mut(),
            steps: 0,
        };
        let status = strategy.execute(&mut scope, world).await;
        let steps = scope.steps;

        if let Some(task) = tasks.iter_mut().find(|task| task.id == id) {
            task.state = TaskState::Finished(status);
        }
        match status {
            RunStatus::Refused => warn!(context = %name, %behavior, "run refused"),
            _ => info!(context = %name, %behavior, %status, steps, "run finished"),
        }

        RunReport {
            context: name.clone(),
            behavior: Some(behavior),
            status,
            steps,
        }
    }
}

/// FNV-1a of the context name, used as its RNG stream id.
fn stream_of(name: &str) -> u64 {
    name.bytes()
        .fold(0xcbf2_9ce4_8422_2325, |hash, byte| {
            (hash ^ u64::from(byte)).wrapping_mul(0x0100_0000_01b3)
        })
}

impl std::fmt::Debug for ConcurrentContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConcurrentContext")
            .field("name", &self.name)
            .field("state", &self.state)
            .field("behavior", &self.behavior())
            .field("tasks", &self.tasks)
            .finish_non_exhaustive()
    }
}
