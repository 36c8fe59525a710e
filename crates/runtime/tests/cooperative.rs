use std::time::Duration;

use game_core::{BattleStrategy, Character, CharacterClass, Enemy, SequenceRng};
use runtime::{
    BattleBehavior, BehaviorKind, ConcurrentContext, ExplorationBehavior, GatheringBehavior,
    ResourceNode, RunStatus, RuntimeConfig, RuntimeError, Scheduler, TaskState, World,
};
use tokio::task::LocalSet;
use tokio::time::Instant;

fn scripted(name: &str, values: Vec<f64>) -> ConcurrentContext {
    ConcurrentContext::new(name, RuntimeConfig::default())
        .with_rng(Box::new(SequenceRng::new(values)))
}

fn monster(name: &str, health: u32, attack: i32) -> Enemy {
    let body = Character::builder(name, CharacterClass::Monster)
        .max_health(health)
        .attack(attack)
        .defense(0)
        .build()
        .unwrap();
    Enemy::new(body, "beast")
}

fn areas(count: usize) -> World {
    World::new().with_areas((0..count).map(|i| format!("area-{i}")))
}

#[tokio::test(start_paused = true)]
async fn exploration_records_treasure_by_area_index() {
    let mut context = scripted("scout", vec![0.1, 0.5, 0.5, 0.19, 0.9, 0.2, 0.05])
        .with_strategy(ExplorationBehavior);
    let mut world = areas(7);

    let report = context.run(&mut world).await;

    assert_eq!(report.status, RunStatus::Completed);
    assert_eq!(report.behavior, Some(BehaviorKind::Exploration));
    assert_eq!(report.steps, 7);
    let found: Vec<_> = context.state().treasures.iter().cloned().collect();
    assert_eq!(found, vec!["treasure_0", "treasure_3", "treasure_6"]);
    assert_eq!(context.state().explored.len(), 7);
}

#[tokio::test(start_paused = true)]
async fn exploration_refuses_restart_until_cleared() {
    let mut context = scripted("scout", vec![0.0]).with_strategy(ExplorationBehavior);
    let mut world = areas(2);

    assert_eq!(context.run(&mut world).await.status, RunStatus::Completed);

    let again = context.run(&mut world).await;
    assert_eq!(again.status, RunStatus::Refused);
    assert_eq!(again.steps, 0);
    assert_eq!(context.state().explored.len(), 2);

    context.state_mut().clear();
    assert_eq!(context.run(&mut world).await.status, RunStatus::Completed);
}

#[tokio::test(start_paused = true)]
async fn exploration_without_treasure_still_needs_clearing() {
    let mut context = scripted("scout", vec![0.9]).with_strategy(ExplorationBehavior);
    let mut world = areas(4);

    let first = context.run(&mut world).await;
    assert_eq!(first.status, RunStatus::Completed);
    assert!(!context.state().has_treasure());

    let second = context.run(&mut world).await;
    assert_eq!(second.status, RunStatus::Refused);
    assert_eq!(context.state().explored, vec!["area-0", "area-1", "area-2", "area-3"]);
}

#[tokio::test(start_paused = true)]
async fn stopped_exploration_needs_clearing() {
    let mut context = scripted("scout", vec![0.9]).with_strategy(ExplorationBehavior);
    let mut world = areas(6);
    context.stop();
    assert_eq!(context.run(&mut world).await.status, RunStatus::Stopped);

    context.resume();
    assert_eq!(context.run(&mut world).await.status, RunStatus::Refused);
    assert_eq!(context.state().explored.len(), 3);
}

#[tokio::test(start_paused = true)]
async fn stop_persists_until_resumed() {
    let mut context = scripted("scout", vec![0.9]).with_strategy(ExplorationBehavior);
    let mut world = areas(6);
    context.stop();
    assert_eq!(context.run(&mut world).await.status, RunStatus::Stopped);

    context.state_mut().clear();
    let report = context.run(&mut world).await;
    assert_eq!(report.status, RunStatus::Stopped);
    assert_eq!(report.steps, 3);
}

#[tokio::test(start_paused = true)]
async fn stop_takes_effect_at_next_yield() {
    let mut context = scripted("scout", vec![0.9]).with_strategy(ExplorationBehavior);
    let mut world = areas(9);
    context.stop();

    let report = context.run(&mut world).await;

    assert_eq!(report.status, RunStatus::Stopped);
    assert_eq!(report.steps, 3, "cadence 3 puts the first yield after area 3");
    assert_eq!(context.state().explored.len(), 3, "work before the stop is kept");

    context.resume();
    context.state_mut().clear();
    assert_eq!(context.run(&mut world).await.status, RunStatus::Completed);
}

#[tokio::test(start_paused = true)]
async fn gathering_sleeps_and_banks_by_quality() {
    let mut context = scripted("miner", vec![0.0]).with_strategy(GatheringBehavior::new(2.0));
    let mut world = World::new()
        .with_node(ResourceNode::new("ore", 10, 1.5))
        .with_node(ResourceNode::new("herb", 7, 0.5))
        .with_node(ResourceNode::new("ore", 3, 0.2));

    let start = Instant::now();
    let report = context.run(&mut world).await;
    let elapsed = start.elapsed();

    assert_eq!(report.status, RunStatus::Completed);
    assert_eq!(report.steps, 3);
    // 10 × 3.0 + floor(3 × 0.4)
    assert_eq!(context.state().resources.get("ore"), Some(&31));
    assert_eq!(context.state().resources.get("herb"), Some(&7));
    // 1000/3 + 1000/1 + 1000/0.4 ms
    assert!(elapsed >= Duration::from_millis(3_833), "{elapsed:?}");
    assert!(elapsed < Duration::from_millis(3_850), "{elapsed:?}");
}

#[tokio::test(start_paused = true)]
async fn battle_logs_two_lines_per_round() {
    let mut context = scripted("hero", vec![0.0]).with_strategy(BattleBehavior::new(
        BattleStrategy::Aggressive,
    ));
    let mut world = World::new().with_enemy(monster("rat", 20, 4));

    let report = context.run(&mut world).await;

    assert_eq!(report.status, RunStatus::Completed);
    assert_eq!(report.steps, 2);
    assert_eq!(world.enemies_alive(), 0);
    assert_eq!(context.state().health, 98);
    assert_eq!(
        context.state().battle_log,
        vec![
            "round 1: hero hits rat for 15".to_owned(),
            "round 1: rat strikes back for 2 (98 health left)".to_owned(),
            "round 2: hero hits rat for 5".to_owned(),
            "round 2: rat is defeated".to_owned(),
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn battle_ends_in_defeat_when_health_runs_out() {
    let mut context = scripted("hero", vec![0.0]).with_strategy(BattleBehavior::new(
        BattleStrategy::Defensive,
    ));
    let mut world = World::new()
        .with_enemy(monster("troll", 1_000, 200))
        .with_enemy(monster("imp", 10, 1));

    let report = context.run(&mut world).await;

    assert_eq!(report.status, RunStatus::Defeated);
    assert_eq!(report.steps, 1);
    assert_eq!(context.state().health, 0);
    assert_eq!(world.enemies_alive(), 2, "mutations stay, nothing rolls back");
}

#[tokio::test(start_paused = true)]
async fn battle_stops_between_rounds() {
    let local = LocalSet::new();
    local
        .run_until(async {
            let context = scripted("hero", vec![0.5])
                .with_strategy(BattleBehavior::new(BattleStrategy::Balanced));
            let stop = context.stop_handle();
            let world = World::new().with_enemy(monster("golem", 10_000, 0));

            let fight = tokio::task::spawn_local(async move {
                let mut context = context;
                let mut world = world;
                context.run(&mut world).await
            });
            tokio::task::spawn_local(async move {
                tokio::time::sleep(Duration::from_millis(250)).await;
                stop.stop();
            });

            let report = fight.await.unwrap();
            assert_eq!(report.status, RunStatus::Stopped);
            // rounds at 0, 100 and 200 ms; the tick ending at 300 ms sees the stop
            assert_eq!(report.steps, 3);
        })
        .await;
}

#[tokio::test]
async fn running_without_strategy_reports_missing_binding() {
    let mut context = ConcurrentContext::new("idle", RuntimeConfig::default());
    let report = context.run(&mut World::new()).await;

    assert_eq!(report.status, RunStatus::MissingBinding);
    assert_eq!(report.behavior, None);
    assert!(context.tasks().is_empty());
}

#[tokio::test(start_paused = true)]
async fn cleanup_drops_finished_tasks_only() {
    let mut context = scripted("scout", vec![0.9]).with_strategy(ExplorationBehavior);
    let mut world = areas(1);
    context.run(&mut world).await;
    context.run(&mut world).await;

    assert_eq!(context.tasks().len(), 2);
    assert!(matches!(
        context.tasks()[0].state,
        TaskState::Finished(RunStatus::Completed)
    ));
    assert!(matches!(
        context.tasks()[1].state,
        TaskState::Finished(RunStatus::Refused)
    ));
    assert_eq!(context.pending_tasks(), 0);
    assert_eq!(context.cleanup(), 2);
    assert!(context.tasks().is_empty());
}

#[test]
fn scheduler_rejects_contexts_without_strategy() {
    let mut scheduler = Scheduler::new();
    let err = scheduler
        .add(ConcurrentContext::new("idle", RuntimeConfig::default()), World::new())
        .unwrap_err();

    assert!(matches!(err, RuntimeError::StrategyNotSet { ref context } if context == "idle"));
    assert!(scheduler.is_empty());
}

#[tokio::test(start_paused = true)]
async fn scheduler_interleaves_sessions() {
    let mut scheduler = Scheduler::new();
    for name in ["north", "south"] {
        let context = scripted(name, vec![0.0]).with_strategy(GatheringBehavior::new(1.0));
        let world = World::new()
            .with_node(ResourceNode::new("wood", 4, 1.0))
            .with_node(ResourceNode::new("stone", 2, 1.0));
        scheduler.add(context, world).unwrap();
    }

    let start = Instant::now();
    let sessions = scheduler.run().await.unwrap();

    // two one-second nodes each, overlapped rather than back to back
    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_secs(2), "{elapsed:?}");
    assert!(elapsed < Duration::from_millis(2_100), "{elapsed:?}");
    let names: Vec<_> = sessions.iter().map(|s| s.report.context.as_str()).collect();
    assert_eq!(names, vec!["north", "south"]);
    for session in &sessions {
        assert_eq!(session.report.status, RunStatus::Completed);
        assert_eq!(session.context.state().resources.get("wood"), Some(&4));
        assert_eq!(session.context.state().resources.get("stone"), Some(&2));
    }
}

#[test]
fn block_on_drives_sessions_to_completion() {
    let mut scheduler = Scheduler::new();
    let config = RuntimeConfig {
        round_tick_ms: 1,
        ..RuntimeConfig::default()
    };
    let context = ConcurrentContext::new("hero", config)
        .with_strategy(BattleBehavior::new(BattleStrategy::Aggressive));
    scheduler
        .add(context, World::new().with_enemy(monster("slime", 30, 1)))
        .unwrap();

    let sessions = scheduler.block_on().unwrap();

    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0].report.status, RunStatus::Completed);
    assert_eq!(sessions[0].world.enemies_alive(), 0);
}
