//! Canned scenario the `arena` binary plays.
//!
//! The synchronous half drives an encounter, a scout's movement and
//! resources, and the progression façade. The cooperative half schedules
//! an explorer, a gatherer and a fighter side by side.

use anyhow::Result;
use game_core::{
    AiStrategy, BattleStrategy, Character, CharacterClass, CombatTactic, DevelopmentStrategy,
    Economy, Encounter, Enemy, Environment, GameConfig, GameEntity, GameSystem, Item, ItemType,
    MovementStrategy, Quest, QuestStrategy, Rarity, ResourceStrategy, TradingStrategy, Vec2,
};
use runtime::{
    BattleBehavior, ConcurrentContext, ExplorationBehavior, GatheringBehavior, ResourceNode,
    RuntimeConfig, Scheduler, World,
};
use tracing::info;

use crate::presenter::{format_encounter, format_outcome, format_run_report};

/// Play the synchronous scenario and return the console lines.
pub fn core_demo(config: &GameConfig) -> Result<Vec<String>> {
    let mut system = GameSystem::from_config(config.clone());
    let mut lines = Vec::new();

    let hero = Character::builder("Ayla", CharacterClass::Warrior)
        .level(3)
        .max_health(120)
        .attack(18)
        .defense(4)
        .battle_strategy(BattleStrategy::Balanced)
        .build()?;
    let grunt = Enemy::new(
        Character::builder("Grunt", CharacterClass::Monster)
            .max_health(40)
            .attack(9)
            .defense(2)
            .build()?,
        "orc",
    )
    .with_ai(AiStrategy::Aggressive);
    let shaman = Enemy::new(
        Character::builder("Vex", CharacterClass::Mage)
            .level(2)
            .max_health(25)
            .attack(12)
            .build()?,
        "shaman",
    )
    .with_ai(AiStrategy::tactical(0.6, 0.3));

    let env = Environment::new().with_distance(1.5);
    let mut encounter = Encounter::new(hero, vec![grunt, shaman])
        .with_config(config)
        .with_tactic(CombatTactic::priority([CharacterClass::Mage]));
    let report = encounter.run(&env, system.rng_mut());
    lines.extend(format_encounter(&report));
    let (mut hero, _) = encounter.into_parts();

    let mut scout = GameEntity::new("scout", Vec2::ORIGIN)?
        .with_resource("mana", 20, 100)
        .with_resource("health", 15, 100);
    scout.attach_movement_strategy(MovementStrategy::avoidance(2.0, 1.5));
    scout.attach_resource_strategy(ResourceStrategy::Aggressive);
    let path = Environment::new().with_obstacle(Vec2::new(1.0, 0.2));
    for _ in 0..4 {
        lines.push(format_outcome(&scout.move_toward(Vec2::new(6.0, 0.0), &path)));
    }
    lines.push(format_outcome(&scout.manage_resources(&path)));

    system.set_quest_strategy(QuestStrategy::Adaptive);
    let mut quest = Quest::new("Clear the pass", 1, 100, 30, 2)?;
    lines.push(format_outcome(&system.assign_quest(&hero, &mut quest)));
    lines.push(format_outcome(&system.record_quest_progress(&mut quest, 2)));
    lines.push(format_outcome(&system.evaluate_quest_completion(&mut hero, &mut quest)));

    system.set_development_strategy(DevelopmentStrategy::Balanced);
    lines.push(format_outcome(&system.develop_character(&mut hero, 250)));

    system.set_trading_strategy(TradingStrategy::Economic(
        Economy::new().with_modifier("frontier", ItemType::Weapon, 1.25),
    ));
    let blade = Item::new("Frontier blade", ItemType::Weapon, 80).with_rarity(Rarity::Rare);
    lines.push(format_outcome(
        &system.calculate_price(&blade, &Environment::new().in_region("frontier")),
    ));

    info!(lines = lines.len(), "core scenario finished");
    Ok(lines)
}

/// Schedule the cooperative sessions and return one line per run.
pub async fn runtime_demo(config: &RuntimeConfig) -> Result<Vec<String>> {
    let mut scheduler = Scheduler::new();

    scheduler.add(
        ConcurrentContext::new("explorer", config.clone()).with_strategy(ExplorationBehavior),
        World::new().with_areas(["gate", "hall", "crypt", "vault", "garden"]),
    )?;
    scheduler.add(
        ConcurrentContext::new("gatherer", config.clone())
            .with_strategy(GatheringBehavior::new(1.5)),
        World::new()
            .with_node(ResourceNode::new("ore", 10, 1.0))
            .with_node(ResourceNode::new("herb", 4, 2.0)),
    )?;
    let wolf = Enemy::new(
        Character::builder("Wolf", CharacterClass::Monster)
            .max_health(30)
            .attack(6)
            .build()?,
        "wolf",
    );
    scheduler.add(
        ConcurrentContext::new("fighter", config.clone())
            .with_strategy(BattleBehavior::new(BattleStrategy::Aggressive)),
        World::new().with_enemy(wolf),
    )?;

    let sessions = scheduler.run().await?;
    let mut lines = Vec::with_capacity(sessions.len());
    for session in &sessions {
        lines.push(format_run_report(&session.report));
        lines.extend(session.context.state().battle_log.iter().cloned());
    }
    Ok(lines)
}
