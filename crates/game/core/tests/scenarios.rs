use game_core::{
    AiStrategy, BattleStrategy, Character, CharacterClass, DevelopmentStrategy, Enemy,
    Environment, GameConfig, GameEntity, GameSystem, MovementStrategy, PcgRng, SequenceRng,
    Status, StrategyKind, Tag, Vec2,
};

fn duelist(attack: i32, strategy: BattleStrategy) -> Character {
    Character::builder("Duelist", CharacterClass::Warrior)
        .max_health(120)
        .attack(attack)
        .defense(8)
        .battle_strategy(strategy)
        .build()
        .unwrap()
}

fn guard() -> Character {
    Character::builder("Guard", CharacterClass::Warrior)
        .max_health(80)
        .attack(30)
        .defense(3)
        .battle_strategy(BattleStrategy::Defensive)
        .build()
        .unwrap()
}

#[test]
fn aggressive_attacker_against_defensive_target() {
    let attacker = duelist(25, BattleStrategy::Aggressive);
    let mut target = guard();

    let outcome = attacker.attack(&mut target, &Environment::new());

    assert_eq!(target.health(), 54);
    assert_eq!(outcome.damage_dealt(), 26);
    assert_eq!(outcome.tag, Tag::AggressiveAttack);
}

#[test]
fn defensive_attacker_against_defensive_target() {
    let attacker = duelist(25, BattleStrategy::Defensive);
    let mut target = guard();

    attacker.attack(&mut target, &Environment::new());

    assert_eq!(target.health(), 64);
}

#[test]
fn aggressive_defense_absorbs_little() {
    let mut defender = duelist(25, BattleStrategy::Aggressive);

    let outcome = defender.defend(20, &Environment::new());

    assert_eq!(defender.health(), 104);
    assert_eq!(outcome.damage_dealt(), 16);
    assert_eq!(outcome.damage_absorbed(), 4);
}

#[test]
fn outmatched_tactical_enemy_flees() {
    let body = Character::builder("Scout", CharacterClass::Monster)
        .max_health(100)
        .health(20)
        .attack(5)
        .defense(1)
        .build()
        .unwrap();
    let mut enemy = Enemy::new(body, "kobold").with_ai(AiStrategy::tactical(0.8, 0.2));
    let mut player = Character::builder("Champion", CharacterClass::Warrior)
        .max_health(150)
        .attack(40)
        .defense(20)
        .build()
        .unwrap();
    let mut rng = SequenceRng::new(vec![0.1]);

    let outcome = enemy.take_turn(&mut player, &Environment::new(), &mut rng);

    assert_eq!(outcome.tag, Tag::Flee);
    assert_eq!(player.health(), 150);
}

#[test]
fn avoidance_step_veers_off_axis() {
    let start = Vec2::new(2.0, 2.0);
    let target = Vec2::new(8.0, 8.0);
    let mut walker = GameEntity::new("walker", start).unwrap();
    walker.attach_movement_strategy(MovementStrategy::avoidance(1.5, 3.0));
    let env = Environment::new().with_obstacle(Vec2::new(3.0, 3.0));

    let outcome = walker.move_toward(target, &env);

    let axis = (target - start).normalized().unwrap();
    let moved = walker.position() - start;
    assert!((moved.dot(axis) - 0.75).abs() < 1e-9);
    assert!(moved.dot(axis.perpendicular()).abs() > 1e-6);
    assert_eq!(outcome.tag, Tag::Avoid);
}

#[test]
fn balanced_development_through_the_facade() {
    let mut system = GameSystem::seeded(7);
    system.set_development_strategy(DevelopmentStrategy::Balanced);
    let mut recruit = Character::builder("Recruit", CharacterClass::Healer)
        .max_health(100)
        .attack(20)
        .defense(5)
        .build()
        .unwrap();

    system.develop_character(&mut recruit, 350);

    assert_eq!(recruit.max_health(), 105);
    assert_eq!(recruit.attack_power(), 21);
    assert_eq!(recruit.defense(), 6);
    assert_eq!(recruit.health(), 105);
}

#[test]
fn swapping_back_restores_behavior() {
    let mut a = duelist(25, BattleStrategy::Aggressive);
    a.attach_battle_strategy(BattleStrategy::Defensive);
    a.attach_battle_strategy(BattleStrategy::Aggressive);
    let b = duelist(25, BattleStrategy::Aggressive);

    let (mut left, mut right) = (guard(), guard());
    let env = Environment::new();
    assert_eq!(a.attack(&mut left, &env), b.attack(&mut right, &env));
    assert_eq!(left, right);
}

#[test]
fn aggressive_ai_never_heals_the_player() {
    let body = Character::builder("Ogre", CharacterClass::Monster)
        .max_health(300)
        .attack(12)
        .build()
        .unwrap();
    let mut enemy = Enemy::new(body, "ogre").with_ai(AiStrategy::Aggressive);
    let mut player = duelist(25, BattleStrategy::Balanced);
    let mut rng = PcgRng::seeded(GameConfig::DEFAULT_SEED);

    let mut last = player.health();
    while player.is_alive() {
        enemy.take_turn(&mut player, &Environment::new(), &mut rng);
        assert!(player.health() < last);
        last = player.health();
    }

    let after = enemy.take_turn(&mut player, &Environment::new(), &mut rng);
    assert_eq!(after.status, Status::TargetDead);
}

#[test]
fn unbound_enemy_reports_missing_ai() {
    let body = Character::builder("Statue", CharacterClass::Monster).build().unwrap();
    let mut enemy = Enemy::new(body, "construct");
    let mut player = guard();

    let outcome = enemy.take_turn(&mut player, &Environment::new(), &mut PcgRng::seeded(1));

    assert_eq!(outcome.status, Status::MissingBinding(StrategyKind::Ai));
    assert_eq!(player.health(), 80);
}
