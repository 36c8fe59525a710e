//! Synchronous turn-list fights.

use tracing::{debug, info};

use crate::combat::CombatTactic;
use crate::config::GameConfig;
use crate::entity::{Character, Enemy};
use crate::env::{Environment, RandomSource};
use crate::outcome::Outcome;

/// Side left standing when an encounter ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Winner {
    Player,
    Enemies,
    /// Round limit reached with both sides alive.
    Draw,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EncounterReport {
    /// Every outcome in the order it happened.
    pub outcomes: Vec<Outcome>,
    pub rounds: u32,
    pub winner: Winner,
}

/// A player with a battle strategy against enemies driven by AI strategies.
///
/// Each round the player strikes one live enemy (chosen by the optional
/// combat tactic, else the first live one), then every live enemy takes its
/// AI turn in list order.
#[derive(Clone, Debug)]
pub struct Encounter {
    player: Character,
    enemies: Vec<Enemy>,
    tactic: Option<CombatTactic>,
    max_rounds: u32,
}

impl Encounter {
    pub fn new(player: Character, enemies: Vec<Enemy>) -> Self {
        Self {
            player,
            enemies,
            tactic: None,
            max_rounds: GameConfig::DEFAULT_MAX_ENCOUNTER_ROUNDS,
        }
    }

    pub fn with_config(mut self, config: &GameConfig) -> Self {
        self.max_rounds = config.max_encounter_rounds;
        self
    }

    pub fn with_tactic(mut self, tactic: CombatTactic) -> Self {
        self.tactic = Some(tactic);
        self
    }

    pub fn player(&self) -> &Character {
        &self.player
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn into_parts(self) -> (Character, Vec<Enemy>) {
        (self.player, self.enemies)
    }

    fn enemies_alive(&self) -> bool {
        self.enemies.iter().any(|enemy| enemy.is_alive())
    }

    fn next_target(&self) -> Option<usize> {
        match &self.tactic {
            Some(tactic) => {
                let candidates: Vec<&Character> =
                    self.enemies.iter().map(Enemy::character).collect();
                tactic.pick(&candidates)
            }
            None => self.enemies.iter().position(|enemy| enemy.is_alive()),
        }
    }

    /// Fight until one side is down or the round limit is hit.
    pub fn run(&mut self, env: &Environment, rng: &mut dyn RandomSource) -> EncounterReport {
        let mut outcomes = Vec::new();
        let mut rounds = 0;

        while rounds < self.max_rounds && self.player.is_alive() && self.enemies_alive() {
            rounds += 1;

            if let Some(index) = self.next_target() {
                let target = self.enemies[index].character_mut();
                outcomes.push(self.player.attack(target, env));
            }

            for enemy in self.enemies.iter_mut().filter(|enemy| enemy.is_alive()) {
                if !self.player.is_alive() {
                    break;
                }
                outcomes.push(enemy.take_turn(&mut self.player, env, rng));
            }

            debug!(
                round = rounds,
                player_health = self.player.health(),
                enemies_alive = self.enemies.iter().filter(|e| e.is_alive()).count(),
                "encounter round"
            );
        }

        let winner = if !self.player.is_alive() {
            Winner::Enemies
        } else if !self.enemies_alive() {
            Winner::Player
        } else {
            Winner::Draw
        };
        info!(rounds, %winner, "encounter finished");

        EncounterReport {
            outcomes,
            rounds,
            winner,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::AiStrategy;
    use crate::combat::BattleStrategy;
    use crate::entity::CharacterClass;
    use crate::env::PcgRng;
    use crate::outcome::{Status, StrategyKind};

    fn knight() -> Character {
        Character::builder("Knight", CharacterClass::Warrior)
            .max_health(200)
            .attack(30)
            .defense(10)
            .battle_strategy(BattleStrategy::Balanced)
            .build()
            .unwrap()
    }

    fn goblin(name: &str, health: u32) -> Enemy {
        let character = Character::builder(name, CharacterClass::Monster)
            .max_health(health)
            .attack(8)
            .defense(2)
            .build()
            .unwrap();
        Enemy::new(character, "goblin").with_ai(AiStrategy::Aggressive)
    }

    #[test]
    fn strong_player_clears_the_field() {
        let mut encounter = Encounter::new(knight(), vec![goblin("a", 40), goblin("b", 40)]);
        let report = encounter.run(&Environment::new(), &mut PcgRng::seeded(3));

        assert_eq!(report.winner, Winner::Player);
        assert!(encounter.enemies().iter().all(|e| !e.is_alive()));
        assert!(encounter.player().is_alive());
        // 28 damage per hit: two rounds per goblin
        assert_eq!(report.rounds, 4);
    }

    #[test]
    fn tactic_picks_the_weakest_first() {
        let mut encounter = Encounter::new(knight(), vec![goblin("sturdy", 90), goblin("frail", 20)])
            .with_tactic(CombatTactic::Defensive);
        let report = encounter.run(&Environment::new(), &mut PcgRng::seeded(3));

        assert_eq!(report.outcomes[0].damage_dealt(), 20);
        assert!(!encounter.enemies()[1].is_alive());
        assert_eq!(report.winner, Winner::Player);
    }

    #[test]
    fn round_limit_ends_in_a_draw() {
        let mut player = knight();
        player.detach_battle_strategy();
        let config = GameConfig {
            max_encounter_rounds: 3,
            ..GameConfig::default()
        };
        let mut encounter = Encounter::new(player, vec![goblin("a", 40)]).with_config(&config);

        let report = encounter.run(&Environment::new(), &mut PcgRng::seeded(3));

        assert_eq!(report.winner, Winner::Draw);
        assert_eq!(report.rounds, 3);
        assert_eq!(
            report.outcomes[0].status,
            Status::MissingBinding(StrategyKind::Battle)
        );
    }
}
