//! Character development: turning experience into stats.

use tracing::debug;

use crate::config::GameConfig;
use crate::entity::Character;
use crate::env::RandomSource;
use crate::outcome::{DevelopmentReport, Effect, Outcome, Tag};

/// Stat a skill point can be spent on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Attribute {
    /// +5 max health per point.
    MaxHealth,
    /// +1 attack per point.
    Attack,
    /// +1 defense per point.
    Defense,
}

impl Attribute {
    pub const ALL: [Attribute; 3] = [Attribute::MaxHealth, Attribute::Attack, Attribute::Defense];

    fn others(self) -> [Attribute; 2] {
        match self {
            Self::MaxHealth => [Self::Attack, Self::Defense],
            Self::Attack => [Self::MaxHealth, Self::Defense],
            Self::Defense => [Self::MaxHealth, Self::Attack],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DevelopmentStrategy {
    /// Even three-way split; leftover points go to one random attribute.
    Balanced,
    /// 60% (rounded down) to the primary attribute, the rest shared.
    Specialized(Attribute),
}

/// Points allocated to each attribute.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Allocation {
    max_health: u32,
    attack: u32,
    defense: u32,
}

impl Allocation {
    fn add(&mut self, attribute: Attribute, points: u32) {
        match attribute {
            Attribute::MaxHealth => self.max_health += points,
            Attribute::Attack => self.attack += points,
            Attribute::Defense => self.defense += points,
        }
    }
}

impl DevelopmentStrategy {
    /// Credit `xp` to `character` and spend every full skill point it yields.
    ///
    /// Experience below the next point stays banked on the character. Health
    /// is restored to the new maximum. Dead characters are left untouched.
    pub fn develop(
        &self,
        character: &mut Character,
        xp: u32,
        rng: &mut dyn RandomSource,
    ) -> Outcome {
        if !character.is_alive() {
            return Outcome::actor_dead(character.name(), Tag::ActorDead);
        }

        character.add_experience(xp);
        let points = character.redeem_skill_points();
        let allocation = self.allocate(points, rng);

        let report = DevelopmentReport {
            skill_points: points,
            max_health: allocation.max_health * GameConfig::HEALTH_PER_POINT,
            attack: allocation.attack,
            defense: allocation.defense,
        };

        character.raise_max_health(report.max_health);
        character.raise_attack(report.attack);
        character.raise_defense(report.defense);
        character.gain_levels(points);
        character.restore_full_health();

        debug!(character = character.name(), ?report, "developed");
        Outcome::applied(character.name(), Tag::Develop, Effect::Development(report))
    }

    fn allocate(&self, points: u32, rng: &mut dyn RandomSource) -> Allocation {
        let mut allocation = Allocation::default();
        match *self {
            Self::Balanced => {
                let share = points / 3;
                for attribute in Attribute::ALL {
                    allocation.add(attribute, share);
                }
                let remainder = points % 3;
                if remainder > 0 {
                    let lucky = Attribute::ALL[rng.pick(Attribute::ALL.len())];
                    allocation.add(lucky, remainder);
                }
            }
            Self::Specialized(primary) => {
                let main = points * 3 / 5;
                let rest = points - main;
                let [first, second] = primary.others();
                allocation.add(primary, main);
                allocation.add(first, rest - rest / 2);
                allocation.add(second, rest / 2);
            }
        }
        allocation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::CharacterClass;
    use crate::env::{PcgRng, SequenceRng};

    fn recruit() -> Character {
        Character::builder("Recruit", CharacterClass::Warrior)
            .max_health(100)
            .attack(20)
            .defense(5)
            .build()
            .unwrap()
    }

    #[test]
    fn balanced_even_split() {
        let mut c = recruit();
        c.set_health(40);
        let mut rng = SequenceRng::new(vec![0.5]);

        let outcome = DevelopmentStrategy::Balanced.develop(&mut c, 350, &mut rng);

        assert_eq!(c.max_health(), 105);
        assert_eq!(c.attack_power(), 21);
        assert_eq!(c.defense(), 6);
        assert_eq!(c.health(), 105);
        assert_eq!(c.experience(), 50);
        assert_eq!(c.level(), 4);
        assert_eq!(rng.draws(), 0, "no remainder, no draw");
        assert_eq!(
            outcome.effect,
            Effect::Development(DevelopmentReport {
                skill_points: 3,
                max_health: 5,
                attack: 1,
                defense: 1,
            })
        );
    }

    #[test]
    fn balanced_remainder_goes_to_one_random_attribute() {
        let mut c = recruit();
        // 0.5 picks the middle attribute (attack)
        let mut rng = SequenceRng::new(vec![0.5]);

        DevelopmentStrategy::Balanced.develop(&mut c, 500, &mut rng);

        assert_eq!(c.max_health(), 105);
        assert_eq!(c.attack_power(), 23);
        assert_eq!(c.defense(), 6);
        assert_eq!(rng.draws(), 1);
    }

    #[test]
    fn banked_experience_carries_over() {
        let mut c = recruit();
        let mut rng = PcgRng::seeded(0);
        let strategy = DevelopmentStrategy::Balanced;

        let first = strategy.develop(&mut c, 60, &mut rng);
        assert_eq!(first.effect, Effect::Development(DevelopmentReport::default()));
        strategy.develop(&mut c, 60, &mut rng);
        assert_eq!(c.experience(), 20);
        assert_eq!(c.level(), 2);
    }

    #[test]
    fn specialized_favors_primary() {
        let mut c = recruit();
        let strategy = DevelopmentStrategy::Specialized(Attribute::Attack);

        strategy.develop(&mut c, 1000, &mut PcgRng::seeded(0));

        // 10 points: 6 attack, 2 health, 2 defense
        assert_eq!(c.attack_power(), 26);
        assert_eq!(c.max_health(), 110);
        assert_eq!(c.defense(), 7);
        assert_eq!(c.health(), 110);
    }

    #[test]
    fn specialized_odd_leftover_goes_to_first_other() {
        let mut c = recruit();
        let strategy = DevelopmentStrategy::Specialized(Attribute::Defense);

        strategy.develop(&mut c, 400, &mut PcgRng::seeded(0));

        // 4 points: 2 defense, rest 2 -> 1 health, 1 attack
        assert_eq!(c.defense(), 7);
        assert_eq!(c.max_health(), 105);
        assert_eq!(c.attack_power(), 21);

        let mut d = recruit();
        DevelopmentStrategy::Specialized(Attribute::MaxHealth).develop(&mut d, 300, &mut PcgRng::seeded(0));
        // 3 points: 1 health, rest 2 -> 1 attack, 1 defense
        assert_eq!(d.max_health(), 105);
        assert_eq!(d.attack_power(), 21);
        assert_eq!(d.defense(), 6);
    }

    #[test]
    fn dead_characters_do_not_develop() {
        let mut c = recruit();
        c.set_health(0);
        let outcome = DevelopmentStrategy::Balanced.develop(&mut c, 300, &mut PcgRng::seeded(0));
        assert_eq!(outcome.status, crate::Status::ActorDead);
        assert_eq!(c.max_health(), 100);
        assert!(!c.is_alive());
    }
}
