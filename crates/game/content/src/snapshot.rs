//! Persistable view of a play session.

use game_core::{Character, Enemy, GameEntity, Quest, SetupError};

/// Every entity and quest a save file holds.
///
/// Strategy bindings are not part of a snapshot; callers reattach them
/// after loading.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Snapshot {
    pub characters: Vec<Character>,
    pub enemies: Vec<Enemy>,
    pub entities: Vec<GameEntity>,
    pub quests: Vec<Quest>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
            && self.enemies.is_empty()
            && self.entities.is_empty()
            && self.quests.is_empty()
    }

    /// Check every entity's invariants; the first violation wins.
    pub fn validate(&self) -> Result<(), SetupError> {
        for character in &self.characters {
            character.check_invariants()?;
        }
        for enemy in &self.enemies {
            enemy.check_invariants()?;
        }
        for entity in &self.entities {
            entity.check_invariants()?;
        }
        for quest in &self.quests {
            quest.check_invariants()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{CharacterClass, Vec2};

    #[test]
    fn validate_accepts_fresh_entities() {
        let snapshot = Snapshot {
            characters: vec![Character::builder("Ayla", CharacterClass::Mage).build().unwrap()],
            entities: vec![
                GameEntity::new("cart", Vec2::new(1.0, 2.0))
                    .unwrap()
                    .with_resource("wood", 5, 10),
            ],
            quests: vec![Quest::new("Deliver", 1, 10, 5, 1).unwrap()],
            ..Snapshot::default()
        };
        assert!(snapshot.validate().is_ok());
        assert!(!snapshot.is_empty());
        assert!(Snapshot::new().is_empty());
    }
}
