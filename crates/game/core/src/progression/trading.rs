//! Item pricing.

use std::collections::BTreeMap;

use crate::combat::damage::round_stat;
use crate::env::Environment;
use crate::outcome::{Effect, Outcome, Tag};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, strum::Display, strum::EnumString,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ItemType {
    Weapon,
    Armor,
    Potion,
    Material,
    Trinket,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Rarity {
    #[default]
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Common => 1.0,
            Self::Uncommon => 1.5,
            Self::Rare => 2.0,
            Self::Epic => 3.0,
            Self::Legendary => 5.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub name: String,
    pub item_type: ItemType,
    pub base_price: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub rarity: Rarity,
}

impl Item {
    pub fn new(name: impl Into<String>, item_type: ItemType, base_price: u32) -> Self {
        Self {
            name: name.into(),
            item_type,
            base_price,
            rarity: Rarity::Common,
        }
    }

    pub fn with_rarity(mut self, rarity: Rarity) -> Self {
        self.rarity = rarity;
        self
    }
}

/// Regional price tables: `region -> item type -> multiplier`.
///
/// Anything not listed trades at 1.0.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Economy {
    regions: BTreeMap<String, BTreeMap<ItemType, f64>>,
}

impl Economy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_modifier(mut self, region: impl Into<String>, item_type: ItemType, modifier: f64) -> Self {
        self.regions
            .entry(region.into())
            .or_default()
            .insert(item_type, modifier.max(0.0));
        self
    }

    pub fn modifier(&self, region: Option<&str>, item_type: ItemType) -> f64 {
        region
            .and_then(|region| self.regions.get(region))
            .and_then(|table| table.get(&item_type))
            .copied()
            .unwrap_or(1.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum TradingStrategy {
    /// `base × region modifier × rarity multiplier`, rounded half-to-even.
    Economic(Economy),
}

impl TradingStrategy {
    pub fn price(&self, item: &Item, env: &Environment) -> u32 {
        match self {
            Self::Economic(economy) => {
                let modifier = economy.modifier(env.region(), item.item_type);
                round_stat(item.base_price as f64 * modifier * item.rarity.multiplier())
            }
        }
    }

    pub fn calculate_price(&self, item: &Item, env: &Environment) -> Outcome {
        Outcome::applied(item.name.as_str(), Tag::Price, Effect::Price(self.price(item, env)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn market() -> TradingStrategy {
        TradingStrategy::Economic(
            Economy::new()
                .with_modifier("desert", ItemType::Potion, 2.0)
                .with_modifier("desert", ItemType::Armor, 0.5)
                .with_modifier("tundra", ItemType::Armor, 1.25),
        )
    }

    #[test]
    fn defaults_to_base_price() {
        let sword = Item::new("Sword", ItemType::Weapon, 120);
        assert_eq!(market().price(&sword, &Environment::new()), 120);
        assert_eq!(market().price(&sword, &Environment::new().in_region("desert")), 120);
    }

    #[test]
    fn applies_region_and_rarity() {
        let potion = Item::new("Elixir", ItemType::Potion, 30).with_rarity(Rarity::Rare);
        let env = Environment::new().in_region("desert");
        let outcome = market().calculate_price(&potion, &env);
        assert_eq!(outcome.price(), Some(120));
        assert_eq!(outcome.actor, "Elixir");

        let mail = Item::new("Mail", ItemType::Armor, 90).with_rarity(Rarity::Uncommon);
        assert_eq!(market().price(&mail, &env), 68, "67.5 rounds to even");
        assert_eq!(market().price(&mail, &Environment::new().in_region("tundra")), 169);
    }
}
