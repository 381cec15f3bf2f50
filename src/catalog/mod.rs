//! Content lookup: monsters, items, races, classes and backgrounds.

mod data;

pub use data::*;

use crate::character::{Background, CharacterClass, Race};
use crate::combat::MonsterTemplate;
use crate::core::constants::{MONSTER_LEVEL_ABOVE, MONSTER_LEVEL_BELOW};
use crate::items::{ItemCategory, ItemTemplate};
use rand::seq::SliceRandom;
use rand::RngCore;

/// Read-only content source consumed by the engines.
pub trait Catalog {
    /// Templates eligible for an encounter at `level`. May be empty.
    fn monster_templates_for_level(&self, level: u32) -> Vec<MonsterTemplate>;

    fn item_by_id(&self, id: u32) -> Option<ItemTemplate>;

    /// Uniform pick among weapons, armor, shields, consumables and misc items.
    fn random_obtainable_item(&self, rng: &mut dyn RngCore) -> Option<ItemTemplate>;

    fn races(&self) -> &[Race];

    fn classes(&self) -> &[CharacterClass];

    fn backgrounds(&self) -> &[Background];
}

/// Catalog backed by the built-in tables.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    races: Vec<Race>,
    classes: Vec<CharacterClass>,
    backgrounds: Vec<Background>,
    monsters: Vec<MonsterTemplate>,
    items: Vec<ItemTemplate>,
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self {
            races: get_all_races(),
            classes: get_all_classes(),
            backgrounds: get_all_backgrounds(),
            monsters: get_all_monsters(),
            items: get_all_items(),
        }
    }

    /// Replaces the monster table, e.g. to force a specific encounter.
    pub fn with_monsters(mut self, monsters: Vec<MonsterTemplate>) -> Self {
        self.monsters = monsters;
        self
    }

    pub fn items(&self) -> &[ItemTemplate] {
        &self.items
    }
}

fn is_obtainable(item: &ItemTemplate) -> bool {
    matches!(
        item.category(),
        ItemCategory::Weapon
            | ItemCategory::Armor
            | ItemCategory::Shield
            | ItemCategory::Consumable
            | ItemCategory::Misc
    )
}

impl Catalog for StaticCatalog {
    fn monster_templates_for_level(&self, level: u32) -> Vec<MonsterTemplate> {
        let low = level.saturating_sub(MONSTER_LEVEL_BELOW);
        let high = level.saturating_add(MONSTER_LEVEL_ABOVE);
        self.monsters
            .iter()
            .filter(|m| (low..=high).contains(&m.level))
            .cloned()
            .collect()
    }

    fn item_by_id(&self, id: u32) -> Option<ItemTemplate> {
        self.items.iter().find(|i| i.id == id).cloned()
    }

    fn random_obtainable_item(&self, rng: &mut dyn RngCore) -> Option<ItemTemplate> {
        let pool: Vec<&ItemTemplate> = self.items.iter().filter(|i| is_obtainable(i)).collect();
        pool.choose(rng).map(|item| (*item).clone())
    }

    fn races(&self) -> &[Race] {
        &self.races
    }

    fn classes(&self) -> &[CharacterClass] {
        &self.classes
    }

    fn backgrounds(&self) -> &[Background] {
        &self.backgrounds
    }
}
