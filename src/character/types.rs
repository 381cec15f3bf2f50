use super::attributes::{AttributeType, Attributes};
use crate::core::constants::{MAX_NAME_LENGTH, STARTING_EXP_MAX, STARTING_GOLD};
use crate::dice;
use crate::items::{EquipError, EquipSlot, Equipment, InventoryEntry};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Race {
    pub name: String,
    pub description: String,
    pub bonuses: Attributes,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterClass {
    pub name: String,
    pub description: String,
    pub hit_dice: String,
    pub mana_dice: String,
    pub base_ac: i32,
    pub starting_weapon_id: u32,
    pub starting_armor_id: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Background {
    pub name: String,
    pub description: String,
    pub skills: Vec<String>,
}

/// A player character. Race and class are stored as snapshots so a save
/// stays readable if the catalog changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: Uuid,
    pub name: String,
    pub race: Race,
    pub class: CharacterClass,
    #[serde(default)]
    pub background: Option<Background>,
    pub base_attributes: Attributes,
    pub level: u32,
    pub exp: u32,
    pub exp_max: u32,
    pub hp: i32,
    pub hp_max: i32,
    pub mana: i32,
    pub mana_max: i32,
    pub gold: u32,
    pub difficulty: String,
    pub permadeath: bool,
    #[serde(default)]
    pub inventory: Vec<InventoryEntry>,
    #[serde(default)]
    pub equipment: Equipment,
    pub created_at: i64,
    #[serde(default)]
    pub last_saved: i64,
}

impl Character {
    /// A fresh level 1 character. Hit points and mana start at the maximum
    /// of the class dice, hit points adjusted by the constitution modifier.
    pub fn new(
        name: &str,
        race: Race,
        class: CharacterClass,
        background: Option<Background>,
        base_attributes: Attributes,
        difficulty: &str,
        permadeath: bool,
    ) -> Self {
        let now = Utc::now().timestamp();
        let mut character = Self {
            id: Uuid::new_v4(),
            name: name.trim().to_string(),
            race,
            class,
            background,
            base_attributes,
            level: 1,
            exp: 0,
            exp_max: STARTING_EXP_MAX,
            hp: 0,
            hp_max: 0,
            mana: 0,
            mana_max: 0,
            gold: STARTING_GOLD,
            difficulty: difficulty.to_string(),
            permadeath,
            inventory: Vec::new(),
            equipment: Equipment::new(),
            created_at: now,
            last_saved: now,
        };
        let con_mod = dice::modifier(character.effective_attribute(AttributeType::Constitution));
        character.hp_max = (dice::max_value(&character.class.hit_dice) + con_mod).max(1);
        character.mana_max = dice::max_value(&character.class.mana_dice).max(0);
        character.hp = character.hp_max;
        character.mana = character.mana_max;
        character
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Lowers hp, never below 0.
    pub fn take_damage(&mut self, amount: i32) {
        self.hp = (self.hp - amount.max(0)).max(0);
    }

    /// Raises hp, never above the maximum. Returns the amount restored.
    pub fn heal(&mut self, amount: i32) -> i32 {
        let before = self.hp;
        self.hp = (self.hp + amount.max(0)).min(self.hp_max);
        self.hp - before
    }

    pub fn restore_mana(&mut self, amount: i32) -> i32 {
        let before = self.mana;
        self.mana = (self.mana + amount.max(0)).min(self.mana_max);
        self.mana - before
    }

    pub fn entry(&self, entry_id: Uuid) -> Option<&InventoryEntry> {
        self.inventory.iter().find(|e| e.id == entry_id)
    }

    pub fn equipped(&self, slot: EquipSlot) -> Option<&InventoryEntry> {
        self.equipment.get(slot).and_then(|id| self.entry(id))
    }

    pub fn equipped_entries(&self) -> impl Iterator<Item = &InventoryEntry> + '_ {
        self.equipment
            .iter_equipped()
            .filter_map(move |(_, id)| self.entry(id))
    }

    /// Inventory stacks not occupying any slot.
    pub fn unequipped_entries(&self) -> impl Iterator<Item = &InventoryEntry> + '_ {
        self.inventory
            .iter()
            .filter(move |e| !self.equipment.is_equipped(e.id))
    }

    pub fn equip(&mut self, entry_id: Uuid) -> Result<EquipSlot, EquipError> {
        let strength = self.effective_attribute(AttributeType::Strength);
        let Character {
            equipment,
            inventory,
            ..
        } = self;
        let entry = inventory
            .iter()
            .find(|e| e.id == entry_id)
            .ok_or(EquipError::UnknownEntry)?;
        equipment.equip(entry, inventory.as_slice(), strength)
    }

    pub fn unequip(&mut self, slot: EquipSlot) -> Result<Uuid, EquipError> {
        self.equipment.unequip(slot)
    }

    /// Adds a stack to the inventory.
    pub fn add_entry(&mut self, entry: InventoryEntry) {
        self.inventory.push(entry);
    }

    /// Removes `quantity` units from a stack. A stack reaching zero leaves
    /// the inventory and any slot it occupied. Returns false when the entry
    /// does not exist.
    pub fn remove_quantity(&mut self, entry_id: Uuid, quantity: u32) -> bool {
        let Some(pos) = self.inventory.iter().position(|e| e.id == entry_id) else {
            return false;
        };
        let entry = &mut self.inventory[pos];
        entry.quantity = entry.quantity.saturating_sub(quantity);
        if entry.quantity == 0 {
            self.inventory.remove(pos);
            self.equipment.remove_entry(entry_id);
        }
        true
    }
}

/// Character names are 1-16 characters of letters, digits, spaces,
/// hyphens and underscores.
pub fn validate_name(name: &str) -> Result<(), String> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err("Name cannot be empty".to_string());
    }

    if trimmed.chars().count() > MAX_NAME_LENGTH {
        return Err(format!(
            "Name must be {} characters or less",
            MAX_NAME_LENGTH
        ));
    }

    let valid_chars = trimmed
        .chars()
        .all(|c| c.is_alphanumeric() || c == ' ' || c == '-' || c == '_');

    if !valid_chars {
        return Err(
            "Name can only contain letters, numbers, spaces, hyphens, and underscores".to_string(),
        );
    }

    Ok(())
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    #[test]
    fn test_new_character_starts_at_max() {
        let c = hero();
        assert_eq!(c.level, 1);
        assert_eq!(c.exp, 0);
        assert_eq!(c.exp_max, 100);
        assert_eq!(c.hp_max, 10);
        assert_eq!(c.hp, c.hp_max);
        assert_eq!(c.mana_max, 2);
        assert_eq!(c.gold, 10);
    }

    #[test]
    fn test_constitution_adjusts_starting_hp() {
        let mut attrs = Attributes::new();
        attrs.set(AttributeType::Constitution, 16);
        let c = Character::new("Tank", human(), warrior(), None, attrs, "fair_challenge", false);
        assert_eq!(c.hp_max, 13);
    }

    #[test]
    fn test_take_damage_floors_at_zero() {
        let mut c = hero();
        c.take_damage(500);
        assert_eq!(c.hp, 0);
        assert!(!c.is_alive());
    }

    #[test]
    fn test_heal_caps_at_max() {
        let mut c = hero();
        c.hp = 3;
        assert_eq!(c.heal(100), 7);
        assert_eq!(c.hp, c.hp_max);
    }

    #[test]
    fn test_equip_and_lookup() {
        let mut c = hero();
        let sword = sword();
        let id = sword.id;
        c.add_entry(sword);
        assert_eq!(c.equip(id), Ok(EquipSlot::MainHand));
        assert_eq!(c.equipped(EquipSlot::MainHand).map(|e| e.id), Some(id));
        assert_eq!(c.unequipped_entries().count(), 0);
    }

    #[test]
    fn test_equip_unknown_entry() {
        let mut c = hero();
        assert_eq!(c.equip(Uuid::new_v4()), Err(EquipError::UnknownEntry));
    }

    #[test]
    fn test_remove_last_unit_clears_slot() {
        let mut c = hero();
        let sword = sword();
        let id = sword.id;
        c.add_entry(sword);
        c.equip(id).unwrap();
        assert!(c.remove_quantity(id, 1));
        assert!(c.entry(id).is_none());
        assert!(c.equipment.main_hand.is_none());
        assert!(!c.remove_quantity(id, 1));
    }

    #[test]
    fn test_remove_partial_stack() {
        let mut c = hero();
        let mut potions = sword();
        potions.quantity = 3;
        let id = potions.id;
        c.add_entry(potions);
        assert!(c.remove_quantity(id, 1));
        assert_eq!(c.entry(id).map(|e| e.quantity), Some(2));
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Hero").is_ok());
        assert!(validate_name("Warrior-2").is_ok());
        assert!(validate_name("under_score").is_ok());
        assert!(validate_name("   ").is_err());
        assert!(validate_name("12345678901234567").is_err());
        assert!(validate_name("hello!world").is_err());
    }
}
