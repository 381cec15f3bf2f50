//! Character persistence behind the `CharacterStore` trait.

mod json_store;
mod memory_store;

pub use json_store::*;
pub use memory_store::*;

use crate::character::Character;
use crate::items::{EnhancementType, InventoryEntry, ItemTemplate};
use std::io;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Save data error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Character {0} not found")]
    NotFound(Uuid),
    #[error("Invalid name: {0}")]
    InvalidName(String),
}

/// Listing row for the save manager.
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterSummary {
    pub id: Option<Uuid>,
    pub name: String,
    pub level: u32,
    pub race: String,
    pub class: String,
    pub difficulty: String,
    pub permadeath: bool,
    pub last_saved: i64,
    pub is_corrupted: bool,
}

impl CharacterSummary {
    pub fn from_character(character: &Character) -> Self {
        Self {
            id: Some(character.id),
            name: character.name.clone(),
            level: character.level,
            race: character.race.name.clone(),
            class: character.class.name.clone(),
            difficulty: character.difficulty.clone(),
            permadeath: character.permadeath,
            last_saved: character.last_saved,
            is_corrupted: false,
        }
    }
}

/// Synchronous record store. Each mutating call is one read-modify-write.
pub trait CharacterStore {
    fn save_character(&mut self, character: &Character) -> Result<(), StoreError>;

    fn load_character(&self, id: Uuid) -> Result<Character, StoreError>;

    /// Most recently saved first.
    fn list_characters(&self) -> Result<Vec<CharacterSummary>, StoreError>;

    /// Returns false when no such character exists.
    fn delete_character(&mut self, id: Uuid) -> Result<bool, StoreError>;

    fn rename_character(&mut self, id: Uuid, new_name: &str) -> Result<(), StoreError> {
        crate::character::validate_name(new_name).map_err(StoreError::InvalidName)?;
        let mut character = self.load_character(id)?;
        character.name = new_name.trim().to_string();
        self.save_character(&character)
    }

    /// Sets the stored gold total.
    fn update_gold(&mut self, id: Uuid, gold: u32) -> Result<(), StoreError> {
        let mut character = self.load_character(id)?;
        character.gold = gold;
        self.save_character(&character)
    }

    /// Creates a new stack and returns it so callers can mirror it in memory.
    fn add_item_to_inventory(
        &mut self,
        id: Uuid,
        item: &ItemTemplate,
        quantity: u32,
        enhancement_level: u32,
        enhancement_type: Option<EnhancementType>,
    ) -> Result<InventoryEntry, StoreError> {
        let mut character = self.load_character(id)?;
        let entry = InventoryEntry::new(item.clone(), quantity)
            .with_enhancement(enhancement_level, enhancement_type);
        character.add_entry(entry.clone());
        self.save_character(&character)?;
        Ok(entry)
    }

    /// Returns false when the entry does not exist.
    fn remove_item_from_inventory(
        &mut self,
        id: Uuid,
        entry_id: Uuid,
        quantity: u32,
    ) -> Result<bool, StoreError> {
        let mut character = self.load_character(id)?;
        if !character.remove_quantity(entry_id, quantity) {
            return Ok(false);
        }
        self.save_character(&character)?;
        Ok(true)
    }
}
