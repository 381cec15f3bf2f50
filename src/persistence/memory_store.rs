use super::{CharacterStore, CharacterSummary, StoreError};
use crate::character::Character;
use std::collections::HashMap;
use uuid::Uuid;

/// In-process store. Nothing survives the process.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    characters: HashMap<Uuid, Character>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.characters.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }
}

impl CharacterStore for MemoryStore {
    fn save_character(&mut self, character: &Character) -> Result<(), StoreError> {
        self.characters.insert(character.id, character.clone());
        Ok(())
    }

    fn load_character(&self, id: Uuid) -> Result<Character, StoreError> {
        self.characters
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    fn list_characters(&self) -> Result<Vec<CharacterSummary>, StoreError> {
        let mut list: Vec<CharacterSummary> = self
            .characters
            .values()
            .map(CharacterSummary::from_character)
            .collect();
        list.sort_by(|a, b| b.last_saved.cmp(&a.last_saved).then(a.name.cmp(&b.name)));
        Ok(list)
    }

    fn delete_character(&mut self, id: Uuid) -> Result<bool, StoreError> {
        Ok(self.characters.remove(&id).is_some())
    }
}
