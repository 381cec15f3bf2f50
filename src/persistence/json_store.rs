use super::{CharacterStore, CharacterSummary, StoreError};
use crate::character::Character;
use crate::core::config::data_dir;
use crate::core::constants::CHARACTERS_DIR_NAME;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use uuid::Uuid;

const SAVE_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct CharacterSaveData {
    version: u32,
    character: Character,
}

/// One pretty-printed JSON file per character, named by id.
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    pub fn new(dir: impl Into<PathBuf>) -> io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// `~/.rust_dice/characters`.
    pub fn default_location() -> io::Result<Self> {
        Self::new(data_dir()?.join(CHARACTERS_DIR_NAME))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, id: Uuid) -> PathBuf {
        self.dir.join(format!("{}.json", id))
    }

    fn read_file(path: &Path) -> Result<Character, StoreError> {
        let json = fs::read_to_string(path)?;
        let data: CharacterSaveData = serde_json::from_str(&json)?;
        Ok(data.character)
    }
}

impl CharacterStore for JsonStore {
    fn save_character(&mut self, character: &Character) -> Result<(), StoreError> {
        let mut character = character.clone();
        character.last_saved = Utc::now().timestamp();
        let data = CharacterSaveData {
            version: SAVE_VERSION,
            character,
        };
        let json = serde_json::to_string_pretty(&data)?;
        fs::write(self.path_for(data.character.id), json)?;
        tracing::debug!(id = %data.character.id, name = %data.character.name, "character saved");
        Ok(())
    }

    fn load_character(&self, id: Uuid) -> Result<Character, StoreError> {
        let path = self.path_for(id);
        if !path.exists() {
            return Err(StoreError::NotFound(id));
        }
        Self::read_file(&path)
    }

    fn list_characters(&self) -> Result<Vec<CharacterSummary>, StoreError> {
        let mut characters = Vec::new();

        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();

            if path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }

            match Self::read_file(&path) {
                Ok(character) => characters.push(CharacterSummary::from_character(&character)),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "unreadable save file");
                    characters.push(CharacterSummary {
                        id: None,
                        name: "[CORRUPTED]".to_string(),
                        level: 0,
                        race: String::new(),
                        class: String::new(),
                        difficulty: String::new(),
                        permadeath: false,
                        last_saved: 0,
                        is_corrupted: true,
                    });
                }
            }
        }

        characters.sort_by(|a, b| b.last_saved.cmp(&a.last_saved));
        Ok(characters)
    }

    fn delete_character(&mut self, id: Uuid) -> Result<bool, StoreError> {
        let path = self.path_for(id);
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(path)?;
        tracing::info!(%id, "character deleted");
        Ok(true)
    }
}
