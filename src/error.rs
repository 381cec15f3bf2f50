use crate::dice::DiceError;
use crate::items::EquipError;
use crate::persistence::StoreError;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Dice(#[from] DiceError),
    #[error(transparent)]
    Equip(#[from] EquipError),
    #[error("No character is loaded")]
    NoActiveCharacter,
    #[error("Missing catalog entry: {0}")]
    MissingContent(String),
}
