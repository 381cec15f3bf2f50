//! Dice expressions and the rolls that back every random outcome in the game.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
