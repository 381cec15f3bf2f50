//! Rust & Dice - a menu-driven text role-playing game.
//!
//! The library holds the dice, stat, combat and screen engines so they can
//! be tested without a terminal.

pub mod catalog;
pub mod character;
pub mod combat;
pub mod core;
pub mod dice;
pub mod error;
pub mod items;
pub mod persistence;
pub mod screens;
pub mod ui;
