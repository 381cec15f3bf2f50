//! Enhancement effects on weapons, armor and shields.
//!
//! Odd levels add a damage die (`+1d{2*level}`), even levels add +1 to hit.
//! Armor and shields gain +1 resistance of each kind per level, and shields
//! gain +1 armor bonus per level.

use super::types::{DamageType, InventoryEntry, ItemCategory, ItemKind};
use crate::core::constants::ENHANCEMENT_VALUE_STEP;

pub fn can_enhance(entry: &InventoryEntry) -> bool {
    matches!(
        entry.category(),
        ItemCategory::Weapon | ItemCategory::Armor | ItemCategory::Shield
    )
}

/// Base dice plus one `1d{2*l}` term for every odd `l` up to `level`.
///
/// ```
/// use rust_dice::items::enhanced_damage_expression;
/// assert_eq!(enhanced_damage_expression("1d6", 3), "1d6+1d2+1d6");
/// ```
pub fn enhanced_damage_expression(base_dice: &str, level: u32) -> String {
    let mut expr = base_dice.to_string();
    for l in (1..=level).filter(|l| l % 2 == 1) {
        expr.push_str(&format!("+1d{}", 2 * l));
    }
    expr
}

/// +1 for every even level reached.
pub fn attack_bonus_from_enhancement(level: u32) -> i32 {
    (level / 2) as i32
}

pub fn enhanced_resistance(base: i32, level: u32) -> i32 {
    base + level as i32
}

pub fn enhanced_armor_bonus(base: i32, level: u32) -> i32 {
    base + level as i32
}

/// Sale value grows by half the base per level.
pub fn enhanced_value(base: u32, level: u32) -> u32 {
    (base as f64 * (1.0 + ENHANCEMENT_VALUE_STEP * level as f64)) as u32
}

/// Damage dice and damage type of a weapon entry, enhancement included.
pub fn weapon_damage(entry: &InventoryEntry) -> Option<(String, DamageType)> {
    match &entry.item.kind {
        ItemKind::Weapon {
            damage_dice,
            damage_type,
            ..
        } => Some((
            enhanced_damage_expression(damage_dice, entry.enhancement_level),
            *damage_type,
        )),
        _ => None,
    }
}

/// `(physical, magical)` resistance granted by an armor or shield entry.
pub fn entry_resistances(entry: &InventoryEntry) -> (i32, i32) {
    match entry.item.kind {
        ItemKind::Armor {
            physical_resistance,
            magical_resistance,
            ..
        }
        | ItemKind::Shield {
            physical_resistance,
            magical_resistance,
            ..
        } => (
            enhanced_resistance(physical_resistance, entry.enhancement_level),
            enhanced_resistance(magical_resistance, entry.enhancement_level),
        ),
        _ => (0, 0),
    }
}

pub fn display_name(entry: &InventoryEntry) -> String {
    let mut name = entry.item.name.clone();
    if entry.enhancement_level > 0 {
        name.push_str(&format!(" +{}", entry.enhancement_level));
    }
    if let Some(tag) = entry.enhancement_type.and_then(|t| t.tag()) {
        name.push_str(&format!(" [{}]", tag));
    }
    name
}
