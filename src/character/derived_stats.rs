//! Stats derived from base attributes, race and equipped items.
//!
//! Nothing here is stored on the character. Every read walks the current
//! equipment, so equip, unequip and level-up changes show up immediately.

use super::attributes::{AttributeType, Attributes};
use super::types::Character;
use crate::core::constants::UNARMED_DAMAGE_DICE;
use crate::dice;
use crate::items::{
    attack_bonus_from_enhancement, enhanced_armor_bonus, entry_resistances, weapon_damage,
    DamageType, EquipSlot, ItemKind,
};

/// What the character attacks with this turn.
#[derive(Debug, Clone, PartialEq)]
pub struct WeaponProfile {
    pub name: String,
    pub damage_dice: String,
    pub damage_type: DamageType,
    pub main_attribute: AttributeType,
    pub enhancement_level: u32,
}

impl WeaponProfile {
    pub fn unarmed() -> Self {
        Self {
            name: "Fists".to_string(),
            damage_dice: UNARMED_DAMAGE_DICE.to_string(),
            damage_type: DamageType::Physical,
            main_attribute: AttributeType::Strength,
            enhancement_level: 0,
        }
    }
}

impl Character {
    /// Sum of `dexterity_penalty` over equipped armor.
    pub fn dexterity_penalty(&self) -> i32 {
        self.equipped_entries()
            .map(|entry| match entry.item.kind {
                ItemKind::Armor {
                    dexterity_penalty, ..
                } => dexterity_penalty,
                _ => 0,
            })
            .sum()
    }

    /// Base + race bonus, with the armor penalty taken off dexterity.
    pub fn effective_attribute(&self, attr: AttributeType) -> i32 {
        let mut value = self.base_attributes.get(attr) + self.race.bonuses.get(attr);
        if attr == AttributeType::Dexterity {
            value -= self.dexterity_penalty();
        }
        value
    }

    pub fn effective_attributes(&self) -> Attributes {
        let mut attrs = Attributes::zero();
        for attr in AttributeType::all() {
            attrs.set(attr, self.effective_attribute(attr));
        }
        attrs
    }

    pub fn effective_modifier(&self, attr: AttributeType) -> i32 {
        dice::modifier(self.effective_attribute(attr))
    }

    pub fn physical_resistance(&self) -> i32 {
        self.equipped_entries().map(|e| entry_resistances(e).0).sum()
    }

    pub fn magical_resistance(&self) -> i32 {
        self.equipped_entries().map(|e| entry_resistances(e).1).sum()
    }

    pub fn resistance_against(&self, damage_type: DamageType) -> i32 {
        match damage_type {
            DamageType::Physical => self.physical_resistance(),
            DamageType::Magical => self.magical_resistance(),
        }
    }

    /// Shield armor bonuses, enhancement included.
    pub fn shield_bonus(&self) -> i32 {
        self.equipped_entries()
            .map(|entry| match entry.item.kind {
                ItemKind::Shield { armor_bonus, .. } => {
                    enhanced_armor_bonus(armor_bonus, entry.enhancement_level)
                }
                _ => 0,
            })
            .sum()
    }

    pub fn armor_class(&self) -> i32 {
        self.class.base_ac + self.effective_modifier(AttributeType::Dexterity) + self.shield_bonus()
    }

    pub fn weapon_profile(&self) -> WeaponProfile {
        let Some(entry) = self.equipped(EquipSlot::MainHand) else {
            return WeaponProfile::unarmed();
        };
        match (&entry.item.kind, weapon_damage(entry)) {
            (ItemKind::Weapon { main_attribute, .. }, Some((damage_dice, damage_type))) => {
                WeaponProfile {
                    name: entry.item.name.clone(),
                    damage_dice,
                    damage_type,
                    main_attribute: *main_attribute,
                    enhancement_level: entry.enhancement_level,
                }
            }
            _ => WeaponProfile::unarmed(),
        }
    }

    /// Modifier of the weapon's governing attribute plus enhancement to-hit.
    pub fn attack_bonus(&self) -> i32 {
        let weapon = self.weapon_profile();
        self.effective_modifier(weapon.main_attribute)
            + attack_bonus_from_enhancement(weapon.enhancement_level)
    }
}

/// A point-in-time snapshot for display. Build a new one after any change.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedStats {
    pub attributes: Attributes,
    pub armor_class: i32,
    pub physical_resistance: i32,
    pub magical_resistance: i32,
    pub dexterity_penalty: i32,
    pub attack_bonus: i32,
    pub weapon: WeaponProfile,
}

impl DerivedStats {
    pub fn calculate(character: &Character) -> Self {
        Self {
            attributes: character.effective_attributes(),
            armor_class: character.armor_class(),
            physical_resistance: character.physical_resistance(),
            magical_resistance: character.magical_resistance(),
            dexterity_penalty: character.dexterity_penalty(),
            attack_bonus: character.attack_bonus(),
            weapon: character.weapon_profile(),
        }
    }
}
