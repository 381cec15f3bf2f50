use super::types::{EquipSlot, InventoryEntry};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EquipError {
    #[error("{0} cannot be equipped")]
    NotEquipable(String),
    #[error("{name} requires {required} strength (you have {actual})")]
    StrengthTooLow {
        name: String,
        required: i32,
        actual: i32,
    },
    #[error("Your off hand is occupied by a two-handed weapon")]
    TwoHandedConflict,
    #[error("No such item in inventory")]
    UnknownEntry,
    #[error("Nothing is equipped in {0}")]
    SlotEmpty(&'static str),
}

/// Which inventory entry occupies each slot. Item data lives in the inventory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    #[serde(default)]
    pub main_hand: Option<Uuid>,
    #[serde(default)]
    pub off_hand: Option<Uuid>,
    #[serde(default)]
    pub head: Option<Uuid>,
    #[serde(default)]
    pub body: Option<Uuid>,
    #[serde(default)]
    pub hands: Option<Uuid>,
    #[serde(default)]
    pub feet: Option<Uuid>,
    #[serde(default)]
    pub ring1: Option<Uuid>,
    #[serde(default)]
    pub ring2: Option<Uuid>,
    #[serde(default)]
    pub amulet: Option<Uuid>,
}

impl Equipment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: EquipSlot) -> Option<Uuid> {
        match slot {
            EquipSlot::MainHand => self.main_hand,
            EquipSlot::OffHand => self.off_hand,
            EquipSlot::Head => self.head,
            EquipSlot::Body => self.body,
            EquipSlot::Hands => self.hands,
            EquipSlot::Feet => self.feet,
            EquipSlot::Ring1 => self.ring1,
            EquipSlot::Ring2 => self.ring2,
            EquipSlot::Amulet => self.amulet,
        }
    }

    pub fn set(&mut self, slot: EquipSlot, entry: Option<Uuid>) {
        match slot {
            EquipSlot::MainHand => self.main_hand = entry,
            EquipSlot::OffHand => self.off_hand = entry,
            EquipSlot::Head => self.head = entry,
            EquipSlot::Body => self.body = entry,
            EquipSlot::Hands => self.hands = entry,
            EquipSlot::Feet => self.feet = entry,
            EquipSlot::Ring1 => self.ring1 = entry,
            EquipSlot::Ring2 => self.ring2 = entry,
            EquipSlot::Amulet => self.amulet = entry,
        }
    }

    pub fn iter_equipped(&self) -> impl Iterator<Item = (EquipSlot, Uuid)> + '_ {
        EquipSlot::all()
            .into_iter()
            .filter_map(|slot| self.get(slot).map(|id| (slot, id)))
    }

    pub fn slot_of(&self, entry_id: Uuid) -> Option<EquipSlot> {
        self.iter_equipped()
            .find(|(_, id)| *id == entry_id)
            .map(|(slot, _)| slot)
    }

    pub fn is_equipped(&self, entry_id: Uuid) -> bool {
        self.slot_of(entry_id).is_some()
    }

    /// Clears whichever slot holds `entry_id`.
    pub fn remove_entry(&mut self, entry_id: Uuid) -> Option<EquipSlot> {
        let slot = self.slot_of(entry_id)?;
        self.set(slot, None);
        Some(slot)
    }

    /// Places `entry` into its slot, vacating anything already there.
    ///
    /// Returns the slot used. `strength` is the wearer's effective strength.
    pub fn equip(
        &mut self,
        entry: &InventoryEntry,
        inventory: &[InventoryEntry],
        strength: i32,
    ) -> Result<EquipSlot, EquipError> {
        let template_slot = entry
            .item
            .equip_slot
            .ok_or_else(|| EquipError::NotEquipable(entry.item.name.clone()))?;

        let required = entry.item.strength_requirement();
        if strength < required {
            return Err(EquipError::StrengthTooLow {
                name: entry.item.name.clone(),
                required,
                actual: strength,
            });
        }

        if template_slot == EquipSlot::OffHand {
            let holds_two_hander = self
                .main_hand
                .filter(|id| *id != entry.id)
                .and_then(|id| inventory.iter().find(|e| e.id == id))
                .is_some_and(|e| e.item.is_two_handed());
            if holds_two_hander {
                return Err(EquipError::TwoHandedConflict);
            }
        }

        self.remove_entry(entry.id);

        let slot = if template_slot.is_ring() {
            match (self.ring1, self.ring2) {
                (None, _) => EquipSlot::Ring1,
                (Some(_), None) => EquipSlot::Ring2,
                (Some(_), Some(_)) => EquipSlot::Ring1,
            }
        } else {
            template_slot
        };

        self.set(slot, Some(entry.id));
        if slot == EquipSlot::MainHand && entry.item.is_two_handed() {
            self.off_hand = None;
        }
        Ok(slot)
    }

    pub fn unequip(&mut self, slot: EquipSlot) -> Result<Uuid, EquipError> {
        let id = self.get(slot).ok_or(EquipError::SlotEmpty(slot.name()))?;
        self.set(slot, None);
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::AttributeType;
    use crate::items::types::{ArmorTier, DamageType, ItemKind, ItemTemplate};

    fn weapon(two_handed: bool) -> InventoryEntry {
        InventoryEntry::new(
            ItemTemplate {
                id: if two_handed { 6 } else { 1 },
                name: if two_handed { "Longsword" } else { "Short Sword" }.to_string(),
                description: String::new(),
                level: 1,
                weight: 2.5,
                value: 30,
                equip_slot: Some(EquipSlot::MainHand),
                kind: ItemKind::Weapon {
                    damage_dice: "1d6".to_string(),
                    damage_type: DamageType::Physical,
                    main_attribute: AttributeType::Strength,
                    two_handed,
                },
            },
            1,
        )
    }

    fn shield(strength_requirement: i32) -> InventoryEntry {
        InventoryEntry::new(
            ItemTemplate {
                id: 202,
                name: "Steel Shield".to_string(),
                description: String::new(),
                level: 2,
                weight: 10.0,
                value: 50,
                equip_slot: Some(EquipSlot::OffHand),
                kind: ItemKind::Shield {
                    armor_bonus: 2,
                    strength_requirement,
                    physical_resistance: 0,
                    magical_resistance: 0,
                },
            },
            1,
        )
    }

    fn ring() -> InventoryEntry {
        InventoryEntry::new(
            ItemTemplate {
                id: 401,
                name: "Copper Ring".to_string(),
                description: String::new(),
                level: 1,
                weight: 0.1,
                value: 15,
                equip_slot: Some(EquipSlot::Ring1),
                kind: ItemKind::Misc,
            },
            1,
        )
    }

    fn body_armor() -> InventoryEntry {
        InventoryEntry::new(
            ItemTemplate {
                id: 102,
                name: "Leather Armor".to_string(),
                description: String::new(),
                level: 1,
                weight: 10.0,
                value: 25,
                equip_slot: Some(EquipSlot::Body),
                kind: ItemKind::Armor {
                    physical_resistance: 2,
                    magical_resistance: 0,
                    dexterity_penalty: 0,
                    tier: ArmorTier::Light,
                    strength_requirement: 0,
                },
            },
            1,
        )
    }

    #[test]
    fn test_equip_into_empty_slot() {
        let armor = body_armor();
        let mut eq = Equipment::new();
        let slot = eq.equip(&armor, std::slice::from_ref(&armor), 10).unwrap();
        assert_eq!(slot, EquipSlot::Body);
        assert_eq!(eq.body, Some(armor.id));
    }

    #[test]
    fn test_equip_occupied_slot_vacates_previous() {
        let first = weapon(false);
        let second = weapon(false);
        let inventory = vec![first.clone(), second.clone()];
        let mut eq = Equipment::new();
        eq.equip(&first, &inventory, 10).unwrap();
        eq.equip(&second, &inventory, 10).unwrap();
        assert_eq!(eq.main_hand, Some(second.id));
        assert!(!eq.is_equipped(first.id));
    }

    #[test]
    fn test_entry_occupies_at_most_one_slot() {
        let r = ring();
        let inventory = vec![r.clone()];
        let mut eq = Equipment::new();
        eq.equip(&r, &inventory, 10).unwrap();
        eq.equip(&r, &inventory, 10).unwrap();
        assert_eq!(eq.iter_equipped().filter(|(_, id)| *id == r.id).count(), 1);
    }

    #[test]
    fn test_rings_fill_first_free_slot() {
        let a = ring();
        let b = ring();
        let inventory = vec![a.clone(), b.clone()];
        let mut eq = Equipment::new();
        assert_eq!(eq.equip(&a, &inventory, 10).unwrap(), EquipSlot::Ring1);
        assert_eq!(eq.equip(&b, &inventory, 10).unwrap(), EquipSlot::Ring2);
    }

    #[test]
    fn test_strength_requirement_enforced() {
        let s = shield(11);
        let result = Equipment::new().equip(&s, std::slice::from_ref(&s), 10);
        assert!(matches!(
            result,
            Err(EquipError::StrengthTooLow {
                required: 11,
                actual: 10,
                ..
            })
        ));
    }

    #[test]
    fn test_two_handed_weapon_clears_off_hand() {
        let s = shield(0);
        let great = weapon(true);
        let inventory = vec![s.clone(), great.clone()];
        let mut eq = Equipment::new();
        eq.equip(&s, &inventory, 10).unwrap();
        eq.equip(&great, &inventory, 10).unwrap();
        assert_eq!(eq.main_hand, Some(great.id));
        assert_eq!(eq.off_hand, None);
    }

    #[test]
    fn test_off_hand_blocked_by_two_hander() {
        let s = shield(0);
        let great = weapon(true);
        let inventory = vec![s.clone(), great.clone()];
        let mut eq = Equipment::new();
        eq.equip(&great, &inventory, 10).unwrap();
        assert_eq!(eq.equip(&s, &inventory, 10), Err(EquipError::TwoHandedConflict));
    }

    #[test]
    fn test_not_equipable() {
        let mut potion = ring();
        potion.item.equip_slot = None;
        let result = Equipment::new().equip(&potion, std::slice::from_ref(&potion), 10);
        assert!(matches!(result, Err(EquipError::NotEquipable(_))));
    }

    #[test]
    fn test_unequip() {
        let armor = body_armor();
        let mut eq = Equipment::new();
        eq.equip(&armor, std::slice::from_ref(&armor), 10).unwrap();
        assert_eq!(eq.unequip(EquipSlot::Body), Ok(armor.id));
        assert_eq!(eq.unequip(EquipSlot::Body), Err(EquipError::SlotEmpty("Body")));
    }
}
