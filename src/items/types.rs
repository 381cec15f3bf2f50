use crate::character::AttributeType;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipSlot {
    MainHand,
    OffHand,
    Head,
    Body,
    Hands,
    Feet,
    Ring1,
    Ring2,
    Amulet,
}

impl EquipSlot {
    pub fn all() -> [EquipSlot; 9] {
        [
            EquipSlot::MainHand,
            EquipSlot::OffHand,
            EquipSlot::Head,
            EquipSlot::Body,
            EquipSlot::Hands,
            EquipSlot::Feet,
            EquipSlot::Ring1,
            EquipSlot::Ring2,
            EquipSlot::Amulet,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            EquipSlot::MainHand => "Main Hand",
            EquipSlot::OffHand => "Off Hand",
            EquipSlot::Head => "Head",
            EquipSlot::Body => "Body",
            EquipSlot::Hands => "Hands",
            EquipSlot::Feet => "Feet",
            EquipSlot::Ring1 => "Ring 1",
            EquipSlot::Ring2 => "Ring 2",
            EquipSlot::Amulet => "Amulet",
        }
    }

    pub fn is_ring(&self) -> bool {
        matches!(self, EquipSlot::Ring1 | EquipSlot::Ring2)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageType {
    Physical,
    Magical,
}

impl DamageType {
    pub fn name(&self) -> &'static str {
        match self {
            DamageType::Physical => "physical",
            DamageType::Magical => "magical",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArmorTier {
    Light,
    Medium,
    Heavy,
}

impl ArmorTier {
    pub fn name(&self) -> &'static str {
        match self {
            ArmorTier::Light => "Light",
            ArmorTier::Medium => "Medium",
            ArmorTier::Heavy => "Heavy",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnhancementType {
    Fire,
    Ice,
    Lightning,
    Poison,
    Holy,
    Sharp,
    Durable,
    Lucky,
    Normal,
}

impl EnhancementType {
    /// Short tag shown after an item's name. `Normal` has none.
    pub fn tag(&self) -> Option<&'static str> {
        match self {
            EnhancementType::Fire => Some("fire"),
            EnhancementType::Ice => Some("ice"),
            EnhancementType::Lightning => Some("lightning"),
            EnhancementType::Poison => Some("poison"),
            EnhancementType::Holy => Some("holy"),
            EnhancementType::Sharp => Some("sharp"),
            EnhancementType::Durable => Some("durable"),
            EnhancementType::Lucky => Some("lucky"),
            EnhancementType::Normal => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    Weapon,
    Armor,
    Shield,
    Consumable,
    Ammo,
    Misc,
}

impl ItemCategory {
    pub fn name(&self) -> &'static str {
        match self {
            ItemCategory::Weapon => "Weapon",
            ItemCategory::Armor => "Armor",
            ItemCategory::Shield => "Shield",
            ItemCategory::Consumable => "Consumable",
            ItemCategory::Ammo => "Ammo",
            ItemCategory::Misc => "Misc",
        }
    }
}

/// Category-specific fields of an item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum ItemKind {
    Weapon {
        damage_dice: String,
        damage_type: DamageType,
        main_attribute: AttributeType,
        two_handed: bool,
    },
    Armor {
        physical_resistance: i32,
        magical_resistance: i32,
        dexterity_penalty: i32,
        tier: ArmorTier,
        strength_requirement: i32,
    },
    Shield {
        armor_bonus: i32,
        strength_requirement: i32,
        #[serde(default)]
        physical_resistance: i32,
        #[serde(default)]
        magical_resistance: i32,
    },
    Consumable {
        #[serde(default)]
        heal_dice: Option<String>,
        #[serde(default)]
        mana_dice: Option<String>,
    },
    Ammo,
    Misc,
}

impl ItemKind {
    pub fn category(&self) -> ItemCategory {
        match self {
            ItemKind::Weapon { .. } => ItemCategory::Weapon,
            ItemKind::Armor { .. } => ItemCategory::Armor,
            ItemKind::Shield { .. } => ItemCategory::Shield,
            ItemKind::Consumable { .. } => ItemCategory::Consumable,
            ItemKind::Ammo => ItemCategory::Ammo,
            ItemKind::Misc => ItemCategory::Misc,
        }
    }
}

/// A catalog row. Immutable; inventory entries carry a copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemTemplate {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub level: u32,
    pub weight: f64,
    pub value: u32,
    pub equip_slot: Option<EquipSlot>,
    pub kind: ItemKind,
}

impl ItemTemplate {
    pub fn category(&self) -> ItemCategory {
        self.kind.category()
    }

    pub fn strength_requirement(&self) -> i32 {
        match self.kind {
            ItemKind::Armor {
                strength_requirement,
                ..
            }
            | ItemKind::Shield {
                strength_requirement,
                ..
            } => strength_requirement,
            _ => 0,
        }
    }

    pub fn is_two_handed(&self) -> bool {
        matches!(self.kind, ItemKind::Weapon { two_handed: true, .. })
    }
}

/// One stack in a character's inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryEntry {
    pub id: Uuid,
    pub item: ItemTemplate,
    pub quantity: u32,
    #[serde(default)]
    pub enhancement_level: u32,
    #[serde(default)]
    pub enhancement_type: Option<EnhancementType>,
}

impl InventoryEntry {
    pub fn new(item: ItemTemplate, quantity: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            item,
            quantity,
            enhancement_level: 0,
            enhancement_type: None,
        }
    }

    pub fn with_enhancement(mut self, level: u32, kind: Option<EnhancementType>) -> Self {
        self.enhancement_level = level;
        self.enhancement_type = kind;
        self
    }

    pub fn category(&self) -> ItemCategory {
        self.item.category()
    }

    pub fn is_equipable(&self) -> bool {
        self.item.equip_slot.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shield() -> ItemTemplate {
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
                strength_requirement: 11,
                physical_resistance: 0,
                magical_resistance: 0,
            },
        }
    }

    #[test]
    fn test_category_follows_kind() {
        assert_eq!(shield().category(), ItemCategory::Shield);
        assert_eq!(ItemKind::Ammo.category(), ItemCategory::Ammo);
    }

    #[test]
    fn test_strength_requirement() {
        assert_eq!(shield().strength_requirement(), 11);
        let mut misc = shield();
        misc.kind = ItemKind::Misc;
        assert_eq!(misc.strength_requirement(), 0);
    }

    #[test]
    fn test_new_entry_is_unenhanced() {
        let entry = InventoryEntry::new(shield(), 1);
        assert_eq!(entry.enhancement_level, 0);
        assert!(entry.enhancement_type.is_none());
        assert!(entry.is_equipable());
    }

    #[test]
    fn test_kind_serializes_with_category_tag() {
        let json = serde_json::to_string(&shield().kind).unwrap();
        assert!(json.contains("\"category\":\"shield\""));
        let back: ItemKind = serde_json::from_str(&json).unwrap();
        assert_eq!(back, shield().kind);
    }

    #[test]
    fn test_ring_slots() {
        assert!(EquipSlot::Ring1.is_ring());
        assert!(EquipSlot::Ring2.is_ring());
        assert!(!EquipSlot::Amulet.is_ring());
    }
}
