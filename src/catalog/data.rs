//! Built-in content: races, classes, backgrounds, monsters and items.

use crate::character::{AttributeType, Attributes, Background, CharacterClass, Race};
use crate::combat::MonsterTemplate;
use crate::items::{ArmorTier, DamageType, EquipSlot, ItemKind, ItemTemplate};

use AttributeType::{Charisma, Constitution, Dexterity, Intelligence, Strength, Wisdom};
use DamageType::{Magical, Physical};

/// (name, STR, DEX, CON, INT, WIS, CHA, description)
const RACES: [(&str, [i32; 6], &str); 15] = [
    ("Human", [0, 0, 0, 0, 0, 0], "Versatile and adaptable, with no marked strengths or weaknesses."),
    ("Elf", [-1, 2, -1, 2, 1, 0], "Graceful and ancient, deeply tied to magic and nature."),
    ("Dwarf", [2, -1, 2, 0, 1, -1], "Short, tough and stubborn masters of the forge."),
    ("Orc", [3, 0, 2, -2, -1, -2], "Brutal creatures of monstrous vigor, feared in melee."),
    ("Halfling", [-2, 3, 0, 0, 2, 1], "Small, cheerful and sneaky. Luck makes up for strength."),
    ("Dragonborn", [2, 0, 1, 0, 0, 2], "Proud descendants of dragons with innate magic."),
    ("Tiefling", [0, 1, -1, 2, 0, 2], "Infernal blood makes them clever and magnetic."),
    ("Goblin", [-2, 3, 0, 1, 0, -1], "Small and cunning, living on tricks and traps."),
    ("Giant", [4, -2, 3, -3, -2, -2], "Huge and nearly unbeatable, but socially limited."),
    ("Fairy", [-3, 4, -2, 2, 3, 2], "Fragile enchanted beings, brilliant in wisdom and charm."),
    ("Succubus", [0, 1, -2, 0, 0, 4], "Seductive demons who bend emotions with ease."),
    ("Automaton", [1, 0, 2, 1, -2, -3], "Ancient machines: cold, precise and resilient."),
    ("Mountain Orc", [2, 0, 2, -2, -1, -1], "Resilient highland orcs with overwhelming strength."),
    ("Half-Orc", [2, 0, 1, -1, 0, 0], "Orcish might joined with human adaptability."),
    ("Half-Elf", [0, 1, 0, 1, 1, 1], "Elven charm with human versatility."),
];

/// (name, hit dice, mana dice, base AC, starting weapon, starting armor, description)
const CLASSES: [(&str, &str, &str, i32, u32, u32, &str); 9] = [
    ("Warrior", "1d10", "1d2", 10, 1, 114, "Master of close combat."),
    ("Barbarian", "1d12", "1d2", 11, 2, 114, "Savage and brutal fighter."),
    ("Paladin", "1d10", "1d4", 10, 7, 118, "Faith and steel in defense of allies."),
    ("Mage", "1d6", "1d8", 10, 6, 110, "Caster of arcane spells."),
    ("Sorcerer", "1d6", "1d8", 10, 11, 110, "Wields destructive elemental magic."),
    ("Cleric", "1d8", "1d6", 10, 9, 106, "Channels divine power to heal or punish."),
    ("Rogue", "1d8", "1d4", 11, 5, 102, "Agile and stealthy."),
    ("Archer", "1d8", "1d4", 11, 4, 102, "Specialist in ranged combat."),
    ("Hunter", "1d8", "1d6", 11, 3, 106, "Tracker and tamer of the wild."),
];

const BACKGROUNDS: [(&str, &str, &[&str]); 10] = [
    ("Mercenary", "Fought for coin, never asking who pays.", &["One-Handed Weapons", "Medium Armor", "Intimidation"]),
    ("Artificer", "Calloused hands from building and tinkering.", &["Engineering", "Investigation", "Sleight of Hand"]),
    ("Hunter", "Tracks and scents read like open books.", &["Survival", "Nature", "Polearms"]),
    ("Acolyte", "Served in temples learning the ways of the gods.", &["Religion", "Medicine", "Insight"]),
    ("Entertainer", "Made a living on the road entertaining crowds.", &["Performance", "Deception", "Acrobatics"]),
    ("Gladiator", "Earned fame and scars in brutal arenas.", &["Brawling", "Dodge", "Persuasion"]),
    ("Noble", "Born to wealth and the customs of court.", &["Persuasion", "History", "Insight"]),
    ("Bandit", "Grew up on the streets, living by wits.", &["Stealth", "Sleight of Hand", "Lockpicking", "Intimidation"]),
    ("Hermit", "Lived apart, close to nature and the divine.", &["Nature", "Survival", "Religion"]),
    ("Scholar", "A life spent studying and unraveling mysteries.", &["Arcana", "Investigation", "Engineering"]),
];

type MonsterRow = (&'static str, u32, i32, i32, &'static str, u32, &'static str, [i32; 6], AttributeType, DamageType, i32, i32);

/// (name, level, hp, AC, damage, exp, gold, attributes, main attribute, attack type, phys res, mag res)
const MONSTERS: [MonsterRow; 20] = [
    ("Giant Rat", 1, 10, 12, "1d4", 5, "1d2", [4, 10, 6, 1, 2, 1], Dexterity, Physical, 1, 1),
    ("Skeleton", 2, 15, 13, "1d6", 12, "1d4", [10, 8, 10, 2, 3, 1], Strength, Physical, 3, 1),
    ("Goblin", 2, 12, 14, "1d6", 15, "1d6", [6, 14, 8, 4, 3, 2], Dexterity, Physical, 1, 1),
    ("Zombie", 3, 25, 10, "1d8", 20, "1d4", [14, 4, 14, 1, 1, 0], Constitution, Physical, 5, 2),
    ("Wolf", 3, 20, 14, "1d6", 18, "1d6", [10, 14, 10, 2, 3, 4], Dexterity, Physical, 2, 1),
    ("Kobold Scout", 4, 22, 15, "1d6", 25, "1d6", [8, 16, 8, 3, 4, 3], Dexterity, Physical, 1, 1),
    ("Acid Slime", 4, 30, 8, "1d6", 28, "1d4", [6, 6, 14, 1, 1, 0], Constitution, Magical, 8, 1),
    ("Bandit", 5, 40, 12, "1d8", 30, "2d4", [12, 12, 10, 6, 6, 8], Strength, Physical, 2, 2),
    ("Chaos Sorcerer", 6, 35, 11, "1d10", 40, "2d6", [4, 8, 6, 16, 10, 12], Intelligence, Magical, 1, 5),
    ("Shadow Archer", 6, 45, 15, "1d8", 42, "2d6", [8, 16, 10, 8, 8, 6], Dexterity, Physical, 3, 2),
    ("Brown Bear", 7, 60, 13, "1d10", 50, "2d4", [18, 10, 14, 2, 3, 2], Strength, Physical, 4, 2),
    ("Tormented Spirit", 7, 50, 11, "1d8", 48, "1d8", [4, 12, 6, 10, 16, 10], Wisdom, Magical, 1, 6),
    ("Stone Golem", 8, 80, 16, "2d6", 60, "1d10", [20, 6, 18, 1, 1, 0], Constitution, Physical, 10, 1),
    ("Succubus", 8, 55, 12, "1d8", 65, "2d8", [6, 14, 8, 10, 12, 18], Charisma, Magical, 2, 7),
    ("Giant Spider", 9, 65, 16, "2d6", 70, "2d6", [12, 18, 10, 1, 6, 2], Dexterity, Physical, 3, 3),
    ("Black Knight", 10, 85, 17, "2d8", 80, "3d6", [18, 10, 16, 6, 6, 4], Strength, Physical, 7, 4),
    ("Wild Dragonborn", 11, 100, 15, "2d10", 95, "3d8", [16, 12, 16, 8, 6, 6], Constitution, Magical, 5, 8),
    ("Lich", 12, 90, 14, "3d6", 110, "3d10", [6, 10, 10, 20, 18, 16], Intelligence, Magical, 2, 10),
    ("Chimera", 13, 120, 15, "3d8", 130, "4d6", [20, 14, 18, 6, 6, 6], Strength, Physical, 6, 6),
    ("Young Red Dragon", 14, 150, 18, "3d10", 150, "5d6", [22, 16, 20, 10, 12, 18], Constitution, Magical, 8, 8),
];

/// (id, name, description, weight, value, damage, type, two-handed, main attribute, level)
const WEAPONS: [(u32, &str, &str, f64, u32, &str, DamageType, bool, AttributeType, u32); 22] = [
    (1, "Short Sword", "Light and versatile blade", 2.5, 30, "1d6", Physical, false, Strength, 1),
    (2, "Dagger", "Small and easy to hide", 0.5, 20, "1d4", Physical, false, Dexterity, 1),
    (3, "Short Bow", "Light bow for quick shots", 2.0, 60, "1d6", Physical, false, Dexterity, 1),
    (4, "Spear", "Medium reach weapon", 2.5, 40, "1d6", Physical, false, Strength, 1),
    (5, "Simple Mace", "Basic blunt weapon", 3.0, 35, "1d6", Physical, false, Strength, 1),
    (6, "Longsword", "Two-handed sword", 4.0, 80, "1d10", Physical, true, Strength, 2),
    (7, "Rapier", "Elegant and quick", 1.5, 70, "1d8", Physical, false, Dexterity, 2),
    (8, "Hand Crossbow", "Light and portable", 1.8, 90, "1d6", Physical, false, Dexterity, 2),
    (9, "Warhammer", "Powerful impact hammer", 5.5, 130, "1d10", Physical, true, Strength, 2),
    (10, "Longbow", "Long range and good accuracy", 2.5, 100, "1d8", Physical, true, Dexterity, 2),
    (11, "Fire Wand", "Shoots bursts of fire", 1.0, 150, "1d10", Magical, false, Intelligence, 3),
    (12, "Ice Staff", "Summons freezing winds", 2.0, 180, "1d8", Magical, false, Intelligence, 3),
    (13, "Flaming Sword", "Blade wrapped in flames", 3.5, 200, "2d6", Magical, false, Strength, 3),
    (14, "Thorn Whip", "Short area strikes", 2.0, 120, "1d8", Physical, false, Dexterity, 3),
    (15, "Shock Wand", "Channels electric energy", 1.2, 200, "1d12", Magical, false, Intelligence, 4),
    (16, "Bastard Sword", "Heavy but effective", 4.5, 180, "1d10", Physical, true, Strength, 4),
    (17, "Long Spear", "Long reach piercing weapon", 3.5, 160, "1d10", Physical, true, Strength, 4),
    (18, "Recurve Bow", "Bow built for impact", 2.8, 140, "1d10", Physical, true, Dexterity, 4),
    (19, "Runic Sword", "Enchanted with ancient runes", 3.8, 300, "2d8", Magical, false, Strength, 5),
    (20, "Celestial Hammer", "Forged with divine power", 6.0, 350, "2d6", Magical, true, Strength, 5),
    (21, "Shadow Bow", "Corrupted with shadow energy", 2.5, 280, "1d12", Magical, true, Dexterity, 5),
    (22, "Cosmic Staff", "Channels pure ether magic", 3.0, 400, "2d10", Magical, false, Intelligence, 5),
];

/// (id, name, description, weight, value, phys res, mag res, dex penalty, tier, str req, slot, level)
const ARMORS: [(u32, &str, &str, f64, u32, i32, i32, i32, ArmorTier, i32, EquipSlot, u32); 20] = [
    (101, "Leather Cap", "Simple head protection", 2.0, 10, 1, 0, 0, ArmorTier::Light, 0, EquipSlot::Head, 1),
    (102, "Leather Armor", "Basic leather protection", 10.0, 25, 2, 0, 0, ArmorTier::Light, 0, EquipSlot::Body, 1),
    (103, "Leather Gloves", "Simple flexible gloves", 0.5, 5, 1, 0, 0, ArmorTier::Light, 0, EquipSlot::Hands, 1),
    (104, "Leather Boots", "Light boots for quick movement", 1.0, 10, 1, 0, 0, ArmorTier::Light, 0, EquipSlot::Feet, 1),
    (105, "Chain Coif", "Interlocking rings for the head", 3.0, 20, 2, 1, 1, ArmorTier::Medium, 8, EquipSlot::Head, 2),
    (106, "Chain Shirt", "Mail for the torso", 20.0, 50, 4, 1, 2, ArmorTier::Medium, 10, EquipSlot::Body, 2),
    (107, "Chain Gauntlets", "Sturdy gloves with good mobility", 1.0, 15, 2, 1, 1, ArmorTier::Medium, 9, EquipSlot::Hands, 2),
    (108, "Chain Boots", "Leather boots reinforced with mail", 2.0, 20, 2, 1, 1, ArmorTier::Medium, 8, EquipSlot::Feet, 2),
    (109, "Arcane Hat", "Cloth hat with magical protection", 0.5, 30, 0, 2, 0, ArmorTier::Light, 0, EquipSlot::Head, 3),
    (110, "Mystic Robe", "Garments reinforced with enchantments", 2.0, 0, 0, 3, 0, ArmorTier::Light, 0, EquipSlot::Body, 3),
    (111, "Arcane Gloves", "Improve spell control", 0.3, 40, 0, 2, 0, ArmorTier::Light, 0, EquipSlot::Hands, 3),
    (112, "Elven Sandals", "Allow silent movement", 0.7, 50, 0, 1, 0, ArmorTier::Light, 0, EquipSlot::Feet, 3),
    (113, "Scale Helm", "Made of hardened scales", 4.0, 50, 3, 1, 2, ArmorTier::Medium, 11, EquipSlot::Head, 4),
    (114, "Scale Mail", "Sturdy articulated armor", 45.0, 75, 2, 2, 0, ArmorTier::Medium, 11, EquipSlot::Body, 4),
    (115, "Scale Gauntlets", "Balance of strength and flexibility", 2.0, 30, 1, 1, 2, ArmorTier::Medium, 10, EquipSlot::Hands, 4),
    (116, "Scale Boots", "Reinforced for rough terrain", 3.0, 35, 3, 1, 2, ArmorTier::Medium, 10, EquipSlot::Feet, 4),
    (117, "Royal Helm", "Ornate and sturdy helm", 5.0, 150, 4, 1, 3, ArmorTier::Heavy, 14, EquipSlot::Head, 5),
    (118, "Plate Armor", "Full metal plate coverage", 65.0, 1500, 8, 3, 5, ArmorTier::Heavy, 15, EquipSlot::Body, 5),
    (119, "War Gauntlets", "Protect hands and arms", 3.0, 120, 3, 2, 3, ArmorTier::Heavy, 13, EquipSlot::Hands, 5),
    (120, "Titanium Greaves", "Heavy, resilient boots", 4.0, 100, 3, 2, 3, ArmorTier::Heavy, 13, EquipSlot::Feet, 5),
];

/// (id, name, description, weight, value, armor bonus, str req, level)
const SHIELDS: [(u32, &str, &str, f64, u32, i32, i32, u32); 3] = [
    (201, "Wooden Shield", "Basic wooden shield", 6.0, 10, 1, 0, 1),
    (202, "Steel Shield", "Sturdy tempered steel shield", 10.0, 50, 2, 11, 2),
    (203, "Buckler", "Small dueling shield", 3.0, 40, 1, 0, 1),
];

/// (id, name, description, value, heal dice, mana dice)
const CONSUMABLES: [(u32, &str, &str, u32, Option<&str>, Option<&str>); 3] = [
    (301, "Healing Potion", "Restores a little health", 25, Some("2d4+2"), None),
    (302, "Mana Potion", "Restores a little mana", 25, None, Some("2d4")),
    (303, "Trail Rations", "Dry but filling", 5, Some("1d4"), None),
];

/// (id, name, description, value, slot)
const MISC: [(u32, &str, &str, u32, Option<EquipSlot>); 4] = [
    (401, "Copper Ring", "A plain copper band", 15, Some(EquipSlot::Ring1)),
    (402, "Bone Amulet", "Carved from an unknown beast", 20, Some(EquipSlot::Amulet)),
    (403, "Wolf Pelt", "Could fetch a price in town", 8, None),
    (404, "Old Map Fragment", "Part of a larger map", 2, None),
];

pub fn get_all_races() -> Vec<Race> {
    RACES
        .iter()
        .map(|(name, bonuses, description)| Race {
            name: name.to_string(),
            description: description.to_string(),
            bonuses: Attributes::from_values(*bonuses),
        })
        .collect()
}

pub fn get_all_classes() -> Vec<CharacterClass> {
    CLASSES
        .iter()
        .map(
            |(name, hit_dice, mana_dice, base_ac, weapon, armor, description)| CharacterClass {
                name: name.to_string(),
                description: description.to_string(),
                hit_dice: hit_dice.to_string(),
                mana_dice: mana_dice.to_string(),
                base_ac: *base_ac,
                starting_weapon_id: *weapon,
                starting_armor_id: *armor,
            },
        )
        .collect()
}

pub fn get_all_backgrounds() -> Vec<Background> {
    BACKGROUNDS
        .iter()
        .map(|(name, description, skills)| Background {
            name: name.to_string(),
            description: description.to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
        })
        .collect()
}

/// Monster templates. Attack bonus is the main attribute's modifier.
pub fn get_all_monsters() -> Vec<MonsterTemplate> {
    MONSTERS
        .iter()
        .map(
            |&(name, level, hp, ac, damage, exp, gold, attrs, main, attack_type, phys, mag)| {
                MonsterTemplate {
                    name: name.to_string(),
                    level,
                    hp_max: hp,
                    armor_class: ac,
                    damage_dice: damage.to_string(),
                    exp_reward: exp,
                    gold_dice: gold.to_string(),
                    attributes: Attributes::from_values(attrs),
                    main_attribute: main,
                    attack_type,
                    physical_resistance: phys,
                    magical_resistance: mag,
                }
            },
        )
        .collect()
}

pub fn get_all_items() -> Vec<ItemTemplate> {
    let weapons = WEAPONS.iter().map(
        |&(id, name, description, weight, value, damage, damage_type, two_handed, main, level)| {
            ItemTemplate {
                id,
                name: name.to_string(),
                description: description.to_string(),
                level,
                weight,
                value,
                equip_slot: Some(EquipSlot::MainHand),
                kind: ItemKind::Weapon {
                    damage_dice: damage.to_string(),
                    damage_type,
                    main_attribute: main,
                    two_handed,
                },
            }
        },
    );

    let armors = ARMORS.iter().map(
        |&(id, name, description, weight, value, phys, mag, penalty, tier, str_req, slot, level)| {
            ItemTemplate {
                id,
                name: name.to_string(),
                description: description.to_string(),
                level,
                weight,
                value,
                equip_slot: Some(slot),
                kind: ItemKind::Armor {
                    physical_resistance: phys,
                    magical_resistance: mag,
                    dexterity_penalty: penalty,
                    tier,
                    strength_requirement: str_req,
                },
            }
        },
    );

    let shields = SHIELDS.iter().map(
        |&(id, name, description, weight, value, bonus, str_req, level)| ItemTemplate {
            id,
            name: name.to_string(),
            description: description.to_string(),
            level,
            weight,
            value,
            equip_slot: Some(EquipSlot::OffHand),
            kind: ItemKind::Shield {
                armor_bonus: bonus,
                strength_requirement: str_req,
                physical_resistance: 0,
                magical_resistance: 0,
            },
        },
    );

    let consumables = CONSUMABLES.iter().map(
        |&(id, name, description, value, heal, mana)| ItemTemplate {
            id,
            name: name.to_string(),
            description: description.to_string(),
            level: 1,
            weight: 0.5,
            value,
            equip_slot: None,
            kind: ItemKind::Consumable {
                heal_dice: heal.map(str::to_string),
                mana_dice: mana.map(str::to_string),
            },
        },
    );

    let misc = MISC
        .iter()
        .map(|&(id, name, description, value, slot)| ItemTemplate {
            id,
            name: name.to_string(),
            description: description.to_string(),
            level: 1,
            weight: 0.2,
            value,
            equip_slot: slot,
            kind: ItemKind::Misc,
        });

    weapons
        .chain(armors)
        .chain(shields)
        .chain(consumables)
        .chain(misc)
        .collect()
}
