use crate::character::{AttributeType, Attributes, LevelUp};
use crate::dice;
use crate::items::DamageType;
use serde::{Deserialize, Serialize};

/// A catalog row describing a monster kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonsterTemplate {
    pub name: String,
    pub level: u32,
    pub hp_max: i32,
    pub armor_class: i32,
    pub damage_dice: String,
    pub exp_reward: u32,
    pub gold_dice: String,
    pub attributes: Attributes,
    pub main_attribute: AttributeType,
    pub attack_type: DamageType,
    pub physical_resistance: i32,
    pub magical_resistance: i32,
}

impl MonsterTemplate {
    /// The baseline monster used when no template fits the player's level.
    pub fn fallback() -> Self {
        Self {
            name: "Giant Rat".to_string(),
            level: 1,
            hp_max: 10,
            armor_class: 10,
            damage_dice: "1d4".to_string(),
            exp_reward: 5,
            gold_dice: "1d2".to_string(),
            attributes: Attributes::new(),
            main_attribute: AttributeType::Strength,
            attack_type: DamageType::Physical,
            physical_resistance: 0,
            magical_resistance: 0,
        }
    }

    /// Modifier of the main attack attribute.
    pub fn attack_bonus(&self) -> i32 {
        dice::modifier(self.attributes.get(self.main_attribute))
    }
}

/// A live monster for one encounter.
#[derive(Debug, Clone, PartialEq)]
pub struct Monster {
    pub template: MonsterTemplate,
    pub hp_max: i32,
    pub hp: i32,
}

impl Monster {
    /// Spawns with max hp scaled by `hp_multiplier` (truncated, at least 1).
    pub fn spawn(template: MonsterTemplate, hp_multiplier: f64) -> Self {
        let hp_max = ((template.hp_max as f64 * hp_multiplier) as i32).max(1);
        Self {
            template,
            hp_max,
            hp: hp_max,
        }
    }

    pub fn name(&self) -> &str {
        &self.template.name
    }

    pub fn armor_class(&self) -> i32 {
        self.template.armor_class
    }

    pub fn attack_bonus(&self) -> i32 {
        self.template.attack_bonus()
    }

    pub fn modifier(&self, attr: AttributeType) -> i32 {
        dice::modifier(self.template.attributes.get(attr))
    }

    pub fn resistance_against(&self, damage_type: DamageType) -> i32 {
        match damage_type {
            DamageType::Physical => self.template.physical_resistance,
            DamageType::Magical => self.template.magical_resistance,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.hp -= amount.max(0);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatAction {
    Attack,
    Flee,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatOutcome {
    Victory,
    Defeat,
    Permadeath,
    Fled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatPhase {
    Start,
    PlayerTurn,
    MonsterTurn,
    Finished(CombatOutcome),
}

/// One resolved d20 attack roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackRoll {
    pub die: i32,
    pub bonus: i32,
    pub total: i32,
    pub target: i32,
    pub hit: bool,
    pub critical: bool,
}

/// Damage of one landed hit, before and after resistance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitReport {
    pub raw: i32,
    pub dealt: i32,
    pub damage_type: DamageType,
}

impl HitReport {
    pub fn resisted(&self) -> i32 {
        (self.raw - self.dealt).max(0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CombatEvent {
    Encounter {
        name: String,
        level: u32,
        hp: i32,
    },
    PlayerAttack {
        roll: AttackRoll,
        hit: Option<HitReport>,
    },
    MonsterAttack {
        roll: AttackRoll,
        hit: Option<HitReport>,
    },
    FleeAttempt {
        player_roll: i32,
        monster_roll: i32,
        success: bool,
    },
    MonsterDefeated {
        name: String,
    },
    ExpGained {
        amount: u32,
    },
    LeveledUp(LevelUp),
    GoldGained {
        amount: u32,
    },
    ItemFound {
        name: String,
    },
    PlayerDefeated,
    ItemLost {
        name: String,
    },
    GoldLost {
        amount: u32,
    },
    Revived {
        hp: i32,
    },
    CharacterDeleted {
        name: String,
        removed: bool,
    },
    PersistenceFailed {
        action: &'static str,
        error: String,
    },
}
