use crate::core::constants::{BASE_ATTRIBUTE_VALUE, NUM_ATTRIBUTES};
use crate::dice;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AttributeType {
    Strength,
    Dexterity,
    Constitution,
    Intelligence,
    Wisdom,
    Charisma,
}

impl AttributeType {
    pub fn all() -> [AttributeType; NUM_ATTRIBUTES] {
        [
            AttributeType::Strength,
            AttributeType::Dexterity,
            AttributeType::Constitution,
            AttributeType::Intelligence,
            AttributeType::Wisdom,
            AttributeType::Charisma,
        ]
    }

    pub fn abbrev(&self) -> &'static str {
        match self {
            AttributeType::Strength => "STR",
            AttributeType::Dexterity => "DEX",
            AttributeType::Constitution => "CON",
            AttributeType::Intelligence => "INT",
            AttributeType::Wisdom => "WIS",
            AttributeType::Charisma => "CHA",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AttributeType::Strength => "Strength",
            AttributeType::Dexterity => "Dexterity",
            AttributeType::Constitution => "Constitution",
            AttributeType::Intelligence => "Intelligence",
            AttributeType::Wisdom => "Wisdom",
            AttributeType::Charisma => "Charisma",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            AttributeType::Strength => 0,
            AttributeType::Dexterity => 1,
            AttributeType::Constitution => 2,
            AttributeType::Intelligence => 3,
            AttributeType::Wisdom => 4,
            AttributeType::Charisma => 5,
        }
    }
}

/// Six attribute scores. Also used for race bonuses, which may be negative.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Attributes {
    values: [i32; NUM_ATTRIBUTES],
}

impl Default for Attributes {
    fn default() -> Self {
        Self::new()
    }
}

impl Attributes {
    pub fn new() -> Self {
        Self {
            values: [BASE_ATTRIBUTE_VALUE; NUM_ATTRIBUTES],
        }
    }

    pub fn zero() -> Self {
        Self {
            values: [0; NUM_ATTRIBUTES],
        }
    }

    /// Values in STR, DEX, CON, INT, WIS, CHA order.
    pub fn from_values(values: [i32; NUM_ATTRIBUTES]) -> Self {
        Self { values }
    }

    pub fn values(&self) -> [i32; NUM_ATTRIBUTES] {
        self.values
    }

    pub fn get(&self, attr: AttributeType) -> i32 {
        self.values[attr.index()]
    }

    pub fn set(&mut self, attr: AttributeType, value: i32) {
        self.values[attr.index()] = value;
    }

    pub fn modifier(&self, attr: AttributeType) -> i32 {
        dice::modifier(self.get(attr))
    }

    /// Adds another set of values to this one (race bonuses).
    pub fn add(&mut self, other: &Attributes) {
        for attr in AttributeType::all() {
            self.values[attr.index()] += other.get(attr);
        }
    }
}
