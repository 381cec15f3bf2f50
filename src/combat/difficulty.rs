/// A named bundle of multipliers applied around combat resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyProfile {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub damage_received: f64,
    pub damage_dealt: f64,
    pub exp_multiplier: f64,
    pub gold_multiplier: f64,
    pub healing_received: f64,
    pub monster_hp_multiplier: f64,
    /// Chance per monster attack of a forced critical. Profiles with this
    /// set also add 15% to the player's critical damage.
    pub enemy_crit_chance_bonus: Option<f64>,
}

pub const DEFAULT_DIFFICULTY_ID: &str = "fair_challenge";

pub static DIFFICULTY_PROFILES: [DifficultyProfile; 6] = [
    DifficultyProfile {
        id: "light_adventure",
        name: "Light Adventure",
        description: "Forgiving fights and generous rewards.",
        damage_received: 0.75,
        damage_dealt: 1.25,
        exp_multiplier: 1.25,
        gold_multiplier: 1.25,
        healing_received: 1.5,
        monster_hp_multiplier: 0.8,
        enemy_crit_chance_bonus: None,
    },
    DifficultyProfile {
        id: "fair_challenge",
        name: "Fair Challenge",
        description: "The game as intended.",
        damage_received: 1.0,
        damage_dealt: 1.0,
        exp_multiplier: 1.0,
        gold_multiplier: 1.0,
        healing_received: 1.0,
        monster_hp_multiplier: 1.0,
        enemy_crit_chance_bonus: None,
    },
    DifficultyProfile {
        id: "cursed_trial",
        name: "Cursed Trial",
        description: "Monsters are tougher and healing is weaker.",
        damage_received: 1.25,
        damage_dealt: 0.9,
        exp_multiplier: 1.1,
        gold_multiplier: 1.0,
        healing_received: 0.9,
        monster_hp_multiplier: 1.2,
        enemy_crit_chance_bonus: None,
    },
    DifficultyProfile {
        id: "path_of_pain",
        name: "Path of Pain",
        description: "Monsters can land surprise critical hits.",
        damage_received: 1.5,
        damage_dealt: 0.85,
        exp_multiplier: 1.25,
        gold_multiplier: 1.1,
        healing_received: 0.75,
        monster_hp_multiplier: 1.4,
        enemy_crit_chance_bonus: Some(0.05),
    },
    DifficultyProfile {
        id: "iron_curse",
        name: "Iron Curse",
        description: "Every encounter can be your last.",
        damage_received: 1.75,
        damage_dealt: 0.8,
        exp_multiplier: 1.4,
        gold_multiplier: 1.2,
        healing_received: 0.6,
        monster_hp_multiplier: 1.6,
        enemy_crit_chance_bonus: Some(0.10),
    },
    DifficultyProfile {
        id: "living_hell",
        name: "Living Hell",
        description: "For those who want to suffer.",
        damage_received: 2.0,
        damage_dealt: 0.75,
        exp_multiplier: 1.6,
        gold_multiplier: 1.3,
        healing_received: 0.5,
        monster_hp_multiplier: 2.0,
        enemy_crit_chance_bonus: Some(0.15),
    },
];

impl DifficultyProfile {
    /// Looks a profile up by id, falling back to Fair Challenge.
    pub fn by_id(id: &str) -> &'static DifficultyProfile {
        DIFFICULTY_PROFILES
            .iter()
            .find(|p| p.id == id)
            .unwrap_or(&DIFFICULTY_PROFILES[1])
    }

    pub fn all() -> &'static [DifficultyProfile] {
        &DIFFICULTY_PROFILES
    }
}
