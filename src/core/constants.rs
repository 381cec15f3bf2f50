// Character attributes
pub const BASE_ATTRIBUTE_VALUE: i32 = 10;
pub const NUM_ATTRIBUTES: usize = 6;

// Dice notation limits
pub const MAX_DICE_COUNT: u32 = 1000;
pub const MAX_DIE_SIDES: u32 = 1000;

// Character creation
pub const MAX_NAME_LENGTH: usize = 16;
pub const STARTING_GOLD: u32 = 10;
pub const STARTING_EXP_MAX: u32 = 100;

// Leveling: exp_max grows by 3/2 each level
pub const EXP_GROWTH_NUMERATOR: u32 = 3;
pub const EXP_GROWTH_DENOMINATOR: u32 = 2;

// Combat
pub const CRITICAL_ROLL: i32 = 20;
pub const CRIT_BONUS_DAMAGE_FRACTION: f64 = 0.15;
pub const VICTORY_ITEM_DROP_CHANCE: f64 = 0.4;
pub const DEFEAT_ITEM_LOSS_CHANCE: f64 = 0.3;
pub const DEFEAT_REVIVE_HP_FRACTION: f64 = 0.1;
pub const UNARMED_DAMAGE_DICE: &str = "1d4";

// Monster selection window around the player's level
pub const MONSTER_LEVEL_BELOW: u32 = 2;
pub const MONSTER_LEVEL_ABOVE: u32 = 1;

// Enhancement
pub const ENHANCEMENT_VALUE_STEP: f64 = 0.5;

// Files
pub const DATA_DIR_NAME: &str = ".rust_dice";
pub const CHARACTERS_DIR_NAME: &str = "characters";
pub const CONFIG_FILE_NAME: &str = "config.json";
pub const LOG_FILE_NAME: &str = "rust-dice.log";
