//! Combat math.
//!
//! These pure functions calculate combat outcomes without side effects.
//! The session feeds them dice results and applies what they return.

use super::difficulty::DifficultyProfile;
use super::types::AttackRoll;
use crate::core::constants::{
    CRITICAL_ROLL, CRIT_BONUS_DAMAGE_FRACTION, DEFEAT_REVIVE_HP_FRACTION,
};

/// Resolve a d20 attack against an armor class.
///
/// # Arguments
/// * `die` - The natural d20 result
/// * `bonus` - Attack bonus added to the die
/// * `target_ac` - Defender's armor class
/// * `forced_critical` - A critical granted independently of the die
///
/// # Returns
/// AttackRoll; a natural 20 or a forced critical always hits.
pub fn resolve_attack(die: i32, bonus: i32, target_ac: i32, forced_critical: bool) -> AttackRoll {
    let total = die + bonus;
    let critical = die == CRITICAL_ROLL || forced_critical;
    AttackRoll {
        die,
        bonus,
        total,
        target: target_ac,
        hit: total >= target_ac || critical,
        critical,
    }
}

/// Critical hits double damage.
pub fn apply_critical(damage: i32, critical: bool) -> i32 {
    if critical {
        damage * 2
    } else {
        damage
    }
}

/// Multiply and truncate toward zero.
pub fn scale_damage(damage: i32, multiplier: f64) -> i32 {
    (damage as f64 * multiplier) as i32
}

/// Pre-resistance damage of a player hit.
///
/// # Arguments
/// * `raw` - Rolled weapon damage
/// * `critical` - Whether the attack was critical
/// * `profile` - Active difficulty profile
///
/// # Returns
/// Raw damage, doubled on a critical, scaled by `damage_dealt`. Profiles
/// with an enemy crit bonus add 15% more on player criticals.
pub fn player_damage(raw: i32, critical: bool, profile: &DifficultyProfile) -> i32 {
    let mut damage = scale_damage(apply_critical(raw, critical), profile.damage_dealt);
    if critical && profile.enemy_crit_chance_bonus.is_some() {
        damage += scale_damage(damage, CRIT_BONUS_DAMAGE_FRACTION);
    }
    damage
}

/// Pre-resistance damage of a monster hit: doubled on a critical, scaled by
/// `damage_received`.
pub fn monster_damage(raw: i32, critical: bool, profile: &DifficultyProfile) -> i32 {
    scale_damage(apply_critical(raw, critical), profile.damage_received)
}

/// Flat resistance subtraction. A hit always deals at least 1.
pub fn mitigate(damage: i32, resistance: i32) -> i32 {
    (damage - resistance).max(1)
}

/// Fleeing needs a strictly higher roll; ties go to the monster.
pub fn flee_succeeds(player_roll: i32, monster_roll: i32) -> bool {
    player_roll > monster_roll
}

/// Hit points after a non-permanent defeat.
pub fn revive_hp(hp_max: i32, healing_received: f64) -> i32 {
    ((hp_max as f64 * DEFEAT_REVIVE_HP_FRACTION * healing_received) as i32).max(1)
}
