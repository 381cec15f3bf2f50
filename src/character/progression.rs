//! Experience, level-ups and resting.

use super::attributes::AttributeType;
use super::types::Character;
use crate::core::constants::{EXP_GROWTH_DENOMINATOR, EXP_GROWTH_NUMERATOR};
use crate::dice;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelUp {
    pub new_level: u32,
    pub hp_gained: i32,
    pub mana_gained: i32,
}

/// Grows a threshold by 3/2, capped at `u32::MAX`.
fn next_exp_max(exp_max: u32) -> u32 {
    let grown = exp_max as u64 * EXP_GROWTH_NUMERATOR as u64 / EXP_GROWTH_DENOMINATOR as u64;
    grown.min(u32::MAX as u64) as u32
}

impl Character {
    /// Adds experience and applies every level-up it pays for.
    ///
    /// Each level rolls the class hit dice (+CON modifier, at least 1) and
    /// mana dice, then fully restores hp and mana. The next threshold grows
    /// by half.
    pub fn gain_exp<R: Rng + ?Sized>(&mut self, amount: u32, rng: &mut R) -> Vec<LevelUp> {
        self.exp = self.exp.saturating_add(amount);
        let mut levels = Vec::new();

        while self.exp_max > 0 && self.exp >= self.exp_max {
            self.exp -= self.exp_max;
            levels.push(self.level_up(rng));
        }
        levels
    }

    fn level_up<R: Rng + ?Sized>(&mut self, rng: &mut R) -> LevelUp {
        let con_mod = self.effective_modifier(AttributeType::Constitution);
        let hp_gained = (dice::roll(&self.class.hit_dice, rng) + con_mod).max(1);
        let mana_gained = dice::roll(&self.class.mana_dice, rng).max(0);

        self.level += 1;
        self.hp_max = self.hp_max.saturating_add(hp_gained);
        self.mana_max = self.mana_max.saturating_add(mana_gained);
        self.hp = self.hp_max;
        self.mana = self.mana_max;
        self.exp_max = next_exp_max(self.exp_max);

        tracing::info!(
            character = %self.name,
            level = self.level,
            hp_gained,
            mana_gained,
            "level up"
        );

        LevelUp {
            new_level: self.level,
            hp_gained,
            mana_gained,
        }
    }

    /// Restores `hp_max * healing_multiplier` hit points and all mana.
    /// Returns `(hp_restored, mana_restored)`.
    pub fn rest(&mut self, healing_multiplier: f64) -> (i32, i32) {
        let amount = (self.hp_max as f64 * healing_multiplier) as i32;
        let hp = self.heal(amount);
        let mana = self.restore_mana(self.mana_max);
        (hp, mana)
    }
}
