//! The encounter state machine.
//!
//! `CombatSession` owns the monster and the event log for one fight. The
//! player is borrowed per call so the caller keeps ownership between turns.

use super::difficulty::DifficultyProfile;
use super::math;
use super::types::{
    CombatAction, CombatEvent, CombatOutcome, CombatPhase, HitReport, Monster, MonsterTemplate,
};
use crate::catalog::Catalog;
use crate::character::{AttributeType, Character};
use crate::core::constants::{DEFEAT_ITEM_LOSS_CHANCE, VICTORY_ITEM_DROP_CHANCE};
use crate::dice;
use crate::persistence::CharacterStore;
use rand::seq::SliceRandom;
use rand::Rng;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct CombatSession {
    monster: Monster,
    profile: &'static DifficultyProfile,
    permadeath: bool,
    phase: CombatPhase,
    round: u32,
    log: Vec<CombatEvent>,
}

impl CombatSession {
    /// Generates a monster for the player's level and opens the encounter.
    ///
    /// One eligible template is chosen uniformly and its hit points scaled
    /// by the profile. With no eligible template the unscaled fallback
    /// monster is used.
    pub fn start<R: Rng>(player: &Character, catalog: &dyn Catalog, rng: &mut R) -> Self {
        let profile = DifficultyProfile::by_id(&player.difficulty);
        let templates = catalog.monster_templates_for_level(player.level);

        let monster = match templates.choose(rng) {
            Some(template) => Monster::spawn(template.clone(), profile.monster_hp_multiplier),
            None => {
                tracing::warn!(level = player.level, "no monster fits level, using fallback");
                Monster::spawn(MonsterTemplate::fallback(), 1.0)
            }
        };

        tracing::info!(
            character = %player.name,
            monster = %monster.name(),
            monster_hp = monster.hp_max,
            difficulty = profile.id,
            "combat started"
        );

        Self::with_monster(monster, profile, player.permadeath)
    }

    /// Opens an encounter against a given monster.
    pub fn with_monster(
        monster: Monster,
        profile: &'static DifficultyProfile,
        permadeath: bool,
    ) -> Self {
        let log = vec![CombatEvent::Encounter {
            name: monster.name().to_string(),
            level: monster.template.level,
            hp: monster.hp_max,
        }];
        Self {
            monster,
            profile,
            permadeath,
            phase: CombatPhase::Start,
            round: 0,
            log,
        }
    }

    pub fn monster(&self) -> &Monster {
        &self.monster
    }

    pub fn profile(&self) -> &'static DifficultyProfile {
        self.profile
    }

    pub fn phase(&self) -> CombatPhase {
        self.phase
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn log(&self) -> &[CombatEvent] {
        &self.log
    }

    pub fn outcome(&self) -> Option<CombatOutcome> {
        match self.phase {
            CombatPhase::Finished(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.outcome().is_some()
    }

    /// Plays one full round: the player's action, then the monster's reply
    /// unless the fight already ended. Returns the outcome once finished.
    ///
    /// Rewards and losses are written through `store`; a failed write is
    /// logged as `PersistenceFailed` and never undoes the round.
    pub fn take_turn<R: Rng>(
        &mut self,
        action: CombatAction,
        player: &mut Character,
        store: &mut dyn CharacterStore,
        catalog: &dyn Catalog,
        rng: &mut R,
    ) -> Option<CombatOutcome> {
        if self.is_finished() {
            return self.outcome();
        }
        self.round += 1;
        self.phase = CombatPhase::PlayerTurn;

        match action {
            CombatAction::Attack => {
                let die = dice::d20(rng);
                let weapon = player.weapon_profile();
                let raw = dice::roll(&weapon.damage_dice, rng);
                self.player_attack(player, die, raw);
                if !self.monster.is_alive() {
                    self.finish(CombatOutcome::Victory, player, store, catalog, rng);
                    return self.outcome();
                }
            }
            CombatAction::Flee => {
                let player_roll =
                    dice::d20(rng) + player.effective_modifier(AttributeType::Intelligence);
                let monster_roll =
                    dice::d20(rng) + self.monster.modifier(AttributeType::Dexterity);
                if self.attempt_flee(player_roll, monster_roll) {
                    self.finish(CombatOutcome::Fled, player, store, catalog, rng);
                    return self.outcome();
                }
            }
        }

        self.phase = CombatPhase::MonsterTurn;
        let forced_critical = self
            .profile
            .enemy_crit_chance_bonus
            .is_some_and(|chance| rng.gen::<f64>() < chance);
        let die = dice::d20(rng);
        let raw = dice::roll(&self.monster.template.damage_dice, rng);
        self.monster_attack(player, die, forced_critical, raw);

        if !player.is_alive() {
            let outcome = if self.permadeath {
                CombatOutcome::Permadeath
            } else {
                CombatOutcome::Defeat
            };
            self.finish(outcome, player, store, catalog, rng);
            return self.outcome();
        }

        self.phase = CombatPhase::PlayerTurn;
        None
    }

    /// Resolves a player attack from a natural d20 and a rolled weapon
    /// damage. Returns the hit, if any.
    pub fn player_attack(&mut self, player: &Character, die: i32, raw_damage: i32) -> Option<HitReport> {
        let weapon = player.weapon_profile();
        let roll = math::resolve_attack(die, player.attack_bonus(), self.monster.armor_class(), false);

        let hit = roll.hit.then(|| {
            let raw = math::player_damage(raw_damage.max(0), roll.critical, self.profile);
            let dealt = math::mitigate(raw, self.monster.resistance_against(weapon.damage_type));
            self.monster.take_damage(dealt);
            HitReport {
                raw,
                dealt,
                damage_type: weapon.damage_type,
            }
        });

        self.log.push(CombatEvent::PlayerAttack { roll, hit });
        if !self.monster.is_alive() {
            self.log.push(CombatEvent::MonsterDefeated {
                name: self.monster.name().to_string(),
            });
        }
        hit
    }

    /// Resolves a monster attack. A forced critical hits regardless of the
    /// die.
    pub fn monster_attack(
        &mut self,
        player: &mut Character,
        die: i32,
        forced_critical: bool,
        raw_damage: i32,
    ) -> Option<HitReport> {
        let roll = math::resolve_attack(
            die,
            self.monster.attack_bonus(),
            player.armor_class(),
            forced_critical,
        );
        let damage_type = self.monster.template.attack_type;

        let hit = roll.hit.then(|| {
            let raw = math::monster_damage(raw_damage.max(0), roll.critical, self.profile);
            let dealt = math::mitigate(raw, player.resistance_against(damage_type));
            player.take_damage(dealt);
            HitReport {
                raw,
                dealt,
                damage_type,
            }
        });

        self.log.push(CombatEvent::MonsterAttack { roll, hit });
        hit
    }

    /// Compares finished flee rolls (die plus modifier). Returns whether
    /// the player escaped.
    pub fn attempt_flee(&mut self, player_roll: i32, monster_roll: i32) -> bool {
        let success = math::flee_succeeds(player_roll, monster_roll);
        self.log.push(CombatEvent::FleeAttempt {
            player_roll,
            monster_roll,
            success,
        });
        success
    }

    fn finish<R: Rng>(
        &mut self,
        outcome: CombatOutcome,
        player: &mut Character,
        store: &mut dyn CharacterStore,
        catalog: &dyn Catalog,
        rng: &mut R,
    ) {
        match outcome {
            CombatOutcome::Victory => self.settle_victory(player, store, catalog, rng),
            CombatOutcome::Defeat => self.settle_defeat(player, store, rng),
            CombatOutcome::Permadeath => self.settle_permadeath(player, store),
            CombatOutcome::Fled => {}
        }
        self.phase = CombatPhase::Finished(outcome);
        tracing::info!(
            character = %player.name,
            monster = %self.monster.name(),
            rounds = self.round,
            ?outcome,
            "combat finished"
        );
    }

    fn settle_victory<R: Rng>(
        &mut self,
        player: &mut Character,
        store: &mut dyn CharacterStore,
        catalog: &dyn Catalog,
        rng: &mut R,
    ) {
        let template = &self.monster.template;
        let exp = (template.exp_reward as f64 * self.profile.exp_multiplier) as u32;
        let gold_roll = dice::roll(&template.gold_dice, rng).max(0);
        let gold = (gold_roll as f64 * self.profile.gold_multiplier) as u32;

        self.log.push(CombatEvent::ExpGained { amount: exp });
        for level_up in player.gain_exp(exp, rng) {
            self.log.push(CombatEvent::LeveledUp(level_up));
        }

        player.gold = player.gold.saturating_add(gold);
        self.log.push(CombatEvent::GoldGained { amount: gold });

        if rng.gen_bool(VICTORY_ITEM_DROP_CHANCE) {
            if let Some(item) = catalog.random_obtainable_item(rng) {
                match store.add_item_to_inventory(player.id, &item, 1, 0, None) {
                    Ok(entry) => {
                        self.log.push(CombatEvent::ItemFound {
                            name: entry.item.name.clone(),
                        });
                        player.add_entry(entry);
                    }
                    Err(e) => self.persistence_failed("add item", e),
                }
            }
        }

        if let Err(e) = store.update_gold(player.id, player.gold) {
            self.persistence_failed("update gold", e);
        }
        if let Err(e) = store.save_character(player) {
            self.persistence_failed("save character", e);
        }
    }

    fn settle_defeat<R: Rng>(
        &mut self,
        player: &mut Character,
        store: &mut dyn CharacterStore,
        rng: &mut R,
    ) {
        self.log.push(CombatEvent::PlayerDefeated);

        if rng.gen_bool(DEFEAT_ITEM_LOSS_CHANCE) {
            let candidates: Vec<(Uuid, String, u32)> = player
                .unequipped_entries()
                .map(|e| (e.id, e.item.name.clone(), e.quantity))
                .collect();
            if let Some((entry_id, name, quantity)) = candidates.choose(rng).cloned() {
                if let Err(e) = store.remove_item_from_inventory(player.id, entry_id, quantity) {
                    self.persistence_failed("remove item", e);
                }
                player.remove_quantity(entry_id, quantity);
                self.log.push(CombatEvent::ItemLost { name });
            }
        }

        let lost = player.gold / 2;
        if lost > 0 {
            player.gold -= lost;
            self.log.push(CombatEvent::GoldLost { amount: lost });
            if let Err(e) = store.update_gold(player.id, player.gold) {
                self.persistence_failed("update gold", e);
            }
        }

        player.hp = math::revive_hp(player.hp_max, self.profile.healing_received);
        self.log.push(CombatEvent::Revived { hp: player.hp });

        if let Err(e) = store.save_character(player) {
            self.persistence_failed("save character", e);
        }
    }

    fn settle_permadeath(&mut self, player: &mut Character, store: &mut dyn CharacterStore) {
        player.hp = 0;
        self.log.push(CombatEvent::PlayerDefeated);
        match store.delete_character(player.id) {
            Ok(removed) => self.log.push(CombatEvent::CharacterDeleted {
                name: player.name.clone(),
                removed,
            }),
            Err(e) => self.persistence_failed("delete character", e),
        }
    }

    fn persistence_failed(&mut self, action: &'static str, error: impl std::fmt::Display) {
        tracing::error!(action, error = %error, "persistence failed during combat");
        self.log.push(CombatEvent::PersistenceFailed {
            action,
            error: error.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StaticCatalog;
    use crate::character::types::test_support::*;
    use crate::character::Attributes;
    use crate::persistence::{CharacterSummary, MemoryStore, StoreError};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::io;

    fn fair() -> &'static DifficultyProfile {
        DifficultyProfile::by_id("fair_challenge")
    }

    fn template(hp: i32, ac: i32) -> MonsterTemplate {
        MonsterTemplate {
            name: "Training Dummy".to_string(),
            hp_max: hp,
            armor_class: ac,
            ..MonsterTemplate::fallback()
        }
    }

    fn session(hp: i32, ac: i32, permadeath: bool) -> CombatSession {
        CombatSession::with_monster(Monster::spawn(template(hp, ac), 1.0), fair(), permadeath)
    }

    /// A one-hit-point hero every monster attack reaches (AC 0).
    fn fragile_hero(permadeath: bool) -> Character {
        let mut class = warrior();
        class.base_ac = 0;
        let mut c = Character::new(
            "Fragile",
            human(),
            class,
            None,
            Attributes::new(),
            "fair_challenge",
            permadeath,
        );
        c.hp = 1;
        c
    }

    /// Saves and loads normally; deletes always fail.
    struct ReadOnlyDeleteStore(MemoryStore);

    impl CharacterStore for ReadOnlyDeleteStore {
        fn save_character(&mut self, character: &Character) -> Result<(), StoreError> {
            self.0.save_character(character)
        }

        fn load_character(&self, id: Uuid) -> Result<Character, StoreError> {
            self.0.load_character(id)
        }

        fn list_characters(&self) -> Result<Vec<CharacterSummary>, StoreError> {
            self.0.list_characters()
        }

        fn delete_character(&mut self, _id: Uuid) -> Result<bool, StoreError> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "save directory is read-only").into())
        }
    }

    fn armed_hero() -> Character {
        let mut c = hero();
        let sword = sword();
        let id = sword.id;
        c.add_entry(sword);
        c.equip(id).unwrap();
        c
    }

    // =========================================================================
    // Session setup
    // =========================================================================

    #[test]
    fn test_start_picks_eligible_template() {
        let catalog = StaticCatalog::new();
        let player = hero();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let session = CombatSession::start(&player, &catalog, &mut rng);
        assert!(session.monster().template.level <= 2);
        assert_eq!(session.phase(), CombatPhase::Start);
        assert!(matches!(session.log()[0], CombatEvent::Encounter { .. }));
    }

    #[test]
    fn test_start_falls_back_without_templates() {
        let catalog = StaticCatalog::new().with_monsters(Vec::new());
        let mut player = hero();
        player.difficulty = "living_hell".to_string();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let session = CombatSession::start(&player, &catalog, &mut rng);
        assert_eq!(session.monster().name(), "Giant Rat");
        assert_eq!(session.monster().hp_max, 10);
    }

    #[test]
    fn test_start_scales_monster_hp() {
        let catalog = StaticCatalog::new().with_monsters(vec![template(20, 10)]);
        let mut player = hero();
        player.difficulty = "light_adventure".to_string();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let session = CombatSession::start(&player, &catalog, &mut rng);
        assert_eq!(session.monster().hp_max, 16);
    }

    // =========================================================================
    // Attack resolution
    // =========================================================================

    #[test]
    fn test_roll_of_fifteen_hits_for_weapon_roll() {
        let player = armed_hero();
        let mut s = session(30, 10, false);
        for raw in 1..=6 {
            let hit = s.player_attack(&player, 15, raw).unwrap();
            assert_eq!(hit.dealt, raw);
            assert_eq!(hit.damage_type, crate::items::DamageType::Physical);
        }
        assert_eq!(s.monster().hp, 30 - 21);
    }

    #[test]
    fn test_miss_deals_nothing() {
        let player = armed_hero();
        let mut s = session(30, 15, false);
        assert!(s.player_attack(&player, 14, 6).is_none());
        assert_eq!(s.monster().hp, 30);
    }

    #[test]
    fn test_natural_twenty_doubles_before_resistance() {
        let player = armed_hero();
        let mut t = template(30, 40);
        t.physical_resistance = 3;
        let mut s = CombatSession::with_monster(Monster::spawn(t, 1.0), fair(), false);
        let hit = s.player_attack(&player, 20, 5).unwrap();
        assert_eq!(hit.raw, 10);
        assert_eq!(hit.dealt, 7);
    }

    #[test]
    fn test_resistance_never_negates_a_hit() {
        let player = armed_hero();
        let mut t = template(30, 0);
        t.physical_resistance = 50;
        let mut s = CombatSession::with_monster(Monster::spawn(t, 1.0), fair(), false);
        assert_eq!(s.player_attack(&player, 10, 6).unwrap().dealt, 1);
    }

    #[test]
    fn test_monster_defeat_is_logged() {
        let player = armed_hero();
        let mut s = session(3, 0, false);
        s.player_attack(&player, 10, 6);
        assert!(!s.monster().is_alive());
        assert!(matches!(
            s.log().last(),
            Some(CombatEvent::MonsterDefeated { .. })
        ));
    }

    #[test]
    fn test_forced_critical_hits_any_armor() {
        let mut player = hero();
        let hp = player.hp;
        let mut s = session(30, 10, false);
        let hit = s.monster_attack(&mut player, 1, true, 2).unwrap();
        assert_eq!(hit.raw, 4);
        assert_eq!(player.hp, hp - 4);
    }

    #[test]
    fn test_monster_damage_uses_player_resistance() {
        let mut player = hero();
        let shirt = chain_shirt();
        let id = shirt.id;
        player.add_entry(shirt);
        player.equip(id).unwrap();
        let hp = player.hp;

        let mut s = session(30, 10, false);
        let hit = s.monster_attack(&mut player, 20, false, 3).unwrap();
        assert_eq!(hit.raw, 6);
        assert_eq!(hit.dealt, 2);
        assert_eq!(player.hp, hp - 2);
    }

    // =========================================================================
    // Flee
    // =========================================================================

    #[test]
    fn test_flee_needs_strictly_higher_roll() {
        let mut s = session(30, 10, false);
        assert!(!s.attempt_flee(10, 10));
        assert!(!s.attempt_flee(9, 10));
        assert!(s.attempt_flee(11, 10));
    }

    #[test]
    fn test_fled_session_reports_outcome() {
        let mut store = MemoryStore::new();
        let catalog = StaticCatalog::new();
        let mut player = hero();
        player.base_attributes.set(AttributeType::Intelligence, 60);
        let mut s = session(30, 10, false);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let outcome = s.take_turn(CombatAction::Flee, &mut player, &mut store, &catalog, &mut rng);
        assert_eq!(outcome, Some(CombatOutcome::Fled));
        assert!(s.is_finished());
    }

    #[test]
    fn test_failed_flee_gives_monster_its_turn() {
        let catalog = StaticCatalog::new();
        let mut store = MemoryStore::new();
        let mut player = hero();
        player.base_attributes.set(AttributeType::Intelligence, 1);
        player.hp = 1000;
        player.hp_max = 1000;
        store.save_character(&player).unwrap();

        let mut quick = template(10_000, 10);
        quick.attributes.set(AttributeType::Dexterity, 40);
        let mut s = CombatSession::with_monster(Monster::spawn(quick, 1.0), fair(), false);

        for seed in 0..10 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let before = s.log().len();
            let outcome = s.take_turn(CombatAction::Flee, &mut player, &mut store, &catalog, &mut rng);

            assert_eq!(outcome, None);
            assert_eq!(s.phase(), CombatPhase::PlayerTurn);
            let turn = &s.log()[before..];
            assert!(matches!(
                turn,
                [
                    CombatEvent::FleeAttempt { success: false, .. },
                    CombatEvent::MonsterAttack { .. }
                ]
            ));
        }
        assert_eq!(s.round(), 10);
        assert!(!s.is_finished());
    }

    // =========================================================================
    // Terminal outcomes
    // =========================================================================

    #[test]
    fn test_lethal_hit_with_permadeath_deletes_character() {
        let catalog = StaticCatalog::new();
        for seed in 0..20 {
            let mut store = MemoryStore::new();
            let mut player = fragile_hero(true);
            store.save_character(&player).unwrap();
            let mut s = session(10_000, 30, true);
            let mut rng = ChaCha8Rng::seed_from_u64(seed);

            let outcome =
                s.take_turn(CombatAction::Attack, &mut player, &mut store, &catalog, &mut rng);

            assert_eq!(outcome, Some(CombatOutcome::Permadeath));
            assert_eq!(player.hp, 0);
            assert!(!store.contains(player.id));
            assert!(s
                .log()
                .iter()
                .any(|e| matches!(e, CombatEvent::CharacterDeleted { removed: true, .. })));
        }
    }

    #[test]
    fn test_failed_deletion_still_ends_in_permadeath() {
        let catalog = StaticCatalog::new();
        for seed in 0..20 {
            let mut store = ReadOnlyDeleteStore(MemoryStore::new());
            let mut player = fragile_hero(true);
            store.save_character(&player).unwrap();
            let mut s = session(10_000, 30, true);
            let mut rng = ChaCha8Rng::seed_from_u64(seed);

            let outcome =
                s.take_turn(CombatAction::Attack, &mut player, &mut store, &catalog, &mut rng);

            assert_eq!(outcome, Some(CombatOutcome::Permadeath));
            assert_eq!(s.outcome(), Some(CombatOutcome::Permadeath));
            assert_eq!(player.hp, 0);
            assert!(store.0.contains(player.id));
            assert!(s.log().iter().any(|e| matches!(
                e,
                CombatEvent::PersistenceFailed {
                    action: "delete character",
                    ..
                }
            )));
            assert!(!s
                .log()
                .iter()
                .any(|e| matches!(e, CombatEvent::CharacterDeleted { .. })));
            let again = s.take_turn(CombatAction::Attack, &mut player, &mut store, &catalog, &mut rng);
            assert_eq!(again, Some(CombatOutcome::Permadeath));
        }
    }

    #[test]
    fn test_lethal_hit_without_permadeath_revives() {
        let catalog = StaticCatalog::new();
        for seed in 0..20 {
            let mut store = MemoryStore::new();
            let mut player = fragile_hero(false);
            player.gold = 40;
            store.save_character(&player).unwrap();
            let mut s = session(10_000, 30, false);
            let mut rng = ChaCha8Rng::seed_from_u64(seed);

            let outcome =
                s.take_turn(CombatAction::Attack, &mut player, &mut store, &catalog, &mut rng);

            assert_eq!(outcome, Some(CombatOutcome::Defeat));
            assert!(player.hp >= 1);
            assert_eq!(player.gold, 20);
            let stored = store.load_character(player.id).unwrap();
            assert_eq!(stored.hp, player.hp);
            assert_eq!(stored.gold, 20);
        }
    }

    #[test]
    fn test_defeat_never_takes_equipped_items() {
        let catalog = StaticCatalog::new();
        for seed in 0..30 {
            let mut store = MemoryStore::new();
            let mut player = fragile_hero(false);
            let sword = sword();
            let sword_id = sword.id;
            player.add_entry(sword);
            player.equip(sword_id).unwrap();
            store.save_character(&player).unwrap();
            let mut s = session(10_000, 30, false);
            let mut rng = ChaCha8Rng::seed_from_u64(seed);

            s.take_turn(CombatAction::Attack, &mut player, &mut store, &catalog, &mut rng);
            assert!(player.entry(sword_id).is_some());
        }
    }

    #[test]
    fn test_victory_rewards_and_persists() {
        let catalog = StaticCatalog::new();
        let mut store = MemoryStore::new();
        let mut player = armed_hero();
        store.save_character(&player).unwrap();
        let gold_before = player.gold;
        let mut s = session(1, 0, false);
        let mut rng = ChaCha8Rng::seed_from_u64(99);

        let outcome = s.take_turn(CombatAction::Attack, &mut player, &mut store, &catalog, &mut rng);

        assert_eq!(outcome, Some(CombatOutcome::Victory));
        assert_eq!(player.exp, 5);
        assert!(player.gold > gold_before);
        let stored = store.load_character(player.id).unwrap();
        assert_eq!(stored.gold, player.gold);
        assert_eq!(stored.inventory.len(), player.inventory.len());
    }

    #[test]
    fn test_unsaved_player_reports_persistence_failures() {
        let catalog = StaticCatalog::new();
        let mut store = MemoryStore::new();
        let mut player = armed_hero();
        let mut s = session(1, 0, false);
        let mut rng = ChaCha8Rng::seed_from_u64(5);

        let outcome = s.take_turn(CombatAction::Attack, &mut player, &mut store, &catalog, &mut rng);

        assert_eq!(outcome, Some(CombatOutcome::Victory));
        assert!(s.log().iter().any(|e| matches!(
            e,
            CombatEvent::PersistenceFailed {
                action: "update gold",
                ..
            }
        )));
        assert_eq!(player.exp, 5);
    }

    #[test]
    fn test_finished_session_ignores_further_turns() {
        let catalog = StaticCatalog::new();
        let mut store = MemoryStore::new();
        let mut player = armed_hero();
        store.save_character(&player).unwrap();
        let mut s = session(1, 0, false);
        let mut rng = ChaCha8Rng::seed_from_u64(11);

        s.take_turn(CombatAction::Attack, &mut player, &mut store, &catalog, &mut rng);
        let log_len = s.log().len();
        let outcome = s.take_turn(CombatAction::Attack, &mut player, &mut store, &catalog, &mut rng);
        assert_eq!(outcome, Some(CombatOutcome::Victory));
        assert_eq!(s.log().len(), log_len);
    }

    #[test]
    fn test_round_returns_to_player_turn() {
        let catalog = StaticCatalog::new();
        let mut store = MemoryStore::new();
        let mut player = hero();
        player.hp = 1000;
        player.hp_max = 1000;
        store.save_character(&player).unwrap();
        let mut s = session(10_000, 30, false);
        let mut rng = ChaCha8Rng::seed_from_u64(2);

        assert_eq!(
            s.take_turn(CombatAction::Attack, &mut player, &mut store, &catalog, &mut rng),
            None
        );
        assert_eq!(s.phase(), CombatPhase::PlayerTurn);
        assert_eq!(s.round(), 1);
    }
}
