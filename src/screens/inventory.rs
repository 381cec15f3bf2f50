use super::{dim_line, invalid_choice, is_back, parse_choice, title_line, Screen, Transition};
use crate::core::GameContext;
use crate::dice;
use crate::error::GameError;
use crate::items::{
    display_name, enhanced_armor_bonus, enhanced_value, entry_resistances, weapon_damage,
    EquipError, InventoryEntry, ItemKind,
};
use ratatui::text::Line;
use uuid::Uuid;

/// Inventory listing. Commands take the 1-based entry number:
/// `e N` equip, `u N` unequip, `i N` details, `use N` consume.
#[derive(Debug, Default)]
pub struct InventoryScreen {
    details: Option<Uuid>,
}

fn detail_lines(entry: &InventoryEntry) -> Vec<String> {
    let item = &entry.item;
    let mut lines = vec![
        display_name(entry),
        item.description.clone(),
        format!(
            "{} | level {} | weight {:.1} | value {}",
            item.category().name(),
            item.level,
            item.weight,
            enhanced_value(item.value, entry.enhancement_level)
        ),
    ];
    match &item.kind {
        ItemKind::Weapon {
            main_attribute,
            two_handed,
            ..
        } => {
            if let Some((dice, damage_type)) = weapon_damage(entry) {
                lines.push(format!(
                    "Damage {} {} ({}){}",
                    dice,
                    damage_type.name(),
                    main_attribute.abbrev(),
                    if *two_handed { ", two-handed" } else { "" }
                ));
            }
        }
        ItemKind::Armor {
            dexterity_penalty,
            tier,
            strength_requirement,
            ..
        } => {
            let (physical, magical) = entry_resistances(entry);
            lines.push(format!(
                "{} armor | resist {} physical, {} magical | DEX -{} | STR {}",
                tier.name(),
                physical,
                magical,
                dexterity_penalty,
                strength_requirement
            ));
        }
        ItemKind::Shield {
            armor_bonus,
            strength_requirement,
            ..
        } => {
            let (physical, magical) = entry_resistances(entry);
            lines.push(format!(
                "AC +{} | resist {} physical, {} magical | STR {}",
                enhanced_armor_bonus(*armor_bonus, entry.enhancement_level),
                physical,
                magical,
                strength_requirement
            ));
        }
        ItemKind::Consumable {
            heal_dice,
            mana_dice,
        } => {
            if let Some(dice) = heal_dice {
                lines.push(format!("Restores {} HP", dice));
            }
            if let Some(dice) = mana_dice {
                lines.push(format!("Restores {} mana", dice));
            }
        }
        ItemKind::Ammo | ItemKind::Misc => {}
    }
    lines
}

impl InventoryScreen {
    pub fn new() -> Self {
        Self::default()
    }

    fn entry_id(ctx: &GameContext, arg: &str) -> Result<Option<Uuid>, GameError> {
        let player = ctx.player()?;
        Ok(parse_choice(arg, player.inventory.len()).map(|i| player.inventory[i].id))
    }

    fn equip(&mut self, id: Uuid, ctx: &mut GameContext) -> Result<(), GameError> {
        let player = ctx.player_mut()?;
        match player.equip(id) {
            Ok(slot) => {
                let name = player.entry(id).map(display_name).unwrap_or_default();
                ctx.save_player()?;
                ctx.notify(format!("Equipped {} ({}).", name, slot.name()));
            }
            Err(e) => ctx.notify(e.to_string()),
        }
        Ok(())
    }

    fn unequip(&mut self, id: Uuid, ctx: &mut GameContext) -> Result<(), GameError> {
        let player = ctx.player_mut()?;
        let Some(slot) = player.equipment.slot_of(id) else {
            ctx.notify("That item is not equipped.");
            return Ok(());
        };
        player.unequip(slot)?;
        ctx.save_player()?;
        ctx.notify(format!("Unequipped {}.", slot.name()));
        Ok(())
    }

    /// Rolls the consumable's dice, scaled by the healing multiplier, and
    /// removes one from the stack.
    fn consume(&mut self, id: Uuid, ctx: &mut GameContext) -> Result<(), GameError> {
        let healing = ctx.difficulty().healing_received;
        let entry = ctx
            .player()?
            .entry(id)
            .cloned()
            .ok_or(EquipError::UnknownEntry)?;
        let ItemKind::Consumable {
            heal_dice,
            mana_dice,
        } = &entry.item.kind
        else {
            ctx.notify(format!("{} cannot be used.", entry.item.name));
            return Ok(());
        };

        let heal_roll = heal_dice
            .as_deref()
            .map(|d| (dice::roll(d, &mut ctx.rng) as f64 * healing) as i32)
            .unwrap_or(0);
        let mana_roll = mana_dice
            .as_deref()
            .map(|d| dice::roll(d, &mut ctx.rng))
            .unwrap_or(0);

        let player = ctx.player_mut()?;
        let hp = player.heal(heal_roll);
        let mana = player.restore_mana(mana_roll);
        player.remove_quantity(id, 1);
        ctx.save_player()?;
        ctx.notify(format!(
            "You use {}: +{} HP, +{} mana.",
            entry.item.name, hp, mana
        ));
        Ok(())
    }
}

impl Screen for InventoryScreen {
    fn name(&self) -> &'static str {
        "Inventory"
    }

    fn render(&self, ctx: &GameContext) -> Vec<Line<'static>> {
        let Ok(player) = ctx.player() else {
            return vec![dim_line("No character loaded.")];
        };
        let mut lines = vec![
            title_line(format!("Inventory - {} gold", player.gold)),
            Line::from(""),
        ];
        if player.inventory.is_empty() {
            lines.push(dim_line("Your pack is empty."));
        }
        for (i, entry) in player.inventory.iter().enumerate() {
            let equipped = player
                .equipment
                .slot_of(entry.id)
                .map(|slot| format!(" [{}]", slot.name()))
                .unwrap_or_default();
            let quantity = if entry.quantity > 1 {
                format!(" x{}", entry.quantity)
            } else {
                String::new()
            };
            lines.push(Line::from(format!(
                "{:>2}. {}{}{}",
                i + 1,
                display_name(entry),
                quantity,
                equipped
            )));
        }

        if let Some(entry) = self.details.and_then(|id| player.entry(id)) {
            lines.push(Line::from(""));
            lines.extend(detail_lines(entry).into_iter().map(Line::from));
        }

        lines.push(Line::from(""));
        lines.push(dim_line("e N equip | u N unequip | i N details | use N | b back"));
        lines
    }

    fn handle_input(
        &mut self,
        input: &str,
        ctx: &mut GameContext,
    ) -> Result<Transition, GameError> {
        if is_back(input) {
            return Ok(Transition::Pop);
        }
        let mut parts = input.split_whitespace();
        let (Some(command), Some(arg), None) = (parts.next(), parts.next(), parts.next()) else {
            return invalid_choice(ctx);
        };
        let Some(id) = Self::entry_id(ctx, arg)? else {
            return invalid_choice(ctx);
        };

        match command.to_lowercase().as_str() {
            "e" | "equip" => self.equip(id, ctx)?,
            "u" | "unequip" => self.unequip(id, ctx)?,
            "i" | "info" => self.details = Some(id),
            "use" => self.consume(id, ctx)?,
            _ => return invalid_choice(ctx),
        }
        Ok(Transition::None)
    }
}
