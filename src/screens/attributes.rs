use super::{dim_line, invalid_choice, is_back, normalize, title_line, Screen, Transition};
use crate::character::{AttributeType, Character, DerivedStats};
use crate::core::GameContext;
use crate::error::GameError;
use crate::items::{display_name, EquipSlot};
use ratatui::text::Line;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AttributesTab {
    #[default]
    Summary,
    Attributes,
    Equipment,
}

/// Read-only character sheet with three tabs.
#[derive(Debug, Default)]
pub struct AttributesScreen {
    tab: AttributesTab,
}

impl AttributesScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tab(&self) -> AttributesTab {
        self.tab
    }

    fn summary(player: &Character, stats: &DerivedStats, lines: &mut Vec<Line<'static>>) {
        lines.push(Line::from(format!(
            "{}, level {} {} {}",
            player.name, player.level, player.race.name, player.class.name
        )));
        if let Some(background) = &player.background {
            lines.push(Line::from(format!(
                "Background: {} ({})",
                background.name,
                background.skills.join(", ")
            )));
        }
        lines.push(Line::from(format!(
            "HP {}/{}   Mana {}/{}   EXP {}/{}",
            player.hp, player.hp_max, player.mana, player.mana_max, player.exp, player.exp_max
        )));
        lines.push(Line::from(format!(
            "AC {}   Attack {:+}   Resist {} physical / {} magical",
            stats.armor_class, stats.attack_bonus, stats.physical_resistance, stats.magical_resistance
        )));
        lines.push(Line::from(format!(
            "Weapon: {} ({} {})",
            stats.weapon.name,
            stats.weapon.damage_dice,
            stats.weapon.damage_type.name()
        )));
        lines.push(Line::from(format!("Gold {}", player.gold)));
    }

    fn attributes(player: &Character, stats: &DerivedStats, lines: &mut Vec<Line<'static>>) {
        lines.push(dim_line("Attribute      Base  Race  Eff  Mod"));
        for attr in AttributeType::all() {
            let effective = stats.attributes.get(attr);
            lines.push(Line::from(format!(
                "{:<13} {:>5} {:>+5} {:>4} {:>+4}",
                attr.name(),
                player.base_attributes.get(attr),
                player.race.bonuses.get(attr),
                effective,
                stats.attributes.modifier(attr)
            )));
        }
        if stats.dexterity_penalty > 0 {
            lines.push(dim_line(format!(
                "Armor reduces dexterity by {}.",
                stats.dexterity_penalty
            )));
        }
    }

    fn equipment(player: &Character, lines: &mut Vec<Line<'static>>) {
        for slot in EquipSlot::all() {
            let item = player
                .equipped(slot)
                .map(display_name)
                .unwrap_or_else(|| "-".to_string());
            lines.push(Line::from(format!("{:<10} {}", slot.name(), item)));
        }
    }
}

impl Screen for AttributesScreen {
    fn name(&self) -> &'static str {
        "Character Sheet"
    }

    fn render(&self, ctx: &GameContext) -> Vec<Line<'static>> {
        let Ok(player) = ctx.player() else {
            return vec![dim_line("No character loaded.")];
        };
        let stats = DerivedStats::calculate(player);
        let title = match self.tab {
            AttributesTab::Summary => "Summary",
            AttributesTab::Attributes => "Attributes",
            AttributesTab::Equipment => "Equipment",
        };
        let mut lines = vec![title_line(title), Line::from("")];
        match self.tab {
            AttributesTab::Summary => Self::summary(player, &stats, &mut lines),
            AttributesTab::Attributes => Self::attributes(player, &stats, &mut lines),
            AttributesTab::Equipment => Self::equipment(player, &mut lines),
        }
        lines.push(Line::from(""));
        lines.push(dim_line("[1] summary  [2] attributes  [3] equipment  [b] back"));
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
        self.tab = match normalize(input).as_str() {
            "1" => AttributesTab::Summary,
            "2" => AttributesTab::Attributes,
            "3" => AttributesTab::Equipment,
            _ => return invalid_choice(ctx),
        };
        Ok(Transition::None)
    }
}
