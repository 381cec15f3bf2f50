use super::{
    dim_line, invalid_choice, normalize, option_line, title_line, AttributesScreen, CombatScreen,
    InventoryScreen, MainMenuScreen, Screen, SettingsScreen, Transition,
};
use crate::core::GameContext;
use crate::error::GameError;
use ratatui::text::Line;

/// The hub between encounters.
#[derive(Debug, Default)]
pub struct GameplayScreen;

impl GameplayScreen {
    pub fn new() -> Self {
        Self
    }

    fn rest(&self, ctx: &mut GameContext) -> Result<Transition, GameError> {
        let healing = ctx.difficulty().healing_received;
        let player = ctx.player_mut()?;
        let (hp, mana) = player.rest(healing);
        tracing::info!(character = %player.name, hp, mana, "rested");
        ctx.save_player()?;
        ctx.notify(format!("You rest and recover {} HP and {} mana.", hp, mana));
        Ok(Transition::None)
    }
}

impl Screen for GameplayScreen {
    fn name(&self) -> &'static str {
        "Adventure"
    }

    fn enter(&mut self, ctx: &mut GameContext) -> Result<(), GameError> {
        ctx.player()?;
        Ok(())
    }

    fn render(&self, ctx: &GameContext) -> Vec<Line<'static>> {
        let Ok(player) = ctx.player() else {
            return vec![dim_line("No character loaded.")];
        };
        let mut lines = vec![
            title_line(format!(
                "{} - level {} {} {}",
                player.name, player.level, player.race.name, player.class.name
            )),
            Line::from(format!(
                "HP {}/{}   Mana {}/{}   EXP {}/{}   Gold {}",
                player.hp,
                player.hp_max,
                player.mana,
                player.mana_max,
                player.exp,
                player.exp_max,
                player.gold
            )),
            dim_line(format!(
                "Difficulty: {}{}",
                ctx.difficulty().name,
                if player.permadeath { " (permadeath)" } else { "" }
            )),
            Line::from(""),
        ];
        lines.push(option_line("1", "Explore"));
        lines.push(option_line("2", "Rest"));
        lines.push(option_line("3", "Attributes"));
        lines.push(option_line("4", "Inventory"));
        lines.push(option_line("5", "Settings"));
        lines.push(option_line("6", "Save"));
        lines.push(option_line("7", "Main Menu"));
        lines
    }

    fn handle_input(
        &mut self,
        input: &str,
        ctx: &mut GameContext,
    ) -> Result<Transition, GameError> {
        match normalize(input).as_str() {
            "1" | "e" | "explore" => Ok(Transition::Push(Box::new(CombatScreen::new()))),
            "2" | "r" | "rest" => self.rest(ctx),
            "3" | "a" => Ok(Transition::Push(Box::new(AttributesScreen::new()))),
            "4" | "i" => Ok(Transition::Push(Box::new(InventoryScreen::new()))),
            "5" | "s" => Ok(Transition::Push(Box::new(SettingsScreen::new()))),
            "6" => {
                ctx.save_player()?;
                ctx.notify("Game saved.");
                Ok(Transition::None)
            }
            "7" | "m" | "menu" => {
                ctx.save_player()?;
                Ok(Transition::ReplaceAll(Box::new(MainMenuScreen::new())))
            }
            _ => invalid_choice(ctx),
        }
    }
}
