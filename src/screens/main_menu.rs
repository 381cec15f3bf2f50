use super::{
    dim_line, invalid_choice, normalize, option_line, title_line, CharacterCreationScreen,
    GameplayScreen, SaveManagerScreen, Screen, Transition,
};
use crate::core::GameContext;
use crate::error::GameError;
use ratatui::text::Line;

#[derive(Debug, Default)]
pub struct MainMenuScreen;

impl MainMenuScreen {
    pub fn new() -> Self {
        Self
    }

    /// Resumes the loaded character, or loads the most recently saved one.
    fn continue_game(&self, ctx: &mut GameContext) -> Result<Transition, GameError> {
        if ctx.player.is_none() {
            let latest = ctx
                .store
                .list_characters()?
                .into_iter()
                .find_map(|summary| summary.id);
            let Some(id) = latest else {
                ctx.notify("No saved characters. Start a new game first.");
                return Ok(Transition::None);
            };
            let character = ctx.store.load_character(id)?;
            tracing::info!(character = %character.name, "continuing");
            ctx.player = Some(character);
        }
        Ok(Transition::ReplaceAll(Box::new(GameplayScreen::new())))
    }
}

impl Screen for MainMenuScreen {
    fn name(&self) -> &'static str {
        "Main Menu"
    }

    fn render(&self, ctx: &GameContext) -> Vec<Line<'static>> {
        let mut lines = vec![title_line("RUST & DICE"), Line::from("")];
        lines.push(option_line("1", "Continue"));
        lines.push(option_line("2", "New Game"));
        lines.push(option_line("3", "Load / Manage Saves"));
        lines.push(option_line("4", "Quit"));
        if let Some(player) = &ctx.player {
            lines.push(Line::from(""));
            lines.push(dim_line(format!(
                "Loaded: {} (level {} {})",
                player.name, player.level, player.class.name
            )));
        }
        lines
    }

    fn handle_input(
        &mut self,
        input: &str,
        ctx: &mut GameContext,
    ) -> Result<Transition, GameError> {
        match normalize(input).as_str() {
            "1" | "c" | "continue" => self.continue_game(ctx),
            "2" | "n" | "new" => Ok(Transition::Push(Box::new(CharacterCreationScreen::new()))),
            "3" | "l" | "load" => Ok(Transition::Push(Box::new(SaveManagerScreen::new()))),
            "4" | "q" | "quit" => Ok(Transition::Quit),
            _ => invalid_choice(ctx),
        }
    }
}
