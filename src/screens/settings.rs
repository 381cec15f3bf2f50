use super::{
    dim_line, invalid_choice, is_back, normalize, option_line, parse_choice, title_line,
    MainMenuScreen, Screen, Transition,
};
use crate::combat::DifficultyProfile;
use crate::core::GameContext;
use crate::error::GameError;
use ratatui::text::Line;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum SettingsMode {
    #[default]
    Menu,
    ChooseDifficulty,
    ConfirmDelete,
}

#[derive(Debug, Default)]
pub struct SettingsScreen {
    mode: SettingsMode,
}

impl SettingsScreen {
    pub fn new() -> Self {
        Self::default()
    }

    fn delete_character(&mut self, ctx: &mut GameContext) -> Result<Transition, GameError> {
        let player = ctx.player.take().ok_or(GameError::NoActiveCharacter)?;
        let removed = ctx.store.delete_character(player.id)?;
        tracing::info!(character = %player.name, removed, "character deleted from settings");
        ctx.notify(format!("{} has been deleted.", player.name));
        Ok(Transition::ReplaceAll(Box::new(MainMenuScreen::new())))
    }
}

impl Screen for SettingsScreen {
    fn name(&self) -> &'static str {
        "Settings"
    }

    fn render(&self, ctx: &GameContext) -> Vec<Line<'static>> {
        let mut lines = vec![title_line("Settings"), Line::from("")];
        match self.mode {
            SettingsMode::Menu => {
                lines.push(option_line(
                    "1",
                    format!("Difficulty: {}", ctx.difficulty().name),
                ));
                lines.push(option_line("2", "Save game"));
                lines.push(option_line("3", "Delete character"));
                lines.push(option_line("b", "Back"));
            }
            SettingsMode::ChooseDifficulty => {
                for (i, p) in DifficultyProfile::all().iter().enumerate() {
                    lines.push(option_line(
                        &(i + 1).to_string(),
                        format!("{} - {}", p.name, p.description),
                    ));
                }
                lines.push(dim_line("[b] cancel"));
            }
            SettingsMode::ConfirmDelete => {
                let name = ctx.player().map(|p| p.name.clone()).unwrap_or_default();
                lines.push(Line::from(format!(
                    "Delete {} permanently? This cannot be undone. (y/n)",
                    name
                )));
            }
        }
        lines
    }

    fn handle_input(
        &mut self,
        input: &str,
        ctx: &mut GameContext,
    ) -> Result<Transition, GameError> {
        let choice = normalize(input);
        match self.mode {
            SettingsMode::Menu => match choice.as_str() {
                "1" => self.mode = SettingsMode::ChooseDifficulty,
                "2" => {
                    ctx.save_player()?;
                    ctx.notify("Game saved.");
                }
                "3" => self.mode = SettingsMode::ConfirmDelete,
                _ if is_back(&choice) => return Ok(Transition::Pop),
                _ => return invalid_choice(ctx),
            },
            SettingsMode::ChooseDifficulty => {
                if is_back(&choice) {
                    self.mode = SettingsMode::Menu;
                    return Ok(Transition::None);
                }
                let profiles = DifficultyProfile::all();
                let Some(i) = parse_choice(&choice, profiles.len()) else {
                    return invalid_choice(ctx);
                };
                let player = ctx.player_mut()?;
                player.difficulty = profiles[i].id.to_string();
                tracing::info!(character = %player.name, difficulty = profiles[i].id, "difficulty changed");
                ctx.save_player()?;
                ctx.notify(format!("Difficulty set to {}.", profiles[i].name));
                self.mode = SettingsMode::Menu;
            }
            SettingsMode::ConfirmDelete => match choice.as_str() {
                "y" | "yes" => return self.delete_character(ctx),
                _ => self.mode = SettingsMode::Menu,
            },
        }
        Ok(Transition::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::types::test_support::hero;
    use crate::core::context::test_support::context;

    #[test]
    fn test_change_difficulty() {
        let mut ctx = context(1);
        ctx.player = Some(hero());
        let mut screen = SettingsScreen::new();
        screen.handle_input("1", &mut ctx).unwrap();
        screen.handle_input("6", &mut ctx).unwrap();
        assert_eq!(ctx.player().unwrap().difficulty, "living_hell");
        assert_eq!(ctx.difficulty().id, "living_hell");
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let mut ctx = context(1);
        let player = hero();
        let id = player.id;
        ctx.store.save_character(&player).unwrap();
        ctx.player = Some(player);
        let mut screen = SettingsScreen::new();

        screen.handle_input("3", &mut ctx).unwrap();
        screen.handle_input("n", &mut ctx).unwrap();
        assert!(ctx.player.is_some());

        screen.handle_input("3", &mut ctx).unwrap();
        let t = screen.handle_input("y", &mut ctx).unwrap();
        assert!(matches!(t, Transition::ReplaceAll(_)));
        assert!(ctx.player.is_none());
        assert!(ctx.store.load_character(id).is_err());
    }
}
