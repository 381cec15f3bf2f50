use super::{
    dim_line, invalid_choice, is_back, normalize, option_line, parse_choice, title_line,
    GameplayScreen, Screen, Transition,
};
use crate::core::GameContext;
use crate::error::GameError;
use crate::persistence::{CharacterSummary, StoreError};
use chrono::{Local, TimeZone};
use ratatui::text::Line;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SaveMode {
    Browse,
    Selected(usize),
    Renaming(usize),
    ConfirmDelete(usize),
}

/// Lists saved characters and loads, renames or deletes them.
pub struct SaveManagerScreen {
    saves: Vec<CharacterSummary>,
    mode: SaveMode,
}

impl Default for SaveManagerScreen {
    fn default() -> Self {
        Self::new()
    }
}

fn format_timestamp(ts: i64) -> String {
    Local
        .timestamp_opt(ts, 0)
        .single()
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

impl SaveManagerScreen {
    pub fn new() -> Self {
        Self {
            saves: Vec::new(),
            mode: SaveMode::Browse,
        }
    }

    pub fn saves(&self) -> &[CharacterSummary] {
        &self.saves
    }

    fn refresh(&mut self, ctx: &GameContext) -> Result<(), GameError> {
        self.saves = ctx.store.list_characters()?;
        self.mode = SaveMode::Browse;
        Ok(())
    }

    fn selected_id(&self, index: usize) -> Option<Uuid> {
        self.saves.get(index).and_then(|s| s.id)
    }

    fn load(&mut self, index: usize, ctx: &mut GameContext) -> Result<Transition, GameError> {
        let Some(id) = self.selected_id(index) else {
            ctx.notify("That save file is corrupted.");
            return Ok(Transition::None);
        };
        let character = ctx.store.load_character(id)?;
        tracing::info!(character = %character.name, "loaded");
        ctx.player = Some(character);
        Ok(Transition::ReplaceAll(Box::new(GameplayScreen::new())))
    }

    fn rename(&mut self, index: usize, input: &str, ctx: &mut GameContext) -> Result<(), GameError> {
        let Some(id) = self.selected_id(index) else {
            return self.refresh(ctx);
        };
        match ctx.store.rename_character(id, input) {
            Ok(()) => {
                let name = input.trim().to_string();
                if let Some(player) = ctx.player.as_mut().filter(|p| p.id == id) {
                    player.name = name.clone();
                }
                ctx.notify(format!("Renamed to {}.", name));
                self.refresh(ctx)
            }
            Err(StoreError::InvalidName(msg)) => {
                ctx.notify(msg);
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn delete(&mut self, index: usize, ctx: &mut GameContext) -> Result<(), GameError> {
        if let Some(id) = self.selected_id(index) {
            ctx.store.delete_character(id)?;
            if ctx.player.as_ref().is_some_and(|p| p.id == id) {
                ctx.player = None;
            }
            ctx.notify("Character deleted.");
        }
        self.refresh(ctx)
    }
}

impl Screen for SaveManagerScreen {
    fn name(&self) -> &'static str {
        "Saved Characters"
    }

    fn enter(&mut self, ctx: &mut GameContext) -> Result<(), GameError> {
        self.refresh(ctx)
    }

    fn render(&self, _ctx: &GameContext) -> Vec<Line<'static>> {
        let mut lines = vec![title_line("Saved Characters"), Line::from("")];
        if self.saves.is_empty() {
            lines.push(dim_line("No saved characters."));
        }
        for (i, save) in self.saves.iter().enumerate() {
            let text = if save.is_corrupted {
                save.name.clone()
            } else {
                format!(
                    "{} - level {} {} {} | {}{} | {}",
                    save.name,
                    save.level,
                    save.race,
                    save.class,
                    save.difficulty,
                    if save.permadeath { ", permadeath" } else { "" },
                    format_timestamp(save.last_saved)
                )
            };
            lines.push(option_line(&(i + 1).to_string(), text));
        }
        lines.push(Line::from(""));

        match self.mode {
            SaveMode::Browse => lines.push(dim_line("Choose a number, or [b] back.")),
            SaveMode::Selected(i) => {
                let name = self.saves.get(i).map(|s| s.name.clone()).unwrap_or_default();
                lines.push(Line::from(format!("{}:", name)));
                lines.push(option_line("l", "Load"));
                lines.push(option_line("r", "Rename"));
                lines.push(option_line("d", "Delete"));
                lines.push(option_line("b", "Back"));
            }
            SaveMode::Renaming(_) => lines.push(Line::from("Type the new name:")),
            SaveMode::ConfirmDelete(i) => {
                let name = self.saves.get(i).map(|s| s.name.clone()).unwrap_or_default();
                lines.push(Line::from(format!("Delete {}? (y/n)", name)));
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
            SaveMode::Browse => {
                if is_back(&choice) {
                    return Ok(Transition::Pop);
                }
                match parse_choice(&choice, self.saves.len()) {
                    Some(i) => self.mode = SaveMode::Selected(i),
                    None => return invalid_choice(ctx),
                }
            }
            SaveMode::Selected(i) => match choice.as_str() {
                "l" | "load" => return self.load(i, ctx),
                "r" | "rename" => self.mode = SaveMode::Renaming(i),
                "d" | "delete" => self.mode = SaveMode::ConfirmDelete(i),
                _ if is_back(&choice) => self.mode = SaveMode::Browse,
                _ => return invalid_choice(ctx),
            },
            SaveMode::Renaming(i) => {
                if is_back(&choice) {
                    self.mode = SaveMode::Selected(i);
                } else {
                    self.rename(i, input, ctx)?;
                }
            }
            SaveMode::ConfirmDelete(i) => match choice.as_str() {
                "y" | "yes" => self.delete(i, ctx)?,
                _ => self.mode = SaveMode::Selected(i),
            },
        }
        Ok(Transition::None)
    }
}
