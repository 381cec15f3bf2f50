//! The screen state machine.
//!
//! Screens live on a `ScreenStack`. The active screen is always the top
//! one; `App` alternates `render` and `handle_input` on it until the
//! context's quit flag is set.

pub mod app;
pub mod attributes;
pub mod character_creation;
pub mod combat;
pub mod gameplay;
pub mod inventory;
pub mod main_menu;
pub mod save_manager;
pub mod settings;
pub mod stack;

pub use app::App;
pub use attributes::AttributesScreen;
pub use character_creation::CharacterCreationScreen;
pub use combat::CombatScreen;
pub use gameplay::GameplayScreen;
pub use inventory::InventoryScreen;
pub use main_menu::MainMenuScreen;
pub use save_manager::SaveManagerScreen;
pub use settings::SettingsScreen;
pub use stack::ScreenStack;

use crate::core::GameContext;
use crate::error::GameError;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// What the stack should do after a screen handled input.
pub enum Transition {
    None,
    Push(Box<dyn Screen>),
    Pop,
    ReplaceAll(Box<dyn Screen>),
    Quit,
}

impl std::fmt::Debug for Transition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Transition::None => write!(f, "None"),
            Transition::Push(s) => write!(f, "Push({})", s.name()),
            Transition::Pop => write!(f, "Pop"),
            Transition::ReplaceAll(s) => write!(f, "ReplaceAll({})", s.name()),
            Transition::Quit => write!(f, "Quit"),
        }
    }
}

/// The contract every screen implements.
pub trait Screen {
    fn name(&self) -> &'static str;

    /// Called once when the screen is pushed.
    fn enter(&mut self, _ctx: &mut GameContext) -> Result<(), GameError> {
        Ok(())
    }

    /// Called when the screen above this one is popped.
    fn resume(&mut self, ctx: &mut GameContext) -> Result<(), GameError> {
        self.enter(ctx)
    }

    /// Produces the screen body. Must not change any state.
    fn render(&self, ctx: &GameContext) -> Vec<Line<'static>>;

    /// Consumes one line of user input.
    fn handle_input(&mut self, input: &str, ctx: &mut GameContext)
        -> Result<Transition, GameError>;

    /// Called when the screen is removed from the stack.
    fn exit(&mut self, _ctx: &mut GameContext) -> Result<(), GameError> {
        Ok(())
    }
}

pub(crate) fn title_line(text: impl Into<String>) -> Line<'static> {
    Line::from(Span::styled(
        text.into(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))
}

pub(crate) fn option_line(key: &str, label: impl Into<String>) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("[{}] ", key), Style::default().fg(Color::Yellow)),
        Span::raw(label.into()),
    ])
}

pub(crate) fn dim_line(text: impl Into<String>) -> Line<'static> {
    Line::from(Span::styled(text.into(), Style::default().fg(Color::Gray)))
}

/// Input normalized for menu matching.
pub(crate) fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Parses a 1-based menu choice into an index below `len`.
pub(crate) fn parse_choice(input: &str, len: usize) -> Option<usize> {
    input
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|n| (1..=len).contains(n))
        .map(|n| n - 1)
}

pub(crate) fn is_back(input: &str) -> bool {
    matches!(normalize(input).as_str(), "b" | "back" | "esc")
}

pub(crate) fn invalid_choice(ctx: &mut GameContext) -> Result<Transition, GameError> {
    ctx.notify("Invalid choice.");
    Ok(Transition::None)
}
