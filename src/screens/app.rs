use super::{MainMenuScreen, Screen, ScreenStack};
use crate::core::GameContext;
use crate::error::GameError;
use ratatui::text::Line;

/// Drives the screen stack: render the active screen, feed it one line of
/// input, apply the transition it returns.
pub struct App {
    stack: ScreenStack,
    ctx: GameContext,
}

impl App {
    /// Creates the app with the main menu as the only screen.
    pub fn new(ctx: GameContext) -> Result<Self, GameError> {
        let mut app = Self {
            stack: ScreenStack::new(),
            ctx,
        };
        app.stack
            .push(Box::new(MainMenuScreen::new()), &mut app.ctx)?;
        Ok(app)
    }

    pub fn context(&self) -> &GameContext {
        &self.ctx
    }

    pub fn context_mut(&mut self) -> &mut GameContext {
        &mut self.ctx
    }

    pub fn stack(&self) -> &ScreenStack {
        &self.stack
    }

    pub fn is_running(&self) -> bool {
        !self.ctx.should_quit() && !self.stack.is_empty()
    }

    pub fn title(&self) -> &'static str {
        self.stack.active().map(|s| s.name()).unwrap_or("")
    }

    pub fn render(&self) -> Vec<Line<'static>> {
        self.stack
            .active()
            .map(|s| s.render(&self.ctx))
            .unwrap_or_default()
    }

    /// Handles one line of input. Errors are logged and send the player
    /// back to the main menu.
    pub fn handle_input(&mut self, input: &str) {
        self.ctx.message = None;
        let Some(screen) = self.stack.active_mut() else {
            return;
        };
        let result = match screen.handle_input(input, &mut self.ctx) {
            Ok(transition) => self.stack.apply(transition, &mut self.ctx),
            Err(e) => Err(e),
        };

        if let Err(e) = result {
            tracing::error!(error = %e, screen = self.title(), "screen failed, returning to main menu");
            self.recover(e);
        }
    }

    fn recover(&mut self, error: GameError) {
        let menu: Box<dyn Screen> = Box::new(MainMenuScreen::new());
        match self.stack.replace_all(menu, &mut self.ctx) {
            Ok(()) => self.ctx.notify(format!("Error: {}", error)),
            Err(e) => {
                tracing::error!(error = %e, "main menu failed to open, quitting");
                self.ctx.request_quit();
            }
        }
    }
}
