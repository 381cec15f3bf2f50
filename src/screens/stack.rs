use super::{Screen, Transition};
use crate::core::GameContext;
use crate::error::GameError;

/// A stack of screens. Only the top one is active.
#[derive(Default)]
pub struct ScreenStack {
    screens: Vec<Box<dyn Screen>>,
}

impl ScreenStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.screens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }

    pub fn active(&self) -> Option<&dyn Screen> {
        self.screens.last().map(|s| s.as_ref())
    }

    pub fn active_mut(&mut self) -> Option<&mut Box<dyn Screen>> {
        self.screens.last_mut()
    }

    /// Screen names from bottom to top.
    pub fn names(&self) -> Vec<&'static str> {
        self.screens.iter().map(|s| s.name()).collect()
    }

    /// Enters `screen` above the current top. The screen below stays on the
    /// stack and is not exited.
    pub fn push(
        &mut self,
        mut screen: Box<dyn Screen>,
        ctx: &mut GameContext,
    ) -> Result<(), GameError> {
        tracing::debug!(screen = screen.name(), "push");
        screen.enter(ctx)?;
        self.screens.push(screen);
        Ok(())
    }

    /// Exits and removes the top screen, then resumes the new top.
    pub fn pop(&mut self, ctx: &mut GameContext) -> Result<(), GameError> {
        let Some(mut top) = self.screens.pop() else {
            return Ok(());
        };
        tracing::debug!(screen = top.name(), "pop");
        top.exit(ctx)?;
        if let Some(next) = self.screens.last_mut() {
            next.resume(ctx)?;
        }
        Ok(())
    }

    /// Exits every screen from top to bottom, then pushes `screen` as the
    /// only entry. Every screen is exited even if one of them fails.
    pub fn replace_all(
        &mut self,
        screen: Box<dyn Screen>,
        ctx: &mut GameContext,
    ) -> Result<(), GameError> {
        tracing::debug!(screen = screen.name(), "replace all");
        while let Some(mut top) = self.screens.pop() {
            if let Err(e) = top.exit(ctx) {
                tracing::warn!(screen = top.name(), error = %e, "exit failed");
            }
        }
        self.push(screen, ctx)
    }

    pub fn apply(&mut self, transition: Transition, ctx: &mut GameContext) -> Result<(), GameError> {
        match transition {
            Transition::None => Ok(()),
            Transition::Push(screen) => self.push(screen, ctx),
            Transition::Pop => self.pop(ctx),
            Transition::ReplaceAll(screen) => self.replace_all(screen, ctx),
            Transition::Quit => {
                ctx.request_quit();
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::context::test_support::context;
    use ratatui::text::Line;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Journal = Rc<RefCell<Vec<String>>>;

    struct Recorder {
        name: &'static str,
        journal: Journal,
    }

    impl Recorder {
        fn boxed(name: &'static str, journal: &Journal) -> Box<dyn Screen> {
            Box::new(Self {
                name,
                journal: Rc::clone(journal),
            })
        }

        fn record(&self, call: &str) {
            self.journal.borrow_mut().push(format!("{}:{}", self.name, call));
        }
    }

    impl Screen for Recorder {
        fn name(&self) -> &'static str {
            self.name
        }

        fn enter(&mut self, _ctx: &mut GameContext) -> Result<(), GameError> {
            self.record("enter");
            Ok(())
        }

        fn resume(&mut self, _ctx: &mut GameContext) -> Result<(), GameError> {
            self.record("resume");
            Ok(())
        }

        fn render(&self, _ctx: &GameContext) -> Vec<Line<'static>> {
            Vec::new()
        }

        fn handle_input(
            &mut self,
            _input: &str,
            _ctx: &mut GameContext,
        ) -> Result<Transition, GameError> {
            Ok(Transition::None)
        }

        fn exit(&mut self, _ctx: &mut GameContext) -> Result<(), GameError> {
            self.record("exit");
            Ok(())
        }
    }

    #[test]
    fn test_push_keeps_previous_screen_entered() {
        let journal = Journal::default();
        let mut ctx = context(1);
        let mut stack = ScreenStack::new();
        stack.push(Recorder::boxed("a", &journal), &mut ctx).unwrap();
        stack.push(Recorder::boxed("b", &journal), &mut ctx).unwrap();

        assert_eq!(*journal.borrow(), vec!["a:enter", "b:enter"]);
        assert_eq!(stack.names(), vec!["a", "b"]);
        assert_eq!(stack.active().map(|s| s.name()), Some("b"));
    }

    #[test]
    fn test_pop_exits_top_then_resumes_next() {
        let journal = Journal::default();
        let mut ctx = context(1);
        let mut stack = ScreenStack::new();
        stack.push(Recorder::boxed("a", &journal), &mut ctx).unwrap();
        stack.push(Recorder::boxed("b", &journal), &mut ctx).unwrap();
        stack.pop(&mut ctx).unwrap();

        assert_eq!(
            *journal.borrow(),
            vec!["a:enter", "b:enter", "b:exit", "a:resume"]
        );
        assert_eq!(stack.active().map(|s| s.name()), Some("a"));
    }

    #[test]
    fn test_replace_all_exits_top_down() {
        let journal = Journal::default();
        let mut ctx = context(1);
        let mut stack = ScreenStack::new();
        for name in ["a", "b", "c"] {
            stack.push(Recorder::boxed(name, &journal), &mut ctx).unwrap();
        }
        journal.borrow_mut().clear();

        stack.replace_all(Recorder::boxed("d", &journal), &mut ctx).unwrap();

        assert_eq!(
            *journal.borrow(),
            vec!["c:exit", "b:exit", "a:exit", "d:enter"]
        );
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn test_pop_on_empty_stack_is_noop() {
        let mut ctx = context(1);
        let mut stack = ScreenStack::new();
        stack.pop(&mut ctx).unwrap();
        assert!(stack.is_empty());
    }

    #[test]
    fn test_quit_transition_sets_flag() {
        let mut ctx = context(1);
        let mut stack = ScreenStack::new();
        stack.apply(Transition::Quit, &mut ctx).unwrap();
        assert!(ctx.should_quit());
    }
}
