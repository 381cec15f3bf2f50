use super::config::GameConfig;
use crate::catalog::Catalog;
use crate::character::Character;
use crate::combat::DifficultyProfile;
use crate::error::GameError;
use crate::persistence::CharacterStore;
use rand::RngCore;

/// Everything a screen may touch: the active character, content, storage,
/// randomness and settings. Passed to every screen call.
pub struct GameContext {
    pub player: Option<Character>,
    pub catalog: Box<dyn Catalog>,
    pub store: Box<dyn CharacterStore>,
    pub rng: Box<dyn RngCore>,
    pub config: GameConfig,
    /// One-shot status line shown under the active screen.
    pub message: Option<String>,
    quit: bool,
}

impl GameContext {
    pub fn new(
        catalog: Box<dyn Catalog>,
        store: Box<dyn CharacterStore>,
        rng: Box<dyn RngCore>,
        config: GameConfig,
    ) -> Self {
        Self {
            player: None,
            catalog,
            store,
            rng,
            config,
            message: None,
            quit: false,
        }
    }

    pub fn player(&self) -> Result<&Character, GameError> {
        self.player.as_ref().ok_or(GameError::NoActiveCharacter)
    }

    pub fn player_mut(&mut self) -> Result<&mut Character, GameError> {
        self.player.as_mut().ok_or(GameError::NoActiveCharacter)
    }

    /// Profile of the active character, or the default profile.
    pub fn difficulty(&self) -> &'static DifficultyProfile {
        let id = self
            .player
            .as_ref()
            .map(|p| p.difficulty.as_str())
            .unwrap_or(self.config.default_difficulty.as_str());
        DifficultyProfile::by_id(id)
    }

    pub fn save_player(&mut self) -> Result<(), GameError> {
        let player = self.player.as_ref().ok_or(GameError::NoActiveCharacter)?;
        self.store.save_character(player)?;
        Ok(())
    }

    pub fn notify(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::context;
    use super::*;
    use crate::character::types::test_support::hero;

    #[test]
    fn test_player_required() {
        let mut ctx = context(1);
        assert!(matches!(ctx.player(), Err(GameError::NoActiveCharacter)));
        assert!(matches!(ctx.save_player(), Err(GameError::NoActiveCharacter)));
    }

    #[test]
    fn test_difficulty_follows_player() {
        let mut ctx = context(1);
        assert_eq!(ctx.difficulty().id, "fair_challenge");
        let mut player = hero();
        player.difficulty = "iron_curse".to_string();
        ctx.player = Some(player);
        assert_eq!(ctx.difficulty().id, "iron_curse");
    }

    #[test]
    fn test_save_player_writes_store() {
        let mut ctx = context(1);
        let player = hero();
        let id = player.id;
        ctx.player = Some(player);
        ctx.save_player().unwrap();
        assert!(ctx.store.load_character(id).is_ok());
    }

    #[test]
    fn test_quit_flag() {
        let mut ctx = context(1);
        assert!(!ctx.should_quit());
        ctx.request_quit();
        assert!(ctx.should_quit());
    }
}
