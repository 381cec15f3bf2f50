use super::{
    dim_line, invalid_choice, normalize, option_line, title_line, MainMenuScreen, Screen,
    Transition,
};
use crate::combat::{CombatAction, CombatEvent, CombatOutcome, CombatSession, HitReport};
use crate::core::GameContext;
use crate::error::GameError;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

const LOG_LINES: usize = 12;

/// One encounter. The session is opened on enter and runs until it reaches
/// an outcome; there is no way back before that.
#[derive(Default)]
pub struct CombatScreen {
    session: Option<CombatSession>,
}

fn describe_hit(attacker: &str, verb: &str, hit: &HitReport) -> String {
    let mut text = format!(
        "{} {} {} {} damage",
        attacker,
        verb,
        hit.dealt,
        hit.damage_type.name()
    );
    if hit.resisted() > 0 {
        text.push_str(&format!(" ({} resisted)", hit.resisted()));
    }
    text.push('.');
    text
}

fn describe_attack(head: String, critical: bool, hit: Option<String>) -> String {
    match hit {
        Some(hit) if critical => format!("{}: CRITICAL! {}", head, hit),
        Some(hit) => format!("{}: hit. {}", head, hit),
        None => format!("{}: miss.", head),
    }
}

/// Text for one combat event.
pub fn describe_event(event: &CombatEvent, monster: &str) -> String {
    match event {
        CombatEvent::Encounter { name, level, hp } => {
            format!("A level {} {} appears! ({} HP)", level, name, hp)
        }
        CombatEvent::PlayerAttack { roll, hit } => {
            let head = format!(
                "You roll {} + {} = {} vs AC {}",
                roll.die, roll.bonus, roll.total, roll.target
            );
            describe_attack(
                head,
                roll.critical,
                hit.as_ref().map(|h| describe_hit("You", "deal", h)),
            )
        }
        CombatEvent::MonsterAttack { roll, hit } => {
            let head = format!(
                "{} rolls {} + {} = {} vs AC {}",
                monster, roll.die, roll.bonus, roll.total, roll.target
            );
            describe_attack(
                head,
                roll.critical,
                hit.as_ref().map(|h| describe_hit(monster, "deals", h)),
            )
        }
        CombatEvent::FleeAttempt {
            player_roll,
            monster_roll,
            success,
        } => {
            if *success {
                format!("You flee ({} vs {}).", player_roll, monster_roll)
            } else {
                format!("You fail to flee ({} vs {}).", player_roll, monster_roll)
            }
        }
        CombatEvent::MonsterDefeated { name } => format!("{} is defeated!", name),
        CombatEvent::ExpGained { amount } => format!("You gain {} experience.", amount),
        CombatEvent::LeveledUp(level_up) => format!(
            "Level up! You are now level {} (+{} HP, +{} mana).",
            level_up.new_level, level_up.hp_gained, level_up.mana_gained
        ),
        CombatEvent::GoldGained { amount } => format!("You find {} gold.", amount),
        CombatEvent::ItemFound { name } => format!("You find: {}", name),
        CombatEvent::PlayerDefeated => "You have been defeated...".to_string(),
        CombatEvent::ItemLost { name } => format!("You lost: {}", name),
        CombatEvent::GoldLost { amount } => format!("You lost {} gold.", amount),
        CombatEvent::Revived { hp } => format!("You wake up with {} HP.", hp),
        CombatEvent::CharacterDeleted { name, removed } => {
            if *removed {
                format!("{} has fallen forever. The save has been erased.", name)
            } else {
                format!("{} has fallen forever.", name)
            }
        }
        CombatEvent::PersistenceFailed { action, error } => {
            format!("Could not {}: {}", action, error)
        }
    }
}

impl CombatScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> Option<&CombatSession> {
        self.session.as_ref()
    }

    fn after_outcome(outcome: CombatOutcome, ctx: &mut GameContext) -> Transition {
        match outcome {
            CombatOutcome::Permadeath => {
                ctx.player = None;
                Transition::ReplaceAll(Box::new(MainMenuScreen::new()))
            }
            _ => Transition::Pop,
        }
    }
}

impl Screen for CombatScreen {
    fn name(&self) -> &'static str {
        "Combat"
    }

    fn enter(&mut self, ctx: &mut GameContext) -> Result<(), GameError> {
        let player = ctx.player.as_ref().ok_or(GameError::NoActiveCharacter)?;
        self.session = Some(CombatSession::start(player, ctx.catalog.as_ref(), &mut ctx.rng));
        Ok(())
    }

    fn render(&self, ctx: &GameContext) -> Vec<Line<'static>> {
        let (Some(session), Ok(player)) = (&self.session, ctx.player()) else {
            return vec![dim_line("No encounter.")];
        };
        let monster = session.monster();
        let mut lines = vec![
            title_line(format!("Round {}", session.round())),
            Line::from(vec![
                Span::styled(
                    format!("{} ", monster.name()),
                    Style::default().fg(Color::Red),
                ),
                Span::raw(format!(
                    "HP {}/{}  AC {}",
                    monster.hp.max(0),
                    monster.hp_max,
                    monster.armor_class()
                )),
            ]),
            Line::from(vec![
                Span::styled(format!("{} ", player.name), Style::default().fg(Color::Green)),
                Span::raw(format!(
                    "HP {}/{}  AC {}",
                    player.hp,
                    player.hp_max,
                    player.armor_class()
                )),
            ]),
            Line::from(""),
        ];

        let log = session.log();
        let start = log.len().saturating_sub(LOG_LINES);
        for event in &log[start..] {
            lines.push(Line::from(describe_event(event, monster.name())));
        }
        lines.push(Line::from(""));

        if session.is_finished() {
            lines.push(dim_line("Press Enter to continue."));
        } else {
            lines.push(option_line("1", "Attack"));
            lines.push(option_line("2", "Flee"));
        }
        lines
    }

    fn handle_input(
        &mut self,
        input: &str,
        ctx: &mut GameContext,
    ) -> Result<Transition, GameError> {
        let Some(session) = self.session.as_mut() else {
            return Ok(Transition::Pop);
        };
        if let Some(outcome) = session.outcome() {
            return Ok(Self::after_outcome(outcome, ctx));
        }

        let action = match normalize(input).as_str() {
            "1" | "a" | "attack" => CombatAction::Attack,
            "2" | "f" | "flee" => CombatAction::Flee,
            _ => return invalid_choice(ctx),
        };

        let player = ctx.player.as_mut().ok_or(GameError::NoActiveCharacter)?;
        session.take_turn(
            action,
            player,
            ctx.store.as_mut(),
            ctx.catalog.as_ref(),
            &mut ctx.rng,
        );
        Ok(Transition::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::types::test_support::hero;
    use crate::core::context::test_support::context;

    #[test]
    fn test_enter_starts_encounter() {
        let mut ctx = context(8);
        ctx.player = Some(hero());
        let mut screen = CombatScreen::new();
        screen.enter(&mut ctx).unwrap();
        let session = screen.session().unwrap();
        assert!(matches!(session.log()[0], CombatEvent::Encounter { .. }));
        assert!(!screen.render(&ctx).is_empty());
    }

    #[test]
    fn test_fight_runs_to_an_outcome() {
        let mut ctx = context(21);
        let player = hero();
        ctx.store.save_character(&player).unwrap();
        ctx.player = Some(player);
        let mut screen = CombatScreen::new();
        screen.enter(&mut ctx).unwrap();

        for _ in 0..500 {
            if screen.session().is_some_and(|s| s.is_finished()) {
                break;
            }
            screen.handle_input("1", &mut ctx).unwrap();
        }
        assert!(screen.session().unwrap().is_finished());
        let t = screen.handle_input("", &mut ctx).unwrap();
        assert!(matches!(t, Transition::Pop));
    }

    #[test]
    fn test_invalid_action_keeps_round() {
        let mut ctx = context(8);
        ctx.player = Some(hero());
        let mut screen = CombatScreen::new();
        screen.enter(&mut ctx).unwrap();
        screen.handle_input("x", &mut ctx).unwrap();
        assert_eq!(screen.session().unwrap().round(), 0);
        assert!(ctx.message.is_some());
    }

    #[test]
    fn test_describe_miss() {
        let event = CombatEvent::PlayerAttack {
            roll: crate::combat::math::resolve_attack(2, 0, 10, false),
            hit: None,
        };
        assert_eq!(describe_event(&event, "Goblin"), "You roll 2 + 0 = 2 vs AC 10: miss.");
    }
}
