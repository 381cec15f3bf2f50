//! Multi-step character creation.

use super::{
    dim_line, invalid_choice, is_back, normalize, option_line, parse_choice, title_line,
    GameplayScreen, Screen, Transition,
};
use crate::character::{validate_name, AttributeType, Attributes, Character};
use crate::combat::DifficultyProfile;
use crate::core::constants::NUM_ATTRIBUTES;
use crate::core::GameContext;
use crate::dice;
use crate::error::GameError;
use ratatui::text::Line;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreationStep {
    Name,
    Difficulty,
    Permadeath,
    Race,
    Class,
    Background,
    Attributes,
    Confirm,
}

impl CreationStep {
    fn previous(self) -> Option<Self> {
        match self {
            CreationStep::Name => None,
            CreationStep::Difficulty => Some(CreationStep::Name),
            CreationStep::Permadeath => Some(CreationStep::Difficulty),
            CreationStep::Race => Some(CreationStep::Permadeath),
            CreationStep::Class => Some(CreationStep::Race),
            CreationStep::Background => Some(CreationStep::Class),
            CreationStep::Attributes => Some(CreationStep::Background),
            CreationStep::Confirm => Some(CreationStep::Attributes),
        }
    }
}

pub struct CharacterCreationScreen {
    step: CreationStep,
    name: String,
    difficulty: &'static str,
    permadeath: bool,
    race: usize,
    class: usize,
    background: usize,
    rolls: [i32; NUM_ATTRIBUTES],
}

impl Default for CharacterCreationScreen {
    fn default() -> Self {
        Self::new()
    }
}

fn format_bonuses(bonuses: &Attributes) -> String {
    let parts: Vec<String> = AttributeType::all()
        .iter()
        .filter(|attr| bonuses.get(**attr) != 0)
        .map(|attr| format!("{:+} {}", bonuses.get(*attr), attr.abbrev()))
        .collect();
    if parts.is_empty() {
        "no bonuses".to_string()
    } else {
        parts.join(", ")
    }
}

impl CharacterCreationScreen {
    pub fn new() -> Self {
        Self {
            step: CreationStep::Name,
            name: String::new(),
            difficulty: DifficultyProfile::by_id("").id,
            permadeath: false,
            race: 0,
            class: 0,
            background: 0,
            rolls: [0; NUM_ATTRIBUTES],
        }
    }

    pub fn step(&self) -> CreationStep {
        self.step
    }

    fn roll_all(&mut self, ctx: &mut GameContext) {
        for value in self.rolls.iter_mut() {
            *value = dice::attribute_roll(&mut ctx.rng);
        }
    }

    fn handle_step(&mut self, input: &str, ctx: &mut GameContext) -> Result<Transition, GameError> {
        let choice = normalize(input);
        match self.step {
            CreationStep::Name => match validate_name(input) {
                Ok(()) => {
                    self.name = input.trim().to_string();
                    self.step = CreationStep::Difficulty;
                }
                Err(msg) => ctx.notify(msg),
            },
            CreationStep::Difficulty => {
                let profiles = DifficultyProfile::all();
                if choice.is_empty() {
                    self.step = CreationStep::Permadeath;
                } else if let Some(i) = parse_choice(&choice, profiles.len()) {
                    self.difficulty = profiles[i].id;
                    self.step = CreationStep::Permadeath;
                } else {
                    return invalid_choice(ctx);
                }
            }
            CreationStep::Permadeath => match choice.as_str() {
                "y" | "yes" => {
                    self.permadeath = true;
                    self.step = CreationStep::Race;
                }
                "n" | "no" => {
                    self.permadeath = false;
                    self.step = CreationStep::Race;
                }
                _ => return invalid_choice(ctx),
            },
            CreationStep::Race => match parse_choice(&choice, ctx.catalog.races().len()) {
                Some(i) => {
                    self.race = i;
                    self.step = CreationStep::Class;
                }
                None => return invalid_choice(ctx),
            },
            CreationStep::Class => match parse_choice(&choice, ctx.catalog.classes().len()) {
                Some(i) => {
                    self.class = i;
                    self.step = CreationStep::Background;
                }
                None => return invalid_choice(ctx),
            },
            CreationStep::Background => {
                match parse_choice(&choice, ctx.catalog.backgrounds().len()) {
                    Some(i) => {
                        self.background = i;
                        self.step = CreationStep::Attributes;
                    }
                    None => return invalid_choice(ctx),
                }
            }
            CreationStep::Attributes => match choice.as_str() {
                "k" | "keep" => self.step = CreationStep::Confirm,
                "r" | "reroll" => self.roll_all(ctx),
                other => match parse_choice(other, NUM_ATTRIBUTES) {
                    Some(i) => self.rolls[i] = dice::attribute_roll(&mut ctx.rng),
                    None => return invalid_choice(ctx),
                },
            },
            CreationStep::Confirm => match choice.as_str() {
                "y" | "yes" => return self.finalize(ctx),
                "n" | "no" => return Ok(Transition::Pop),
                _ => return invalid_choice(ctx),
            },
        }
        Ok(Transition::None)
    }

    /// Saves the new character, then gives it the class's starting weapon
    /// and armor and saves again.
    fn finalize(&mut self, ctx: &mut GameContext) -> Result<Transition, GameError> {
        let race = ctx
            .catalog
            .races()
            .get(self.race)
            .cloned()
            .ok_or_else(|| GameError::MissingContent("race".to_string()))?;
        let class = ctx
            .catalog
            .classes()
            .get(self.class)
            .cloned()
            .ok_or_else(|| GameError::MissingContent("class".to_string()))?;
        let background = ctx.catalog.backgrounds().get(self.background).cloned();
        let starting_items = [class.starting_weapon_id, class.starting_armor_id];

        let mut character = Character::new(
            &self.name,
            race,
            class,
            background,
            Attributes::from_values(self.rolls),
            self.difficulty,
            self.permadeath,
        );
        ctx.store.save_character(&character)?;

        for item_id in starting_items {
            let Some(item) = ctx.catalog.item_by_id(item_id) else {
                tracing::warn!(item_id, "starting item missing from catalog");
                continue;
            };
            let entry = ctx
                .store
                .add_item_to_inventory(character.id, &item, 1, 0, None)?;
            let entry_id = entry.id;
            character.add_entry(entry);
            if let Err(e) = character.equip(entry_id) {
                tracing::warn!(item = %item.name, error = %e, "starting item left unequipped");
            }
        }
        ctx.store.save_character(&character)?;

        tracing::info!(
            character = %character.name,
            race = %character.race.name,
            class = %character.class.name,
            difficulty = %character.difficulty,
            permadeath = character.permadeath,
            "character created"
        );
        ctx.player = Some(character);
        Ok(Transition::ReplaceAll(Box::new(GameplayScreen::new())))
    }

    fn render_step(&self, ctx: &GameContext, lines: &mut Vec<Line<'static>>) {
        match self.step {
            CreationStep::Name => {
                lines.push(Line::from("Enter a name for your hero:"));
                lines.push(dim_line("1-16 letters, numbers, spaces, hyphens or underscores"));
            }
            CreationStep::Difficulty => {
                lines.push(Line::from("Choose a difficulty (Enter keeps the current one):"));
                for (i, p) in DifficultyProfile::all().iter().enumerate() {
                    let marker = if p.id == self.difficulty { " *" } else { "" };
                    lines.push(option_line(
                        &(i + 1).to_string(),
                        format!("{}{} - {}", p.name, marker, p.description),
                    ));
                }
            }
            CreationStep::Permadeath => {
                lines.push(Line::from("Enable permadeath? A defeated hero is deleted. (y/n)"));
            }
            CreationStep::Race => {
                lines.push(Line::from("Choose a race:"));
                for (i, race) in ctx.catalog.races().iter().enumerate() {
                    lines.push(option_line(
                        &(i + 1).to_string(),
                        format!("{} ({})", race.name, format_bonuses(&race.bonuses)),
                    ));
                }
            }
            CreationStep::Class => {
                lines.push(Line::from("Choose a class:"));
                for (i, class) in ctx.catalog.classes().iter().enumerate() {
                    lines.push(option_line(
                        &(i + 1).to_string(),
                        format!(
                            "{} - HP {} / Mana {} / AC {}. {}",
                            class.name,
                            class.hit_dice,
                            class.mana_dice,
                            class.base_ac,
                            class.description
                        ),
                    ));
                }
            }
            CreationStep::Background => {
                lines.push(Line::from("Choose a background:"));
                for (i, bg) in ctx.catalog.backgrounds().iter().enumerate() {
                    lines.push(option_line(
                        &(i + 1).to_string(),
                        format!("{} - {}", bg.name, bg.skills.join(", ")),
                    ));
                }
            }
            CreationStep::Attributes => {
                lines.push(Line::from("Your rolled attributes (4d6, lowest die dropped):"));
                for (i, attr) in AttributeType::all().iter().enumerate() {
                    lines.push(option_line(
                        &(i + 1).to_string(),
                        format!("{:<12} {:>2}", attr.name(), self.rolls[i]),
                    ));
                }
                lines.push(Line::from(""));
                lines.push(dim_line("[k] keep   [r] reroll all   [1-6] reroll one"));
            }
            CreationStep::Confirm => {
                let race = ctx.catalog.races().get(self.race);
                let class = ctx.catalog.classes().get(self.class);
                lines.push(Line::from(format!("Name:       {}", self.name)));
                lines.push(Line::from(format!(
                    "Race:       {}",
                    race.map(|r| r.name.as_str()).unwrap_or("?")
                )));
                lines.push(Line::from(format!(
                    "Class:      {}",
                    class.map(|c| c.name.as_str()).unwrap_or("?")
                )));
                lines.push(Line::from(format!(
                    "Difficulty: {}",
                    DifficultyProfile::by_id(self.difficulty).name
                )));
                lines.push(Line::from(format!(
                    "Permadeath: {}",
                    if self.permadeath { "yes" } else { "no" }
                )));
                lines.push(Line::from(""));
                lines.push(Line::from("Create this character? (y/n)"));
            }
        }
    }
}

impl Screen for CharacterCreationScreen {
    fn name(&self) -> &'static str {
        "Character Creation"
    }

    fn enter(&mut self, ctx: &mut GameContext) -> Result<(), GameError> {
        self.difficulty = DifficultyProfile::by_id(&ctx.config.default_difficulty).id;
        self.roll_all(ctx);
        Ok(())
    }

    fn render(&self, ctx: &GameContext) -> Vec<Line<'static>> {
        let mut lines = vec![title_line("Create Your Hero"), Line::from("")];
        self.render_step(ctx, &mut lines);
        lines.push(Line::from(""));
        lines.push(dim_line("[b] back"));
        lines
    }

    fn handle_input(
        &mut self,
        input: &str,
        ctx: &mut GameContext,
    ) -> Result<Transition, GameError> {
        if is_back(input) {
            return match self.step.previous() {
                Some(step) => {
                    self.step = step;
                    Ok(Transition::None)
                }
                None => Ok(Transition::Pop),
            };
        }
        self.handle_step(input, ctx)
    }
}
