//! Presentation and input seams for the interactive game.
//!
//! The game never writes to a terminal directly. It builds a [`Presentation`]
//! value and hands it to a [`DisplaySink`]; it never reads stdin directly
//! either, only an [`InputSource`].

mod console;
mod input;
mod json;

pub use console::ConsoleSink;
pub use input::{ScriptedInput, StdinInput};
pub use json::JsonSink;

use crate::combatant::{Combatant, CombatantId};
use crate::roster::Roster;
use schema::ElementalType;
use serde::Serialize;
use std::io;

/// One roster line in the Pokédex listing.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PokedexEntry {
    /// 1-based position, as typed by the player.
    pub number: usize,
    pub id: CombatantId,
    pub name: String,
    pub elemental_type: ElementalType,
    pub hp: u16,
}

impl PokedexEntry {
    pub fn listing(roster: &Roster) -> Vec<PokedexEntry> {
        roster
            .all()
            .iter()
            .enumerate()
            .map(|(i, combatant)| PokedexEntry {
                number: i + 1,
                id: combatant.id(),
                name: combatant.name().to_string(),
                elemental_type: combatant.elemental_type(),
                hp: combatant.current_hp(),
            })
            .collect()
    }
}

/// One selectable attack in the attack menu.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct MoveSummary {
    pub number: usize,
    pub name: String,
    pub power: u16,
    pub accuracy: u8,
    pub move_type: ElementalType,
}

impl MoveSummary {
    pub fn for_combatant(combatant: &Combatant) -> Vec<MoveSummary> {
        combatant
            .moves()
            .iter()
            .enumerate()
            .map(|(i, mv)| MoveSummary {
                number: i + 1,
                name: mv.name().to_string(),
                power: mv.power(),
                accuracy: mv.accuracy(),
                move_type: mv.move_type(),
            })
            .collect()
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct HealthBar {
    pub name: String,
    pub current_hp: u16,
    pub max_hp: u16,
}

impl HealthBar {
    pub fn of(combatant: &Combatant) -> Self {
        Self {
            name: combatant.name().to_string(),
            current_hp: combatant.current_hp(),
            max_hp: combatant.max_hp(),
        }
    }
}

/// Everything the game can put on screen.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum Presentation {
    Start {
        title: String,
        subtitle: String,
    },
    Menu {
        options: Vec<String>,
    },
    Pokedex {
        entries: Vec<PokedexEntry>,
    },
    AttackMenu {
        combatant: String,
        moves: Vec<MoveSummary>,
    },
    BattleStatus {
        player: HealthBar,
        opponent: HealthBar,
    },
    Log {
        lines: Vec<String>,
    },
    Message {
        text: String,
    },
    /// Request for input. Console output keeps the cursor on the same line.
    Prompt {
        text: String,
    },
}

impl Presentation {
    pub fn message(text: impl Into<String>) -> Self {
        Presentation::Message { text: text.into() }
    }

    pub fn prompt(text: impl Into<String>) -> Self {
        Presentation::Prompt { text: text.into() }
    }
}

/// Somewhere presentations can be shown.
pub trait DisplaySink {
    fn render(&mut self, presentation: &Presentation) -> io::Result<()>;
}

impl<T: DisplaySink + ?Sized> DisplaySink for Box<T> {
    fn render(&mut self, presentation: &Presentation) -> io::Result<()> {
        (**self).render(presentation)
    }
}

/// Keeps every presentation in memory. Useful for headless runs and tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    screens: Vec<Presentation>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screens(&self) -> &[Presentation] {
        &self.screens
    }

    /// Text of every `Message`, in order.
    pub fn messages(&self) -> Vec<&str> {
        self.screens
            .iter()
            .filter_map(|screen| match screen {
                Presentation::Message { text } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Every `Log` line, in order.
    pub fn log_lines(&self) -> Vec<&str> {
        self.screens
            .iter()
            .filter_map(|screen| match screen {
                Presentation::Log { lines } => Some(lines),
                _ => None,
            })
            .flatten()
            .map(String::as_str)
            .collect()
    }
}

impl DisplaySink for RecordingSink {
    fn render(&mut self, presentation: &Presentation) -> io::Result<()> {
        self.screens.push(presentation.clone());
        Ok(())
    }
}

/// Where player input comes from.
pub trait InputSource {
    /// Next line without its terminator, or `None` once input is exhausted.
    fn read_line(&mut self) -> Option<String>;
}

impl<T: InputSource + ?Sized> InputSource for Box<T> {
    fn read_line(&mut self) -> Option<String> {
        (**self).read_line()
    }
}
