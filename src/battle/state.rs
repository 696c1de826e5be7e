use serde::{Deserialize, Serialize};
use std::fmt;

/// Which seat a combatant occupies in an encounter.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Human-controlled, always acts first.
    Player,
    /// Machine-controlled, picks its attacks at random.
    Opponent,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Side::Player => 0,
            Side::Opponent => 1,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncounterState {
    NotStarted,
    InProgress,
    Concluded,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum BattleEvent {
    // Encounter lifecycle
    EncounterStarted {
        player: String,
        opponent: String,
    },
    TurnStarted {
        turn_number: u32,
    },
    TurnEnded {
        turn_number: u32,
    },
    EncounterEnded {
        winner: Side,
        winner_name: String,
    },

    // Attacks
    DamageDealt {
        side: Side,
        attacker: String,
        move_name: String,
        target: String,
        damage: u16,
        multiplier: f64,
    },
    MoveMissed {
        side: Side,
        attacker: String,
        move_name: String,
    },

    // Defender status after an attack
    HpRemaining {
        target: String,
        remaining_hp: u16,
    },
    CombatantFainted {
        target: String,
    },
}

impl BattleEvent {
    /// Formats the event into a human-readable log line.
    /// Returns None for silent events that should not produce user-visible text.
    pub fn format(&self) -> Option<String> {
        match self {
            BattleEvent::EncounterStarted { player, opponent } => {
                Some(format!("Battle started: {} vs {}", player, opponent))
            }
            BattleEvent::TurnStarted { turn_number } => {
                Some(format!("── Turn {} ──────────────────────────", turn_number))
            }
            BattleEvent::TurnEnded { .. } => {
                None // Silent - the next turn header makes this obvious
            }
            BattleEvent::EncounterEnded { winner_name, .. } => {
                Some(format!("Winner: {}", winner_name))
            }
            BattleEvent::DamageDealt {
                attacker,
                move_name,
                target,
                damage,
                ..
            } => Some(format!(
                "{} uses {} -> {} damage to {}.",
                attacker, move_name, damage, target
            )),
            BattleEvent::MoveMissed {
                attacker,
                move_name,
                ..
            } => Some(format!("{} uses {} -> Missed!", attacker, move_name)),
            BattleEvent::HpRemaining {
                target,
                remaining_hp,
            } => Some(format!("{} has {} HP left.", target, remaining_hp)),
            BattleEvent::CombatantFainted { target } => {
                Some(format!("{} can no longer fight.", target))
            }
        }
    }

    /// The side that acted, for attack events.
    pub fn acting_side(&self) -> Option<Side> {
        match self {
            BattleEvent::DamageDealt { side, .. } | BattleEvent::MoveMissed { side, .. } => {
                Some(*side)
            }
            _ => None,
        }
    }
}

/// Everything that happened in one encounter: the raw events, their log
/// lines, and once it is over, who won.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct EncounterOutcome {
    events: Vec<BattleEvent>,
    log: Vec<String>,
    winner: Option<Side>,
    loser: Option<Side>,
}

impl EncounterOutcome {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event, and its log line unless the event is silent.
    pub fn record(&mut self, event: BattleEvent) {
        if let Some(line) = event.format() {
            self.log.push(line);
        }
        self.events.push(event);
    }

    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    pub fn log(&self) -> &[String] {
        &self.log
    }

    /// Log lines from `index` on, for incremental display.
    pub fn log_since(&self, index: usize) -> &[String] {
        self.log.get(index..).unwrap_or(&[])
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn loser(&self) -> Option<Side> {
        self.loser
    }

    pub fn is_concluded(&self) -> bool {
        self.winner.is_some()
    }

    pub(crate) fn set_result(&mut self, winner: Side) {
        self.winner = Some(winner);
        self.loser = Some(winner.opposite());
    }

    /// Print all events in debug format with a custom prefix message.
    pub fn print_debug_with_message(&self, message: &str) {
        println!("{}", message);
        for event in &self.events {
            println!("  {:?}", event);
        }
    }
}

impl fmt::Display for EncounterOutcome {
    /// Shows the narrative log, one line per entry.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.log {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
