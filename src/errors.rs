use crate::combatant::CombatantId;
use thiserror::Error;

/// Main error type for the creature battle engine
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BattleEngineError {
    /// Error related to loading or querying the roster
    #[error("Roster error: {0}")]
    Roster(#[from] RosterError),
    /// Error related to choosing a combatant or an attack
    #[error("Selection error: {0}")]
    Selection(#[from] SelectionError),
    /// Error related to the encounter state machine
    #[error("Encounter error: {0}")]
    Encounter(#[from] EncounterError),
}

/// Errors related to roster data operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RosterError {
    /// The roster document could not be read
    #[error("Failed to read roster file {path}: {reason}")]
    Io { path: String, reason: String },
    /// The roster document is not valid RON for the expected shape
    #[error("Malformed roster data: {0}")]
    Parse(String),
    /// The roster contains no combatants at all
    #[error("Roster is empty")]
    Empty,
    /// Two combatants share the same identity
    #[error("Duplicate combatant id: {0}")]
    DuplicateId(CombatantId),
    /// A combatant was declared without any move
    #[error("Combatant {0} has no moves")]
    NoMoves(String),
    /// A move declares an accuracy outside 0-100
    #[error("Move {name} has accuracy {accuracy}, expected 0-100")]
    InvalidAccuracy { name: String, accuracy: u8 },
    /// A type chart entry is zero, negative or not a number
    #[error("Invalid effectiveness multiplier {multiplier} for {attacking} -> {defending}")]
    InvalidMultiplier {
        attacking: String,
        defending: String,
        multiplier: f64,
    },
    /// Roster index is out of bounds
    #[error("Roster index {index} out of range (roster has {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Errors related to combatant and attack selection
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// An opponent cannot be chosen because the roster is too small
    #[error("Need at least 2 distinct combatants, found {available}")]
    NotEnoughCombatants { available: usize },
    /// The attacker has no move to choose from
    #[error("{0} has no moves to select from")]
    NoMoves(String),
    /// Move index is out of bounds
    #[error("Invalid move index: {0}")]
    InvalidMoveIndex(usize),
}

/// Errors related to the encounter lifecycle
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncounterError {
    /// `start` was called on an encounter that is already running or over
    #[error("Encounter has already started")]
    AlreadyStarted,
    /// A turn was requested while the encounter is not running
    #[error("Encounter is not in progress")]
    NotInProgress,
    /// One of the combatants entered the encounter with no health left
    #[error("{0} cannot battle with 0 HP")]
    CombatantFainted(String),
}

/// Errors that end an interactive game session
#[derive(Debug, Error)]
pub enum GameError {
    /// The display sink could not be written to
    #[error("Display error: {0}")]
    Display(#[from] std::io::Error),
    /// The engine rejected an operation
    #[error(transparent)]
    Engine(#[from] BattleEngineError),
}

impl From<RosterError> for GameError {
    fn from(err: RosterError) -> Self {
        GameError::Engine(err.into())
    }
}

/// Type alias for Results using BattleEngineError
pub type BattleResult<T> = Result<T, BattleEngineError>;

/// Type alias for Results using RosterError
pub type RosterResult<T> = Result<T, RosterError>;

/// Type alias for Results using GameError
pub type GameResult<T> = Result<T, GameError>;
