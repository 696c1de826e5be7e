//! Creature Battle Engine
//!
//! A turn-based, one-on-one creature battle simulator. A human-controlled
//! combatant fights a machine-controlled one; each attack passes through an
//! ordered chain of damage rules (accuracy, then type effectiveness) and the
//! encounter ends when one side runs out of health.

// --- MODULE DECLARATIONS ---
pub mod battle;
pub mod combatant;
pub mod config;
pub mod errors;
pub mod game;
pub mod moves;
pub mod roster;
pub mod ui;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
pub use schema::{CombatantData, EffectivenessEntry, ElementalType, MoveData, RosterData};

// --- From this crate's modules (`src/`) ---

// Core battle types.
pub use battle::calculators::{DamageCalculator, DamageOutcome};
pub use battle::damage_rules::{DamageContext, DamageRule, PrecisionRule, TypeEffectivenessRule};
pub use battle::effectiveness::EffectivenessTable;
pub use battle::rng::{RandomSource, ScriptedRandom, StdRandom};
pub use battle::selectors::{
    AttackSelector, CombatantSelector, FixedAttackSelector, RandomAttackSelector,
    RandomCombatantSelector,
};
pub use battle::service::BattleService;
pub use battle::state::{BattleEvent, EncounterOutcome, EncounterState, Side};
pub use battle::turn_orchestrator::Encounter;

// Runtime data.
pub use combatant::{Combatant, CombatantId};
pub use moves::Move;
pub use roster::{GameData, Roster};

// Session wiring.
pub use config::GameConfig;
pub use game::{Game, MenuAction};

// Crate-specific error and result types.
pub use errors::{
    BattleEngineError, BattleResult, EncounterError, GameError, GameResult, RosterError,
    RosterResult, SelectionError,
};
