// Creature Battle Schema - Shared type definitions
// This crate contains the enums and data-file shapes that are shared between
// the battle engine and anything that reads or writes roster documents.

// Re-export the main types
pub use combatant_data::*;
pub use elemental_types::*;

pub mod combatant_data;
pub mod elemental_types;
