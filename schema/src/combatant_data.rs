use crate::ElementalType;
use serde::{Deserialize, Serialize};

/// A move as written in a roster document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveData {
    pub name: String,
    pub power: u16,
    /// Hit chance in percent, 0-100.
    pub accuracy: u8,
    pub move_type: ElementalType,
}

/// A creature as written in a roster document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatantData {
    pub id: u16,
    pub name: String,
    pub max_hp: u16,
    pub elemental_type: ElementalType,
    pub moves: Vec<MoveData>,
}

/// One listed matchup of the type chart. Pairs not listed are neutral.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectivenessEntry {
    pub attacking: ElementalType,
    pub defending: ElementalType,
    pub multiplier: f64,
}

/// The whole roster document: creatures plus the type chart they fight under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterData {
    pub combatants: Vec<CombatantData>,
    #[serde(default)]
    pub effectiveness: Vec<EffectivenessEntry>,
}
