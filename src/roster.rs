//! Roster loading.
//!
//! The roster and its type chart come from a single RON document. A default
//! document is compiled into the binary; `GameData::load` reads a replacement
//! from disk. Either way the result is validated once and never mutated.

use crate::battle::effectiveness::EffectivenessTable;
use crate::combatant::{Combatant, CombatantId};
use crate::errors::{RosterError, RosterResult};
use schema::RosterData;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::info;

const BUILTIN_ROSTER: &str = include_str!("../data/roster.ron");

/// Read-only, ordered collection of every combatant available for battle.
#[derive(Debug, Clone, PartialEq)]
pub struct Roster {
    combatants: Vec<Combatant>,
}

impl Roster {
    /// Build a roster, rejecting empty lists and duplicate identities.
    pub fn new(combatants: Vec<Combatant>) -> RosterResult<Self> {
        if combatants.is_empty() {
            return Err(RosterError::Empty);
        }

        let mut seen = HashSet::with_capacity(combatants.len());
        for combatant in &combatants {
            if !seen.insert(combatant.id()) {
                return Err(RosterError::DuplicateId(combatant.id()));
            }
        }

        Ok(Self { combatants })
    }

    pub fn all(&self) -> &[Combatant] {
        &self.combatants
    }

    /// Zero-based lookup, in roster order.
    pub fn by_index(&self, index: usize) -> RosterResult<&Combatant> {
        self.combatants
            .get(index)
            .ok_or(RosterError::IndexOutOfRange {
                index,
                len: self.combatants.len(),
            })
    }

    pub fn by_id(&self, id: CombatantId) -> Option<&Combatant> {
        self.combatants.iter().find(|c| c.id() == id)
    }

    pub fn len(&self) -> usize {
        self.combatants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.combatants.is_empty()
    }
}

/// Everything loaded from a roster document.
#[derive(Debug, Clone, PartialEq)]
pub struct GameData {
    pub roster: Roster,
    pub effectiveness: EffectivenessTable,
}

impl GameData {
    /// The roster that ships with the game.
    pub fn builtin() -> RosterResult<Self> {
        Self::from_ron_str(BUILTIN_ROSTER)
    }

    /// Load a roster document from disk.
    pub fn load(path: &Path) -> RosterResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| RosterError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let data = Self::from_ron_str(&content)?;
        info!(
            path = %path.display(),
            combatants = data.roster.len(),
            "roster loaded"
        );
        Ok(data)
    }

    pub fn from_ron_str(content: &str) -> RosterResult<Self> {
        let raw: RosterData =
            ron::from_str(content).map_err(|e| RosterError::Parse(e.to_string()))?;
        Self::from_data(&raw)
    }

    pub fn from_data(raw: &RosterData) -> RosterResult<Self> {
        let combatants = raw
            .combatants
            .iter()
            .map(Combatant::try_from)
            .collect::<RosterResult<Vec<_>>>()?;

        Ok(Self {
            roster: Roster::new(combatants)?,
            effectiveness: EffectivenessTable::from_entries(&raw.effectiveness)?,
        })
    }
}
