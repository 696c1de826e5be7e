use crate::errors::{RosterError, RosterResult};
use crate::moves::Move;
use schema::{CombatantData, ElementalType};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a combatant within a roster (its dex number).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CombatantId(pub u16);

impl fmt::Display for CombatantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:03}", self.0)
    }
}

/// A creature that can take part in an encounter.
///
/// Health only goes down through [`Combatant::apply_damage`], which clamps at
/// zero. Once at zero the combatant stays fainted for the rest of the encounter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Combatant {
    id: CombatantId,
    name: String,
    max_hp: u16,
    current_hp: u16,
    elemental_type: ElementalType,
    moves: Vec<Move>,
}

impl Combatant {
    /// Create a combatant at full health. At least one move is required.
    pub fn new(
        id: CombatantId,
        name: impl Into<String>,
        max_hp: u16,
        elemental_type: ElementalType,
        moves: Vec<Move>,
    ) -> RosterResult<Self> {
        let name = name.into();
        if moves.is_empty() {
            return Err(RosterError::NoMoves(name));
        }

        Ok(Self {
            id,
            name,
            max_hp,
            current_hp: max_hp,
            elemental_type,
            moves,
        })
    }

    pub fn id(&self) -> CombatantId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn max_hp(&self) -> u16 {
        self.max_hp
    }

    pub fn current_hp(&self) -> u16 {
        self.current_hp
    }

    pub fn elemental_type(&self) -> ElementalType {
        self.elemental_type
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn move_at(&self, index: usize) -> Option<&Move> {
        self.moves.get(index)
    }

    pub fn is_fainted(&self) -> bool {
        self.current_hp == 0
    }

    /// Subtract `damage` from current health, stopping at zero.
    /// Returns true if the combatant is fainted afterwards.
    pub fn apply_damage(&mut self, damage: u16) -> bool {
        self.current_hp = self.current_hp.saturating_sub(damage);
        self.is_fainted()
    }

    /// A full-health copy with the same identity, ready for a new encounter.
    pub fn battle_ready(&self) -> Self {
        Self {
            current_hp: self.max_hp,
            ..self.clone()
        }
    }

    #[cfg(test)]
    pub(crate) fn set_hp(&mut self, hp: u16) {
        self.current_hp = hp.min(self.max_hp);
    }

    #[cfg(test)]
    pub(crate) fn clear_moves(&mut self) {
        self.moves.clear();
    }
}

impl TryFrom<&CombatantData> for Combatant {
    type Error = RosterError;

    fn try_from(data: &CombatantData) -> RosterResult<Self> {
        let moves = data
            .moves
            .iter()
            .map(Move::try_from)
            .collect::<RosterResult<Vec<_>>>()?;

        Combatant::new(
            CombatantId(data.id),
            data.name.clone(),
            data.max_hp,
            data.elemental_type,
            moves,
        )
    }
}
