use crate::errors::{RosterError, RosterResult};
use schema::{ElementalType, MoveData};
use serde::{Deserialize, Serialize};

/// Highest accuracy a move can declare, in percent.
pub const MAX_ACCURACY: u8 = 100;

/// An attack a combatant can use. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    name: String,
    power: u16,
    accuracy: u8,
    move_type: ElementalType,
}

impl Move {
    /// Create a move, rejecting accuracies above 100%.
    pub fn new(
        name: impl Into<String>,
        power: u16,
        accuracy: u8,
        move_type: ElementalType,
    ) -> RosterResult<Self> {
        let name = name.into();
        if accuracy > MAX_ACCURACY {
            return Err(RosterError::InvalidAccuracy { name, accuracy });
        }

        Ok(Self {
            name,
            power,
            accuracy,
            move_type,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Base power before any multiplier.
    pub fn power(&self) -> u16 {
        self.power
    }

    /// Hit chance in percent (0-100).
    pub fn accuracy(&self) -> u8 {
        self.accuracy
    }

    pub fn move_type(&self) -> ElementalType {
        self.move_type
    }
}

impl TryFrom<&MoveData> for Move {
    type Error = RosterError;

    fn try_from(data: &MoveData) -> RosterResult<Self> {
        Move::new(data.name.clone(), data.power, data.accuracy, data.move_type)
    }
}
