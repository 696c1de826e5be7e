use crate::errors::{RosterError, RosterResult};
use schema::{EffectivenessEntry, ElementalType};
use std::collections::HashMap;

/// Multiplier used for any matchup the table does not list.
pub const NEUTRAL_MULTIPLIER: f64 = 1.0;

/// Type chart: `(attacking, defending) -> multiplier`.
///
/// Every stored multiplier is finite and strictly positive; unlisted pairs are neutral.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EffectivenessTable {
    modifiers: HashMap<(ElementalType, ElementalType), f64>,
}

impl EffectivenessTable {
    /// A table where every matchup is neutral.
    pub fn neutral() -> Self {
        Self::default()
    }

    /// The Fire / Water / Grass triangle.
    pub fn classic() -> Self {
        use ElementalType::*;

        let modifiers = [
            ((Fire, Grass), 2.0),
            ((Fire, Water), 0.5),
            ((Water, Fire), 2.0),
            ((Water, Grass), 0.5),
            ((Grass, Water), 2.0),
            ((Grass, Fire), 0.5),
        ]
        .into_iter()
        .collect();

        Self { modifiers }
    }

    /// Build a table from roster entries. Later entries for the same pair win.
    pub fn from_entries(entries: &[EffectivenessEntry]) -> RosterResult<Self> {
        let mut modifiers = HashMap::with_capacity(entries.len());
        for entry in entries {
            if !entry.multiplier.is_finite() || entry.multiplier <= 0.0 {
                return Err(RosterError::InvalidMultiplier {
                    attacking: entry.attacking.to_string(),
                    defending: entry.defending.to_string(),
                    multiplier: entry.multiplier,
                });
            }
            modifiers.insert((entry.attacking, entry.defending), entry.multiplier);
        }
        Ok(Self { modifiers })
    }

    /// Damage multiplier for a move of `attacking` type hitting a `defending` creature.
    pub fn modifier(&self, attacking: ElementalType, defending: ElementalType) -> f64 {
        self.modifiers
            .get(&(attacking, defending))
            .copied()
            .unwrap_or(NEUTRAL_MULTIPLIER)
    }

    pub fn len(&self) -> usize {
        self.modifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modifiers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use schema::ElementalType::*;

    #[rstest]
    #[case(Fire, Grass, 2.0)]
    #[case(Fire, Water, 0.5)]
    #[case(Water, Fire, 2.0)]
    #[case(Water, Grass, 0.5)]
    #[case(Grass, Water, 2.0)]
    #[case(Grass, Fire, 0.5)]
    #[case(Fire, Fire, 1.0)]
    #[case(Normal, Grass, 1.0)]
    #[case(Grass, Normal, 1.0)]
    fn test_classic_chart(
        #[case] attacking: ElementalType,
        #[case] defending: ElementalType,
        #[case] expected: f64,
    ) {
        let table = EffectivenessTable::classic();
        assert_eq!(table.modifier(attacking, defending), expected);
    }

    #[test]
    fn test_neutral_table_is_always_one() {
        let table = EffectivenessTable::neutral();
        assert!(table.is_empty());
        assert_eq!(table.modifier(Fire, Grass), 1.0);
    }

    #[test]
    fn test_from_entries() {
        let table = EffectivenessTable::from_entries(&[EffectivenessEntry {
            attacking: Normal,
            defending: Water,
            multiplier: 1.5,
        }])
        .unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(table.modifier(Normal, Water), 1.5);
        assert_eq!(table.modifier(Water, Normal), 1.0);
    }

    #[rstest]
    #[case(0.0)]
    #[case(-2.0)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn test_from_entries_rejects_non_positive_multipliers(#[case] multiplier: f64) {
        let result = EffectivenessTable::from_entries(&[EffectivenessEntry {
            attacking: Fire,
            defending: Grass,
            multiplier,
        }]);

        assert!(matches!(
            result,
            Err(RosterError::InvalidMultiplier { .. })
        ));
    }
}
