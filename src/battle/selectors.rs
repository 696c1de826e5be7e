//! Selection policies for attacks and opponents.

use crate::battle::rng::RandomSource;
use crate::combatant::{Combatant, CombatantId};
use crate::errors::{BattleResult, SelectionError};
use crate::moves::Move;
use crate::roster::Roster;
use tracing::debug;

/// A trait for anything that can pick the move a combatant uses this turn.
pub trait AttackSelector {
    /// Chooses one of `attacker`'s moves. Fails if the attacker has none.
    fn select_attack<'c>(
        &self,
        attacker: &'c Combatant,
        rng: &mut dyn RandomSource,
    ) -> BattleResult<&'c Move>;
}

/// Uniformly random move choice. Used for the automated side.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomAttackSelector;

impl AttackSelector for RandomAttackSelector {
    fn select_attack<'c>(
        &self,
        attacker: &'c Combatant,
        rng: &mut dyn RandomSource,
    ) -> BattleResult<&'c Move> {
        let moves = attacker.moves();
        if moves.is_empty() {
            return Err(SelectionError::NoMoves(attacker.name().to_string()).into());
        }

        let index = rng.next_int(0, moves.len() as u32) as usize;
        debug!(attacker = attacker.name(), index, "random attack selected");
        Ok(&moves[index])
    }
}

/// Returns a move the caller already chose, without touching the random source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedAttackSelector {
    pub move_index: usize,
}

impl FixedAttackSelector {
    pub fn new(move_index: usize) -> Self {
        Self { move_index }
    }
}

impl AttackSelector for FixedAttackSelector {
    fn select_attack<'c>(
        &self,
        attacker: &'c Combatant,
        _rng: &mut dyn RandomSource,
    ) -> BattleResult<&'c Move> {
        if attacker.moves().is_empty() {
            return Err(SelectionError::NoMoves(attacker.name().to_string()).into());
        }
        attacker
            .move_at(self.move_index)
            .ok_or_else(|| SelectionError::InvalidMoveIndex(self.move_index).into())
    }
}

/// Picks the machine's combatant from the roster.
pub trait CombatantSelector {
    /// Chooses any roster entry other than `exclude`.
    /// Requires at least two combatants in the roster.
    fn select_random_excluding<'r>(
        &self,
        roster: &'r Roster,
        exclude: CombatantId,
        rng: &mut dyn RandomSource,
    ) -> BattleResult<&'r Combatant>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RandomCombatantSelector;

impl CombatantSelector for RandomCombatantSelector {
    fn select_random_excluding<'r>(
        &self,
        roster: &'r Roster,
        exclude: CombatantId,
        rng: &mut dyn RandomSource,
    ) -> BattleResult<&'r Combatant> {
        if roster.len() < 2 {
            return Err(SelectionError::NotEnoughCombatants {
                available: roster.len(),
            }
            .into());
        }

        let candidates: Vec<&Combatant> = roster
            .all()
            .iter()
            .filter(|combatant| combatant.id() != exclude)
            .collect();
        if candidates.is_empty() {
            return Err(SelectionError::NotEnoughCombatants { available: 0 }.into());
        }

        let index = rng.next_int(0, candidates.len() as u32) as usize;
        let chosen = candidates[index];
        debug!(excluded = %exclude, chosen = chosen.name(), "opponent selected");
        Ok(chosen)
    }
}
