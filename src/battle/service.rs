use crate::battle::calculators::DamageCalculator;
use crate::battle::effectiveness::EffectivenessTable;
use crate::battle::rng::RandomSource;
use crate::battle::selectors::{AttackSelector, RandomAttackSelector};
use crate::battle::state::{BattleEvent, EncounterOutcome, Side};
use crate::combatant::Combatant;
use crate::errors::BattleResult;
use crate::moves::Move;
use tracing::debug;

/// Executes single attacks. The turn loop itself lives in the encounter.
pub struct BattleService {
    calculator: DamageCalculator,
    attack_selector: Box<dyn AttackSelector>,
}

impl BattleService {
    pub fn new(calculator: DamageCalculator, attack_selector: Box<dyn AttackSelector>) -> Self {
        Self {
            calculator,
            attack_selector,
        }
    }

    /// Standard damage pipeline over `table`, random attacks for the machine.
    pub fn standard(table: EffectivenessTable) -> Self {
        Self::new(
            DamageCalculator::standard(table),
            Box::new(RandomAttackSelector),
        )
    }

    pub fn calculator(&self) -> &DamageCalculator {
        &self.calculator
    }

    /// The human side attacks with the move it picked.
    pub fn execute_player_turn(
        &self,
        attacker: &Combatant,
        defender: &mut Combatant,
        chosen_move: &Move,
        outcome: &mut EncounterOutcome,
        rng: &mut dyn RandomSource,
    ) {
        self.resolve_attack(Side::Player, attacker, defender, chosen_move, outcome, rng);
    }

    /// The machine side attacks with a move from its attack selector.
    pub fn execute_automated_turn(
        &self,
        attacker: &Combatant,
        defender: &mut Combatant,
        outcome: &mut EncounterOutcome,
        rng: &mut dyn RandomSource,
    ) -> BattleResult<()> {
        let chosen_move = self.attack_selector.select_attack(attacker, rng)?;
        self.resolve_attack(Side::Opponent, attacker, defender, chosen_move, outcome, rng);
        Ok(())
    }

    fn resolve_attack(
        &self,
        side: Side,
        attacker: &Combatant,
        defender: &mut Combatant,
        move_used: &Move,
        outcome: &mut EncounterOutcome,
        rng: &mut dyn RandomSource,
    ) {
        let result = self.calculator.resolve(move_used, defender, rng);
        let fainted = defender.apply_damage(result.damage);
        debug!(
            attacker = attacker.name(),
            defender = defender.name(),
            move_name = move_used.name(),
            damage = result.damage,
            remaining_hp = defender.current_hp(),
            "attack resolved"
        );

        // --- Attack line ---
        if result.hit {
            outcome.record(BattleEvent::DamageDealt {
                side,
                attacker: attacker.name().to_string(),
                move_name: move_used.name().to_string(),
                target: defender.name().to_string(),
                damage: result.damage,
                multiplier: result.multiplier,
            });
        } else {
            outcome.record(BattleEvent::MoveMissed {
                side,
                attacker: attacker.name().to_string(),
                move_name: move_used.name().to_string(),
            });
        }

        // --- Defender status line ---
        if fainted {
            outcome.record(BattleEvent::CombatantFainted {
                target: defender.name().to_string(),
            });
        } else {
            outcome.record(BattleEvent::HpRemaining {
                target: defender.name().to_string(),
                remaining_hp: defender.current_hp(),
            });
        }
    }
}

impl std::fmt::Debug for BattleService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BattleService")
            .field("calculator", &self.calculator)
            .finish_non_exhaustive()
    }
}
