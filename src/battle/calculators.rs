use crate::battle::damage_rules::{DamageContext, DamageRule, PrecisionRule, TypeEffectivenessRule};
use crate::battle::effectiveness::EffectivenessTable;
use crate::battle::rng::RandomSource;
use crate::combatant::Combatant;
use crate::moves::Move;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// What a single attack resolved to once every rule has run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DamageOutcome {
    pub damage: u16,
    pub hit: bool,
    pub multiplier: f64,
}

/// Runs an ordered list of damage rules over a fresh context for each attack.
///
/// The rule order is exactly the order of the vector handed to [`DamageCalculator::new`];
/// nothing is reordered or skipped.
pub struct DamageCalculator {
    rules: Vec<Box<dyn DamageRule>>,
}

impl DamageCalculator {
    pub fn new(rules: Vec<Box<dyn DamageRule>>) -> Self {
        Self { rules }
    }

    /// The standard pipeline: accuracy check first, then type effectiveness.
    /// Precision has to come first so a miss zeroes the damage whatever the matchup.
    pub fn standard(table: EffectivenessTable) -> Self {
        Self::new(vec![
            Box::new(PrecisionRule),
            Box::new(TypeEffectivenessRule::new(table)),
        ])
    }

    /// Names of the configured rules, in execution order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    /// Final damage `move_used` deals to `defender`. Neither is modified.
    pub fn calculate_damage(
        &self,
        move_used: &Move,
        defender: &Combatant,
        rng: &mut dyn RandomSource,
    ) -> u16 {
        self.resolve(move_used, defender, rng).damage
    }

    /// Like [`calculate_damage`](Self::calculate_damage) but also reports whether
    /// the move hit and which multiplier applied.
    pub fn resolve(
        &self,
        move_used: &Move,
        defender: &Combatant,
        rng: &mut dyn RandomSource,
    ) -> DamageOutcome {
        let ctx = self
            .rules
            .iter()
            .fold(DamageContext::new(move_used, defender), |mut ctx, rule| {
                rule.apply(&mut ctx, rng);
                trace!(rule = rule.name(), hit = ctx.hit, result = ctx.result, "rule applied");
                ctx
            });

        DamageOutcome {
            damage: ctx.result,
            hit: ctx.hit,
            multiplier: ctx.multiplier,
        }
    }
}

impl std::fmt::Debug for DamageCalculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DamageCalculator")
            .field("rules", &self.rule_names())
            .finish()
    }
}
