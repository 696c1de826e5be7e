//! The rules a move goes through before it turns into damage.
//!
//! A [`DamageContext`] is created fresh for every attack and handed to each
//! rule in turn. A rule may flip the hit flag, record a multiplier, or rewrite
//! the running result; whatever it leaves behind is what the next rule sees.

use crate::battle::effectiveness::EffectivenessTable;
use crate::battle::rng::RandomSource;
use crate::combatant::Combatant;
use crate::moves::Move;
use tracing::debug;

/// Transient state for resolving one attack.
#[derive(Debug, Clone, PartialEq)]
pub struct DamageContext<'a> {
    pub move_used: &'a Move,
    pub defender: &'a Combatant,
    pub base_power: u16,
    /// Accumulated type multiplier, starts neutral.
    pub multiplier: f64,
    pub hit: bool,
    /// Running damage value, starts at the base power.
    pub result: u16,
}

impl<'a> DamageContext<'a> {
    pub fn new(move_used: &'a Move, defender: &'a Combatant) -> Self {
        Self {
            move_used,
            defender,
            base_power: move_used.power(),
            multiplier: 1.0,
            hit: true,
            result: move_used.power(),
        }
    }
}

/// One step of the damage pipeline.
pub trait DamageRule {
    /// Short name used in traces.
    fn name(&self) -> &'static str;

    fn apply(&self, ctx: &mut DamageContext<'_>, rng: &mut dyn RandomSource);
}

/// Accuracy check: rolls 1..=100 and misses when the roll exceeds the move's accuracy.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrecisionRule;

impl DamageRule for PrecisionRule {
    fn name(&self) -> &'static str {
        "precision"
    }

    fn apply(&self, ctx: &mut DamageContext<'_>, rng: &mut dyn RandomSource) {
        let roll = rng.next_int(1, 101);
        let hit = roll <= u32::from(ctx.move_used.accuracy());
        debug!(
            move_name = ctx.move_used.name(),
            roll,
            accuracy = ctx.move_used.accuracy(),
            hit,
            "accuracy check"
        );

        if !hit {
            ctx.hit = false;
            ctx.result = 0;
        }
    }
}

/// Scales the base power by the type chart. A missed move always ends at zero.
#[derive(Debug, Clone)]
pub struct TypeEffectivenessRule {
    table: EffectivenessTable,
}

impl TypeEffectivenessRule {
    pub fn new(table: EffectivenessTable) -> Self {
        Self { table }
    }
}

impl DamageRule for TypeEffectivenessRule {
    fn name(&self) -> &'static str {
        "type-effectiveness"
    }

    fn apply(&self, ctx: &mut DamageContext<'_>, _rng: &mut dyn RandomSource) {
        if !ctx.hit {
            ctx.result = 0;
            return;
        }

        ctx.multiplier = self
            .table
            .modifier(ctx.move_used.move_type(), ctx.defender.elemental_type());
        ctx.result = scale_power(ctx.base_power, ctx.multiplier);
        debug!(
            move_type = %ctx.move_used.move_type(),
            defender_type = %ctx.defender.elemental_type(),
            multiplier = ctx.multiplier,
            result = ctx.result,
            "type effectiveness applied"
        );
    }
}

/// `floor(power * multiplier)`, saturating at `u16::MAX`.
fn scale_power(power: u16, multiplier: f64) -> u16 {
    (f64::from(power) * multiplier).floor() as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_power_truncates() {
        assert_eq!(scale_power(45, 0.5), 22);
        assert_eq!(scale_power(40, 2.0), 80);
        assert_eq!(scale_power(95, 1.5), 142);
        assert_eq!(scale_power(0, 2.0), 0);
    }

    #[test]
    fn test_scale_power_saturates() {
        assert_eq!(scale_power(u16::MAX, 2.0), u16::MAX);
    }
}
