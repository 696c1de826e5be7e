use crate::battle::effectiveness::EffectivenessTable;
use crate::battle::rng::ScriptedRandom;
use crate::battle::service::BattleService;
use crate::battle::turn_orchestrator::Encounter;
use crate::combatant::{Combatant, CombatantId};
use crate::errors::BattleResult;
use crate::moves::Move;
use schema::ElementalType;

/// A builder for creating test combatants with common defaults.
///
/// # Example
/// ```
/// let combatant = TestCombatantBuilder::new("Charmander", ElementalType::Fire)
///     .with_move("Ember", 40, 100, ElementalType::Fire)
///     .with_hp(20)
///     .build();
/// ```
pub struct TestCombatantBuilder {
    id: u16,
    name: String,
    max_hp: u16,
    elemental_type: ElementalType,
    moves: Vec<Move>,
    current_hp: Option<u16>,
}

impl TestCombatantBuilder {
    /// Creates a new builder with 100 max HP and no moves yet.
    pub fn new(name: &str, elemental_type: ElementalType) -> Self {
        Self {
            id: 1,
            name: name.to_string(),
            max_hp: 100,
            elemental_type,
            moves: Vec::new(),
            current_hp: None,
        }
    }

    pub fn with_id(mut self, id: u16) -> Self {
        self.id = id;
        self
    }

    /// Adds a move. Panics on invalid accuracy, which is a test bug.
    pub fn with_move(mut self, name: &str, power: u16, accuracy: u8, move_type: ElementalType) -> Self {
        let mv = match Move::new(name, power, accuracy, move_type) {
            Ok(mv) => mv,
            Err(err) => panic!("Invalid test move {}: {}", name, err),
        };
        self.moves.push(mv);
        self
    }

    /// Sets the current HP. If not set, HP will be max.
    pub fn with_hp(mut self, hp: u16) -> Self {
        self.current_hp = Some(hp);
        self
    }

    /// Builds the `Combatant`. A combatant without moves gets a plain Tackle.
    pub fn build(self) -> Combatant {
        let moves = if self.moves.is_empty() {
            vec![Move::new("Tackle", 40, 100, ElementalType::Normal).unwrap()]
        } else {
            self.moves
        };

        let mut combatant = match Combatant::new(
            CombatantId(self.id),
            self.name.clone(),
            self.max_hp,
            self.elemental_type,
            moves,
        ) {
            Ok(combatant) => combatant,
            Err(err) => panic!("Failed to build test combatant {}: {}", self.name, err),
        };

        if let Some(hp) = self.current_hp {
            combatant.set_hp(hp);
        }

        combatant
    }
}

/// Fire starter with a single sure-hit 40 power Fire move.
pub fn fire_attacker() -> Combatant {
    TestCombatantBuilder::new("Charmander", ElementalType::Fire)
        .with_id(4)
        .with_move("Ember", 40, 100, ElementalType::Fire)
        .build()
}

/// Grass starter with a single sure-hit 40 power Normal move.
pub fn grass_defender() -> Combatant {
    TestCombatantBuilder::new("Bulbasaur", ElementalType::Grass)
        .with_id(1)
        .with_move("Tackle", 40, 100, ElementalType::Normal)
        .build()
}

/// Water starter with a single sure-hit 40 power Water move.
pub fn water_defender() -> Combatant {
    TestCombatantBuilder::new("Squirtle", ElementalType::Water)
        .with_id(7)
        .with_move("Water Gun", 40, 100, ElementalType::Water)
        .build()
}

/// Creates an encounter that has not been started yet.
pub fn create_test_encounter(player: Combatant, opponent: Combatant) -> Encounter {
    Encounter::new(player, opponent)
}

/// Creates an encounter and moves it to `InProgress`.
pub fn create_started_encounter(player: Combatant, opponent: Combatant) -> Encounter {
    let mut encounter = Encounter::new(player, opponent);
    assert_ok(encounter.start());
    encounter
}

/// Battle service over the Fire / Water / Grass chart.
pub fn standard_service() -> BattleService {
    BattleService::standard(EffectivenessTable::classic())
}

/// Creates a `ScriptedRandom` replaying exactly `values`.
pub fn scripted(values: &[u32]) -> ScriptedRandom {
    ScriptedRandom::new(values.to_vec())
}

/// Creates a `ScriptedRandom` with a long run of the same value.
/// Useful when the specific outcome does not matter beyond being a hit.
pub fn predictable_rng() -> ScriptedRandom {
    ScriptedRandom::new(vec![1; 100])
}

/// Helper function to assert that a Result is Ok and return the value.
/// Provides clear error messages in tests when functions unexpectedly fail.
pub fn assert_ok<T>(result: BattleResult<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("Expected Ok but got error: {}", err),
    }
}
