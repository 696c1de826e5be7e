#[cfg(test)]
mod tests {
    use crate::battle::calculators::DamageCalculator;
    use crate::battle::effectiveness::EffectivenessTable;
    use crate::battle::selectors::FixedAttackSelector;
    use crate::battle::service::BattleService;
    use crate::battle::state::{BattleEvent, EncounterOutcome, Side};
    use crate::battle::tests::common::{
        TestCombatantBuilder, fire_attacker, grass_defender, scripted, standard_service,
        water_defender,
    };
    use pretty_assertions::assert_eq;
    use schema::ElementalType;

    #[test]
    fn test_player_hit_logs_damage_and_remaining_hp() {
        // Arrange
        let service = standard_service();
        let attacker = fire_attacker();
        let mut defender = grass_defender();
        let ember = attacker.moves()[0].clone();
        let mut outcome = EncounterOutcome::new();

        // Act
        service.execute_player_turn(&attacker, &mut defender, &ember, &mut outcome, &mut scripted(&[1]));

        // Assert
        assert_eq!(defender.current_hp(), 20);
        assert_eq!(
            outcome.log(),
            &[
                "Charmander uses Ember -> 80 damage to Bulbasaur.".to_string(),
                "Bulbasaur has 20 HP left.".to_string(),
            ]
        );
        assert_eq!(outcome.events()[0].acting_side(), Some(Side::Player));
    }

    #[test]
    fn test_miss_logs_missed_and_keeps_hp() {
        let service = standard_service();
        let attacker = TestCombatantBuilder::new("Charmander", ElementalType::Fire)
            .with_move("Flamethrower", 90, 85, ElementalType::Fire)
            .build();
        let mut defender = grass_defender();
        let flamethrower = attacker.moves()[0].clone();
        let mut outcome = EncounterOutcome::new();

        service.execute_player_turn(
            &attacker,
            &mut defender,
            &flamethrower,
            &mut outcome,
            &mut scripted(&[90]),
        );

        assert_eq!(defender.current_hp(), 100);
        assert_eq!(
            outcome.log(),
            &[
                "Charmander uses Flamethrower -> Missed!".to_string(),
                "Bulbasaur has 100 HP left.".to_string(),
            ]
        );
    }

    #[test]
    fn test_lethal_hit_logs_fainted_instead_of_hp() {
        let service = standard_service();
        let attacker = fire_attacker();
        let mut defender = TestCombatantBuilder::new("Bulbasaur", ElementalType::Grass)
            .with_hp(10)
            .build();
        let ember = attacker.moves()[0].clone();
        let mut outcome = EncounterOutcome::new();

        service.execute_player_turn(&attacker, &mut defender, &ember, &mut outcome, &mut scripted(&[1]));

        assert!(defender.is_fainted());
        assert_eq!(defender.current_hp(), 0);
        assert_eq!(
            outcome.log(),
            &[
                "Charmander uses Ember -> 80 damage to Bulbasaur.".to_string(),
                "Bulbasaur can no longer fight.".to_string(),
            ]
        );
        assert!(matches!(
            outcome.events().last(),
            Some(BattleEvent::CombatantFainted { target }) if target == "Bulbasaur"
        ));
    }

    #[test]
    fn test_automated_turn_draws_move_then_accuracy() {
        // Arrange: first draw picks move index 1, second is the accuracy roll.
        let service = standard_service();
        let attacker = TestCombatantBuilder::new("Squirtle", ElementalType::Water)
            .with_move("Tackle", 40, 100, ElementalType::Normal)
            .with_move("Water Gun", 40, 100, ElementalType::Water)
            .build();
        let mut defender = fire_attacker();
        let mut outcome = EncounterOutcome::new();
        let mut rng = scripted(&[1, 50]);

        // Act
        service
            .execute_automated_turn(&attacker, &mut defender, &mut outcome, &mut rng)
            .unwrap();

        // Assert
        assert_eq!(rng.consumed(), 2);
        assert_eq!(defender.current_hp(), 20);
        assert_eq!(
            outcome.log(),
            &[
                "Squirtle uses Water Gun -> 80 damage to Charmander.".to_string(),
                "Charmander has 20 HP left.".to_string(),
            ]
        );
        assert_eq!(outcome.events()[0].acting_side(), Some(Side::Opponent));
    }

    #[test]
    fn test_automated_turn_without_moves_is_an_error() {
        let service = standard_service();
        let mut attacker = water_defender();
        attacker.clear_moves();
        let mut defender = fire_attacker();
        let mut outcome = EncounterOutcome::new();

        let result =
            service.execute_automated_turn(&attacker, &mut defender, &mut outcome, &mut scripted(&[]));

        assert!(result.is_err());
        assert!(outcome.events().is_empty());
        assert_eq!(defender.current_hp(), 100);
    }

    #[test]
    fn test_custom_attack_selector_is_used_for_automated_side() {
        let service = BattleService::new(
            DamageCalculator::standard(EffectivenessTable::neutral()),
            Box::new(FixedAttackSelector::new(0)),
        );
        let attacker = water_defender();
        let mut defender = grass_defender();
        let mut outcome = EncounterOutcome::new();
        let mut rng = scripted(&[1]);

        service
            .execute_automated_turn(&attacker, &mut defender, &mut outcome, &mut rng)
            .unwrap();

        // Only the accuracy roll is drawn; the fixed selector consumes nothing.
        assert_eq!(rng.consumed(), 1);
        assert_eq!(
            outcome.log()[0],
            "Squirtle uses Water Gun -> 40 damage to Bulbasaur."
        );
    }

    #[test]
    fn test_zero_damage_hit_is_still_reported_as_a_hit() {
        let table = EffectivenessTable::neutral();
        let service = BattleService::standard(table);
        let attacker = TestCombatantBuilder::new("Magikarp", ElementalType::Water)
            .with_move("Splash", 0, 100, ElementalType::Normal)
            .build();
        let mut defender = grass_defender();
        let splash = attacker.moves()[0].clone();
        let mut outcome = EncounterOutcome::new();

        service.execute_player_turn(&attacker, &mut defender, &splash, &mut outcome, &mut scripted(&[1]));

        assert_eq!(outcome.log()[0], "Magikarp uses Splash -> 0 damage to Bulbasaur.");
    }
}
