use crate::battle::rng::RandomSource;
use crate::battle::service::BattleService;
use crate::battle::state::{BattleEvent, EncounterOutcome, EncounterState, Side};
use crate::combatant::Combatant;
use crate::errors::{BattleResult, EncounterError, SelectionError};
use tracing::{debug, info};

/// One battle between a player-controlled and a machine-controlled combatant.
///
/// The encounter owns its two combatants for the duration of the battle.
/// Turns always resolve player first; if the player's attack knocks the
/// opponent out, the machine does not get to act that turn.
#[derive(Debug, Clone)]
pub struct Encounter {
    combatants: [Combatant; 2],
    state: EncounterState,
    turn_number: u32,
    outcome: EncounterOutcome,
}

impl Encounter {
    pub fn new(player: Combatant, opponent: Combatant) -> Self {
        Self {
            combatants: [player, opponent],
            state: EncounterState::NotStarted,
            turn_number: 1,
            outcome: EncounterOutcome::new(),
        }
    }

    pub fn state(&self) -> EncounterState {
        self.state
    }

    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    pub fn player(&self) -> &Combatant {
        self.combatant(Side::Player)
    }

    pub fn opponent(&self) -> &Combatant {
        self.combatant(Side::Opponent)
    }

    pub fn combatant(&self, side: Side) -> &Combatant {
        &self.combatants[side.index()]
    }

    pub fn outcome(&self) -> &EncounterOutcome {
        &self.outcome
    }

    pub fn into_outcome(self) -> EncounterOutcome {
        self.outcome
    }

    pub fn winner(&self) -> Option<&Combatant> {
        self.outcome.winner().map(|side| self.combatant(side))
    }

    pub fn loser(&self) -> Option<&Combatant> {
        self.outcome.loser().map(|side| self.combatant(side))
    }

    /// Moves the encounter from `NotStarted` to `InProgress`.
    /// Both combatants must have health left.
    pub fn start(&mut self) -> BattleResult<()> {
        if self.state != EncounterState::NotStarted {
            return Err(EncounterError::AlreadyStarted.into());
        }
        if let Some(fainted) = self.combatants.iter().find(|c| c.is_fainted()) {
            return Err(EncounterError::CombatantFainted(fainted.name().to_string()).into());
        }

        let player = self.player().name().to_string();
        let opponent = self.opponent().name().to_string();
        info!(%player, %opponent, "encounter started");
        self.outcome
            .record(BattleEvent::EncounterStarted { player, opponent });
        self.state = EncounterState::InProgress;
        Ok(())
    }

    /// Resolves one full turn: the player's chosen move, then, if the opponent
    /// is still standing, the machine's move.
    pub fn play_turn(
        &mut self,
        service: &BattleService,
        player_move_index: usize,
        rng: &mut dyn RandomSource,
    ) -> BattleResult<EncounterState> {
        if self.state != EncounterState::InProgress {
            return Err(EncounterError::NotInProgress.into());
        }

        let turn_number = self.turn_number;
        let [player, opponent] = &mut self.combatants;
        let chosen_move = player
            .move_at(player_move_index)
            .ok_or(SelectionError::InvalidMoveIndex(player_move_index))?;

        self.outcome.record(BattleEvent::TurnStarted { turn_number });
        debug!(turn_number, move_name = chosen_move.name(), "turn started");

        // 1. Player acts first.
        service.execute_player_turn(player, opponent, chosen_move, &mut self.outcome, rng);
        if opponent.is_fainted() {
            self.conclude();
            return Ok(self.state);
        }

        // 2. Machine answers.
        service.execute_automated_turn(opponent, player, &mut self.outcome, rng)?;
        if player.is_fainted() {
            self.conclude();
            return Ok(self.state);
        }

        // 3. Both still standing.
        self.outcome.record(BattleEvent::TurnEnded { turn_number });
        self.turn_number += 1;
        Ok(self.state)
    }

    /// Starts the encounter if needed, then plays turns until it concludes.
    /// `choose_move` supplies the player's move index for each turn.
    pub fn run_to_completion<F>(
        &mut self,
        service: &BattleService,
        rng: &mut dyn RandomSource,
        mut choose_move: F,
    ) -> BattleResult<&EncounterOutcome>
    where
        F: FnMut(&Encounter) -> BattleResult<usize>,
    {
        if self.state == EncounterState::NotStarted {
            self.start()?;
        }
        while self.state == EncounterState::InProgress {
            let move_index = choose_move(self)?;
            self.play_turn(service, move_index, rng)?;
        }
        Ok(&self.outcome)
    }

    /// The side with health left wins. With player-first ordering only one
    /// side can be at zero when this runs.
    fn conclude(&mut self) {
        let winner = if self.player().is_fainted() {
            Side::Opponent
        } else {
            Side::Player
        };
        let winner_name = self.combatant(winner).name().to_string();

        info!(winner = %winner_name, turns = self.turn_number, "encounter concluded");
        self.outcome.record(BattleEvent::EncounterEnded {
            winner,
            winner_name,
        });
        self.outcome.set_result(winner);
        self.state = EncounterState::Concluded;
    }
}
