//! Interactive game loop: start screen, main menu, Pokédex and battles.
//!
//! The game owns the loaded data, the battle service and the random source,
//! and talks to the outside world only through a [`DisplaySink`] and an
//! [`InputSource`]. End of input at any prompt ends the session cleanly.

use crate::battle::rng::RandomSource;
use crate::battle::selectors::{CombatantSelector, RandomCombatantSelector};
use crate::battle::service::BattleService;
use crate::battle::state::{EncounterOutcome, EncounterState};
use crate::battle::turn_orchestrator::Encounter;
use crate::errors::{GameError, GameResult};
use crate::roster::GameData;
use crate::ui::{DisplaySink, HealthBar, InputSource, MoveSummary, PokedexEntry, Presentation};
use tracing::{info, warn};

const TITLE: &str = "POKEMON BATTLE";
const SUBTITLE: &str = "Get ready for battle!";
const MENU_PROMPT: &str = "Choose an option: ";
const INVALID_OPTION: &str = "Invalid option. Try again.";
const FAREWELL: &str = "See you soon, trainer!";
const INVALID_CREATURE: &str = "Number out of range. Try again.";
const INVALID_ATTACK: &str = "Invalid attack. Try again.";
const CONTINUE_PROMPT: &str = "Press Enter to continue to the next turn...";
const RETURN_PROMPT: &str = "Press Enter to return to the menu...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    StartBattle,
    ViewPokedex,
    Exit,
}

/// Main menu: input token, label, action. Display order is table order.
pub const MAIN_MENU: &[(&str, &str, MenuAction)] = &[
    ("1", "Start Battle", MenuAction::StartBattle),
    ("2", "View Pokédex", MenuAction::ViewPokedex),
    ("3", "Exit", MenuAction::Exit),
];

impl MenuAction {
    /// Looks `token` up in [`MAIN_MENU`], ignoring surrounding whitespace.
    pub fn from_token(token: &str) -> Option<MenuAction> {
        let token = token.trim();
        MAIN_MENU
            .iter()
            .find(|(key, _, _)| *key == token)
            .map(|(_, _, action)| *action)
    }
}

/// Parses a 1-based choice out of `count` options into a 0-based index.
pub fn parse_choice(input: &str, count: usize) -> Option<usize> {
    input
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|n| (1..=count).contains(n))
        .map(|n| n - 1)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub struct Game<S, I> {
    data: GameData,
    service: BattleService,
    selector: Box<dyn CombatantSelector>,
    rng: Box<dyn RandomSource>,
    sink: S,
    input: I,
}

impl<S: DisplaySink, I: InputSource> Game<S, I> {
    /// Standard service over the loaded type chart and a random opponent pick.
    pub fn new(data: GameData, rng: Box<dyn RandomSource>, sink: S, input: I) -> Self {
        let service = BattleService::standard(data.effectiveness.clone());
        Self {
            data,
            service,
            selector: Box::new(RandomCombatantSelector),
            rng,
            sink,
            input,
        }
    }

    pub fn with_selector(mut self, selector: Box<dyn CombatantSelector>) -> Self {
        self.selector = selector;
        self
    }

    pub fn data(&self) -> &GameData {
        &self.data
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Start screen, then the main menu until the player exits or input ends.
    pub fn run(&mut self) -> GameResult<()> {
        self.sink.render(&Presentation::Start {
            title: TITLE.to_string(),
            subtitle: SUBTITLE.to_string(),
        })?;
        self.main_menu()
    }

    pub fn main_menu(&mut self) -> GameResult<()> {
        let options: Vec<String> = MAIN_MENU
            .iter()
            .map(|(_, label, _)| label.to_string())
            .collect();

        loop {
            self.sink.render(&Presentation::Menu {
                options: options.clone(),
            })?;
            self.sink.render(&Presentation::prompt(MENU_PROMPT))?;

            let Some(line) = self.input.read_line() else {
                info!("input closed at main menu");
                return Ok(());
            };

            let flow = match MenuAction::from_token(&line) {
                Some(MenuAction::StartBattle) => self.battle_flow()?,
                Some(MenuAction::ViewPokedex) => self.pokedex_flow()?,
                Some(MenuAction::Exit) => {
                    self.message(FAREWELL)?;
                    Flow::Quit
                }
                None => {
                    warn!(input = %line.trim(), "unrecognised menu option");
                    self.message(INVALID_OPTION)?;
                    Flow::Continue
                }
            };

            if flow == Flow::Quit {
                return Ok(());
            }
        }
    }

    pub fn show_pokedex(&mut self) -> GameResult<()> {
        self.sink.render(&Presentation::Pokedex {
            entries: PokedexEntry::listing(&self.data.roster),
        })?;
        Ok(())
    }

    /// Plays one battle with the roster entry at `player_index` against a
    /// machine-picked opponent. `None` means input ended mid-battle.
    pub fn start_battle(&mut self, player_index: usize) -> GameResult<Option<EncounterOutcome>> {
        let player = self.data.roster.by_index(player_index)?.battle_ready();
        let opponent = self
            .selector
            .select_random_excluding(&self.data.roster, player.id(), self.rng.as_mut())?
            .battle_ready();

        self.message(format!(
            "The machine chose {} ({}). Let's fight!",
            opponent.name(),
            opponent.elemental_type()
        ))?;

        let mut encounter = Encounter::new(player, opponent);
        encounter.start()?;
        let mut shown = self.show_new_lines(encounter.outcome(), 0)?;

        while encounter.state() == EncounterState::InProgress {
            self.show_status(&encounter)?;
            self.sink.render(&Presentation::AttackMenu {
                combatant: encounter.player().name().to_string(),
                moves: MoveSummary::for_combatant(encounter.player()),
            })?;

            let label = format!("Select attack (1-{}): ", encounter.player().moves().len());
            let count = encounter.player().moves().len();
            let Some(choice) = self.prompt_index(&label, count, INVALID_ATTACK)? else {
                return Ok(None);
            };

            encounter.play_turn(&self.service, choice, self.rng.as_mut())?;
            shown = self.show_new_lines(encounter.outcome(), shown)?;

            if encounter.state() == EncounterState::InProgress {
                if !self.pause(CONTINUE_PROMPT)? {
                    return Ok(None);
                }
            } else if !encounter.opponent().is_fainted() {
                // The machine landed the final blow; its attack still gets a pause.
                self.pause(CONTINUE_PROMPT)?;
            }
        }

        self.show_status(&encounter)?;
        Ok(Some(encounter.into_outcome()))
    }

    fn battle_flow(&mut self) -> GameResult<Flow> {
        self.show_pokedex()?;

        let count = self.data.roster.len();
        let label = format!("\nChoose your Pokémon (1-{}): ", count);
        let Some(index) = self.prompt_index(&label, count, INVALID_CREATURE)? else {
            return Ok(Flow::Quit);
        };
        let chosen = self.data.roster.by_index(index)?.name().to_string();
        self.message(format!("You chose {}.", chosen))?;

        match self.start_battle(index) {
            Ok(Some(_)) => {}
            Ok(None) => return Ok(Flow::Quit),
            Err(GameError::Engine(err)) => {
                warn!(error = %err, "battle aborted");
                self.message(format!("The battle could not continue: {}", err))?;
                return Ok(Flow::Continue);
            }
            Err(err) => return Err(err),
        }

        self.flow_after(RETURN_PROMPT)
    }

    fn pokedex_flow(&mut self) -> GameResult<Flow> {
        self.show_pokedex()?;
        self.flow_after(RETURN_PROMPT)
    }

    fn flow_after(&mut self, text: &str) -> GameResult<Flow> {
        Ok(if self.pause(text)? {
            Flow::Continue
        } else {
            Flow::Quit
        })
    }

    /// Shows `text` and waits for any line. False once input has ended.
    fn pause(&mut self, text: &str) -> GameResult<bool> {
        self.message(text)?;
        Ok(self.input.read_line().is_some())
    }

    /// Re-prompts until a number in `1..=count` is entered. Returns the 0-based index.
    fn prompt_index(&mut self, label: &str, count: usize, retry: &str) -> GameResult<Option<usize>> {
        loop {
            self.sink.render(&Presentation::prompt(label))?;
            let Some(line) = self.input.read_line() else {
                return Ok(None);
            };
            if let Some(index) = parse_choice(&line, count) {
                return Ok(Some(index));
            }
            warn!(input = %line.trim(), count, "rejected selection");
            self.message(retry)?;
        }
    }

    fn show_new_lines(&mut self, outcome: &EncounterOutcome, from: usize) -> GameResult<usize> {
        let lines = outcome.log_since(from);
        if !lines.is_empty() {
            self.sink.render(&Presentation::Log {
                lines: lines.to_vec(),
            })?;
        }
        Ok(outcome.log().len())
    }

    fn show_status(&mut self, encounter: &Encounter) -> GameResult<()> {
        self.sink.render(&Presentation::BattleStatus {
            player: HealthBar::of(encounter.player()),
            opponent: HealthBar::of(encounter.opponent()),
        })?;
        Ok(())
    }

    fn message(&mut self, text: impl Into<String>) -> GameResult<()> {
        self.sink.render(&Presentation::message(text))?;
        Ok(())
    }
}
