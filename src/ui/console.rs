use super::{DisplaySink, HealthBar, MoveSummary, PokedexEntry, Presentation};
use std::io::{self, Write};

const BOX_WIDTH: usize = 38;

/// Plain-text rendering for a terminal, or any other writer.
#[derive(Debug)]
pub struct ConsoleSink<W: Write> {
    out: W,
}

impl ConsoleSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn render_start(&mut self, title: &str, subtitle: &str) -> io::Result<()> {
        writeln!(self.out, "╔{}╗", "═".repeat(BOX_WIDTH))?;
        writeln!(self.out, "║  {:<width$}║", title, width = BOX_WIDTH - 2)?;
        writeln!(self.out, "║  {:<width$}║", subtitle, width = BOX_WIDTH - 2)?;
        writeln!(self.out, "╚{}╝", "═".repeat(BOX_WIDTH))?;
        writeln!(self.out)
    }

    fn render_menu(&mut self, options: &[String]) -> io::Result<()> {
        writeln!(self.out, "┌─ MAIN MENU ─────────────────────────┐")?;
        for (i, option) in options.iter().enumerate() {
            writeln!(self.out, "│  [{}] {}", i + 1, option)?;
        }
        writeln!(self.out, "└{}┘", "─".repeat(BOX_WIDTH - 1))
    }

    fn render_pokedex(&mut self, entries: &[PokedexEntry]) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "┌─ POKÉDEX ───────────────────────────┐")?;
        for entry in entries {
            writeln!(
                self.out,
                "│  [{}] {:<12} Type: {:<7} HP: {}",
                entry.number,
                entry.name,
                entry.elemental_type.to_string(),
                entry.hp
            )?;
        }
        writeln!(self.out, "└{}┘", "─".repeat(BOX_WIDTH - 1))
    }

    fn render_attack_menu(&mut self, combatant: &str, moves: &[MoveSummary]) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "Your turn, {}. Choose an attack:", combatant)?;
        for mv in moves {
            writeln!(
                self.out,
                "[{}] {} | Power: {} | Accuracy: {}% | Type: {}",
                mv.number, mv.name, mv.power, mv.accuracy, mv.move_type
            )?;
        }
        Ok(())
    }

    fn render_battle_status(&mut self, player: &HealthBar, opponent: &HealthBar) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "╔{}╗", "═".repeat(BOX_WIDTH + 1))?;
        for bar in [player, opponent] {
            writeln!(
                self.out,
                "║  {:<18} HP: {:>3}/{:<3}       ║",
                bar.name, bar.current_hp, bar.max_hp
            )?;
        }
        writeln!(self.out, "╚{}╝", "═".repeat(BOX_WIDTH + 1))
    }

    fn render_log(&mut self, lines: &[String]) -> io::Result<()> {
        for line in lines {
            writeln!(self.out, "{}", line)?;
        }
        Ok(())
    }

    fn render_message(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "  ➤ {}", text)
    }

    fn render_prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "{}", text)?;
        self.out.flush()
    }
}

impl<W: Write> DisplaySink for ConsoleSink<W> {
    fn render(&mut self, presentation: &Presentation) -> io::Result<()> {
        match presentation {
            Presentation::Start { title, subtitle } => self.render_start(title, subtitle),
            Presentation::Menu { options } => self.render_menu(options),
            Presentation::Pokedex { entries } => self.render_pokedex(entries),
            Presentation::AttackMenu { combatant, moves } => {
                self.render_attack_menu(combatant, moves)
            }
            Presentation::BattleStatus { player, opponent } => {
                self.render_battle_status(player, opponent)
            }
            Presentation::Log { lines } => self.render_log(lines),
            Presentation::Message { text } => self.render_message(text),
            Presentation::Prompt { text } => self.render_prompt(text),
        }
    }
}
