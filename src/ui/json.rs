use super::{DisplaySink, Presentation};
use std::io::{self, Write};

/// Writes each presentation as one JSON object per line.
///
/// Meant for driving the game from another program: every screen, prompt and
/// log batch is a self-describing record tagged by its `screen` field.
#[derive(Debug)]
pub struct JsonSink<W: Write> {
    out: W,
}

impl JsonSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> JsonSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DisplaySink for JsonSink<W> {
    fn render(&mut self, presentation: &Presentation) -> io::Result<()> {
        let record = serde_json::to_string(presentation)?;
        writeln!(self.out, "{}", record)?;
        self.out.flush()
    }
}
