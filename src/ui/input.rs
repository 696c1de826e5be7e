use super::InputSource;
use std::collections::VecDeque;
use std::io::{self, BufRead};
use tracing::warn;

/// Reads player input line by line from standard input.
#[derive(Debug, Default)]
pub struct StdinInput;

impl StdinInput {
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for StdinInput {
    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
            Err(e) => {
                warn!(error = %e, "failed to read from stdin, treating as end of input");
                None
            }
        }
    }
}

/// Replays a fixed list of lines, then reports end of input.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl InputSource for ScriptedInput {
    fn read_line(&mut self) -> Option<String> {
        self.lines.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_scripted_input_replays_then_ends() {
        let mut input = ScriptedInput::new(["1", "", "3"]);

        assert_eq!(input.read_line().as_deref(), Some("1"));
        assert_eq!(input.read_line().as_deref(), Some(""));
        assert_eq!(input.remaining(), 1);
        assert_eq!(input.read_line().as_deref(), Some("3"));
        assert_eq!(input.read_line(), None);
        assert_eq!(input.read_line(), None);
    }
}
