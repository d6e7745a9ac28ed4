//! Interactive confirmation on the terminal.

use scene_switch_core::Confirm;
use std::io::{self, BufRead, Write};

/// Asks `[y/N]` on stderr and reads the answer from stdin.
///
/// Anything other than `y`/`yes` counts as no, including a closed stdin.
pub struct StdinConfirm<R = io::StdinLock<'static>> {
    input: R,
}

impl StdinConfirm {
    pub fn new() -> Self {
        Self::with_input(io::stdin().lock())
    }
}

impl<R: BufRead> StdinConfirm<R> {
    pub fn with_input(input: R) -> Self {
        Self { input }
    }
}

impl<R: BufRead> Confirm for StdinConfirm<R> {
    fn confirm(&mut self, prompt: &str) -> bool {
        let mut stderr = io::stderr();
        let _ = write!(stderr, "{} [y/N] ", prompt);
        let _ = stderr.flush();

        let mut answer = String::new();
        match self.input.read_line(&mut answer) {
            Ok(_) => is_yes(&answer),
            Err(_) => false,
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
