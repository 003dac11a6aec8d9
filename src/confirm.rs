//! Yes/no confirmation used to gate destructive operations.

use std::io::{self, BufRead, Write};

use crate::error::{NotekeeperError, Result};

/// Something that can answer a yes/no question.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> Result<bool>;
}

/// Fixed answer, for `--force` and tests.
#[derive(Debug, Clone, Copy)]
pub struct Always(pub bool);

impl Confirm for Always {
    fn confirm(&mut self, _prompt: &str) -> Result<bool> {
        Ok(self.0)
    }
}

/// Asks on stderr and reads the answer from stdin.
///
/// Refuses to guess when stdin is not a terminal.
#[derive(Debug, Default)]
pub struct TerminalConfirm;

impl Confirm for TerminalConfirm {
    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        if !atty::is(atty::Stream::Stdin) {
            return Err(NotekeeperError::Validation(
                "Use --force to delete in non-interactive mode".to_string(),
            ));
        }

        eprint!("{} [y/N] ", prompt);
        io::stderr().flush()?;

        let mut input = String::new();
        io::stdin().lock().read_line(&mut input)?;
        Ok(is_yes(&input))
    }
}

fn is_yes(answer: &str) -> bool {
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}
