//! Interactive conflict prompt on stdin.

use crate::executor::ConflictDecision;
use std::io::{self, BufRead, IsTerminal, Write};

/// Ask whether to overwrite an existing file.
///
/// Anything but `y`/`yes` skips, as do EOF and a non-terminal stdin.
pub fn ask_overwrite(relative: &str) -> ConflictDecision {
    let stdin = io::stdin();
    if !stdin.is_terminal() {
        tracing::debug!(path = %relative, "stdin is not a terminal, skipping conflict");
        return ConflictDecision::Skip;
    }

    eprint!("Overwrite {}? [y/N] ", relative);
    let _ = io::stderr().flush();
    read_decision(&mut stdin.lock())
}

fn read_decision(input: &mut impl BufRead) -> ConflictDecision {
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) | Err(_) => ConflictDecision::Skip,
        Ok(_) => parse_answer(&line),
    }
}

fn parse_answer(answer: &str) -> ConflictDecision {
    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => ConflictDecision::Overwrite,
        _ => ConflictDecision::Skip,
    }
}
