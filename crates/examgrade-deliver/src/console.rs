//! Terminal prompter.

use std::io::{BufRead, Write};

use examgrade_core::model::Question;

use crate::Prompter;

/// Presents questions on stdout and reads answers from stdin.
pub struct ConsolePrompter;

impl ConsolePrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsolePrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for ConsolePrompter {
    fn read_answer(&mut self, index: usize, question: &Question) -> std::io::Result<String> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();

        writeln!(out, "\nQ{}. {}", index + 1, question.text)?;
        for (n, option) in question.options.iter().enumerate() {
            writeln!(out, "  {}. {}", n + 1, option)?;
        }
        write!(out, "Your answer (number or text, blank to skip): ")?;
        out.flush()?;

        let mut line = String::new();
        std::io::stdin().lock().read_line(&mut line)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}
