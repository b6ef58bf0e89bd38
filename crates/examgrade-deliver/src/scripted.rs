//! Scripted prompter for testing the delivery session without a terminal.

use examgrade_core::model::Question;

use crate::Prompter;

/// Replays a fixed list of answer lines.
///
/// Runs out of script gracefully: further questions are answered blank, the
/// way a student who stops responding leaves trailing questions.
pub struct ScriptedPrompter {
    answers: Vec<String>,
    asked: usize,
}

impl ScriptedPrompter {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|s| s.to_string()).collect(),
            asked: 0,
        }
    }

    /// How many questions were presented.
    pub fn questions_asked(&self) -> usize {
        self.asked
    }
}

impl Prompter for ScriptedPrompter {
    fn read_answer(&mut self, index: usize, _question: &Question) -> std::io::Result<String> {
        self.asked += 1;
        Ok(self.answers.get(index).cloned().unwrap_or_default())
    }
}
