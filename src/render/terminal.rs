//! Plain-text renderer for the REPL.

use std::io::{self, Write};
use std::sync::Mutex;

use super::Renderer;
use crate::bank::QuestionRecord;
use crate::engine::{AnswerResult, QuestionView, Screen, Summary};

/// Prints screens to stdout.
///
/// Keeps the active question so answer feedback can name the right choice.
#[derive(Default)]
pub struct TerminalRenderer {
    active: Mutex<Option<QuestionRecord>>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    fn print(text: &str) {
        print!("{text}");
        let _ = io::stdout().flush();
    }
}

impl Renderer for TerminalRenderer {
    fn on_state_changed(&self, screen: &Screen) {
        let mut active = self.active.lock().unwrap_or_else(|e| e.into_inner());
        *active = match screen {
            Screen::Playing(view) => Some(view.question.clone()),
            _ => None,
        };
        Self::print(&format_screen(screen));
    }

    fn on_answer_result(&self, result: &AnswerResult) {
        let active = self.active.lock().unwrap_or_else(|e| e.into_inner());
        Self::print(&format_feedback(result, active.as_ref()));
    }
}

pub fn format_screen(screen: &Screen) -> String {
    match screen {
        Screen::Start => "\ntype /start to begin\n> ".to_string(),
        Screen::Playing(view) => format_question(view),
        Screen::Finished(summary) => format_summary(summary),
    }
}

pub fn format_question(view: &QuestionView) -> String {
    let header = format!("Question {} of {}", view.number, view.total);
    let score = format!("Score: {}", view.score);
    let mut out = format!("\n{header:<40}{score}\n{}\n", "-".repeat(48));

    let question = &view.question;
    if let Some(image) = &question.image {
        out.push_str(&format!("[image: {image}]\n"));
    }
    if !question.question.is_empty() {
        out.push_str(&format!("{}\n", question.question));
    }
    out.push('\n');
    for (i, answer) in question.answers.iter().enumerate() {
        out.push_str(&format!("  {}) {}\n", i + 1, answer));
    }
    out.push_str(&format!("\nanswer 1-{} > ", question.answers.len()));
    out
}

/// Feedback line for a scored answer. With the question at hand the correct
/// choice is spelled out.
pub fn format_feedback(result: &AnswerResult, question: Option<&QuestionRecord>) -> String {
    if result.was_correct {
        return "  ✓ correct!\n".to_string();
    }
    match question.and_then(|q| q.correct_text()) {
        Some(text) => format!(
            "  ✗ wrong. The answer was {}) {}\n",
            result.correct_index + 1,
            text
        ),
        None => format!("  ✗ wrong. The answer was {}\n", result.correct_index + 1),
    }
}

pub fn format_summary(summary: &Summary) -> String {
    let mut out = String::from("\n");
    if summary.total == 0 {
        out.push_str("The question bank is empty.\n");
    }
    out.push_str(&format!(
        "{}\n{}\n\ntype /start to play again\n> ",
        summary.headline(),
        summary.message()
    ));
    out
}
