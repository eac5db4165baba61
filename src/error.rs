//! Error types surfaced by the quiz core.
//!
//! These are contract violations reported back to the caller. Nothing here
//! is retried; the caller decides whether to show it or ignore it.

use thiserror::Error;

use crate::engine::Phase;

/// An operation was invoked that the current session cannot honour.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// The operation is not valid in the current phase.
    #[error("cannot {operation} while {phase}")]
    InvalidState {
        operation: &'static str,
        phase: Phase,
    },
    /// There is no question at the current index.
    #[error("no question at index {index} (session has {total})")]
    OutOfRange { index: usize, total: usize },
    /// An answer was already given and the advance has not happened yet.
    #[error("answer already submitted, waiting for the next question")]
    AnswerPending,
}

/// A question record that breaks the bank's invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BankError {
    #[error("question {index} has {count} answer(s), need at least 2")]
    TooFewAnswers { index: usize, count: usize },
    #[error("question {index} marks answer {correct} as correct but only has {count}")]
    CorrectAnswerOutOfRange {
        index: usize,
        correct: usize,
        count: usize,
    },
    #[error("question {index} has neither text nor an image")]
    MissingPrompt { index: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_state_names_operation_and_phase() {
        let err = QuizError::InvalidState {
            operation: "submit an answer",
            phase: Phase::Finished,
        };
        assert_eq!(err.to_string(), "cannot submit an answer while finished");
    }

    #[test]
    fn bank_error_messages() {
        let err = BankError::CorrectAnswerOutOfRange {
            index: 3,
            correct: 4,
            count: 4,
        };
        assert!(err.to_string().contains("question 3"));
        assert!(err.to_string().contains("answer 4"));
    }
}
