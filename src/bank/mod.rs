pub mod loader;

use serde::{Deserialize, Serialize};

use crate::error::BankError;

/// A single multiple-choice question.
///
/// The prompt is text, an image reference, or both. Field names on the wire
/// are camelCase (`correctAnswer`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRecord {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub question: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub answers: Vec<String>,
    pub correct_answer: usize,
}

impl QuestionRecord {
    pub fn text(question: &str, answers: &[&str], correct_answer: usize) -> Self {
        Self {
            question: question.to_string(),
            image: None,
            answers: answers.iter().map(|a| a.to_string()).collect(),
            correct_answer,
        }
    }

    /// Whether `selected` is the right answer. Out-of-range picks are wrong.
    pub fn is_correct(&self, selected: usize) -> bool {
        selected == self.correct_answer
    }

    /// Text of the correct answer. Always `Some` for records in a bank.
    pub fn correct_text(&self) -> Option<&str> {
        self.answers.get(self.correct_answer).map(String::as_str)
    }

    fn validate(&self, index: usize) -> Result<(), BankError> {
        if self.question.trim().is_empty() && self.image.is_none() {
            return Err(BankError::MissingPrompt { index });
        }
        if self.answers.len() < 2 {
            return Err(BankError::TooFewAnswers {
                index,
                count: self.answers.len(),
            });
        }
        if self.correct_answer >= self.answers.len() {
            return Err(BankError::CorrectAnswerOutOfRange {
                index,
                correct: self.correct_answer,
                count: self.answers.len(),
            });
        }
        Ok(())
    }
}

/// The full pool of questions a game draws from. Every record has been
/// validated, so `correct_answer` always indexes into `answers`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionBank {
    records: Vec<QuestionRecord>,
}

impl QuestionBank {
    pub fn new(records: Vec<QuestionRecord>) -> Result<Self, BankError> {
        for (i, record) in records.iter().enumerate() {
            record.validate(i)?;
        }
        Ok(Self { records })
    }

    pub fn records(&self) -> &[QuestionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_records() {
        let bank = QuestionBank::new(vec![
            QuestionRecord::text("a?", &["x", "y"], 1),
            QuestionRecord::text("b?", &["x", "y", "z"], 0),
        ])
        .unwrap();
        assert_eq!(bank.len(), 2);
        assert!(!bank.is_empty());
    }

    #[test]
    fn empty_bank_is_valid() {
        let bank = QuestionBank::new(Vec::new()).unwrap();
        assert!(bank.is_empty());
    }

    #[test]
    fn rejects_single_answer() {
        let err = QuestionBank::new(vec![QuestionRecord::text("a?", &["only"], 0)]).unwrap_err();
        assert_eq!(err, BankError::TooFewAnswers { index: 0, count: 1 });
    }

    #[test]
    fn rejects_correct_answer_past_end() {
        let err = QuestionBank::new(vec![
            QuestionRecord::text("ok?", &["x", "y"], 0),
            QuestionRecord::text("bad?", &["x", "y"], 2),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            BankError::CorrectAnswerOutOfRange {
                index: 1,
                correct: 2,
                count: 2
            }
        );
    }

    #[test]
    fn rejects_missing_prompt() {
        let err = QuestionBank::new(vec![QuestionRecord::text("  ", &["x", "y"], 0)]).unwrap_err();
        assert_eq!(err, BankError::MissingPrompt { index: 0 });
    }

    #[test]
    fn image_only_prompt_is_enough() {
        let record = QuestionRecord {
            question: String::new(),
            image: Some("images/caboose.jpg".to_string()),
            answers: vec!["Caboose".to_string(), "Hopper".to_string()],
            correct_answer: 0,
        };
        assert!(QuestionBank::new(vec![record]).is_ok());
    }

    #[test]
    fn out_of_range_pick_is_incorrect() {
        let record = QuestionRecord::text("a?", &["x", "y"], 1);
        assert!(record.is_correct(1));
        assert!(!record.is_correct(0));
        assert!(!record.is_correct(99));
        assert_eq!(record.correct_text(), Some("y"));
    }
}
