//! Loading question banks from JSON.

use anyhow::{Context, Result};
use std::path::Path;

use super::{QuestionBank, QuestionRecord};

/// The bundled freight-train question set.
const BUILTIN: &str = include_str!("../../assets/questions.json");

/// Parse a JSON array of question records and validate it.
pub fn parse(json: &str) -> Result<QuestionBank> {
    let records: Vec<QuestionRecord> =
        serde_json::from_str(json).context("failed to parse question bank")?;
    Ok(QuestionBank::new(records)?)
}

/// Read and validate a bank file.
pub fn load(path: &Path) -> Result<QuestionBank> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read question bank {}", path.display()))?;
    let bank = parse(&json).with_context(|| format!("invalid question bank {}", path.display()))?;
    tracing::debug!(path = %path.display(), questions = bank.len(), "loaded question bank");
    Ok(bank)
}

/// The question set shipped with the binary.
pub fn builtin() -> Result<QuestionBank> {
    parse(BUILTIN).context("built-in question bank is invalid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_bank_is_valid_and_larger_than_a_game() {
        let bank = builtin().unwrap();
        assert!(bank.len() > crate::consts::QUESTIONS_PER_GAME);
    }

    #[test]
    fn builtin_bank_has_an_image_question() {
        let bank = builtin().unwrap();
        assert!(bank.records().iter().any(|r| r.image.is_some()));
    }

    #[test]
    fn parse_reads_camel_case_fields() {
        let bank = parse(
            r#"[{"question": "Which?", "answers": ["a", "b", "c"], "correctAnswer": 2}]"#,
        )
        .unwrap();
        assert_eq!(bank.records()[0].correct_answer, 2);
        assert!(bank.records()[0].image.is_none());
    }

    #[test]
    fn parse_rejects_invalid_record() {
        let err = parse(r#"[{"question": "Which?", "answers": ["a"], "correctAnswer": 0}]"#)
            .unwrap_err();
        assert!(format!("{err:#}").contains("at least 2"));
    }

    #[test]
    fn parse_rejects_malformed_json() {
        assert!(parse("{not json").is_err());
    }

    #[test]
    fn load_missing_file_names_path() {
        let err = load(Path::new("/nonexistent/questions.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/questions.json"));
    }
}
