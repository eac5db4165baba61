use std::io::Write;

use trivia::bank::{QuestionRecord, loader};

#[test]
fn load_reads_text_and_image_questions() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[
            {{"question": "Which car carries grain?", "answers": ["Covered hopper", "Reefer"], "correctAnswer": 0}},
            {{"image": "images/caboose.jpg", "answers": ["Tender", "Caboose", "Gondola"], "correctAnswer": 1}}
        ]"#
    )
    .unwrap();

    let bank = loader::load(file.path()).unwrap();
    assert_eq!(bank.len(), 2);

    let image = &bank.records()[1];
    assert_eq!(image.image.as_deref(), Some("images/caboose.jpg"));
    assert!(image.question.is_empty());
    assert_eq!(image.correct_text(), Some("Caboose"));
}

#[test]
fn load_rejects_bad_correct_index() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[{{"question": "?", "answers": ["a", "b"], "correctAnswer": 5}}]"#
    )
    .unwrap();

    let err = loader::load(file.path()).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("invalid question bank"));
    assert!(message.contains("answer 5"));
}

#[test]
fn load_empty_array_is_an_empty_bank() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "[]").unwrap();
    assert!(loader::load(file.path()).unwrap().is_empty());
}

#[test]
fn serialized_records_load_back() {
    let records = vec![
        QuestionRecord::text("Which car is at the end?", &["Caboose", "Hopper"], 0),
        QuestionRecord::text("Which car is refrigerated?", &["Gondola", "Reefer"], 1),
    ];
    let json = serde_json::to_string(&records).unwrap();
    assert!(json.contains("correctAnswer"));
    assert!(!json.contains("image"));

    let bank = loader::parse(&json).unwrap();
    assert_eq!(bank.records(), records.as_slice());
}
