use rand::Rng;
use rand::seq::SliceRandom;

use crate::bank::{QuestionBank, QuestionRecord};

/// One playthrough. Replaced wholesale on every start.
#[derive(Debug, Clone)]
pub(crate) struct Session {
    pub(crate) questions: Vec<QuestionRecord>,
    pub(crate) current: usize,
    pub(crate) score: usize,
    pub(crate) awaiting_advance: bool,
    pub(crate) generation: u64,
}

impl Session {
    /// Shuffle the whole bank, then keep the first `limit` questions.
    pub(crate) fn draw<R: Rng + ?Sized>(
        bank: &QuestionBank,
        limit: usize,
        generation: u64,
        rng: &mut R,
    ) -> Self {
        let mut questions = bank.records().to_vec();
        questions.shuffle(rng);
        questions.truncate(limit);
        Self {
            questions,
            current: 0,
            score: 0,
            awaiting_advance: false,
            generation,
        }
    }

    pub(crate) fn total(&self) -> usize {
        self.questions.len()
    }

    pub(crate) fn is_finished(&self) -> bool {
        self.current >= self.questions.len()
    }

    pub(crate) fn current_question(&self) -> Option<&QuestionRecord> {
        self.questions.get(self.current)
    }
}
