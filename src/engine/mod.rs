//! The quiz state machine.
//!
//! [`QuizEngine`] is synchronous and knows nothing about time. Answering a
//! question hands back an [`AdvanceTicket`]; whoever owns the clock presents
//! it to [`QuizEngine::advance`] once the feedback delay is over. Tickets from
//! a session that has since been replaced are ignored.

mod session;
pub mod summary;

use rand::Rng;
use std::fmt;
use tracing::{debug, info};

use crate::bank::{QuestionBank, QuestionRecord};
use crate::error::QuizError;
use session::Session;
pub use summary::{Summary, Tier};

/// Coarse state of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No game has been started yet.
    Idle,
    Playing,
    Finished,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Idle => "idle",
            Phase::Playing => "playing",
            Phase::Finished => "finished",
        };
        f.write_str(name)
    }
}

/// The question currently on screen, with enough context to draw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView {
    pub question: QuestionRecord,
    /// 1-based position in the session.
    pub number: usize,
    pub total: usize,
    pub score: usize,
}

/// What the renderer should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Start,
    Playing(QuestionView),
    Finished(Summary),
}

/// Feedback for a submitted answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerResult {
    pub was_correct: bool,
    pub selected: usize,
    pub correct_index: usize,
}

/// Permission to advance the session that issued it, once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvanceTicket {
    generation: u64,
}

impl AdvanceTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Snapshot of how far the session has got.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub answered: usize,
    pub total: usize,
    pub score: usize,
}

pub struct QuizEngine {
    bank: QuestionBank,
    limit: usize,
    generation: u64,
    session: Option<Session>,
}

impl QuizEngine {
    /// `limit` caps how many questions each game draws.
    pub fn new(bank: QuestionBank, limit: usize) -> Self {
        Self {
            bank,
            limit,
            generation: 0,
            session: None,
        }
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn phase(&self) -> Phase {
        match &self.session {
            None => Phase::Idle,
            Some(s) if s.is_finished() => Phase::Finished,
            Some(_) => Phase::Playing,
        }
    }

    /// Discard any current session and draw a fresh one.
    ///
    /// An empty bank yields a session with no questions, which is finished
    /// straight away.
    pub fn start<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Screen {
        self.generation += 1;
        let session = Session::draw(&self.bank, self.limit, self.generation, rng);
        info!(
            generation = self.generation,
            questions = session.total(),
            "session started"
        );
        self.session = Some(session);
        self.screen()
    }

    pub fn current_question(&self) -> Result<&QuestionRecord, QuizError> {
        match &self.session {
            Some(s) => s.current_question().ok_or(QuizError::OutOfRange {
                index: s.current,
                total: s.total(),
            }),
            None => Err(QuizError::OutOfRange { index: 0, total: 0 }),
        }
    }

    /// Score `selected` against the current question.
    ///
    /// The session does not move on until [`advance`](Self::advance) is
    /// called with the returned ticket; until then further answers are
    /// refused with [`QuizError::AnswerPending`].
    pub fn submit_answer(
        &mut self,
        selected: usize,
    ) -> Result<(AnswerResult, AdvanceTicket), QuizError> {
        let phase = self.phase();
        let session = match self.session.as_mut() {
            Some(s) if phase == Phase::Playing => s,
            _ => {
                return Err(QuizError::InvalidState {
                    operation: "submit an answer",
                    phase,
                });
            }
        };
        if session.awaiting_advance {
            return Err(QuizError::AnswerPending);
        }

        let question = &session.questions[session.current];
        let result = AnswerResult {
            was_correct: question.is_correct(selected),
            selected,
            correct_index: question.correct_answer,
        };
        if result.was_correct {
            session.score += 1;
        }
        session.awaiting_advance = true;

        debug!(
            generation = session.generation,
            question = session.current + 1,
            selected,
            correct = result.was_correct,
            score = session.score,
            "answer submitted"
        );

        Ok((
            result,
            AdvanceTicket {
                generation: session.generation,
            },
        ))
    }

    /// Move past the answered question.
    ///
    /// Returns the new screen, or `None` if the ticket is stale (its session
    /// was replaced) or already used.
    pub fn advance(&mut self, ticket: AdvanceTicket) -> Option<Screen> {
        let session = match self.session.as_mut() {
            Some(s) if s.generation == ticket.generation && s.awaiting_advance => s,
            _ => {
                debug!(
                    ticket = ticket.generation,
                    current = self.generation,
                    "ignoring stale advance"
                );
                return None;
            }
        };

        session.awaiting_advance = false;
        session.current += 1;
        if session.is_finished() {
            info!(
                generation = session.generation,
                score = session.score,
                total = session.total(),
                "session finished"
            );
        }
        Some(self.screen())
    }

    pub fn summary(&self) -> Result<Summary, QuizError> {
        match &self.session {
            Some(s) if s.is_finished() => Ok(Summary::new(s.score, s.total())),
            _ => Err(QuizError::InvalidState {
                operation: "summarize",
                phase: self.phase(),
            }),
        }
    }

    pub fn screen(&self) -> Screen {
        match &self.session {
            None => Screen::Start,
            Some(s) => match s.current_question() {
                Some(question) => Screen::Playing(QuestionView {
                    question: question.clone(),
                    number: s.current + 1,
                    total: s.total(),
                    score: s.score,
                }),
                None => Screen::Finished(Summary::new(s.score, s.total())),
            },
        }
    }

    pub fn progress(&self) -> Progress {
        match &self.session {
            Some(s) => Progress {
                answered: s.current,
                total: s.total(),
                score: s.score,
            },
            None => Progress {
                answered: 0,
                total: 0,
                score: 0,
            },
        }
    }

    pub fn score(&self) -> usize {
        self.progress().score
    }

    pub fn current_index(&self) -> usize {
        self.progress().answered
    }

    pub fn is_awaiting_advance(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.awaiting_advance)
    }
}
