//! Async driver around [`QuizEngine`].
//!
//! Owns the feedback delay: after an answer is scored the game waits
//! `advance_delay` on a spawned task before moving on. Every change is
//! published on the [`EventBus`].

use rand::rngs::StdRng;
use rand::{Rng, RngExt, SeedableRng};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

use crate::bank::{QuestionBank, QuestionRecord};
use crate::config::GameConfig;
use crate::engine::{AnswerResult, Phase, Progress, QuizEngine, Screen, Summary};
use crate::error::QuizError;
use crate::events::{Event, EventBus};

pub struct Game {
    engine: Arc<Mutex<QuizEngine>>,
    bus: Arc<EventBus>,
    delay: Duration,
    /// The scheduled advance for the last answer, if any.
    pending: Mutex<Option<JoinHandle<()>>>,
    finished: Arc<AtomicUsize>,
    rng: Mutex<StdRng>,
}

impl Game {
    pub fn new(bank: QuestionBank, config: &GameConfig) -> Self {
        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        tracing::debug!(seed, "question shuffle seeded");
        Self {
            engine: Arc::new(Mutex::new(QuizEngine::new(
                bank,
                config.questions_per_game,
            ))),
            bus: Arc::new(EventBus::new(config.event_capacity)),
            delay: config.advance_delay,
            pending: Mutex::new(None),
            finished: Arc::new(AtomicUsize::new(0)),
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.bus.subscribe()
    }

    /// Start (or restart) with the game's own RNG, seeded from
    /// [`GameConfig::seed`] when set.
    pub fn start(&self) -> Screen {
        let mut rng = lock(&self.rng);
        self.start_with(&mut *rng)
    }

    /// Start (or restart), drawing questions with `rng`.
    ///
    /// Any advance still waiting from the previous session is cancelled. If
    /// it already fired and is queued on the engine lock, the engine rejects
    /// its ticket.
    pub fn start_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Screen {
        if let Some(handle) = lock(&self.pending).take() {
            handle.abort();
        }
        let screen = lock(&self.engine).start(rng);
        if matches!(screen, Screen::Finished(_)) {
            self.finished.fetch_add(1, Ordering::Relaxed);
        }
        self.bus.emit(Event::StateChanged(screen.clone()));
        screen
    }

    /// Score an answer and schedule the move to the next screen.
    ///
    /// Must be called from within a tokio runtime.
    pub fn submit_answer(&self, selected: usize) -> Result<AnswerResult, QuizError> {
        let (result, ticket) = lock(&self.engine).submit_answer(selected)?;
        self.bus.emit(Event::AnswerResult(result));

        let engine = Arc::clone(&self.engine);
        let bus = Arc::clone(&self.bus);
        let finished = Arc::clone(&self.finished);
        let delay = self.delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let screen = lock(&engine).advance(ticket);
            if let Some(screen) = screen {
                if matches!(screen, Screen::Finished(_)) {
                    finished.fetch_add(1, Ordering::Relaxed);
                }
                bus.emit(Event::StateChanged(screen));
            }
        });
        *lock(&self.pending) = Some(handle);

        Ok(result)
    }

    pub fn phase(&self) -> Phase {
        lock(&self.engine).phase()
    }

    pub fn current_question(&self) -> Result<QuestionRecord, QuizError> {
        lock(&self.engine).current_question().cloned()
    }

    pub fn summary(&self) -> Result<Summary, QuizError> {
        lock(&self.engine).summary()
    }

    pub fn screen(&self) -> Screen {
        lock(&self.engine).screen()
    }

    pub fn progress(&self) -> Progress {
        lock(&self.engine).progress()
    }

    pub fn is_awaiting_advance(&self) -> bool {
        lock(&self.engine).is_awaiting_advance()
    }

    /// Games played through to the results screen.
    pub fn games_finished(&self) -> usize {
        self.finished.load(Ordering::Relaxed)
    }

    pub fn bank_size(&self) -> usize {
        lock(&self.engine).bank().len()
    }
}

impl Drop for Game {
    fn drop(&mut self) {
        if let Some(handle) = lock(&self.pending).take() {
            handle.abort();
        }
    }
}

/// The engine never panics while locked, but don't take the game down if
/// something else does.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bank(n: usize) -> QuestionBank {
        QuestionBank::new(
            (0..n)
                .map(|i| QuestionRecord::text(&format!("q{i}"), &["a", "b"], i % 2))
                .collect(),
        )
        .unwrap()
    }

    fn game(n: usize) -> Game {
        Game::new(bank(n), &GameConfig::default())
    }

    #[test]
    fn new_game_is_idle() {
        let game = game(3);
        assert_eq!(game.phase(), Phase::Idle);
        assert_eq!(game.screen(), Screen::Start);
        assert_eq!(game.bank_size(), 3);
    }

    #[test]
    fn same_seed_same_questions() {
        let config = GameConfig {
            seed: Some(11),
            ..GameConfig::default()
        };
        let a = Game::new(bank(20), &config);
        let b = Game::new(bank(20), &config);
        assert_eq!(a.start(), b.start());
    }

    #[test]
    fn start_emits_state_change() {
        let game = game(3);
        let mut rx = game.subscribe();
        let screen = game.start_with(&mut StdRng::seed_from_u64(9));
        assert_eq!(rx.try_recv().unwrap(), Event::StateChanged(screen));
    }

    #[tokio::test(start_paused = true)]
    async fn answer_result_precedes_advance() {
        let game = game(3);
        game.start_with(&mut StdRng::seed_from_u64(9));
        let mut rx = game.subscribe();

        let correct = game.current_question().unwrap().correct_answer;
        game.submit_answer(correct).unwrap();
        assert!(game.is_awaiting_advance());

        assert!(matches!(rx.recv().await.unwrap(), Event::AnswerResult(r) if r.was_correct));
        match rx.recv().await.unwrap() {
            Event::StateChanged(Screen::Playing(view)) => {
                assert_eq!(view.number, 2);
                assert_eq!(view.score, 1);
            }
            other => panic!("unexpected event {other:?}"),
        }
        assert!(!game.is_awaiting_advance());
    }

    #[tokio::test(start_paused = true)]
    async fn advance_waits_for_the_delay() {
        let game = game(3);
        game.start_with(&mut StdRng::seed_from_u64(9));
        game.submit_answer(0).unwrap();

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(game.progress().answered, 0);

        tokio::time::sleep(Duration::from_millis(600)).await;
        assert_eq!(game.progress().answered, 1);
    }
}
