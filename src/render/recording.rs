use std::sync::{Mutex, PoisonError};

use super::Renderer;
use crate::engine::{AnswerResult, Screen};
use crate::events::Event;

/// A renderer for tests. Remembers every callback in order.
#[derive(Default)]
pub struct RecordingRenderer {
    events: Mutex<Vec<Event>>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<Event> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn screens(&self) -> Vec<Screen> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::StateChanged(screen) => Some(screen),
                Event::AnswerResult(_) => None,
            })
            .collect()
    }

    pub fn answers(&self) -> Vec<AnswerResult> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::AnswerResult(result) => Some(result),
                Event::StateChanged(_) => None,
            })
            .collect()
    }
}

impl Renderer for RecordingRenderer {
    fn on_state_changed(&self, screen: &Screen) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Event::StateChanged(screen.clone()));
    }

    fn on_answer_result(&self, result: &AnswerResult) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Event::AnswerResult(*result));
    }
}
