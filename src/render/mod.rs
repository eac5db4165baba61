pub mod recording;
pub mod terminal;

use std::sync::Arc;
use tokio::sync::broadcast::{self, error::RecvError};
use tokio::task::JoinHandle;

use crate::engine::{AnswerResult, Screen};
use crate::events::Event;

/// Draws whatever the game decides. Never mutates game state.
pub trait Renderer: Send + Sync {
    /// The phase changed or a new question is active.
    fn on_state_changed(&self, screen: &Screen);

    /// An answer was scored; called before the screen moves on.
    fn on_answer_result(&self, result: &AnswerResult);
}

/// Route one event to the matching renderer callback.
pub fn dispatch(renderer: &dyn Renderer, event: &Event) {
    match event {
        Event::StateChanged(screen) => renderer.on_state_changed(screen),
        Event::AnswerResult(result) => renderer.on_answer_result(result),
    }
}

/// Feed every event from `rx` to `renderer` until the bus closes.
pub fn attach(mut rx: broadcast::Receiver<Event>, renderer: Arc<dyn Renderer>) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            match rx.recv().await {
                Ok(event) => dispatch(renderer.as_ref(), &event),
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "renderer fell behind, events dropped");
                }
                Err(RecvError::Closed) => break,
            }
        }
    })
}
