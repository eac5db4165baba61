//! Decoupled event bus between the game and whatever draws it.
//!
//! The game emits via [`EventBus::emit`]; renderers subscribe via
//! [`EventBus::subscribe`]. Built on [`tokio::sync::broadcast`] so several
//! renderers can react independently.

use tokio::sync::broadcast;

use crate::engine::{AnswerResult, Screen};

/// Notifications the game sends to renderers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The phase changed or a new question became active.
    StateChanged(Screen),
    /// An answer was scored. Always sent before the matching advance.
    AnswerResult(AnswerResult),
}

/// A broadcast channel that any component can emit to or subscribe from.
#[derive(Debug)]
pub struct EventBus {
    tx: broadcast::Sender<Event>,
}

impl EventBus {
    /// Create a new event bus with the given channel capacity.
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Emit an event to all current subscribers.
    /// Returns the number of receivers that will see it.
    pub fn emit(&self, event: Event) -> usize {
        self.tx.send(event).unwrap_or(0)
    }

    /// Subscribe to events. Returns a receiver that yields all
    /// future events (does not replay past ones).
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.tx.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(crate::consts::EVENT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Summary;

    fn answered() -> Event {
        Event::AnswerResult(AnswerResult {
            was_correct: true,
            selected: 2,
            correct_index: 2,
        })
    }

    #[tokio::test]
    async fn emit_reaches_subscriber() {
        let bus = EventBus::default();
        let mut rx = bus.subscribe();

        bus.emit(answered());

        assert_eq!(rx.recv().await.unwrap(), answered());
    }

    #[tokio::test]
    async fn multiple_subscribers_receive_event() {
        let bus = EventBus::default();
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        let finished = Event::StateChanged(Screen::Finished(Summary::new(3, 10)));
        bus.emit(finished.clone());

        assert_eq!(rx1.recv().await.unwrap(), finished);
        assert_eq!(rx2.recv().await.unwrap(), finished);
    }

    #[test]
    fn emit_without_subscribers_returns_zero() {
        let bus = EventBus::default();
        assert_eq!(bus.emit(answered()), 0);
    }

    #[test]
    fn emit_with_subscriber_returns_count() {
        let bus = EventBus::default();
        let _rx1 = bus.subscribe();
        let _rx2 = bus.subscribe();

        assert_eq!(bus.emit(answered()), 2);
    }
}
