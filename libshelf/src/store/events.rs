//! Store event stream
//!
//! An in-process event bus that fans store activity out to front-ends: the
//! loading flag for a busy overlay, operation outcomes for refresh and error
//! surfaces.
//!
//! Built on `tokio::sync::broadcast`: emitting never blocks, events are
//! dropped when nobody is subscribed, and lagging subscribers lose the oldest
//! events first.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Event receiver type alias
pub type EventReceiver = broadcast::Receiver<Event>;

/// Event bus for distributing store events
#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<Event>,
}

impl EventBus {
    /// Create a new event bus with the specified per-subscriber capacity
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribe to events emitted after this call
    pub fn subscribe(&self) -> EventReceiver {
        self.sender.subscribe()
    }

    /// Emit an event to all subscribers (non-blocking)
    pub fn emit(&self, event: Event) {
        // send() errs when no receivers exist, which is fine; nobody
        // listening means nothing to deliver
        let _ = self.sender.send(event);
    }

    /// Number of active subscribers, for diagnostics only
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

/// Events emitted by the store
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// The global loading flag changed
    LoadingChanged { loading: bool },

    /// A fetch-all was invoked
    FetchStarted,

    /// Fetch-all resolved; the collection now holds `count` items
    FetchCompleted { count: usize },

    /// Fetch-all failed
    FetchFailed { error: String },

    /// A create resolved and the item was appended
    ItemCreated { id: i64, title: String },

    /// An update resolved and the entry was replaced
    ItemUpdated { id: i64 },

    /// A delete resolved and the entry was removed
    ItemDeleted { id: i64 },

    /// A create or update was rejected, locally or remotely
    MutationRejected { error: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_event_emission_and_subscription() {
        let bus = EventBus::new(10);
        let mut receiver = bus.subscribe();

        bus.emit(Event::ItemCreated {
            id: 2,
            title: "B".to_string(),
        });

        match receiver.recv().await.unwrap() {
            Event::ItemCreated { id, title } => {
                assert_eq!(id, 2);
                assert_eq!(title, "B");
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_multiple_subscribers() {
        let bus = EventBus::new(10);
        let mut receiver1 = bus.subscribe();
        let mut receiver2 = bus.subscribe();

        bus.emit(Event::ItemDeleted { id: 5 });

        assert!(matches!(
            receiver1.recv().await.unwrap(),
            Event::ItemDeleted { id: 5 }
        ));
        assert!(matches!(
            receiver2.recv().await.unwrap(),
            Event::ItemDeleted { id: 5 }
        ));
    }

    #[tokio::test]
    async fn test_no_subscribers() {
        let bus = EventBus::new(10);

        // Emitting with no subscribers must not panic or block
        bus.emit(Event::FetchStarted);
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[tokio::test]
    async fn test_event_serialization() {
        let event = Event::FetchFailed {
            error: "Network error: timeout".to_string(),
        };

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("fetch_failed"));
        assert!(json.contains("timeout"));

        let deserialized: Event = serde_json::from_str(&json).unwrap();
        match deserialized {
            Event::FetchFailed { error } => assert_eq!(error, "Network error: timeout"),
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_subscriber_count() {
        let bus = EventBus::new(10);
        assert_eq!(bus.subscriber_count(), 0);

        let _r1 = bus.subscribe();
        assert_eq!(bus.subscriber_count(), 1);

        let _r2 = bus.subscribe();
        assert_eq!(bus.subscriber_count(), 2);
    }
}
