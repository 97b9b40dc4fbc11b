//! Topic-based event bus implementation.

use std::collections::HashMap;

use tokio::sync::broadcast;

use super::types::{AttributesEvent, HeroEvent};

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum Topic {
    /// Hero record changes (equip, level-up, deletion)
    Hero,
    /// Attribute recalculation notifications
    Attributes,
}

/// Event wrapper that carries the topic and typed event
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Hero(HeroEvent),
    Attributes(AttributesEvent),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Hero(_) => Topic::Hero,
            Event::Attributes(_) => Topic::Attributes,
        }
    }
}

/// Topic-based event bus
///
/// Allows consumers to subscribe to specific topics and only receive
/// events they care about. Publishing never blocks; events are best-effort
/// and subscribers that fall behind observe `RecvError::Lagged`.
#[derive(Clone)]
pub struct EventBus {
    hero: broadcast::Sender<Event>,
    attributes: broadcast::Sender<Event>,
}

impl EventBus {
    /// Largest per-topic buffer; broadcast channels preallocate every slot.
    pub const MAX_CAPACITY: usize = 1 << 16;

    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic
    ///
    /// Capacity is clamped to `1..=MAX_CAPACITY`.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.clamp(1, Self::MAX_CAPACITY);
        Self {
            hero: broadcast::channel(capacity).0,
            attributes: broadcast::channel(capacity).0,
        }
    }

    fn sender(&self, topic: Topic) -> &broadcast::Sender<Event> {
        match topic {
            Topic::Hero => &self.hero,
            Topic::Attributes => &self.attributes,
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: Event) {
        let topic = event.topic();
        if self.sender(topic).send(event).is_err() {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    ///
    /// Returns a receiver that will only receive events for that topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.sender(topic).subscribe()
    }

    /// Subscribe to multiple topics
    ///
    /// Returns receivers for each requested topic.
    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> HashMap<Topic, broadcast::Receiver<Event>> {
        topics
            .iter()
            .map(|&topic| (topic, self.subscribe(topic)))
            .collect()
    }

    /// Number of live receivers on `topic`.
    pub fn subscriber_count(&self, topic: Topic) -> usize {
        self.sender(topic).receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
