//! In-process publish/subscribe relay between sibling components.
//!
//! SYSTEM CONTEXT
//! ==============
//! The review form publishes and the product display subscribes, without
//! either holding a reference to the other. One relay is built by the root
//! component and shared through Leptos context.
//!
//! Delivery is synchronous: `publish` runs every matching handler, in
//! registration order, before returning. A panicking handler unwinds into
//! the publisher and later handlers for that message are skipped; the
//! registry itself stays usable.

#[cfg(test)]
#[path = "relay_test.rs"]
mod relay_test;

use std::sync::{Arc, PoisonError, RwLock};

use uuid::Uuid;

use crate::state::review::Review;

/// Event names a handler can subscribe to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RelayEvent {
    ReviewSubmitted,
}

/// A published event together with its payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RelayMessage {
    ReviewSubmitted(Review),
}

impl RelayMessage {
    pub fn event(&self) -> RelayEvent {
        match self {
            Self::ReviewSubmitted(_) => RelayEvent::ReviewSubmitted,
        }
    }
}

/// Handle returned by [`EventRelay::subscribe`], used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

type Handler = Arc<dyn Fn(&RelayMessage) + Send + Sync>;

struct Subscription {
    id: SubscriptionId,
    event: RelayEvent,
    handler: Handler,
}

/// Shared publish/subscribe channel. Clones share one registry.
#[derive(Clone, Default)]
pub struct EventRelay {
    subscriptions: Arc<RwLock<Vec<Subscription>>>,
}

impl std::fmt::Debug for EventRelay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventRelay")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

impl EventRelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for `event`.
    pub fn subscribe<F>(&self, event: RelayEvent, handler: F) -> SubscriptionId
    where
        F: Fn(&RelayMessage) + Send + Sync + 'static,
    {
        let id = SubscriptionId(Uuid::new_v4());
        self.write().push(Subscription { id, event, handler: Arc::new(handler) });
        log::debug!("relay: subscribed to {event:?}");
        id
    }

    /// Register a handler that receives submitted reviews.
    pub fn on_review_submitted<F>(&self, handler: F) -> SubscriptionId
    where
        F: Fn(&Review) + Send + Sync + 'static,
    {
        self.subscribe(RelayEvent::ReviewSubmitted, move |message| match message {
            RelayMessage::ReviewSubmitted(review) => handler(review),
        })
    }

    /// Remove a subscription. Returns `false` if it was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscriptions = self.write();
        let before = subscriptions.len();
        subscriptions.retain(|s| s.id != id);
        subscriptions.len() != before
    }

    /// Deliver `message` to every handler subscribed to its event.
    ///
    /// Returns the number of handlers invoked. Subscriptions added or removed
    /// by a handler take effect from the next publish.
    pub fn publish(&self, message: RelayMessage) -> usize {
        let event = message.event();
        let handlers: Vec<Handler> = self
            .read()
            .iter()
            .filter(|s| s.event == event)
            .map(|s| Arc::clone(&s.handler))
            .collect();
        log::debug!("relay: publishing {event:?} to {} handler(s)", handlers.len());
        for handler in &handlers {
            handler(&message);
        }
        handlers.len()
    }

    pub fn subscriber_count(&self) -> usize {
        self.read().len()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Vec<Subscription>> {
        self.subscriptions.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Vec<Subscription>> {
        self.subscriptions.write().unwrap_or_else(PoisonError::into_inner)
    }
}
