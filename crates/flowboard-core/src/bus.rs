//! In-process event bus.
//!
//! Decouples producers of semantic events from the dispatcher. Delivery is
//! synchronous, single-threaded and fire-and-forget: `publish` invokes every
//! subscriber for the event's kind, in subscription order, before returning.
//! The bus carries no business logic.

use crate::events::{EventKind, SemanticEvent};
use std::collections::HashMap;

/// Handle identifying a subscription, returned by [`EventBus::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

type Handler = Box<dyn FnMut(&SemanticEvent)>;

/// Synchronous publish/subscribe bus keyed by [`EventKind`].
#[derive(Default)]
pub struct EventBus {
    subscribers: HashMap<EventKind, Vec<(SubscriberId, Handler)>>,
    next_id: u64,
}

impl EventBus {
    /// Create an empty bus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for one event kind. Handlers for the same kind are
    /// invoked in subscription order.
    pub fn subscribe(&mut self, kind: EventKind, handler: Handler) -> SubscriberId {
        let id = SubscriberId(self.next_id);
        self.next_id += 1;
        self.subscribers.entry(kind).or_default().push((id, handler));
        id
    }

    /// Remove a subscription. Unsubscribing an id that was already removed
    /// (or never existed for this kind) is a no-op.
    pub fn unsubscribe(&mut self, kind: EventKind, id: SubscriberId) {
        if let Some(handlers) = self.subscribers.get_mut(&kind) {
            handlers.retain(|(handler_id, _)| *handler_id != id);
        }
    }

    /// Synchronously deliver an event to every subscriber of its kind.
    pub fn publish(&mut self, event: &SemanticEvent) {
        if let Some(handlers) = self.subscribers.get_mut(&event.kind()) {
            for (_, handler) in handlers.iter_mut() {
                handler(event);
            }
        }
    }

    /// Number of subscribers for a kind.
    pub fn subscriber_count(&self, kind: EventKind) -> usize {
        self.subscribers.get(&kind).map_or(0, Vec::len)
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let total: usize = self.subscribers.values().map(Vec::len).sum();
        f.debug_struct("EventBus")
            .field("subscribers", &total)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{EventTarget, TargetType};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn mouse_down() -> SemanticEvent {
        SemanticEvent::MouseDown {
            target: EventTarget::new(TargetType::Workspace, None),
        }
    }

    #[test]
    fn test_publish_reaches_subscriber() {
        let mut bus = EventBus::new();
        let seen = Rc::new(RefCell::new(0));
        let seen_clone = Rc::clone(&seen);
        bus.subscribe(EventKind::MouseDown, Box::new(move |_| {
            *seen_clone.borrow_mut() += 1;
        }));

        bus.publish(&mouse_down());
        bus.publish(&mouse_down());
        assert_eq!(*seen.borrow(), 2);
    }

    #[test]
    fn test_publish_only_matching_kind() {
        let mut bus = EventBus::new();
        let seen = Rc::new(RefCell::new(0));
        let seen_clone = Rc::clone(&seen);
        bus.subscribe(EventKind::KeyDown, Box::new(move |_| {
            *seen_clone.borrow_mut() += 1;
        }));

        bus.publish(&mouse_down());
        assert_eq!(*seen.borrow(), 0);
    }

    #[test]
    fn test_subscription_order_preserved() {
        let mut bus = EventBus::new();
        let order = Rc::new(RefCell::new(Vec::new()));
        for tag in 0..3 {
            let order = Rc::clone(&order);
            bus.subscribe(EventKind::MouseDown, Box::new(move |_| {
                order.borrow_mut().push(tag);
            }));
        }

        bus.publish(&mouse_down());
        assert_eq!(*order.borrow(), vec![0, 1, 2]);
    }

    #[test]
    fn test_unsubscribe_is_idempotent() {
        let mut bus = EventBus::new();
        let seen = Rc::new(RefCell::new(0));
        let seen_clone = Rc::clone(&seen);
        let id = bus.subscribe(EventKind::MouseDown, Box::new(move |_| {
            *seen_clone.borrow_mut() += 1;
        }));

        bus.unsubscribe(EventKind::MouseDown, id);
        bus.unsubscribe(EventKind::MouseDown, id);
        bus.publish(&mouse_down());
        assert_eq!(*seen.borrow(), 0);
        assert_eq!(bus.subscriber_count(EventKind::MouseDown), 0);
    }
}
