//! Text-changed notifications
//!
//! - Explicit registration on the buffer that owns the text (no global bus)
//! - Delivery is immediate and synchronous, inside the mutating call
//! - Every registered handler sees every event, in registration order

use std::fmt;

/// Notification that a buffer's content changed
#[derive(Debug, Clone, PartialEq)]
pub struct TextChangedEvent {
    /// Content after the change
    pub text: String,
    /// Buffer revision after the change
    pub revision: u64,
    /// Frame time of the change (seconds)
    pub timestamp: f64,
}

/// Text-changed handler trait
pub trait TextChangedHandler {
    /// Handle a content change
    fn on_text_changed(&mut self, event: &TextChangedEvent);
}

impl<F> TextChangedHandler for F
where
    F: FnMut(&TextChangedEvent),
{
    fn on_text_changed(&mut self, event: &TextChangedEvent) {
        self(event);
    }
}

/// Handle returned by [`TextEventDispatcher::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Registered text-changed handlers
#[derive(Default)]
pub struct TextEventDispatcher {
    handlers: Vec<(SubscriptionId, Box<dyn TextChangedHandler>)>,
    next_id: u64,
}

impl TextEventDispatcher {
    /// Create a dispatcher with no handlers
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler
    pub fn subscribe(&mut self, handler: Box<dyn TextChangedHandler>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.handlers.push((id, handler));
        id
    }

    /// Remove a handler; returns false if it was not registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(handler_id, _)| *handler_id != id);
        self.handlers.len() != before
    }

    /// Deliver `event` to every handler
    pub fn dispatch(&mut self, event: &TextChangedEvent) {
        for (_, handler) in &mut self.handlers {
            handler.on_text_changed(event);
        }
    }

    /// Number of registered handlers
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether no handler is registered
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl fmt::Debug for TextEventDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextEventDispatcher")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct CountingHandler {
        seen: Rc<RefCell<Vec<u64>>>,
    }

    impl TextChangedHandler for CountingHandler {
        fn on_text_changed(&mut self, event: &TextChangedEvent) {
            self.seen.borrow_mut().push(event.revision);
        }
    }

    fn event(revision: u64) -> TextChangedEvent {
        TextChangedEvent {
            text: "A".to_string(),
            revision,
            timestamp: 0.0,
        }
    }

    #[test]
    fn test_all_handlers_receive_event() {
        let mut dispatcher = TextEventDispatcher::new();
        let first = Rc::new(RefCell::new(Vec::new()));
        let second = Rc::new(RefCell::new(Vec::new()));

        dispatcher.subscribe(Box::new(CountingHandler { seen: first.clone() }));
        let sink = second.clone();
        dispatcher.subscribe(Box::new(move |e: &TextChangedEvent| sink.borrow_mut().push(e.revision)));

        dispatcher.dispatch(&event(1));
        dispatcher.dispatch(&event(2));

        assert_eq!(*first.borrow(), vec![1, 2]);
        assert_eq!(*second.borrow(), vec![1, 2]);
    }

    #[test]
    fn test_unsubscribe() {
        let mut dispatcher = TextEventDispatcher::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let id = dispatcher.subscribe(Box::new(CountingHandler { seen: seen.clone() }));

        assert!(dispatcher.unsubscribe(id));
        assert!(!dispatcher.unsubscribe(id));
        assert!(dispatcher.is_empty());

        dispatcher.dispatch(&event(1));
        assert!(seen.borrow().is_empty());
    }
}
