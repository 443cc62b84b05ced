//! # Change Notification
//!
//! Each view node carries an [`Emitter`]. Mutations fire a [`ChangeEvent`]
//! on the changed node and then on each of its ancestors, so a listener
//! on a fragment observes every structural change beneath it.
//!
//! Dispatch is synchronous and follows registration order. Listeners only
//! receive a shared reference to the event, so they cannot mutate the tree
//! while a change is being dispatched.

use crate::node::NodeId;
use std::fmt;

/// What part of a node changed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeType {
    Children,
    Attributes,
    Text,
}

impl ChangeType {
    pub const fn event_name(self) -> &'static str {
        match self {
            ChangeType::Children => "change:children",
            ChangeType::Attributes => "change:attributes",
            ChangeType::Text => "change:text",
        }
    }
}

/// A change fired on `node`, delivered to it and its ancestors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeEvent {
    pub change: ChangeType,
    pub node: NodeId,
}

/// Handle returned by [`Emitter::on`], used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

pub type Listener = Box<dyn FnMut(&ChangeEvent)>;

#[derive(Default)]
pub struct Emitter {
    listeners: Vec<(ListenerId, ChangeType, Listener)>,
    next_id: u64,
}

impl Emitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to one kind of change
    pub fn on<F>(&mut self, change: ChangeType, listener: F) -> ListenerId
    where
        F: FnMut(&ChangeEvent) + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, change, Box::new(listener)));
        id
    }

    /// Unsubscribe, returns false if the listener was already gone
    pub fn off(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _, _)| *listener_id != id);
        self.listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Deliver `event` to matching listeners, returns how many were called
    pub(crate) fn emit(&mut self, event: &ChangeEvent) -> usize {
        let mut called = 0;
        for (_, change, listener) in &mut self.listeners {
            if *change == event.change {
                listener(event);
                called += 1;
            }
        }
        called
    }
}

impl fmt::Debug for Emitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Emitter")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn event(change: ChangeType) -> ChangeEvent {
        ChangeEvent {
            change,
            node: NodeId::from_index(0),
        }
    }

    #[test]
    fn test_emit_in_registration_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut emitter = Emitter::new();

        for tag in ["first", "second"] {
            let seen = Rc::clone(&seen);
            emitter.on(ChangeType::Children, move |_| seen.borrow_mut().push(tag));
        }

        assert_eq!(emitter.emit(&event(ChangeType::Children)), 2);
        assert_eq!(*seen.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn test_emit_filters_by_change_type() {
        let count = Rc::new(RefCell::new(0));
        let mut emitter = Emitter::new();
        let counter = Rc::clone(&count);
        emitter.on(ChangeType::Text, move |_| *counter.borrow_mut() += 1);

        assert_eq!(emitter.emit(&event(ChangeType::Children)), 0);
        assert_eq!(emitter.emit(&event(ChangeType::Text)), 1);
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_off() {
        let mut emitter = Emitter::new();
        let id = emitter.on(ChangeType::Children, |_| {});
        assert_eq!(emitter.listener_count(), 1);

        assert!(emitter.off(id));
        assert!(!emitter.off(id));
        assert_eq!(emitter.emit(&event(ChangeType::Children)), 0);
    }

    #[test]
    fn test_event_names() {
        assert_eq!(ChangeType::Children.event_name(), "change:children");
        assert_eq!(ChangeType::Attributes.event_name(), "change:attributes");
        assert_eq!(ChangeType::Text.event_name(), "change:text");
    }
}
