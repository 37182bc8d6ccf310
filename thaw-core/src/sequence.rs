//! Latest-response-wins tokens for overlapping requests.
//!
//! Fetches cannot be aborted, so every request takes a ticket when it
//! starts and its result is applied only if no newer ticket was issued in
//! the meantime.

use std::cell::Cell;
use std::rc::Rc;

/// A position in a [`RequestSequence`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Monotonic per-component request counter.
///
/// Clones share the same counter, so a clone can be moved into a spawned
/// task and still see tickets issued later by the component.
#[derive(Debug, Clone, Default)]
pub struct RequestSequence {
    latest: Rc<Cell<u64>>,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request; every earlier ticket becomes stale.
    pub fn issue(&self) -> Ticket {
        let next = self.latest.get() + 1;
        self.latest.set(next);
        Ticket(next)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.get() == ticket.0
    }
}

impl PartialEq for RequestSequence {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.latest, &other.latest)
    }
}
