//! Session change subscriptions.

use super::state::SessionEvent;

/// Receives every change a session publishes.
///
/// Closures taking `&SessionEvent` implement this trait.
pub trait SessionObserver {
    /// Called after the session state changed.
    fn on_session_event(&mut self, event: &SessionEvent);
}

impl<F: FnMut(&SessionEvent)> SessionObserver for F {
    fn on_session_event(&mut self, event: &SessionEvent) {
        self(event);
    }
}

/// Identifies a subscription so that it can be removed again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(pub(crate) u64);
