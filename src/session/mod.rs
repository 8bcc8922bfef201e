//! Swipe session controller.
//!
//! A [`SwipeSession`] buffers the swipes of one card entry and turns them into
//! a progressively revealed card: the first two swipes give the rank (or the
//! Joker), the third gives the suit.
//!
//! # Example
//!
//! ```
//! use card_picker::{Card, Rank, SessionState, Suit, Swipe, SwipeSession};
//!
//! let mut session = SwipeSession::default();
//! session.append_swipe(Swipe::Up);
//! session.append_swipe(Swipe::Right);
//! assert_eq!(session.state(), SessionState::RankKnown(Rank::Ace));
//!
//! session.append_swipe(Swipe::Right);
//! assert_eq!(session.commit(), Some(Card::new(Rank::Ace, Suit::Hearts)));
//! assert_eq!(session.state(), SessionState::Empty);
//! ```

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::card::{Card, Rank, Suit};
use crate::error::TimerError;
use crate::gesture::{self, Swipe};
use crate::options::SessionOptions;

mod observer;
pub mod state;
mod timer;

pub use observer::{SessionObserver, SubscriptionId};
pub use state::{ChangeKind, SessionEvent, SessionState};
pub use timer::{ScheduledTimer, TimerKind, TimerTicket};

use timer::Timers;

/// Controller for one card entry at a time.
///
/// The session owns the swipe buffer, the card being entered and the pending
/// timers. Every change is returned to the caller and published to the
/// subscribed observers.
pub struct SwipeSession {
    /// Session options.
    options: SessionOptions,
    /// Swipes buffered since the last reset.
    swipes: Vec<Swipe>,
    /// Current state.
    state: SessionState,
    /// Pending long-press and commit timers.
    timers: Timers,
    /// Subscribed observers.
    observers: Vec<(SubscriptionId, Box<dyn SessionObserver>)>,
    /// Next subscription ID to assign.
    next_subscription: u64,
}

impl SwipeSession {
    /// Creates an empty session.
    #[must_use]
    pub fn new(options: SessionOptions) -> Self {
        Self {
            options,
            swipes: Vec::new(),
            state: SessionState::Empty,
            timers: Timers::default(),
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Returns the session options.
    #[must_use]
    pub const fn options(&self) -> &SessionOptions {
        &self.options
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Returns the card shown for the current state, if any.
    #[must_use]
    pub const fn card(&self) -> Option<Card> {
        self.state.card()
    }

    /// Returns the swipes buffered since the last reset.
    #[must_use]
    pub fn swipes(&self) -> &[Swipe] {
        &self.swipes
    }

    /// Records a swipe and advances the card being entered.
    ///
    /// Swipes are ignored once the card is complete or the Joker, until the
    /// session is reset or committed. Returns the published event when the
    /// card changed.
    pub fn append_swipe(&mut self, swipe: Swipe) -> Option<SessionEvent> {
        if self.state.is_resolved() {
            tracing::trace!(?swipe, "card already resolved, ignoring swipe");
            return None;
        }

        tracing::debug!(?swipe, "swipe detected");
        self.swipes.push(swipe);

        let next = match (self.swipes.as_slice(), self.state) {
            ([_], _) => {
                self.state = SessionState::RankPending;
                return None;
            }
            ([_, _], _) => gesture::decode(&self.swipes)
                .and_then(|value| u8::try_from(value).ok())
                .and_then(Rank::from_value)
                .map_or(SessionState::Joker, SessionState::RankKnown),
            ([_, _, last], SessionState::RankKnown(rank)) => {
                SessionState::Complete(rank, Suit::from_swipe(*last))
            }
            _ => return None,
        };

        Some(self.resolve(next))
    }

    fn resolve(&mut self, next: SessionState) -> SessionEvent {
        self.state = next;
        tracing::debug!(card = ?next.card(), "new card received");

        if next.is_resolved() {
            if let Some(delay) = self.options.delay_before_commit {
                self.timers.schedule(TimerKind::DelayedCommit, delay);
            }
        }

        self.publish(ChangeKind::Resolved)
    }

    /// Discards the card being entered and empties the swipe buffer.
    ///
    /// Pending timers are cancelled. Nothing is published when the session is
    /// already empty, so repeated resets are harmless.
    pub fn reset(&mut self) -> Option<SessionEvent> {
        let had_input = !self.swipes.is_empty() || self.state != SessionState::Empty;
        self.clear();

        if had_input {
            tracing::debug!("card reset");
            Some(self.publish(ChangeKind::Reset))
        } else {
            None
        }
    }

    /// Hands over the card if it is resolved, then clears the session.
    ///
    /// Returns `None` and changes nothing while the card is still partial or
    /// missing.
    pub fn commit(&mut self) -> Option<Card> {
        let card = self.state.card().filter(Card::is_resolved)?;
        self.clear();

        tracing::debug!(?card, "card sent");
        self.publish(ChangeKind::Cleared);
        Some(card)
    }

    fn clear(&mut self) {
        self.swipes.clear();
        self.timers.cancel_all();
        self.state = SessionState::Empty;
    }

    /// Starts the long-press timer, superseding any pending one.
    ///
    /// Firing the returned ticket discards the card being entered.
    pub fn begin_long_press(&mut self) -> ScheduledTimer {
        self.timers.schedule(
            TimerKind::LongPressCancel,
            self.options.long_press_cancel_after,
        )
    }

    /// Cancels the long-press timer after the press was released.
    pub fn end_long_press(&mut self) {
        if self.timers.cancel(TimerKind::LongPressCancel) {
            tracing::trace!("long press released");
        }
    }

    /// Returns the pending timer of the given kind.
    #[must_use]
    pub const fn scheduled_timer(&self, kind: TimerKind) -> Option<ScheduledTimer> {
        self.timers.pending(kind)
    }

    /// Fires a timer whose delay has elapsed.
    ///
    /// A long-press timer resets the session and returns `Ok(None)`; a
    /// commit timer commits and returns the card.
    ///
    /// # Errors
    ///
    /// Returns [`TimerError::Stale`] if a newer timer of the same kind was
    /// scheduled since, or [`TimerError::Cancelled`] if the timer was
    /// cancelled, already fired, or dropped by a reset or commit.
    pub fn fire_timer(&mut self, ticket: TimerTicket) -> Result<Option<Card>, TimerError> {
        self.timers.take(ticket)?;

        match ticket.kind() {
            TimerKind::LongPressCancel => {
                tracing::debug!("long press held, discarding card");
                self.reset();
                Ok(None)
            }
            TimerKind::DelayedCommit => Ok(self.commit()),
        }
    }

    /// Subscribes an observer to every published change.
    pub fn subscribe(&mut self, observer: impl SessionObserver + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Removes a subscription. Returns whether it existed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(subscription, _)| *subscription != id);
        self.observers.len() != before
    }

    fn publish(&mut self, change: ChangeKind) -> SessionEvent {
        let event = SessionEvent {
            card: self.state.card(),
            change,
        };
        for (_, observer) in &mut self.observers {
            observer.on_session_event(&event);
        }
        event
    }
}

impl Default for SwipeSession {
    fn default() -> Self {
        Self::new(SessionOptions::default())
    }
}

impl fmt::Debug for SwipeSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwipeSession")
            .field("options", &self.options)
            .field("swipes", &self.swipes)
            .field("state", &self.state)
            .field("timers", &self.timers)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}
