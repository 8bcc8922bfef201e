//! Session state and change notifications.

use crate::card::{Card, PartialCard, Rank, Suit};

/// Progress of the card being entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionState {
    /// Nothing entered yet.
    #[default]
    Empty,
    /// One swipe buffered; the rank needs a second one.
    RankPending,
    /// The rank is known and a suit swipe is expected.
    RankKnown(Rank),
    /// The rank swipes hit a dead pair.
    Joker,
    /// Rank and suit are known.
    Complete(Rank, Suit),
}

impl SessionState {
    /// Returns the card this state shows, if any.
    #[must_use]
    pub const fn card(self) -> Option<Card> {
        match self {
            Self::Empty | Self::RankPending => None,
            Self::RankKnown(rank) => Some(Card::Partial(PartialCard::Rank(rank))),
            Self::Joker => Some(Card::Joker),
            Self::Complete(rank, suit) => Some(Card::Complete(rank, suit)),
        }
    }

    /// Returns whether the card is resolved and further swipes are ignored.
    #[must_use]
    pub const fn is_resolved(self) -> bool {
        matches!(self, Self::Joker | Self::Complete(..))
    }
}

/// Why a [`SessionEvent`] was published.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    /// Part or all of the card became known.
    Resolved,
    /// The card being entered was discarded.
    Reset,
    /// A committed card was handed over and the session cleared.
    Cleared,
}

/// Change notification delivered to session observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionEvent {
    /// The card after the change.
    pub card: Option<Card>,
    /// What caused the change.
    pub change: ChangeKind,
}
