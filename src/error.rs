//! Error types for card codecs, locale setup and session timers.
//!
//! Parsing a rank, suit or card from text never fails with an error: those
//! operations return `None` when nothing matches. The types here cover the
//! few places where a caller has to be told that something went wrong.

use alloc::string::String;

use thiserror::Error;

/// Errors returned by [`Card`](crate::Card)'s [`FromStr`](core::str::FromStr)
/// implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The text matches no rank, suit or Joker pattern of the basic notation.
    #[error("unrecognized card description: {0:?}")]
    Unrecognized(String),
}

/// Errors raised while decoding a stored card.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardCodecError {
    /// The stored basic description does not parse back to a card.
    #[error("couldn't init card from found description {0:?}")]
    InvalidStoredCard(String),
}

/// Errors that can occur when installing the process locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LocaleError {
    /// A locale was already installed, or the default one was already used.
    #[error("a locale is already installed for this process")]
    AlreadyInstalled,
}

/// Errors that can occur when firing a session timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TimerError {
    /// A newer timer of the same kind superseded this ticket.
    #[error("timer was superseded by a newer one")]
    Stale,
    /// No timer of this kind is pending (cancelled, reset, or already fired).
    #[error("timer was cancelled")]
    Cancelled,
}
