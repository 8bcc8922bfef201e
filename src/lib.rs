//! Eyes-free playing card entry with optional `no_std` support.
//!
//! The crate turns sequences of directional swipes into playing cards, the
//! way a performer enters a card on a blank screen without looking at it.
//! It provides:
//!
//! - a [`Card`] model that can be complete, partial (rank or suit only) or
//!   the Joker, with localized, basic and compact text notations;
//! - the clock-face swipe [`gesture`] decoder;
//! - a [`SwipeSession`] controller that buffers swipes and publishes card
//!   changes to the UI layer.
//!
//! # Example
//!
//! ```
//! use card_picker::{Card, ChangeKind, SessionEvent, Swipe, SwipeSession};
//!
//! let mut session = SwipeSession::default();
//! session.subscribe(|event: &SessionEvent| {
//!     if event.change == ChangeKind::Resolved {
//!         let _ = event.card;
//!     }
//! });
//!
//! session.append_swipe(Swipe::Left);
//! let event = session.append_swipe(Swipe::Right).unwrap();
//! assert_eq!(event.card, Some(Card::Joker));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod gesture;
pub mod locale;
pub mod options;
pub mod session;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, MNEMONICA, PartialCard, Rank, RenderMode, Suit};
pub use error::{CardCodecError, LocaleError, ParseCardError, TimerError};
pub use gesture::Swipe;
pub use locale::{Locale, PhraseOrder, install_locale};
pub use options::SessionOptions;
pub use session::{
    ChangeKind, ScheduledTimer, SessionEvent, SessionObserver, SessionState, SubscriptionId,
    SwipeSession, TimerKind, TimerTicket,
};
