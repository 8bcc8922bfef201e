//! Card model and its text notations.
//!
//! A [`Card`] can be fully known, partially known (rank or suit only), or the
//! Joker. Three independent notations convert cards to and from text:
//!
//! - the localized phrase (`"the Queen of Hearts"`), through the process
//!   [`Locale`](crate::Locale);
//! - the basic description (`"Queen of ♥️"`), which is also the stored form;
//! - the two-character compact identifier (`"QH"`, `"JJ"` for the Joker).
//!
//! # Example
//!
//! ```
//! use card_picker::{Card, Rank, RenderMode, Suit};
//!
//! let card = Card::parse_localized("the Queen of Hearts").unwrap();
//! assert_eq!(card, Card::new(Rank::Queen, Suit::Hearts));
//! assert_eq!(card.identifier(), "QH");
//! assert_eq!(Card::parse_basic(&card.render(RenderMode::Basic)), Some(card));
//! ```

use alloc::format;
use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

use crate::error::ParseCardError;
use crate::locale::{self, PhraseOrder};

mod codec;
mod rank;
mod stack;
mod suit;

pub use rank::Rank;
pub use stack::{MNEMONICA, card_at_stack_position};
pub use suit::Suit;

/// Connector between rank and suit in the basic description.
pub const BASIC_CONNECTOR: &str = " of ";
/// Basic description of the Joker.
pub const JOKER_DESCRIPTION: &str = "Joker";
/// Compact identifier reserved for the Joker.
pub const JOKER_IDENTIFIER: &str = "JJ";
/// Compact identifier character standing for an unknown rank or suit.
pub const ABSENT_IDENTIFIER: char = '-';

/// Number of complete cards in a deck.
pub const DECK_SIZE: usize = 52;

/// The known half of a partially entered card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartialCard {
    /// Only the rank is known.
    Rank(Rank),
    /// Only the suit is known.
    Suit(Suit),
}

/// A playing card, possibly only partially known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Card {
    /// Rank and suit are both known.
    Complete(Rank, Suit),
    /// Exactly one of rank and suit is known.
    Partial(PartialCard),
    /// The Joker.
    Joker,
}

/// Text notation used by [`Card::render`], [`Rank::render`] and [`Suit::render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderMode {
    /// Short code with suit symbol (`"Q♥️"`).
    Short,
    /// Unlocalized rank name with suit symbol (`"Queen♥️"`).
    Incomplete,
    /// Basic description (`"Queen of ♥️"`), the stored form.
    Basic,
    /// Localized phrase (`"Queen of ♥️"` or `"Queen of Hearts"`).
    Localized {
        /// Whether the suit is shown as its symbol rather than its name.
        symbol: bool,
    },
    /// Localized phrase with the rank's article (`"the Queen of Hearts"`).
    LocalizedWithPrefix {
        /// Whether the suit is shown as its symbol rather than its name.
        symbol: bool,
    },
}

impl RenderMode {
    const fn is_localized(self) -> bool {
        matches!(self, Self::Localized { .. } | Self::LocalizedWithPrefix { .. })
    }
}

impl Card {
    /// Creates a complete card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self::Complete(rank, suit)
    }

    /// Builds a card from whichever parts are known.
    ///
    /// Returns `None` when neither rank nor suit is known.
    #[must_use]
    pub const fn from_parts(rank: Option<Rank>, suit: Option<Suit>) -> Option<Self> {
        match (rank, suit) {
            (Some(rank), Some(suit)) => Some(Self::Complete(rank, suit)),
            (Some(rank), None) => Some(Self::Partial(PartialCard::Rank(rank))),
            (None, Some(suit)) => Some(Self::Partial(PartialCard::Suit(suit))),
            (None, None) => None,
        }
    }

    /// Returns the rank, if known.
    #[must_use]
    pub const fn rank(&self) -> Option<Rank> {
        match *self {
            Self::Complete(rank, _) | Self::Partial(PartialCard::Rank(rank)) => Some(rank),
            Self::Partial(PartialCard::Suit(_)) | Self::Joker => None,
        }
    }

    /// Returns the suit, if known.
    #[must_use]
    pub const fn suit(&self) -> Option<Suit> {
        match *self {
            Self::Complete(_, suit) | Self::Partial(PartialCard::Suit(suit)) => Some(suit),
            Self::Partial(PartialCard::Rank(_)) | Self::Joker => None,
        }
    }

    /// Returns whether the card needs no further input (complete or Joker).
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        !matches!(self, Self::Partial(_))
    }

    /// Returns whether the card is the Joker.
    #[must_use]
    pub const fn is_joker(&self) -> bool {
        matches!(self, Self::Joker)
    }

    /// Parses a natural-language phrase in the process locale.
    ///
    /// The Joker wins if its localized name is one of the words; otherwise
    /// rank and suit are looked up independently in the same text.
    #[must_use]
    pub fn parse_localized(text: &str) -> Option<Self> {
        let words = locale::words(text);
        if locale::contains_word(&words, locale::locale().get(locale::JOKER)) {
            return Some(Self::Joker);
        }

        Self::from_parts(Rank::parse_localized(text), Suit::parse_localized(text))
    }

    /// Parses a basic description such as `"Queen of ♥️"` or `"Joker"`.
    #[must_use]
    pub fn parse_basic(text: &str) -> Option<Self> {
        if text == JOKER_DESCRIPTION {
            return Some(Self::Joker);
        }

        Self::from_parts(Rank::parse_basic(text), Suit::parse_basic(text))
    }

    /// Parses a two-character compact identifier such as `"QH"`.
    ///
    /// `"JJ"` is the Joker. Any text that is not exactly two characters long
    /// is rejected.
    #[must_use]
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        let mut chars = identifier.chars();
        let (Some(rank), Some(suit), None) = (chars.next(), chars.next(), chars.next()) else {
            return None;
        };

        if identifier == JOKER_IDENTIFIER {
            return Some(Self::Joker);
        }

        Self::from_parts(Rank::from_identifier(rank), Suit::from_identifier(suit))
    }

    /// Returns the two-character compact identifier.
    ///
    /// An unknown half is written as [`ABSENT_IDENTIFIER`].
    #[must_use]
    pub fn identifier(&self) -> String {
        if self.is_joker() {
            return JOKER_IDENTIFIER.to_string();
        }

        let rank = self.rank().map_or(ABSENT_IDENTIFIER, Rank::identifier);
        let suit = self.suit().map_or(ABSENT_IDENTIFIER, Suit::identifier);
        [rank, suit].into_iter().collect()
    }

    /// Renders the card in the given notation.
    #[must_use]
    pub fn render(&self, mode: RenderMode) -> String {
        match *self {
            Self::Complete(rank, suit) if mode.is_localized() => {
                render_phrase(rank, suit, mode)
            }
            Self::Complete(rank, suit) => format!("{}{}", rank.render(mode), suit.symbol()),
            Self::Partial(PartialCard::Rank(rank)) => rank.render(mode),
            Self::Partial(PartialCard::Suit(suit)) => suit.render(mode),
            Self::Joker => match mode {
                RenderMode::Short => "J".to_string(),
                RenderMode::Incomplete | RenderMode::Basic => JOKER_DESCRIPTION.to_string(),
                RenderMode::Localized { .. } => locale::locale().get(locale::JOKER).to_string(),
                RenderMode::LocalizedWithPrefix { .. } => {
                    locale::locale().get(locale::THE_JOKER).to_string()
                }
            },
        }
    }

    /// Returns every canonical card: the 52 complete cards, suit by suit
    /// (Spades, Hearts, Clubs, Diamonds) from Ace to King, then the Joker.
    pub fn all() -> impl Iterator<Item = Self> {
        Suit::ALL
            .into_iter()
            .flat_map(|suit| {
                Rank::ALL
                    .into_iter()
                    .map(move |rank| Self::Complete(rank, suit))
            })
            .chain(core::iter::once(Self::Joker))
    }

    /// Returns the card announced by the alternate voice.
    ///
    /// Complete cards step one rank down (Ace wraps to King) and swap to the
    /// same-colour suit; other cards are returned unchanged.
    #[must_use]
    pub const fn alternate_voice(self) -> Self {
        match self {
            Self::Complete(rank, suit) => {
                Self::Complete(rank.alternate_voice(), suit.alternate_voice())
            }
            other => other,
        }
    }
}

fn render_phrase(rank: Rank, suit: Suit, mode: RenderMode) -> String {
    let rank_text = rank.localized_name();
    let suit_text = suit.render(mode);

    let mut phrase = String::new();
    if matches!(mode, RenderMode::LocalizedWithPrefix { .. }) {
        phrase.push_str(rank.article());
    }

    let (first, second) = match locale::phrase_order() {
        PhraseOrder::RankFirst => (rank_text, suit_text.as_str()),
        PhraseOrder::SuitFirst => (suit_text.as_str(), rank_text),
    };
    phrase.push_str(first);
    phrase.push_str(locale::locale().connector());
    phrase.push_str(second);
    phrase
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(RenderMode::Localized { symbol: true }))
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses the basic description, the same notation used for storage.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_basic(s).ok_or_else(|| ParseCardError::Unrecognized(s.to_string()))
    }
}

impl From<PartialCard> for Card {
    fn from(partial: PartialCard) -> Self {
        Self::Partial(partial)
    }
}
