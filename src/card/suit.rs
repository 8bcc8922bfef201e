//! Card suits.

use alloc::string::{String, ToString};

use serde::{Deserialize, Serialize};

use crate::gesture::Swipe;
use crate::locale::{self, contains_word};

use super::RenderMode;

/// Card suit, in the order used by the swipe code and the numeric values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    /// Spades.
    Spades = 1,
    /// Hearts.
    Hearts = 2,
    /// Clubs.
    Clubs = 3,
    /// Diamonds.
    Diamonds = 4,
}

impl Suit {
    /// All suits, Spades first.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Clubs, Self::Diamonds];

    /// Returns the suit with the given numeric value (1 = Spades, 4 = Diamonds).
    #[must_use]
    pub const fn from_value(value: u8) -> Option<Self> {
        match value {
            1..=4 => Some(Self::ALL[value as usize - 1]),
            _ => None,
        }
    }

    /// Returns the numeric value of the suit.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the single-character compact identifier.
    #[must_use]
    pub const fn identifier(self) -> char {
        match self {
            Self::Spades => 'S',
            Self::Hearts => 'H',
            Self::Clubs => 'C',
            Self::Diamonds => 'D',
        }
    }

    /// Looks a suit up by its compact identifier. No case folding is applied.
    #[must_use]
    pub fn from_identifier(identifier: char) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|suit| suit.identifier() == identifier)
    }

    /// Returns the emoji symbol of the suit (the suit character followed by
    /// the emoji presentation selector).
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Spades => "\u{2660}\u{fe0f}",
            Self::Hearts => "\u{2665}\u{fe0f}",
            Self::Clubs => "\u{2663}\u{fe0f}",
            Self::Diamonds => "\u{2666}\u{fe0f}",
        }
    }

    /// Returns the unlocalized name.
    #[must_use]
    pub const fn basic_name(self) -> &'static str {
        match self {
            Self::Spades => "Spades",
            Self::Hearts => "Hearts",
            Self::Clubs => "Clubs",
            Self::Diamonds => "Diamonds",
        }
    }

    /// Returns the name in the process locale.
    #[must_use]
    pub fn localized_name(self) -> &'static str {
        locale::locale().get(self.basic_name())
    }

    /// Renders the suit on its own.
    ///
    /// Localized modes without symbol use the localized name; every other
    /// mode uses the symbol.
    #[must_use]
    pub fn render(self, mode: RenderMode) -> String {
        match mode {
            RenderMode::Localized { symbol: false }
            | RenderMode::LocalizedWithPrefix { symbol: false } => {
                self.localized_name().to_string()
            }
            _ => self.symbol().to_string(),
        }
    }

    /// Finds the first suit, in Spades to Diamonds order, whose localized
    /// name is a whole word of `text`. Matching ignores case.
    #[must_use]
    pub fn parse_localized(text: &str) -> Option<Self> {
        let words = locale::words(text);
        Self::ALL
            .into_iter()
            .find(|suit| contains_word(&words, suit.localized_name()))
    }

    /// Finds the first suit whose symbol occurs in a basic description.
    #[must_use]
    pub fn parse_basic(text: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|suit| text.contains(suit.symbol()))
    }

    /// Returns the suit entered by a single swipe: the swipe's seed digit
    /// indexes Spades, Hearts, Clubs, Diamonds.
    #[must_use]
    pub const fn from_swipe(swipe: Swipe) -> Self {
        Self::ALL[swipe.seed() as usize - 1]
    }

    /// Returns the same-colour partner suit announced by the alternate voice.
    #[must_use]
    pub const fn alternate_voice(self) -> Self {
        match self {
            Self::Spades => Self::Clubs,
            Self::Clubs => Self::Spades,
            Self::Hearts => Self::Diamonds,
            Self::Diamonds => Self::Hearts,
        }
    }
}
