//! Card ranks.

use alloc::format;
use alloc::string::{String, ToString};

use serde::{Deserialize, Serialize};

use crate::locale::{self, contains_word};

use super::{BASIC_CONNECTOR, RenderMode};

/// Card rank, from Ace (1) to King (13).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rank {
    /// Ace.
    Ace = 1,
    /// Two.
    Two = 2,
    /// Three.
    Three = 3,
    /// Four.
    Four = 4,
    /// Five.
    Five = 5,
    /// Six.
    Six = 6,
    /// Seven.
    Seven = 7,
    /// Eight.
    Eight = 8,
    /// Nine.
    Nine = 9,
    /// Ten.
    Ten = 10,
    /// Jack.
    Jack = 11,
    /// Queen.
    Queen = 12,
    /// King.
    King = 13,
}

/// Face ranks matched by the basic parser before the numeric fallback.
const BASIC_FACES: [(&str, Rank); 4] = [
    ("Ace of ", Rank::Ace),
    ("Jack of ", Rank::Jack),
    ("Queen of ", Rank::Queen),
    ("King of ", Rank::King),
];

impl Rank {
    /// All ranks, Ace to King.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns the rank with the given numeric value (1 = Ace, 13 = King).
    #[must_use]
    pub const fn from_value(value: u8) -> Option<Self> {
        match value {
            1..=13 => Some(Self::ALL[value as usize - 1]),
            _ => None,
        }
    }

    /// Returns the numeric value of the rank (1 = Ace, 13 = King).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the single-character compact identifier.
    ///
    /// Number ranks use their digit, with `0` standing for the ten.
    #[must_use]
    pub const fn identifier(self) -> char {
        match self {
            Self::Ace => '1',
            Self::Two => '2',
            Self::Three => '3',
            Self::Four => '4',
            Self::Five => '5',
            Self::Six => '6',
            Self::Seven => '7',
            Self::Eight => '8',
            Self::Nine => '9',
            Self::Ten => '0',
            Self::Jack => 'J',
            Self::Queen => 'Q',
            Self::King => 'K',
        }
    }

    /// Looks a rank up by its compact identifier. No case folding is applied.
    #[must_use]
    pub fn from_identifier(identifier: char) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|rank| rank.identifier() == identifier)
    }

    /// Returns the short code (`A`, `2` ... `10`, `J`, `Q`, `K`).
    #[must_use]
    pub const fn short_code(self) -> &'static str {
        match self {
            Self::Ace => "A",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            _ => self.number(),
        }
    }

    /// Returns the unlocalized name (`Ace`, `2` ... `10`, `Jack`, `Queen`, `King`).
    #[must_use]
    pub const fn basic_name(self) -> &'static str {
        match self {
            Self::Ace => "Ace",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
            _ => self.number(),
        }
    }

    const fn number(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Ace | Self::Jack | Self::Queen | Self::King => "",
        }
    }

    /// Returns the name in the process locale. Number ranks stay digits.
    #[must_use]
    pub fn localized_name(self) -> &'static str {
        match self {
            Self::Ace | Self::Jack | Self::Queen | Self::King => {
                locale::locale().get(self.basic_name())
            }
            _ => self.number(),
        }
    }

    /// Returns the article placed before this rank in the process locale
    /// (`"the "` in English), including any trailing space.
    #[must_use]
    pub fn article(self) -> &'static str {
        locale::locale().get(self.article_key())
    }

    const fn article_key(self) -> &'static str {
        match self {
            Self::Ace => "the [Ace]",
            Self::Two => "the [2]",
            Self::Three => "the [3]",
            Self::Four => "the [4]",
            Self::Five => "the [5]",
            Self::Six => "the [6]",
            Self::Seven => "the [7]",
            Self::Eight => "the [8]",
            Self::Nine => "the [9]",
            Self::Ten => "the [10]",
            Self::Jack => "the [Jack]",
            Self::Queen => "the [Queen]",
            Self::King => "the [King]",
        }
    }

    /// Renders the rank on its own.
    ///
    /// [`RenderMode::Basic`] yields the half-built `"Queen of "` form that a
    /// suit symbol completes. [`RenderMode::LocalizedWithPrefix`] joins the
    /// article and the name without a separator of its own, so the English
    /// form is `"the Queen"` with a single space.
    #[must_use]
    pub fn render(self, mode: RenderMode) -> String {
        match mode {
            RenderMode::Short => self.short_code().to_string(),
            RenderMode::Incomplete => self.basic_name().to_string(),
            RenderMode::Basic => format!("{}{BASIC_CONNECTOR}", self.basic_name()),
            RenderMode::Localized { .. } => self.localized_name().to_string(),
            RenderMode::LocalizedWithPrefix { .. } => {
                format!("{}{}", self.article(), self.localized_name())
            }
        }
    }

    /// Finds the first rank, in Ace to King order, whose localized name is a
    /// whole word of `text`. Matching ignores case.
    #[must_use]
    pub fn parse_localized(text: &str) -> Option<Self> {
        let words = locale::words(text);
        Self::ALL
            .into_iter()
            .find(|rank| contains_word(&words, rank.localized_name()))
    }

    /// Parses the rank out of a basic `"<rank> of <suit>"` description.
    ///
    /// Face ranks are matched by their `"Ace of "`-style prefix first; any
    /// other text is split on `" of "` and the left side read as 1 to 13.
    #[must_use]
    pub fn parse_basic(text: &str) -> Option<Self> {
        if let Some(&(_, rank)) = BASIC_FACES
            .iter()
            .find(|(needle, _)| text.contains(needle))
        {
            return Some(rank);
        }

        let (value, _) = text.split_once(BASIC_CONNECTOR)?;
        value.parse::<u8>().ok().and_then(Self::from_value)
    }

    /// Returns the rank announced by the alternate voice: one rank lower,
    /// with the Ace wrapping around to the King.
    #[must_use]
    pub const fn alternate_voice(self) -> Self {
        match self {
            Self::Ace => Self::King,
            _ => Self::ALL[self as usize - 2],
        }
    }
}
