//! Localized strings used to render and parse natural-language card phrases.
//!
//! A [`Locale`] is a string table keyed by the English source strings
//! (`"Queen"`, `" of "`, `"the [Queen]"`, ...). Keys missing from the table
//! fall back to English, so [`Locale::english`] is simply an empty table.
//!
//! One locale is used for the whole process. It is fixed the first time it is
//! read, either by an explicit [`install_locale`] call or implicitly with the
//! English default.
//!
//! # Example
//!
//! ```
//! use card_picker::Locale;
//!
//! let french = Locale::english()
//!     .with_entry("Queen", "Dame")
//!     .with_entry("Hearts", "Coeur")
//!     .with_entry(" of ", " de ");
//! assert_eq!(french.get("Queen"), "Dame");
//! assert_eq!(french.get("King"), "King");
//! ```

use alloc::string::{String, ToString};
use alloc::vec::Vec;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::error::LocaleError;
use crate::sync::Once;

/// Key of the connector placed between rank and suit (`"Queen of Hearts"`).
pub const CONNECTOR: &str = " of ";
/// Key of the template that fixes the rank/suit order of a phrase.
pub const ORDER_TEMPLATE: &str = "[Queen] [of] [Hearts]";
/// Key of the localized Joker name.
pub const JOKER: &str = "Joker";
/// Key of the localized Joker name with its article.
pub const THE_JOKER: &str = "the Joker";

const RANK_TOKEN: &str = "[Queen]";
const SUIT_TOKEN: &str = "[Hearts]";
const DEFAULT_ARTICLE: &str = "the ";

static LOCALE: Once<Locale> = Once::new();
static PHRASE_ORDER: Once<PhraseOrder> = Once::new();

/// Which component comes first in a localized "Rank of Suit" phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhraseOrder {
    /// `"Queen of Hearts"`.
    RankFirst,
    /// The suit is named before the rank.
    SuitFirst,
}

impl PhraseOrder {
    /// Derives the order from a template by comparing where the `[Queen]`
    /// and `[Hearts]` tokens occur.
    ///
    /// A template missing either token yields [`PhraseOrder::RankFirst`].
    #[must_use]
    pub fn from_template(template: &str) -> Self {
        match (template.find(RANK_TOKEN), template.find(SUIT_TOKEN)) {
            (Some(rank), Some(suit)) if suit < rank => Self::SuitFirst,
            _ => Self::RankFirst,
        }
    }
}

/// A string table for localized card phrases.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Locale {
    strings: HashMap<String, String>,
}

impl Locale {
    /// Creates the English locale, which needs no entries.
    #[must_use]
    pub fn english() -> Self {
        Self::default()
    }

    /// Creates a locale from `(key, translation)` pairs.
    #[must_use]
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            strings: entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }

    /// Adds or replaces a translation.
    #[must_use]
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.strings.insert(key.into(), value.into());
        self
    }

    /// Returns the translation for `key`, or its English default.
    ///
    /// Article keys such as `"the [Ace]"` default to `"the "`; every other
    /// key defaults to itself.
    #[must_use]
    pub fn get<'a>(&'a self, key: &'a str) -> &'a str {
        self.strings
            .get(key)
            .map_or_else(|| english_default(key), String::as_str)
    }

    /// Returns the connector placed between rank and suit.
    #[must_use]
    pub fn connector(&self) -> &str {
        self.get(CONNECTOR)
    }

    /// Returns the rank/suit order described by this locale's template.
    #[must_use]
    pub fn phrase_order(&self) -> PhraseOrder {
        PhraseOrder::from_template(self.get(ORDER_TEMPLATE))
    }
}

fn english_default(key: &str) -> &str {
    if key.starts_with("the [") && key.ends_with(']') {
        DEFAULT_ARTICLE
    } else {
        key
    }
}

/// Installs the process locale.
///
/// # Errors
///
/// Returns [`LocaleError::AlreadyInstalled`] if a locale was installed before
/// or the English default was already used to render or parse a card.
pub fn install_locale(locale: Locale) -> Result<(), LocaleError> {
    let mut installed = false;
    LOCALE.call_once(|| {
        installed = true;
        locale
    });

    if installed {
        tracing::debug!("locale installed");
        Ok(())
    } else {
        Err(LocaleError::AlreadyInstalled)
    }
}

/// Returns the process locale, fixing it to English if none was installed.
#[must_use]
pub fn locale() -> &'static Locale {
    LOCALE.call_once(Locale::english)
}

/// Returns the cached rank/suit order of the process locale.
#[must_use]
pub fn phrase_order() -> PhraseOrder {
    *PHRASE_ORDER.call_once(|| locale().phrase_order())
}

/// Splits lower-cased text into the words matched by localized parsers.
pub(crate) fn words(text: &str) -> Vec<String> {
    text.to_lowercase().split(' ').map(ToString::to_string).collect()
}

/// Returns whether `name`, lower-cased, is one of `words`.
pub(crate) fn contains_word(words: &[String], name: &str) -> bool {
    let name = name.to_lowercase();
    words.iter().any(|word| *word == name)
}
