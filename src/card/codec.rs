//! Stored form of a card.
//!
//! A card is stored as a map with a single `basicDescription` field holding
//! its [`RenderMode::Basic`] rendering. Older stores wrote a `basic` map with
//! integer `value` and `suit` fields; that form is still read, and wins over
//! the description when both are present and valid.

use alloc::collections::BTreeMap;
use alloc::string::String;

use serde::de::{self, IgnoredAny};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CardCodecError;

use super::{Card, Rank, RenderMode, Suit};

const BASIC_DESCRIPTION: &str = "basicDescription";

#[derive(Deserialize)]
struct StoredCard {
    #[serde(rename = "basicDescription")]
    basic_description: Option<String>,
    basic: Option<LegacyField>,
}

/// The legacy `basic` field. Anything that isn't a map of integers is ignored
/// so that the description can still be used.
#[derive(Deserialize)]
#[serde(untagged)]
enum LegacyField {
    Fields(BTreeMap<String, i64>),
    Other(
        #[expect(dead_code, reason = "only consumes values that are not a legacy map")]
        IgnoredAny,
    ),
}

impl LegacyField {
    fn card(&self) -> Option<Card> {
        let Self::Fields(fields) = self else {
            return None;
        };

        let value = fields.get("value").and_then(|v| u8::try_from(*v).ok())?;
        let suit = fields.get("suit").and_then(|v| u8::try_from(*v).ok())?;
        Some(Card::new(Rank::from_value(value)?, Suit::from_value(suit)?))
    }
}

impl Serialize for Card {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Card", 1)?;
        state.serialize_field(BASIC_DESCRIPTION, &self.render(RenderMode::Basic))?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let stored = StoredCard::deserialize(deserializer)?;

        if let Some(card) = stored.basic.as_ref().and_then(LegacyField::card) {
            return Ok(card);
        }

        let description = stored
            .basic_description
            .ok_or_else(|| de::Error::missing_field(BASIC_DESCRIPTION))?;

        Self::parse_basic(&description).ok_or_else(|| {
            tracing::warn!(%description, "stored card does not parse");
            de::Error::custom(CardCodecError::InvalidStoredCard(description))
        })
    }
}
