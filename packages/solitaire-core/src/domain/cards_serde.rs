//! Serde for cards: suits by lower-case name, cards as their two-character token.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use super::cards_types::{Card, Suit};

const SUIT_NAMES: &[&str] = &["hearts", "diamonds", "spades", "clubs"];

impl Suit {
    pub fn name(self) -> &'static str {
        match self {
            Suit::Hearts => "hearts",
            Suit::Diamonds => "diamonds",
            Suit::Spades => "spades",
            Suit::Clubs => "clubs",
        }
    }
}

impl Serialize for Suit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Suit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Suit::ALL
            .into_iter()
            .find(|suit| suit.name() == name)
            .ok_or_else(|| de::Error::unknown_variant(&name, SUIT_NAMES))
    }
}

impl Serialize for Card {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        token.parse::<Card>().map_err(de::Error::custom)
    }
}
