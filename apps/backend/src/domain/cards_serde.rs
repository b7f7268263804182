//! Wire (de)serialization for cards.
//!
//! Cards travel as `{ "rank": "Q", "suit": "clubs" }`: rank as its token,
//! suit lowercase.

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use super::cards_types::{Card, Rank, Suit};

impl Serialize for Rank {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.token())
    }
}

impl<'de> Deserialize<'de> for Rank {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "4" => Ok(Rank::Four),
            "5" => Ok(Rank::Five),
            "6" => Ok(Rank::Six),
            "7" => Ok(Rank::Seven),
            "Q" => Ok(Rank::Queen),
            "J" => Ok(Rank::Jack),
            "K" => Ok(Rank::King),
            "A" => Ok(Rank::Ace),
            "2" => Ok(Rank::Two),
            "3" => Ok(Rank::Three),
            other => Err(de::Error::custom(format!("unknown rank: {other}"))),
        }
    }
}

impl Serialize for Suit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.wire_name())
    }
}

impl<'de> Deserialize<'de> for Suit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "clubs" => Ok(Suit::Clubs),
            "hearts" => Ok(Suit::Hearts),
            "spades" => Ok(Suit::Spades),
            "diamonds" => Ok(Suit::Diamonds),
            other => Err(de::Error::custom(format!("unknown suit: {other}"))),
        }
    }
}

#[derive(Serialize, Deserialize)]
struct CardWire {
    rank: Rank,
    suit: Suit,
}

impl Serialize for Card {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        CardWire {
            rank: self.rank,
            suit: self.suit,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = CardWire::deserialize(deserializer)?;
        Ok(Card {
            rank: wire.rank,
            suit: wire.suit,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_wire_format() {
        let card = Card {
            rank: Rank::Queen,
            suit: Suit::Diamonds,
        };
        let json = serde_json::to_string(&card).unwrap();
        assert_eq!(json, r#"{"rank":"Q","suit":"diamonds"}"#);
        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(back, card);
    }

    #[test]
    fn rejects_unknown_tokens() {
        assert!(serde_json::from_str::<Card>(r#"{"rank":"T","suit":"clubs"}"#).is_err());
        assert!(serde_json::from_str::<Card>(r#"{"rank":"4","suit":"cups"}"#).is_err());
    }
}
