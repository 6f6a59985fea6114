//! Card parsing and formatting in two-character form (e.g., "AH", "TD", "KS")

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use super::cards_types::{Card, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

fn rank_char(rank: u8) -> char {
    match rank {
        1 => 'A',
        10 => 'T',
        11 => 'J',
        12 => 'Q',
        13 => 'K',
        r => char::from_digit(u32::from(r), 10).unwrap_or('?'),
    }
}

fn suit_char(suit: Suit) -> char {
    match suit {
        Suit::Hearts => 'H',
        Suit::Diamonds => 'D',
        Suit::Spades => 'S',
        Suit::Clubs => 'C',
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}{}", rank_char(self.rank), suit_char(self.suit))
    }
}

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_err =
            || DomainError::validation(ValidationKind::ParseCard, format!("Parse card: {s}"));

        let mut chars = s.chars();
        let (Some(rank_ch), Some(suit_ch), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(parse_err());
        };
        let rank = match rank_ch {
            'A' => 1,
            '2'..='9' => rank_ch as u8 - b'0',
            'T' => 10,
            'J' => 11,
            'Q' => 12,
            'K' => 13,
            _ => return Err(parse_err()),
        };
        let suit = match suit_ch {
            'H' => Suit::Hearts,
            'D' => Suit::Diamonds,
            'S' => Suit::Spades,
            'C' => Suit::Clubs,
            _ => return Err(parse_err()),
        };
        Ok(Card { suit, rank })
    }
}

/// Parse card tokens (e.g., "AS", "2C") into cards, failing on the first bad token.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}
