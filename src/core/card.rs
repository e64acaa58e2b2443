use core::fmt;
use thiserror::Error;

/// Error from parsing cards out of strings.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum CardParseError {
    #[error("Unexpected character for a card value: {0}")]
    UnexpectedValueChar(char),

    #[error("Unexpected character for a suit: {0}")]
    UnexpectedSuitChar(char),

    #[error("Ran out of characters while parsing a card")]
    UnexpectedEnd,
}

/// Card suits.
///
/// A pinochle deck uses the standard four french suits.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum Suit {
    Club,
    Diamond,
    Heart,
    Spade,
}

impl Suit {
    /// All four suits in a fixed order.
    pub const ALL: [Suit; 4] = [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade];

    /// Position of this suit in `Suit::ALL`. Used for table indexing.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The single character form of this suit.
    pub const fn to_char(self) -> char {
        match self {
            Suit::Club => 'C',
            Suit::Diamond => 'D',
            Suit::Heart => 'H',
            Suit::Spade => 'S',
        }
    }
}

impl TryFrom<char> for Suit {
    type Error = CardParseError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'C' => Ok(Suit::Club),
            'D' => Ok(Suit::Diamond),
            'H' => Ok(Suit::Heart),
            'S' => Ok(Suit::Spade),
            _ => Err(CardParseError::UnexpectedSuitChar(c)),
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Card values.
///
/// A pinochle deck only carries the six values nine through ace. The
/// ordering here is display order; meld scoring never compares values.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum Value {
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Value {
    /// All six values in a fixed order.
    pub const ALL: [Value; 6] = [
        Value::Nine,
        Value::Ten,
        Value::Jack,
        Value::Queen,
        Value::King,
        Value::Ace,
    ];

    /// Position of this value in `Value::ALL`. Used for table indexing.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The string form of this value. Ten is the only two character value.
    pub const fn to_str(self) -> &'static str {
        match self {
            Value::Nine => "9",
            Value::Ten => "10",
            Value::Jack => "J",
            Value::Queen => "Q",
            Value::King => "K",
            Value::Ace => "A",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

/// The core card type. A value and a suit.
///
/// The deck carries two indistinguishable copies of each card, so `Card`
/// is identity for scoring purposes, not a physical card.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct Card {
    /// The face value of the card.
    pub value: Value,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Create a new card from a value and a suit.
    pub const fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }

    /// Parse a single card out of a character stream.
    ///
    /// Cards are written value first then suit, e.g. `9C`, `10S`, `AH`.
    /// This consumes exactly one card's worth of characters so that hands
    /// can be parsed from concatenated card strings.
    pub fn parse_from_chars(
        chars: &mut impl Iterator<Item = char>,
    ) -> Result<Self, CardParseError> {
        let value = match chars.next() {
            Some('9') => Value::Nine,
            // Ten is written as two characters.
            Some('1') => match chars.next() {
                Some('0') => Value::Ten,
                Some(c) => return Err(CardParseError::UnexpectedValueChar(c)),
                None => return Err(CardParseError::UnexpectedEnd),
            },
            Some(c) => match c.to_ascii_uppercase() {
                'T' => Value::Ten,
                'J' => Value::Jack,
                'Q' => Value::Queen,
                'K' => Value::King,
                'A' => Value::Ace,
                _ => return Err(CardParseError::UnexpectedValueChar(c)),
            },
            None => return Err(CardParseError::UnexpectedEnd),
        };
        let suit = match chars.next() {
            Some(c) => Suit::try_from(c)?,
            None => return Err(CardParseError::UnexpectedEnd),
        };
        Ok(Card { value, suit })
    }
}

impl TryFrom<&str> for Card {
    type Error = CardParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut chars = s.chars();
        let card = Card::parse_from_chars(&mut chars)?;
        if let Some(c) = chars.next() {
            return Err(CardParseError::UnexpectedValueChar(c));
        }
        Ok(card)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_card() {
        assert_eq!(
            Card::try_from("KC").unwrap(),
            Card::new(Value::King, Suit::Club)
        );
        assert_eq!(
            Card::try_from("9h").unwrap(),
            Card::new(Value::Nine, Suit::Heart)
        );
    }

    #[test]
    fn test_parse_ten_two_chars() {
        assert_eq!(
            Card::try_from("10S").unwrap(),
            Card::new(Value::Ten, Suit::Spade)
        );
        // The short poker style form is accepted too.
        assert_eq!(
            Card::try_from("TS").unwrap(),
            Card::new(Value::Ten, Suit::Spade)
        );
    }

    #[test]
    fn test_parse_bad_value() {
        assert_eq!(
            Card::try_from("2C").unwrap_err(),
            CardParseError::UnexpectedValueChar('2')
        );
    }

    #[test]
    fn test_parse_bad_suit() {
        assert_eq!(
            Card::try_from("KX").unwrap_err(),
            CardParseError::UnexpectedSuitChar('X')
        );
    }

    #[test]
    fn test_parse_truncated() {
        assert_eq!(
            Card::try_from("10").unwrap_err(),
            CardParseError::UnexpectedEnd
        );
    }

    #[test]
    fn test_parse_trailing_garbage() {
        assert!(Card::try_from("KCC").is_err());
    }

    #[test]
    fn test_display_round_trip() {
        for suit in Suit::ALL {
            for value in Value::ALL {
                let card = Card::new(value, suit);
                let s = card.to_string();
                assert_eq!(Card::try_from(s.as_str()).unwrap(), card);
            }
        }
    }

    #[test]
    fn test_indexes_are_dense() {
        for (i, suit) in Suit::ALL.iter().enumerate() {
            assert_eq!(suit.index(), i);
        }
        for (i, value) in Value::ALL.iter().enumerate() {
            assert_eq!(value.index(), i);
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_card_serde_round_trip() {
        let card = Card::new(Value::Ten, Suit::Diamond);
        let json = serde_json::to_string(&card).unwrap();
        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(back, card);
    }
}
