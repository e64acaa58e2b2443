use crate::core::card::{Card, CardParseError, Suit, Value};

/// The number of cards dealt to each player.
pub const HAND_SIZE: usize = 12;

/// A hand of cards held by one player.
///
/// Order is irrelevant and the same card can appear twice since the deck
/// carries two copies of everything. Scoring only ever asks how many
/// copies of a card the hand holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Create a hand with no cards.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a hand from a vector of cards.
    pub fn new_with_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Parse a hand from a concatenated card string, e.g. `"KSQS10DAH"`.
    ///
    /// This follows the same value-then-suit convention as single card
    /// parsing; whitespace between cards is allowed.
    pub fn new_from_str(hand_string: &str) -> Result<Self, CardParseError> {
        let mut chars = hand_string.chars().filter(|c| !c.is_whitespace()).peekable();
        let mut cards = Vec::new();
        while chars.peek().is_some() {
            cards.push(Card::parse_from_chars(&mut chars)?);
        }
        Ok(Self { cards })
    }

    /// Add a card to the hand.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// How many cards are in the hand.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Is the hand empty?
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// How many copies of a card does this hand hold.
    pub fn count_of(&self, card: Card) -> usize {
        self.cards.iter().filter(|c| **c == card).count()
    }

    /// Iterate over the cards in the hand.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Tally the hand into a dense per-card count table.
    ///
    /// Scoring a hand against a rule set looks up dozens of per-card
    /// counts, so it's done against this table rather than rescanning the
    /// card vector.
    pub fn counts(&self) -> CardCounts {
        let mut counts = CardCounts::default();
        for card in &self.cards {
            counts.table[card.suit.index()][card.value.index()] += 1;
        }
        counts
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

/// Per-card copy counts for one hand, indexed by suit and value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CardCounts {
    table: [[u8; Value::ALL.len()]; Suit::ALL.len()],
}

impl CardCounts {
    /// How many copies of `card` were tallied.
    pub fn count(&self, card: Card) -> u32 {
        u32::from(self.table[card.suit.index()][card.value.index()])
    }

    /// Total cards tallied.
    pub fn total(&self) -> u32 {
        self.table
            .iter()
            .flat_map(|row| row.iter())
            .map(|c| u32::from(*c))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_from_str() {
        let hand = Hand::new_from_str("KSQS10D").unwrap();
        assert_eq!(3, hand.len());
        assert_eq!(1, hand.count_of(Card::new(Value::King, Suit::Spade)));
        assert_eq!(1, hand.count_of(Card::new(Value::Ten, Suit::Diamond)));
    }

    #[test]
    fn test_new_from_str_whitespace() {
        let hand = Hand::new_from_str("KS QS 10D").unwrap();
        assert_eq!(3, hand.len());
    }

    #[test]
    fn test_new_from_str_bad_card() {
        assert!(Hand::new_from_str("KS2D").is_err());
    }

    #[test]
    fn test_count_of_duplicates() {
        let hand = Hand::new_from_str("ASASKD").unwrap();
        assert_eq!(2, hand.count_of(Card::new(Value::Ace, Suit::Spade)));
        assert_eq!(1, hand.count_of(Card::new(Value::King, Suit::Diamond)));
        assert_eq!(0, hand.count_of(Card::new(Value::Nine, Suit::Club)));
    }

    #[test]
    fn test_counts_table_matches_count_of() {
        let hand = Hand::new_from_str("ASAS10S10SKDQH9C").unwrap();
        let counts = hand.counts();
        for suit in Suit::ALL {
            for value in Value::ALL {
                let card = Card::new(value, suit);
                assert_eq!(counts.count(card), hand.count_of(card) as u32);
            }
        }
        assert_eq!(counts.total(), hand.len() as u32);
    }

    #[test]
    fn test_empty_hand() {
        let hand = Hand::new();
        assert!(hand.is_empty());
        assert_eq!(0, hand.counts().total());
    }
}
