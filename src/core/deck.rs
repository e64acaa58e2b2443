use rand::Rng;
use rand::seq::SliceRandom;

use crate::core::card::{Card, Suit, Value};
use crate::core::hand::{HAND_SIZE, Hand};

/// How many copies of each distinct card the deck holds.
pub const DECK_COPIES: usize = 2;

/// The number of players dealt to.
pub const NUM_PLAYERS: usize = 4;

/// Total cards in the deck. 4 suits * 6 values * 2 copies.
pub const DECK_SIZE: usize = Suit::ALL.len() * Value::ALL.len() * DECK_COPIES;

/// A pinochle deck.
///
/// 48 cards, two copies of every suit/value pair from nine through ace.
/// The deck is never consumed; each deal shuffles the full card vector in
/// place and hands out copies, so one `Deck` serves every iteration of a
/// simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Default for Deck {
    fn default() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for _ in 0..DECK_COPIES {
            for suit in Suit::ALL {
                for value in Value::ALL {
                    cards.push(Card::new(value, suit));
                }
            }
        }
        Self { cards }
    }
}

impl Deck {
    /// How many cards are in the deck.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Is the deck empty? It never is, but clippy insists a len comes with
    /// an is_empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all cards in the deck.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// How many copies of `card` the full deck holds.
    pub fn copies_of(&self, card: Card) -> usize {
        self.cards.iter().filter(|c| **c == card).count()
    }

    /// Shuffle the deck and deal four hands of twelve.
    ///
    /// The shuffle is `rand`'s Fisher-Yates on the whole card vector, so
    /// every permutation of the 48 cards is equally likely. The shuffled
    /// deck is then split into four contiguous groups of twelve, one per
    /// player seat.
    pub fn shuffle_and_deal<R: Rng>(&mut self, rng: &mut R) -> [Hand; NUM_PLAYERS] {
        self.cards.shuffle(rng);
        let mut chunks = self.cards.chunks_exact(HAND_SIZE);
        core::array::from_fn(|_| {
            chunks
                .next()
                .map(|chunk| chunk.iter().copied().collect())
                .unwrap_or_default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashMap;

    #[test]
    fn test_deck_composition() {
        let deck = Deck::default();
        assert_eq!(DECK_SIZE, deck.len());
        assert_eq!(48, deck.len());
        for suit in Suit::ALL {
            for value in Value::ALL {
                assert_eq!(DECK_COPIES, deck.copies_of(Card::new(value, suit)));
            }
        }
    }

    #[test]
    fn test_deal_sizes() {
        let mut deck = Deck::default();
        let mut rng = StdRng::seed_from_u64(42);
        let hands = deck.shuffle_and_deal(&mut rng);
        assert_eq!(NUM_PLAYERS, hands.len());
        for hand in &hands {
            assert_eq!(HAND_SIZE, hand.len());
        }
    }

    #[test]
    fn test_deal_partitions_the_deck() {
        let mut deck = Deck::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let hands = deck.shuffle_and_deal(&mut rng);
            let mut seen: HashMap<Card, usize> = HashMap::new();
            for hand in &hands {
                for card in hand.iter() {
                    *seen.entry(*card).or_insert(0) += 1;
                }
            }
            // The union of the four hands is the whole deck, nothing
            // dropped and nothing counted twice.
            assert_eq!(Suit::ALL.len() * Value::ALL.len(), seen.len());
            for (card, count) in seen {
                assert_eq!(DECK_COPIES, count, "wrong number of copies of {card}");
            }
        }
    }

    #[test]
    fn test_deal_is_seed_deterministic() {
        let mut deck_one = Deck::default();
        let mut deck_two = Deck::default();
        let mut rng_one = StdRng::seed_from_u64(99);
        let mut rng_two = StdRng::seed_from_u64(99);
        let hands_one = deck_one.shuffle_and_deal(&mut rng_one);
        let hands_two = deck_two.shuffle_and_deal(&mut rng_two);
        assert_eq!(hands_one, hands_two);
    }

    #[test]
    fn test_deck_survives_dealing() {
        let mut deck = Deck::default();
        let mut rng = StdRng::seed_from_u64(3);
        let _ = deck.shuffle_and_deal(&mut rng);
        let _ = deck.shuffle_and_deal(&mut rng);
        assert_eq!(DECK_SIZE, deck.len());
        assert_eq!(
            DECK_COPIES,
            deck.copies_of(Card::new(Value::Ace, Suit::Spade))
        );
    }
}
