/// Module with all the card types and card parsing code.
mod card;
/// Export `Card`, `Suit`, `Value` and the parse error.
pub use self::card::{Card, CardParseError, Suit, Value};

/// Module for hands and per-card count tables.
mod hand;
/// Export `Hand` and friends.
pub use self::hand::{CardCounts, HAND_SIZE, Hand};

/// Module for the 48 card pinochle deck and dealing.
mod deck;
/// Export `Deck` and the deck shape constants.
pub use self::deck::{DECK_COPIES, DECK_SIZE, Deck, NUM_PLAYERS};
