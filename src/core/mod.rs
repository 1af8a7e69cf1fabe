//! This is the core module. It exports the parts that are
//! shared by any five card draw game: cards, the deck, the hand
//! and the category of a hand.

/// card.rs has value and suit.
mod card;
/// Re-export Card, Value, and Suit
pub use self::card::{Card, Suit, Value};

/// A set of cards stored as bits.
mod card_bit_set;
pub use self::card_bit_set::{CardBitSet, CardBitSetIter};

/// Code related to cards in hands.
mod hand;
/// Everything in there should be public.
pub use self::hand::*;

/// We want to be able to iterate over five card subsets.
mod card_iter;
/// Make that functionality public.
pub use self::card_iter::*;

/// Deck is the normal 52 card deck.
mod deck;
/// Export `Deck`
pub use self::deck::{DECK_SIZE, Deck};

/// 5 Card hand category code.
mod rank;
/// Export the trait and the results.
pub use self::rank::{HandCategory, ROYAL, Rankable, STRAIGHTS, rank_straight};

mod error;
pub use self::error::VideoPokerError;
