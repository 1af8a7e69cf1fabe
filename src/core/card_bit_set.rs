use std::fmt::Debug;
use std::ops::BitOrAssign;

use super::{Card, Suit, Value};

/// This struct is a bitset for cards
/// Each card is represented by a bit in a 64 bit integer
///
/// The bit is set if the card present
/// The bit is unset if the card not in the set
///
/// Bit `u8::from(card)` belongs to `card`, so the four suits of
/// one value sit in one nibble.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardBitSet {
    // The bitset
    cards: u64,
}

const FIFTY_TWO_ONES: u64 = (1 << 52) - 1;

/// One bit per value, for every suit of that value.
const VALUE_NIBBLE: u64 = 0b1111;

impl CardBitSet {
    /// Create a new empty bitset
    ///
    /// ```
    /// use rs_video_poker::core::CardBitSet;
    /// let cards = CardBitSet::new();
    /// assert!(cards.is_empty());
    /// ```
    pub const fn new() -> Self {
        Self { cards: 0 }
    }

    /// Insert a card into the bitset.
    ///
    /// Returns true if the card was not already present.
    ///
    /// ```
    /// use rs_video_poker::core::{Card, CardBitSet, Suit, Value};
    /// let mut cards = CardBitSet::new();
    ///
    /// assert!(cards.insert(Card::new(Value::Six, Suit::Club)));
    /// assert!(!cards.insert(Card::new(Value::Six, Suit::Club)));
    /// assert_eq!(1, cards.count());
    /// ```
    pub fn insert(&mut self, card: Card) -> bool {
        let bit: u64 = 1 << u8::from(card);
        let fresh = self.cards & bit == 0;
        self.cards |= bit;
        fresh
    }

    /// Is the card in the bitset ?
    pub fn contains(&self, card: Card) -> bool {
        (self.cards & (1 << u8::from(card))) != 0
    }

    /// Is the bitset empty ?
    pub fn is_empty(&self) -> bool {
        self.cards == 0
    }

    /// How many cards are in the bitset ?
    pub fn count(&self) -> usize {
        self.cards.count_ones() as usize
    }

    /// How many cards of the given value are in the set.
    ///
    /// ```
    /// use rs_video_poker::core::{Card, CardBitSet, Suit, Value};
    /// let mut cards = CardBitSet::new();
    /// cards.insert(Card::new(Value::Ace, Suit::Club));
    /// cards.insert(Card::new(Value::Ace, Suit::Spade));
    /// cards.insert(Card::new(Value::King, Suit::Spade));
    ///
    /// assert_eq!(2, cards.value_count(Value::Ace));
    /// assert_eq!(0, cards.value_count(Value::Two));
    /// ```
    pub fn value_count(&self, value: Value) -> u32 {
        ((self.cards >> (value as u64 * 4)) & VALUE_NIBBLE).count_ones()
    }

    /// A 13 bit mask with bit `value as usize` set for every value present.
    pub fn value_mask(&self) -> u16 {
        Value::values()
            .iter()
            .filter(|v| self.value_count(**v) > 0)
            .fold(0, |mask, v| mask | 1 << (*v as u16))
    }

    /// Does every card in the set share one suit ?
    ///
    /// An empty set is not suited.
    pub fn is_suited(&self) -> bool {
        Suit::suits().iter().any(|s| {
            let suit_bits = (*self).into_iter().filter(|c| c.suit == *s).count();
            suit_bits > 0 && suit_bits == self.count()
        })
    }
}

impl Default for CardBitSet {
    /// Create a new bitset with all the cards in it
    /// ```
    /// use rs_video_poker::core::CardBitSet;
    ///
    /// let cards = CardBitSet::default();
    ///
    /// assert_eq!(52, cards.count());
    /// assert!(!cards.is_empty());
    /// ```
    fn default() -> Self {
        Self {
            cards: FIFTY_TWO_ONES,
        }
    }
}

impl Debug for CardBitSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(*self).finish()
    }
}

impl BitOrAssign<Card> for CardBitSet {
    fn bitor_assign(&mut self, rhs: Card) {
        self.cards |= 1 << u8::from(rhs);
    }
}

/// The iterator for the CardBitSet
/// It iterates over the cards in the bitset, lowest index first.
pub struct CardBitSetIter(u64);

impl IntoIterator for CardBitSet {
    type Item = Card;
    type IntoIter = CardBitSetIter;

    fn into_iter(self) -> Self::IntoIter {
        CardBitSetIter(self.cards)
    }
}

impl Iterator for CardBitSetIter {
    type Item = Card;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            return None;
        }

        let card = self.0.trailing_zeros();
        self.0 &= !(1 << card);

        Some(Card::from(card as u8))
    }
}

impl FromIterator<Card> for CardBitSet {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        let mut set = Self::new();
        for card in iter {
            set |= card;
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use crate::core::Deck;

    use super::*;

    #[test]
    fn test_empty() {
        let cards = CardBitSet::new();
        assert!(cards.is_empty());
        assert_eq!(0, cards.value_mask());
        assert!(!cards.is_suited());
    }

    #[test]
    fn test_insert_all() {
        let mut all_cards = CardBitSet::new();
        for card in Deck::new().remaining() {
            assert!(all_cards.insert(*card));
            assert!(all_cards.contains(*card));
        }

        assert_eq!(all_cards, CardBitSet::default());
        assert_eq!((1 << 13) - 1, all_cards.value_mask());
    }

    #[test]
    fn test_default_contains() {
        let bitset_cards = CardBitSet::default();
        for card in Deck::new().remaining() {
            assert!(bitset_cards.contains(*card));
        }
        let collected: CardBitSet = Deck::new().remaining().iter().copied().collect();
        assert_eq!(bitset_cards, collected);
    }

    #[test]
    fn test_value_counts() {
        let cards: CardBitSet = [
            Card::new(Value::Nine, Suit::Club),
            Card::new(Value::Nine, Suit::Heart),
            Card::new(Value::Nine, Suit::Spade),
            Card::new(Value::Two, Suit::Diamond),
        ]
        .into_iter()
        .collect();

        assert_eq!(3, cards.value_count(Value::Nine));
        assert_eq!(1, cards.value_count(Value::Two));
        assert_eq!(0, cards.value_count(Value::Ten));
        assert_eq!(
            1 << (Value::Nine as u16) | 1 << (Value::Two as u16),
            cards.value_mask()
        );
    }

    #[test]
    fn test_suited() {
        let hearts: CardBitSet = [
            Card::new(Value::Two, Suit::Heart),
            Card::new(Value::Nine, Suit::Heart),
            Card::new(Value::King, Suit::Heart),
        ]
        .into_iter()
        .collect();
        assert!(hearts.is_suited());

        let mut mixed = hearts;
        mixed.insert(Card::new(Value::King, Suit::Spade));
        assert!(!mixed.is_suited());
    }

    #[test]
    fn test_formatting_cards() {
        let mut cards = CardBitSet::new();
        cards.insert(Card::new(Value::Ace, Suit::Club));
        cards.insert(Card::new(Value::King, Suit::Diamond));
        cards.insert(Card::new(Value::Three, Suit::Heart));

        assert_eq!(
            format!("{:?}", cards),
            "{Card { value: Three, suit: Heart }, Card { value: King, suit: Diamond }, Card { value: Ace, suit: Club }}"
        );
    }
}
