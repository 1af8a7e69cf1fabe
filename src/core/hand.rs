use std::fmt;
use std::str::FromStr;

use super::{Card, CardBitSet, Deck, VideoPokerError};

/// How many cards a video poker hand holds.
pub const HAND_SIZE: usize = 5;

/// The five cards in front of the player.
///
/// Each position either holds a card or is blank. A hand is blank
/// everywhere before the deal, and a discarded position stays blank
/// until it is drawn again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Option<Card>>", into = "Vec<Option<Card>>")
)]
pub struct Hand {
    slots: [Option<Card>; HAND_SIZE],
}

impl Hand {
    /// Create a new hand with every position blank
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_video_poker::core::Hand;
    ///
    /// let hand = Hand::new();
    ///
    /// assert!(hand.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a full hand out of exactly five distinct cards.
    pub fn new_with_cards(cards: &[Card]) -> Result<Self, VideoPokerError> {
        if cards.len() != HAND_SIZE {
            return Err(VideoPokerError::InvalidHandSize(cards.len()));
        }
        let mut hand = Self::new();
        for (pos, card) in cards.iter().enumerate() {
            hand.place(pos, *card)?;
        }
        Ok(hand)
    }

    /// Throw away the current cards and deal five new ones.
    ///
    /// If the deck can't cover it the hand is left as it was.
    ///
    /// ```
    /// use rs_video_poker::core::{Deck, Hand};
    ///
    /// let mut deck = Deck::new();
    /// let mut hand = Hand::new();
    /// hand.deal_from(&mut deck).unwrap();
    ///
    /// assert!(hand.is_complete());
    /// assert_eq!(47, deck.len());
    /// ```
    pub fn deal_from(&mut self, deck: &mut Deck) -> Result<(), VideoPokerError> {
        let cards = deck.deal(HAND_SIZE)?;
        *self = Self::new_with_cards(&cards)?;
        Ok(())
    }

    /// Blank the card at `position`. Returns the card that was there.
    pub fn discard(&mut self, position: usize) -> Result<Option<Card>, VideoPokerError> {
        let slot = self
            .slots
            .get_mut(position)
            .ok_or(VideoPokerError::HandPositionOutOfRange(position))?;
        Ok(slot.take())
    }

    /// Fill every blank position from the top of the deck, in position order.
    ///
    /// Returns how many cards were drawn. Nothing is drawn unless the deck
    /// can fill all of the blanks with cards not already in the hand.
    pub fn draw_from(&mut self, deck: &mut Deck) -> Result<usize, VideoPokerError> {
        let blanks: Vec<usize> = (0..HAND_SIZE)
            .filter(|pos| self.slots[*pos].is_none())
            .collect();
        let top = deck.remaining().get(..blanks.len()).unwrap_or_default();
        if let Some(held) = top.iter().find(|c| self.contains(c)) {
            return Err(VideoPokerError::DuplicateCard(*held));
        }
        let cards = deck.deal(blanks.len())?;
        for (pos, card) in blanks.iter().zip(cards) {
            self.slots[*pos] = Some(card);
        }
        Ok(blanks.len())
    }

    /// Keep the held positions, discard the rest and draw replacements.
    ///
    /// ```
    /// use rs_video_poker::core::{Deck, Hand};
    ///
    /// let mut deck = Deck::new();
    /// let mut hand = Hand::new();
    /// hand.deal_from(&mut deck).unwrap();
    /// let first = hand.get(0);
    ///
    /// let drawn = hand
    ///     .hold_and_draw([true, false, false, true, true], &mut deck)
    ///     .unwrap();
    /// assert_eq!(2, drawn);
    /// assert_eq!(first, hand.get(0));
    /// assert_eq!(45, deck.len());
    /// ```
    pub fn hold_and_draw(
        &mut self,
        held: [bool; HAND_SIZE],
        deck: &mut Deck,
    ) -> Result<usize, VideoPokerError> {
        let mut next = *self;
        for (pos, hold) in held.iter().enumerate() {
            if !hold {
                next.discard(pos)?;
            }
        }
        let drawn = next.draw_from(deck)?;
        *self = next;
        Ok(drawn)
    }

    /// Put `card` at `position`, replacing whatever was there.
    pub fn replace(&mut self, position: usize, card: Card) -> Result<Option<Card>, VideoPokerError> {
        let old = self.discard(position)?;
        if let Err(e) = self.place(position, card) {
            self.slots[position] = old;
            return Err(e);
        }
        Ok(old)
    }

    fn place(&mut self, position: usize, card: Card) -> Result<(), VideoPokerError> {
        if self.contains(&card) {
            return Err(VideoPokerError::DuplicateCard(card));
        }
        let slot = self
            .slots
            .get_mut(position)
            .ok_or(VideoPokerError::HandPositionOutOfRange(position))?;
        *slot = Some(card);
        Ok(())
    }

    /// The card at `position`, `None` when blank or out of range.
    pub fn get(&self, position: usize) -> Option<Card> {
        self.slots.get(position).copied().flatten()
    }

    /// Given a card, is it in the current hand?
    pub fn contains(&self, c: &Card) -> bool {
        self.slots.iter().any(|s| s.as_ref() == Some(c))
    }

    /// How many positions hold a card.
    pub fn count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Does every position hold a card ?
    pub fn is_complete(&self) -> bool {
        self.count() == HAND_SIZE
    }

    /// The five cards, in position order.
    ///
    /// Fails with `InvalidHandSize` while any position is blank.
    pub fn cards(&self) -> Result<[Card; HAND_SIZE], VideoPokerError> {
        let mut cards = [Card::from(0u8); HAND_SIZE];
        for (dst, slot) in cards.iter_mut().zip(self.slots) {
            *dst = slot.ok_or(VideoPokerError::InvalidHandSize(self.count()))?;
        }
        Ok(cards)
    }

    /// Iterate the positions, blanks included.
    pub fn iter(&self) -> impl Iterator<Item = Option<Card>> + '_ {
        self.slots.iter().copied()
    }

    pub fn clear(&mut self) {
        self.slots = [None; HAND_SIZE];
    }
}

/// Positions in order, `None` for a blank. Fails on the wrong number
/// of positions or a card held twice.
impl TryFrom<Vec<Option<Card>>> for Hand {
    type Error = VideoPokerError;

    fn try_from(slots: Vec<Option<Card>>) -> Result<Self, Self::Error> {
        if slots.len() != HAND_SIZE {
            return Err(VideoPokerError::InvalidHandSize(slots.len()));
        }
        let mut hand = Self::new();
        for (pos, slot) in slots.into_iter().enumerate() {
            if let Some(card) = slot {
                hand.place(pos, card)?;
            }
        }
        Ok(hand)
    }
}

impl From<Hand> for Vec<Option<Card>> {
    fn from(hand: Hand) -> Self {
        hand.slots.to_vec()
    }
}

impl From<Hand> for CardBitSet {
    fn from(val: Hand) -> Self {
        val.slots.iter().flatten().copied().collect()
    }
}

impl fmt::Display for Hand {
    /// Cards are written by their codes with `--` for a blank position.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, slot) in self.slots.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match slot {
                Some(card) => write!(f, "{card}")?,
                None => f.write_str("--")?,
            }
        }
        Ok(())
    }
}

impl FromStr for Hand {
    type Err = VideoPokerError;

    /// Parse five card codes. Codes may run together or be split by
    /// whitespace or commas.
    ///
    /// ```
    /// use rs_video_poker::core::Hand;
    ///
    /// let hand: Hand = "AhKhQhJhTh".parse().unwrap();
    /// assert!(hand.is_complete());
    ///
    /// let legacy: Hand = "10c, 2d, 2h, 3s, 3c".parse().unwrap();
    /// assert_eq!("Tc 2d 2h 3s 3c", legacy.to_string());
    /// ```
    fn from_str(hand_string: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(hand_string)?;
        Self::new_with_cards(&cards)
    }
}

/// Parse any number of card codes, rejecting duplicates.
///
/// ```
/// use rs_video_poker::core::parse_cards;
///
/// let cards = parse_cards("Ad As Jc Th 2d 9c 9h").unwrap();
/// assert_eq!(7, cards.len());
/// assert!(parse_cards("Ad Ad").is_err());
/// ```
pub fn parse_cards(s: &str) -> Result<Vec<Card>, VideoPokerError> {
    let mut chars = s
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .peekable();
    let mut seen = CardBitSet::new();
    let mut cards = Vec::with_capacity(HAND_SIZE);

    // Keep looping until we run out of input
    while chars.peek().is_some() {
        let c = Card::parse_next(&mut chars)?;
        if !seen.insert(c) {
            return Err(VideoPokerError::DuplicateCard(c));
        }
        cards.push(c);
    }
    Ok(cards)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DECK_SIZE, Suit, Value};

    #[test]
    fn test_new_is_blank() {
        let hand = Hand::new();
        assert!(hand.is_empty());
        assert!(!hand.is_complete());
        assert!(matches!(
            hand.cards(),
            Err(VideoPokerError::InvalidHandSize(0))
        ));
        assert_eq!("-- -- -- -- --", hand.to_string());
    }

    #[test]
    fn test_deal_and_cards() {
        let mut deck = Deck::new();
        let mut hand = Hand::new();
        hand.deal_from(&mut deck).unwrap();

        let cards = hand.cards().unwrap();
        assert_eq!(&cards[..], deck.dealt());
        for c in cards {
            assert!(!deck.contains(&c));
            assert!(hand.contains(&c));
        }
    }

    #[test]
    fn test_deal_from_short_deck() {
        let mut deck = Deck::new();
        deck.deal(49).unwrap();
        let mut hand: Hand = "AhKhQhJhTh".parse().unwrap();
        let before = hand;
        assert!(matches!(
            hand.deal_from(&mut deck),
            Err(VideoPokerError::DeckExhausted { .. })
        ));
        assert_eq!(before, hand);
    }

    #[test]
    fn test_discard_and_draw() {
        let mut deck = Deck::new();
        let mut hand = Hand::new();
        hand.deal_from(&mut deck).unwrap();

        let gone = hand.discard(1).unwrap().unwrap();
        assert_eq!(None, hand.discard(1).unwrap());
        hand.discard(4).unwrap();
        assert_eq!(3, hand.count());
        assert!(matches!(
            hand.cards(),
            Err(VideoPokerError::InvalidHandSize(3))
        ));

        assert_eq!(2, hand.draw_from(&mut deck).unwrap());
        assert!(hand.is_complete());
        assert!(!hand.contains(&gone));
        assert_eq!(45, deck.len());

        // Nothing blank so nothing to draw.
        assert_eq!(0, hand.draw_from(&mut deck).unwrap());
        assert_eq!(45, deck.len());
    }

    #[test]
    fn test_discard_out_of_range() {
        let mut hand = Hand::new();
        assert!(matches!(
            hand.discard(5),
            Err(VideoPokerError::HandPositionOutOfRange(5))
        ));
    }

    #[test]
    fn test_hold_and_draw_needs_enough_cards() {
        let mut deck = Deck::new();
        let mut hand = Hand::new();
        hand.deal_from(&mut deck).unwrap();
        deck.deal(45).unwrap();

        let before = hand;
        assert!(hand.hold_and_draw([false; HAND_SIZE], &mut deck).is_err());
        // The hand is not left half discarded.
        assert_eq!(before, hand);

        let drawn = hand
            .hold_and_draw([true, true, true, false, false], &mut deck)
            .unwrap();
        assert_eq!(2, drawn);
        assert!(deck.is_empty());
    }

    #[test]
    fn test_draw_duplicate_leaves_deck_and_hand() {
        // The hand did not come from this deck, so its top cards clash.
        let mut hand: Hand = "2c 3c 9h Js Kc".parse().unwrap();
        hand.discard(1).unwrap();
        hand.discard(4).unwrap();
        let before = hand;
        let mut deck = Deck::new();

        assert!(matches!(
            hand.draw_from(&mut deck),
            Err(VideoPokerError::DuplicateCard(c)) if c == Card::new(Value::Two, Suit::Club)
        ));
        assert_eq!(DECK_SIZE, deck.len());
        assert!(deck.dealt().is_empty());
        assert_eq!(before, hand);
        assert_eq!("2c -- 9h Js --", hand.to_string());

        let mut full: Hand = "2c 3c 9h Js Kc".parse().unwrap();
        let before = full;
        assert!(matches!(
            full.hold_and_draw([true, false, true, true, false], &mut deck),
            Err(VideoPokerError::DuplicateCard(_))
        ));
        assert_eq!(before, full);
        assert_eq!(DECK_SIZE, deck.len());
    }

    #[test]
    fn test_replace_rejects_duplicates() {
        let mut hand: Hand = "Ad As Jc Th 2d".parse().unwrap();
        let ace = Card::new(Value::Ace, Suit::Spade);
        assert!(matches!(
            hand.replace(0, ace),
            Err(VideoPokerError::DuplicateCard(_))
        ));
        assert_eq!(Some(Card::new(Value::Ace, Suit::Diamond)), hand.get(0));

        let old = hand.replace(4, Card::new(Value::Nine, Suit::Club)).unwrap();
        assert_eq!(Some(Card::new(Value::Two, Suit::Diamond)), old);
    }

    #[test]
    fn test_parse() {
        let hand: Hand = "2c,2d,2h,3s,3c".parse().unwrap();
        assert_eq!(Some(Card::new(Value::Three, Suit::Club)), hand.get(4));

        assert!(matches!(
            "2c 2d 2h 3s".parse::<Hand>(),
            Err(VideoPokerError::InvalidHandSize(4))
        ));
        assert!(matches!(
            "2c 2d 2h 3s 3c 4c".parse::<Hand>(),
            Err(VideoPokerError::InvalidHandSize(6))
        ));
        assert!(matches!(
            "2c 2d 2h 3s 2c".parse::<Hand>(),
            Err(VideoPokerError::DuplicateCard(_))
        ));
        assert!(matches!(
            "2c 2d 2h 3s 3".parse::<Hand>(),
            Err(VideoPokerError::TooFewChars)
        ));
    }

    #[test]
    fn test_into_bit_set() {
        let mut hand: Hand = "Ad As Jc Th 2d".parse().unwrap();
        hand.discard(0).unwrap();
        let set = CardBitSet::from(hand);
        assert_eq!(4, set.count());
        assert!(!set.contains(Card::new(Value::Ace, Suit::Diamond)));
    }

    #[test]
    fn test_try_from_slots() {
        let ace = Card::new(Value::Ace, Suit::Spade);
        let hand = Hand::try_from(vec![Some(ace), None, None, None, None]).unwrap();
        assert_eq!(1, hand.count());
        assert_eq!(vec![Some(ace), None, None, None, None], Vec::<Option<Card>>::from(hand));

        assert!(matches!(
            Hand::try_from(vec![Some(ace), None]),
            Err(VideoPokerError::InvalidHandSize(2))
        ));
        assert!(matches!(
            Hand::try_from(vec![Some(ace), None, Some(ace), None, None]),
            Err(VideoPokerError::DuplicateCard(c)) if c == ace
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_keeps_blanks_and_checks_cards() {
        let mut hand: Hand = "Ad As Jc Th 2d".parse().unwrap();
        hand.discard(2).unwrap();
        let json = serde_json::to_string(&hand).unwrap();
        assert_eq!(r#"["Ad","As",null,"Th","2d"]"#, json);
        assert_eq!(hand, serde_json::from_str::<Hand>(&json).unwrap());

        assert!(serde_json::from_str::<Hand>(r#"["Ad","Ad",null,null,null]"#).is_err());
        assert!(serde_json::from_str::<Hand>(r#"["Ad"]"#).is_err());
    }
}
