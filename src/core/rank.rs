use std::fmt;

use super::{Card, CardBitSet, HAND_SIZE, Value, VideoPokerError};

/// All the different video poker hand categories.
///
/// Ordered from worst to best, so the derived ordering is also the
/// payout ordering.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HandCategory {
    /// No paying combination.
    Nothing,
    /// One Card matches another.
    Pair,
    /// Two diffent pair of matching cards.
    TwoPair,
    /// Three of the same value.
    ThreeOfAKind,
    /// Five cards in a sequence
    Straight,
    /// Five cards of the same suit
    Flush,
    /// Three of one value and two of another value
    FullHouse,
    /// Four of the same value.
    FourOfAKind,
    /// Five cards in a sequence all of the same suit.
    StraightFlush,
    /// Ten to ace all of the same suit.
    RoyalFlush,
}

impl HandCategory {
    /// Every category, worst first.
    pub const ALL: [HandCategory; 10] = [
        HandCategory::Nothing,
        HandCategory::Pair,
        HandCategory::TwoPair,
        HandCategory::ThreeOfAKind,
        HandCategory::Straight,
        HandCategory::Flush,
        HandCategory::FullHouse,
        HandCategory::FourOfAKind,
        HandCategory::StraightFlush,
        HandCategory::RoyalFlush,
    ];

    /// Human readable name of the category.
    pub fn label(self) -> &'static str {
        match self {
            HandCategory::Nothing => "Nothing",
            HandCategory::Pair => "Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

const fn straight_mask(low: Value) -> u16 {
    0b11111 << (low as u16)
}

/// Wheel: ace, two, three, four, five.
const WHEEL: u16 = 1 << (Value::Ace as u16) | 0b1111;

/// Ten through ace.
pub const ROYAL: u16 = straight_mask(Value::Ten);

/// Big ugly constant for all the straights, wheel first and
/// royal last.
pub const STRAIGHTS: [u16; 10] = [
    WHEEL,
    straight_mask(Value::Two),
    straight_mask(Value::Three),
    straight_mask(Value::Four),
    straight_mask(Value::Five),
    straight_mask(Value::Six),
    straight_mask(Value::Seven),
    straight_mask(Value::Eight),
    straight_mask(Value::Nine),
    ROYAL,
];

/// Check that cards form one legal five card hand and collect them.
fn five_card_set(cards: &[Card]) -> Result<CardBitSet, VideoPokerError> {
    if cards.len() != HAND_SIZE {
        return Err(VideoPokerError::InvalidHandSize(cards.len()));
    }
    let mut set = CardBitSet::new();
    for c in cards {
        if !set.insert(*c) {
            return Err(VideoPokerError::DuplicateCard(*c));
        }
    }
    Ok(set)
}

/// Can this turn into a hand category?
pub trait Rankable {
    /// The cards to classify.
    fn cards(&self) -> &[Card];

    /// Classify exactly five distinct cards.
    ///
    /// ```
    /// use rs_video_poker::core::{HandCategory, Rankable, parse_cards};
    ///
    /// let cards = parse_cards("5c 6d 7h 8s 9c").unwrap();
    /// assert_eq!(HandCategory::Straight, cards.category().unwrap());
    /// ```
    fn category(&self) -> Result<HandCategory, VideoPokerError> {
        let set = five_card_set(self.cards())?;

        let mut counts = Value::values().map(|v| set.value_count(v));
        counts.sort_unstable_by(|a, b| b.cmp(a));
        let is_flush = set.is_suited();
        let value_mask = set.value_mask();

        let category = match (counts[0], counts[1]) {
            (4, _) => HandCategory::FourOfAKind,
            (3, 2) => HandCategory::FullHouse,
            (3, _) => HandCategory::ThreeOfAKind,
            (2, 2) => HandCategory::TwoPair,
            (2, _) => HandCategory::Pair,
            // Five different values. Straight, flush, both or nothing.
            _ => match (rank_straight(value_mask), is_flush) {
                (Some(_), true) if value_mask == ROYAL => HandCategory::RoyalFlush,
                (Some(_), true) => HandCategory::StraightFlush,
                (None, true) => HandCategory::Flush,
                (Some(_), false) => HandCategory::Straight,
                (None, false) => HandCategory::Nothing,
            },
        };
        Ok(category)
    }

    /// The value of the pair when the cards hold exactly one pair.
    fn paired_value(&self) -> Result<Option<Value>, VideoPokerError> {
        let set = five_card_set(self.cards())?;
        let mut pairs = Value::values()
            .into_iter()
            .filter(|v| set.value_count(*v) == 2);
        let first = pairs.next();
        let has_trips = Value::values().iter().any(|v| set.value_count(*v) >= 3);
        match (first, pairs.next(), has_trips) {
            (Some(v), None, false) => Ok(Some(v)),
            _ => Ok(None),
        }
    }
}

/// Given a 13 bit value mask find which straight it is, if any.
///
/// The index is 0 for the wheel up to 9 for ten to ace.
pub fn rank_straight(value_mask: u16) -> Option<usize> {
    STRAIGHTS.iter().position(|s| *s == value_mask)
}

impl Rankable for [Card] {
    fn cards(&self) -> &[Card] {
        self
    }
}

impl Rankable for Vec<Card> {
    fn cards(&self) -> &[Card] {
        &self[..]
    }
}

impl Rankable for [Card; HAND_SIZE] {
    fn cards(&self) -> &[Card] {
        &self[..]
    }
}
