use std::fmt;
use std::str::FromStr;

use super::VideoPokerError;

/// Card rank or value.
/// This is basically the face value - 2
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Value {
    /// 2
    Two = 0,
    /// 3
    Three = 1,
    /// 4
    Four = 2,
    /// 5
    Five = 3,
    /// 6
    Six = 4,
    /// 7
    Seven = 5,
    /// 8
    Eight = 6,
    /// 9
    Nine = 7,
    /// T
    Ten = 8,
    /// J
    Jack = 9,
    /// Q
    Queen = 10,
    /// K
    King = 11,
    /// A
    Ace = 12,
}

/// Constant of all the values.
/// This is what `Value::values()` returns
const VALUES: [Value; 13] = [
    Value::Two,
    Value::Three,
    Value::Four,
    Value::Five,
    Value::Six,
    Value::Seven,
    Value::Eight,
    Value::Nine,
    Value::Ten,
    Value::Jack,
    Value::Queen,
    Value::King,
    Value::Ace,
];

impl Value {
    /// Take a u8 and convert it to a value.
    ///
    /// Anything above 12 is clamped to `Value::Ace`.
    ///
    /// ```
    /// use rs_video_poker::core::Value;
    ///
    /// assert_eq!(Value::Two, Value::from_u8(0));
    /// assert_eq!(Value::Ace, Value::from_u8(12));
    /// ```
    pub fn from_u8(v: u8) -> Self {
        VALUES[usize::from(v.min(12))]
    }

    /// Get all of the `Value`'s that are possible.
    /// This is used to iterate through all possible
    /// values when creating a new deck.
    pub const fn values() -> [Value; 13] {
        VALUES
    }

    /// Given a character parse that char into a value.
    /// Case is ignored. Ten is written `T`.
    ///
    /// ```
    /// use rs_video_poker::core::Value;
    ///
    /// assert_eq!(Some(Value::Ten), Value::from_char('T'));
    /// assert_eq!(Some(Value::Queen), Value::from_char('q'));
    /// assert_eq!(None, Value::from_char('1'));
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(Self::Ace),
            'K' => Some(Self::King),
            'Q' => Some(Self::Queen),
            'J' => Some(Self::Jack),
            'T' => Some(Self::Ten),
            '9' => Some(Self::Nine),
            '8' => Some(Self::Eight),
            '7' => Some(Self::Seven),
            '6' => Some(Self::Six),
            '5' => Some(Self::Five),
            '4' => Some(Self::Four),
            '3' => Some(Self::Three),
            '2' => Some(Self::Two),
            _ => None,
        }
    }

    /// Convert this Value to a char.
    pub fn to_char(self) -> char {
        match self {
            Self::Ace => 'A',
            Self::King => 'K',
            Self::Queen => 'Q',
            Self::Jack => 'J',
            Self::Ten => 'T',
            Self::Nine => '9',
            Self::Eight => '8',
            Self::Seven => '7',
            Self::Six => '6',
            Self::Five => '5',
            Self::Four => '4',
            Self::Three => '3',
            Self::Two => '2',
        }
    }

    /// Plural english name, used when describing a pair.
    pub fn plural_name(self) -> &'static str {
        match self {
            Self::Ace => "Aces",
            Self::King => "Kings",
            Self::Queen => "Queens",
            Self::Jack => "Jacks",
            Self::Ten => "Tens",
            Self::Nine => "Nines",
            Self::Eight => "Eights",
            Self::Seven => "Sevens",
            Self::Six => "Sixes",
            Self::Five => "Fives",
            Self::Four => "Fours",
            Self::Three => "Threes",
            Self::Two => "Twos",
        }
    }
}

/// Enum for the four different suits.
/// While this has support for ordering it's not
/// sensical. The sorting is only there to allow sorting cards.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Suit {
    /// Clubs
    Club = 0,
    /// Diamonds
    Diamond = 1,
    /// Hearts
    Heart = 2,
    /// Spades
    Spade = 3,
}

/// All of the `Suit`'s. This is what `Suit::suits()` returns.
const SUITS: [Suit; 4] = [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade];

impl Suit {
    /// Provide all the Suit's that there are.
    pub const fn suits() -> [Suit; 4] {
        SUITS
    }

    /// Take a u8 and turn it into a suit. Anything above 3 is a spade.
    pub fn from_u8(s: u8) -> Self {
        SUITS[usize::from(s.min(3))]
    }

    /// Given a character that represents a suit try and parse that char.
    /// Upper case letters are accepted and normalized.
    pub fn from_char(s: char) -> Option<Self> {
        match s.to_ascii_lowercase() {
            'c' => Some(Self::Club),
            'd' => Some(Self::Diamond),
            'h' => Some(Self::Heart),
            's' => Some(Self::Spade),
            _ => None,
        }
    }

    /// This Suit to a lower case char.
    pub fn to_char(self) -> char {
        match self {
            Self::Club => 'c',
            Self::Diamond => 'd',
            Self::Heart => 'h',
            Self::Spade => 's',
        }
    }
}

/// The main struct of this library.
/// This is a carrier for Suit and Value combined.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct Card {
    /// The face value of this card.
    pub value: Value,
    /// The suit of this card.
    pub suit: Suit,
}

impl Card {
    pub const fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }

    /// Parse the card code at the start of `chars`.
    ///
    /// Consumes exactly one card worth of characters. `10` is accepted
    /// as a synonym for `T` so legacy codes like "10c" still parse.
    pub(crate) fn parse_next<I>(chars: &mut std::iter::Peekable<I>) -> Result<Self, VideoPokerError>
    where
        I: Iterator<Item = char>,
    {
        let vc = chars.next().ok_or(VideoPokerError::TooFewChars)?;
        let value = if vc == '1' {
            match chars.next() {
                Some('0') => Value::Ten,
                Some(_) => return Err(VideoPokerError::UnexpectedValueChar),
                None => return Err(VideoPokerError::TooFewChars),
            }
        } else {
            Value::from_char(vc).ok_or(VideoPokerError::UnexpectedValueChar)?
        };
        let sc = chars.next().ok_or(VideoPokerError::TooFewChars)?;
        let suit = Suit::from_char(sc).ok_or(VideoPokerError::UnexpectedSuitChar)?;
        Ok(Self { value, suit })
    }
}

/// Cards are laid out value major so that the index of
/// every card of one value is contiguous.
impl From<Card> for u8 {
    fn from(card: Card) -> Self {
        card.value as u8 * 4 + card.suit as u8
    }
}

impl From<u8> for Card {
    fn from(value: u8) -> Self {
        Self {
            value: Value::from_u8(value / 4),
            suit: Suit::from_u8(value % 4),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value.to_char(), self.suit.to_char())
    }
}

impl FromStr for Card {
    type Err = VideoPokerError;

    /// ```
    /// use rs_video_poker::core::{Card, Suit, Value};
    ///
    /// let ten: Card = "10c".parse().unwrap();
    /// assert_eq!(Card::new(Value::Ten, Suit::Club), ten);
    /// assert_eq!("Tc", ten.to_string());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars().peekable();
        let card = Card::parse_next(&mut chars)?;
        if chars.next().is_some() {
            return Err(VideoPokerError::UnparsedCharsRemaining);
        }
        Ok(card)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Card {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Card {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
