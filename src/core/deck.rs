use std::ops::Index;

use rand::Rng;
use tracing::event;

use super::{Card, CardBitSet, Suit, Value, VideoPokerError};

/// The number of cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// A single 52 card deck.
///
/// `Deck` keeps the cards that are still to be dealt in order, the top of
/// the deck being index 0, and a record of every card dealt since the last
/// `reset`. Together the two always hold each of the 52 cards exactly once.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "DeckParts", into = "DeckParts")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct Deck {
    /// Cards not yet dealt. Index 0 is dealt first.
    cards: Vec<Card>,
    /// Cards dealt since the last reset, in deal order.
    dealt: Vec<Card>,
}

impl Deck {
    /// Create a full deck in base order.
    ///
    /// Base order walks values from two up to ace and within a
    /// value goes clubs, diamonds, hearts, spades.
    ///
    /// ```
    /// use rs_video_poker::core::Deck;
    ///
    /// let deck = Deck::new();
    /// assert_eq!(52, deck.len());
    /// assert_eq!("2c", deck[0].to_string());
    /// assert_eq!("As", deck[51].to_string());
    /// ```
    pub fn new() -> Self {
        let mut deck = Self {
            cards: Vec::with_capacity(DECK_SIZE),
            dealt: Vec::with_capacity(DECK_SIZE),
        };
        deck.reset();
        deck
    }

    /// Put every card back into the deck in base order and forget
    /// about everything that was dealt.
    pub fn reset(&mut self) {
        self.cards.clear();
        self.dealt.clear();
        for v in Value::values() {
            for s in Suit::suits() {
                self.cards.push(Card::new(v, s));
            }
        }
        event!(tracing::Level::TRACE, "Deck reset");
    }

    /// Randomly shuffle the cards that have not been dealt.
    ///
    /// This is a Fisher-Yates shuffle. For each position from the bottom
    /// of the deck up to the second card a partner is chosen uniformly
    /// from `0..=i`, the position itself included, so every ordering is
    /// equally likely.
    ///
    /// ```
    /// use rand::{SeedableRng, rngs::StdRng};
    /// use rs_video_poker::core::Deck;
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let mut deck = Deck::new();
    /// deck.shuffle(&mut rng);
    /// assert_eq!(52, deck.len());
    /// ```
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        for i in (1..self.cards.len()).rev() {
            let j = rng.random_range(0..=i);
            self.cards.swap(i, j);
        }
        event!(
            tracing::Level::TRACE,
            remaining = self.cards.len(),
            "Deck shuffled"
        );
    }

    /// Deal `n` cards from the top of the deck.
    ///
    /// The cards are removed from the deck and recorded as dealt. If fewer
    /// than `n` cards remain nothing is dealt and
    /// `VideoPokerError::DeckExhausted` is returned.
    ///
    /// ```
    /// use rs_video_poker::core::Deck;
    ///
    /// let mut deck = Deck::new();
    /// let cards = deck.deal(5).unwrap();
    /// assert_eq!(5, cards.len());
    /// assert_eq!(47, deck.len());
    /// assert_eq!(&cards[..], deck.dealt());
    ///
    /// assert!(deck.deal(48).is_err());
    /// assert_eq!(47, deck.len());
    /// ```
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, VideoPokerError> {
        if n > self.cards.len() {
            event!(
                tracing::Level::DEBUG,
                requested = n,
                remaining = self.cards.len(),
                "Deck exhausted"
            );
            return Err(VideoPokerError::DeckExhausted {
                requested: n,
                remaining: self.cards.len(),
            });
        }
        let cards: Vec<Card> = self.cards.drain(..n).collect();
        self.dealt.extend_from_slice(&cards);
        Ok(cards)
    }

    /// Deal a single card from the top of the deck.
    pub fn deal_one(&mut self) -> Result<Card, VideoPokerError> {
        let mut cards = self.deal(1)?;
        cards.pop().ok_or(VideoPokerError::DeckExhausted {
            requested: 1,
            remaining: 0,
        })
    }

    /// How many cards are there still to be dealt ?
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Have all of the cards been dealt from this deck?
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The undealt cards, top of the deck first.
    pub fn remaining(&self) -> &[Card] {
        &self.cards
    }

    /// The cards dealt since the last reset, in the order they were dealt.
    pub fn dealt(&self) -> &[Card] {
        &self.dealt
    }

    /// Given a card, is it still waiting to be dealt?
    pub fn contains(&self, c: &Card) -> bool {
        self.cards.contains(c)
    }

    /// Put the undealt cards in a chosen order.
    ///
    /// Every card in `order` must be undealt and each must appear once.
    /// Cards not named keep their relative order after the named ones.
    /// This is mostly useful for replaying a known round.
    pub fn stack(&mut self, order: &[Card]) -> Result<(), VideoPokerError> {
        let mut seen = CardBitSet::new();
        for card in order {
            if !seen.insert(*card) || !self.contains(card) {
                return Err(VideoPokerError::DuplicateCard(*card));
            }
        }
        let rest = self.cards.iter().filter(|c| !seen.contains(**c)).copied();
        let mut cards: Vec<Card> = order.to_vec();
        cards.extend(rest);
        self.cards = cards;
        Ok(())
    }
}

/// The serialized form of a `Deck`, checked before it becomes one.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct DeckParts {
    cards: Vec<Card>,
    dealt: Vec<Card>,
}

#[cfg(feature = "serde")]
impl TryFrom<DeckParts> for Deck {
    type Error = VideoPokerError;

    fn try_from(parts: DeckParts) -> Result<Self, Self::Error> {
        let mut seen = CardBitSet::new();
        for card in parts.cards.iter().chain(&parts.dealt) {
            if !seen.insert(*card) {
                return Err(VideoPokerError::DuplicateCard(*card));
            }
        }
        if seen.count() != DECK_SIZE {
            return Err(VideoPokerError::IncompleteDeck(seen.count()));
        }
        Ok(Self {
            cards: parts.cards,
            dealt: parts.dealt,
        })
    }
}

#[cfg(feature = "serde")]
impl From<Deck> for DeckParts {
    fn from(deck: Deck) -> Self {
        Self {
            cards: deck.cards,
            dealt: deck.dealt,
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<usize> for Deck {
    type Output = Card;
    fn index(&self, index: usize) -> &Card {
        &self.cards[index]
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    fn all_cards(deck: &Deck) -> CardBitSet {
        let mut seen = CardBitSet::new();
        for card in deck.remaining().iter().chain(deck.dealt()) {
            assert!(seen.insert(*card), "{card} appears twice");
        }
        seen
    }

    #[test]
    fn test_new_is_full_domain() {
        let d = Deck::new();
        assert_eq!(DECK_SIZE, d.len());
        assert!(d.dealt().is_empty());
        assert_eq!(CardBitSet::default(), all_cards(&d));
        assert!(d.contains(&Card::new(Value::Eight, Suit::Heart)));
    }

    #[test_log::test]
    fn test_shuffle_is_permutation() {
        let mut rng = StdRng::seed_from_u64(420);
        let mut d = Deck::new();
        for _ in 0..100 {
            d.shuffle(&mut rng);
            assert_eq!(DECK_SIZE, d.len());
            assert_eq!(CardBitSet::default(), all_cards(&d));
        }
        assert_ne!(Deck::new(), d);
    }

    #[test_log::test]
    fn test_shuffle_same_seed_same_order() {
        let mut one = Deck::new();
        let mut two = Deck::new();
        one.shuffle(&mut StdRng::seed_from_u64(42));
        two.shuffle(&mut StdRng::seed_from_u64(42));
        assert_eq!(one, two);
    }

    #[test]
    fn test_shuffle_card_can_stay_in_place() {
        // With the `0..=i` bound the bottom card keeps its spot about one
        // time in 52. An exclusive bound would never leave it there.
        let mut rng = StdRng::seed_from_u64(1);
        let bottom = Deck::new()[DECK_SIZE - 1];
        let stayed = (0..5_000)
            .filter(|_| {
                let mut d = Deck::new();
                d.shuffle(&mut rng);
                d[DECK_SIZE - 1] == bottom
            })
            .count();
        assert!(stayed > 0);
    }

    #[test]
    fn test_shuffle_roughly_uniform_top_card() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut counts: HashMap<Card, usize> = HashMap::new();
        let rounds = 52_000;
        for _ in 0..rounds {
            let mut d = Deck::new();
            d.shuffle(&mut rng);
            *counts.entry(d[0]).or_insert(0) += 1;
        }
        assert_eq!(DECK_SIZE, counts.len());
        for count in counts.values() {
            // Expect 1000 each, allow a wide band.
            assert!(*count > 800 && *count < 1200, "count {count}");
        }
    }

    #[test_log::test]
    fn test_deal_keeps_union() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut d = Deck::new();
        d.shuffle(&mut rng);

        let mut dealt = Vec::new();
        for n in [5, 3, 1, 0, 10, 33] {
            let cards = d.deal(n).unwrap();
            assert_eq!(n, cards.len());
            dealt.extend(cards);
            assert_eq!(&dealt[..], d.dealt());
            assert_eq!(CardBitSet::default(), all_cards(&d));
        }
        assert!(d.is_empty());
    }

    #[test_log::test]
    fn test_deal_exhausted() {
        let mut d = Deck::new();
        d.deal(50).unwrap();
        let err = d.deal(3).unwrap_err();
        assert!(matches!(
            err,
            VideoPokerError::DeckExhausted {
                requested: 3,
                remaining: 2
            }
        ));
        // Nothing moved.
        assert_eq!(2, d.len());
        assert_eq!(50, d.dealt().len());

        d.deal_one().unwrap();
        d.deal_one().unwrap();
        assert!(matches!(
            d.deal_one(),
            Err(VideoPokerError::DeckExhausted { .. })
        ));
    }

    #[test]
    fn test_reset_after_deal() {
        let mut d = Deck::new();
        d.shuffle(&mut StdRng::seed_from_u64(5));
        d.deal(20).unwrap();
        d.reset();
        assert_eq!(Deck::new(), d);
    }

    #[test]
    fn test_stack() {
        let mut d = Deck::new();
        let order: Vec<Card> = ["Ah", "Kh", "Qh"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        d.stack(&order).unwrap();
        assert_eq!(DECK_SIZE, d.len());
        assert_eq!(order, d.deal(3).unwrap());
        assert_eq!(CardBitSet::default(), all_cards(&d));

        // Already dealt.
        assert!(matches!(
            d.stack(&order[..1]),
            Err(VideoPokerError::DuplicateCard(_))
        ));
        // Named twice.
        let twice = [d[0], d[0]];
        assert!(d.stack(&twice).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip_after_deal() {
        let mut d = Deck::new();
        d.shuffle(&mut StdRng::seed_from_u64(3));
        d.deal(7).unwrap();

        let json = serde_json::to_string(&d).unwrap();
        let back: Deck = serde_json::from_str(&json).unwrap();
        assert_eq!(d, back);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_rejects_broken_decks() {
        let mut d = Deck::new();
        d.deal(2).unwrap();
        let json = serde_json::to_value(&d).unwrap();

        // 2c dealt and still in the deck.
        let mut twice = json.clone();
        twice["cards"][0] = serde_json::Value::from("2c");
        let err = serde_json::from_value::<Deck>(twice).unwrap_err();
        assert!(err.to_string().contains("2c"));

        // A card gone missing.
        let mut short = json;
        short["dealt"] = serde_json::json!(["2c"]);
        let err = serde_json::from_value::<Deck>(short).unwrap_err();
        assert!(err.to_string().contains("51"));
    }
}
