use rand::{Rng, rngs::ThreadRng};
use tracing::event;

use super::{Classification, Evaluator};
use crate::core::{Deck, HAND_SIZE, Hand, VideoPokerError};

/// Largest number of credits that can be bet on one round.
pub const MAX_BET: u32 = 5;

/// Where a round is at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Five cards are showing and the player may still draw.
    Dealt,
    /// The draw has been taken. Only scoring is left.
    Drawn,
}

/// The scored result of a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub classification: Classification,
    /// Pay table multiplier for the payable category.
    pub multiplier: u32,
    /// `bet * multiplier`
    pub winnings: u64,
}

/// One game of five card draw: deal, an optional single draw, then score.
///
/// Rounds are built with [`RoundBuilder`] which deals the opening hand.
#[derive(Debug, Clone)]
pub struct Round {
    bet: u32,
    evaluator: Evaluator,
    deck: Deck,
    hand: Hand,
    state: RoundState,
}

impl Round {
    pub fn bet(&self) -> u32 {
        self.bet
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    /// Replace every card that isn't held. This can only be done once.
    ///
    /// Holding all five is allowed and simply ends the drawing.
    /// Returns how many new cards were drawn.
    pub fn draw(&mut self, held: [bool; HAND_SIZE]) -> Result<usize, VideoPokerError> {
        if self.state == RoundState::Drawn {
            return Err(VideoPokerError::DrawAlreadyTaken);
        }
        let drawn = self.hand.hold_and_draw(held, &mut self.deck)?;
        self.state = RoundState::Drawn;
        event!(tracing::Level::DEBUG, drawn, hand = %self.hand, "Draw taken");
        Ok(drawn)
    }

    /// Score the hand as it is now.
    pub fn score(&self) -> Result<Outcome, VideoPokerError> {
        let cards = self.hand.cards()?;
        let classification = self.evaluator.classify(&cards)?;
        let multiplier = self.evaluator.multiplier(classification.payable_category);
        let winnings = self.evaluator.payout(&classification, self.bet);
        event!(
            tracing::Level::DEBUG,
            label = %classification.descriptive_label,
            winnings,
            "Round scored"
        );
        Ok(Outcome {
            classification,
            multiplier,
            winnings,
        })
    }
}

/// # RoundBuilder
///
/// `RngRoundBuilder` configures a round before the cards come out. Every
/// field is optional: the bet defaults to one credit, the evaluator to
/// Jacks or Better with the 9/6 pay table, and the deck to a freshly
/// shuffled one.
///
/// `RoundBuilder` is a type alias for `RngRoundBuilder<ThreadRng>`.
///
/// ## Examples
///
/// ```
/// use rs_video_poker::video_poker::{RoundBuilder, RoundState};
///
/// let mut round = RoundBuilder::default().bet(5).build().unwrap();
/// assert_eq!(RoundState::Dealt, round.state());
/// round.draw([true, true, false, false, false]).unwrap();
/// let outcome = round.score().unwrap();
/// assert_eq!(outcome.winnings, 5 * u64::from(outcome.multiplier));
/// ```
///
/// A seeded rng makes the round repeatable:
///
/// ```
/// use rand::{SeedableRng, rngs::StdRng};
/// use rs_video_poker::video_poker::RngRoundBuilder;
///
/// let one = RngRoundBuilder::default()
///     .rng(StdRng::seed_from_u64(420))
///     .build()
///     .unwrap();
/// let two = RngRoundBuilder::default()
///     .rng(StdRng::seed_from_u64(420))
///     .build()
///     .unwrap();
/// assert_eq!(one.hand(), two.hand());
/// ```
pub struct RngRoundBuilder<R: Rng> {
    bet: Option<u32>,
    evaluator: Option<Evaluator>,
    deck: Option<Deck>,
    rng: Option<R>,
}

/// The rng is ThreadRng.
pub type RoundBuilder = RngRoundBuilder<ThreadRng>;

impl<R: Rng> RngRoundBuilder<R> {
    /// Credits bet on this round, from 1 to `MAX_BET`.
    pub fn bet(mut self, bet: u32) -> Self {
        self.bet = Some(bet);
        self
    }

    pub fn evaluator(mut self, evaluator: Evaluator) -> Self {
        self.evaluator = Some(evaluator);
        self
    }

    /// Set the deck. It is dealt from as it is, without a shuffle, which
    /// allows for a deterministic round.
    pub fn deck(mut self, deck: Deck) -> Self {
        self.deck = Some(deck);
        self
    }

    pub fn rng(mut self, rng: R) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Check the bet, get the deck ready and deal the opening hand.
    pub fn build(self) -> Result<Round, VideoPokerError> {
        let bet = self.bet.unwrap_or(1);
        if !(1..=MAX_BET).contains(&bet) {
            return Err(VideoPokerError::InvalidBet(bet));
        }

        let mut deck = match (self.deck, self.rng) {
            (Some(deck), _) => deck,
            (None, Some(mut rng)) => shuffled_deck(&mut rng),
            (None, None) => shuffled_deck(&mut rand::rng()),
        };

        let mut hand = Hand::new();
        hand.deal_from(&mut deck)?;
        event!(tracing::Level::DEBUG, bet, hand = %hand, "Round dealt");

        Ok(Round {
            bet,
            evaluator: self.evaluator.unwrap_or_default(),
            deck,
            hand,
            state: RoundState::Dealt,
        })
    }
}

impl<R: Rng> Default for RngRoundBuilder<R> {
    fn default() -> Self {
        Self {
            bet: None,
            evaluator: None,
            deck: None,
            rng: None,
        }
    }
}

fn shuffled_deck<R: Rng>(rng: &mut R) -> Deck {
    let mut deck = Deck::new();
    deck.shuffle(rng);
    deck
}
