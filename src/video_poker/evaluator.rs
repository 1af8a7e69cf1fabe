use tracing::event;

use super::PayoutTable;
use crate::core::{
    Card, CardBitSet, CardIter, HAND_SIZE, HandCategory, Rankable, Value, VideoPokerError,
};

/// Most cards `Evaluator::classify_best` will look at.
pub const MAX_POOL_SIZE: usize = 7;

/// Decides whether a single pair is good enough to be paid.
///
/// Jacks or Better only pays a pair of jacks, queens, kings or aces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PairQualifier {
    min_value: Value,
}

impl PairQualifier {
    /// Pairs of jacks and up are paid.
    pub const JACKS_OR_BETTER: PairQualifier = PairQualifier {
        min_value: Value::Jack,
    };

    /// Pairs of `min_value` and up are paid.
    pub fn new(min_value: Value) -> Self {
        Self { min_value }
    }

    /// Every pair is paid.
    pub fn any_pair() -> Self {
        Self::new(Value::Two)
    }

    pub fn min_value(&self) -> Value {
        self.min_value
    }

    pub fn qualifies(&self, value: Value) -> bool {
        value >= self.min_value
    }
}

impl Default for PairQualifier {
    fn default() -> Self {
        Self::JACKS_OR_BETTER
    }
}

/// The result of looking at one hand.
///
/// `category` is what the cards are. `payable_category` is what the
/// pay table is asked about, which only differs from `category` for a
/// pair that doesn't qualify.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Classification {
    pub category: HandCategory,
    pub payable_category: HandCategory,
    pub descriptive_label: String,
    /// The five cards the classification is for.
    pub cards: [Card; HAND_SIZE],
}

impl Classification {
    /// Does this hand pay anything at all?
    pub fn is_winner(&self) -> bool {
        self.payable_category != HandCategory::Nothing
    }
}

/// Classifies hands and prices them.
///
/// ```
/// use rs_video_poker::core::{HandCategory, parse_cards};
/// use rs_video_poker::video_poker::Evaluator;
///
/// let evaluator = Evaluator::default();
/// let low_pair = parse_cards("2c 2d 4h 9s Kc").unwrap();
/// let result = evaluator.classify(&low_pair).unwrap();
///
/// assert_eq!(HandCategory::Pair, result.category);
/// assert_eq!(HandCategory::Nothing, result.payable_category);
/// assert_eq!(0, evaluator.payout(&result, 5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Evaluator {
    qualifier: PairQualifier,
    payout_table: PayoutTable,
}

impl Evaluator {
    pub fn new(qualifier: PairQualifier, payout_table: PayoutTable) -> Self {
        Self {
            qualifier,
            payout_table,
        }
    }

    pub fn qualifier(&self) -> PairQualifier {
        self.qualifier
    }

    pub fn payout_table(&self) -> &PayoutTable {
        &self.payout_table
    }

    /// Classify exactly five distinct cards.
    pub fn classify(&self, cards: &[Card]) -> Result<Classification, VideoPokerError> {
        let category = cards.category()?;
        let (payable_category, descriptive_label) = match category {
            HandCategory::Pair => {
                let value = cards
                    .paired_value()?
                    .ok_or(VideoPokerError::InvalidHandSize(cards.len()))?;
                if self.qualifier.qualifies(value) {
                    (HandCategory::Pair, format!("Pair of {}", value.plural_name()))
                } else {
                    (
                        HandCategory::Nothing,
                        format!(
                            "Pair of {} (below {})",
                            value.plural_name(),
                            self.qualifier.min_value.plural_name()
                        ),
                    )
                }
            }
            other => (other, other.label().to_string()),
        };

        let mut five = [Card::from(0u8); HAND_SIZE];
        five.copy_from_slice(cards);

        event!(
            tracing::Level::TRACE,
            ?category,
            ?payable_category,
            "Classified hand"
        );
        Ok(Classification {
            category,
            payable_category,
            descriptive_label,
            cards: five,
        })
    }

    /// Classify the best five card hand out of five to seven cards.
    ///
    /// Every five card subset is tried. The winner is the one with the
    /// best payable category, with the displayed category breaking ties.
    ///
    /// ```
    /// use rs_video_poker::core::{HandCategory, parse_cards};
    /// use rs_video_poker::video_poker::Evaluator;
    ///
    /// let evaluator = Evaluator::default();
    /// let seven = parse_cards("Ah Kh 2c Qh 7d Jh Th").unwrap();
    /// let best = evaluator.classify_best(&seven).unwrap();
    /// assert_eq!(HandCategory::RoyalFlush, best.category);
    /// ```
    pub fn classify_best(&self, cards: &[Card]) -> Result<Classification, VideoPokerError> {
        if !(HAND_SIZE..=MAX_POOL_SIZE).contains(&cards.len()) {
            return Err(VideoPokerError::InvalidHandSize(cards.len()));
        }
        let mut seen = CardBitSet::new();
        for c in cards {
            if !seen.insert(*c) {
                return Err(VideoPokerError::DuplicateCard(*c));
            }
        }

        let mut best: Option<Classification> = None;
        for subset in CardIter::new(cards, HAND_SIZE) {
            let candidate = self.classify(&subset)?;
            let better = best.as_ref().is_none_or(|b| {
                (candidate.payable_category, candidate.category)
                    > (b.payable_category, b.category)
            });
            if better {
                best = Some(candidate);
            }
        }
        best.ok_or(VideoPokerError::InvalidHandSize(cards.len()))
    }

    /// The multiplier the pay table gives a payable category.
    pub fn multiplier(&self, payable_category: HandCategory) -> u32 {
        self.payout_table.multiplier(payable_category)
    }

    /// What a classified hand wins for a bet of `bet` credits.
    pub fn payout(&self, classification: &Classification, bet: u32) -> u64 {
        u64::from(bet) * u64::from(self.multiplier(classification.payable_category))
    }
}
