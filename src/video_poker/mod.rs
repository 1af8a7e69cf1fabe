//! Video poker specific code.
//!
//! The core module knows what a hand is. This module knows what it
//! pays: which pairs qualify, what each category is worth, and how a
//! single round of draw poker runs.

mod evaluator;
pub use self::evaluator::{Classification, Evaluator, MAX_POOL_SIZE, PairQualifier};

mod payout;
pub use self::payout::PayoutTable;

mod round;
pub use self::round::{MAX_BET, Outcome, RngRoundBuilder, Round, RoundBuilder, RoundState};
