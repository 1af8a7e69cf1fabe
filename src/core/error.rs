use thiserror::Error;

use super::Card;

/// This is the core error type for the
/// video poker library. It uses `thiserror` to provide
/// readable error messages
#[derive(Error, Debug)]
pub enum VideoPokerError {
    #[error("Unable to parse value")]
    UnexpectedValueChar,
    #[error("Unable to parse suit")]
    UnexpectedSuitChar,
    #[error("Error reading characters while parsing")]
    TooFewChars,
    #[error("Extra un-used characters found after parsing")]
    UnparsedCharsRemaining,
    #[error("Requested {requested} cards but only {remaining} remain in the deck")]
    DeckExhausted { requested: usize, remaining: usize },
    #[error("Hands are evaluated with exactly five cards, got {0}")]
    InvalidHandSize(usize),
    #[error("Card already added to hand {0}")]
    DuplicateCard(Card),
    #[error("A deck holds every card once, found {0} distinct cards")]
    IncompleteDeck(usize),
    #[error("Hand position {0} is out of range")]
    HandPositionOutOfRange(usize),
    #[error("Bet of {0} is outside the allowed range")]
    InvalidBet(u32),
    #[error("Cards can only be drawn once per round")]
    DrawAlreadyTaken,
    #[error("Invalid payout table: {0}")]
    InvalidPayoutTable(String),
    #[cfg(feature = "serde")]
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
