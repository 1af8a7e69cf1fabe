//! Video poker in Rust.
//!
//! The crate is split in two. [`core`] has the cards, a 52 card
//! [`Deck`](core::Deck) with a Fisher-Yates shuffle, the five position
//! [`Hand`](core::Hand) and the classification of five cards into a
//! [`HandCategory`](core::HandCategory). [`video_poker`] adds the game
//! rules on top: the Jacks or Better pair qualifier, pay tables, and a
//! single deal/draw round.
//!
//! ```
//! use rs_video_poker::core::parse_cards;
//! use rs_video_poker::video_poker::Evaluator;
//!
//! let evaluator = Evaluator::default();
//! let hand = parse_cards("Ah Kh Qh Jh Th").unwrap();
//! let result = evaluator.classify(&hand).unwrap();
//!
//! assert_eq!("Royal Flush", result.descriptive_label);
//! assert_eq!(250, evaluator.payout(&result, 1));
//! ```
//!
//! Card codes use `T` for ten. `10` is still accepted when parsing.

/// Allow all the core card functionality to be used
/// externally. Nothing in core knows about pay tables.
pub mod core;
/// The video poker rules: qualifiers, pay tables and rounds.
pub mod video_poker;
