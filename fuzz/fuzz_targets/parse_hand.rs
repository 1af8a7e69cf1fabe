#![no_main]
#[macro_use]
extern crate libfuzzer_sys;
extern crate rs_video_poker;
use rs_video_poker::core::{Hand, Rankable};
use std::str;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = str::from_utf8(data) {
        if let Ok(h) = s.parse::<Hand>() {
            let cards = h.cards().unwrap();
            // Printing and parsing again gives the same hand.
            let again: Hand = h.to_string().parse().unwrap();
            assert_eq!(h, again);
            cards.category().unwrap();
        }
    }
});
