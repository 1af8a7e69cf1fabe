#![no_main]
#[macro_use]
extern crate libfuzzer_sys;
extern crate rs_video_poker;
use rs_video_poker::core::{Card, CardBitSet, CardIter};
use rs_video_poker::video_poker::Evaluator;

fuzz_target!(|cards: Vec<Card>| {
    let unique: Vec<Card> = cards
        .iter()
        .scan(CardBitSet::new(), |seen, c| Some(seen.insert(*c).then_some(*c)))
        .flatten()
        .take(7)
        .collect();
    if unique.len() < 5 {
        return;
    }

    let evaluator = Evaluator::default();
    let best = evaluator.classify_best(&unique).unwrap();
    for subset in CardIter::new(&unique, 5) {
        let one = evaluator.classify(&subset).unwrap();
        assert!(
            (best.payable_category, best.category) >= (one.payable_category, one.category)
        );
    }
});
