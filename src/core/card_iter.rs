use super::Card;

/// Iterate every `num_cards` sized subset of a slice of cards.
///
/// Subsets come out in lexicographic index order and each one holds the
/// cards in the same order they appear in the source slice.
///
/// ```
/// use rs_video_poker::core::{Card, CardIter, Deck};
///
/// let mut deck = Deck::new();
/// let seven = deck.deal(7).unwrap();
/// assert_eq!(21, CardIter::new(&seven, 5).count());
/// ```
#[derive(Debug)]
pub struct CardIter<'a> {
    // All the possible cards that can be picked
    possible_cards: &'a [Card],

    // Set of current offsets being used to create card sets.
    idx: Vec<usize>,

    // size of card sets requested.
    num_cards: usize,

    // Set once the last subset was handed out.
    done: bool,
}

impl<'a> CardIter<'a> {
    pub fn new(possible_cards: &'a [Card], num_cards: usize) -> CardIter<'a> {
        CardIter {
            possible_cards,
            idx: (0..num_cards).collect(),
            num_cards,
            done: num_cards == 0 || num_cards > possible_cards.len(),
        }
    }

    /// Step the offsets to the next subset, or mark the iterator as done.
    fn advance(&mut self) {
        let n = self.possible_cards.len();
        // Find the right most offset that can still move forward.
        let mut level = self.num_cards;
        while level > 0 {
            level -= 1;
            let cards_needed_after = self.num_cards - (level + 1);
            if self.idx[level] + 1 + cards_needed_after < n {
                self.idx[level] += 1;
                for after in (level + 1)..self.num_cards {
                    self.idx[after] = self.idx[after - 1] + 1;
                }
                return;
            }
        }
        self.done = true;
    }
}

impl Iterator for CardIter<'_> {
    type Item = Vec<Card>;

    fn next(&mut self) -> Option<Vec<Card>> {
        if self.done {
            return None;
        }
        let result_cards: Vec<Card> = self
            .idx
            .iter()
            .map(|i| self.possible_cards[*i])
            .collect();
        self.advance();
        Some(result_cards)
    }
}
