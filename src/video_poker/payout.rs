use std::collections::BTreeMap;

use crate::core::{HandCategory, VideoPokerError};

const CATEGORY_COUNT: usize = HandCategory::ALL.len();

/// Credits paid per credit bet for every hand category.
///
/// The default is the classic 9/6 Jacks or Better table: full house pays
/// nine, flush pays six.
///
/// ```
/// use rs_video_poker::core::HandCategory;
/// use rs_video_poker::video_poker::PayoutTable;
///
/// let table = PayoutTable::default();
/// assert_eq!(250, table.multiplier(HandCategory::RoyalFlush));
/// assert_eq!(9, table.multiplier(HandCategory::FullHouse));
/// assert_eq!(0, table.multiplier(HandCategory::Nothing));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        try_from = "BTreeMap<HandCategory, u32>",
        into = "BTreeMap<HandCategory, u32>"
    )
)]
pub struct PayoutTable {
    multipliers: [u32; CATEGORY_COUNT],
}

impl PayoutTable {
    /// A table that pays nothing for anything.
    pub fn empty() -> Self {
        Self {
            multipliers: [0; CATEGORY_COUNT],
        }
    }

    /// The multiplier for a payable category.
    pub fn multiplier(&self, category: HandCategory) -> u32 {
        self.multipliers[category as usize]
    }

    /// Return a copy of the table paying `multiplier` for `category`.
    ///
    /// `HandCategory::Nothing` can never pay, so trying to set it to
    /// anything but zero is an error.
    pub fn with_multiplier(
        mut self,
        category: HandCategory,
        multiplier: u32,
    ) -> Result<Self, VideoPokerError> {
        if category == HandCategory::Nothing && multiplier != 0 {
            return Err(VideoPokerError::InvalidPayoutTable(format!(
                "{category} must pay 0, got {multiplier}"
            )));
        }
        self.multipliers[category as usize] = multiplier;
        Ok(self)
    }

    /// Every category with its multiplier, worst hand first.
    pub fn iter(&self) -> impl Iterator<Item = (HandCategory, u32)> + '_ {
        HandCategory::ALL
            .iter()
            .map(|c| (*c, self.multiplier(*c)))
    }

    /// Load a table from JSON, an object keyed by category name.
    /// Categories that are left out pay nothing.
    ///
    /// ```
    /// use rs_video_poker::core::HandCategory;
    /// use rs_video_poker::video_poker::PayoutTable;
    ///
    /// let table = PayoutTable::from_json_str(r#"{"RoyalFlush": 800, "Pair": 1}"#).unwrap();
    /// assert_eq!(800, table.multiplier(HandCategory::RoyalFlush));
    /// assert_eq!(0, table.multiplier(HandCategory::Flush));
    /// ```
    #[cfg(feature = "serde")]
    pub fn from_json_str(json: &str) -> Result<Self, VideoPokerError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a JSON table from a file.
    #[cfg(feature = "serde")]
    pub fn from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self, VideoPokerError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}

impl Default for PayoutTable {
    fn default() -> Self {
        Self {
            multipliers: [
                0,   // Nothing
                1,   // Pair
                2,   // Two pair
                3,   // Three of a kind
                4,   // Straight
                6,   // Flush
                9,   // Full house
                25,  // Four of a kind
                50,  // Straight flush
                250, // Royal flush
            ],
        }
    }
}

impl TryFrom<BTreeMap<HandCategory, u32>> for PayoutTable {
    type Error = VideoPokerError;

    fn try_from(value: BTreeMap<HandCategory, u32>) -> Result<Self, Self::Error> {
        value
            .into_iter()
            .try_fold(Self::empty(), |table, (category, multiplier)| {
                table.with_multiplier(category, multiplier)
            })
    }
}

impl From<PayoutTable> for BTreeMap<HandCategory, u32> {
    fn from(value: PayoutTable) -> Self {
        value.iter().collect()
    }
}
