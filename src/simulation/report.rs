use core::fmt;

use crate::core::NUM_PLAYERS;

use super::stats::StatSummary;

/// How many reporting categories a run produces: one per player, one per
/// team, and one overall.
pub const CATEGORY_COUNT: usize = NUM_PLAYERS + 2 + 1;

/// A reporting category for accumulated scores.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ScoreCategory {
    /// One player's hand scores.
    Player(usize),
    /// The summed scores of one team's two hands.
    Team(usize),
    /// The summed scores of all four hands.
    Overall,
}

impl ScoreCategory {
    /// Every category in reporting order.
    pub const ALL: [ScoreCategory; CATEGORY_COUNT] = [
        ScoreCategory::Player(0),
        ScoreCategory::Player(1),
        ScoreCategory::Player(2),
        ScoreCategory::Player(3),
        ScoreCategory::Team(0),
        ScoreCategory::Team(1),
        ScoreCategory::Overall,
    ];

    /// Dense index of this category, matching the order of `ALL`.
    ///
    /// # Panics
    ///
    /// Panics if the player or team index is out of range for a four
    /// player, two team game.
    pub fn index(self) -> usize {
        match self {
            ScoreCategory::Player(p) => {
                assert!(p < NUM_PLAYERS, "no player {p}");
                p
            }
            ScoreCategory::Team(t) => {
                assert!(t < 2, "no team {t}");
                NUM_PLAYERS + t
            }
            ScoreCategory::Overall => CATEGORY_COUNT - 1,
        }
    }
}

impl fmt::Display for ScoreCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreCategory::Player(p) => write!(f, "player_{p}"),
            ScoreCategory::Team(t) => write!(f, "team_{t}"),
            ScoreCategory::Overall => write!(f, "overall"),
        }
    }
}

/// Where finalized statistics go.
///
/// The core hands each category's summary to a reporter exactly once and
/// makes no assumptions about rendering or persistence. Text output,
/// image plotting and the like live behind this trait, outside the core.
pub trait Reporter {
    /// Receive one category's finalized summary.
    fn report(&mut self, category: ScoreCategory, summary: &StatSummary);
}
