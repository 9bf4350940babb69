//! Difficulty tiers and the placement ranges they select
//!
//! Pure lookup table: each tier maps to the randomized-range parameters used
//! when placing obstacle pairs. Ranges tighten as the tier increases.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Score at which the session moves from Easy to Normal
pub const NORMAL_THRESHOLD: u32 = 20;
/// Score at which the session moves from Normal to Hard
pub const HARD_THRESHOLD: u32 = 50;

/// Difficulty tier, ordered easiest to hardest
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub enum Difficulty {
    #[default]
    Easy,
    Normal,
    Hard,
}

/// Randomized-range parameters for obstacle placement (inclusive)
#[derive(Debug, Clone)]
pub struct PlacementRanges {
    /// Horizontal distance between consecutive pairs
    pub horizontal_gap: RangeInclusive<i32>,
    /// Vertical opening between the halves of a pair
    pub vertical_gap: RangeInclusive<i32>,
}

impl Difficulty {
    /// Placement ranges for this tier
    pub fn ranges(self) -> PlacementRanges {
        match self {
            Difficulty::Easy => PlacementRanges {
                horizontal_gap: 500..=550,
                vertical_gap: 200..=250,
            },
            Difficulty::Normal => PlacementRanges {
                horizontal_gap: 400..=450,
                vertical_gap: 150..=200,
            },
            Difficulty::Hard => PlacementRanges {
                horizontal_gap: 300..=350,
                vertical_gap: 130..=170,
            },
        }
    }

    /// Tier a score qualifies for (thresholds count when reached or crossed)
    pub fn for_score(score: u32) -> Self {
        if score >= HARD_THRESHOLD {
            Difficulty::Hard
        } else if score >= NORMAL_THRESHOLD {
            Difficulty::Normal
        } else {
            Difficulty::Easy
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
        }
    }
}
