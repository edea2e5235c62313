//! Score accumulation.
//!
//! Each clearing pass awards `points_per_rune × |MatchSet|`. The score only
//! ever grows, and only the cascade's clearing step touches it.

use serde::{Deserialize, Serialize};

/// Running score for one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreAccumulator {
    total: u64,
    points_per_rune: u64,
}

impl ScoreAccumulator {
    #[must_use]
    pub const fn new(points_per_rune: u64) -> Self {
        Self {
            total: 0,
            points_per_rune,
        }
    }

    /// Award points for `cleared` runes. Returns the points added.
    pub fn award(&mut self, cleared: usize) -> u64 {
        let points = self.points_per_rune.saturating_mul(cleared as u64);
        self.total = self.total.saturating_add(points);
        points
    }

    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    #[must_use]
    pub const fn points_per_rune(&self) -> u64 {
        self.points_per_rune
    }
}
