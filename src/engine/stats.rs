//! Per-game statistics.
//!
//! Derived entirely from the event stream, so they never influence play.
//! A combo is the number of matching passes one swap's cascade produced.

use serde::{Deserialize, Serialize};

use crate::cascade::CascadeEvent;

/// Counters for the current game. Reset by `new_game`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    /// Swaps committed (each cost a move).
    pub swaps: u32,
    /// Cascades that cleared at least one rune.
    pub cascades: u32,
    /// Matching passes in the most recent cascade.
    pub combo: u32,
    /// Longest combo this game.
    pub max_combo: u32,
    /// Runes cleared this game.
    pub runes_cleared: u64,
    /// Longest single run cleared this game.
    pub longest_run: usize,
    /// Special runes left behind by long runs.
    pub specials_spawned: u32,
    /// Special runes triggered by a click (each cost a move).
    pub specials_triggered: u32,
}

impl GameStats {
    pub(crate) fn record_swap(&mut self) {
        self.swaps += 1;
    }

    pub(crate) fn record_trigger(&mut self) {
        self.specials_triggered += 1;
    }

    pub(crate) fn record(&mut self, event: &CascadeEvent) {
        match event {
            CascadeEvent::Detected { runs, spawned, .. } => {
                let longest = runs.iter().map(|run| run.length).max().unwrap_or(0);
                self.longest_run = self.longest_run.max(longest);
                self.specials_spawned += spawned.len() as u32;
            }
            CascadeEvent::Cleared { cleared, .. } => {
                self.runes_cleared += *cleared as u64;
            }
            CascadeEvent::Compacted { .. } => {}
            CascadeEvent::Settled { passes, .. } => {
                self.combo = *passes;
                self.max_combo = self.max_combo.max(*passes);
                if *passes > 0 {
                    self.cascades += 1;
                }
            }
        }
    }
}
