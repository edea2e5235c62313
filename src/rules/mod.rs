//! Board rules: match detection, gravity, scoring.
//!
//! These are the pure building blocks the cascade sequences:
//! - [`detect`] / [`find_runs`]: read-only scans for runs of three or more
//! - [`compact`]: per-column gravity plus refill from a rune source
//! - [`ScoreAccumulator`]: points per cleared rune
//! - [`spawn_specials`] / [`blast_area`]: special runes, when enabled

pub mod detector;
pub mod gravity;
pub mod scoring;
pub mod special;

pub use detector::{detect, find_runs, MatchSet, Orientation, Run, MIN_RUN};
pub use gravity::{compact, compact_column, CompactionReport};
pub use scoring::ScoreAccumulator;
pub use special::{blast_area, spawn_specials};
