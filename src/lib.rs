//! # rune-match
//!
//! A deterministic match-3 puzzle engine: an 8×8 board of runes, adjacent
//! swaps, run detection, gravity, refill and chained cascades, with a score
//! and a finite move budget.
//!
//! ## Design Principles
//!
//! 1. **Owned State**: One [`Engine`] owns one [`GameState`]. Hosts read it,
//!    only the engine writes it.
//!
//! 2. **Injectable Randomness**: Every rune placed comes from a
//!    [`RuneSource`]. Seeded [`GameRng`] for play, [`ScriptedRunes`] for tests.
//!
//! 3. **Explicit Phases**: Cascades are a state machine
//!    (`Idle → Detecting → Clearing → Compacting → Detecting …`) stepped one
//!    transition at a time, so hosts can animate between phases while the
//!    logic stays synchronous.
//!
//! ## Modules
//!
//! - `core`: Runes, positions, board, rune sources, config, errors, state
//! - `rules`: Match detection, gravity compaction, scoring, special runes
//! - `cascade`: The detect/clear/compact state machine
//! - `engine`: Click handling, swaps, move budget, events, statistics
//! - `python`: PyO3 bindings (feature `python`)

pub mod cascade;
pub mod core;
pub mod engine;
pub mod rules;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Board, Cell, DealPolicy, EngineConfig, EngineError, GameRng, GameRngState, GameState,
    PhasePacing, Position, RuneSource, RuneType, ScriptedRunes, SpecialRune, SwapPolicy,
    BOARD_SIZE,
};

pub use crate::rules::{blast_area, detect, find_runs, spawn_specials, MatchSet, Orientation, Run};

pub use crate::cascade::{
    CascadeEvent, CascadePhase, CascadeResolver, CascadeSummary, NoopObserver, PhaseObserver,
};

pub use crate::engine::{Engine, EngineEvent, GameStats, IgnoreReason};
