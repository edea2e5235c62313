//! Core engine types: runes, positions, board, rune sources, configuration,
//! errors, and game state.
//!
//! Everything here is plain data plus small invariant-preserving helpers.
//! Sequencing (swaps, cascades) lives in `engine` and `cascade`.

pub mod board;
pub mod config;
pub mod error;
pub mod position;
pub mod rng;
pub mod rune;
pub mod state;

pub use board::{Board, BOARD_SIZE, CELL_COUNT};
pub use config::{DealPolicy, EngineConfig, PhasePacing, SwapPolicy};
pub use error::EngineError;
pub use position::Position;
pub use rng::{GameRng, GameRngState, RuneSource, ScriptedRunes};
pub use rune::{Cell, RuneType, SpecialRune, EMPTY_SYMBOL};
pub use state::GameState;
