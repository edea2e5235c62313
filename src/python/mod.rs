//! Python bindings for the rune-match engine.
//!
//! Lets a Python host (a pygame front end, a notebook, an RL loop) drive
//! the engine and render the board from a numpy array.
//!
//! # Quick Start
//!
//! ```python
//! import rune_match as rm
//!
//! game = rm.RuneGame(rm.EngineConfig(seed=7))
//!
//! game.select_tile(4, 4)
//! game.select_tile(4, 5)
//!
//! # Animate: one phase per timer tick
//! while game.resolving:
//!     delay = game.pending_delay_ms()
//!     events = game.advance()
//!
//! board = game.board()   # numpy int8, shape (8, 8), -1 for empty
//! print(game.score, game.moves_left)
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_game;

pub use py_core::*;
pub use py_game::*;

/// rune_match: a match-3 rune puzzle engine.
///
/// This module provides:
/// - EngineConfig: seed, move budget, swap policy
/// - RuneGame: one game with click handling and staged cascades
/// - GameStats: per-game combo and clear counters
#[pymodule]
fn rune_match(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyEngineConfig>()?;
    m.add_class::<PyGameStats>()?;
    m.add_class::<PyRuneGame>()?;

    Ok(())
}
