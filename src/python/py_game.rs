//! Game bindings for Python.

use numpy::{PyArray1, PyArray2, PyArrayMethods};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{GameRng, BOARD_SIZE};
use crate::engine::{Engine, EngineEvent};

use super::py_core::{PyEngineConfig, PyGameStats};

fn describe(events: Vec<EngineEvent>) -> Vec<String> {
    events.into_iter().map(|event| format!("{event:?}")).collect()
}

/// Python wrapper for Engine.
///
/// One game on an 8x8 board, seeded from the config.
#[pyclass(name = "RuneGame")]
pub struct PyRuneGame {
    engine: Engine<GameRng>,
}

#[pymethods]
impl PyRuneGame {
    /// Create a game. Uses default settings when no config is given.
    #[new]
    #[pyo3(signature = (config = None))]
    fn new(config: Option<PyEngineConfig>) -> PyResult<Self> {
        let config = config.map(|c| c.0).unwrap_or_default();
        let engine = Engine::new(config).map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self { engine })
    }

    /// Start over with a fresh board.
    fn new_game(&mut self) {
        self.engine.new_game();
    }

    /// Click a cell. Returns event descriptions.
    ///
    /// Raises ValueError for positions off the board.
    fn select_tile(&mut self, row: usize, col: usize) -> PyResult<Vec<String>> {
        self.engine
            .select_tile(row, col)
            .map(describe)
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// Run one cascade phase. Returns event descriptions (empty when idle).
    fn advance(&mut self) -> Vec<String> {
        describe(self.engine.advance())
    }

    /// Run the cascade to completion.
    ///
    /// Returns (passes, points) for the cascade.
    fn resolve(&mut self) -> (u32, u64) {
        let summary = self.engine.resolve();
        (summary.passes, summary.points)
    }

    /// Suggested wait before the next advance(), or None when idle.
    fn pending_delay_ms(&self) -> Option<u64> {
        self.engine
            .pending_delay()
            .map(|delay| delay.as_millis() as u64)
    }

    /// Board as an (8, 8) int8 array of rune indices, -1 for empty cells.
    fn board<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<i8>>> {
        let cells: Vec<i8> = self
            .engine
            .board()
            .rows()
            .flatten()
            .copied()
            .map(|cell| cell.map_or(-1, |rune| rune.index() as i8))
            .collect();
        PyArray1::from_vec_bound(py, cells).reshape([BOARD_SIZE, BOARD_SIZE])
    }

    /// Matched positions awaiting clearing, row-major.
    fn current_matches(&self) -> Vec<(usize, usize)> {
        self.engine
            .current_matches()
            .sorted()
            .into_iter()
            .map(|pos| (pos.row(), pos.col()))
            .collect()
    }

    /// Special runes on the board as `(row, col, kind)`, row-major.
    fn specials(&self) -> Vec<(usize, usize, String)> {
        self.engine
            .board()
            .specials()
            .map(|(pos, special)| (pos.row(), pos.col(), format!("{special:?}")))
            .collect()
    }

    #[getter]
    fn score(&self) -> u64 {
        self.engine.score()
    }

    #[getter]
    fn moves_left(&self) -> u32 {
        self.engine.moves_left()
    }

    #[getter]
    fn level(&self) -> u32 {
        self.engine.level()
    }

    #[getter]
    fn selection(&self) -> Option<(usize, usize)> {
        self.engine.selection().map(|pos| (pos.row(), pos.col()))
    }

    #[getter]
    fn resolving(&self) -> bool {
        self.engine.is_resolving()
    }

    #[getter]
    fn game_over(&self) -> bool {
        self.engine.is_game_over()
    }

    #[getter]
    fn stats(&self) -> PyGameStats {
        PyGameStats(*self.engine.stats())
    }

    fn __repr__(&self) -> String {
        let status = if self.engine.is_game_over() {
            "over"
        } else if self.engine.is_resolving() {
            "resolving"
        } else {
            "idle"
        };
        format!(
            "RuneGame(score={}, moves_left={}, status={})",
            self.engine.score(),
            self.engine.moves_left(),
            status
        )
    }
}
