//! Configuration and statistics bindings for Python.

use pyo3::prelude::*;

use crate::core::{DealPolicy, EngineConfig, PhasePacing, SwapPolicy};
use crate::engine::GameStats;

/// Python wrapper for EngineConfig.
#[pyclass(name = "EngineConfig")]
#[derive(Clone, Debug)]
pub struct PyEngineConfig(pub EngineConfig);

#[pymethods]
impl PyEngineConfig {
    /// Create a configuration.
    ///
    /// # Arguments
    /// - seed: RNG seed for deterministic games
    /// - starting_moves: Move budget per game
    /// - revert_if_no_match: Undo swaps that make no match instead of
    ///   spending a move on them
    /// - instant: Report zero delays between cascade phases
    /// - special_runes: Long runs leave clickable special runes behind
    /// - reroll_runs: Redeal fresh boards until they have no runs
    #[new]
    #[pyo3(signature = (
        seed = 42,
        starting_moves = 20,
        revert_if_no_match = false,
        instant = false,
        special_runes = false,
        reroll_runs = false
    ))]
    fn new(
        seed: u64,
        starting_moves: u32,
        revert_if_no_match: bool,
        instant: bool,
        special_runes: bool,
        reroll_runs: bool,
    ) -> Self {
        let policy = if revert_if_no_match {
            SwapPolicy::RevertIfNoMatch
        } else {
            SwapPolicy::AlwaysCommit
        };
        let pacing = if instant {
            PhasePacing::instant()
        } else {
            PhasePacing::default()
        };
        let deal = if reroll_runs {
            DealPolicy::RerollRuns
        } else {
            DealPolicy::AllowRuns
        };
        Self(
            EngineConfig::default()
                .with_seed(seed)
                .with_starting_moves(starting_moves)
                .with_swap_policy(policy)
                .with_pacing(pacing)
                .with_deal_policy(deal)
                .with_special_runes(special_runes),
        )
    }

    /// Load a configuration from a TOML file.
    #[staticmethod]
    fn from_file(path: &str) -> PyResult<Self> {
        EngineConfig::from_file(path)
            .map(Self)
            .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))
    }

    #[getter]
    fn seed(&self) -> u64 {
        self.0.seed
    }

    #[getter]
    fn starting_moves(&self) -> u32 {
        self.0.starting_moves
    }

    #[getter]
    fn points_per_rune(&self) -> u64 {
        self.0.points_per_rune
    }

    #[getter]
    fn special_runes(&self) -> bool {
        self.0.special_runes
    }

    fn __repr__(&self) -> String {
        format!(
            "EngineConfig(seed={}, starting_moves={}, swap_policy={:?})",
            self.0.seed, self.0.starting_moves, self.0.swap_policy
        )
    }
}

/// Python wrapper for GameStats.
#[pyclass(name = "GameStats")]
#[derive(Clone, Debug)]
pub struct PyGameStats(pub GameStats);

#[pymethods]
impl PyGameStats {
    #[getter]
    fn swaps(&self) -> u32 {
        self.0.swaps
    }

    #[getter]
    fn cascades(&self) -> u32 {
        self.0.cascades
    }

    #[getter]
    fn combo(&self) -> u32 {
        self.0.combo
    }

    #[getter]
    fn max_combo(&self) -> u32 {
        self.0.max_combo
    }

    #[getter]
    fn runes_cleared(&self) -> u64 {
        self.0.runes_cleared
    }

    #[getter]
    fn longest_run(&self) -> usize {
        self.0.longest_run
    }

    #[getter]
    fn specials_spawned(&self) -> u32 {
        self.0.specials_spawned
    }

    #[getter]
    fn specials_triggered(&self) -> u32 {
        self.0.specials_triggered
    }

    fn __repr__(&self) -> String {
        format!(
            "GameStats(swaps={}, max_combo={}, runes_cleared={})",
            self.0.swaps, self.0.max_combo, self.0.runes_cleared
        )
    }
}
