//! Game state.
//!
//! ## GameState
//!
//! Everything a host can observe about one game:
//! - Board contents
//! - Score, moves left, level
//! - Current selection
//! - Cascade phase (and so whether input is gated)
//! - Matches detected in the current pass, until they are cleared
//! - Special runes the current pass will leave behind (special runes on)
//!
//! A `GameState` is created by a new-game operation and replaced wholesale
//! on restart. Between those it is mutated in place by the move controller
//! and the cascade resolver only; hosts get read accessors.

use serde::{Deserialize, Serialize};

use super::board::Board;
use super::config::EngineConfig;
use super::position::Position;
use super::rune::SpecialRune;
use crate::cascade::CascadePhase;
use crate::rules::{MatchSet, ScoreAccumulator};

/// Complete state of one game.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) score: ScoreAccumulator,
    pub(crate) moves_left: u32,
    pub(crate) level: u32,
    pub(crate) selection: Option<Position>,
    pub(crate) phase: CascadePhase,
    pub(crate) current_matches: MatchSet,
    /// Detection passes that found matches in the running cascade.
    pub(crate) pass: u32,
    /// Points awarded in the running cascade.
    pub(crate) cascade_points: u64,
    /// Long runs spawn special runes.
    pub(crate) special_runes: bool,
    /// Specials the current pass leaves behind instead of clearing.
    pub(crate) pending_specials: Vec<(Position, SpecialRune)>,
}

impl GameState {
    /// Fresh state around `board`: zero score, full move budget, idle.
    #[must_use]
    pub fn new(board: Board, config: &EngineConfig) -> Self {
        Self {
            board,
            score: ScoreAccumulator::new(config.points_per_rune),
            moves_left: config.starting_moves,
            level: config.starting_level,
            selection: None,
            phase: CascadePhase::Idle,
            current_matches: MatchSet::new(),
            pass: 0,
            cascade_points: 0,
            special_runes: config.special_runes,
            pending_specials: Vec::new(),
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn score(&self) -> u64 {
        self.score.total()
    }

    #[must_use]
    pub fn moves_left(&self) -> u32 {
        self.moves_left
    }

    /// Level counter. Static for now; there is no progression.
    #[must_use]
    pub fn level(&self) -> u32 {
        self.level
    }

    #[must_use]
    pub fn selection(&self) -> Option<Position> {
        self.selection
    }

    #[must_use]
    pub fn phase(&self) -> CascadePhase {
        self.phase
    }

    /// True while a cascade is running. Input is ignored meanwhile.
    #[must_use]
    pub fn is_resolving(&self) -> bool {
        self.phase != CascadePhase::Idle
    }

    /// True once the move budget is spent.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.moves_left == 0
    }

    /// Positions matched by the current detection pass.
    ///
    /// Populated when a pass finds matches and emptied once they are
    /// cleared, so a host can highlight them in between.
    #[must_use]
    pub fn current_matches(&self) -> &MatchSet {
        &self.current_matches
    }

    /// Special runes the current pass will leave behind, and where.
    #[must_use]
    pub fn pending_specials(&self) -> &[(Position, SpecialRune)] {
        &self.pending_specials
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameRng;

    #[test]
    fn test_new_state() {
        let config = EngineConfig::default();
        let board = Board::random(&mut GameRng::new(1));
        let state = GameState::new(board.clone(), &config);

        assert_eq!(state.board(), &board);
        assert_eq!(state.score(), 0);
        assert_eq!(state.moves_left(), 20);
        assert_eq!(state.level(), 1);
        assert_eq!(state.selection(), None);
        assert_eq!(state.phase(), CascadePhase::Idle);
        assert!(!state.is_resolving());
        assert!(!state.is_game_over());
        assert!(state.current_matches().is_empty());
    }

    #[test]
    fn test_zero_budget_is_game_over() {
        let config = EngineConfig::default().with_starting_moves(0);
        let state = GameState::new(Board::random(&mut GameRng::new(1)), &config);
        assert!(state.is_game_over());
    }

    #[test]
    fn test_state_serializes() {
        let config = EngineConfig::default();
        let state = GameState::new(Board::random(&mut GameRng::new(3)), &config);
        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(back.board(), state.board());
        assert_eq!(back.moves_left(), state.moves_left());
    }
}
