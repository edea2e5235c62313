//! The engine: owns one game and handles clicks.

use std::time::Duration;

use tracing::{debug, info, instrument, trace, warn};

use crate::cascade::{
    CascadeEvent, CascadePhase, CascadeResolver, CascadeSummary, NoopObserver, PhaseObserver,
};
use crate::core::{
    Board, DealPolicy, EngineConfig, EngineError, GameRng, GameRngState, GameState, Position,
    RuneSource, SpecialRune, SwapPolicy,
};
use crate::rules::{blast_area, detect, MatchSet};

use super::event::{EngineEvent, IgnoreReason};
use super::stats::GameStats;

/// Boards dealt before [`DealPolicy::RerollRuns`] gives up and keeps the
/// last one.
const MAX_DEAL_ATTEMPTS: u32 = 1000;

/// A single match-3 game plus the rune source that feeds it.
///
/// The engine is the only owner of the [`GameState`]. Input goes through
/// [`select_tile`](Self::select_tile); cascades advance through
/// [`advance`](Self::advance) (one phase at a time) or
/// [`resolve`](Self::resolve) (to completion).
#[derive(Debug)]
pub struct Engine<S = GameRng> {
    config: EngineConfig,
    source: S,
    state: GameState,
    stats: GameStats,
}

impl Engine<GameRng> {
    /// Create an engine with a [`GameRng`] seeded from `config.seed` and
    /// deal the first board.
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        let rng = GameRng::new(config.seed);
        Self::with_source(config, rng)
    }

    /// Checkpoint of the rune source, for reproducing later refills.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.source.state()
    }
}

impl<S: RuneSource> Engine<S> {
    /// Create an engine drawing runes from `source` and deal the first board.
    pub fn with_source(config: EngineConfig, mut source: S) -> Result<Self, EngineError> {
        config.validate()?;
        let board = deal(config.deal_policy, &mut source);
        Ok(Self::assemble(config, source, board))
    }

    /// Create an engine starting from a fixed, fully populated board.
    pub fn with_board(config: EngineConfig, source: S, board: Board) -> Result<Self, EngineError> {
        config.validate()?;
        if !board.is_full() {
            return Err(EngineError::invalid_board("starting board has empty cells"));
        }
        Ok(Self::assemble(config, source, board))
    }

    fn assemble(config: EngineConfig, source: S, board: Board) -> Self {
        let state = GameState::new(board, &config);
        info!(moves = state.moves_left(), "New game");
        Self {
            config,
            source,
            state,
            stats: GameStats::default(),
        }
    }

    /// Replace the game wholesale: fresh board, zero score, full budget.
    ///
    /// Under the default [`DealPolicy::AllowRuns`] the new board is not
    /// checked for existing runs. If it has any, they stay on the board
    /// until the first swap's cascade clears them.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) -> &GameState {
        let board = deal(self.config.deal_policy, &mut self.source);
        self.state = GameState::new(board, &self.config);
        self.stats = GameStats::default();
        info!(moves = self.state.moves_left(), "New game");
        &self.state
    }

    /// Handle a click on `(row, col)`.
    ///
    /// - While resolving or after game over: ignored.
    /// - On a special rune (with special runes enabled): the selection is
    ///   dropped, a move is spent and the special's area is blasted.
    /// - No selection yet: the cell becomes the selection.
    /// - Otherwise the selection is cleared, and if the cell is adjacent to
    ///   it the two runes are swapped, a move is spent and a cascade starts.
    ///
    /// Only an off-board position is an error.
    #[instrument(skip(self))]
    pub fn select_tile(&mut self, row: usize, col: usize) -> Result<Vec<EngineEvent>, EngineError> {
        let pos = Position::new(row, col)?;

        if let Some(reason) = self.input_gate() {
            trace!(?reason, "Click ignored");
            return Ok(vec![EngineEvent::InputIgnored { reason }]);
        }

        if let Some(special) = self.armed_special(pos) {
            let mut events = Vec::with_capacity(2);
            if self.state.selection.take().is_some() {
                events.push(EngineEvent::SelectionCleared);
            }
            events.push(self.trigger(pos, special));
            return Ok(events);
        }

        let Some(first) = self.state.selection.take() else {
            self.state.selection = Some(pos);
            return Ok(vec![EngineEvent::TileSelected(pos)]);
        };

        let mut events = Vec::with_capacity(2);
        if first.is_adjacent(pos) {
            events.push(self.swap(first, pos));
        } else {
            trace!(%first, second = %pos, "Second click not adjacent");
        }
        events.push(EngineEvent::SelectionCleared);
        Ok(events)
    }

    fn input_gate(&self) -> Option<IgnoreReason> {
        if self.state.is_resolving() {
            Some(IgnoreReason::Resolving)
        } else if self.state.is_game_over() {
            Some(IgnoreReason::GameOver)
        } else {
            None
        }
    }

    fn armed_special(&self, pos: Position) -> Option<SpecialRune> {
        if self.config.special_runes {
            self.state.board.special(pos)
        } else {
            None
        }
    }

    fn trigger(&mut self, at: Position, special: SpecialRune) -> EngineEvent {
        let area = blast_area(&self.state.board, at, special);
        let cells = area.sorted();

        self.state.moves_left = self.state.moves_left.saturating_sub(1);
        self.stats.record_trigger();
        CascadeResolver::begin_blast(&mut self.state, area);
        debug!(
            %at,
            ?special,
            cells = cells.len(),
            moves_left = self.state.moves_left,
            "Special triggered"
        );

        EngineEvent::SpecialTriggered {
            at,
            special,
            area: cells,
            moves_left: self.state.moves_left,
        }
    }

    fn swap(&mut self, from: Position, to: Position) -> EngineEvent {
        self.state.board.swap(from, to);

        if self.config.swap_policy == SwapPolicy::RevertIfNoMatch
            && detect(&self.state.board).is_empty()
        {
            self.state.board.swap(from, to);
            debug!(%from, %to, "Swap made no match, reverted");
            return EngineEvent::SwapReverted { from, to };
        }

        self.state.moves_left = self.state.moves_left.saturating_sub(1);
        self.stats.record_swap();
        CascadeResolver::begin(&mut self.state);
        debug!(%from, %to, moves_left = self.state.moves_left, "Swapped");

        EngineEvent::Swapped {
            from,
            to,
            moves_left: self.state.moves_left,
        }
    }

    /// Run one cascade phase.
    ///
    /// Returns nothing when idle. The step that settles the last move's
    /// cascade also reports [`EngineEvent::GameOver`].
    pub fn advance(&mut self) -> Vec<EngineEvent> {
        let Some(event) = CascadeResolver::step(&mut self.state, &mut self.source) else {
            return Vec::new();
        };
        self.stats.record(&event);

        let settled = matches!(event, CascadeEvent::Settled { .. });
        let mut events = vec![EngineEvent::Cascade(event)];
        if settled && self.state.is_game_over() {
            info!(score = self.state.score(), "Game over");
            events.push(EngineEvent::GameOver {
                score: self.state.score(),
            });
        }
        events
    }

    /// Run the current cascade to completion.
    pub fn resolve(&mut self) -> CascadeSummary {
        self.resolve_with(&mut NoopObserver)
    }

    /// Run the current cascade to completion, reporting every phase.
    pub fn resolve_with<O: PhaseObserver + ?Sized>(&mut self, observer: &mut O) -> CascadeSummary {
        let was_resolving = self.state.is_resolving();
        let stats = &mut self.stats;
        let mut tracking = |state: &GameState, event: &CascadeEvent| {
            stats.record(event);
            observer.on_phase(state, event);
        };
        let summary = CascadeResolver::run(&mut self.state, &mut self.source, &mut tracking);

        if was_resolving && self.state.is_game_over() {
            info!(score = self.state.score(), "Game over");
        }
        summary
    }

    /// How long a host should wait before the next [`advance`](Self::advance),
    /// per the configured pacing. `None` when idle.
    #[must_use]
    pub fn pending_delay(&self) -> Option<Duration> {
        let pacing = &self.config.pacing;
        match self.state.phase() {
            CascadePhase::Idle => None,
            CascadePhase::Detecting if self.state.pass == 0 => Some(pacing.swap()),
            CascadePhase::Detecting => Some(pacing.refill()),
            CascadePhase::Clearing => Some(pacing.highlight()),
            CascadePhase::Compacting => Some(pacing.clear()),
        }
    }

    // === Read accessors ===

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    #[must_use]
    pub fn score(&self) -> u64 {
        self.state.score()
    }

    #[must_use]
    pub fn moves_left(&self) -> u32 {
        self.state.moves_left()
    }

    #[must_use]
    pub fn level(&self) -> u32 {
        self.state.level()
    }

    #[must_use]
    pub fn selection(&self) -> Option<Position> {
        self.state.selection()
    }

    #[must_use]
    pub fn is_resolving(&self) -> bool {
        self.state.is_resolving()
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    #[must_use]
    pub fn phase(&self) -> CascadePhase {
        self.state.phase()
    }

    /// Matches from the latest detection pass, until they are cleared.
    #[must_use]
    pub fn current_matches(&self) -> &MatchSet {
        self.state.current_matches()
    }

    #[must_use]
    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

/// Deal a fresh board. [`DealPolicy::RerollRuns`] redeals until the board
/// has no runs, keeping the last attempt if none comes out clean.
fn deal<S: RuneSource + ?Sized>(policy: DealPolicy, source: &mut S) -> Board {
    let mut board = Board::random(source);
    if policy == DealPolicy::AllowRuns {
        return board;
    }

    let mut attempts = 1;
    while !detect(&board).is_empty() {
        if attempts == MAX_DEAL_ATTEMPTS {
            warn!(attempts, "No run-free board dealt, keeping the last one");
            break;
        }
        board = Board::random(source);
        attempts += 1;
    }
    trace!(attempts, "Board dealt");
    board
}
