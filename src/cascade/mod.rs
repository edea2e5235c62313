//! Cascade resolution.
//!
//! A committed swap starts a cascade: detect → clear → compact → detect …
//! until a detection pass finds nothing. The cascade is an explicit state
//! machine over [`CascadePhase`]:
//!
//! ```text
//!            matches                 always
//! Detecting ─────────▶ Clearing ─────────────▶ Compacting
//!     │  ▲                                          │
//!     │  └──────────────────────────────────────────┘
//!     │ no matches
//!     ▼
//!   Idle
//! ```
//!
//! A swap arms the machine at `Detecting` ([`CascadeResolver::begin`]). A
//! triggered special rune arms it at `Clearing` with the blast area as the
//! first pass ([`CascadeResolver::begin_blast`]).
//!
//! ## Stepping
//!
//! [`CascadeResolver::step`] performs exactly one transition and reports it
//! as a [`CascadeEvent`]. It is synchronous and deterministic given the rune
//! source. Hosts that animate call it once per frame or timer tick (see
//! `Engine::pending_delay`); headless callers use [`CascadeResolver::run`],
//! which steps to quiescence and hands each event to a [`PhaseObserver`].
//!
//! ```
//! use rune_match::cascade::{CascadeEvent, CascadePhase, CascadeResolver, NoopObserver};
//! use rune_match::core::{Board, EngineConfig, GameState, ScriptedRunes};
//!
//! let board = Board::parse(&[
//!     "fffwaels",
//!     "elsfwael",
//!     "waelsfwa",
//!     "sfwaelsf",
//!     "aelsfwae",
//!     "lsfwaels",
//!     "fwaelsfw",
//!     "elsfwael",
//! ]).unwrap();
//! let mut state = GameState::new(board, &EngineConfig::default());
//! let mut source = ScriptedRunes::cycling();
//!
//! CascadeResolver::begin(&mut state);
//! let first = CascadeResolver::step(&mut state, &mut source);
//! assert!(matches!(first, Some(CascadeEvent::Detected { pass: 1, .. })));
//! assert_eq!(state.phase(), CascadePhase::Clearing);
//!
//! let summary = CascadeResolver::run(&mut state, &mut source, &mut NoopObserver);
//! assert_eq!(state.phase(), CascadePhase::Idle);
//! assert!(state.score() >= 150);
//! assert!(summary.passes >= 1);
//! ```

mod resolver;

pub use resolver::CascadeResolver;

use serde::{Deserialize, Serialize};

use crate::core::{GameState, Position, SpecialRune};
use crate::rules::{CompactionReport, Run};

/// Where the cascade state machine stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CascadePhase {
    /// No cascade running; input is accepted.
    #[default]
    Idle,
    /// Next step scans the board for runs.
    Detecting,
    /// Next step scores and empties the detected positions.
    Clearing,
    /// Next step applies gravity and refills.
    Compacting,
}

/// One completed cascade transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CascadeEvent {
    /// A detection pass found matches. `matches` is row-major sorted.
    /// `spawned` lists the special runes this pass leaves behind (always
    /// empty unless special runes are enabled).
    Detected {
        pass: u32,
        matches: Vec<Position>,
        runs: Vec<Run>,
        spawned: Vec<(Position, SpecialRune)>,
    },
    /// Matched runes were scored and emptied. `points` covers every matched
    /// position; `cleared` counts the runes actually removed (a spawned
    /// special stays on the board).
    Cleared {
        pass: u32,
        cleared: usize,
        points: u64,
        score: u64,
    },
    /// Gravity and refill ran; the board is full again.
    Compacted { pass: u32, report: CompactionReport },
    /// A detection pass found nothing; the cascade is over.
    Settled { passes: u32, points: u64 },
}

/// Totals for one full cascade.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CascadeSummary {
    /// Detection passes that found matches (the combo length).
    pub passes: u32,
    /// Points awarded across all passes.
    pub points: u64,
    /// Runes cleared across all passes.
    pub cleared: usize,
    /// Runes drawn to refill across all passes.
    pub refilled: usize,
}

impl CascadeSummary {
    /// Fold one event into the totals.
    pub fn record(&mut self, event: &CascadeEvent) {
        match event {
            CascadeEvent::Detected { pass, .. } => self.passes = *pass,
            CascadeEvent::Cleared { cleared, points, .. } => {
                self.cleared += cleared;
                self.points += points;
            }
            CascadeEvent::Compacted { report, .. } => self.refilled += report.refill_count(),
            CascadeEvent::Settled { .. } => {}
        }
    }
}

/// Receives each cascade transition as it happens.
///
/// Closures `FnMut(&GameState, &CascadeEvent)` implement this.
pub trait PhaseObserver {
    fn on_phase(&mut self, state: &GameState, event: &CascadeEvent);
}

impl<F> PhaseObserver for F
where
    F: FnMut(&GameState, &CascadeEvent),
{
    fn on_phase(&mut self, state: &GameState, event: &CascadeEvent) {
        self(state, event)
    }
}

/// Observer that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl PhaseObserver for NoopObserver {
    fn on_phase(&mut self, _state: &GameState, _event: &CascadeEvent) {}
}
