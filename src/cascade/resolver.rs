//! The cascade transition function.

use tracing::{debug, trace};

use crate::core::{GameState, RuneSource};
use crate::rules::{compact, detect, find_runs, spawn_specials, MatchSet};

use super::{CascadeEvent, CascadePhase, CascadeSummary, PhaseObserver};

/// Sequences detection, scoring, clearing and compaction.
///
/// Stateless: the phase lives in [`GameState`], so a cascade can be
/// suspended between any two steps and resumed later.
pub struct CascadeResolver;

impl CascadeResolver {
    /// Arm a cascade: the next step is a detection pass.
    pub fn begin(state: &mut GameState) {
        state.phase = CascadePhase::Detecting;
        state.pass = 0;
        state.cascade_points = 0;
        state.current_matches.clear();
        state.pending_specials.clear();
    }

    /// Arm a cascade whose first pass clears `area` (a triggered special
    /// rune). The next step is the clearing step; an empty area settles
    /// straight away on the following detection pass.
    pub fn begin_blast(state: &mut GameState, area: MatchSet) {
        state.pending_specials.clear();
        state.cascade_points = 0;
        if area.is_empty() {
            state.phase = CascadePhase::Detecting;
            state.pass = 0;
            state.current_matches.clear();
        } else {
            state.phase = CascadePhase::Clearing;
            state.pass = 1;
            state.current_matches = area;
        }
    }

    /// Perform exactly one phase transition.
    ///
    /// Returns `None` when no cascade is running.
    pub fn step<S: RuneSource + ?Sized>(
        state: &mut GameState,
        source: &mut S,
    ) -> Option<CascadeEvent> {
        let event = match state.phase {
            CascadePhase::Idle => return None,

            CascadePhase::Detecting => {
                let matches = detect(&state.board);
                if matches.is_empty() {
                    let event = CascadeEvent::Settled {
                        passes: state.pass,
                        points: state.cascade_points,
                    };
                    debug!(passes = state.pass, points = state.cascade_points, "Cascade settled");
                    state.phase = CascadePhase::Idle;
                    state.pass = 0;
                    state.cascade_points = 0;
                    event
                } else {
                    state.pass += 1;
                    debug!(pass = state.pass, matched = matches.len(), "Matches detected");
                    let runs = find_runs(&state.board);
                    state.pending_specials = if state.special_runes {
                        spawn_specials(&runs)
                    } else {
                        Vec::new()
                    };
                    let event = CascadeEvent::Detected {
                        pass: state.pass,
                        matches: matches.sorted(),
                        runs,
                        spawned: state.pending_specials.clone(),
                    };
                    state.current_matches = matches;
                    state.phase = CascadePhase::Clearing;
                    event
                }
            }

            CascadePhase::Clearing => {
                let matched = state.current_matches.len();
                let mut cleared = 0;
                for pos in state.current_matches.iter() {
                    match state.pending_specials.iter().find(|(at, _)| *at == pos) {
                        Some(&(_, special)) => state.board.set_special(pos, Some(special)),
                        None => {
                            state.board.clear(pos);
                            cleared += 1;
                        }
                    }
                }
                if !state.pending_specials.is_empty() {
                    debug!(spawned = state.pending_specials.len(), "Special runes spawned");
                }
                state.pending_specials.clear();
                let points = state.score.award(matched);
                state.cascade_points += points;
                state.current_matches.clear();
                state.phase = CascadePhase::Compacting;
                CascadeEvent::Cleared {
                    pass: state.pass,
                    cleared,
                    points,
                    score: state.score.total(),
                }
            }

            CascadePhase::Compacting => {
                let report = compact(&mut state.board, source);
                state.phase = CascadePhase::Detecting;
                CascadeEvent::Compacted {
                    pass: state.pass,
                    report,
                }
            }
        };

        trace!(phase = ?state.phase, "Cascade step");
        Some(event)
    }

    /// Step until the cascade settles, reporting each transition.
    ///
    /// Does nothing if no cascade is running.
    pub fn run<S, O>(state: &mut GameState, source: &mut S, observer: &mut O) -> CascadeSummary
    where
        S: RuneSource + ?Sized,
        O: PhaseObserver + ?Sized,
    {
        let mut summary = CascadeSummary::default();
        while let Some(event) = Self::step(state, source) {
            summary.record(&event);
            observer.on_phase(state, &event);
        }
        summary
    }
}
