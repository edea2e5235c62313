//! Special runes (opt-in).
//!
//! With special runes on, a run of four or more leaves a special behind at
//! its first cell (leftmost or topmost) instead of clearing it:
//!
//! | Run length | Special | Triggered area |
//! |---|---|---|
//! | 4 | Explosive | 3×3 block around it, clipped to the board |
//! | 5 | Line | its whole row and column |
//! | 6+ | Magic | every rune of its type |
//!
//! A special rune is triggered by clicking it, which costs a move. Matching
//! a special rune in an ordinary run clears it like any other rune.

use crate::core::{Board, Position, SpecialRune, BOARD_SIZE};

use super::detector::{MatchSet, Run};

/// Specials spawned by one detection pass, one per qualifying run.
///
/// When a horizontal and a vertical run start on the same cell, the
/// vertical run's special wins.
#[must_use]
pub fn spawn_specials(runs: &[Run]) -> Vec<(Position, SpecialRune)> {
    let mut spawned: Vec<(Position, SpecialRune)> = Vec::new();

    for run in runs {
        let Some(special) = SpecialRune::for_run_length(run.length) else {
            continue;
        };
        match spawned.iter_mut().find(|(pos, _)| *pos == run.start) {
            Some(entry) => entry.1 = special,
            None => spawned.push((run.start, special)),
        }
    }

    spawned
}

/// Every populated position a special at `at` clears when triggered.
///
/// Includes `at` itself. Empty when `at` is empty.
#[must_use]
pub fn blast_area(board: &Board, at: Position, special: SpecialRune) -> MatchSet {
    let Some(rune) = board.get(at) else {
        return MatchSet::new();
    };
    let populated = |pos: &Position| board.get(*pos).is_some();

    match special {
        SpecialRune::Explosive => {
            let rows = at.row().saturating_sub(1)..(at.row() + 2).min(BOARD_SIZE);
            rows.flat_map(|row| {
                let cols = at.col().saturating_sub(1)..(at.col() + 2).min(BOARD_SIZE);
                cols.map(move |col| Position::at(row, col))
            })
            .filter(populated)
            .collect()
        }
        SpecialRune::Line => Position::all()
            .filter(|pos| pos.row() == at.row() || pos.col() == at.col())
            .filter(populated)
            .collect(),
        SpecialRune::Magic => Position::all()
            .filter(|pos| board.get(*pos) == Some(rune))
            .collect(),
    }
}
