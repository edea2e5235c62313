//! Match detection.
//!
//! [`detect`] scans a board for horizontal and vertical runs of three or
//! more identical runes and returns every participating position as one
//! deduplicated [`MatchSet`]. It never mutates the board.
//!
//! The scan slides a three-cell window along every row and column. A run of
//! four or five produces overlapping triples whose union is the whole run.
//! A rune in both a horizontal and a vertical run appears once.
//!
//! [`find_runs`] reports the same matches as maximal runs (orientation,
//! start, length) for hosts and statistics. Scoring only ever uses the
//! `MatchSet` cardinality.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::{Board, Position, RuneType, BOARD_SIZE};

/// Minimum run length that counts as a match.
pub const MIN_RUN: usize = 3;

/// All positions matched in one detection pass.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSet {
    positions: FxHashSet<Position>,
}

impl MatchSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a position. Returns false if it was already present.
    pub fn insert(&mut self, pos: Position) -> bool {
        self.positions.insert(pos)
    }

    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.positions.contains(&pos)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Iterate in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.positions.iter().copied()
    }

    /// Positions in row-major order.
    #[must_use]
    pub fn sorted(&self) -> Vec<Position> {
        let mut positions: Vec<_> = self.iter().collect();
        positions.sort_unstable();
        positions
    }

    pub fn clear(&mut self) {
        self.positions.clear();
    }
}

impl FromIterator<Position> for MatchSet {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        Self {
            positions: iter.into_iter().collect(),
        }
    }
}

/// Direction of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Along a row, left to right.
    Horizontal,
    /// Along a column, top to bottom.
    Vertical,
}

/// A maximal run of identical runes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Run {
    pub rune: RuneType,
    pub orientation: Orientation,
    /// Leftmost (horizontal) or topmost (vertical) cell.
    pub start: Position,
    pub length: usize,
}

impl Run {
    /// Positions covered by this run.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let (row, col) = (self.start.row(), self.start.col());
        (0..self.length).map(move |i| match self.orientation {
            Orientation::Horizontal => Position::at(row, col + i),
            Orientation::Vertical => Position::at(row + i, col),
        })
    }
}

/// True when all three cells hold the same rune.
fn same_triple(board: &Board, cells: [Position; 3]) -> bool {
    match board.get(cells[0]) {
        Some(rune) => cells[1..].iter().all(|&pos| board.get(pos) == Some(rune)),
        None => false,
    }
}

/// Find every position belonging to a run of [`MIN_RUN`] or more.
///
/// Empty cells never match.
#[must_use]
pub fn detect(board: &Board) -> MatchSet {
    let mut matches = MatchSet::new();

    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE - 2 {
            let window = [0, 1, 2].map(|i| Position::at(row, col + i));
            if same_triple(board, window) {
                matches.positions.extend(window);
            }
        }
    }

    for row in 0..BOARD_SIZE - 2 {
        for col in 0..BOARD_SIZE {
            let window = [0, 1, 2].map(|i| Position::at(row + i, col));
            if same_triple(board, window) {
                matches.positions.extend(window);
            }
        }
    }

    matches
}

/// Find maximal runs, horizontal ones first (rows top to bottom), then
/// vertical ones (columns left to right).
#[must_use]
pub fn find_runs(board: &Board) -> Vec<Run> {
    let mut runs = Vec::new();

    for row in 0..BOARD_SIZE {
        scan_line(board, Orientation::Horizontal, |i| Position::at(row, i), &mut runs);
    }
    for col in 0..BOARD_SIZE {
        scan_line(board, Orientation::Vertical, |i| Position::at(i, col), &mut runs);
    }

    runs
}

fn scan_line(
    board: &Board,
    orientation: Orientation,
    at: impl Fn(usize) -> Position,
    out: &mut Vec<Run>,
) {
    let mut i = 0;
    while i < BOARD_SIZE {
        let Some(rune) = board.get(at(i)) else {
            i += 1;
            continue;
        };

        let mut end = i + 1;
        while end < BOARD_SIZE && board.get(at(end)) == Some(rune) {
            end += 1;
        }

        if end - i >= MIN_RUN {
            out.push(Run {
                rune,
                orientation,
                start: at(i),
                length: end - i,
            });
        }
        i = end;
    }
}
