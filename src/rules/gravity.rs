//! Gravity compaction and refill.
//!
//! Each column is handled independently. Scanning from the bottom row
//! upward, every empty cell bumps a counter; every rune found after some
//! empties drops by that count. Runes never pass each other, so the
//! relative order within a column is preserved. The vacated cells at the
//! top are then filled from the [`RuneSource`].
//!
//! ```text
//! before    compacted   refilled
//!   A         .           x
//!   .         .           y
//!   B   ->    .     ->    z
//!   .         A           A
//!   .         B           B
//! ```

use smallvec::SmallVec;

use crate::core::{Board, Position, RuneSource, BOARD_SIZE};

/// What one compaction pass did.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompactionReport {
    /// Runes that moved down, as `(from, to)`.
    pub drops: Vec<(Position, Position)>,
    /// Cells filled with freshly drawn runes, column by column, top down.
    pub refilled: SmallVec<[Position; 16]>,
}

impl CompactionReport {
    /// Number of new runes drawn.
    #[must_use]
    pub fn refill_count(&self) -> usize {
        self.refilled.len()
    }
}

/// Compact one column without refilling.
///
/// Returns the number of empty cells now sitting at the top of the column.
pub fn compact_column(
    board: &mut Board,
    col: usize,
    drops: &mut Vec<(Position, Position)>,
) -> usize {
    let mut empties = 0;

    for row in (0..BOARD_SIZE).rev() {
        let from = Position::at(row, col);
        match board.get(from) {
            None => empties += 1,
            Some(_) if empties > 0 => {
                let to = Position::at(row + empties, col);
                board.move_cell(from, to);
                drops.push((from, to));
            }
            Some(_) => {}
        }
    }

    empties
}

/// Compact every column, then refill vacated cells from `source`.
///
/// Columns are processed left to right and refilled top down, so a scripted
/// source sees a stable draw order. The board is full afterwards.
pub fn compact<S: RuneSource + ?Sized>(board: &mut Board, source: &mut S) -> CompactionReport {
    let mut report = CompactionReport::default();

    for col in 0..BOARD_SIZE {
        let empties = compact_column(board, col, &mut report.drops);
        for row in 0..empties {
            let pos = Position::at(row, col);
            board.set(pos, Some(source.next_rune()));
            report.refilled.push(pos);
        }
    }

    report
}
