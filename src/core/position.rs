//! Board coordinates.
//!
//! A `Position` is always in bounds: the only way to build one from
//! caller-supplied numbers is [`Position::new`], which rejects anything
//! outside `0..BOARD_SIZE` with [`EngineError::OutOfRange`].
//!
//! ```
//! use rune_match::core::Position;
//!
//! let a = Position::new(2, 2).unwrap();
//! let b = Position::new(2, 3).unwrap();
//! assert!(a.is_adjacent(b));
//! assert!(!a.is_adjacent(a));
//! assert!(Position::new(8, 0).is_err());
//! ```

use serde::{Deserialize, Serialize};

use super::board::BOARD_SIZE;
use super::error::EngineError;

/// A `(row, col)` pair on the board. Row 0 is the top row.
///
/// Ordering is row-major, so sorted positions read left to right, top to
/// bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Create a position, checking bounds.
    pub fn new(row: usize, col: usize) -> Result<Self, EngineError> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Ok(Self { row, col })
        } else {
            Err(EngineError::OutOfRange { row, col })
        }
    }

    /// Create a position the caller has already bounds-checked.
    pub(crate) const fn at(row: usize, col: usize) -> Self {
        debug_assert!(row < BOARD_SIZE && col < BOARD_SIZE);
        Self { row, col }
    }

    #[must_use]
    pub const fn row(self) -> usize {
        self.row
    }

    #[must_use]
    pub const fn col(self) -> usize {
        self.col
    }

    /// Two positions are adjacent iff they differ by exactly 1 in exactly
    /// one coordinate. A position is never adjacent to itself.
    #[must_use]
    pub fn is_adjacent(self, other: Position) -> bool {
        let row_diff = self.row.abs_diff(other.row);
        let col_diff = self.col.abs_diff(other.col);
        row_diff + col_diff == 1
    }

    /// Iterate every position in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Position::at(row, col)))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl TryFrom<(usize, usize)> for Position {
    type Error = EngineError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        Position::new(row, col)
    }
}
