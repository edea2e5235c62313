//! The 8×8 rune grid.
//!
//! Cells are stored row-major. Row 0 is the top of the board; gravity pulls
//! runes toward row `BOARD_SIZE - 1`.
//!
//! ## Text Layout
//!
//! [`Board::parse`] reads eight rows of eight symbols (see
//! [`RuneType::symbol`], `.` for empty). Whitespace inside a row is ignored,
//! so layouts can be spaced for readability:
//!
//! ```
//! use rune_match::core::{Board, Position, RuneType};
//!
//! let board = Board::parse(&[
//!     "f f f w a e l s",
//!     "w a e l s f w a",
//!     "a e l s f w a e",
//!     "e l s f w a e l",
//!     "l s f w a e l s",
//!     "s f w a e l s f",
//!     "f w a e l s f w",
//!     "w a e l s f w a",
//! ]).unwrap();
//!
//! assert_eq!(board.get(Position::new(0, 3).unwrap()), Some(RuneType::Water));
//! assert!(board.is_full());
//! ```
//!
//! ## Special Runes
//!
//! Alongside each rune the board records an optional [`SpecialRune`]. The
//! marker travels with its rune through [`swap`](Board::swap) and
//! [`move_cell`](Board::move_cell); [`set`](Board::set) and
//! [`clear`](Board::clear) drop it. The text layout does not show specials.

use serde::{Deserialize, Serialize};

use super::error::EngineError;
use super::position::Position;
use super::rng::RuneSource;
use super::rune::{Cell, RuneType, SpecialRune, EMPTY_SYMBOL};

/// Board width and height.
pub const BOARD_SIZE: usize = 8;

/// Total number of cells.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// An 8×8 grid of cells. Exclusively owned by the game state.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    specials: [[Option<SpecialRune>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// A board with every cell empty.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
            specials: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Fill all 64 cells independently from `source`, row by row.
    ///
    /// No attempt is made to avoid starting runs: a fresh board may already
    /// contain a match.
    #[must_use]
    pub fn random<S: RuneSource + ?Sized>(source: &mut S) -> Self {
        let mut board = Self::empty();
        for row in board.cells.iter_mut() {
            for cell in row.iter_mut() {
                *cell = Some(source.next_rune());
            }
        }
        board
    }

    /// Build a fully populated board from rune rows.
    #[must_use]
    pub fn from_rows(rows: [[RuneType; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self {
            cells: rows.map(|row| row.map(Some)),
            specials: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Parse the text layout described in the module docs.
    pub fn parse(rows: &[&str]) -> Result<Self, EngineError> {
        if rows.len() != BOARD_SIZE {
            return Err(EngineError::parse(format!(
                "expected {BOARD_SIZE} rows, got {}",
                rows.len()
            )));
        }

        let mut board = Self::empty();
        for (row, line) in rows.iter().enumerate() {
            let symbols: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if symbols.len() != BOARD_SIZE {
                return Err(EngineError::parse(format!(
                    "row {row}: expected {BOARD_SIZE} cells, got {}",
                    symbols.len()
                )));
            }

            for (col, symbol) in symbols.into_iter().enumerate() {
                board.cells[row][col] = if symbol == EMPTY_SYMBOL {
                    None
                } else {
                    let rune = RuneType::from_symbol(symbol).ok_or_else(|| {
                        EngineError::parse(format!("row {row}: unknown symbol {symbol:?}"))
                    })?;
                    Some(rune)
                };
            }
        }

        Ok(board)
    }

    /// Get a cell.
    #[must_use]
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.row()][pos.col()]
    }

    /// Set a cell. The rune placed is plain.
    pub fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.row()][pos.col()] = cell;
        self.specials[pos.row()][pos.col()] = None;
    }

    /// Empty a cell, returning what it held.
    pub fn clear(&mut self, pos: Position) -> Cell {
        self.specials[pos.row()][pos.col()] = None;
        self.cells[pos.row()][pos.col()].take()
    }

    /// Exchange the contents of two cells, specials included. No match
    /// check is made.
    pub fn swap(&mut self, a: Position, b: Position) {
        let (ra, ca, rb, cb) = (a.row(), a.col(), b.row(), b.col());
        let tmp = (self.cells[ra][ca], self.specials[ra][ca]);
        self.cells[ra][ca] = self.cells[rb][cb];
        self.specials[ra][ca] = self.specials[rb][cb];
        self.cells[rb][cb] = tmp.0;
        self.specials[rb][cb] = tmp.1;
    }

    /// Move the rune at `from` (and its special) to `to`, leaving `from`
    /// empty.
    pub fn move_cell(&mut self, from: Position, to: Position) {
        let cell = self.cells[from.row()][from.col()].take();
        let special = self.specials[from.row()][from.col()].take();
        self.cells[to.row()][to.col()] = cell;
        self.specials[to.row()][to.col()] = special;
    }

    /// The special carried by the rune at `pos`.
    #[must_use]
    pub fn special(&self, pos: Position) -> Option<SpecialRune> {
        self.specials[pos.row()][pos.col()]
    }

    /// Mark or unmark the rune at `pos` as special. Ignored on empty cells.
    pub fn set_special(&mut self, pos: Position, special: Option<SpecialRune>) {
        if self.cells[pos.row()][pos.col()].is_some() {
            self.specials[pos.row()][pos.col()] = special;
        }
    }

    /// Positions holding a special rune, row-major.
    pub fn specials(&self) -> impl Iterator<Item = (Position, SpecialRune)> + '_ {
        Position::all().filter_map(|pos| self.special(pos).map(|special| (pos, special)))
    }

    /// Cells of one column, top to bottom.
    #[must_use]
    pub fn column(&self, col: usize) -> [Cell; BOARD_SIZE] {
        std::array::from_fn(|row| self.cells[row][col])
    }

    /// Rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; BOARD_SIZE]> {
        self.cells.iter()
    }

    /// Number of cells holding a rune.
    #[must_use]
    pub fn populated_count(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| cell.is_some()).count()
    }

    /// True when no cell is empty.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.populated_count() == CELL_COUNT
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                let symbol = cell.map_or(EMPTY_SYMBOL, RuneType::symbol);
                write!(f, "{symbol}")?;
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Board(\n{self}\n)")
    }
}
