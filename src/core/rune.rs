//! Rune types: the six token kinds that occupy board cells.
//!
//! A cell either holds exactly one [`RuneType`] or is empty. Emptiness is
//! transient: it only exists between the clear and compact phases of a
//! cascade. Outside resolution every cell is populated.
//!
//! ## Text Format
//!
//! Each rune has a single-character symbol used by [`Board::parse`] and
//! the board's `Display` impl:
//!
//! ```
//! use rune_match::core::RuneType;
//!
//! assert_eq!(RuneType::Fire.symbol(), 'f');
//! assert_eq!(RuneType::from_symbol('s'), Some(RuneType::Shadow));
//! assert_eq!(RuneType::from_symbol('x'), None);
//! ```
//!
//! [`Board::parse`]: crate::core::Board::parse

use serde::{Deserialize, Serialize};

/// A rune kind. Immutable value drawn uniformly by a [`RuneSource`].
///
/// [`RuneSource`]: crate::core::RuneSource
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RuneType {
    Fire,
    Water,
    Wind,
    Earth,
    Light,
    Shadow,
}

/// Symbol for an empty cell in the text format.
pub const EMPTY_SYMBOL: char = '.';

impl RuneType {
    /// Number of rune kinds.
    pub const COUNT: usize = 6;

    /// All rune kinds, in index order.
    pub const ALL: [RuneType; Self::COUNT] = [
        RuneType::Fire,
        RuneType::Water,
        RuneType::Wind,
        RuneType::Earth,
        RuneType::Light,
        RuneType::Shadow,
    ];

    /// Get the rune at a given index (`0..COUNT`).
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Get this rune's index into [`RuneType::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Single-character symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            RuneType::Fire => 'f',
            RuneType::Water => 'w',
            RuneType::Wind => 'a',
            RuneType::Earth => 'e',
            RuneType::Light => 'l',
            RuneType::Shadow => 's',
        }
    }

    /// Parse a symbol produced by [`RuneType::symbol`]. Case-insensitive.
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        let lower = symbol.to_ascii_lowercase();
        Self::ALL.into_iter().find(|rune| rune.symbol() == lower)
    }

    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            RuneType::Fire => "fire",
            RuneType::Water => "water",
            RuneType::Wind => "wind",
            RuneType::Earth => "earth",
            RuneType::Light => "light",
            RuneType::Shadow => "shadow",
        }
    }
}

impl std::fmt::Display for RuneType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A board cell: a rune, or empty during clear/compact.
pub type Cell = Option<RuneType>;

/// Power a rune can carry when special runes are enabled.
///
/// Spawned by long runs and triggered by clicking the rune.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpecialRune {
    /// From a run of 4. Clears the 3×3 block around it.
    Explosive,
    /// From a run of 5. Clears its whole row and column.
    Line,
    /// From a run of 6 or more. Clears every rune of its type.
    Magic,
}

impl SpecialRune {
    /// The special a run of `length` spawns, if any.
    #[must_use]
    pub const fn for_run_length(length: usize) -> Option<Self> {
        match length {
            0..=3 => None,
            4 => Some(SpecialRune::Explosive),
            5 => Some(SpecialRune::Line),
            _ => Some(SpecialRune::Magic),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_roundtrip() {
        for (i, rune) in RuneType::ALL.iter().enumerate() {
            assert_eq!(rune.index(), i);
            assert_eq!(RuneType::from_index(i), Some(*rune));
        }
        assert_eq!(RuneType::from_index(RuneType::COUNT), None);
    }

    #[test]
    fn test_symbols_are_unique() {
        let mut symbols: Vec<char> = RuneType::ALL.iter().map(|r| r.symbol()).collect();
        symbols.push(EMPTY_SYMBOL);
        symbols.sort_unstable();
        symbols.dedup();
        assert_eq!(symbols.len(), RuneType::COUNT + 1);
    }

    #[test]
    fn test_special_for_run_length() {
        assert_eq!(SpecialRune::for_run_length(3), None);
        assert_eq!(SpecialRune::for_run_length(4), Some(SpecialRune::Explosive));
        assert_eq!(SpecialRune::for_run_length(5), Some(SpecialRune::Line));
        assert_eq!(SpecialRune::for_run_length(6), Some(SpecialRune::Magic));
        assert_eq!(SpecialRune::for_run_length(8), Some(SpecialRune::Magic));
    }

    #[test]
    fn test_from_symbol_ignores_case() {
        assert_eq!(RuneType::from_symbol('W'), Some(RuneType::Water));
        assert_eq!(RuneType::from_symbol(EMPTY_SYMBOL), None);
    }
}
