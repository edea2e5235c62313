//! Engine events.
//!
//! Every engine operation reports what it did as a list of events. Hosts
//! drive animation and sound from them; tests assert on them. Rejected
//! input is never an error: it shows up as [`EngineEvent::InputIgnored`].

use derive_more::From;

use crate::cascade::CascadeEvent;
use crate::core::{Position, SpecialRune};

/// Why a click was dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IgnoreReason {
    /// A cascade is running.
    Resolving,
    /// The move budget is spent.
    GameOver,
}

/// Something the engine did in response to input or a cascade step.
#[derive(Clone, Debug, PartialEq, Eq, From)]
pub enum EngineEvent {
    /// First click recorded.
    TileSelected(Position),
    /// The selection was dropped, with or without a swap.
    SelectionCleared,
    /// Two adjacent runes were exchanged and a move spent.
    Swapped {
        from: Position,
        to: Position,
        moves_left: u32,
    },
    /// A special rune was clicked and a move spent. `area` is what the
    /// first pass of the cascade that follows will clear.
    SpecialTriggered {
        at: Position,
        special: SpecialRune,
        area: Vec<Position>,
        moves_left: u32,
    },
    /// A swap made no match and was undone at no cost.
    SwapReverted { from: Position, to: Position },
    /// A click arrived while input was gated.
    InputIgnored { reason: IgnoreReason },
    /// A cascade transition.
    #[from]
    Cascade(CascadeEvent),
    /// The last move's cascade settled with no moves left.
    GameOver { score: u64 },
}

impl EngineEvent {
    /// True for events that changed nothing.
    #[must_use]
    pub fn is_ignored(&self) -> bool {
        matches!(self, EngineEvent::InputIgnored { .. })
    }
}
