//! Engine surface for hosts.
//!
//! [`Engine`] owns one [`GameState`](crate::core::GameState) and its rune
//! source. It validates clicks, performs swaps, spends moves and drives the
//! cascade. Every operation returns [`EngineEvent`]s describing what
//! happened.
//!
//! ## Input Gating
//!
//! While a cascade is running, or once the move budget is spent, every
//! click is ignored. That flag is the only mutual exclusion the engine
//! needs: there is one board and one resolver.
//!
//! ## Example
//!
//! ```
//! use rune_match::core::EngineConfig;
//! use rune_match::engine::{Engine, EngineEvent};
//!
//! let mut engine = Engine::new(EngineConfig::default().with_seed(3)).unwrap();
//! assert_eq!(engine.moves_left(), 20);
//!
//! engine.select_tile(4, 4).unwrap();
//! let events = engine.select_tile(4, 5).unwrap();
//! assert!(matches!(events[0], EngineEvent::Swapped { moves_left: 19, .. }));
//! assert!(engine.is_resolving());
//!
//! // Clicks are ignored until the cascade settles
//! assert!(engine.select_tile(0, 0).unwrap()[0].is_ignored());
//!
//! engine.resolve();
//! assert!(!engine.is_resolving());
//! assert!(engine.board().is_full());
//! ```

mod controller;
mod event;
mod stats;

pub use controller::Engine;
pub use event::{EngineEvent, IgnoreReason};
pub use stats::GameStats;
