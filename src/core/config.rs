//! Engine configuration.
//!
//! Hosts configure the engine at startup with an [`EngineConfig`]:
//! - Seed for the default [`GameRng`](super::GameRng) rune source
//! - Move budget, starting level, points per cleared rune
//! - [`SwapPolicy`]: whether swaps that make no match are kept
//! - [`DealPolicy`]: whether a fresh board may start with runs on it
//! - Special runes: off by default; when on, long runs spawn
//!   [`SpecialRune`](super::SpecialRune)s
//! - [`PhasePacing`]: suggested delays between cascade phases
//!
//! Configuration can be built in code or loaded from TOML. Missing keys
//! take their defaults:
//!
//! ```
//! use rune_match::core::{EngineConfig, SwapPolicy};
//!
//! let config = EngineConfig::from_toml_str(r#"
//!     seed = 7
//!     starting_moves = 30
//!     swap_policy = "revert_if_no_match"
//!
//!     [pacing]
//!     highlight_ms = 250
//! "#).unwrap();
//!
//! assert_eq!(config.seed, 7);
//! assert_eq!(config.starting_moves, 30);
//! assert_eq!(config.points_per_rune, 50);
//! assert_eq!(config.swap_policy, SwapPolicy::RevertIfNoMatch);
//! assert_eq!(config.pacing.highlight_ms, 250);
//! assert_eq!(config.pacing.swap_ms, 300);
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::error::EngineError;

/// What happens to a swap that produces no match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwapPolicy {
    /// The swap stands and costs a move, match or not.
    #[default]
    AlwaysCommit,
    /// The swap is undone and costs nothing when it makes no match.
    RevertIfNoMatch,
}

/// How a fresh board is dealt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DealPolicy {
    /// Deal once. Runs already on the board wait for the first swap.
    #[default]
    AllowRuns,
    /// Re-deal until the board has no runs.
    RerollRuns,
}

/// Suggested delays between cascade phases, in milliseconds.
///
/// The engine never sleeps. These are presentation hints a host reads via
/// `Engine::pending_delay` to pace its animations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhasePacing {
    /// After a swap, before the first detection pass.
    pub swap_ms: u64,
    /// After detection, while matches are highlighted, before clearing.
    pub highlight_ms: u64,
    /// After clearing, before compaction.
    pub clear_ms: u64,
    /// After compaction and refill, before the next detection pass.
    pub refill_ms: u64,
}

impl Default for PhasePacing {
    fn default() -> Self {
        Self {
            swap_ms: 300,
            highlight_ms: 500,
            clear_ms: 300,
            refill_ms: 300,
        }
    }
}

impl PhasePacing {
    /// No delays at all (headless play, tests).
    #[must_use]
    pub const fn instant() -> Self {
        Self {
            swap_ms: 0,
            highlight_ms: 0,
            clear_ms: 0,
            refill_ms: 0,
        }
    }

    #[must_use]
    pub const fn swap(&self) -> Duration {
        Duration::from_millis(self.swap_ms)
    }

    #[must_use]
    pub const fn highlight(&self) -> Duration {
        Duration::from_millis(self.highlight_ms)
    }

    #[must_use]
    pub const fn clear(&self) -> Duration {
        Duration::from_millis(self.clear_ms)
    }

    #[must_use]
    pub const fn refill(&self) -> Duration {
        Duration::from_millis(self.refill_ms)
    }
}

/// Complete engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Seed for the default rune source.
    /// Same seed produces identical boards and refills.
    pub seed: u64,

    /// Move budget at the start of each game.
    pub starting_moves: u32,

    /// Level counter at the start of each game. Must be positive.
    pub starting_level: u32,

    /// Score awarded per cleared rune. Must be positive.
    pub points_per_rune: u64,

    /// Handling of swaps that make no match.
    pub swap_policy: SwapPolicy,

    /// Whether a fresh board may contain runs.
    pub deal_policy: DealPolicy,

    /// Runs of 4, 5 and 6+ leave a special rune behind; clicking one
    /// triggers it for a move.
    pub special_runes: bool,

    /// Presentation pacing between cascade phases.
    pub pacing: PhasePacing,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            starting_moves: 20,
            starting_level: 1,
            points_per_rune: 50,
            swap_policy: SwapPolicy::AlwaysCommit,
            deal_policy: DealPolicy::AllowRuns,
            special_runes: false,
            pacing: PhasePacing::default(),
        }
    }
}

impl EngineConfig {
    /// Create a new config with custom seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config with a custom move budget.
    #[must_use]
    pub fn with_starting_moves(mut self, moves: u32) -> Self {
        self.starting_moves = moves;
        self
    }

    /// Create a new config with a custom swap policy.
    #[must_use]
    pub fn with_swap_policy(mut self, policy: SwapPolicy) -> Self {
        self.swap_policy = policy;
        self
    }

    /// Create a new config with a custom deal policy.
    #[must_use]
    pub fn with_deal_policy(mut self, policy: DealPolicy) -> Self {
        self.deal_policy = policy;
        self
    }

    /// Create a new config with special runes switched on or off.
    #[must_use]
    pub fn with_special_runes(mut self, enabled: bool) -> Self {
        self.special_runes = enabled;
        self
    }

    /// Create a new config with custom pacing.
    #[must_use]
    pub fn with_pacing(mut self, pacing: PhasePacing) -> Self {
        self.pacing = pacing;
        self
    }

    /// Check the values the engine relies on.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.starting_level == 0 {
            return Err(EngineError::config("starting_level must be at least 1"));
        }
        if self.points_per_rune == 0 {
            return Err(EngineError::config("points_per_rune must be at least 1"));
        }
        Ok(())
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, EngineError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| EngineError::config(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        debug!("Loading engine config");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| EngineError::config(format!("failed to read config file: {e}")))?;
        let config = Self::from_toml_str(&content)?;
        debug!(seed = config.seed, moves = config.starting_moves, "Engine config loaded");
        Ok(config)
    }
}
