//! Engine configuration.
//!
//! Defaults give the classic game: Red moves first and a multi-capture is
//! continued one jump at a time by the player. Everything can be overridden
//! from the environment:
//!
//! - `CHECKERS_STARTING_SIDE`: `red`, `blue` or `random`
//! - `CHECKERS_SEED`: seed for `random` (entropy when unset)
//! - `CHECKERS_CONTINUATION`: `manual` or `auto`

use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::errors::{CheckersError, CheckersResult};
use crate::game_state::checkers_types::Side;

pub const ENV_STARTING_SIDE: &str = "CHECKERS_STARTING_SIDE";
pub const ENV_SEED: &str = "CHECKERS_SEED";
pub const ENV_CONTINUATION: &str = "CHECKERS_CONTINUATION";

/// What happens after a capture when the capturing piece can jump again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContinuationPolicy {
    /// The chain stays open; the player jumps again or deselects to stop.
    #[default]
    Manual,
    /// The engine keeps jumping with the first available capture until none
    /// is left, then passes the turn.
    AutoChain,
}

impl FromStr for ContinuationPolicy {
    type Err = CheckersError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "manual" => Ok(ContinuationPolicy::Manual),
            "auto" | "autochain" | "auto_chain" => Ok(ContinuationPolicy::AutoChain),
            other => Err(CheckersError::InvalidConfig(format!(
                "unknown continuation policy '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartingSide {
    Fixed(Side),
    /// Drawn on every new game; a seed makes the sequence reproducible.
    Random { seed: Option<u64> },
}

impl Default for StartingSide {
    fn default() -> Self {
        StartingSide::Fixed(Side::Red)
    }
}

impl StartingSide {
    pub fn rng(&self) -> StdRng {
        match self {
            StartingSide::Random { seed: Some(seed) } => StdRng::seed_from_u64(*seed),
            _ => StdRng::from_os_rng(),
        }
    }

    pub fn pick(&self, rng: &mut StdRng) -> Side {
        match self {
            StartingSide::Fixed(side) => *side,
            StartingSide::Random { .. } => {
                if rng.random_bool(0.5) {
                    Side::Red
                } else {
                    Side::Blue
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineConfig {
    pub starting_side: StartingSide,
    pub continuation: ContinuationPolicy,
}

impl EngineConfig {
    pub fn with_continuation(mut self, continuation: ContinuationPolicy) -> Self {
        self.continuation = continuation;
        self
    }

    pub fn with_starting_side(mut self, starting_side: StartingSide) -> Self {
        self.starting_side = starting_side;
        self
    }

    /// Defaults overridden by the `CHECKERS_*` environment variables.
    pub fn from_env() -> CheckersResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> CheckersResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        let seed = match lookup(ENV_SEED) {
            Some(raw) => Some(raw.trim().parse::<u64>().map_err(|_| {
                CheckersError::InvalidConfig(format!("{ENV_SEED} must be an unsigned integer, got '{raw}'"))
            })?),
            None => None,
        };

        if let Some(raw) = lookup(ENV_STARTING_SIDE) {
            config.starting_side = if raw.trim().eq_ignore_ascii_case("random") {
                StartingSide::Random { seed }
            } else {
                StartingSide::Fixed(raw.parse::<Side>()?)
            };
        }

        if let Some(raw) = lookup(ENV_CONTINUATION) {
            config.continuation = raw.parse::<ContinuationPolicy>()?;
        }

        Ok(config)
    }
}
