//! Seeded random playouts through the public engine API.
//!
//! Used by tests and benchmarks to reach many positions quickly. Each action
//! is a uniformly chosen legal move of the side to move; an open capture
//! chain is declined (via `deselect`) with a configurable probability.

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use crate::engine::rule_engine::RuleEngine;
use crate::errors::CheckersResult;
use crate::game_state::checkers_types::Outcome;

#[derive(Debug, Clone, Copy)]
pub struct PlayoutConfig {
    pub max_plies: u16,
    /// Chance of stopping an open capture chain instead of jumping again.
    pub decline_continuation: f64,
}

impl Default for PlayoutConfig {
    fn default() -> Self {
        Self {
            max_plies: 400,
            decline_continuation: 0.25,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayoutResult {
    pub outcome: Option<Outcome>,
    pub plies: u16,
    pub captures: u32,
    pub declined_chains: u32,
}

/// Play random actions on `engine` until the game ends or `max_plies` is hit.
///
/// `observer` is called after every completed action.
pub fn play_random_game<F>(
    engine: &mut RuleEngine,
    seed: u64,
    config: PlayoutConfig,
    mut observer: F,
) -> CheckersResult<PlayoutResult>
where
    F: FnMut(&RuleEngine),
{
    let mut rng = StdRng::seed_from_u64(seed);
    let mut result = PlayoutResult::default();

    while result.plies < config.max_plies {
        if let Some(outcome) = engine.status().outcome() {
            result.outcome = Some(outcome);
            break;
        }

        if engine.forced_continuation() && rng.random_bool(config.decline_continuation) {
            result.declined_chains += 1;
            result.plies += 1;
            result.outcome = engine.deselect();
            observer(engine);
            continue;
        }

        let moves = engine.legal_moves();
        let Some(mv) = moves.choose(&mut rng).copied() else {
            break;
        };

        engine.select(mv.from)?;
        let report = engine.apply_move_detailed(mv.from, mv.to, mv.captured)?;
        result.captures += report.captured.len() as u32;
        result.plies += 1;
        result.outcome = report.outcome;
        observer(engine);
    }

    Ok(result)
}
