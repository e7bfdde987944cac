//! Perft: exhaustive action-tree counting for move-generation checks.
//!
//! One ply is one enumerated move of the side to move. Under manual
//! continuation a capture that leaves the chain open is followed by a ply of
//! the same side, so multi-jumps count one node per jump.

use crate::engine::rule_engine::RuleEngine;
use crate::errors::CheckersResult;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub promotions: usize,
    /// Leaves at which the game has ended.
    pub terminals: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.promotions += rhs.promotions;
        self.terminals += rhs.terminals;
    }
}

pub fn perft(engine: &RuleEngine, depth: u8) -> CheckersResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    for mv in engine.legal_moves() {
        let mut child = engine.clone();
        let report = child.apply_move_detailed(mv.from, mv.to, mv.captured)?;

        if depth == 1 {
            total.nodes += 1;
            if !report.captured.is_empty() {
                total.captures += 1;
            }
            if report.promoted {
                total.promotions += 1;
            }
            if report.outcome.is_some() {
                total.terminals += 1;
            }
            continue;
        }

        total.merge(perft(&child, depth - 1)?);
    }

    Ok(total)
}

/// Per-root-move node counts, in enumeration order.
pub fn perft_divide(engine: &RuleEngine, depth: u8) -> CheckersResult<Vec<(String, usize)>> {
    let mut out = Vec::new();
    if depth == 0 {
        return Ok(out);
    }
    for mv in engine.legal_moves() {
        let mut child = engine.clone();
        child.apply_move_detailed(mv.from, mv.to, mv.captured)?;
        let nodes = perft(&child, depth - 1)?.nodes;
        out.push((format!("{}->{}", mv.from, mv.to), nodes));
    }
    Ok(out)
}
