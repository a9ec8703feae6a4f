//! Move selection strategies.
//!
//! A strategy answers one question: given the current position, where
//! does the engine play? The variants form a closed set selected at
//! session start; each instance owns its caches and serves exactly one
//! session.

pub mod heuristic;
pub mod minimax;
pub mod simple;

use crate::board::{Grid, Move};
use crate::rules::Rules;

pub use heuristic::HeuristicMinimax;
pub use minimax::Minimax;
pub use simple::Simple;

/// Errors a strategy can report to its session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StrategyError {
    #[error("no legal move left on the board")]
    NoLegalMove,
}

/// The capability every move selector implements.
pub trait Strategy {
    /// Picks the engine's next move for the given position.
    fn next_move(&mut self, grid: &Grid) -> Result<Move, StrategyError>;
}

/// Strategy selector passed to `GameSession::start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    /// First empty cell in row-major order.
    Simple,
    /// Exhaustive memoized minimax; exponential, small boards only.
    Minimax,
    /// Minimax cut off at `max_depth` plies with a line-pattern
    /// evaluation at the cut.
    Heuristic { max_depth: i32 },
}

/// Builds a fresh strategy instance bound to one session's rules.
pub fn build_strategy(kind: StrategyKind, rules: Rules) -> Box<dyn Strategy> {
    match kind {
        StrategyKind::Simple => Box::new(Simple::new()),
        StrategyKind::Minimax => Box::new(Minimax::new(rules)),
        StrategyKind::Heuristic { max_depth } => {
            Box::new(HeuristicMinimax::new(rules, max_depth))
        }
    }
}
