//! Exhaustive memoized minimax.
//!
//! Searches every line of play to a terminal position, folding symmetric
//! positions through [`SymmetryCache`]. Exponential in the number of
//! empty cells; callers should keep it to small boards and use the
//! depth-bounded variant above that.

use crate::board::{Grid, Mark, Move};
use crate::cache::SymmetryCache;
use crate::rules::Rules;

use super::{Strategy, StrategyError};

/// Score of a position the engine has won, before depth shaping.
pub const MAX_SCORE: i32 = 10_000;
/// Score of a position the player has won, before depth shaping.
pub const MIN_SCORE: i32 = -10_000;

/// Returns the exact score of a terminal position. Wins score closer to
/// zero the deeper they are, so the search prefers faster wins and
/// drags out losses.
pub(super) fn terminal_score(rules: &Rules, grid: &Grid, depth: i32) -> i32 {
    match rules.winner(grid) {
        Some(Mark::Ai) => MAX_SCORE - depth,
        Some(Mark::Player) => MIN_SCORE + depth,
        None => 0,
    }
}

/// Full-depth adversarial search with symmetry-folded memoization.
pub struct Minimax {
    rules: Rules,
    cache: SymmetryCache<(i32, Move)>,
}

impl Minimax {
    pub fn new(rules: Rules) -> Self {
        Minimax {
            rules,
            cache: SymmetryCache::new(),
        }
    }

    /// Recursive search. Returns the position's value and, for
    /// non-terminal positions, the move that attains it; ties go to the
    /// first move in row-major order.
    fn minimax(&mut self, grid: &Grid, maximizing: bool, depth: i32) -> (i32, Option<Move>) {
        let depth = depth + 1;
        if self.rules.is_terminal(grid) {
            return (terminal_score(&self.rules, grid, depth), None);
        }
        if let Some((score, mv)) = self.cache.get(grid, maximizing) {
            return (score, Some(mv));
        }

        let mover = if maximizing { Mark::Ai } else { Mark::Player };
        let symbol = mover.symbol();
        let mut best: Option<(i32, Move)> = None;
        for mv in grid.empty_cells() {
            let (score, _) = self.minimax(&grid.with(mv, symbol), !maximizing, depth);
            let replaces = match best {
                None => true,
                Some((b, _)) => {
                    if maximizing {
                        score > b
                    } else {
                        score < b
                    }
                }
            };
            if replaces {
                best = Some((score, mv));
            }
        }

        let (score, mv) = best.expect("non-terminal position has an empty cell");
        self.cache.put(grid, maximizing, (score, mv));
        (score, Some(mv))
    }
}

impl Strategy for Minimax {
    fn next_move(&mut self, grid: &Grid) -> Result<Move, StrategyError> {
        if grid.is_full() {
            return Err(StrategyError::NoLegalMove);
        }
        // Fresh cache per invocation; entries never leak across games.
        self.cache = SymmetryCache::new();
        let (_, mv) = self.minimax(grid, true, 0);
        mv.ok_or(StrategyError::NoLegalMove)
    }
}
