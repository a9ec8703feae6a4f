//! Depth-bounded minimax with a line-pattern evaluation.
//!
//! Same recursion as the exhaustive search, but the tree is cut at a
//! fixed ply bound and the cut nodes are valued by a static positional
//! score: every line is run-length-encoded and each run is weighted by
//! how open-ended it is and how close it comes to the win threshold.
//! Leaf scores get their own symmetry cache, separate from the
//! move cache.

use crate::board::{lines, shrink, Grid, Mark, Move, EMPTY};
use crate::cache::SymmetryCache;
use crate::rules::Rules;

use super::minimax::terminal_score;
use super::{Strategy, StrategyError};

/// Weight added to a run that threatens to complete a line.
const THREAT_BOOST: i32 = 1000;

/// Depth-bounded adversarial search.
///
/// `max_depth` counts plies from the root, incremented on entry like the
/// exhaustive search; a bound below 2 cuts at the root and never
/// produces a move.
pub struct HeuristicMinimax {
    rules: Rules,
    max_depth: i32,
    cache: SymmetryCache<(i32, Move)>,
    scores: SymmetryCache<i32>,
}

impl HeuristicMinimax {
    pub fn new(rules: Rules, max_depth: i32) -> Self {
        HeuristicMinimax {
            rules,
            max_depth,
            cache: SymmetryCache::new(),
            scores: SymmetryCache::new(),
        }
    }

    fn minimax(&mut self, grid: &Grid, maximizing: bool, depth: i32) -> (i32, Option<Move>) {
        let depth = depth + 1;
        if self.rules.is_terminal(grid) || depth >= self.max_depth {
            return (self.score_heuristic(grid, maximizing, depth), None);
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

    /// Leaf value at a cut node: exact score at terminals, otherwise the
    /// memoized line-pattern evaluation.
    fn score_heuristic(&mut self, grid: &Grid, maximizing: bool, depth: i32) -> i32 {
        if self.rules.is_terminal(grid) {
            return terminal_score(&self.rules, grid, depth);
        }
        if let Some(score) = self.scores.get(grid, maximizing) {
            return score;
        }
        let score = evaluate(&self.rules, grid, maximizing);
        self.scores.put(grid, maximizing, score);
        score
    }
}

/// Static positional score of a non-terminal position, from the engine's
/// perspective: engine total minus player total.
///
/// Each non-empty run in each line contributes `length x multiplier`.
/// The multiplier counts open empty neighbors, gains [`THREAT_BOOST`]
/// when the run is one short of the threshold and usably open (or two
/// short, open on both sides, with room to grow for the side to move),
/// and drops to zero when the run plus its adjacent empties can no
/// longer reach the threshold.
pub(super) fn evaluate(rules: &Rules, grid: &Grid, maximizing: bool) -> i32 {
    let threshold = rules.win_threshold;
    let mover_mark = if maximizing { Mark::Ai } else { Mark::Player };
    let mover = mover_mark.symbol();
    let mut ai_total = 0;
    let mut player_total = 0;

    for line in lines(grid) {
        let segments = shrink(&line);
        for (idx, &(symbol, length)) in segments.iter().enumerate() {
            if symbol == EMPTY {
                continue;
            }
            let before = idx
                .checked_sub(1)
                .map(|i| segments[i])
                .filter(|&(s, _)| s == EMPTY)
                .map(|(_, n)| n);
            let after = segments
                .get(idx + 1)
                .filter(|&&(s, _)| s == EMPTY)
                .map(|&(_, n)| n);
            let open_sides = before.is_some() as i32 + after.is_some() as i32;
            let adjacent = before.unwrap_or(0) + after.unwrap_or(0);

            let mut multiplier = open_sides;
            let one_short = length + 1 == threshold;
            let two_short = length + 2 == threshold;
            let threatens = (open_sides >= 1 && one_short && symbol == mover)
                || (open_sides == 2 && one_short)
                || (open_sides == 2 && two_short && symbol == mover && adjacent > 2);
            if threatens {
                multiplier += THREAT_BOOST;
            }
            if length + adjacent < threshold {
                // Dead line: this run can never be completed.
                multiplier = 0;
            }

            let contribution = length as i32 * multiplier;
            match Mark::from_symbol(symbol) {
                Some(Mark::Ai) => ai_total += contribution,
                Some(Mark::Player) => player_total += contribution,
                None => {}
            }
        }
    }

    ai_total - player_total
}

impl Strategy for HeuristicMinimax {
    fn next_move(&mut self, grid: &Grid) -> Result<Move, StrategyError> {
        if grid.is_full() {
            return Err(StrategyError::NoLegalMove);
        }
        self.cache = SymmetryCache::new();
        self.scores = SymmetryCache::new();
        let (_, mv) = self.minimax(grid, true, 0);
        mv.ok_or(StrategyError::NoLegalMove)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::equivalents;
    use crate::search::minimax::{MAX_SCORE, MIN_SCORE};

    const RULES: Rules = Rules::new(3);

    #[test]
    fn terminal_cut_defers_to_the_exact_score() {
        let mut search = HeuristicMinimax::new(RULES, 2);
        let ai_win = Grid::from_rows(&["ooo", "x..", "x.."]);
        let player_win = Grid::from_rows(&["xxx", "o..", "o.."]);
        assert_eq!(search.score_heuristic(&ai_win, true, 1), MAX_SCORE - 1);
        assert_eq!(search.score_heuristic(&player_win, false, 2), MIN_SCORE + 2);
    }

    #[test]
    fn open_engine_run_scores_positive() {
        let grid = Grid::from_rows(&[".oo.", "....", "....", "...."]);
        assert!(evaluate(&RULES, &grid, true) > 0);
    }

    #[test]
    fn open_player_run_scores_negative() {
        let grid = Grid::from_rows(&[".xx.", "....", "....", "...."]);
        assert!(evaluate(&RULES, &grid, true) < 0);
    }

    #[test]
    fn walled_in_run_is_dead() {
        // The x run is closed on both sides and its row is too short to
        // complete; its row contribution is zero.
        let closed = Grid::from_rows(&["oxxo", "....", "....", "...."]);
        let open = Grid::from_rows(&["oxx.", "....", "....", "...."]);
        assert!(evaluate(&RULES, &closed, true) > evaluate(&RULES, &open, true));
    }

    #[test]
    fn evaluation_is_invariant_under_all_eight_transforms() {
        let grid = Grid::from_rows(&[".oo.", "x...", ".x..", "...."]);
        let reference = evaluate(&RULES, &grid, true);
        for transform in equivalents(&grid) {
            assert_eq!(evaluate(&RULES, &transform, true), reference);
        }
    }

    #[test]
    fn score_cache_folds_symmetric_positions() {
        let mut search = HeuristicMinimax::new(RULES, 4);
        let grid = Grid::from_rows(&[".oo.", "x...", ".x..", "...."]);
        let reference = search.score_heuristic(&grid, true, 3);
        for transform in equivalents(&grid) {
            assert_eq!(search.score_heuristic(&transform, true, 3), reference);
        }
    }

    #[test]
    fn blocks_an_immediate_loss() {
        let mut search = HeuristicMinimax::new(RULES, 3);
        let grid = Grid::from_rows(&["xx.", "o..", "..."]);
        assert_eq!(search.next_move(&grid), Ok(Move::new(0, 2)));
    }

    #[test]
    fn takes_an_immediate_win() {
        let mut search = HeuristicMinimax::new(RULES, 3);
        let grid = Grid::from_rows(&["oo.", "xx.", "..."]);
        assert_eq!(search.next_move(&grid), Ok(Move::new(0, 2)));
    }

    #[test]
    fn no_legal_move_on_a_full_grid() {
        let mut search = HeuristicMinimax::new(RULES, 4);
        let grid = Grid::from_rows(&["xoo", "oxx", "xoo"]);
        assert_eq!(search.next_move(&grid), Err(StrategyError::NoLegalMove));
    }
}
