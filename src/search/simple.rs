//! First-empty-cell strategy.

use crate::board::{Grid, Move};

use super::{Strategy, StrategyError};

/// Plays the first empty cell in row-major order. The default strategy a
/// session is born with; useful as a baseline and in tests.
#[derive(Debug, Default)]
pub struct Simple;

impl Simple {
    pub fn new() -> Self {
        Simple
    }
}

impl Strategy for Simple {
    fn next_move(&mut self, grid: &Grid) -> Result<Move, StrategyError> {
        grid.empty_cells().next().ok_or(StrategyError::NoLegalMove)
    }
}
