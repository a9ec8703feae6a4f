//! Game session management.
//!
//! Owns the grid and the bound strategy, validates player moves at the
//! 1-indexed boundary, and answers every legal player move with one
//! automatic engine reply until the game is over.

use crate::board::{Grid, Mark, Move};
use crate::rules::Rules;
use crate::search::{build_strategy, Strategy, StrategyError, StrategyKind};

/// Rejected session construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("impossible game: rows, columns, and win threshold must all be at least 1")]
    ImpossibleGame,
}

/// Rejected or failed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("move is outside of the board")]
    OutsideBoard,

    #[error("cell is already taken")]
    OccupiedCell,

    #[error("the game is already over")]
    GameOver,

    /// The bound strategy produced an out-of-bounds or occupied move.
    /// A strategy bug; propagated, never corrected.
    #[error("strategy produced an illegal move at ({row}, {column})")]
    InvalidAiMove { row: usize, column: usize },

    #[error(transparent)]
    Strategy(#[from] StrategyError),
}

/// One game between the player ('x') and the engine ('o').
pub struct GameSession {
    grid: Grid,
    rules: Rules,
    strategy: Box<dyn Strategy>,
}

impl GameSession {
    /// Creates a session with an empty grid and the Simple strategy
    /// bound; `start` swaps in the strategy the caller wants.
    pub fn new(rows: usize, columns: usize, win_threshold: usize) -> Result<Self, ConfigError> {
        if rows == 0 || columns == 0 || win_threshold == 0 {
            return Err(ConfigError::ImpossibleGame);
        }
        let rules = Rules::new(win_threshold);
        Ok(GameSession {
            grid: Grid::new(rows, columns),
            rules,
            strategy: build_strategy(StrategyKind::Simple, rules),
        })
    }

    /// Resets the grid, binds a fresh strategy instance, and, when the
    /// engine moves first, makes its opening move immediately.
    pub fn start(&mut self, kind: StrategyKind, player_first: bool) -> Result<(), MoveError> {
        self.grid = Grid::new(self.grid.rows(), self.grid.columns());
        self.strategy = build_strategy(kind, self.rules);
        if !player_first {
            self.apply_ai_move()?;
        }
        Ok(())
    }

    /// Applies a player move given in 1-indexed coordinates, then lets
    /// the engine reply unless the player's move ended the game. The
    /// session state is untouched on any error from the player's side.
    pub fn make_move(&mut self, row: usize, column: usize) -> Result<(), MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        let mv = match (row.checked_sub(1), column.checked_sub(1)) {
            (Some(r), Some(c)) => Move::new(r, c),
            _ => return Err(MoveError::OutsideBoard),
        };
        if !self.grid.contains(mv) {
            return Err(MoveError::OutsideBoard);
        }
        if !self.grid.is_empty_at(mv) {
            return Err(MoveError::OccupiedCell);
        }

        self.grid.place(mv, Mark::Player);
        if !self.is_over() {
            self.apply_ai_move()?;
        }
        Ok(())
    }

    /// Asks the bound strategy for a move and applies it, rejecting
    /// anything off-board or occupied.
    fn apply_ai_move(&mut self) -> Result<(), MoveError> {
        let mv = self.strategy.next_move(&self.grid)?;
        if !self.grid.contains(mv) || !self.grid.is_empty_at(mv) {
            return Err(MoveError::InvalidAiMove {
                row: mv.row,
                column: mv.column,
            });
        }
        self.grid.place(mv, Mark::Ai);
        Ok(())
    }

    /// Read-only snapshot, one string per row.
    pub fn state(&self) -> Vec<String> {
        self.grid.row_strings()
    }

    pub fn winner(&self) -> Option<Mark> {
        self.rules.winner(&self.grid)
    }

    pub fn is_over(&self) -> bool {
        self.rules.is_terminal(&self.grid)
    }
}
