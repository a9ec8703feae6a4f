//! Tactik engine library.
//!
//! A generalized tic-tac-toe engine: configurable board dimensions and
//! win threshold, exhaustive and depth-bounded minimax search behind a
//! symmetry-folding memo cache, and a game session that validates moves
//! and replies automatically.

pub mod board;
pub mod cache;
pub mod rules;
pub mod search;
pub mod session;

pub use board::{Grid, Mark, Move};
pub use rules::Rules;
pub use search::{Strategy, StrategyError, StrategyKind};
pub use session::{ConfigError, GameSession, MoveError};
