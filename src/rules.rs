//! Win and terminal detection.
//!
//! A line wins for a symbol when it contains at least `win_threshold`
//! occurrences of that symbol anywhere in the line. The source engine
//! counts occurrences rather than requiring a contiguous run, which
//! over-credits split runs when the threshold is below the line length;
//! that behavior is kept deliberately.

use crate::board::{lines, Grid, Mark};

/// Win rule for a game: how many of one symbol a line needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    pub win_threshold: usize,
}

impl Rules {
    pub const fn new(win_threshold: usize) -> Self {
        Rules { win_threshold }
    }

    /// Scans all rows, columns, and diagonals for a winner. When several
    /// lines win for different sides at once the first line in
    /// enumeration order decides.
    pub fn winner(&self, grid: &Grid) -> Option<Mark> {
        for line in lines(grid) {
            for mark in [Mark::Player, Mark::Ai] {
                let count = line.chars().filter(|&c| c == mark.symbol()).count();
                if count >= self.win_threshold {
                    return Some(mark);
                }
            }
        }
        None
    }

    /// True when a side has won or no empty cell remains.
    pub fn is_terminal(&self, grid: &Grid) -> bool {
        self.winner(grid).is_some() || grid.is_full()
    }
}
