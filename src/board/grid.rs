//! Grid representation.
//!
//! Holds the rectangular cell matrix of a game position. A `Grid` is a
//! value type: search derives successor positions with [`Grid::with`]
//! without ever mutating the original, which keeps memoization keys
//! stable and aliasing-free.

/// The symbol of an unoccupied cell.
pub const EMPTY: char = '.';

/// A piece on the board: the human player or the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Player,
    Ai,
}

impl Mark {
    /// Returns the single-character cell symbol.
    pub const fn symbol(self) -> char {
        match self {
            Mark::Player => 'x',
            Mark::Ai => 'o',
        }
    }

    /// Parses a mark from its cell symbol.
    pub fn from_symbol(c: char) -> Option<Mark> {
        match c {
            'x' => Some(Mark::Player),
            'o' => Some(Mark::Ai),
            _ => None,
        }
    }

    /// Returns the other side.
    pub const fn opponent(self) -> Mark {
        match self {
            Mark::Player => Mark::Ai,
            Mark::Ai => Mark::Player,
        }
    }
}

/// A cell coordinate, 0-indexed. Row 0 is the top row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub row: usize,
    pub column: usize,
}

impl Move {
    pub const fn new(row: usize, column: usize) -> Self {
        Move { row, column }
    }
}

/// A rectangular game position.
///
/// Invariant: every row has the same length, and both dimensions are at
/// least 1. Cells hold [`EMPTY`] or a [`Mark`] symbol.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: Vec<Vec<char>>,
}

impl Grid {
    /// Creates an all-empty grid. Dimensions must already be validated.
    pub fn new(rows: usize, columns: usize) -> Self {
        Grid {
            cells: vec![vec![EMPTY; columns]; rows],
        }
    }

    /// Builds a grid from row-strings. Panics on ragged input; intended
    /// for internal transform code and tests where the shape is known.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Self {
        let cells: Vec<Vec<char>> = rows.iter().map(|r| r.as_ref().chars().collect()).collect();
        assert!(!cells.is_empty() && !cells[0].is_empty(), "grid must be non-empty");
        assert!(
            cells.iter().all(|r| r.len() == cells[0].len()),
            "grid rows must have equal length"
        );
        Grid { cells }
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn columns(&self) -> usize {
        self.cells[0].len()
    }

    /// Returns the symbol at a 0-indexed coordinate.
    pub fn get(&self, row: usize, column: usize) -> char {
        self.cells[row][column]
    }

    /// True if the coordinate lies on the board.
    pub fn contains(&self, mv: Move) -> bool {
        mv.row < self.rows() && mv.column < self.columns()
    }

    /// True if the cell at `mv` is unoccupied.
    pub fn is_empty_at(&self, mv: Move) -> bool {
        self.cells[mv.row][mv.column] == EMPTY
    }

    /// True if no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|row| row.iter().all(|&c| c != EMPTY))
    }

    /// Writes a symbol in place. Session-side mutation; search uses
    /// [`Grid::with`] instead.
    pub fn place(&mut self, mv: Move, mark: Mark) {
        self.cells[mv.row][mv.column] = mark.symbol();
    }

    /// Returns a copy of the grid with one cell overwritten. The pure
    /// successor function used by search.
    pub fn with(&self, mv: Move, symbol: char) -> Grid {
        let mut next = self.clone();
        next.cells[mv.row][mv.column] = symbol;
        next
    }

    /// Iterates the empty cells in row-major order. Search tie-breaking
    /// relies on this order being stable.
    pub fn empty_cells(&self) -> impl Iterator<Item = Move> + '_ {
        self.cells.iter().enumerate().flat_map(|(i, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &c)| c == EMPTY)
                .map(move |(j, _)| Move::new(i, j))
        })
    }

    /// Snapshot as one string per row, top to bottom.
    pub fn row_strings(&self) -> Vec<String> {
        self.cells.iter().map(|row| row.iter().collect()).collect()
    }

    /// Flattened serialization used as a cache key.
    pub fn key(&self) -> String {
        self.cells.iter().flatten().collect()
    }
}
