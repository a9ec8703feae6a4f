//! Line enumeration and run-length encoding.
//!
//! Every win check and heuristic feature works on "lines": the rows,
//! columns, and diagonals of the grid flattened into strings. Diagonals
//! are enumerated by offset over `[-columns, columns)` in both
//! directions; partial diagonals shorter than any win threshold come out
//! too and are harmless to scan.

use super::grid::Grid;

/// Iterates every row, column, and diagonal of the grid as a string.
///
/// Recomputed per call; nothing at this layer is cached.
pub fn lines(grid: &Grid) -> impl Iterator<Item = String> + '_ {
    let rows = grid.rows();
    let columns = grid.columns();

    let row_lines =
        (0..rows).map(move |i| -> String { (0..columns).map(|j| grid.get(i, j)).collect() });

    let column_lines =
        (0..columns).map(move |j| -> String { (0..rows).map(|i| grid.get(i, j)).collect() });

    let span = columns as isize;
    let diagonal_lines = (-span..span).flat_map(move |offset| {
        let main: String = (0..rows)
            .filter_map(|i| {
                let j = i as isize + offset;
                (0..span).contains(&j).then(|| grid.get(i, j as usize))
            })
            .collect();
        let anti: String = (0..rows)
            .filter_map(|i| {
                let j = span - 1 - i as isize - offset;
                (0..span).contains(&j).then(|| grid.get(i, j as usize))
            })
            .collect();
        [main, anti]
    });

    row_lines
        .chain(column_lines)
        .chain(diagonal_lines)
        .filter(|l: &String| !l.is_empty())
}

/// Run-length-encodes a line into (symbol, run length) segments.
pub fn shrink(line: &str) -> Vec<(char, usize)> {
    let mut segments = Vec::new();
    let mut chars = line.chars();
    let Some(first) = chars.next() else {
        return segments;
    };
    let mut cur = first;
    let mut count = 1;
    for c in chars {
        if c == cur {
            count += 1;
        } else {
            segments.push((cur, count));
            cur = c;
            count = 1;
        }
    }
    segments.push((cur, count));
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shrink_two_runs() {
        assert_eq!(shrink("....xx"), vec![('.', 4), ('x', 2)]);
    }

    #[test]
    fn shrink_single_run() {
        assert_eq!(shrink("...."), vec![('.', 4)]);
    }

    #[test]
    fn shrink_alternating_symbols() {
        let expected: Vec<(char, usize)> = "xoxoxoxo".chars().map(|c| (c, 1)).collect();
        assert_eq!(shrink("xoxoxoxo"), expected);
    }

    #[test]
    fn shrink_empty_line() {
        assert!(shrink("").is_empty());
    }

    #[test]
    fn lines_include_rows_columns_and_main_diagonals() {
        let grid = Grid::from_rows(&["abc", "def", "ghi"]);
        let all: Vec<String> = lines(&grid).collect();
        for expected in ["abc", "def", "ghi", "adg", "beh", "cfi", "aei", "ceg"] {
            assert!(all.contains(&expected.to_string()), "missing line {expected}");
        }
    }

    #[test]
    fn lines_include_partial_diagonals() {
        let grid = Grid::from_rows(&["abc", "def", "ghi"]);
        let all: Vec<String> = lines(&grid).collect();
        // The diagonal one step above the main one, both directions.
        assert!(all.contains(&"bf".to_string()));
        assert!(all.contains(&"bd".to_string()));
    }

    #[test]
    fn lines_skip_empty_strings() {
        let grid = Grid::from_rows(&["ab", "cd"]);
        assert!(lines(&grid).all(|l| !l.is_empty()));
    }

    #[test]
    fn line_count_on_a_square_grid() {
        // 3 rows + 3 columns + non-empty diagonals from 6 offsets x 2.
        let grid = Grid::new(3, 3);
        let diagonals = lines(&grid).count() - 6;
        assert_eq!(diagonals, 10);
    }
}
