//! Tactik -- play generalized tic-tac-toe against the engine.
//!
//! Reads 1-indexed `ROW COL` moves from stdin and prints the board after
//! every move. Board dimensions and the win threshold come from the
//! command line; small boards get the exhaustive search, larger ones the
//! depth-bounded heuristic search.

use std::io::{self, BufRead, Write};
use std::process;

use tactik::{GameSession, Mark, MoveError, StrategyKind};

/// Largest cell count the exhaustive search is asked to handle.
const EXHAUSTIVE_CELL_LIMIT: usize = 12;

/// Ply bound for the heuristic search on larger boards.
const HEURISTIC_DEPTH: i32 = 4;

/// Parses `[ROWS COLS [WIN_THRESHOLD]]`, defaulting to a classic 3x3.
fn parse_args(args: &[String]) -> Result<(usize, usize, usize), String> {
    let number = |s: &String| {
        s.parse::<usize>()
            .map_err(|_| format!("not a number: '{}'", s))
    };
    match args {
        [] => Ok((3, 3, 3)),
        [rows, columns] => Ok((number(rows)?, number(columns)?, 3)),
        [rows, columns, threshold] => Ok((number(rows)?, number(columns)?, number(threshold)?)),
        _ => Err("usage: tactik [ROWS COLS [WIN_THRESHOLD]]".to_string()),
    }
}

fn print_state<W: Write>(out: &mut W, state: &[String]) {
    for row in state {
        writeln!(out, "{}", row).unwrap();
    }
    out.flush().unwrap();
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (rows, columns, threshold) = match parse_args(&args) {
        Ok(config) => config,
        Err(msg) => {
            eprintln!("{}", msg);
            process::exit(2);
        }
    };
    let mut session = match GameSession::new(rows, columns, threshold) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(2);
        }
    };
    let kind = if rows * columns <= EXHAUSTIVE_CELL_LIMIT {
        StrategyKind::Minimax
    } else {
        StrategyKind::Heuristic {
            max_depth: HEURISTIC_DEPTH,
        }
    };

    let stdin = io::stdin();
    let mut input = stdin.lock().lines();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    writeln!(out, "You play 'x'; the engine plays 'o'.").unwrap();
    let player_first = loop {
        write!(out, "Would you like to make the first move? (Y/n) ").unwrap();
        out.flush().unwrap();
        let Some(Ok(line)) = input.next() else { return };
        match line.trim().to_lowercase().as_str() {
            "" | "y" | "yes" => break true,
            "n" | "no" => break false,
            _ => continue,
        }
    };

    if let Err(e) = session.start(kind, player_first) {
        eprintln!("failed to start the game: {}", e);
        process::exit(1);
    }

    loop {
        print_state(&mut out, &session.state());
        if session.is_over() {
            break;
        }

        write!(out, "Your move, ROW COL counting from 1 (q to quit): ").unwrap();
        out.flush().unwrap();
        let Some(Ok(line)) = input.next() else { return };
        let line = line.trim();
        if line == "q" {
            return;
        }

        let mut parts = line.split_whitespace().map(str::parse::<usize>);
        let (Some(Ok(row)), Some(Ok(column)), None) = (parts.next(), parts.next(), parts.next())
        else {
            writeln!(out, "Could not parse that; enter two numbers.").unwrap();
            continue;
        };

        match session.make_move(row, column) {
            Ok(()) => {}
            Err(e @ (MoveError::OutsideBoard | MoveError::OccupiedCell)) => {
                writeln!(out, "Illegal move: {}", e).unwrap();
            }
            Err(e) => {
                eprintln!("engine failure: {}", e);
                process::exit(1);
            }
        }
    }

    match session.winner() {
        Some(Mark::Player) => writeln!(out, "You win!").unwrap(),
        Some(Mark::Ai) => writeln!(out, "The engine wins.").unwrap(),
        None => writeln!(out, "It's a draw.").unwrap(),
    }
    out.flush().unwrap();
}
