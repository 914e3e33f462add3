//! Thin command-line front-end for the solver.
//!
//! Marshals a puzzle string into a [`Grid`], runs the solver, and prints the
//! result. All algorithmic work lives in `sudoku-core`.

use std::io::{self, Read};
use std::process::ExitCode;

use clap::Parser;
use sudoku_core::{Grid, Solver};

/// Solve generalized Sudoku puzzles from the command line.
///
/// Puzzles use one character per cell for boards up to 9×9 ('0' or '.' for
/// an empty cell), or whitespace-separated tokens for larger boards.
#[derive(Debug, Parser)]
#[command(name = "sudoku-solve", version, about)]
struct Cli {
    /// Puzzle in compact notation; reads stdin when absent or "-".
    puzzle: Option<String>,

    /// Box size N of the N²×N² board (3 for classic 9×9, 2 for 4×4).
    #[arg(long, default_value_t = 3)]
    box_size: usize,

    /// Print the solution as a JSON array of rows (null marks an empty cell).
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let input = match cli.puzzle.as_deref() {
        Some("-") | None => {
            let mut buffer = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut buffer) {
                eprintln!("error: failed to read stdin: {e}");
                return ExitCode::from(2);
            }
            buffer
        }
        Some(puzzle) => puzzle.to_string(),
    };

    let grid = match Grid::from_string(cli.box_size, &input) {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(2);
        }
    };

    let solver = Solver::new(cli.box_size);
    match solver.solve(&grid) {
        Some(solution) => {
            if cli.json {
                let rows: Vec<Vec<Option<u8>>> = solution.rows().map(<[_]>::to_vec).collect();
                let json = serde_json::to_string(&rows).expect("rows of optional digits serialize");
                println!("{json}");
            } else {
                print!("{solution}");
            }
            ExitCode::SUCCESS
        }
        None => {
            println!("no solution");
            ExitCode::from(1)
        }
    }
}
