//! Basic example of using the Sudoku engine.

use sudoku_core::{Grid, Solver};

fn main() {
    // Parse a classic 9×9 puzzle from compact notation
    let puzzle_string =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
    let puzzle = Grid::from_string(3, puzzle_string).expect("valid puzzle string");

    println!("Puzzle ({} empty cells):", puzzle.empty_count());
    println!("{puzzle}");

    let solver = Solver::classic();
    match solver.solve(&puzzle) {
        Some(solution) => {
            println!("Solution:");
            println!("{solution}");
        }
        None => println!("No solution exists for these givens."),
    }

    // The same engine handles any N²×N² board; here a 4×4 with 2×2 boxes.
    let small = Grid::from_string(2, "1..4.41..14.4..1").expect("valid puzzle string");
    let solver = Solver::new(2);
    if let Some(solution) = solver.solve(&small) {
        println!("4×4 solution:");
        println!("{solution}");
    }
}
