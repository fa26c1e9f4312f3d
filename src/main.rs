//! Brick Paving Puzzle Solver
//!
//! Solves a tiling puzzle on a 5x6 staggered grid where nine pieces are
//! available to cover the board completely, without overlap or rotation.
//! Prints the board, the pieces, and the found solution (or a failure
//! message with a non-zero exit status) together with the search cost.

use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, Subcommand};

use paver::{puzzle, render, solver};

/// Solves a staggered-grid tiling puzzle and prints the solution.
#[derive(Parser)]
#[command(name = "paver")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Solve the puzzle and print the covered board.
    Solve,
    /// Print the board and the pieces without solving.
    Show,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Show) => {
            print_puzzle();
            ExitCode::SUCCESS
        }
        Some(Command::Solve) | None => run_solver(),
    }
}

/// Prints the empty board and every piece.
fn print_puzzle() {
    println!("board:\n{}", render::format_shape(&puzzle::board()));
    println!("pieces:");
    for piece in &puzzle::pieces() {
        println!("{}", render::format_shape(piece));
    }
}

/// Runs the search and reports the outcome.
fn run_solver() -> ExitCode {
    print_puzzle();

    let mut board = puzzle::board();
    let mut pieces = puzzle::pieces();
    solver::order_for_search(&mut pieces);

    let start = Instant::now();
    let mut steps = 0;
    let solved = solver::solve(&mut board, &mut pieces, &mut steps);
    let elapsed = start.elapsed();

    println!(
        "Performed {} steps in {:.6} [s].",
        steps,
        elapsed.as_secs_f64()
    );

    if solved {
        println!("Solution found:\n{}", render::format_shape(&board));
        if !pieces.is_empty() {
            println!("Unused pieces:");
            for piece in &pieces {
                println!("{}", render::format_shape(piece));
            }
        }
        ExitCode::SUCCESS
    } else {
        println!("Solution does not exist.");
        ExitCode::FAILURE
    }
}
