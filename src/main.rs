//! Lazor Puzzle Solver
//!
//! Parses a `.bff` puzzle file, searches for a placement of the available
//! reflect/opaque/refract blocks that routes every emitter through every
//! target point, and prints the result.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{info, warn};

use lazor::parser;
use lazor::render;
use lazor::solver::Solver;

/// Solves a Lazor puzzle described in a `.bff` file.
#[derive(Parser)]
#[command(name = "lazor")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Path to a `.bff` file, used when no subcommand is given.
    path: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a `.bff` file and solve it.
    Solve {
        /// Path to the `.bff` file.
        path: PathBuf,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let path = match cli.command {
        Some(Command::Solve { path }) => path,
        None => match cli.path {
            Some(path) => path,
            None => {
                eprintln!("usage: lazor <PATH> | lazor solve <PATH>");
                return ExitCode::from(2);
            }
        },
    };

    run_solve(&path)
}

fn run_solve(path: &std::path::Path) -> ExitCode {
    info!(path = %path.display(), "parsing puzzle");
    let puzzle = match parser::parse_file(path) {
        Ok(puzzle) => puzzle,
        Err(err) => {
            eprintln!("failed to parse {}: {err}", path.display());
            return ExitCode::from(2);
        }
    };

    info!(
        emitters = puzzle.emitters.len(),
        targets = puzzle.targets.len(),
        "solving"
    );
    match Solver::solve(&puzzle) {
        Some(solution) => {
            let max_trace = solution.trace.iter().map(Vec::len).max().unwrap_or(0);
            if max_trace >= 500 {
                warn!(max_trace, "a laser in the winning placement hit MAX_STEPS");
            }
            println!("{}", render::board_to_string(&solution));
            println!(
                "solved: {} points visited, {} lasers traced",
                solution.visited.len(),
                solution.trace.len()
            );
            ExitCode::SUCCESS
        }
        None => {
            println!("no solution found for the given budget");
            ExitCode::from(1)
        }
    }
}
