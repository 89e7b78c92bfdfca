//! Command-line maze solver.
//!
//! Loads a maze description, prints it, walks it and prints the result.
//!
//! # Usage
//!
//! ```sh
//! mazewalk path/to/maze.txt
//! ```
//!
//! Without an argument the bundled `mazes/maze.txt` is used. Set
//! `RUST_LOG=trace` to print every solver iteration together with the grid.

use std::{path::PathBuf, process};

use clap::Parser;
use mazewalk_core::{LoadError, maze_file};
use mazewalk_solver::{MazeSolver, Outcome};

const DEFAULT_MAZE: &str = "mazes/maze.txt";

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Maze description file.
    #[arg(value_name = "MAZE", default_value = DEFAULT_MAZE)]
    maze: PathBuf,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("Failed to load maze: {err}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<Outcome, LoadError> {
    let grid = maze_file::load(&args.maze)?;
    log::info!(
        "solving {} ({}x{})",
        args.maze.display(),
        grid.width(),
        grid.height()
    );

    let mut solver = MazeSolver::new(grid);
    print_rows(&solver.render());
    println!();

    let outcome = if log::log_enabled!(log::Level::Trace) {
        trace_walk(&mut solver)
    } else {
        solver.solve()
    };

    match &outcome {
        Outcome::Solved { path, move_count } => {
            println!("Solved the maze in {move_count} moves!");
            println!("Path:");
            for pos in path {
                println!("  {}, {}", pos.x(), pos.y());
            }
            println!("Final result:");
        }
        Outcome::Failed { .. } => {
            println!("The maze wasn't solved. Take a look and see why:");
        }
    }
    print_rows(&solver.render());
    Ok(outcome)
}

fn trace_walk(solver: &mut MazeSolver) -> Outcome {
    while let Some(report) = solver.step_verbose() {
        log::trace!(
            "move {}: {} (cursor {}, path length {})",
            report.move_number,
            report.action,
            report.cursor,
            report.path.len()
        );
        for row in solver.render() {
            log::trace!("  {row}");
        }
    }
    solver.solve()
}

fn print_rows(rows: &[String]) {
    for row in rows {
        println!("{row}");
    }
}

#[cfg(test)]
mod tests {
    use std::{env, fs, path::Path};

    use super::*;

    fn bundled_maze() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("../..").join(DEFAULT_MAZE)
    }

    #[test]
    fn test_maze_defaults_to_bundled_file() {
        let args = Args::parse_from(["mazewalk"]);
        assert_eq!(args.maze, PathBuf::from(DEFAULT_MAZE));

        let args = Args::parse_from(["mazewalk", "other.txt"]);
        assert_eq!(args.maze, PathBuf::from("other.txt"));
    }

    #[test]
    fn test_run_solves_bundled_maze() {
        let args = Args { maze: bundled_maze() };
        let outcome = run(&args).unwrap();
        assert!(outcome.is_solved());
    }

    #[test]
    fn test_run_rejects_malformed_file() {
        let path = env::temp_dir().join(format!("mazewalk-cli-{}.txt", process::id()));
        fs::write(&path, "3 2\n0 0\n2 1\n1 1 1\n1 1\n").unwrap();

        let err = run(&Args { maze: path.clone() }).unwrap_err();
        fs::remove_file(&path).unwrap();

        assert!(err.is_malformed(), "{err}");
        assert!(err.to_string().contains("line 5"), "{err}");
    }

    #[test]
    fn test_run_reports_missing_file() {
        let args = Args {
            maze: PathBuf::from("does/not/exist.txt"),
        };
        assert!(matches!(run(&args), Err(LoadError::Io { .. })));
    }
}
