use std::error::Error;
use std::fs;
use std::io::{stdout, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use clap::{Parser, Subcommand};
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};

use npuzzle::{parse_board, Board, Solver};

#[derive(Parser)]
#[command(name = "npuzzle")]
#[command(about = "Minimum-move sliding-tile puzzle solver")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a puzzle read from a file and print the board sequence
    Solve {
        /// Puzzle file: the dimension n, then n*n tiles with 0 as the blank
        file: PathBuf,
        /// Replay the solution as a terminal animation
        #[arg(long)]
        watch: bool,
    },
    /// Print a random solvable board
    Generate {
        /// Board dimension
        #[arg(default_value_t = 3)]
        size: usize,
    },
}

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    match args.command {
        Commands::Solve { file, watch } => {
            let input = fs::read_to_string(&file)?;
            let board = parse_board(&input)?;
            let solver = Solver::new(board);

            if !solver.is_solvable() {
                println!("No solution possible");
                return Ok(());
            }

            println!("Minimum number of moves = {}", solver.moves());
            if watch {
                replay(&solver)?;
            } else if let Some(path) = solver.solution() {
                for board in path {
                    println!("{board}");
                }
            }
        }
        Commands::Generate { size } => {
            let board = Board::shuffled(size)?;
            println!("{size}");
            println!("{board}");
        }
    }
    Ok(())
}

fn replay(solver: &Solver) -> Result<(), Box<dyn Error>> {
    let path = match solver.solution() {
        Some(path) => path,
        None => return Ok(()),
    };
    let moves = solver.solution_moves().unwrap_or_default();
    let mut out = stdout();

    execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    println!("Start:\n{}", path[0]);
    thread::sleep(Duration::from_millis(500));

    for (movement, board) in moves.iter().zip(&path[1..]) {
        execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
        println!("{movement}\n{board}");
        out.flush()?;
        thread::sleep(Duration::from_millis(500));
    }

    println!("Solved in {} moves", solver.moves());
    Ok(())
}
