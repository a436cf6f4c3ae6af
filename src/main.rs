use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use duoku::{render::render, Game, Turn};

#[derive(Parser, Debug)]
#[command(name = "duoku", version, about = "Two-player turn-based terminal Sudoku")]
struct Cli {}

const QUIT_FAREWELL: &str = "\nGame ended by player. Goodbye!";
const INTERRUPT_FAREWELL: &str = "\nGame ended by user. Goodbye!";

fn main() -> Result<()> {
    let Cli {} = Cli::parse();
    env_logger::init();

    // Ctrl-C during the blocking read is the same abort as typing 'q'.
    ctrlc::set_handler(|| {
        println!("{INTERRUPT_FAREWELL}");
        std::process::exit(0);
    })
    .context("install interrupt handler")?;

    println!("{}", "Welcome to Terminal Sudoku for 2 Players!".bold());
    println!("Players take turns entering numbers (1-9) into the grid.");
    println!("Enter row (1-9), column (1-9), and number (1-9) separated by spaces.");
    println!("Enter 'q' at any time to quit the game.\n");

    let stdin = io::stdin();
    let mut game = Game::new();

    loop {
        println!("{}", render(game.grid()));
        println!("{}", format!("{}'s turn", game.current_player()).bold());
        print!("Enter row, column, number (e.g., '3 5 7'): ");
        io::stdout().flush()?;

        let mut line = String::new();
        let read = stdin.lock().read_line(&mut line).context("read input")?;
        if read == 0 {
            // stdin closed; nothing more can ever arrive
            println!("{QUIT_FAREWELL}");
            break;
        }

        match game.submit_line(&line) {
            Turn::Placed { .. } => {}
            Turn::Rejected(e) => println!("{}", e.to_string().red()),
            Turn::Completed { winner } => {
                println!("{}", render(game.grid()));
                println!(
                    "{}",
                    format!("{winner} has completed the Sudoku! Congratulations!").green().bold()
                );
                break;
            }
            Turn::Quit => {
                println!("{QUIT_FAREWELL}");
                break;
            }
        }
    }

    Ok(())
}
