//! Simple interactive CLI mode
//!
//! Text-based board without TUI: reveal clues by typing their coordinates.

use crate::core::{NUM_CATEGORIES, Target};
use crate::game::Game;
use crate::loader::CategorySource;
use crate::output::{print_board, print_reveal};
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use tokio::runtime::Runtime;

/// A line of user input in text mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Reveal the clue at a 0-based row and column
    Reveal { row: usize, col: usize },
    Restart,
    Board,
    Help,
    Quit,
}

/// Parse one input line
///
/// Coordinates are typed 1-based as `<row> <col>` (also `<row>,<col>`).
///
/// # Examples
/// ```
/// use jeopardy::commands::simple::{Command, parse_command};
///
/// assert_eq!(parse_command("2 3"), Some(Command::Reveal { row: 1, col: 2 }));
/// assert_eq!(parse_command("restart"), Some(Command::Restart));
/// assert_eq!(parse_command("0 1"), None);
/// ```
#[must_use]
pub fn parse_command(input: &str) -> Option<Command> {
    let input = input.trim().to_lowercase();

    match input.as_str() {
        "quit" | "q" | "exit" => return Some(Command::Quit),
        "restart" | "new" | "n" | "r" => return Some(Command::Restart),
        "board" | "b" | "" => return Some(Command::Board),
        "help" | "h" | "?" => return Some(Command::Help),
        _ => {}
    }

    let mut parts = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty());
    let row: usize = parts.next()?.parse().ok()?;
    let col: usize = parts.next()?.parse().ok()?;
    if parts.next().is_some() || row == 0 || col == 0 {
        return None;
    }

    Some(Command::Reveal {
        row: row - 1,
        col: col - 1,
    })
}

/// Deal a round while showing a progress bar
///
/// # Errors
///
/// Returns an error if any category fails to load.
pub fn load_round<S: CategorySource>(game: &mut Game<S>, runtime: &Runtime) -> Result<()> {
    let pb = ProgressBar::new(NUM_CATEGORIES as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} | {msg}")?
            .progress_chars("█▓▒░"),
    );
    pb.set_message("Loading categories...");

    let result = runtime.block_on(game.restart_with(|_, id, category| {
        pb.inc(1);
        pb.set_message(format!("#{id} {}", category.title));
    }));

    match result {
        Ok(()) => {
            pb.finish_with_message("Board ready!");
            Ok(())
        }
        Err(err) => {
            pb.abandon_with_message("Load failed");
            Err(err.into())
        }
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if the first round cannot be loaded or if reading user
/// input fails.
pub fn run_simple<S: CategorySource>(mut game: Game<S>, runtime: &Runtime) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Jeopardy! - Text Mode                       ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    print_help();

    load_round(&mut game, runtime)?;
    print_board(game.board());

    loop {
        let Some(input) = get_user_input("Clue (row col) or command")? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        match parse_command(&input) {
            Some(Command::Quit) => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Some(Command::Restart) => {
                if let Err(err) = load_round(&mut game, runtime) {
                    log::warn!("Round setup failed: {err}");
                    println!("❌ Could not load round: {err}");
                }
                print_board(game.board());
            }
            Some(Command::Board) => print_board(game.board()),
            Some(Command::Help) => print_help(),
            Some(Command::Reveal { row, col }) => {
                let target = Target::Clue { row, col };
                if let Some(showing) = game.handle_reveal(target) {
                    let board = game.board();
                    if let (Some(title), Some(clue)) = (board.headers().get(col), board.cell(row, col)) {
                        print_reveal(title, row, clue.display_text(), showing);
                    }
                    print_board(board);
                } else {
                    println!("Nothing to reveal there.");
                }
            }
            None => println!("❌ Unknown input. Type 'help' for commands."),
        }
    }
}

fn print_help() {
    println!("Reveal a clue by typing its row and column, e.g. '2 3'.");
    println!("The first reveal shows the question, the second shows the answer.\n");
    println!("Commands: 'board' to redraw, 'restart' for a new round, 'quit' to exit\n");
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
