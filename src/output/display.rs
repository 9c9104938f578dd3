//! Display functions for text mode and one-shot commands

use super::formatters::{create_progress_bar, fit_to_width};
use crate::core::{Board, Category, CategoryId, Showing};
use colored::Colorize;

/// Width of one board column in text mode
const COLUMN_WIDTH: usize = 18;

/// Print the board as a text table with 1-based row and column labels
pub fn print_board(board: &Board) {
    if board.is_empty() {
        println!("\n{}", "No board dealt. Type 'restart' to deal a new round.".yellow());
        return;
    }

    let rule = "─".repeat(4 + board.columns() * (COLUMN_WIDTH + 1));

    println!("\n{}", rule.cyan());
    let mut numbers = String::from("    ");
    for col in 1..=board.columns() {
        numbers.push_str(&fit_to_width(&col.to_string(), COLUMN_WIDTH));
        numbers.push(' ');
    }
    println!("{}", numbers.bright_black());

    let mut titles = String::from("    ");
    for title in board.headers() {
        titles.push_str(&fit_to_width(&title.to_uppercase(), COLUMN_WIDTH));
        titles.push(' ');
    }
    println!("{}", titles.bright_white().bold());
    println!("{}", rule.cyan());

    for (row, slots) in board.rows().iter().enumerate() {
        print!("{}", format!("{:>2}  ", row + 1).bright_black());
        for slot in slots {
            let cell = match slot {
                None => fit_to_width("", COLUMN_WIDTH).normal(),
                Some(clue) => {
                    let text = fit_to_width(clue.display_text(), COLUMN_WIDTH);
                    match clue.showing() {
                        Showing::None => text.bright_yellow().bold(),
                        Showing::Question => text.white(),
                        Showing::Answer => text.green(),
                    }
                }
            };
            print!("{cell} ");
        }
        println!();
    }

    println!("{}", rule.cyan());
    let answered = board.count_showing(Showing::Answer);
    let total = board.clue_count();
    println!(
        "Answered: [{}] {answered}/{total}",
        create_progress_bar(answered, total, 20).green()
    );
}

/// Print the full text of a revealed clue, which the table may have cut short
pub fn print_reveal(title: &str, row: usize, text: &str, showing: Showing) {
    let label = match showing {
        Showing::Answer => "Answer".green().bold(),
        _ => "Question".bright_yellow().bold(),
    };
    println!("\n{} #{}: {label}: {text}", title.bright_white().bold(), row + 1);
}

/// Print a single category with every clue revealed
pub fn print_category(id: CategoryId, category: &Category) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        format!("CATEGORY {id}:").bright_cyan().bold(),
        category.title.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if category.clues.is_empty() {
        println!("\n  (no clues)");
    }

    for (i, clue) in category.clues.iter().enumerate() {
        println!("\n  {}. {}", i + 1, clue.question());
        println!("     {} {}", "→".bright_black(), clue.answer().green());
    }
    println!();
}

/// Print a selection of category ids
pub fn print_ids(ids: &[CategoryId]) {
    let list: Vec<String> = ids.iter().map(ToString::to_string).collect();
    println!("{}", list.join(" "));
}
