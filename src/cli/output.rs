//! Output formatting and progress bars for CLI

use indicatif::{ProgressBar, ProgressStyle};

use crate::tictactoe::{BOARD_SIDE, Board, Cell, Coord, LineAnalyzer};

/// Create a progress bar for evaluation runs
pub fn create_game_progress(total_games: u64) -> anyhow::Result<ProgressBar> {
    let pb = ProgressBar::new(total_games);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games ({msg})")?
            .progress_chars("=>-"),
    );
    Ok(pb)
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(40));
    println!("{title}");
    println!("{}", "=".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Render the board as a grid with row and column labels.
///
/// Cells of a completed line are wrapped in brackets.
pub fn render_board(board: &Board) -> String {
    let winning_line = LineAnalyzer::winning_line(board.cells()).map(|(_, line)| line);

    let mut out = String::from("     0   1   2\n");
    for coord in Coord::all() {
        if coord.col() == 0 {
            if coord.row() > 0 {
                out.push_str("    ---+---+---\n");
            }
            out.push_str(&format!("  {} ", coord.row()));
        }

        let mark = match board.cell(coord) {
            Cell::Empty => ' ',
            Cell::Mark(player) => player.to_char(),
        };
        if winning_line.is_some_and(|line| line.contains(&coord.index())) {
            out.push_str(&format!("[{mark}]"));
        } else {
            out.push_str(&format!(" {mark} "));
        }

        if coord.col() < BOARD_SIDE - 1 {
            out.push('|');
        } else {
            out.push('\n');
        }
    }
    out
}
