//! Interactive terminal output: candidate listing and the choice prompt.

use owo_colors::OwoColorize;
use std::io::{self, BufRead, IsTerminal, Write};

use crate::models::Work;
use crate::utils::{display_authors, truncate_with_ellipsis, SelectError};

/// Check if stdout is a terminal.
pub fn is_terminal() -> bool {
    io::stdout().is_terminal()
}

/// Print the numbered candidate list and block for a 1-based choice.
///
/// This is the chooser handed to [`crate::utils::resolve`] by the binary.
/// The returned value is the raw user entry; range checking happens in the
/// selector.
pub fn choose(works: &[Work]) -> Result<usize, SelectError> {
    print_candidates(works);

    print!("Choose the correct article (number): ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let entry = line.trim();

    entry
        .parse::<usize>()
        .map_err(|_| SelectError::InvalidChoice(entry.to_string()))
}

/// Print the numbered candidate list, one `N. <title> by <authors>` line
/// per work. Long lines are truncated to the terminal width when stdout is
/// a terminal.
pub fn print_candidates(works: &[Work]) {
    let tty = is_terminal();
    let width = crate::utils::terminal_width();

    println!("Multiple articles found:");
    for (i, work) in works.iter().enumerate() {
        let entry = format!("{} by {}", work.primary_title(), display_authors(work));
        if tty {
            let number = format!("{}.", i + 1);
            // Leave room for the number column
            let entry = truncate_with_ellipsis(&entry, width.saturating_sub(number.len() + 1));
            println!("{} {}", number.cyan().bold(), entry);
        } else {
            println!("{}. {}", i + 1, entry);
        }
    }
}
