//! Terminal output helpers.

use crossterm::style::Stylize;
use passgen::Verdict;

/// `=== title ===`
pub fn header(title: &str) -> String {
    format!("=== {title} ===")
}

/// Verdict label, coloured red/yellow/green when `color` is set.
pub fn paint_verdict(verdict: Verdict, color: bool) -> String {
    let label = verdict.as_str();
    if !color {
        return label.to_string();
    }
    match verdict {
        Verdict::Weak => label.red().to_string(),
        Verdict::Medium => label.yellow().to_string(),
        Verdict::Strong => label.green().bold().to_string(),
    }
}

/// Check if stdout is a tty.
pub fn is_interactive() -> bool {
    unsafe { libc::isatty(1) == 1 }
}
