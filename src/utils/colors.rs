/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

/// Grey out an hours figure when it is exactly zero, so filled cells stand
/// out in the weekly grid.
pub fn colorize_hours(value: &str) -> String {
    let zero = value
        .trim()
        .parse::<f64>()
        .map(|v| v == 0.0)
        .unwrap_or(false);

    if zero {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Wrap a cell in the today-column highlight.
pub fn highlight_today(value: &str) -> String {
    format!("{CYAN}{value}{RESET}")
}
