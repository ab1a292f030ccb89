//! Formatting utilities used for CLI and export outputs.

use crate::models::TaskStatus;
use crate::utils::colors;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

pub fn pad_left(s: &str, width: usize) -> String {
    format!("{:>width$}", s, width = width)
}

/// Fixed-point hours figure, e.g. `2.50` with two decimals.
pub fn hours_str(value: f64, decimals: u8) -> String {
    format!("{:.prec$}", value, prec = decimals as usize)
}

/// Compact assignee list: full names up to two people, then a counter.
///
/// `[] → "-"`, `[A] → "A"`, `[A, B] → "A, B"`, `[A, B, C] → "A, B +1 more"`.
pub fn assignees_label(names: &[String]) -> String {
    match names.len() {
        0 => "-".to_string(),
        1 => names[0].clone(),
        2 => names.join(", "),
        n => format!("{}, {} +{} more", names[0], names[1], n - 2),
    }
}

/// ANSI color for a task status in list output.
pub fn status_color(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::NotStarted => colors::YELLOW,
        TaskStatus::InProgress => colors::CYAN,
        TaskStatus::Completed => colors::GREEN,
    }
}
