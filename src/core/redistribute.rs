use crate::models::TaskEntry;
use chrono::NaiveDate;

/// Result of applying a cell edit to the backing entries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditOutcome {
    /// Nothing logged for that task and date; store left untouched.
    NoEntries,
    Applied {
        entries: usize,
        previous_total: f64,
        new_total: f64,
    },
}

/// Parse user-typed hours for a cell edit.
///
/// Unparseable text, negatives, NaN and infinities all coerce to 0.0; an
/// edit can therefore never inject a negative or non-finite value into the
/// sheet.
pub fn parse_hours(raw: &str) -> f64 {
    let value: f64 = match raw.trim().parse() {
        Ok(v) => v,
        Err(_) => return 0.0,
    };
    if !value.is_finite() || value < 0.0 {
        return 0.0;
    }
    value
}

/// Spread an edited cell total back over the entries behind the cell.
///
/// A cell shows the sum of every entry logged for (`task_id`, `date`), so
/// writing a new total has to be pushed down to them:
/// - one entry: it takes `new_total` directly
/// - several entries, previous total > 0: each is scaled by
///   `new_total / previous_total`, keeping their proportions
/// - several entries, previous total == 0: the new total is split evenly
///
/// When `note` is given, the trimmed text replaces the description of all
/// matched entries; an all-whitespace note clears it. Without a note the
/// descriptions stay as they were.
///
/// With `assignee` set, only entries assigned to that employee count as
/// backing entries. Others keep their hours even on the same task and date.
pub fn redistribute_hours(
    entries: &mut [TaskEntry],
    task_id: u32,
    date: NaiveDate,
    new_total: f64,
    note: Option<&str>,
    assignee: Option<u32>,
) -> EditOutcome {
    let matched: Vec<usize> = entries
        .iter()
        .enumerate()
        .filter(|(_, e)| {
            e.id == task_id
                && e.date == date
                && assignee.is_none_or(|a| e.is_assigned_to(a))
        })
        .map(|(i, _)| i)
        .collect();

    if matched.is_empty() {
        return EditOutcome::NoEntries;
    }

    let previous_total: f64 = matched.iter().map(|&i| entries[i].worked_hours).sum();
    let count = matched.len();
    let factor = new_total / previous_total;

    let description = note.map(|n| {
        let trimmed = n.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    });

    for &i in &matched {
        let entry = &mut entries[i];

        entry.worked_hours = if count == 1 {
            new_total
        } else if previous_total > 0.0 {
            entry.worked_hours * factor
        } else {
            new_total / count as f64
        };

        if let Some(desc) = &description {
            entry.description = desc.clone();
        }
    }

    EditOutcome::Applied {
        entries: count,
        previous_total,
        new_total,
    }
}
