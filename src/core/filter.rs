use crate::core::week::WeekWindow;
use crate::errors::{AppError, AppResult};
use crate::models::TaskEntry;
use chrono::{Datelike, NaiveDate};

/// Filter criteria applied to task entries before aggregation or export.
///
/// All fields are optional and combine with AND. `range` bounds are
/// inclusive on both ends; `date` matches one exact day on top of any
/// range already set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskFilter {
    pub project: Option<u32>,
    pub employee: Option<u32>,
    pub date: Option<NaiveDate>,
    pub range: Option<(NaiveDate, NaiveDate)>,
}

impl TaskFilter {
    pub fn matches(&self, entry: &TaskEntry) -> bool {
        if let Some((start, end)) = self.range
            && (entry.date < start || entry.date > end)
        {
            return false;
        }
        if let Some(project_id) = self.project
            && entry.project_id != project_id
        {
            return false;
        }
        if let Some(employee_id) = self.employee
            && !entry.is_assigned_to(employee_id)
        {
            return false;
        }
        if let Some(date) = self.date
            && entry.date != date
        {
            return false;
        }
        true
    }
}

pub fn filter_entries(entries: &[TaskEntry], filter: &TaskFilter) -> Vec<TaskEntry> {
    entries
        .iter()
        .filter(|e| filter.matches(e))
        .cloned()
        .collect()
}

/// Case-insensitive substring search over the fields the list screens show.
pub fn entry_matches_search(entry: &TaskEntry, term: &str) -> bool {
    let needle = term.to_lowercase();
    entry.name.to_lowercase().contains(&needle)
        || entry.project_name.to_lowercase().contains(&needle)
        || entry
            .description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(&needle))
}

/// Resolve a --period argument into inclusive date bounds.
///
/// Supports:
/// - today
/// - this_week (Monday..Sunday around today)
/// - this_month
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - any two of the date forms joined by ':' (start:end)
pub fn resolve_period(raw: &str, today: NaiveDate) -> AppResult<(NaiveDate, NaiveDate)> {
    let raw = raw.trim();
    match raw {
        "today" => Ok((today, today)),
        "this_week" => {
            let week = WeekWindow::containing(today);
            Ok((week.start, week.end))
        }
        "this_month" => month_bounds(today.year(), today.month())
            .ok_or_else(|| AppError::InvalidPeriod(raw.to_string())),
        other => parse_date_period(other),
    }
}

fn parse_date_period(raw: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    if let Some((start_raw, end_raw)) = raw.split_once(':') {
        let (start, _) = parse_single_period(start_raw.trim())?;
        let (_, end) = parse_single_period(end_raw.trim())?;
        return Ok((start, end));
    }
    parse_single_period(raw)
}

fn parse_single_period(raw: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let invalid = || AppError::InvalidPeriod(raw.to_string());

    match raw.len() {
        // YYYY
        4 => {
            let year: i32 = raw.parse().map_err(|_| invalid())?;
            let start = NaiveDate::from_ymd_opt(year, 1, 1).ok_or_else(invalid)?;
            let end = NaiveDate::from_ymd_opt(year, 12, 31).ok_or_else(invalid)?;
            Ok((start, end))
        }
        // YYYY-MM
        7 => {
            let (year_raw, month_raw) = raw.split_once('-').ok_or_else(invalid)?;
            let year: i32 = year_raw.parse().map_err(|_| invalid())?;
            let month: u32 = month_raw.parse().map_err(|_| invalid())?;
            month_bounds(year, month).ok_or_else(invalid)
        }
        // YYYY-MM-DD
        10 => {
            let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| invalid())?;
            Ok((date, date))
        }
        _ => Err(invalid()),
    }
}

fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let start = NaiveDate::from_ymd_opt(year, month, 1)?;
    let end = NaiveDate::from_ymd_opt(year, month, month_last_day(year, month)?)?;
    Some((start, end))
}

fn month_last_day(year: i32, month: u32) -> Option<u32> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 => {
            let leap = (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0);
            Some(if leap { 29 } else { 28 })
        }
        _ => None,
    }
}
