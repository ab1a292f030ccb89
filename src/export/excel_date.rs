// src/export/excel_date.rs

use chrono::NaiveDate;

/// Interpret a cell string as a calendar date, returning the Excel serial
/// plus the number format to apply. Entry dates are day-granular, so only
/// the `YYYY-MM-DD` form is recognized.
pub(crate) fn parse_to_excel_date(s: &str) -> Option<(&'static str, f64)> {
    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()?;
    Some(("yyyy-mm-dd", date_to_excel_serial(date)))
}

fn date_to_excel_serial(date: NaiveDate) -> f64 {
    // Excel's day zero, accounting for the fictional 1900-02-29.
    let excel_epoch = NaiveDate::from_ymd_opt(1899, 12, 30);
    match excel_epoch {
        Some(epoch) => (date - epoch).num_days() as f64,
        None => 0.0,
    }
}
