use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Uppercased short weekday name for grid headers, e.g. `MON`.
pub fn day_name(date: NaiveDate) -> String {
    date.format("%a").to_string().to_uppercase()
}

/// Short day label for grid headers, e.g. `15 Dec`.
pub fn day_label(date: NaiveDate) -> String {
    date.format("%d %b").to_string()
}

/// Full date label used in messages and summaries, e.g. `Dec 15, 2025`.
pub fn long_label(date: NaiveDate) -> String {
    date.format("%b %d, %Y").to_string()
}
