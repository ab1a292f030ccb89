use chrono::{Datelike, Days, NaiveDate};

/// A Monday-to-Sunday calendar week.
///
/// `days` always holds the seven consecutive dates from `start` (a Monday)
/// to `end` (the following Sunday), so grid code can index columns 0..7
/// without re-deriving dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub days: [NaiveDate; 7],
}

impl WeekWindow {
    /// Build the week containing `anchor`. Any weekday works as the anchor;
    /// the window always snaps back to that week's Monday.
    pub fn containing(anchor: NaiveDate) -> Self {
        let back = anchor.weekday().num_days_from_monday() as u64;
        let monday = anchor - Days::new(back);

        let mut days = [monday; 7];
        for (i, slot) in days.iter_mut().enumerate() {
            *slot = monday + Days::new(i as u64);
        }

        WeekWindow {
            start: days[0],
            end: days[6],
            days,
        }
    }

    /// The same window moved by whole weeks. Negative values go back in time.
    pub fn shifted(&self, weeks: i64) -> Self {
        let anchor = if weeks >= 0 {
            self.start + Days::new((weeks as u64) * 7)
        } else {
            self.start - Days::new((weeks.unsigned_abs()) * 7)
        };
        WeekWindow::containing(anchor)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Column index of `date` within the week, or `None` when out of range.
    pub fn day_index(&self, date: NaiveDate) -> Option<usize> {
        if self.contains(date) {
            Some((date - self.start).num_days() as usize)
        } else {
            None
        }
    }

    /// Range label used in headers, e.g. `Dec 15, 2025 - Dec 21, 2025`.
    pub fn label(&self) -> String {
        format!(
            "{} - {}",
            self.start.format("%b %d, %Y"),
            self.end.format("%b %d, %Y")
        )
    }
}
