use crate::models::{ALL_STATUSES, BillingType, TaskEntry, TaskStatus};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Summary figures for a filtered set of entries.
///
/// `by_status` is zero-filled over every known status in declaration
/// order, so rendering code never has to special-case missing buckets.
/// `per_day` is sorted by date.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeReport {
    pub entries: usize,
    pub total_hours: f64,
    pub worked_today: f64,
    pub billable_hours: f64,
    pub non_billable_hours: f64,
    pub open_tasks: usize,
    pub by_status: Vec<(TaskStatus, usize)>,
    pub per_day: Vec<DayLine>,
}

/// Per-date roll-up used by the daily breakdown table.
#[derive(Debug, Clone, PartialEq)]
pub struct DayLine {
    pub date: NaiveDate,
    pub entries: usize,
    pub hours: f64,
    pub billable: f64,
    pub non_billable: f64,
}

pub fn build_report(entries: &[TaskEntry], today: NaiveDate) -> RangeReport {
    let mut total_hours = 0.0;
    let mut worked_today = 0.0;
    let mut billable_hours = 0.0;
    let mut non_billable_hours = 0.0;
    let mut open_tasks = 0;
    let mut days: BTreeMap<NaiveDate, DayLine> = BTreeMap::new();

    for entry in entries {
        total_hours += entry.worked_hours;
        if entry.date == today {
            worked_today += entry.worked_hours;
        }
        if entry.status.is_open() {
            open_tasks += 1;
        }

        let line = days.entry(entry.date).or_insert(DayLine {
            date: entry.date,
            entries: 0,
            hours: 0.0,
            billable: 0.0,
            non_billable: 0.0,
        });
        line.entries += 1;
        line.hours += entry.worked_hours;

        match entry.billing_type {
            BillingType::Billable => {
                billable_hours += entry.worked_hours;
                line.billable += entry.worked_hours;
            }
            BillingType::NonBillable => {
                non_billable_hours += entry.worked_hours;
                line.non_billable += entry.worked_hours;
            }
        }
    }

    let by_status = ALL_STATUSES
        .iter()
        .map(|status| {
            let count = entries.iter().filter(|e| e.status == *status).count();
            (*status, count)
        })
        .collect();

    RangeReport {
        entries: entries.len(),
        total_hours,
        worked_today,
        billable_hours,
        non_billable_hours,
        open_tasks,
        by_status,
        per_day: days.into_values().collect(),
    }
}
