use crate::core::week::WeekWindow;
use crate::models::{BillingType, TaskEntry, TaskStatus};
use std::collections::BTreeMap;

/// One grid row: a task's hours spread over the seven days of the week.
///
/// `cells[i]` is the summed hours for `window.days[i]`; a task logged twice
/// on the same date contributes the sum to that cell. Header fields
/// (name, status, assignees, billing) come from the latest backing entry.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetRow {
    pub task_id: u32,
    pub name: String,
    pub project_id: u32,
    pub project_name: String,
    pub status: TaskStatus,
    pub assignee_ids: Vec<u32>,
    pub billing_type: BillingType,
    pub cells: [f64; 7],
}

impl SheetRow {
    pub fn total(&self) -> f64 {
        self.cells.iter().sum()
    }
}

/// Aggregated weekly grid: rows per task, plus per-day and overall totals.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekSheet {
    pub window: WeekWindow,
    pub rows: Vec<SheetRow>,
    pub day_totals: [f64; 7],
    pub grand_total: f64,
}

impl WeekSheet {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Aggregate `entries` into the weekly grid for `window`.
///
/// Entries dated outside the window are ignored. Rows come out in ascending
/// task id order.
pub fn build_week_sheet(window: &WeekWindow, entries: &[TaskEntry]) -> WeekSheet {
    let mut by_task: BTreeMap<u32, SheetRow> = BTreeMap::new();
    let mut day_totals = [0.0f64; 7];

    for entry in entries {
        let Some(day) = window.day_index(entry.date) else {
            continue;
        };

        let row = by_task.entry(entry.id).or_insert_with(|| SheetRow {
            task_id: entry.id,
            name: entry.name.clone(),
            project_id: entry.project_id,
            project_name: entry.project_name.clone(),
            status: entry.status,
            assignee_ids: entry.assignee_ids.clone(),
            billing_type: entry.billing_type,
            cells: [0.0; 7],
        });

        // Later entries win the header fields, hours accumulate.
        row.name = entry.name.clone();
        row.project_id = entry.project_id;
        row.project_name = entry.project_name.clone();
        row.status = entry.status;
        row.assignee_ids = entry.assignee_ids.clone();
        row.billing_type = entry.billing_type;

        row.cells[day] += entry.worked_hours;
        day_totals[day] += entry.worked_hours;
    }

    let grand_total = day_totals.iter().sum();

    WeekSheet {
        window: *window,
        rows: by_task.into_values().collect(),
        day_totals,
        grand_total,
    }
}
