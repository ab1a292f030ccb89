// src/export/model.rs

use crate::models::TaskEntry;
use serde::Serialize;

/// Flat row shape shared by every export format. Column names follow the
/// serialized field names, so CSV/JSON/XLSX/PDF all agree.
#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct TaskExport {
    pub date: String,
    pub project: String,
    pub task: String,
    pub status: String,
    pub assignees: String,
    pub worked_hours: String,
    pub billing_type: String,
    pub description: String,
}

impl TaskExport {
    /// Build a row from an entry plus the resolved assignee names.
    pub fn from_entry(entry: &TaskEntry, assignees: &[String]) -> Self {
        TaskExport {
            date: entry.date_str(),
            project: entry.project_name.clone(),
            task: entry.name.clone(),
            status: entry.status.as_str().to_string(),
            assignees: assignees.join(", "),
            worked_hours: format!("{:.2}", entry.worked_hours),
            billing_type: entry.billing_type.as_str().to_string(),
            description: entry.description.clone().unwrap_or_default(),
        }
    }
}

/// Header row for CSV / JSON / XLSX / PDF
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "Date",
        "Project",
        "Task",
        "Status",
        "Assignees",
        "WorkedHours",
        "BillingType",
        "Description",
    ]
}

/// Convert one row into plain strings (for PDF and XLSX).
pub(crate) fn task_to_row(t: &TaskExport) -> Vec<String> {
    vec![
        t.date.clone(),
        t.project.clone(),
        t.task.clone(),
        t.status.clone(),
        t.assignees.clone(),
        t.worked_hours.clone(),
        t.billing_type.clone(),
        t.description.clone(),
    ]
}

pub(crate) fn tasks_to_table(rows: &[TaskExport]) -> Vec<Vec<String>> {
    rows.iter().map(task_to_row).collect()
}
