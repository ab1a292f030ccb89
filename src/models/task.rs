use super::{billing::BillingType, status::TaskStatus};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One logged record of hours worked on a task on a specific date.
///
/// `id` is the identity of the *logical* task, not of the record: the same
/// task logged on different dates shares an `id`, and the same task+date
/// pair may appear more than once (e.g. separate logs by different
/// assignees). The weekly grid sums such records into one cell and cell
/// edits are redistributed across them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskEntry {
    pub id: u32,
    pub project_id: u32,
    pub project_name: String,
    pub name: String,
    pub worked_hours: f64,
    #[serde(default)]
    pub assignee_ids: Vec<u32>,
    /// Calendar date only; canonical form is ISO `YYYY-MM-DD`.
    pub date: NaiveDate,
    pub status: TaskStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub billing_type: BillingType,
}

impl TaskEntry {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn is_assigned_to(&self, employee_id: u32) -> bool {
        self.assignee_ids.contains(&employee_id)
    }
}
