use serde::{Deserialize, Serialize};

/// Workflow state of a task, as shown in the task list and report screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    #[serde(rename = "Not Started")]
    NotStarted,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Completed")]
    Completed,
}

/// Fixed display order used by report breakdowns (all three always shown).
pub const ALL_STATUSES: [TaskStatus; 3] = [
    TaskStatus::NotStarted,
    TaskStatus::InProgress,
    TaskStatus::Completed,
];

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::NotStarted => "Not Started",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Completed => "Completed",
        }
    }

    /// Parse loose CLI input ("in-progress", "In Progress", "completed", ...).
    pub fn parse(s: &str) -> Option<Self> {
        let norm = s.trim().to_lowercase().replace(['-', '_'], " ");
        match norm.as_str() {
            "not started" | "notstarted" | "new" => Some(TaskStatus::NotStarted),
            "in progress" | "inprogress" | "progress" => Some(TaskStatus::InProgress),
            "completed" | "complete" | "done" => Some(TaskStatus::Completed),
            _ => None,
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, TaskStatus::Completed)
    }
}
