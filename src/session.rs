//! Per-invocation session: the loaded dataset plus an optional employee
//! scope. Replaces any notion of a logged-in user; the scope comes from
//! `--employee` or the configured default and is fixed for the whole run.

use crate::config::Config;
use crate::core::redistribute::EditOutcome;
use crate::errors::{AppError, AppResult};
use crate::models::TaskEntry;
use crate::store::SessionStore;
use crate::utils::path::expand_tilde;
use chrono::NaiveDate;

pub struct Session {
    pub store: SessionStore,
    pub employee: Option<u32>,
}

impl Session {
    /// Load the dataset the config points at and pin the employee scope.
    /// An employee id that matches nobody in the dataset is rejected here,
    /// before any command logic runs.
    pub fn open(cfg: &Config) -> AppResult<Self> {
        let data_path = cfg.data_file.as_deref().map(expand_tilde);
        let store = SessionStore::open(data_path.as_deref())?;

        if let Some(id) = cfg.default_employee
            && store.employee(id).is_none()
        {
            return Err(AppError::UnknownEmployee(id));
        }

        Ok(Session {
            store,
            employee: cfg.default_employee,
        })
    }

    /// Entries this session may see: everything without a scope, otherwise
    /// only the scoped employee's assignments.
    pub fn visible_tasks(&self) -> Vec<TaskEntry> {
        match self.employee {
            None => self.store.tasks().to_vec(),
            Some(id) => self
                .store
                .tasks()
                .iter()
                .filter(|t| t.is_assigned_to(id))
                .cloned()
                .collect(),
        }
    }

    /// Cell edit honoring the session scope: a scoped session can only
    /// redistribute hours over its own entries.
    pub fn edit_cell(
        &mut self,
        task_id: u32,
        date: NaiveDate,
        new_total: f64,
        note: Option<&str>,
    ) -> EditOutcome {
        self.store
            .edit_cell(task_id, date, new_total, note, self.employee)
    }
}
