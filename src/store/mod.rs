//! In-memory session store over the seed dataset.
//!
//! One CLI invocation works on one store instance: it is loaded at startup,
//! mutated by the command (cell edits, task add/del) and dropped on exit.
//! Nothing is written back to the data file.

pub mod fixtures;

use crate::core::redistribute::{self, EditOutcome};
use crate::errors::{AppError, AppResult};
use crate::models::{Client, Employee, Project, TaskEntry};
use chrono::NaiveDate;
use fixtures::FixtureData;
use std::path::Path;

pub struct SessionStore {
    tasks: Vec<TaskEntry>,
    projects: Vec<Project>,
    clients: Vec<Client>,
    employees: Vec<Employee>,
}

impl SessionStore {
    /// Open the store from `path`, or from the embedded demo dataset when
    /// no path is given.
    pub fn open(path: Option<&Path>) -> AppResult<Self> {
        let data = match path {
            Some(p) => fixtures::load_from_path(p)?,
            None => fixtures::embedded()?,
        };
        Ok(Self::from_fixtures(data))
    }

    pub fn from_fixtures(data: FixtureData) -> Self {
        SessionStore {
            tasks: data.tasks,
            projects: data.projects,
            clients: data.clients,
            employees: data.employees,
        }
    }

    // ---------------------------
    // Queries
    // ---------------------------

    pub fn tasks(&self) -> &[TaskEntry] {
        &self.tasks
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn project(&self, id: u32) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn employee(&self, id: u32) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    pub fn has_task(&self, id: u32) -> bool {
        self.tasks.iter().any(|t| t.id == id)
    }

    /// Names for an assignee id list, skipping ids that match nobody.
    pub fn employee_names(&self, ids: &[u32]) -> Vec<String> {
        ids.iter()
            .filter_map(|id| self.employee(*id).map(|e| e.name.clone()))
            .collect()
    }

    // ---------------------------
    // Mutations (session only)
    // ---------------------------

    /// Next free task id for entries created in this session.
    pub fn next_task_id(&self) -> u32 {
        self.tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1
    }

    /// Append a new entry. Hours must be a non-negative finite number and
    /// the project must exist; the denormalized project name is filled in
    /// from it.
    pub fn add_task(&mut self, mut entry: TaskEntry) -> AppResult<u32> {
        if !entry.worked_hours.is_finite() || entry.worked_hours < 0.0 {
            return Err(AppError::InvalidHours(entry.worked_hours.to_string()));
        }

        let project = self
            .project(entry.project_id)
            .ok_or(AppError::UnknownProject(entry.project_id))?;
        entry.project_name = project.name.clone();

        for id in &entry.assignee_ids {
            if self.employee(*id).is_none() {
                return Err(AppError::UnknownEmployee(*id));
            }
        }

        let id = entry.id;
        self.tasks.push(entry);
        Ok(id)
    }

    /// Remove every entry logged under `task_id`. Returns how many entries
    /// went away.
    pub fn remove_task(&mut self, task_id: u32) -> AppResult<usize> {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != task_id);
        let removed = before - self.tasks.len();
        if removed == 0 {
            return Err(AppError::UnknownTask(task_id));
        }
        Ok(removed)
    }

    /// Apply a timesheet cell edit, redistributing the new total across the
    /// entries behind the cell. With `assignee` set, entries not assigned
    /// to that employee are out of reach for the edit.
    pub fn edit_cell(
        &mut self,
        task_id: u32,
        date: NaiveDate,
        new_total: f64,
        note: Option<&str>,
        assignee: Option<u32>,
    ) -> EditOutcome {
        redistribute::redistribute_hours(&mut self.tasks, task_id, date, new_total, note, assignee)
    }
}
