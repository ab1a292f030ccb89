//! Seed data loading: embedded demo dataset or a user-supplied JSON file.

use crate::errors::{AppError, AppResult};
use crate::models::{Client, Employee, Project, TaskEntry};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Demo dataset compiled into the binary. Used whenever no --data file or
/// configured data_file is given.
const EMBEDDED: &str = include_str!("../../data/fixtures.json");

/// Top-level shape of a data file. Every section may be omitted, so a
/// custom file can carry only the parts it cares about.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FixtureData {
    #[serde(default)]
    pub tasks: Vec<TaskEntry>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub clients: Vec<Client>,
    #[serde(default)]
    pub employees: Vec<Employee>,
}

pub fn embedded() -> AppResult<FixtureData> {
    serde_json::from_str(EMBEDDED)
        .map_err(|e| AppError::Fixture(format!("embedded dataset: {}", e)))
}

pub fn load_from_path(path: &Path) -> AppResult<FixtureData> {
    let raw = std::fs::read_to_string(path)?;
    serde_json::from_str(&raw).map_err(|e| AppError::Fixture(format!("{}: {}", path.display(), e)))
}
