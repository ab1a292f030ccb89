//! Unified application error type.
//! All modules (store, core, cli, export) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Fixture / session data
    // ---------------------------
    #[error("Fixture error: {0}")]
    Fixture(String),

    #[error("No task with id {0}")]
    UnknownTask(u32),

    #[error("No project with id {0}")]
    UnknownProject(u32),

    #[error("No employee with id {0}")]
    UnknownEmployee(u32),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid worked hours: {0}")]
    InvalidHours(String),

    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
