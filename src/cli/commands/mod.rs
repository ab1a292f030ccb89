pub mod clients;
pub mod config;
pub mod employees;
pub mod export;
pub mod init;
pub mod projects;
pub mod report;
pub mod tasks;
pub mod timesheet;
