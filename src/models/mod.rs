pub mod billing;
pub mod client;
pub mod employee;
pub mod project;
pub mod status;
pub mod task;

pub use billing::BillingType;
pub use client::{Client, ClientStatus};
pub use employee::{Employee, EmployeeStatus};
pub use project::{BillingModel, Project, ProjectStatus};
pub use status::{ALL_STATUSES, TaskStatus};
pub use task::TaskEntry;
