#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary command with config isolated under a scratch HOME, so a real
/// ~/.timey/timey.conf never leaks into test output.
pub fn timey() -> Command {
    timey_with_home("shared")
}

/// Same, but with a dedicated scratch HOME for tests that write config.
pub fn timey_with_home(name: &str) -> Command {
    let home = home_dir(name);
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("timey");
    cmd.env("HOME", &home);
    cmd.env("APPDATA", &home);
    cmd
}

/// Scratch HOME path for a named test.
pub fn home_dir(name: &str) -> PathBuf {
    let mut path = env::temp_dir();
    path.push(format!("timey_home_{}", name));
    path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a dataset to a temp JSON file and return its path.
pub fn write_dataset(name: &str, json: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_timey_data.json", name));
    fs::write(&path, json).expect("write test dataset");
    path.to_string_lossy().to_string()
}

/// Two entries backing the same task and date (split between two people),
/// so cell edits have something to redistribute over.
pub fn split_cell_dataset(name: &str) -> String {
    write_dataset(
        name,
        r#"{
  "projects": [
    { "id": 1, "name": "Internal", "code": "PRJ-001", "clientId": 1,
      "clientName": "Self", "status": "Active", "teamMemberIds": [2, 3] }
  ],
  "employees": [
    { "id": 2, "name": "Ann Probe", "email": "ann@example.com", "code": "001",
      "department": "Engineering", "location": "Remote", "status": "Active" },
    { "id": 3, "name": "Bo Quist", "email": "bo@example.com", "code": "002",
      "department": "Engineering", "location": "Remote", "status": "Active" }
  ],
  "tasks": [
    { "id": 1, "projectId": 1, "projectName": "Internal", "name": "Pairing session",
      "workedHours": 2.0, "assigneeIds": [2], "date": "2025-12-15",
      "status": "In Progress", "billingType": "billable" },
    { "id": 1, "projectId": 1, "projectName": "Internal", "name": "Pairing session",
      "workedHours": 6.0, "assigneeIds": [3], "date": "2025-12-15",
      "status": "In Progress", "billingType": "billable" }
  ]
}"#,
    )
}
