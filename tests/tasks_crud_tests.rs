use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{split_cell_dataset, timey};

// ---------------------------
// tasks add
// ---------------------------

#[test]
fn test_tasks_add_records_an_entry() {
    timey()
        .args([
            "tasks",
            "add",
            "--name",
            "Fix login button",
            "--project",
            "1",
            "--date",
            "2025-12-18",
            "--hours",
            "1.5",
            "--assignees",
            "2,3",
        ])
        .assert()
        .success()
        // ids continue after the demo data
        .stdout(contains("Task 17 recorded: 'Fix login button' on 2025-12-18, 1.50 h."));
}

#[test]
fn test_tasks_add_with_status_and_billing() {
    timey()
        .args([
            "tasks",
            "add",
            "--name",
            "Sprint retro notes",
            "--project",
            "3",
            "--date",
            "2025-12-19",
            "--hours",
            "0.5",
            "--status",
            "in-progress",
            "--non-billable",
            "--note",
            "shared doc cleanup",
        ])
        .assert()
        .success()
        .stdout(contains("Task 17 recorded: 'Sprint retro notes' on 2025-12-19, 0.50 h."));
}

#[test]
fn test_tasks_add_rejects_negative_hours() {
    timey()
        .args([
            "tasks",
            "add",
            "--name",
            "Impossible work",
            "--project",
            "1",
            "--date",
            "2025-12-18",
            "--hours",
            "-3",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid worked hours: -3"));
}

#[test]
fn test_tasks_add_rejects_unknown_project() {
    timey()
        .args([
            "tasks",
            "add",
            "--name",
            "Orphan task",
            "--project",
            "99",
            "--date",
            "2025-12-18",
            "--hours",
            "1",
        ])
        .assert()
        .failure()
        .stderr(contains("No project with id 99"));
}

#[test]
fn test_tasks_add_rejects_unknown_assignee() {
    timey()
        .args([
            "tasks",
            "add",
            "--name",
            "Ghost assignment",
            "--project",
            "1",
            "--date",
            "2025-12-18",
            "--hours",
            "1",
            "--assignees",
            "42",
        ])
        .assert()
        .failure()
        .stderr(contains("No employee with id 42"));
}

#[test]
fn test_tasks_add_rejects_unknown_status() {
    timey()
        .args([
            "tasks",
            "add",
            "--name",
            "Strange state",
            "--project",
            "1",
            "--date",
            "2025-12-18",
            "--hours",
            "1",
            "--status",
            "bananas",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid status: bananas"));
}

#[test]
fn test_tasks_add_rejects_malformed_date() {
    timey()
        .args([
            "tasks",
            "add",
            "--name",
            "Timeless work",
            "--project",
            "1",
            "--date",
            "2025-99-01",
            "--hours",
            "1",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid date format: 2025-99-01"));
}

#[test]
fn test_tasks_add_does_not_persist_across_runs() {
    // the dataset is session-only; nothing is written back
    timey()
        .args([
            "tasks",
            "add",
            "--name",
            "Ephemeral work",
            "--project",
            "1",
            "--date",
            "2025-12-18",
            "--hours",
            "1",
        ])
        .assert()
        .success();

    timey()
        .args(["tasks"])
        .assert()
        .success()
        .stdout(contains("Ephemeral work").not())
        .stdout(contains("16 entries | 36.25 h"));
}

// ---------------------------
// tasks del
// ---------------------------

#[test]
fn test_tasks_del_with_yes_flag() {
    timey()
        .args(["tasks", "del", "5", "--yes"])
        .assert()
        .success()
        .stdout(contains("Task 5 deleted (1 entry)."));
}

#[test]
fn test_tasks_del_prompt_confirmed() {
    timey()
        .args(["tasks", "del", "5"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("Delete ALL entries of task 5? This action is irreversible."))
        .stdout(contains("Task 5 deleted (1 entry)."));
}

#[test]
fn test_tasks_del_prompt_cancelled() {
    timey()
        .args(["tasks", "del", "5"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled."));
}

#[test]
fn test_tasks_del_removes_every_entry_of_the_task() {
    // two entries back the same task in this dataset
    let data = split_cell_dataset("del_multi");

    timey()
        .args(["--data", &data, "tasks", "del", "1", "-y"])
        .assert()
        .success()
        .stdout(contains("Task 1 deleted (2 entries)."));
}

#[test]
fn test_tasks_del_unknown_task() {
    timey()
        .args(["tasks", "del", "999", "--yes"])
        .assert()
        .failure()
        .stderr(contains("No task with id 999"));
}
