use predicates::str::contains;
use std::fs;
use std::path::Path;

mod common;
use common::{temp_out, timey};

#[test]
fn test_export_csv_all_entries() {
    let out = temp_out("export_csv_all", "csv");

    timey()
        .args(["export", "--format", "csv", "--file", &out])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with(
        "Date,Project,Task,Status,Assignees,WorkedHours,BillingType,Description"
    ));
    assert!(content.contains(
        "2025-12-15,Website Redesign,Create homepage layout,Completed,Employee One,2.00,billable"
    ));
    // header plus one line per entry
    assert_eq!(content.lines().count(), 17);
}

#[test]
fn test_export_csv_is_the_default_format() {
    let out = temp_out("export_default_format", "csv");

    timey()
        .args(["export", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Exporting to CSV"));

    assert!(Path::new(&out).exists());
}

#[test]
fn test_export_json_structure() {
    let out = temp_out("export_json_all", "json");

    timey()
        .args(["export", "--format", "json", "--file", &out])
        .assert()
        .success()
        .stdout(contains("JSON export completed"));

    let content = fs::read_to_string(&out).expect("read exported json");
    let value: serde_json::Value = serde_json::from_str(&content).expect("parse exported json");
    let rows = value.as_array().expect("json array");

    assert_eq!(rows.len(), 16);
    assert_eq!(rows[0]["Date"], "2025-12-15");
    assert_eq!(rows[0]["Task"], "Create homepage layout");
    assert_eq!(rows[0]["WorkedHours"], "2.00");
    assert_eq!(rows[0]["BillingType"], "billable");
    assert_eq!(rows[0]["Assignees"], "Employee One");
}

#[test]
fn test_export_xlsx_writes_workbook() {
    let out = temp_out("export_xlsx_all", "xlsx");

    timey()
        .args(["export", "--format", "xlsx", "--file", &out])
        .assert()
        .success()
        .stdout(contains("XLSX export completed"));

    let bytes = fs::read(&out).expect("read exported xlsx");
    // xlsx is a zip container
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn test_export_pdf_writes_document() {
    let out = temp_out("export_pdf_all", "pdf");

    timey()
        .args(["export", "--format", "pdf", "--file", &out])
        .assert()
        .success()
        .stdout(contains("PDF export completed"));

    let bytes = fs::read(&out).expect("read exported pdf");
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_export_project_filter() {
    let out = temp_out("export_csv_project", "csv");

    timey()
        .args(["export", "--file", &out, "--project", "2"])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("Set up authentication flow"));
    assert!(!content.contains("Create homepage layout"));
    assert_eq!(content.lines().count(), 5);
}

#[test]
fn test_export_period_filter() {
    let out = temp_out("export_csv_period", "csv");

    timey()
        .args(["export", "--file", &out, "--period", "2025-12-17"])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("Set up design system"));
    assert!(content.contains("API error handling"));
    assert_eq!(content.lines().count(), 3);
}

#[test]
fn test_export_employee_scope() {
    let out = temp_out("export_csv_employee", "csv");

    timey()
        .args(["--employee", "3", "export", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert_eq!(content.lines().count(), 7);
    assert!(content.contains("Employee Two"));
}

#[test]
fn test_export_requires_absolute_path() {
    timey()
        .args(["export", "--file", "relative.csv"])
        .assert()
        .failure()
        .stderr(contains("Output file path must be absolute: relative.csv"));
}

#[test]
fn test_export_empty_selection_writes_nothing() {
    let out = temp_out("export_csv_empty", "csv");

    timey()
        .args(["export", "--file", &out, "--period", "2024"])
        .assert()
        .success()
        .stdout(contains("No entries found for the selected filters."));

    assert!(!Path::new(&out).exists());
}

#[test]
fn test_export_rejects_invalid_period() {
    let out = temp_out("export_csv_bad_period", "csv");

    timey()
        .args(["export", "--file", &out, "--period", "banana"])
        .assert()
        .failure()
        .stderr(contains("Invalid period: banana"));
}

#[test]
fn test_export_refuses_overwrite_without_consent() {
    let out = temp_out("export_csv_no_overwrite", "csv");
    fs::write(&out, "sentinel").expect("seed existing file");

    timey()
        .args(["export", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stdout(contains("already exists"))
        .stderr(contains("Export cancelled"));

    let content = fs::read_to_string(&out).expect("read file");
    assert_eq!(content, "sentinel");
}

#[test]
fn test_export_overwrites_after_confirmation() {
    let out = temp_out("export_csv_confirm_overwrite", "csv");
    fs::write(&out, "sentinel").expect("seed existing file");

    timey()
        .args(["export", "--file", &out])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("Existing file will be overwritten."));

    let content = fs::read_to_string(&out).expect("read file");
    assert!(content.starts_with("Date,Project"));
}

#[test]
fn test_export_force_skips_the_prompt() {
    let out = temp_out("export_csv_force", "csv");
    fs::write(&out, "sentinel").expect("seed existing file");

    timey()
        .args(["export", "--file", &out, "--force"])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read file");
    assert!(content.starts_with("Date,Project"));

    // short flag does the same
    timey()
        .args(["export", "--file", &out, "-f"])
        .assert()
        .success();
}
