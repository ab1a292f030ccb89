use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::timey;

// ---------------------------
// Tasks
// ---------------------------

#[test]
fn test_tasks_list_all() {
    timey()
        .args(["tasks"])
        .assert()
        .success()
        .stdout(contains("Create homepage layout"))
        .stdout(contains("Website Redesign"))
        .stdout(contains("Employee One"))
        .stdout(contains("2025-12-15"))
        .stdout(contains("16 entries | 36.25 h"));
}

#[test]
fn test_tasks_list_filter_by_project() {
    timey()
        .args(["tasks", "--project", "2"])
        .assert()
        .success()
        .stdout(contains("Set up authentication flow"))
        .stdout(contains("Refactor state management"))
        .stdout(contains("Create homepage layout").not())
        .stdout(contains("4 entries | 9.50 h"));
}

#[test]
fn test_tasks_list_filter_by_status() {
    timey()
        .args(["tasks", "--status", "completed"])
        .assert()
        .success()
        .stdout(contains("Create homepage layout"))
        .stdout(contains("Employee list page"))
        .stdout(contains("Build dashboard screen").not())
        .stdout(contains("3 entries | 8.00 h"));
}

#[test]
fn test_tasks_list_search_by_name() {
    timey()
        .args(["tasks", "--search", "dashboard"])
        .assert()
        .success()
        .stdout(contains("Build dashboard screen"))
        .stdout(contains("Client dashboard widgets"))
        .stdout(contains("2 entries | 6.00 h"));
}

#[test]
fn test_tasks_list_search_matches_description() {
    // "Figma" only appears in a task description
    timey()
        .args(["tasks", "--search", "figma"])
        .assert()
        .success()
        .stdout(contains("Set up design system"))
        .stdout(contains("1 entries | 1.50 h"));
}

#[test]
fn test_tasks_list_employee_scope() {
    timey()
        .args(["--employee", "3", "tasks"])
        .assert()
        .success()
        .stdout(contains("Set up authentication flow"))
        .stdout(contains("Create homepage layout").not())
        .stdout(contains("6 entries | 16.50 h"));
}

#[test]
fn test_tasks_list_rejects_unknown_status() {
    timey()
        .args(["tasks", "--status", "bananas"])
        .assert()
        .failure()
        .stderr(contains("Invalid status: bananas"));
}

#[test]
fn test_tasks_list_no_matches() {
    timey()
        .args(["tasks", "--project", "99"])
        .assert()
        .success()
        .stdout(contains("No task entries match the current filters."));
}

// ---------------------------
// Projects
// ---------------------------

#[test]
fn test_projects_list_all() {
    timey()
        .args(["projects"])
        .assert()
        .success()
        .stdout(contains("Website Redesign"))
        .stdout(contains("PRJ-001"))
        .stdout(contains("Acme Corporation"))
        .stdout(contains("hourly @ 60"))
        .stdout(contains("fixed 18000"))
        .stdout(contains("2025-01-10"))
        .stdout(contains("On Hold"))
        .stdout(contains("10 projects | 5 active"));
}

#[test]
fn test_projects_list_filter_by_status() {
    timey()
        .args(["projects", "--status", "on-hold"])
        .assert()
        .success()
        .stdout(contains("Mobile App MVP"))
        .stdout(contains("HR Internal Tools"))
        .stdout(contains("Internal Design System"))
        .stdout(contains("Website Redesign").not())
        .stdout(contains("3 projects | 0 active"));
}

#[test]
fn test_projects_list_search_by_client() {
    timey()
        .args(["projects", "--search", "acme"])
        .assert()
        .success()
        .stdout(contains("Website Redesign"))
        .stdout(contains("Support & Maintenance"))
        .stdout(contains("2 projects | 2 active"));
}

#[test]
fn test_projects_list_rejects_unknown_status() {
    timey()
        .args(["projects", "--status", "bananas"])
        .assert()
        .failure()
        .stderr(contains("Invalid status: bananas"));
}

#[test]
fn test_projects_list_no_matches() {
    timey()
        .args(["projects", "--search", "zzz"])
        .assert()
        .success()
        .stdout(contains("No projects match the current filters."));
}

// ---------------------------
// Clients
// ---------------------------

#[test]
fn test_clients_list_all() {
    timey()
        .args(["clients"])
        .assert()
        .success()
        .stdout(contains("Acme Corporation"))
        .stdout(contains("contact@acme.com"))
        .stdout(contains("United States"))
        .stdout(contains("Inactive"))
        .stdout(contains("3 clients"));
}

#[test]
fn test_clients_list_search_by_country() {
    timey()
        .args(["clients", "--search", "sweden"])
        .assert()
        .success()
        .stdout(contains("Nordic Tech AB"))
        .stdout(contains("Acme Corporation").not())
        .stdout(contains("1 clients"));
}

#[test]
fn test_clients_list_no_matches() {
    timey()
        .args(["clients", "--search", "zzz"])
        .assert()
        .success()
        .stdout(contains("No clients match the current filters."));
}

// ---------------------------
// Employees
// ---------------------------

#[test]
fn test_employees_list_all() {
    timey()
        .args(["employees"])
        .assert()
        .success()
        .stdout(contains("Employee One"))
        .stdout(contains("emp1@timey.com"))
        .stdout(contains("Default Department"))
        .stdout(contains("5 employees"));
}

#[test]
fn test_employees_list_search_by_code() {
    timey()
        .args(["employees", "--search", "003"])
        .assert()
        .success()
        .stdout(contains("Employee Three"))
        .stdout(contains("Employee One").not())
        .stdout(contains("1 employees"));
}

#[test]
fn test_employees_list_no_matches() {
    timey()
        .args(["employees", "--search", "zzz"])
        .assert()
        .success()
        .stdout(contains("No employees match the current filters."));
}
