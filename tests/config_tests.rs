use predicates::str::contains;
use std::fs;

mod common;
use common::{home_dir, split_cell_dataset, timey_with_home};

/// Path of the config file inside a named scratch HOME.
fn conf_path(name: &str) -> std::path::PathBuf {
    home_dir(name).join(".timey").join("timey.conf")
}

/// Start the named HOME from scratch, without any config.
fn reset_home(name: &str) {
    fs::remove_dir_all(home_dir(name).join(".timey")).ok();
}

#[test]
fn test_init_creates_config_file() {
    let home = "init_default";
    reset_home(home);

    timey_with_home(home)
        .args(["init"])
        .assert()
        .success()
        .stdout(contains("Initializing timey"))
        .stdout(contains("built-in fixtures"))
        .stdout(contains(
            "Dataset loaded: 16 tasks, 10 projects, 3 clients, 5 employees",
        ))
        .stdout(contains("initialization completed"));

    let content = fs::read_to_string(conf_path(home)).expect("read config file");
    assert!(content.contains("hours_decimals: 2"));
    assert!(content.contains("highlight_today: true"));
}

#[test]
fn test_init_test_mode_writes_nothing() {
    let home = "init_test_mode";
    reset_home(home);

    timey_with_home(home)
        .args(["--test", "init"])
        .assert()
        .success()
        .stdout(contains("Dataset loaded: 16 tasks"));

    assert!(!conf_path(home).exists());
}

#[test]
fn test_init_with_custom_dataset() {
    let home = "init_custom";
    reset_home(home);
    let data = split_cell_dataset("init_custom");

    timey_with_home(home)
        .args(["--data", &data, "init"])
        .assert()
        .success()
        .stdout(contains("Dataset loaded: 2 tasks, 1 projects, 0 clients, 2 employees"));

    // the configured dataset sticks for later runs in this HOME
    let content = fs::read_to_string(conf_path(home)).expect("read config file");
    assert!(content.contains("data_file:"));

    timey_with_home(home)
        .args(["timesheet", "--week", "2025-12-15"])
        .assert()
        .success()
        .stdout(contains("Pairing session"))
        .stdout(contains("Week total: 8.00 h"));
}

#[test]
fn test_config_print_shows_current_values() {
    let home = "config_print";
    reset_home(home);

    timey_with_home(home)
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("Current configuration:"))
        .stdout(contains("hours_decimals: 2"))
        .stdout(contains("highlight_today: true"));
}

#[test]
fn test_config_check_without_file() {
    let home = "config_check_missing";
    reset_home(home);

    timey_with_home(home)
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("No configuration file found. Run 'timey init' first."));
}

#[test]
fn test_config_check_complete_file() {
    let home = "config_check_complete";
    reset_home(home);

    timey_with_home(home).args(["init"]).assert().success();

    timey_with_home(home)
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("Configuration file is complete."));
}

#[test]
fn test_config_check_reports_missing_keys() {
    let home = "config_check_partial";
    reset_home(home);

    let conf = conf_path(home);
    fs::create_dir_all(conf.parent().expect("config dir")).expect("create config dir");
    fs::write(&conf, "hours_decimals: 3\n").expect("write partial config");

    timey_with_home(home)
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains(
            "Missing keys: data_file, default_employee, separator_char, highlight_today",
        ))
        .stdout(contains("Run 'timey config --migrate' to add them with defaults."));
}

#[test]
fn test_config_migrate_renames_legacy_file_and_fills_keys() {
    let home = "config_migrate_legacy";
    reset_home(home);

    let dir = home_dir(home).join(".timey");
    fs::create_dir_all(&dir).expect("create config dir");
    fs::write(dir.join("config.yaml"), "hours_decimals: 3\n").expect("write legacy config");

    timey_with_home(home)
        .args(["config", "--migrate"])
        .assert()
        .success()
        .stdout(contains("Renamed legacy config.yaml to timey.conf."))
        .stdout(contains(
            "Added missing keys: data_file, default_employee, separator_char, highlight_today",
        ));

    assert!(!dir.join("config.yaml").exists());

    let content = fs::read_to_string(dir.join("timey.conf")).expect("read migrated config");
    // existing values survive, missing ones get defaults plus the usage note
    assert!(content.contains("hours_decimals: 3"));
    assert!(content.contains("separator_char:"));
    assert!(content.contains("# highlight_today options:"));
}

#[test]
fn test_config_migrate_when_already_complete() {
    let home = "config_migrate_complete";
    reset_home(home);

    timey_with_home(home).args(["init"]).assert().success();

    timey_with_home(home)
        .args(["config", "--migrate"])
        .assert()
        .success()
        .stdout(contains("Configuration already up to date."));
}

#[test]
fn test_config_hours_decimals_applies_to_output() {
    let home = "config_decimals";
    reset_home(home);

    let conf = conf_path(home);
    fs::create_dir_all(conf.parent().expect("config dir")).expect("create config dir");
    fs::write(&conf, "hours_decimals: 3\n").expect("write config");

    timey_with_home(home)
        .args(["timesheet", "--week", "2025-12-15"])
        .assert()
        .success()
        .stdout(contains("Week total: 36.250 h"));
}

#[test]
fn test_config_default_employee_scopes_commands() {
    let home = "config_employee";
    reset_home(home);

    let conf = conf_path(home);
    fs::create_dir_all(conf.parent().expect("config dir")).expect("create config dir");
    fs::write(&conf, "default_employee: 3\n").expect("write config");

    timey_with_home(home)
        .args(["report"])
        .assert()
        .success()
        .stdout(contains("Entries:          6"))
        .stdout(contains("Total hours:      16.50"));

    // the command line override beats the configured default
    timey_with_home(home)
        .args(["--employee", "2", "report"])
        .assert()
        .success()
        .stdout(contains("Entries:          5"))
        .stdout(contains("Total hours:      11.25"));
}

#[test]
fn test_config_separator_char_applies_to_tables() {
    let home = "config_separator";
    reset_home(home);

    let conf = conf_path(home);
    fs::create_dir_all(conf.parent().expect("config dir")).expect("create config dir");
    fs::write(&conf, "separator_char: '='\n").expect("write config");

    timey_with_home(home)
        .args(["tasks"])
        .assert()
        .success()
        .stdout(contains("====="));
}
