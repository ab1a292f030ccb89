//! Configuration file migrations. All filesystem + YAML, run on demand via
//! `timey config --migrate`.

use serde_yaml::Value;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Keys a complete config file carries, in file order.
pub const EXPECTED_KEYS: [&str; 5] = [
    "data_file",
    "default_employee",
    "hours_decimals",
    "separator_char",
    "highlight_today",
];

/// Try to move a file from `from` to `to`.
/// - If source does not exist → no-op (Ok)
/// - If target already exists → no-op (Ok, we never overwrite)
/// - Otherwise, try `rename`, on failure → `copy` + remove original.
fn move_or_copy(from: &Path, to: &Path) -> io::Result<()> {
    if !from.exists() {
        return Ok(());
    }

    if to.exists() {
        return Ok(());
    }

    if fs::rename(from, to).is_err() {
        fs::copy(from, to)?;
        let _ = fs::remove_file(from);
    }

    Ok(())
}

/// Rename the 0.1.x config file name (`config.yaml`) to `timey.conf`.
/// Returns whether a rename actually happened.
pub fn run_fs_migration() -> io::Result<bool> {
    run_fs_migration_with(super::Config::config_dir())
}

/// Same as `run_fs_migration`, but using an injected config directory.
pub fn run_fs_migration_with(dir: PathBuf) -> io::Result<bool> {
    let old_conf = dir.join("config.yaml");
    let new_conf = dir.join("timey.conf");

    let had_legacy = old_conf.exists() && !new_conf.exists();
    move_or_copy(&old_conf, &new_conf)?;

    Ok(had_legacy)
}

/// Keys missing from a config file's content.
pub fn missing_keys(content: &str) -> Vec<&'static str> {
    let yaml: Value = match serde_yaml::from_str(content) {
        Ok(v) => v,
        Err(_) => return EXPECTED_KEYS.to_vec(),
    };

    let Some(map) = yaml.as_mapping() else {
        return EXPECTED_KEYS.to_vec();
    };

    EXPECTED_KEYS
        .iter()
        .filter(|k| !map.contains_key(Value::String(k.to_string())))
        .copied()
        .collect()
}

fn default_value_for(key: &str) -> Value {
    match key {
        "hours_decimals" => Value::Number(2.into()),
        "separator_char" => Value::String("-".to_string()),
        "highlight_today" => Value::Bool(true),
        _ => Value::Null, // data_file, default_employee
    }
}

/// Insert any missing keys into the config file with their defaults.
/// Returns the list of keys that were added. A missing file is left alone.
pub fn add_missing_keys() -> io::Result<Vec<String>> {
    let conf_file = super::Config::config_file();

    if !conf_file.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(&conf_file)?;

    let mut yaml: Value = serde_yaml::from_str(&content)
        .map_err(|e| io::Error::other(format!("Failed to parse {:?}: {}", conf_file, e)))?;

    let Some(map) = yaml.as_mapping_mut() else {
        return Err(io::Error::other(format!(
            "{:?} is not a YAML mapping",
            conf_file
        )));
    };

    let mut added = Vec::new();
    for key in EXPECTED_KEYS {
        let k = Value::String(key.to_string());
        if !map.contains_key(&k) {
            map.insert(k, default_value_for(key));
            added.push(key.to_string());
        }
    }

    if added.is_empty() {
        return Ok(added);
    }

    let serialized = serde_yaml::to_string(&yaml)
        .map_err(|e| io::Error::other(format!("Failed to serialize {:?}: {}", conf_file, e)))?;

    // Inject documentation comment right after the `highlight_today` line
    let mut new_content = String::new();
    for line in serialized.lines() {
        new_content.push_str(line);
        new_content.push('\n');

        if line.starts_with("highlight_today:") {
            new_content.push_str(
                "# highlight_today options:\n\
                 #   true  → colour today's column in the weekly grid\n\
                 #   false → plain rendering\n",
            );
        }
    }

    fs::write(&conf_file, new_content)?;

    Ok(added)
}
