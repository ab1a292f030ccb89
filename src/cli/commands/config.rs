use crate::config::{Config, migrate};
use crate::errors::{AppError, AppResult};

use crate::cli::parser::Commands;
use crate::ui::messages::{info, success, warning};
use std::fs;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate: run_migrations,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration:\n");
            let rendered =
                serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))?;
            println!("{}", rendered);
        }

        // ---- CHECK CONFIG ----
        if *check {
            if !path.exists() {
                warning("No configuration file found. Run 'timey init' first.");
                return Ok(());
            }

            let content = fs::read_to_string(&path)?;
            let missing = migrate::missing_keys(&content);

            if missing.is_empty() {
                success("Configuration file is complete.");
            } else {
                warning(format!("Missing keys: {}", missing.join(", ")));
                info("Run 'timey config --migrate' to add them with defaults.");
            }
        }

        // ---- MIGRATE CONFIG ----
        if *run_migrations {
            let renamed = migrate::run_fs_migration()?;
            if renamed {
                info("Renamed legacy config.yaml to timey.conf.");
            }

            let added = migrate::add_missing_keys()?;
            if added.is_empty() {
                info("Configuration already up to date.");
            } else {
                success(format!("Added missing keys: {}", added.join(", ")));
            }
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            // User-requested editor (e.g. --editor vim)
            let requested_editor = editor.clone();

            // Platform default when nothing is requested
            let default_editor = std::env::var("EDITOR")
                .or_else(|_| std::env::var("VISUAL"))
                .unwrap_or_else(|_| {
                    if cfg!(target_os = "windows") {
                        "notepad".to_string()
                    } else {
                        "nano".to_string()
                    }
                });

            let editor_to_use = requested_editor.unwrap_or_else(|| default_editor.clone());

            let status = Command::new(&editor_to_use).arg(&path).status();

            match status {
                Ok(s) if s.success() => {
                    println!(
                        "✅ Configuration file edited successfully using '{}'",
                        editor_to_use
                    );
                }
                Ok(_) | Err(_) => {
                    eprintln!(
                        "⚠️  Editor '{}' not available, falling back to '{}'",
                        editor_to_use, default_editor
                    );

                    let fallback_status = Command::new(&default_editor).arg(&path).status();
                    match fallback_status {
                        Ok(s) if s.success() => {
                            println!(
                                "✅ Configuration file edited successfully using fallback '{}'",
                                default_editor
                            );
                        }
                        Ok(_) | Err(_) => {
                            eprintln!(
                                "❌ Failed to edit configuration file using fallback '{}'",
                                default_editor
                            );
                        }
                    }
                }
            }
        }
    }

    Ok(())
}
