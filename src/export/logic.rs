// src/export/logic.rs

use crate::core::filter::{TaskFilter, filter_entries, resolve_period};
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::model::TaskExport;
use crate::session::Session;
use crate::ui::messages::warning;
use crate::utils::date::today;
use crate::utils::path::expand_tilde;

use crate::export::json_csv::{export_csv, export_json};
use crate::export::pdf::export_pdf;
use crate::export::xlsx::export_xlsx;
use std::io;

/// High-level export flow shared by every format.
pub struct ExportLogic;

impl ExportLogic {
    /// Export timesheet entries.
    ///
    /// - `file`: absolute path of the output file
    /// - `period`: `None`, `"all"`, `"today"`, `"this_week"`, `"this_month"`,
    ///   or date expressions such as:
    ///   - `YYYY`
    ///   - `YYYY-MM`
    ///   - `YYYY-MM-DD`
    ///   - `YYYY-MM-DD:YYYY-MM-DD` (mixed granularity is accepted)
    pub fn export(
        session: &Session,
        format: ExportFormat,
        file: &str,
        period: &Option<String>,
        project: Option<u32>,
        force: bool,
    ) -> AppResult<()> {
        let path = expand_tilde(file);

        if !path.is_absolute() {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        ensure_writable(&path, force)?;

        let range = match period {
            None => None,
            Some(p) if p.eq_ignore_ascii_case("all") => None,
            Some(p) => Some(resolve_period(p, today())?),
        };

        let filter = TaskFilter {
            project,
            range,
            ..TaskFilter::default()
        };

        let rows: Vec<TaskExport> = filter_entries(&session.visible_tasks(), &filter)
            .iter()
            .map(|e| TaskExport::from_entry(e, &session.store.employee_names(&e.assignee_ids)))
            .collect();

        if rows.is_empty() {
            warning("No entries found for the selected filters.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => export_csv(&rows, &path)?,
            ExportFormat::Json => export_json(&rows, &path)?,
            ExportFormat::Xlsx => export_xlsx(&rows, &path)?,
            ExportFormat::Pdf => {
                let title = build_pdf_title(period);
                export_pdf(&rows, &path, &title)?
            }
        }

        Ok(())
    }
}

/// Document title derived from the selected period.
fn build_pdf_title(period: &Option<String>) -> String {
    let Some(p) = period else {
        return "Timesheet entries".to_string();
    };

    match p.to_ascii_lowercase().as_str() {
        "all" => "Timesheet entries".to_string(),
        "today" => "Timesheet entries for today".to_string(),
        "this_week" => "Timesheet entries for this week".to_string(),
        "this_month" => "Timesheet entries for this month".to_string(),
        _ => match p.split_once(':') {
            Some((from, to)) => format!("Timesheet entries from {from} to {to}"),
            None => format!("Timesheet entries for {p}"),
        },
    }
}
