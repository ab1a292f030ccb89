use crate::cli::parser::{Commands, TasksAction};
use crate::config::Config;
use crate::core::filter::{TaskFilter, entry_matches_search, filter_entries};
use crate::errors::{AppError, AppResult};
use crate::models::{BillingType, TaskEntry, TaskStatus};
use crate::session::Session;
use crate::ui::messages::{info, success, warning};
use crate::utils::date;
use crate::utils::formatting::{assignees_label, hours_str};
use crate::utils::table::{Column, Table};

use std::io::{self, Write};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Tasks {
        project,
        status,
        search,
        action,
    } = cmd
    {
        let mut session = Session::open(cfg)?;

        match action {
            Some(TasksAction::Add {
                name,
                project,
                date,
                hours,
                assignees,
                status,
                non_billable,
                note,
            }) => add_task(
                &mut session,
                name,
                *project,
                date,
                *hours,
                assignees,
                status,
                *non_billable,
                note,
            ),
            Some(TasksAction::Del { id, yes }) => del_task(&mut session, *id, *yes),
            None => list_tasks(&session, cfg, project, status, search),
        }
    } else {
        Ok(())
    }
}

#[allow(clippy::too_many_arguments)]
fn add_task(
    session: &mut Session,
    name: &str,
    project: u32,
    date_raw: &str,
    hours: f64,
    assignees: &[u32],
    status: &Option<String>,
    non_billable: bool,
    note: &Option<String>,
) -> AppResult<()> {
    let worked_date =
        date::parse_date(date_raw).ok_or_else(|| AppError::InvalidDate(date_raw.to_string()))?;

    let status = match status {
        Some(raw) => {
            TaskStatus::parse(raw).ok_or_else(|| AppError::InvalidStatus(raw.clone()))?
        }
        None => TaskStatus::NotStarted,
    };

    let description = note
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from);

    let entry = TaskEntry {
        id: session.store.next_task_id(),
        project_id: project,
        // filled in by the store from the project record
        project_name: String::new(),
        name: name.to_string(),
        worked_hours: hours,
        assignee_ids: assignees.to_vec(),
        date: worked_date,
        status,
        description,
        billing_type: if non_billable {
            BillingType::NonBillable
        } else {
            BillingType::Billable
        },
    };

    let id = session.store.add_task(entry)?;
    success(format!(
        "Task {} recorded: '{}' on {}, {} h.",
        id,
        name,
        date_raw,
        hours_str(hours, 2)
    ));
    Ok(())
}

fn del_task(session: &mut Session, id: u32, yes: bool) -> AppResult<()> {
    let prompt = format!("Delete ALL entries of task {}? This action is irreversible.", id);

    if !yes && !ask_confirmation(&prompt) {
        info("Operation cancelled.");
        return Ok(());
    }

    let removed = session.store.remove_task(id)?;
    success(format!(
        "Task {} deleted ({} {}).",
        id,
        removed,
        if removed == 1 { "entry" } else { "entries" }
    ));
    Ok(())
}

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

fn list_tasks(
    session: &Session,
    cfg: &Config,
    project: &Option<u32>,
    status: &Option<String>,
    search: &Option<String>,
) -> AppResult<()> {
    let status = match status {
        Some(raw) => {
            Some(TaskStatus::parse(raw).ok_or_else(|| AppError::InvalidStatus(raw.clone()))?)
        }
        None => None,
    };

    let filter = TaskFilter {
        project: *project,
        ..TaskFilter::default()
    };

    let mut entries = filter_entries(&session.visible_tasks(), &filter);
    if let Some(wanted) = status {
        entries.retain(|e| e.status == wanted);
    }
    if let Some(term) = search {
        entries.retain(|e| entry_matches_search(e, term));
    }

    if entries.is_empty() {
        info("No task entries match the current filters.");
        return Ok(());
    }

    let mut table = Table::new(vec![
        Column::right("ID", 4),
        Column::left("DATE", 10),
        Column::left("TASK", 30),
        Column::left("PROJECT", 26),
        Column::left("STATUS", 11),
        Column::left("ASSIGNEES", 24),
        Column::right("HOURS", 6),
        Column::left("BILLING", 12),
    ]);

    let mut total = 0.0;
    for entry in &entries {
        total += entry.worked_hours;
        let names = session.store.employee_names(&entry.assignee_ids);
        table.add_row(vec![
            entry.id.to_string(),
            entry.date_str(),
            entry.name.clone(),
            entry.project_name.clone(),
            entry.status.as_str().to_string(),
            assignees_label(&names),
            hours_str(entry.worked_hours, cfg.hours_decimals),
            entry.billing_type.label().to_string(),
        ]);
    }

    print!("{}", table.render());
    println!("{}", table.separator(&cfg.separator_char));
    println!(
        "{} entries | {} h",
        entries.len(),
        hours_str(total, cfg.hours_decimals)
    );
    Ok(())
}
