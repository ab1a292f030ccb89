use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{Project, ProjectStatus};
use crate::session::Session;
use crate::ui::messages::info;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Projects { status, search } = cmd {
        let session = Session::open(cfg)?;

        let status = match status {
            Some(raw) => Some(
                ProjectStatus::parse(raw).ok_or_else(|| AppError::InvalidStatus(raw.clone()))?,
            ),
            None => None,
        };

        let projects: Vec<&Project> = session
            .store
            .projects()
            .iter()
            .filter(|p| status.is_none_or(|s| p.status == s))
            .filter(|p| search.as_deref().is_none_or(|term| matches_search(p, term)))
            .collect();

        if projects.is_empty() {
            info("No projects match the current filters.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::right("ID", 4),
            Column::left("NAME", 32),
            Column::left("CODE", 8),
            Column::left("CLIENT", 24),
            Column::left("BILLING", 16),
            Column::left("START", 10),
            Column::left("END", 10),
            Column::left("STATUS", 10),
        ]);

        let mut active = 0;
        for p in &projects {
            if p.status.is_active() {
                active += 1;
            }
            table.add_row(vec![
                p.id.to_string(),
                p.name.clone(),
                p.code.clone(),
                p.client_name.clone(),
                p.billing_label(),
                date_cell(p.start_date),
                date_cell(p.end_date),
                p.status.as_str().to_string(),
            ]);
        }

        print!("{}", table.render());
        println!("{}", table.separator(&cfg.separator_char));
        println!("{} projects | {} active", projects.len(), active);
    }
    Ok(())
}

fn matches_search(p: &Project, term: &str) -> bool {
    let needle = term.to_lowercase();
    p.name.to_lowercase().contains(&needle)
        || p.code.to_lowercase().contains(&needle)
        || p.client_name.to_lowercase().contains(&needle)
}

fn date_cell(d: Option<chrono::NaiveDate>) -> String {
    d.map(|d| d.to_string()).unwrap_or_else(|| "-".to_string())
}
