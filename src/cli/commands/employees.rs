use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::Employee;
use crate::session::Session;
use crate::ui::messages::info;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Employees { search } = cmd {
        let session = Session::open(cfg)?;

        let employees: Vec<&Employee> = session
            .store
            .employees()
            .iter()
            .filter(|e| search.as_deref().is_none_or(|term| matches_search(e, term)))
            .collect();

        if employees.is_empty() {
            info("No employees match the current filters.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::right("ID", 4),
            Column::left("CODE", 6),
            Column::left("NAME", 24),
            Column::left("EMAIL", 26),
            Column::left("DEPARTMENT", 20),
            Column::left("LOCATION", 18),
            Column::left("STATUS", 8),
        ]);

        for e in &employees {
            table.add_row(vec![
                e.id.to_string(),
                e.code.clone(),
                e.name.clone(),
                e.email.clone(),
                e.department.clone(),
                e.location.clone(),
                e.status.as_str().to_string(),
            ]);
        }

        print!("{}", table.render());
        println!("{}", table.separator(&cfg.separator_char));
        println!("{} employees", employees.len());
    }
    Ok(())
}

fn matches_search(e: &Employee, term: &str) -> bool {
    let needle = term.to_lowercase();
    e.name.to_lowercase().contains(&needle)
        || e.email.to_lowercase().contains(&needle)
        || e.code.to_lowercase().contains(&needle)
        || e.department.to_lowercase().contains(&needle)
        || e.location.to_lowercase().contains(&needle)
}
