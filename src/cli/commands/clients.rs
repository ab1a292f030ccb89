use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::Client;
use crate::session::Session;
use crate::ui::messages::info;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clients { search } = cmd {
        let session = Session::open(cfg)?;

        let clients: Vec<&Client> = session
            .store
            .clients()
            .iter()
            .filter(|c| search.as_deref().is_none_or(|term| matches_search(c, term)))
            .collect();

        if clients.is_empty() {
            info("No clients match the current filters.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::right("ID", 4),
            Column::left("NAME", 28),
            Column::left("NICKNAME", 12),
            Column::left("EMAIL", 30),
            Column::left("COUNTRY", 16),
            Column::left("STATUS", 8),
        ]);

        for c in &clients {
            table.add_row(vec![
                c.id.to_string(),
                c.name.clone(),
                c.nickname.clone().unwrap_or_else(|| "-".to_string()),
                c.email.clone(),
                c.country.clone(),
                c.status.as_str().to_string(),
            ]);
        }

        print!("{}", table.render());
        println!("{}", table.separator(&cfg.separator_char));
        println!("{} clients", clients.len());
    }
    Ok(())
}

fn matches_search(c: &Client, term: &str) -> bool {
    let needle = term.to_lowercase();
    c.name.to_lowercase().contains(&needle)
        || c.email.to_lowercase().contains(&needle)
        || c.country.to_lowercase().contains(&needle)
        || c.nickname
            .as_deref()
            .is_some_and(|n| n.to_lowercase().contains(&needle))
}
