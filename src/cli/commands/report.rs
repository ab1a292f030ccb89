use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filter::{TaskFilter, filter_entries, resolve_period};
use crate::core::report::{RangeReport, build_report};
use crate::errors::AppResult;
use crate::session::Session;
use crate::ui::messages::{header, info};
use crate::utils::colors;
use crate::utils::formatting::{hours_str, pad_right, status_color};
use crate::utils::table::{Column, Table};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report { period, project } = cmd {
        let session = Session::open(cfg)?;
        let today = date::today();

        let range = match period {
            None => None,
            Some(p) if p.eq_ignore_ascii_case("all") => None,
            Some(p) => Some(resolve_period(p, today)?),
        };

        let filter = TaskFilter {
            project: *project,
            range,
            ..TaskFilter::default()
        };

        let entries = filter_entries(&session.visible_tasks(), &filter);
        let report = build_report(&entries, today);

        let label = period.as_deref().unwrap_or("all");
        header(format!("Report ({label})"));

        if report.entries == 0 {
            info("No task entries match the current filters.");
            return Ok(());
        }

        render_report(&report, &session, cfg);
    }
    Ok(())
}

fn render_report(report: &RangeReport, session: &Session, cfg: &Config) {
    let dec = cfg.hours_decimals;

    let active_projects = session
        .store
        .projects()
        .iter()
        .filter(|p| p.status.is_active())
        .count();

    println!("Entries:          {}", report.entries);
    println!("Total hours:      {}", hours_str(report.total_hours, dec));
    println!("Worked today:     {}", hours_str(report.worked_today, dec));
    println!(
        "Billable:         {} h | Non-billable: {} h",
        hours_str(report.billable_hours, dec),
        hours_str(report.non_billable_hours, dec)
    );
    println!("Open tasks:       {}", report.open_tasks);
    println!("Employees:        {}", session.store.employees().len());
    println!("Active projects:  {}", active_projects);

    println!();
    println!("By status:");
    for (status, count) in &report.by_status {
        println!(
            "  {}{}{} {}",
            status_color(*status),
            pad_right(status.as_str(), 12),
            colors::RESET,
            count
        );
    }

    println!();
    let mut table = Table::new(vec![
        Column::left("DATE", 10),
        Column::right("TASKS", 6),
        Column::right("HOURS", 8),
        Column::right("BILLABLE", 10),
        Column::right("NON-BILL.", 10),
    ]);

    for line in &report.per_day {
        table.add_row(vec![
            line.date.to_string(),
            line.entries.to_string(),
            hours_str(line.hours, dec),
            hours_str(line.billable, dec),
            hours_str(line.non_billable, dec),
        ]);
    }

    print!("{}", table.render());
}
