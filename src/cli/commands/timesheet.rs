use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::aggregate::{SheetRow, WeekSheet, build_week_sheet};
use crate::core::filter::{TaskFilter, filter_entries};
use crate::core::redistribute::{EditOutcome, parse_hours};
use crate::core::week::WeekWindow;
use crate::errors::{AppError, AppResult};
use crate::session::Session;
use crate::ui::messages::{header, info, note, success, warning};
use crate::utils::colors;
use crate::utils::date;
use crate::utils::formatting::{assignees_label, bold, hours_str, pad_left, pad_right, status_color};

const NAME_W: usize = 26;
const CELL_W: usize = 7;
const TOTAL_W: usize = 8;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Timesheet {
        week,
        offset,
        project,
        date: exact_date,
        edit,
        task,
        cell_date,
        hours,
        note,
    } = cmd
    {
        let mut session = Session::open(cfg)?;

        let anchor = match week {
            Some(raw) => {
                date::parse_date(raw).ok_or_else(|| AppError::InvalidDate(raw.clone()))?
            }
            None => date::today(),
        };
        let window = WeekWindow::containing(anchor).shifted(offset.unwrap_or(0));

        let exact = match exact_date {
            Some(raw) => {
                Some(date::parse_date(raw).ok_or_else(|| AppError::InvalidDate(raw.clone()))?)
            }
            None => None,
        };

        if *edit {
            apply_edit(&mut session, cfg, task, cell_date, hours, note)?;
        }

        let filter = TaskFilter {
            project: *project,
            date: exact,
            ..TaskFilter::default()
        };

        let entries = filter_entries(&session.visible_tasks(), &filter);
        let sheet = build_week_sheet(&window, &entries);

        render_sheet(&sheet, &session, cfg);
    }
    Ok(())
}

/// Apply one cell edit before the grid is rendered. The new total for the
/// cell is pushed down to every entry behind it.
fn apply_edit(
    session: &mut Session,
    cfg: &Config,
    task: &Option<u32>,
    cell_date: &Option<String>,
    hours: &Option<String>,
    note_text: &Option<String>,
) -> AppResult<()> {
    // clap's `requires` guarantees all three are present in edit mode
    let (Some(task_id), Some(date_raw), Some(hours_raw)) = (task, cell_date, hours) else {
        return Ok(());
    };

    let cell_day =
        date::parse_date(date_raw).ok_or_else(|| AppError::InvalidDate(date_raw.clone()))?;
    let new_total = parse_hours(hours_raw);

    match session.edit_cell(*task_id, cell_day, new_total, note_text.as_deref()) {
        EditOutcome::NoEntries => {
            warning(format!(
                "No recorded hours for task {} on {}; nothing to edit.",
                task_id, date_raw
            ));
        }
        EditOutcome::Applied {
            entries,
            previous_total,
            new_total,
        } => {
            success(format!(
                "Cell updated: task {} on {}, {} -> {} h over {} {}.",
                task_id,
                date_raw,
                hours_str(previous_total, cfg.hours_decimals),
                hours_str(new_total, cfg.hours_decimals),
                entries,
                if entries == 1 { "entry" } else { "entries" },
            ));
        }
    }

    Ok(())
}

fn render_sheet(sheet: &WeekSheet, session: &Session, cfg: &Config) {
    header(format!("Week of {}", sheet.window.label()));

    if let Some(id) = session.employee
        && let Some(employee) = session.store.employee(id)
    {
        note(format!("Employee view: {} ({})", employee.name, employee.code));
    }

    if sheet.is_empty() {
        info("No tasks found for this week with current filters.");
        return;
    }

    let today_col = sheet.window.day_index(date::today());
    let highlight = |col: usize, cell: &str| -> String {
        if cfg.highlight_today && today_col == Some(col) {
            colors::highlight_today(cell)
        } else {
            colors::colorize_hours(cell)
        }
    };

    // Two header lines: weekday names over day-of-month labels.
    let mut names_line = pad_right("TASK", NAME_W);
    let mut dates_line = pad_right("", NAME_W);
    for day in &sheet.window.days {
        names_line.push(' ');
        names_line.push_str(&pad_left(&date::day_name(*day), CELL_W));
        dates_line.push(' ');
        dates_line.push_str(&pad_left(&date::day_label(*day), CELL_W));
    }
    names_line.push(' ');
    names_line.push_str(&pad_left("TOTAL", TOTAL_W));

    println!("{}", bold(&names_line));
    println!("{}{}{}", colors::GREY, dates_line, colors::RESET);
    println!("{}", separator(cfg));

    for row in &sheet.rows {
        println!("{}", grid_line(row, cfg, &highlight));
        println!("{}", detail_line(row, session));
    }

    println!("{}", separator(cfg));
    println!("{}", totals_line(sheet, cfg));
    println!();
    println!(
        "{}",
        bold(&format!(
            "Week total: {} h",
            hours_str(sheet.grand_total, cfg.hours_decimals)
        ))
    );
}

fn grid_line<F: Fn(usize, &str) -> String>(row: &SheetRow, cfg: &Config, highlight: &F) -> String {
    let mut line = pad_right(&clip(&row.name, NAME_W), NAME_W);

    for (col, value) in row.cells.iter().enumerate() {
        let cell = pad_left(&hours_str(*value, cfg.hours_decimals), CELL_W);
        line.push(' ');
        line.push_str(&highlight(col, &cell));
    }

    line.push(' ');
    line.push_str(&bold(&pad_left(
        &hours_str(row.total(), cfg.hours_decimals),
        TOTAL_W,
    )));
    line
}

/// Secondary line under each task row: project, status, assignees, billing.
fn detail_line(row: &SheetRow, session: &Session) -> String {
    let names = session.store.employee_names(&row.assignee_ids);
    format!(
        "  #{} {} | {}{}{} | {} | {}",
        row.task_id,
        row.project_name,
        status_color(row.status),
        row.status.as_str(),
        colors::RESET,
        assignees_label(&names),
        row.billing_type.label(),
    )
}

fn totals_line(sheet: &WeekSheet, cfg: &Config) -> String {
    let mut line = pad_right("TOTAL", NAME_W);

    for value in &sheet.day_totals {
        line.push(' ');
        line.push_str(&pad_left(&hours_str(*value, cfg.hours_decimals), CELL_W));
    }

    line.push(' ');
    line.push_str(&pad_left(
        &hours_str(sheet.grand_total, cfg.hours_decimals),
        TOTAL_W,
    ));
    bold(&line)
}

fn separator(cfg: &Config) -> String {
    let width = NAME_W + 7 * (CELL_W + 1) + TOTAL_W + 1;
    cfg.separator_char.repeat(width)
}

fn clip(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        return s.to_string();
    }
    let cut: String = s.chars().take(width - 1).collect();
    format!("{cut}…")
}
