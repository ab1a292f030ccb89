use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for Timey
/// CLI application to browse and edit weekly timesheets
#[derive(Parser)]
#[command(
    name = "timey",
    version = env!("CARGO_PKG_VERSION"),
    about = "A weekly timesheet CLI: aggregate worked hours per task and redistribute cell edits",
    long_about = None
)]
pub struct Cli {
    /// Override fixture data path (useful for tests or custom datasets)
    #[arg(global = true, long = "data")]
    pub data: Option<String>,

    /// Employee id whose view to show (omit for the full admin view)
    #[arg(global = true, long = "employee")]
    pub employee: Option<u32>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration directory and default config file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Run configuration file migrations if needed")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Show the weekly timesheet grid, optionally editing one cell first
    Timesheet {
        /// Anchor date (YYYY-MM-DD) whose Monday-to-Sunday week is shown
        #[arg(long = "week", value_name = "DATE")]
        week: Option<String>,

        /// Shift the shown week, e.g. -1 for last week
        #[arg(long = "offset", value_name = "WEEKS", allow_negative_numbers = true)]
        offset: Option<i64>,

        /// Only show tasks of this project
        #[arg(long = "project", value_name = "ID")]
        project: Option<u32>,

        /// Only show entries worked on this exact date
        #[arg(long = "date", value_name = "DATE")]
        date: Option<String>,

        /// Edit one cell before rendering (requires --task, --cell-date, --hours)
        #[arg(
            long = "edit",
            requires = "task",
            requires = "cell_date",
            requires = "hours"
        )]
        edit: bool,

        /// Task id owning the cell to edit
        #[arg(long = "task", value_name = "ID")]
        task: Option<u32>,

        /// Date of the cell to edit (YYYY-MM-DD)
        #[arg(long = "cell-date", value_name = "DATE")]
        cell_date: Option<String>,

        /// New total hours for the cell (invalid input counts as 0)
        #[arg(long = "hours", value_name = "HOURS", allow_hyphen_values = true)]
        hours: Option<String>,

        /// Replace the description on every entry behind the cell
        #[arg(long = "note", value_name = "TEXT")]
        note: Option<String>,
    },

    /// List task entries, or add/delete them
    Tasks {
        #[arg(long = "project", value_name = "ID", help = "Filter by project id")]
        project: Option<u32>,

        #[arg(
            long = "status",
            value_name = "STATUS",
            help = "Filter by status (Not Started, In Progress, Completed)"
        )]
        status: Option<String>,

        #[arg(
            long = "search",
            value_name = "TERM",
            help = "Case-insensitive match on task name, project or description"
        )]
        search: Option<String>,

        #[command(subcommand)]
        action: Option<TasksAction>,
    },

    /// List projects
    Projects {
        #[arg(
            long = "status",
            value_name = "STATUS",
            help = "Filter by status (Active, On Hold, Completed)"
        )]
        status: Option<String>,

        #[arg(
            long = "search",
            value_name = "TERM",
            help = "Case-insensitive match on name, code or client"
        )]
        search: Option<String>,
    },

    /// List clients
    Clients {
        #[arg(
            long = "search",
            value_name = "TERM",
            help = "Case-insensitive match on name, nickname, email or country"
        )]
        search: Option<String>,
    },

    /// List employees
    Employees {
        #[arg(
            long = "search",
            value_name = "TERM",
            help = "Case-insensitive match on name, email, code or department"
        )]
        search: Option<String>,
    },

    /// Aggregate figures for a period
    Report {
        #[arg(
            long,
            short,
            value_name = "RANGE",
            help = "today, this_week, this_month, year/month/day or a custom range"
        )]
        period: Option<String>,

        #[arg(long = "project", value_name = "ID", help = "Only count tasks of this project")]
        project: Option<u32>,
    },

    /// Export timesheet entries
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by period keyword, year/month/day or a custom range"
        )]
        period: Option<String>,

        #[arg(long = "project", value_name = "ID")]
        project: Option<u32>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum TasksAction {
    /// Record a new task entry
    Add {
        #[arg(long = "name", value_name = "TEXT")]
        name: String,

        #[arg(long = "project", value_name = "ID")]
        project: u32,

        #[arg(long = "date", value_name = "DATE", help = "Worked date (YYYY-MM-DD)")]
        date: String,

        #[arg(long = "hours", value_name = "HOURS", allow_negative_numbers = true)]
        hours: f64,

        #[arg(
            long = "assignees",
            value_name = "IDS",
            value_delimiter = ',',
            help = "Comma-separated employee ids"
        )]
        assignees: Vec<u32>,

        #[arg(
            long = "status",
            value_name = "STATUS",
            help = "Not Started (default), In Progress or Completed"
        )]
        status: Option<String>,

        #[arg(long = "non-billable", help = "Record the entry as non-billable")]
        non_billable: bool,

        #[arg(long = "note", value_name = "TEXT")]
        note: Option<String>,
    },

    /// Delete every entry of a task id (asks for confirmation)
    Del {
        /// Task id to delete
        id: u32,

        #[arg(long = "yes", short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },
}
