use crate::export::{ExportFormat, ExportKind};
use crate::models::action::Action;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rTimesheet
/// Employee check-in / check-out tracking with SQLite
#[derive(Parser)]
#[command(
    name = "rtimesheet",
    version = env!("CARGO_PKG_VERSION"),
    about = "Employee time tracking: punch check-ins, breaks and site visits, report worked hours and anomalies",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Admin password, required by management and reporting commands
    #[arg(global = true, long = "admin-password", value_name = "PASSWORD")]
    pub admin_password: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

fn parse_action(s: &str) -> Result<Action, String> {
    Action::parse(s).ok_or_else(|| {
        let valid: Vec<&str> = Action::ALL.iter().map(|a| a.code()).collect();
        format!("unknown action '{}' (expected one of: {})", s, valid.join(", "))
    })
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity and pending migrations")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage employee credentials (admin)
    Employee {
        #[command(subcommand)]
        action: EmployeeCommand,
    },

    /// Record an action for an employee
    ///
    /// ACTION is one of: in, out, break-start, break-end, visit-start,
    /// visit-end (the full labels such as "Check In" are accepted too).
    Punch {
        /// Employee username
        username: String,

        /// Action to record
        #[arg(value_parser = parse_action)]
        action: Action,

        #[arg(long, short = 'p', help = "Employee password")]
        password: String,

        #[arg(
            long = "at",
            value_name = "TIMESTAMP",
            help = "Record at this instant instead of now (YYYY-MM-DD HH:MM[:SS])"
        )]
        at: Option<String>,
    },

    /// Show an employee's state and worked time for today
    Status {
        /// Employee username
        username: String,

        #[arg(long, short = 'p', help = "Employee password (or use --admin-password)")]
        password: Option<String>,

        #[arg(long = "now", value_name = "TIMESTAMP", help = "Reference instant instead of the wall clock")]
        now: Option<String>,
    },

    /// Daily summaries: worked hours, breaks, site visits and anomaly flags
    Report {
        #[command(flatten)]
        filter: FilterArgs,

        #[arg(
            long,
            short = 'p',
            requires = "employee",
            help = "Employee password, to view one's own records without the admin password"
        )]
        password: Option<String>,

        #[arg(long = "sessions", help = "Also list the reconstructed sessions")]
        sessions: bool,
    },

    /// List potential issues (missing punches, late arrivals, long days, ...)
    Issues {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Per-employee totals and overtime for one week (Monday to Sunday)
    Weekly {
        #[arg(
            long = "week-of",
            value_name = "DATE",
            help = "Any day of the week to summarize (YYYY-MM-DD, default: today)"
        )]
        week_of: Option<String>,

        #[arg(long = "now", value_name = "TIMESTAMP", help = "Reference instant instead of the wall clock")]
        now: Option<String>,
    },

    /// Hours per employee and calendar month
    Monthly {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Total hours and standard-day equivalents per employee
    Payment {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Export summaries or raw events
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_enum, default_value = "daily")]
        kind: ExportKind,

        #[arg(long, value_name = "FILE", help = "Output file (absolute path required)")]
        file: String,

        #[command(flatten)]
        filter: FilterArgs,

        #[arg(long, short = 'f', help = "Overwrite output file without confirmation")]
        force: bool,
    },

    /// Append rows from a CSV snapshot (Employee,Action,Timestamp)
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// Delete every recorded event (admin)
    Clear {
        #[arg(long = "backup", value_name = "FILE", help = "Back up the database first")]
        backup: Option<String>,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Store the copy in a zip archive")]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite without confirmation")]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum EmployeeCommand {
    /// Register a new employee
    Add {
        username: String,

        #[arg(long = "name", value_name = "DISPLAY_NAME")]
        display_name: String,

        #[arg(long, short = 'p')]
        password: String,
    },

    /// Remove an employee's credentials (recorded events are kept)
    Remove { username: String },

    /// Change an employee's password
    Passwd {
        username: String,

        #[arg(long, short = 'p')]
        password: String,
    },

    /// List registered employees
    List,
}

/// Filters shared by the reporting commands.
#[derive(clap::Args, Clone, Debug, Default)]
pub struct FilterArgs {
    #[arg(long, short = 'e', help = "Only this employee")]
    pub employee: Option<String>,

    /// Date range: YYYY, YYYY-MM, YYYY-MM-DD or start:end in the same format;
    /// "all" disables date filtering. Default: the last `history_days` days.
    #[arg(long, short = 'r', value_name = "RANGE")]
    pub range: Option<String>,

    #[arg(long = "now", value_name = "TIMESTAMP", help = "Reference instant instead of the wall clock")]
    pub now: Option<String>,
}
