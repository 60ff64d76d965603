use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for volog
/// CLI application to track volunteer hours with SQLite
#[derive(Parser)]
#[command(
    name = "volog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple volunteer-hours CLI: log sessions and track award progress using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

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

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
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

    /// Create a volunteer profile and log in
    Signup {
        #[arg(long, help = "Full name")]
        name: String,

        #[arg(long, help = "Age in years (determines the award age group)")]
        age: u32,

        #[arg(long, help = "Email address (used to log in later)")]
        email: String,

        #[arg(long, default_value = "", help = "Phone number")]
        phone: String,
    },

    /// Log in as an existing profile
    Login {
        #[arg(long, help = "Email the profile was created with")]
        email: String,
    },

    /// Log out the current profile
    Logout,

    /// Show the current profile
    Whoami,

    /// Add or update a volunteer session
    Add {
        /// Date of the session (YYYY-MM-DD)
        date: String,

        /// Start time (HH:MM), requires --end
        #[arg(long = "start", help = "Start time (HH:MM)")]
        start: Option<String>,

        /// End time (HH:MM), must be after --start
        #[arg(long = "end", help = "End time (HH:MM)")]
        end: Option<String>,

        /// Free-standing duration in hours (alternative to a time range)
        #[arg(long = "hours", help = "Duration in hours, e.g. 2.5", allow_negative_numbers = true)]
        hours: Option<f64>,

        /// Description of the activity
        #[arg(long = "desc", help = "What the session was about")]
        desc: Option<String>,

        /// Edit an existing session instead of creating a new one
        #[arg(long = "id", help = "Session id to edit (used with --edit)")]
        edit_id: Option<i64>,

        /// Enable edit mode (requires --id)
        #[arg(
            long = "edit",
            requires = "edit_id",
            help = "Edit existing session instead of creating a new one"
        )]
        edit: bool,
    },

    /// Clock a live session in or out
    Clock {
        #[arg(long = "in", help = "Start the clock now")]
        clock_in: bool,

        #[arg(long = "out", help = "Stop the clock and record the session")]
        clock_out: bool,

        #[arg(long = "desc", help = "Description for the recorded session")]
        desc: Option<String>,
    },

    /// Delete sessions
    Del {
        #[arg(long = "id", help = "Session id to delete")]
        id: Option<i64>,

        #[arg(long = "date", help = "Delete ALL sessions for this date (YYYY-MM-DD)")]
        date: Option<String>,
    },

    /// List sessions
    List {
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,

        #[arg(long = "today", help = "Show only today's sessions")]
        now: bool,

        #[arg(long = "recent", help = "Show only the N most recent sessions")]
        recent: Option<usize>,
    },

    /// Show award progress for the current profile
    Progress,

    /// Export volunteer session data
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },
}
