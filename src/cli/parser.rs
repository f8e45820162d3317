use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rWorktime
#[derive(Parser)]
#[command(
    name = "rworktime",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track working time and check it against statutory break and daily maximum rules",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Act as if the current time were this instant ("YYYY-MM-DD HH:MM")
    #[arg(global = true, long = "at", value_name = "DATETIME")]
    pub at: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
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

    /// Start tracking a new work session
    Start {
        /// Work location: O=Office, R=Remote, C=Client, M=Mixed
        #[arg(long = "loc")]
        loc: Option<String>,

        /// Project the session is booked on
        #[arg(long = "project")]
        project: Option<String>,
    },

    /// Begin a break in the running session
    Pause,

    /// End the current break
    Resume,

    /// Stop tracking (closes a running break first)
    Stop,

    /// Show the compliance snapshot of the running session
    Status {
        #[arg(long, help = "Print the report as JSON")]
        json: bool,

        #[arg(long, help = "Report on the most recent session when none is running")]
        last: bool,
    },

    /// Show the compliance timeline of the running session
    Timeline {
        #[arg(long, help = "Print the events as JSON")]
        json: bool,

        #[arg(long, help = "Use the most recent session when none is running")]
        last: bool,
    },

    /// List sessions day by day with their compliance figures
    List {
        #[arg(long, short, help = "Filter by year/month/day or a custom range (A:B)")]
        period: Option<String>,

        #[arg(long = "today", help = "Show only today's sessions")]
        today: bool,
    },

    /// Delete a session and its breaks
    Del {
        /// Session id (see `list`)
        id: i64,
    },

    /// Export sessions with their compliance figures
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

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
