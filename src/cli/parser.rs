use clap::{Parser, Subcommand};

/// Command-line interface definition for punchclock
/// CLI punch clock: one record per day, SQLite underneath
#[derive(Parser)]
#[command(
    name = "punchclock",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple punch clock CLI: one tap clocks you in, the next clocks you out",
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

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,
    },

    /// Print the internal audit-log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// The clock tap: open today's record, or close it if already open
    Punch {
        /// Override "now" with an epoch-millisecond timestamp (tests)
        #[arg(long = "at", hide = true, value_name = "EPOCH_MS")]
        at: Option<String>,
    },

    /// Show today's clock state
    Status,

    /// List recorded days, newest first, grouped by month
    List {
        /// Show a single month (YYYY-MM)
        #[arg(long, short, value_name = "YYYY-MM")]
        month: Option<String>,
    },

    /// Delete every record after confirmation
    Clear {
        /// Skip the confirmation prompt
        #[arg(long = "yes", short = 'y')]
        yes: bool,
    },

    /// Export records
    Export {
        /// Export format: csv, json
        #[arg(long, value_name = "FORMAT", default_value = "csv")]
        format: String,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Restrict the export to a single month (YYYY-MM)
        #[arg(long, value_name = "YYYY-MM")]
        month: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the database
    Backup {
        /// Destination file path
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Compress the backup into a zip archive
        #[arg(long)]
        compress: bool,
    },
}
