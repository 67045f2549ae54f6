use crate::export::ExportFormat;
use crate::models::Category;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rWorklog
#[derive(Parser)]
#[command(
    name = "rworklog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Log work and break hours per project, run a live timer and export to a spreadsheet",
    long_about = None
)]
pub struct Cli {
    /// Override the data directory (useful for tests or separate logs)
    #[arg(global = true, long = "data-dir")]
    pub data_dir: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Enable debug logging
    #[arg(global = true, long, short = 'v')]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file and data directory
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Add keys missing from an older configuration file")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },

    /// Add an entry manually
    Add {
        /// Date of the entry (YYYY-MM-DD)
        #[arg(long, short = 'd')]
        date: Option<String>,

        /// Start time (HH:MM)
        #[arg(long = "in")]
        start: Option<String>,

        /// End time (HH:MM)
        #[arg(long = "out")]
        end: Option<String>,

        /// Project label (new names are added to the project list)
        #[arg(long, short = 'p')]
        project: Option<String>,

        #[arg(long, short = 'c', value_enum)]
        category: Option<Category>,

        /// Owner name (defaults to the stored owner)
        #[arg(long)]
        owner: Option<String>,
    },

    /// Run a live timer; press Enter to stop and record the entry
    Timer {
        /// Date of the entry (defaults to today)
        #[arg(long, short = 'd')]
        date: Option<String>,

        #[arg(long, short = 'p')]
        project: Option<String>,

        #[arg(long, short = 'c', value_enum)]
        category: Option<Category>,

        #[arg(long)]
        owner: Option<String>,
    },

    /// List all entries with totals
    List,

    /// Show total work, total break and overtime
    Summary,

    /// Manage the project list
    Project {
        #[command(subcommand)]
        action: ProjectAction,
    },

    /// Show or set the owner name stamped on new entries
    Owner {
        /// New owner name
        name: Option<String>,

        #[arg(long, conflicts_with = "name")]
        clear: bool,
    },

    /// Export the log to a spreadsheet (or CSV/JSON)
    Export {
        #[arg(long, value_enum, default_value = "xlsx")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum ProjectAction {
    /// Add a project name
    Add { name: String },
    /// List known projects
    List,
}
