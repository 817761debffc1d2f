use crate::export::ExportFormat;
use crate::models::BufferType;
use clap::{Parser, Subcommand};

/// Command-line interface definition for kesimlog
#[derive(Parser)]
#[command(
    name = "kesimlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Record cut lengths (boy) and buffer types (tampon) in SQLite; list, filter and export them",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or a second workshop)
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
        /// Print the current configuration
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        /// Edit the configuration file with your preferred editor
        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        /// Editor to use (overrides $EDITOR/$VISUAL)
        #[arg(long = "editor", help = "Specify the editor to use")]
        editor: Option<String>,
    },

    /// Record a new cut
    Add {
        /// Length in meters; `.` or `,` as decimal separator (e.g. 7,25)
        #[arg(allow_hyphen_values = true)]
        length: String,

        /// Buffer type (defaults to the configured one)
        #[arg(long = "tampon", value_enum)]
        tampon: Option<BufferType>,
    },

    /// Change length and buffer type of an existing cut (creation time is kept)
    Update {
        /// Record id
        id: i64,

        /// New length in meters
        #[arg(allow_hyphen_values = true)]
        length: String,

        /// New buffer type (unchanged when omitted)
        #[arg(long = "tampon", value_enum)]
        tampon: Option<BufferType>,
    },

    /// Delete a cut by id
    Del {
        /// Record id
        id: i64,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// List cuts, oldest first; cuts younger than 24 hours are highlighted
    List {
        /// Group filter: all (hepsi), 5..10 (integer part of the length) or other (diger)
        #[arg(long, short, default_value = "all")]
        group: String,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Export all cuts to XLSX or PDF
    Export {
        /// Export format
        #[arg(long, value_enum, value_name = "FORMAT", default_value = "xlsx")]
        format: ExportFormat,

        /// Output file (default: kesimler_<timestamp>.<ext> in the export dir)
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Open the interactive form
    Ui,
}
