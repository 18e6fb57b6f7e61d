use crate::config::Config;
use crate::export::ExportFormat;
use crate::utils::path::expand_tilde;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for qrcheckin
#[derive(Parser)]
#[command(
    name = "qrcheckin",
    version = env!("CARGO_PKG_VERSION"),
    about = "QR checkpoint attendance: register presence per location and render floor-plan overlays",
    long_about = None
)]
pub struct Cli {
    /// Use this configuration file instead of ~/.qrcheckin/qrcheckin.conf
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// More diagnostic output on stderr (-v, -vv)
    #[arg(global = true, short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Only report errors on stderr
    #[arg(global = true, short = 'q', long = "quiet")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn config_path(&self) -> PathBuf {
        self.config
            .as_deref()
            .map(expand_tilde)
            .unwrap_or_else(Config::config_file)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration, the record file and the internal log
    Init {
        #[arg(long = "force", help = "Overwrite an existing configuration with defaults")]
        force: bool,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
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

    /// List the people who can register (active roster entries)
    People,

    /// Open the page a QR code points to: the registration form or the panel
    View {
        /// Checkpoint label carried by the QR code
        #[arg(long = "punto", default_value = "SIN_PUNTO")]
        punto: String,

        /// "registro" (form) or "panel" (dashboard); anything else is the form
        #[arg(long = "modo", default_value = "registro")]
        modo: String,

        /// Submit the form for this person
        #[arg(long = "nombre")]
        nombre: Option<String>,

        /// Session token; a session can register only once
        #[arg(long = "session")]
        session: Option<String>,

        /// Override the configured cooldown (minutes, 0 disables)
        #[arg(long = "cooldown")]
        cooldown: Option<i64>,

        /// Panel: only this person's records on the overlays ("Todos" = everyone)
        #[arg(long = "persona")]
        persona: Option<String>,

        /// Panel: only this checkpoint in the detail table ("Todos" = every checkpoint)
        #[arg(long = "filtro-punto")]
        filtro_punto: Option<String>,

        /// Panel: directory for the overlay images
        #[arg(long = "out", value_name = "DIR")]
        out: Option<String>,

        /// Panel: write a full copy of the record file here
        #[arg(long = "download", value_name = "FILE")]
        download: Option<String>,
    },

    /// Render the two floor-plan overlays only
    Render {
        #[arg(long = "persona")]
        persona: Option<String>,

        #[arg(long = "out", value_name = "DIR")]
        out: Option<String>,
    },

    /// Export the full record history
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the record file
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
