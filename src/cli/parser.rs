use crate::export::ExportFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for rAttendance
/// CLI application to turn attendance terminal exports into daily reports
#[derive(Parser)]
#[command(
    name = "rattendance",
    version = env!("CARGO_PKG_VERSION"),
    about = "Daily worked hours and breaks from attendance terminal exports",
    long_about = None
)]
pub struct Cli {
    /// Use a custom configuration file
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override the export root directory from the configuration
    #[arg(global = true, long = "root", value_name = "DIR")]
    pub root: Option<String>,

    /// Enable debug logging (otherwise RUST_LOG is honoured)
    #[arg(global = true, long, short = 'v')]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file
    Init {
        /// Export root directory holding the "MM MonthName" folders
        #[arg(long = "export-root", value_name = "DIR")]
        export_root: Option<String>,

        /// Employee reported when no --name is given
        #[arg(long = "employee", value_name = "NAME")]
        employee: Option<String>,

        /// Overwrite an existing configuration file
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Show the configuration
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,
    },

    /// Print the daily report of an employee
    Report {
        /// Employee name as it appears in the export (default: default_employee)
        #[arg(long, short = 'n')]
        name: Option<String>,

        /// Month folder to read (1-12, default: current month)
        #[arg(long, short = 'm')]
        month: Option<u32>,

        /// Disable ANSI colors (always off when stdout is not a terminal)
        #[arg(long = "no-color")]
        no_color: bool,
    },

    /// Export the daily report of an employee
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'n')]
        name: Option<String>,

        #[arg(long, short = 'm')]
        month: Option<u32>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
