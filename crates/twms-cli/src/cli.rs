//! CLI definition using clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use twms_domain::service::{SearchField, SortOrder};
use twms_domain::{LifecycleStatus, OperatorStatus};
use twms_types::OutputFormat;

#[derive(Parser)]
#[command(name = "twms")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Truck weight management: cargo registration, overload checks, reports")]
#[command(long_about = None)]
pub struct Cli {
    /// Runs the interactive menu when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the data, backup, report and CSV files
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

/// Field matched by `search`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum SearchBy {
    #[default]
    Driver,
    Plate,
    Destination,
}

impl From<SearchBy> for SearchField {
    fn from(by: SearchBy) -> Self {
        match by {
            SearchBy::Driver => SearchField::Driver,
            SearchBy::Plate => SearchField::Plate,
            SearchBy::Destination => SearchField::Destination,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive menu session
    Menu,

    /// Register a truck
    Add {
        #[arg(long)]
        driver: String,

        #[arg(long)]
        plate: String,

        #[arg(long)]
        destination: String,

        /// Empty truck weight in kg (0-10000)
        #[arg(long)]
        empty_weight: u32,

        /// Cargo box as WEIGHT:DESCRIPTION, e.g. "300:Rice". Repeatable.
        #[arg(long = "cargo", short = 'c')]
        cargo: Vec<String>,
    },

    /// List registered trucks
    List {
        /// Only trucks with this status (e.g. "near-limit", "in-transit")
        #[arg(long, short = 's')]
        status: Option<LifecycleStatus>,
    },

    /// Show one truck with its cargo and weight analysis
    Show {
        id: u32,
    },

    /// Case-insensitive substring search
    Search {
        term: String,

        #[arg(long, value_enum, default_value_t = SearchBy::Driver)]
        by: SearchBy,
    },

    /// Set an operator status (pending, in-transit, delivered, cancelled)
    Status {
        id: u32,
        status: OperatorStatus,
    },

    /// Delete a truck; later ids move up by one
    Delete {
        id: u32,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Sort the fleet (weight-asc, weight-desc, driver, timestamp)
    Sort {
        order: SortOrder,
    },

    /// Show fleet statistics
    Stats,

    /// Write the plain-text report
    Report {
        /// Output file (defaults to the configured report file)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Export the fleet to CSV
    Export {
        /// Output file (defaults to the configured CSV file)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set the weight limit in kg
        #[arg(long)]
        set_weight_limit: Option<u32>,

        /// Set the data directory
        #[arg(long)]
        set_data_dir: Option<PathBuf>,

        /// Enable/disable the automatic backup snapshot
        #[arg(long)]
        set_auto_backup: Option<bool>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
