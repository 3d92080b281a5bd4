// src/cli.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use crate::VERSION;

/// Output format for scan results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

#[derive(Parser, Debug)]
#[command(
    name = "project_radar",
    version = VERSION,
    about = "Scans project folders, classifies documents by keyword and reports recent activity"
)]
pub struct Args {
    /// YAML settings file (defaults are used when omitted)
    #[arg(long, short = 'c', global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scan the configured roots and list files, newest first
    Scan {
        /// Output format
        #[arg(long, value_enum, default_value = "json")]
        format: OutputFormat,

        /// Scan these roots instead of the configured ones
        #[arg(long = "root", value_name = "DIR")]
        roots: Vec<PathBuf>,
    },

    /// Print the text extracted from each file
    Extract {
        #[arg(required = true, value_name = "PATH")]
        paths: Vec<PathBuf>,
    },

    /// Ask the local LLM to summarize the given files
    Analyze {
        #[arg(required = true, value_name = "PATH")]
        paths: Vec<PathBuf>,
    },

    /// Run the weekly report job now
    Report {
        /// Recent-activity window in days (overrides the settings file)
        #[arg(long, value_name = "N")]
        days: Option<u64>,

        /// Scan these roots instead of the configured ones
        #[arg(long = "root", value_name = "DIR")]
        roots: Vec<PathBuf>,

        /// Only send the started card; skip per-project LLM analysis
        #[arg(long)]
        no_analysis: bool,
    },
}
