use clap::{ Parser, Subcommand };
use std::path::PathBuf;

pub mod commands;
pub mod ui;

#[derive(Parser)]
#[command(
    name = "buildreg",
    about = "Replay invocations against the building, inventory, maintenance and water-usage registries",
    version,
    author,
    long_about = None
)]
pub struct BuildregCli {
    /// Sets the log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(long, global = true)]
    pub output_format: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Apply a YAML invocation script to a fresh ledger
    Replay {
        /// Path to the script
        script: PathBuf,

        /// Print every counter and record once the script has run
        #[arg(long, default_value = "false")]
        state: bool,

        /// Stop at the first malformed invocation instead of skipping it
        #[arg(long, default_value = "false")]
        strict: bool,
    },

    /// List the operations each registry accepts
    Operations {
        /// Only show one registry (building, inventory, maintenance, waterUsage)
        #[arg(short, long)]
        registry: Option<String>,
    },
}
