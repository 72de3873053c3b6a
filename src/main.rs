use anyhow::Result;
use clap::Parser;
use dotenv::dotenv;
use log::{ debug, info };

use buildreg::{ LedgerConfig, OutputFormat };

mod cli;
use cli::{ BuildregCli, Commands };

fn main() -> Result<()> {
    // Load environment variables from .env file if present
    let dotenv_loaded = dotenv().is_ok();

    let cli = BuildregCli::parse();

    let mut config = match &cli.config {
        Some(path) => LedgerConfig::from_file(path)?,
        None => LedgerConfig::default(),
    };
    let env_overrides = config.apply_env_overrides()?;

    // Command line flags win over the environment and the config file
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }
    if let Some(format) = &cli.output_format {
        config.output_format = format.parse::<OutputFormat>()?;
    }

    setup_logging(&config.log_level);
    if dotenv_loaded {
        debug!("Loaded environment variables from .env file");
    }
    if let Some(path) = &cli.config {
        info!("Using configuration from {}", path.display());
    }
    for var in &env_overrides {
        debug!("Configuration overridden from {}", var);
    }

    match &cli.command {
        Commands::Replay { script, state, strict } => {
            cli::commands::replay::execute(
                script,
                &config.clock,
                config.output_format,
                *state,
                *strict
            )?;
        }
        Commands::Operations { registry } => {
            cli::commands::operations::execute(registry.as_deref(), config.output_format)?;
        }
    }

    Ok(())
}

fn setup_logging(log_level: &str) {
    // Set up the logger based on the log level
    let level = match log_level.to_lowercase().as_str() {
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => {
            cli::ui::print_info(&format!("Unknown log level {:?}, using info", log_level));
            log::LevelFilter::Info
        }
    };

    env_logger::Builder::new().filter_level(level).init();

    info!("Logger initialized with level: {}", log_level);
}
