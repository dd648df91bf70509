//! Counsel CLI Binary
//!
//! Command-line interface for the solution generation pipeline.

use clap::Parser;
use counsel::cli::{map_error, Cli, RunContext};
use counsel::config::ConfigLoader;
use counsel::logging::{init_logging, LoggingConfig};
use std::process;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let logging_config = build_logging_config(&cli);

    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Counsel CLI starting");

    let context = match RunContext::new(cli.workspace.clone(), cli.config.clone(), cli.format) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("Error loading configuration: {:#}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    };

    match context.execute(&cli.command).await {
        Ok(output) => {
            info!(command = cli.command.name(), "Command completed successfully");
            println!("{}", output);
        }
        Err(e) => {
            error!(command = cli.command.name(), "Command failed: {:#}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    }
}

/// Build logging configuration from CLI args, environment, and config file.
/// Precedence: CLI flags override config file override defaults.
fn build_logging_config(cli: &Cli) -> LoggingConfig {
    let mut config = if let Some(ref config_path) = cli.config {
        ConfigLoader::load_from_file(config_path)
            .ok()
            .map(|c| c.logging)
            .unwrap_or_default()
    } else {
        ConfigLoader::load(&cli.workspace)
            .ok()
            .map(|c| c.logging)
            .unwrap_or_default()
    };

    if cli.quiet {
        config.enabled = false;
    }
    if cli.verbose {
        config.level = "debug".to_string();
        // Keep verbose runs visible in the terminal when logs go to a file.
        if config.output == "file" {
            config.output = "file+stderr".to_string();
        }
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        config.file = Some(file.clone());
    }

    config
}
