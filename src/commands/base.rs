/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::*;
use crate::config::*;
use crate::input::*;
use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use connector::{Gateway, HttpGateway};
use std::io;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "Estate", display_name = "Estate", bin_name = "estate", author = "Wavelens", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Option<MainCommands>,
    #[arg(long, value_enum)]
    generate_completions: Option<Shell>,
    /// Overrides the configured server URL.
    #[arg(long, env = "ESTATE_SERVER", global = true)]
    server: Option<String>,
    #[arg(long, env = "ESTATE_LOG_LEVEL", default_value = "warn", global = true)]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum MainCommands {
    Config {
        key: String,
        value: Option<String>,
    },
    Building {
        #[command(subcommand)]
        cmd: building::Commands,
    },
    Resident {
        #[command(subcommand)]
        cmd: resident::Commands,
    },
}

fn init_logging(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level)
        .with_context(|| format!("Invalid log level: {}", log_level))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    Ok(())
}

pub async fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level)?;

    if let Some(shell) = cli.generate_completions {
        let mut app = Cli::command();
        let bin_name = app.get_name().to_string();
        generate(shell, &mut app, bin_name, &mut io::stdout());
        return Ok(());
    }

    let Some(cmd) = cli.cmd else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match cmd {
        MainCommands::Config { key, value } => {
            let quiet = value.is_some();
            let value = set_get_value_from_string(&key, value)?;

            if !quiet {
                println!("{}", value.as_deref().unwrap_or("[unset]"));
            }
        }

        MainCommands::Building { cmd } => {
            building::handle(cmd, connect(cli.server)?).await?;
        }

        MainCommands::Resident { cmd } => {
            resident::handle(cmd, connect(cli.server)?).await?;
        }
    }

    Ok(())
}

fn connect(server: Option<String>) -> Result<Arc<dyn Gateway>> {
    let config = get_request_config(&load_config()?, server);
    tracing::debug!("Using server {}", config.server_url);
    Ok(Arc::new(HttpGateway::new(config)))
}
