//! `payday` - command-line client for Payday Picks.

mod app;
mod cli;
mod commands;
mod prompt;
mod render;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use payday_core::observability::init_tracing;
use payday_core::PaydayConfig;

use crate::app::App;
use crate::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let path = cli.config.clone().unwrap_or_else(PaydayConfig::default_path);
    let mut config = PaydayConfig::load_from(&path)
        .with_context(|| format!("cannot load config from {}", path.display()))?;
    config.apply_env_overrides(|key| std::env::var(key).ok());
    config.validate().context("invalid configuration")?;
    init_tracing(&config.observability, cli.verbose).context("cannot initialise logging")?;

    let app = App::build(config, cli.ephemeral, cli.json)?;
    commands::dispatch(&app, cli.command)
}
