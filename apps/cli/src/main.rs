//! `filegate`: check filenames against per-filesystem naming rules.
//!
//! Exit status: 0 when every name passes, 1 when a name is rejected (or an
//! audit misclassifies one), 2 on usage or configuration errors.

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

mod cli;
mod commands;
mod config;
mod logging;
mod output;

use cli::{Cli, Command};
use commands::Status;
use config::{Config, Overrides};

fn run(cli: Cli) -> Result<Status> {
    let overrides = Overrides {
        system: match &cli.command {
            Command::Check(args) => args.system.clone(),
            Command::Systems | Command::Audit(_) => None,
        },
        format: cli.format,
    };
    let config = Config::load(cli.config.as_deref(), &overrides)?;

    logging::init(cli.verbose, cli.quiet, &config.log_level);
    debug!(?config, "configuration loaded");

    match &cli.command {
        Command::Check(args) => commands::check::execute(args, &config),
        Command::Systems => commands::systems::execute(&config),
        Command::Audit(args) => commands::audit::execute(args, &config),
    }
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}
