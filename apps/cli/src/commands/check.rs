use anyhow::Result;
use filegate_validator::prelude::*;
use serde::Serialize;
use tracing::{debug, info};

use super::Status;
use crate::cli::CheckArgs;
use crate::config::Config;
use crate::output::Printer;

#[derive(Debug, Serialize)]
struct CheckRecord<'a> {
    name: &'a str,
    accepted: bool,
    system: Option<System>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'static str>,
}

pub fn execute(args: &CheckArgs, config: &Config) -> Result<Status> {
    let validator = filename(config.system.map(FilenameArgs::from))?;
    if validator.system().is_none() {
        info!("no system configured, every name is accepted");
    }

    let mut printer = Printer::stdout(config.format);
    let mut status = Status::Clean;

    for name in &args.names {
        let check = validator.check(name);
        let record = CheckRecord {
            name,
            accepted: check.is_accepted(),
            system: validator.system(),
            message: check.message(),
        };

        match check {
            Check::Accepted => printer.emit(format_args!("ok {name}"), &record)?,
            Check::Rejected { message } => {
                status = Status::Rejected;
                printer.emit(format_args!("rejected {name}: {message}"), &record)?;
            }
        }
    }

    debug!(checked = args.names.len(), ?status, "check finished");
    Ok(status)
}
