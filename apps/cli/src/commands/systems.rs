use anyhow::Result;
use filegate_validator::filename::{System, registry};
use serde::Serialize;

use super::Status;
use crate::config::Config;
use crate::output::Printer;

#[derive(Debug, Serialize)]
struct SystemRecord {
    system: System,
    family: String,
    rule: Option<&'static str>,
    message: Option<&'static str>,
}

impl SystemRecord {
    fn new(system: System) -> Self {
        let rule = registry::lookup(system);
        Self {
            system,
            family: system.family().to_string(),
            rule: rule.map(|r| r.name()),
            message: rule.map(|r| r.message()),
        }
    }
}

pub fn execute(config: &Config) -> Result<Status> {
    let mut printer = Printer::stdout(config.format);

    for system in System::ALL {
        let record = SystemRecord::new(system);
        let text = format!(
            "{:<10} {:<10} {}",
            system.as_str(),
            record.family,
            record.message.unwrap_or("(no rule)")
        );
        printer.emit(text, &record)?;
    }

    Ok(Status::Clean)
}
