use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use filegate_validator::prelude::*;
use tracing::{debug, warn};

use super::Status;
use crate::cli::AuditArgs;
use crate::config::Config;
use crate::output::Printer;

/// Parses a corpus file: one `[<system>]` table per target.
pub fn load_corpora(path: &Path) -> Result<BTreeMap<System, Corpus>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read corpus {}", path.display()))?;
    toml::from_str(&raw).with_context(|| format!("invalid corpus {}", path.display()))
}

pub fn execute(args: &AuditArgs, config: &Config) -> Result<Status> {
    let corpora = load_corpora(&args.corpus)?;
    if corpora.is_empty() {
        warn!(corpus = %args.corpus.display(), "corpus has no system tables");
    }

    // Build every validator first so an unsupported table fails before output.
    let validators = corpora
        .keys()
        .map(|system| filename_for(*system))
        .collect::<Result<Vec<_>, _>>()?;

    let mut printer = Printer::stdout(config.format);
    let mut status = Status::Clean;

    for (validator, corpus) in validators.iter().zip(corpora.values()) {
        let report = Report::evaluate(validator, corpus);
        debug!(
            system = ?report.system,
            total = report.total,
            incorrect = report.incorrect,
            "audited corpus"
        );
        if !report.is_perfect() {
            status = Status::Rejected;
        }
        printer.emit(&report, &report)?;
    }

    Ok(status)
}
