//! Printing results as text or JSON lines.

use std::io::{self, Write};

use anyhow::Result;
use serde::Serialize;

use crate::cli::OutputFormat;

/// Writes one record per call in the selected format.
pub struct Printer<W> {
    format: OutputFormat,
    out: W,
}

impl Printer<io::StdoutLock<'static>> {
    pub fn stdout(format: OutputFormat) -> Self {
        Self::new(format, io::stdout().lock())
    }
}

impl<W: Write> Printer<W> {
    pub const fn new(format: OutputFormat, out: W) -> Self {
        Self { format, out }
    }

    /// Prints `text` in text mode, `record` as one JSON line otherwise.
    pub fn emit<T: Serialize>(&mut self, text: impl std::fmt::Display, record: &T) -> Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(self.out, "{text}")?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.out, record)?;
                writeln!(self.out)?;
            }
        }
        Ok(())
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}
