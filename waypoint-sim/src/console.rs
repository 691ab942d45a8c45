use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

use clap::ValueEnum;
use waypoint_shared::Report;

/// How trace records are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum TraceFormat {
    /// `<Label> at (<x>, <y>) moving: <yes|no>`
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Output stream shared by both workers.
///
/// Every line is rendered before the lock is taken and written while it is
/// held, so lines from different workers never interleave.
pub struct Console<W> {
    writer: Mutex<W>,
    format: TraceFormat,
}

impl Console<io::Stdout> {
    pub fn stdout(format: TraceFormat) -> Self {
        Self::new(io::stdout(), format)
    }
}

impl<W: Write> Console<W> {
    pub fn new(writer: W, format: TraceFormat) -> Self {
        Self {
            writer: Mutex::new(writer),
            format,
        }
    }

    pub fn emit(&self, report: &Report) -> io::Result<()> {
        let line = match self.format {
            TraceFormat::Text => report.to_string(),
            TraceFormat::Json => report.to_json().map_err(io::Error::from)?,
        };
        self.write_line(&line)
    }

    pub fn write_line(&self, line: &str) -> io::Result<()> {
        // Poisoning only means another worker panicked; the writer is intact.
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        writeln!(writer, "{}", line)?;
        writer.flush()
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}
