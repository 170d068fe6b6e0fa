use std::io;

use crate::cli::args::OutputFormat;
use crate::core::restore::RestoreReport;

/// Output writer trait for different formats
pub trait OutputWriter {
    fn write_report(&self, report: &RestoreReport) -> Result<(), OutputError>;
    fn write_message(&self, message: &str) -> Result<(), OutputError>;
    fn write_error(&self, error: &str) -> Result<(), OutputError>;
}

/// Output formatting errors
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

impl From<OutputError> for crate::domain::error::UnsuspendError {
    fn from(err: OutputError) -> Self {
        Self::Output(err.to_string())
    }
}

/// Console output writer
pub struct ConsoleWriter {
    format: OutputFormat,
}

impl ConsoleWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }
}

impl OutputWriter for ConsoleWriter {
    fn write_report(&self, report: &RestoreReport) -> Result<(), OutputError> {
        match self.format {
            OutputFormat::Text => {
                println!(
                    "{} of {} tabs restored ({} not suspended, {} unrestorable)",
                    report.restored,
                    report.total(),
                    report.skipped,
                    report.failed
                );
            }
            OutputFormat::Json => {
                let output = serde_json::to_string_pretty(report)?;
                println!("{}", output);
            }
        }
        Ok(())
    }

    fn write_message(&self, message: &str) -> Result<(), OutputError> {
        println!("{}", message);
        Ok(())
    }

    fn write_error(&self, error: &str) -> Result<(), OutputError> {
        eprintln!("Error: {}", error);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_writes_in_both_formats() {
        let report = RestoreReport {
            restored: 2,
            skipped: 1,
            failed: 0,
        };
        assert!(ConsoleWriter::new(OutputFormat::Text)
            .write_report(&report)
            .is_ok());
        assert!(ConsoleWriter::new(OutputFormat::Json)
            .write_report(&report)
            .is_ok());
    }

    #[test]
    fn output_error_converts_to_crate_error() {
        let err = OutputError::IoError(io::Error::new(io::ErrorKind::BrokenPipe, "pipe"));
        let converted = crate::domain::error::UnsuspendError::from(err);
        assert!(converted.to_string().contains("pipe"));
    }
}
