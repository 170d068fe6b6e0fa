use tracing::info;

use crate::cli::args::Args;
use crate::cli::output::{ConsoleWriter, OutputWriter};
use crate::core::restore::restore_document;
use crate::domain::config::RestoreConfig;
use crate::domain::error::UnsuspendResult;
use crate::infrastructure::storage;

/// Execute the restore described by the command line
pub fn execute_command(args: Args) -> UnsuspendResult<()> {
    let writer = ConsoleWriter::new(args.output.clone());
    let config = RestoreConfig::from(&args);

    let mut document = storage::load_document(&args.in_file)?;
    let report = restore_document(&mut document, &config);
    storage::save_document(&args.out_file, &document)?;

    info!(
        restored = report.restored,
        skipped = report.skipped,
        failed = report.failed,
        out_file = %args.out_file.display(),
        "session repaired"
    );
    writer.write_report(&report)?;
    Ok(())
}
