pub mod error;
pub mod junit;
pub mod markdown;
pub mod summary;
pub mod types;

pub use error::{FormatError, ReportError};
pub use types::ReportSummary;

use crate::utils::config::Config;
use log::{debug, error, info};
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

/// Parse a JUnit report file and aggregate it
pub fn read_summary(report_file: &Path) -> Result<ReportSummary, ReportError> {
    debug!("Reading report from {}", report_file.display());
    let file = File::open(report_file).map_err(|e| {
        ReportError::input(
            format!("failed to open report file `{}`", report_file.display()),
            e,
        )
    })?;

    let doc = junit::read_report(BufReader::new(file))?;
    debug!(
        "Parsed {} suites with {} test cases",
        doc.suites.len(),
        doc.case_count()
    );

    let summary = ReportSummary::from_document(&doc);
    info!("{} passed, {} failed", summary.passes, summary.failures);
    Ok(summary)
}

/// Render the markdown report and hand it to the sink in a single write
pub fn write_report<W: Write>(summary: &ReportSummary, out: &mut W) -> Result<(), ReportError> {
    let mut rendered = Vec::new();
    markdown::write_markdown(summary, &mut rendered)
        .and_then(|()| out.write_all(&rendered))
        .map_err(|e| ReportError::input("failed to write report", e))
}

/// Run one report generation.
///
/// When the report cannot be read or parsed, the failure notice is written
/// to `out` instead. A sink that fails while the report is being written
/// gets nothing more.
pub fn run_report<W: Write>(config: &Config, out: &mut W) -> Result<ReportSummary, ReportError> {
    let summary = match read_summary(&config.report_file) {
        Ok(summary) => summary,
        Err(err) => {
            error!("Report generation failed: {}", err);
            if let Err(write_err) = markdown::write_failure(&err, out) {
                error!("Failed to write failure notice: {}", write_err);
            }
            return Err(err);
        }
    };

    write_report(&summary, out)?;
    Ok(summary)
}

/// Process exit status of a run. Failing tests still produce a report, so
/// only a run that produced no report exits non-zero.
pub fn exit_status(result: &Result<ReportSummary, ReportError>) -> u8 {
    match result {
        Ok(_) => 0,
        Err(_) => 1,
    }
}
