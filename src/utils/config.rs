use crate::report::ReportError;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Report file read when none is given
pub const DEFAULT_REPORT_FILE: &str = "chainsaw-report.xml";

/// Run configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// JUnit XML report to read
    pub report_file: PathBuf,

    /// Markdown destination; `None` or an empty path means stdout
    pub output: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            report_file: PathBuf::from(DEFAULT_REPORT_FILE),
            output: None,
        }
    }
}

impl Config {
    pub fn output_path(&self) -> Option<&Path> {
        self.output
            .as_deref()
            .filter(|path| !path.as_os_str().is_empty())
    }

    /// Open the report sink, creating or truncating the output file
    pub fn open_output(&self) -> Result<Box<dyn Write>, ReportError> {
        match self.output_path() {
            Some(path) => {
                log::debug!("Writing report to {}", path.display());
                let file = File::create(path).map_err(|e| {
                    ReportError::input(
                        format!("failed to open output file `{}`", path.display()),
                        e,
                    )
                })?;
                Ok(Box::new(BufWriter::new(file)))
            }
            None => Ok(Box::new(io::stdout().lock())),
        }
    }
}
