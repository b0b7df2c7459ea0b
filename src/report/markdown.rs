use super::types::{ReportSummary, FAILED_LABEL, PASSED_LABEL};
use std::fmt::Display;
use std::io::{self, Write};

const TITLE: &str = "E2E report";
const BADGE_URL: &str = "https://img.shields.io/badge";
const HEADERS: [&str; 4] = ["Test Suite", "Test Case", "Time (s)", "Status"];

/// Write the markdown report for a CI comment
pub fn write_markdown<W: Write>(summary: &ReportSummary, w: &mut W) -> io::Result<()> {
    let status = if summary.ok { PASSED_LABEL } else { FAILED_LABEL };
    let color = if summary.ok { "green" } else { "red" };

    writeln!(w, "## {} {}", TITLE, status)?;
    writeln!(
        w,
        "Started at {} took {}\n",
        code(&summary.timestamp),
        code(&summary.time)
    )?;
    writeln!(
        w,
        "![]({}/tests-{}_passed%2C_{}_failed-{})\n",
        BADGE_URL, summary.passes, summary.failures, color
    )?;

    writeln!(w, "{}", HEADERS.join("|"))?;
    writeln!(w, "{}", vec![""; HEADERS.len()].join("|"))?;

    for row in summary.sorted_rows() {
        writeln!(
            w,
            "{}|{}|{}|{}",
            row.suite,
            row.case,
            code(&row.time),
            row.status.label()
        )?;
    }

    Ok(())
}

/// Write the notice shown when no report could be produced
pub fn write_failure<W: Write>(error: &dyn Display, w: &mut W) -> io::Result<()> {
    writeln!(w, "## Report generation failed :skull:\n")?;
    writeln!(w, "```log\n{}\n```", error)
}

fn code(text: &str) -> String {
    format!("`{}`", text)
}
