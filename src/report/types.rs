/// Label shown for a passing test case
pub const PASSED_LABEL: &str = ":white_check_mark: Passed";
/// Label shown for a failing test case
pub const FAILED_LABEL: &str = ":x: Failed";

/// Root `<testsuites>` element of a JUnit report
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TestDocument {
    pub time: String,
    pub timestamp: String,
    pub suites: Vec<TestSuite>,
}

impl TestDocument {
    pub fn case_count(&self) -> usize {
        self.suites.iter().map(|s| s.cases.len()).sum()
    }
}

/// A `<testsuite>` element
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TestSuite {
    pub name: String,
    pub cases: Vec<TestCase>,
}

/// A `<testcase>` element
///
/// Missing `name`/`time` attributes are empty strings. `failure` holds the
/// text of a nested `<failure>` element; `None` means the case passed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TestCase {
    pub name: String,
    pub time: String,
    pub failure: Option<String>,
}

impl TestCase {
    pub fn status(&self) -> Status {
        if self.failure.is_some() {
            Status::Failed
        } else {
            Status::Passed
        }
    }
}

/// Outcome of a single test case.
///
/// Variant order is the table order: failures are listed first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Status {
    Failed,
    Passed,
}

impl Status {
    pub fn label(self) -> &'static str {
        match self {
            Status::Failed => FAILED_LABEL,
            Status::Passed => PASSED_LABEL,
        }
    }
}

/// One table row, derived from a test case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub suite: String,
    pub case: String,
    pub time: String,
    pub status: Status,
}

/// Aggregated view of a whole report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSummary {
    pub time: String,
    pub timestamp: String,
    pub rows: Vec<ReportRow>,
    pub passes: usize,
    pub failures: usize,
    pub ok: bool,
}
