use super::types::{ReportRow, ReportSummary, Status, TestDocument};

impl ReportSummary {
    /// Flatten a parsed document into table rows and tally the outcomes.
    ///
    /// Rows follow document order: suites first, then cases within a suite.
    pub fn from_document(doc: &TestDocument) -> Self {
        let rows: Vec<ReportRow> = doc
            .suites
            .iter()
            .flat_map(|suite| {
                suite.cases.iter().map(move |case| ReportRow {
                    suite: suite.name.clone(),
                    case: case.name.clone(),
                    time: case.time.clone(),
                    status: case.status(),
                })
            })
            .collect();

        let failures = rows.iter().filter(|r| r.status == Status::Failed).count();
        let passes = rows.iter().filter(|r| r.status == Status::Passed).count();

        Self {
            time: doc.time.clone(),
            timestamp: doc.timestamp.clone(),
            rows,
            passes,
            failures,
            ok: failures == 0,
        }
    }

    /// Rows grouped by status, failures first.
    ///
    /// The sort is stable, so rows sharing a status keep document order.
    pub fn sorted_rows(&self) -> Vec<&ReportRow> {
        let mut rows: Vec<&ReportRow> = self.rows.iter().collect();
        rows.sort_by_key(|row| row.status);
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::types::{TestCase, TestSuite};

    fn case(name: &str, failed: bool) -> TestCase {
        TestCase {
            name: name.to_string(),
            time: "0.1".to_string(),
            failure: failed.then(String::new),
        }
    }

    fn suite(name: &str, cases: Vec<TestCase>) -> TestSuite {
        TestSuite {
            name: name.to_string(),
            cases,
        }
    }

    #[test]
    fn test_single_passing_case() {
        let doc = TestDocument {
            time: "0.5".to_string(),
            timestamp: "2024-05-01T10:00:00Z".to_string(),
            suites: vec![suite("smoke", vec![case("boot", false)])],
        };

        let summary = ReportSummary::from_document(&doc);
        assert_eq!(summary.passes, 1);
        assert_eq!(summary.failures, 0);
        assert!(summary.ok);
        assert_eq!(summary.time, "0.5");
        assert_eq!(summary.timestamp, "2024-05-01T10:00:00Z");
        assert_eq!(
            summary.rows[0],
            ReportRow {
                suite: "smoke".to_string(),
                case: "boot".to_string(),
                time: "0.1".to_string(),
                status: Status::Passed,
            }
        );
    }

    #[test]
    fn test_single_failing_case() {
        let doc = TestDocument {
            suites: vec![suite("smoke", vec![case("boot", true)])],
            ..Default::default()
        };

        let summary = ReportSummary::from_document(&doc);
        assert_eq!(summary.passes, 0);
        assert_eq!(summary.failures, 1);
        assert!(!summary.ok);
    }

    #[test]
    fn test_rows_follow_document_order() {
        let doc = TestDocument {
            suites: vec![
                suite("a", vec![case("a1", false), case("a2", true)]),
                suite("empty", vec![]),
                suite("b", vec![case("b1", true), case("b2", false)]),
            ],
            ..Default::default()
        };

        let summary = ReportSummary::from_document(&doc);
        assert_eq!(summary.rows.len(), doc.case_count());
        let names: Vec<&str> = summary.rows.iter().map(|r| r.case.as_str()).collect();
        assert_eq!(names, vec!["a1", "a2", "b1", "b2"]);
        assert_eq!(summary.passes, 2);
        assert_eq!(summary.failures, 2);
        assert!(!summary.ok);
    }

    #[test]
    fn test_status_ignores_name_and_time() {
        let doc = TestDocument {
            suites: vec![suite(
                "s",
                vec![
                    TestCase {
                        name: ":x: Failed".to_string(),
                        time: "failure".to_string(),
                        failure: None,
                    },
                    TestCase {
                        name: ":white_check_mark: Passed".to_string(),
                        time: "".to_string(),
                        failure: Some("boom".to_string()),
                    },
                ],
            )],
            ..Default::default()
        };

        let summary = ReportSummary::from_document(&doc);
        assert_eq!(summary.rows[0].status, Status::Passed);
        assert_eq!(summary.rows[1].status, Status::Failed);
    }

    #[test]
    fn test_empty_document_is_ok() {
        let summary = ReportSummary::from_document(&TestDocument::default());
        assert!(summary.rows.is_empty());
        assert_eq!(summary.passes, 0);
        assert_eq!(summary.failures, 0);
        assert!(summary.ok);
    }

    #[test]
    fn test_sorted_rows_group_failures_first() {
        let doc = TestDocument {
            suites: vec![
                suite("a", vec![case("a1", false), case("a2", true)]),
                suite("b", vec![case("b1", false), case("b2", true)]),
            ],
            ..Default::default()
        };

        let summary = ReportSummary::from_document(&doc);
        let sorted: Vec<&str> = summary
            .sorted_rows()
            .iter()
            .map(|r| r.case.as_str())
            .collect();
        assert_eq!(sorted, vec!["a2", "b2", "a1", "b1"]);
        // Sorting never reorders the summary itself
        assert_eq!(summary.rows[0].case, "a1");
    }
}
