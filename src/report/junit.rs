use super::error::{FormatError, ReportError};
use super::types::{TestCase, TestDocument, TestSuite};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::io::Read;

/// Element currently open in the document
#[derive(Debug, Clone, Copy, PartialEq)]
enum Frame {
    Root,
    Suite,
    Case,
    Failure,
    Other,
}

/// Read a JUnit XML report from a byte stream
pub fn read_report<R: Read>(mut input: R) -> Result<TestDocument, ReportError> {
    let mut data = Vec::new();
    input
        .read_to_end(&mut data)
        .map_err(|e| ReportError::input("failed to read report file", e))?;

    Ok(parse_junit_xml(&data)?)
}

/// Parse JUnit XML into a [`TestDocument`]
///
/// Only `<testsuite>` children of the `<testsuites>` root, `<testcase>`
/// children of a suite and `<failure>` children of a case are recognized.
/// Everything else, including look-alikes nested deeper, is skipped.
pub fn parse_junit_xml(data: &[u8]) -> Result<TestDocument, FormatError> {
    let mut reader = Reader::from_reader(data);
    reader.trim_text(true);

    let mut builder = DocumentBuilder::default();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => {
                builder.open(e)?;
            }
            Event::Empty(ref e) => {
                builder.open(e)?;
                if builder.close() {
                    break;
                }
            }
            Event::End(_) => {
                if builder.close() {
                    break;
                }
            }
            Event::Text(ref e) => {
                let text = e.unescape()?;
                if builder.in_failure() {
                    builder.push_failure_text(&text);
                }
            }
            Event::CData(ref e) => {
                if builder.in_failure() {
                    builder.push_failure_text(&String::from_utf8_lossy(e));
                }
            }
            Event::Eof => return Err(builder.unexpected_eof()),
            _ => {}
        }
        buf.clear();
    }

    Ok(builder.doc)
}

#[derive(Default)]
struct DocumentBuilder {
    doc: TestDocument,
    stack: Vec<(Frame, String)>,
    suite: Option<TestSuite>,
    case: Option<TestCase>,
}

impl DocumentBuilder {
    fn open(&mut self, e: &BytesStart) -> Result<(), FormatError> {
        let parent = self.stack.last().map(|(frame, _)| *frame);
        let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
        check_attributes(e)?;

        let frame = match (parent, e.local_name().as_ref()) {
            (None, b"testsuites") => {
                self.doc.time = attribute(e, b"time")?;
                self.doc.timestamp = attribute(e, b"timestamp")?;
                Frame::Root
            }
            (None, _) => return Err(FormatError::UnexpectedRoot(name)),
            (Some(Frame::Root), b"testsuite") => {
                self.suite = Some(TestSuite {
                    name: attribute(e, b"name")?,
                    cases: Vec::new(),
                });
                Frame::Suite
            }
            (Some(Frame::Suite), b"testcase") => {
                self.case = Some(TestCase {
                    name: attribute(e, b"name")?,
                    time: attribute(e, b"time")?,
                    failure: None,
                });
                Frame::Case
            }
            (Some(Frame::Case), b"failure") => {
                if let Some(case) = self.case.as_mut() {
                    case.failure.get_or_insert_with(String::new);
                }
                Frame::Failure
            }
            _ => Frame::Other,
        };

        self.stack.push((frame, name));
        Ok(())
    }

    /// Close the innermost element. Returns true once the root is closed.
    fn close(&mut self) -> bool {
        match self.stack.pop().map(|(frame, _)| frame) {
            Some(Frame::Root) => return true,
            Some(Frame::Suite) => {
                if let Some(suite) = self.suite.take() {
                    self.doc.suites.push(suite);
                }
            }
            Some(Frame::Case) => {
                if let (Some(case), Some(suite)) = (self.case.take(), self.suite.as_mut()) {
                    suite.cases.push(case);
                }
            }
            _ => {}
        }
        false
    }

    fn in_failure(&self) -> bool {
        matches!(self.stack.last(), Some((Frame::Failure, _)))
    }

    fn push_failure_text(&mut self, text: &str) {
        if let Some(failure) = self.case.as_mut().and_then(|c| c.failure.as_mut()) {
            failure.push_str(text);
        }
    }

    fn unexpected_eof(&self) -> FormatError {
        match self.stack.last() {
            Some((_, name)) => FormatError::UnclosedElement(name.clone()),
            None => FormatError::MissingRoot,
        }
    }
}

/// Reject malformed attributes on any element, recognized or not
fn check_attributes(e: &BytesStart) -> Result<(), FormatError> {
    for attr in e.attributes() {
        attr?.unescape_value()?;
    }
    Ok(())
}

/// Unescaped value of an attribute, or "" when absent
fn attribute(e: &BytesStart, key: &[u8]) -> Result<String, FormatError> {
    for attr in e.attributes() {
        let attr = attr?;
        if attr.key.local_name().as_ref() == key {
            return Ok(attr.unescape_value()?.into_owned());
        }
    }
    Ok(String::new())
}
