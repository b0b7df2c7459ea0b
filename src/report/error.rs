use std::io;
use thiserror::Error;

/// Errors that abort report generation
#[derive(Debug, Error)]
pub enum ReportError {
    /// Input could not be opened or read, or the output sink failed
    #[error("{context}: {source}")]
    Input {
        context: String,
        #[source]
        source: io::Error,
    },

    /// Input is not a well-formed JUnit document
    #[error("failed to unmarshal XML: {0}")]
    Format(#[from] FormatError),
}

impl ReportError {
    pub fn input(context: impl Into<String>, source: io::Error) -> Self {
        ReportError::Input {
            context: context.into(),
            source,
        }
    }
}

/// Reasons a document does not match the expected JUnit shape
#[derive(Debug, Error)]
pub enum FormatError {
    #[error(transparent)]
    Xml(#[from] quick_xml::Error),

    #[error("expected element type <testsuites> but have <{0}>")]
    UnexpectedRoot(String),

    #[error("no root element found")]
    MissingRoot,

    #[error("unexpected end of document inside <{0}>")]
    UnclosedElement(String),
}

impl From<quick_xml::events::attributes::AttrError> for FormatError {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        FormatError::Xml(err.into())
    }
}
