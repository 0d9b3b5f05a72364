//! Error type for XML serialization and parsing.

use std::io;

/// Errors from the XML wire layer.
#[derive(Debug, thiserror::Error)]
pub enum XmlError {
    /// An I/O error during XML writing.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// An error from the underlying quick-xml library.
    #[error("XML processing error: {0}")]
    QuickXml(#[from] quick_xml::Error),

    /// An error from quick-xml attribute handling.
    #[error("XML attribute error: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),

    /// A malformed response document, with the parser context prepended
    /// and the library failure preserved as the cause.
    #[error("{context}: {source}")]
    Malformed {
        /// What was being parsed when the failure occurred.
        context: String,
        /// The underlying quick-xml failure.
        #[source]
        source: quick_xml::Error,
    },

    /// A domain validation rule was violated by a parsed value.
    #[error(transparent)]
    Invalid(#[from] mailstack_model::Error),

    /// A required XML element was missing.
    #[error("missing required XML element: {0}")]
    MissingElement(String),

    /// An unexpected XML element was encountered.
    #[error("unexpected XML element: {0}")]
    UnexpectedElement(String),

    /// An error parsing a value from XML text content.
    #[error("failed to parse value: {0}")]
    ParseError(String),
}

impl XmlError {
    /// Wraps a quick-xml failure with parser context.
    pub fn malformed(context: impl Into<String>, source: quick_xml::Error) -> Self {
        Self::Malformed {
            context: context.into(),
            source,
        }
    }
}
