//! Error types for the MailStack domain model.

/// Error raised when a domain invariant is violated.
///
/// The carrier API surface has a single failure mode at this layer: a value
/// that does not satisfy its documented bounds (empty required field,
/// out-of-range amount, unrecognized enumeration value). The message is the
/// human-readable description of the violated rule.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A field value violated its validation rule.
    #[error("{0}")]
    InvalidArgument(String),
}

impl Error {
    /// Build an [`Error::InvalidArgument`] from any message.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

/// Convenience result type for model operations.
pub type Result<T> = std::result::Result<T, Error>;
