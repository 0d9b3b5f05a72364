//! The response fields shared by every Label Server operation.

use serde::Serialize;

use crate::error::{Error, Result};

/// Maximum length of the echoed requester id.
const MAX_REQUESTER_ID_LEN: usize = 4;

/// Maximum length of the echoed request id.
const MAX_REQUEST_ID_LEN: usize = 50;

/// Maximum length of the error message.
const MAX_ERROR_MESSAGE_LEN: usize = 150;

/// The envelope common to every carrier response.
///
/// A status code of 0 means success; any other value is a carrier error
/// code accompanied by an error message. The requester and request ids are
/// echoed back from the request when the carrier includes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResponseEnvelope {
    requester_id: Option<String>,
    request_id: Option<String>,
    status: i32,
    error_message: String,
}

impl ResponseEnvelope {
    /// Creates an envelope from a parsed status code. The error message
    /// defaults to empty.
    #[must_use]
    pub fn new(status: i32) -> Self {
        Self {
            requester_id: None,
            request_id: None,
            status,
            error_message: String::new(),
        }
    }

    /// Sets the echoed requester id; 1 to 4 characters.
    pub fn set_requester_id(&mut self, requester_id: impl Into<String>) -> Result<()> {
        let requester_id = requester_id.into();
        if requester_id.is_empty() {
            return Err(Error::invalid("Requester ID cannot be empty"));
        }
        if requester_id.len() > MAX_REQUESTER_ID_LEN {
            return Err(Error::invalid("Requester ID must be 4 characters."));
        }
        self.requester_id = Some(requester_id);
        Ok(())
    }

    /// Returns the echoed requester id.
    #[must_use]
    pub fn requester_id(&self) -> Option<&str> {
        self.requester_id.as_deref()
    }

    /// Sets the echoed request id; 1 to 50 characters.
    pub fn set_request_id(&mut self, request_id: impl Into<String>) -> Result<()> {
        let request_id = request_id.into();
        if request_id.is_empty() {
            return Err(Error::invalid("Request id cannot be empty."));
        }
        if request_id.len() > MAX_REQUEST_ID_LEN {
            return Err(Error::invalid("Request id must be 50 or fewer characters."));
        }
        self.request_id = Some(request_id);
        Ok(())
    }

    /// Returns the echoed request id.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// Sets the status code.
    pub fn set_status(&mut self, status: i32) {
        self.status = status;
    }

    /// Returns the status code; 0 means success.
    #[must_use]
    pub fn status(&self) -> i32 {
        self.status
    }

    /// True when the status code is 0.
    #[must_use]
    pub fn is_successful(&self) -> bool {
        self.status == 0
    }

    /// Sets the error message; at most 150 characters.
    pub fn set_error_message(&mut self, error_message: impl Into<String>) -> Result<()> {
        let error_message = error_message.into();
        if error_message.len() > MAX_ERROR_MESSAGE_LEN {
            return Err(Error::invalid(
                "Error message must be 150 or fewer characters.",
            ));
        }
        self.error_message = error_message;
        Ok(())
    }

    /// Returns the error message; empty when the carrier supplied none.
    #[must_use]
    pub fn error_message(&self) -> &str {
        &self.error_message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_report_success_only_for_status_zero() {
        assert!(ResponseEnvelope::new(0).is_successful());
        assert!(!ResponseEnvelope::new(1).is_successful());
        assert!(!ResponseEnvelope::new(-1).is_successful());
    }

    #[test]
    fn test_should_bound_requester_id() {
        let mut envelope = ResponseEnvelope::new(0);
        assert!(envelope.set_requester_id("lxxx").is_ok());
        assert!(envelope.set_requester_id("").is_err());
        assert!(envelope.set_requester_id("12345").is_err());
    }

    #[test]
    fn test_should_bound_request_id() {
        let mut envelope = ResponseEnvelope::new(0);
        assert!(envelope.set_request_id("r".repeat(50)).is_ok());
        assert!(envelope.set_request_id("r".repeat(51)).is_err());
        assert!(envelope.set_request_id("").is_err());
    }

    #[test]
    fn test_should_bound_error_message() {
        let mut envelope = ResponseEnvelope::new(12);
        assert!(envelope.set_error_message("e".repeat(150)).is_ok());
        assert!(envelope.set_error_message("e".repeat(151)).is_err());
        assert_eq!(ResponseEnvelope::new(12).error_message(), "");
    }
}
