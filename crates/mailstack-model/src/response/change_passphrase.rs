//! Response to a pass-phrase change request.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::response::ResponseEnvelope;

/// Maximum length of an issued security token.
const MAX_TOKEN_LEN: usize = 50;

/// Response to a [`crate::request::ChangePassPhraseRequest`].
///
/// When the request asked for a security token and succeeded, the token is
/// present and can be used in place of the account id and pass phrase on
/// subsequent requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangePassPhraseRequestResponse {
    pub(crate) envelope: ResponseEnvelope,
    token: Option<String>,
}

impl ChangePassPhraseRequestResponse {
    /// Wraps a parsed envelope; the token is filled in by the XML layer.
    #[must_use]
    pub fn from_envelope(envelope: ResponseEnvelope) -> Self {
        Self {
            envelope,
            token: None,
        }
    }

    /// Sets the issued security token; 1 to 50 characters.
    pub fn set_token(&mut self, token: impl Into<String>) -> Result<()> {
        let token = token.into();
        if token.is_empty() {
            return Err(Error::invalid("Token cannot be empty."));
        }
        if token.len() > MAX_TOKEN_LEN {
            return Err(Error::invalid("Token must be 50 or fewer characters"));
        }
        self.token = Some(token);
        Ok(())
    }

    /// Returns the issued security token, when one was requested.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_bound_token_length() {
        let mut response = ChangePassPhraseRequestResponse::from_envelope(ResponseEnvelope::new(0));
        assert!(response.set_token("t".repeat(50)).is_ok());
        assert!(response.set_token("t".repeat(51)).is_err());
        assert!(response.set_token("").is_err());
    }
}
