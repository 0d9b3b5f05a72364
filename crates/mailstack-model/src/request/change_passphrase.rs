//! Request to change a postage account's pass phrase.

use crate::credential::CertifiedIntermediary;
use crate::error::{Error, Result};
use crate::request::RequestHeader;

/// Maximum length of the new pass phrase.
const MAX_PASS_PHRASE_LEN: usize = 64;

/// Changes a postage account's pass phrase.
///
/// The new pass phrase must be 1 to 64 characters. When `token_requested`
/// is set, the carrier also returns a security token that can replace the
/// account id and pass phrase on subsequent requests.
#[derive(Debug, Clone)]
pub struct ChangePassPhraseRequest {
    pub(crate) header: RequestHeader,
    new_pass_phrase: String,
    token_requested: bool,
}

impl ChangePassPhraseRequest {
    /// Creates a new pass-phrase change request.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the new pass phrase is empty
    /// or longer than 64 characters.
    pub fn new(
        requester_id: impl Into<String>,
        credential: CertifiedIntermediary,
        new_pass_phrase: impl Into<String>,
        token_requested: bool,
    ) -> Result<Self> {
        let mut request = Self {
            header: RequestHeader::new(requester_id, credential),
            new_pass_phrase: String::new(),
            token_requested,
        };
        request.set_new_pass_phrase(new_pass_phrase)?;
        Ok(request)
    }

    /// Sets the new pass phrase; 1 to 64 characters.
    pub fn set_new_pass_phrase(&mut self, new_pass_phrase: impl Into<String>) -> Result<()> {
        let new_pass_phrase = new_pass_phrase.into();
        if new_pass_phrase.is_empty() {
            return Err(Error::invalid("New pass phrase cannot be empty."));
        }
        if new_pass_phrase.len() > MAX_PASS_PHRASE_LEN {
            return Err(Error::invalid(
                "New pass phrase cannot be longer than 64 characters.",
            ));
        }
        self.new_pass_phrase = new_pass_phrase;
        Ok(())
    }

    /// Returns the new pass phrase.
    #[must_use]
    pub fn new_pass_phrase(&self) -> &str {
        &self.new_pass_phrase
    }

    /// Sets whether the response should include a security token.
    pub fn set_token_requested(&mut self, token_requested: bool) {
        self.token_requested = token_requested;
    }

    /// True when a security token is requested in the response.
    #[must_use]
    pub fn token_requested(&self) -> bool {
        self.token_requested
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credential() -> CertifiedIntermediary {
        CertifiedIntermediary::from_credentials("123456", "secret").unwrap()
    }

    #[test]
    fn test_should_accept_boundary_pass_phrase_lengths() {
        assert!(ChangePassPhraseRequest::new("lxxx", credential(), "x", false).is_ok());
        assert!(ChangePassPhraseRequest::new("lxxx", credential(), "x".repeat(64), false).is_ok());
    }

    #[test]
    fn test_should_reject_empty_pass_phrase() {
        let err = ChangePassPhraseRequest::new("lxxx", credential(), "", false).unwrap_err();
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn test_should_reject_long_pass_phrase() {
        let err =
            ChangePassPhraseRequest::new("lxxx", credential(), "x".repeat(65), false).unwrap_err();
        assert!(err.to_string().contains("64"));
    }
}
