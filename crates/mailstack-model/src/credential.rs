//! Postage-account credentials.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Maximum length of a postage account id.
const MAX_ACCOUNT_ID_LEN: usize = 7;

/// Maximum length of an account pass phrase.
const MAX_PASS_PHRASE_LEN: usize = 64;

/// Maximum length of a security token.
const MAX_TOKEN_LEN: usize = 150;

/// Credentials identifying the postage account charged for a request.
///
/// The carrier calls this the *Certified Intermediary*. A request is
/// authenticated either by an account id plus pass phrase, or by a security
/// token previously issued by the carrier. The two forms are mutually
/// exclusive, which the enum encodes directly: there is no way to construct
/// a value carrying both, or neither.
///
/// Use [`CertifiedIntermediary::from_credentials`] or
/// [`CertifiedIntermediary::from_token`]; both validate the carrier's length
/// bounds before returning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CertifiedIntermediary {
    /// Account id and pass phrase pair.
    Credentials {
        /// The postage account id, 1 to 7 characters.
        account_id: String,
        /// The account pass phrase, 1 to 64 characters.
        pass_phrase: String,
    },
    /// A security token issued in place of account credentials.
    Token(String),
}

impl CertifiedIntermediary {
    /// Creates credentials from an account id and pass phrase.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the account id is empty or
    /// longer than 7 characters, or the pass phrase is empty or longer
    /// than 64 characters.
    pub fn from_credentials(
        account_id: impl Into<String>,
        pass_phrase: impl Into<String>,
    ) -> Result<Self> {
        let account_id = account_id.into();
        let pass_phrase = pass_phrase.into();

        if account_id.is_empty() {
            return Err(Error::invalid("AccountID cannot be empty."));
        }
        if account_id.len() > MAX_ACCOUNT_ID_LEN {
            return Err(Error::invalid("AccountID must be 7 or fewer characters."));
        }
        if pass_phrase.is_empty() {
            return Err(Error::invalid("Passphrase cannot be empty."));
        }
        if pass_phrase.len() > MAX_PASS_PHRASE_LEN {
            return Err(Error::invalid("Passphrase must be <= 64 characters."));
        }

        Ok(Self::Credentials {
            account_id,
            pass_phrase,
        })
    }

    /// Creates credentials from a security token.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the token is empty or longer
    /// than 150 characters.
    pub fn from_token(token: impl Into<String>) -> Result<Self> {
        let token = token.into();

        if token.is_empty() {
            return Err(Error::invalid("Token cannot be empty."));
        }
        if token.len() > MAX_TOKEN_LEN {
            return Err(Error::invalid("Token must be <= 150 characters."));
        }

        Ok(Self::Token(token))
    }

    /// Returns the account id, or `None` when token-authenticated.
    #[must_use]
    pub fn account_id(&self) -> Option<&str> {
        match self {
            Self::Credentials { account_id, .. } => Some(account_id),
            Self::Token(_) => None,
        }
    }

    /// Returns the pass phrase, or `None` when token-authenticated.
    #[must_use]
    pub fn pass_phrase(&self) -> Option<&str> {
        match self {
            Self::Credentials { pass_phrase, .. } => Some(pass_phrase),
            Self::Token(_) => None,
        }
    }

    /// Returns the security token, or `None` when using account credentials.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        match self {
            Self::Credentials { .. } => None,
            Self::Token(token) => Some(token),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_create_from_valid_credentials() {
        let ci = CertifiedIntermediary::from_credentials("1234567", "secret").expect("valid");
        assert_eq!(ci.account_id(), Some("1234567"));
        assert_eq!(ci.pass_phrase(), Some("secret"));
        assert_eq!(ci.token(), None);
    }

    #[test]
    fn test_should_reject_empty_account_id() {
        let err = CertifiedIntermediary::from_credentials("", "secret").unwrap_err();
        assert!(err.to_string().contains("AccountID"));
    }

    #[test]
    fn test_should_reject_long_account_id() {
        let err = CertifiedIntermediary::from_credentials("12345678", "secret").unwrap_err();
        assert!(err.to_string().contains("7 or fewer"));
    }

    #[test]
    fn test_should_reject_long_pass_phrase() {
        let err = CertifiedIntermediary::from_credentials("1234567", "a".repeat(65)).unwrap_err();
        assert!(err.to_string().contains("64"));
    }

    #[test]
    fn test_should_accept_boundary_pass_phrase() {
        assert!(CertifiedIntermediary::from_credentials("1234567", "a".repeat(64)).is_ok());
    }

    #[test]
    fn test_should_create_from_valid_token() {
        let ci = CertifiedIntermediary::from_token("t".repeat(150)).expect("valid");
        assert!(ci.token().is_some());
        assert_eq!(ci.account_id(), None);
        assert_eq!(ci.pass_phrase(), None);
    }

    #[test]
    fn test_should_reject_empty_token() {
        assert!(CertifiedIntermediary::from_token("").is_err());
    }

    #[test]
    fn test_should_reject_long_token() {
        assert!(CertifiedIntermediary::from_token("t".repeat(151)).is_err());
    }
}
