//! Response to a new-account signup.

use serde::Serialize;

use crate::response::ResponseEnvelope;

/// Response to a [`crate::request::UserSignupRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserSignupRequestResponse {
    pub(crate) envelope: ResponseEnvelope,
    confirmation_number: Option<String>,
    account_id: Option<String>,
    token: Option<String>,
}

impl UserSignupRequestResponse {
    /// Wraps a parsed envelope; payload fields are filled in by the XML
    /// layer on success.
    #[must_use]
    pub fn from_envelope(envelope: ResponseEnvelope) -> Self {
        Self {
            envelope,
            confirmation_number: None,
            account_id: None,
            token: None,
        }
    }

    /// Sets the signup confirmation number.
    pub fn set_confirmation_number(&mut self, confirmation_number: impl Into<String>) {
        self.confirmation_number = Some(confirmation_number.into());
    }

    /// Returns the signup confirmation number.
    #[must_use]
    pub fn confirmation_number(&self) -> Option<&str> {
        self.confirmation_number.as_deref()
    }

    /// Sets the new account id.
    pub fn set_account_id(&mut self, account_id: impl Into<String>) {
        self.account_id = Some(account_id.into());
    }

    /// Returns the new account id, when the carrier assigned one.
    #[must_use]
    pub fn account_id(&self) -> Option<&str> {
        self.account_id.as_deref()
    }

    /// Sets the issued security token.
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    /// Returns the issued security token, when one was requested.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}
