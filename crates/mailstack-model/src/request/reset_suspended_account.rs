//! Request to reset a suspended postage account's pass phrase.

use std::sync::OnceLock;

use uuid::Uuid;

/// Resets a suspended account via its challenge answer.
///
/// This operation authenticates with the account id and the answer to the
/// account's challenge question; it carries no credential element on the
/// wire. A request id may be supplied explicitly (the carrier echoes it
/// back), otherwise one is generated on first access like every other
/// request.
#[derive(Debug, Clone)]
pub struct ResetSuspendedAccountRequest {
    requester_id: String,
    request_id: OnceLock<String>,
    account_id: String,
    challenge_answer: String,
    new_pass_phrase: String,
}

impl ResetSuspendedAccountRequest {
    /// Creates a new reset request.
    #[must_use]
    pub fn new(
        requester_id: impl Into<String>,
        account_id: impl Into<String>,
        challenge_answer: impl Into<String>,
        new_pass_phrase: impl Into<String>,
        request_id: Option<String>,
    ) -> Self {
        let id_cell = OnceLock::new();
        if let Some(id) = request_id {
            // Cell was just created, so this cannot already be set.
            let _ = id_cell.set(id);
        }
        Self {
            requester_id: requester_id.into(),
            request_id: id_cell,
            account_id: account_id.into(),
            challenge_answer: challenge_answer.into(),
            new_pass_phrase: new_pass_phrase.into(),
        }
    }

    /// Returns the requester id (partner id).
    #[must_use]
    pub fn requester_id(&self) -> &str {
        &self.requester_id
    }

    /// Replaces the requester id (partner id).
    pub fn set_requester_id(&mut self, requester_id: impl Into<String>) {
        self.requester_id = requester_id.into();
    }

    /// Returns the unique id of this request, generated on first access
    /// and cached.
    pub fn request_id(&self) -> &str {
        self.request_id
            .get_or_init(|| Uuid::new_v4().simple().to_string())
    }

    /// Returns the account id being reset.
    #[must_use]
    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    /// Returns the challenge answer on file for the account.
    #[must_use]
    pub fn challenge_answer(&self) -> &str {
        &self.challenge_answer
    }

    /// Returns the new pass phrase.
    #[must_use]
    pub fn new_pass_phrase(&self) -> &str {
        &self.new_pass_phrase
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_use_explicit_request_id_when_provided() {
        let request = ResetSuspendedAccountRequest::new(
            "lxxx",
            "123456",
            "first pet",
            "new phrase",
            Some("req-42".to_owned()),
        );
        assert_eq!(request.request_id(), "req-42");
    }

    #[test]
    fn test_should_generate_request_id_when_absent() {
        let request =
            ResetSuspendedAccountRequest::new("lxxx", "123456", "first pet", "new phrase", None);
        let id = request.request_id().to_owned();
        assert!(!id.is_empty());
        assert_eq!(request.request_id(), id);
    }
}
