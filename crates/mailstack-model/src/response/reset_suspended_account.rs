//! Response to a suspended-account reset: the envelope alone.

use serde::Serialize;

use crate::response::ResponseEnvelope;

/// Response to a [`crate::request::ResetSuspendedAccountRequest`].
///
/// The reset operation reports only success or failure; there is no
/// payload beyond the shared envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResetSuspendedAccountResponse {
    pub(crate) envelope: ResponseEnvelope,
}

impl ResetSuspendedAccountResponse {
    /// Wraps a parsed envelope.
    #[must_use]
    pub fn from_envelope(envelope: ResponseEnvelope) -> Self {
        Self { envelope }
    }
}
