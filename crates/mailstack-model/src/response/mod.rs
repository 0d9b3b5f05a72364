//! Response types, one per Label Server operation.
//!
//! Every carrier response shares a common envelope: a status code (0 for
//! success), the echoed requester and request ids, and an error message.
//! Concrete payloads are populated by the XML layer only when the envelope
//! reports success; a failed response carries the envelope alone.

mod change_passphrase;
mod envelope;
mod label;
mod postage_rate;
mod postage_rates;
mod recredit;
mod reset_suspended_account;
mod user_signup;

pub use change_passphrase::ChangePassPhraseRequestResponse;
pub use envelope::ResponseEnvelope;
pub use label::LabelRequestResponse;
pub use postage_rate::{
    Fees, GroupedExtraServices, Postage, PostagePrice, PostageRateRequestResponse, RatedPostage,
};
pub use postage_rates::PostageRatesRequestResponse;
pub use recredit::{AccountSummary, RecreditRequestResponse};
pub use reset_suspended_account::ResetSuspendedAccountResponse;
pub use user_signup::UserSignupRequestResponse;

/// Delegates the shared envelope accessors from a concrete response type.
macro_rules! impl_response_envelope {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $ty {
                /// Returns the shared response envelope.
                #[must_use]
                pub fn envelope(&self) -> &$crate::response::ResponseEnvelope {
                    &self.envelope
                }

                /// True when the carrier reported status 0.
                #[must_use]
                pub fn is_successful(&self) -> bool {
                    self.envelope.is_successful()
                }

                /// Returns the status code; 0 means success.
                #[must_use]
                pub fn status(&self) -> i32 {
                    self.envelope.status()
                }

                /// Returns the error message; empty on success.
                #[must_use]
                pub fn error_message(&self) -> &str {
                    self.envelope.error_message()
                }

                /// Returns the echoed requester id, when present.
                #[must_use]
                pub fn requester_id(&self) -> Option<&str> {
                    self.envelope.requester_id()
                }

                /// Returns the echoed request id, when present.
                #[must_use]
                pub fn request_id(&self) -> Option<&str> {
                    self.envelope.request_id()
                }
            }
        )+
    };
}

impl_response_envelope!(
    ChangePassPhraseRequestResponse,
    LabelRequestResponse,
    PostageRateRequestResponse,
    PostageRatesRequestResponse,
    RecreditRequestResponse,
    ResetSuspendedAccountResponse,
    UserSignupRequestResponse,
);
