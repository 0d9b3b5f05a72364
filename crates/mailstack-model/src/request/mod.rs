//! Request types, one per Label Server operation.
//!
//! Every request shares the header fields the carrier expects on all
//! operations: the requester id (partner id), a per-request unique id, and
//! the postage-account credential. The header is composed into each
//! concrete type; [`RequestHeader::request_id`] generates the id lazily on
//! first access and caches it for the life of the request, so serializing
//! the same request twice produces identical documents.

mod change_passphrase;
mod get_postage_label;
mod label;
mod postage_rate;
mod postage_rates;
mod recredit;
mod reset_suspended_account;
mod user_signup;

pub use change_passphrase::ChangePassPhraseRequest;
pub use get_postage_label::GetPostageLabelRequest;
pub use label::LabelRequest;
pub use postage_rate::PostageRateRequest;
pub use postage_rates::PostageRatesRequest;
pub use recredit::RecreditRequest;
pub use reset_suspended_account::ResetSuspendedAccountRequest;
pub use user_signup::UserSignupRequest;

use std::sync::OnceLock;

use uuid::Uuid;

use crate::credential::CertifiedIntermediary;

/// Fields common to every authenticated request.
#[derive(Debug, Clone)]
pub struct RequestHeader {
    requester_id: String,
    request_id: OnceLock<String>,
    credential: CertifiedIntermediary,
}

impl RequestHeader {
    /// Creates a header from a requester id and credential.
    #[must_use]
    pub fn new(requester_id: impl Into<String>, credential: CertifiedIntermediary) -> Self {
        Self {
            requester_id: requester_id.into(),
            request_id: OnceLock::new(),
            credential,
        }
    }

    /// Returns the requester id (partner id) of the entity making the
    /// request. This identifies the calling application, as distinct from
    /// the account billed for the activity.
    #[must_use]
    pub fn requester_id(&self) -> &str {
        &self.requester_id
    }

    /// Replaces the requester id.
    pub fn set_requester_id(&mut self, requester_id: impl Into<String>) {
        self.requester_id = requester_id.into();
    }

    /// Returns the unique id of this request.
    ///
    /// Generated on first access and stable thereafter; the carrier echoes
    /// it back in the response so requests and responses can be correlated.
    /// Safe to call from multiple threads.
    pub fn request_id(&self) -> &str {
        self.request_id
            .get_or_init(|| Uuid::new_v4().simple().to_string())
    }

    /// Returns the credential used to authenticate the request.
    #[must_use]
    pub fn credential(&self) -> &CertifiedIntermediary {
        &self.credential
    }

    /// Replaces the credential.
    pub fn set_credential(&mut self, credential: CertifiedIntermediary) {
        self.credential = credential;
    }
}

/// Delegates the shared header accessors from a concrete request type.
macro_rules! impl_request_header {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $ty {
                /// Returns the requester id (partner id).
                #[must_use]
                pub fn requester_id(&self) -> &str {
                    self.header.requester_id()
                }

                /// Replaces the requester id (partner id).
                pub fn set_requester_id(&mut self, requester_id: impl Into<String>) {
                    self.header.set_requester_id(requester_id);
                }

                /// Returns the unique id of this request, generated on
                /// first access and cached.
                pub fn request_id(&self) -> &str {
                    self.header.request_id()
                }

                /// Returns the credential charged for this request.
                #[must_use]
                pub fn credential(&self) -> &$crate::credential::CertifiedIntermediary {
                    self.header.credential()
                }

                /// Replaces the credential.
                pub fn set_credential(
                    &mut self,
                    credential: $crate::credential::CertifiedIntermediary,
                ) {
                    self.header.set_credential(credential);
                }
            }
        )+
    };
}

impl_request_header!(
    ChangePassPhraseRequest,
    GetPostageLabelRequest,
    LabelRequest,
    PostageRateRequest,
    PostageRatesRequest,
    RecreditRequest,
    UserSignupRequest,
);

/// Floor a weight to one decimal place (tenths of an ounce).
///
/// The carrier quotes rates on tenth-ounce increments and the original
/// client floors rather than rounds, so 11.29 becomes 11.2.
pub(crate) fn floor_to_tenths(weight: f64) -> f64 {
    (weight * 10.0).floor() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_generate_request_id_once() {
        let header = RequestHeader::new(
            "lxxx",
            CertifiedIntermediary::from_credentials("123456", "secret").unwrap(),
        );
        let first = header.request_id().to_owned();
        let second = header.request_id().to_owned();
        assert_eq!(first, second);
        assert!(!first.is_empty());
        assert!(first.len() <= 50);
    }

    #[test]
    fn test_should_generate_distinct_ids_across_requests() {
        let credential = CertifiedIntermediary::from_credentials("123456", "secret").unwrap();
        let a = RequestHeader::new("lxxx", credential.clone());
        let b = RequestHeader::new("lxxx", credential);
        assert_ne!(a.request_id(), b.request_id());
    }

    #[test]
    fn test_should_floor_weight_to_tenths() {
        assert!((floor_to_tenths(11.29) - 11.2).abs() < f64::EPSILON);
        assert!((floor_to_tenths(11.2) - 11.2).abs() < f64::EPSILON);
        assert!((floor_to_tenths(15.0) - 15.0).abs() < f64::EPSILON);
    }
}
