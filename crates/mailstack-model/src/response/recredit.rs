//! Response to a recredit request, with the account-status block.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::response::ResponseEnvelope;

/// Maximum length of the account id.
const MAX_ACCOUNT_ID_LEN: usize = 7;

/// Maximum length of the item serial number.
const MAX_SERIAL_NUMBER_LEN: usize = 12;

/// Required length of the device id.
const DEVICE_ID_LEN: usize = 12;

/// Account status returned by a successful recredit.
///
/// The carrier nests this under a `CertifiedIntermediary` element, reusing
/// the name of the credential block; it is a different shape entirely: the
/// account id, the serial number of the last item created, the postage and
/// ascending balances after the recredit, the account status flag, and the
/// device id printed in the indicium.
///
/// All fields are required and validated; the status flag must be the
/// literal `"A"` (active). Any other value, including other status letters
/// the carrier has been seen to return, is intentionally rejected.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountSummary {
    account_id: String,
    serial_number: String,
    postage_balance: f64,
    ascending_balance: f64,
    account_status: String,
    device_id: String,
}

impl AccountSummary {
    /// Creates an account summary, validating each field in the order the
    /// carrier documents them.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] naming the first invalid field.
    pub fn new(
        account_id: impl Into<String>,
        serial_number: impl Into<String>,
        postage_balance: f64,
        ascending_balance: f64,
        account_status: impl Into<String>,
        device_id: impl Into<String>,
    ) -> Result<Self> {
        let account_id = account_id.into();
        if account_id.is_empty() {
            return Err(Error::invalid("Account ID is required."));
        }
        if account_id.len() > MAX_ACCOUNT_ID_LEN {
            return Err(Error::invalid(
                "Account ID must be 7 or fewer characters in length.",
            ));
        }

        let serial_number = serial_number.into();
        if serial_number.is_empty() || !serial_number.chars().all(|c| c.is_ascii_digit()) {
            return Err(Error::invalid("Serial Number must be numeric."));
        }
        if serial_number.len() > MAX_SERIAL_NUMBER_LEN {
            return Err(Error::invalid(
                "Serial Number must be 12 or fewer characters.",
            ));
        }

        let account_status = account_status.into();
        if account_status != "A" {
            return Err(Error::invalid(format!(
                "Invalid Account Status: {account_status}. Value must always be \"A\""
            )));
        }

        let device_id = device_id.into();
        if device_id.len() != DEVICE_ID_LEN {
            return Err(Error::invalid("Device ID must be 12 characters."));
        }

        Ok(Self {
            account_id,
            serial_number,
            postage_balance,
            ascending_balance,
            account_status,
            device_id,
        })
    }

    /// Returns the postage account id.
    #[must_use]
    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    /// Returns the serial number of the last item created on the account.
    #[must_use]
    pub fn serial_number(&self) -> &str {
        &self.serial_number
    }

    /// Returns the remaining postage balance after the recredit.
    #[must_use]
    pub fn postage_balance(&self) -> f64 {
        self.postage_balance
    }

    /// Returns the total postage printed (after the recredit).
    #[must_use]
    pub fn ascending_balance(&self) -> f64 {
        self.ascending_balance
    }

    /// Returns the account status flag; always `"A"`.
    #[must_use]
    pub fn account_status(&self) -> &str {
        &self.account_status
    }

    /// Returns the 12-character device id printed in the indicium.
    #[must_use]
    pub fn device_id(&self) -> &str {
        &self.device_id
    }
}

/// Response to a [`crate::request::RecreditRequest`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecreditRequestResponse {
    pub(crate) envelope: ResponseEnvelope,
    certified_intermediary: Option<AccountSummary>,
}

impl RecreditRequestResponse {
    /// Wraps a parsed envelope; the account summary is filled in by the
    /// XML layer on success.
    #[must_use]
    pub fn from_envelope(envelope: ResponseEnvelope) -> Self {
        Self {
            envelope,
            certified_intermediary: None,
        }
    }

    /// Sets the account-status block.
    pub fn set_certified_intermediary(&mut self, summary: AccountSummary) {
        self.certified_intermediary = Some(summary);
    }

    /// Returns the account-status block; present on success.
    #[must_use]
    pub fn certified_intermediary(&self) -> Option<&AccountSummary> {
        self.certified_intermediary.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(
        account_id: &str,
        serial: &str,
        status: &str,
        device: &str,
    ) -> Result<AccountSummary> {
        AccountSummary::new(account_id, serial, 512.5, 87.5, status, device)
    }

    #[test]
    fn test_should_accept_valid_summary() {
        let summary = summary("123456", "987654321", "A", "ABCDEF123456").expect("valid");
        assert_eq!(summary.account_id(), "123456");
        assert!((summary.postage_balance() - 512.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_should_reject_empty_account_id() {
        assert!(summary("", "987", "A", "ABCDEF123456").is_err());
    }

    #[test]
    fn test_should_reject_non_numeric_serial() {
        let err = summary("123456", "98a", "A", "ABCDEF123456").unwrap_err();
        assert!(err.to_string().contains("numeric"));
    }

    #[test]
    fn test_should_reject_long_serial() {
        assert!(summary("123456", "1".repeat(13).as_str(), "A", "ABCDEF123456").is_err());
    }

    #[test]
    fn test_should_reject_inactive_account_status() {
        for status in ["a", "S", "D", ""] {
            let err = summary("123456", "987", status, "ABCDEF123456").unwrap_err();
            assert!(err.to_string().contains("Account Status"));
        }
    }

    #[test]
    fn test_should_require_exactly_12_character_device_id() {
        assert!(summary("123456", "987", "A", "ABCDEF12345").is_err());
        assert!(summary("123456", "987", "A", "ABCDEF1234567").is_err());
    }
}
