//! Request to add funds to a postage account.

use crate::credential::CertifiedIntermediary;
use crate::error::{Error, Result};
use crate::request::RequestHeader;

/// Minimum credit purchasable in a single request, in US dollars.
const MIN_RECREDIT_AMOUNT: f64 = 10.00;

/// Maximum credit purchasable in a single request, in US dollars.
const MAX_RECREDIT_AMOUNT: f64 = 99_999.99;

/// Adds funds to a postage account's balance.
///
/// The amount is in US dollars and must be between 10.00 and 99,999.99
/// inclusive.
#[derive(Debug, Clone)]
pub struct RecreditRequest {
    pub(crate) header: RequestHeader,
    recredit_amount: f64,
}

impl RecreditRequest {
    /// Creates a new recredit request.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the amount is outside
    /// `10.00..=99_999.99`.
    pub fn new(
        requester_id: impl Into<String>,
        credential: CertifiedIntermediary,
        recredit_amount: f64,
    ) -> Result<Self> {
        let mut request = Self {
            header: RequestHeader::new(requester_id, credential),
            recredit_amount: MIN_RECREDIT_AMOUNT,
        };
        request.set_recredit_amount(recredit_amount)?;
        Ok(request)
    }

    /// Sets the credit amount; `10.00..=99_999.99` US dollars.
    pub fn set_recredit_amount(&mut self, recredit_amount: f64) -> Result<()> {
        if recredit_amount < MIN_RECREDIT_AMOUNT {
            return Err(Error::invalid(
                "The minimum amount of credit that can be purchased is 10.00.",
            ));
        }
        if recredit_amount > MAX_RECREDIT_AMOUNT {
            return Err(Error::invalid(
                "The maximum amount of credit that can be purchased is 99,999.99",
            ));
        }
        self.recredit_amount = recredit_amount;
        Ok(())
    }

    /// Returns the credit amount.
    #[must_use]
    pub fn recredit_amount(&self) -> f64 {
        self.recredit_amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credential() -> CertifiedIntermediary {
        CertifiedIntermediary::from_credentials("123456", "secret").unwrap()
    }

    #[test]
    fn test_should_accept_boundary_amounts() {
        assert!(RecreditRequest::new("lxxx", credential(), 10.00).is_ok());
        assert!(RecreditRequest::new("lxxx", credential(), 99_999.99).is_ok());
    }

    #[test]
    fn test_should_reject_amount_below_minimum() {
        let err = RecreditRequest::new("lxxx", credential(), 9.99).unwrap_err();
        assert!(err.to_string().contains("10.00"));
    }

    #[test]
    fn test_should_reject_amount_above_maximum() {
        let err = RecreditRequest::new("lxxx", credential(), 100_000.0).unwrap_err();
        assert!(err.to_string().contains("99,999.99"));
    }
}
