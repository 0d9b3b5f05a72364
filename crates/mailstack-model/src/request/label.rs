//! Basic domestic postage label request.

use crate::address::Address;
use crate::credential::CertifiedIntermediary;
use crate::error::{Error, Result};
use crate::request::RequestHeader;
use crate::types::MailClass;

/// Maximum mailpiece weight in ounces (70 pounds).
const MAX_WEIGHT_OZ: f64 = 1120.0;

/// Fetches a printable postage label for a domestic mail class.
///
/// The simpler sibling of [`crate::request::GetPostageLabelRequest`]: no
/// label-type or label-size options, and the mail class is restricted to
/// the domestic label classes.
#[derive(Debug, Clone)]
pub struct LabelRequest {
    pub(crate) header: RequestHeader,
    mail_class: MailClass,
    weight_oz: f64,
    return_address: Address,
    destination_address: Address,
}

impl LabelRequest {
    /// Creates a new label request.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the mail class is not a
    /// domestic label class or the weight is out of range.
    pub fn new(
        requester_id: impl Into<String>,
        credential: CertifiedIntermediary,
        mail_class: MailClass,
        weight_oz: f64,
        return_address: Address,
        destination_address: Address,
    ) -> Result<Self> {
        let mut request = Self {
            header: RequestHeader::new(requester_id, credential),
            mail_class: MailClass::Priority,
            weight_oz: 1.0,
            return_address,
            destination_address,
        };
        request.set_mail_class(mail_class)?;
        request.set_weight_oz(weight_oz)?;
        Ok(request)
    }

    /// Sets the mail class; must be one of the domestic label classes.
    pub fn set_mail_class(&mut self, mail_class: MailClass) -> Result<()> {
        if !mail_class.is_domestic_label_class() {
            return Err(Error::invalid(format!(
                "Mail Class must be one of the domestic label classes, got {mail_class}"
            )));
        }
        self.mail_class = mail_class;
        Ok(())
    }

    /// Returns the mail class.
    #[must_use]
    pub fn mail_class(&self) -> MailClass {
        self.mail_class
    }

    /// Sets the mailpiece weight in ounces; `0.0 < weight <= 1120.0`.
    pub fn set_weight_oz(&mut self, weight_oz: f64) -> Result<()> {
        if weight_oz <= 0.0 {
            return Err(Error::invalid("Weight must be greater than 0.0 ounces"));
        }
        if weight_oz > MAX_WEIGHT_OZ {
            return Err(Error::invalid(
                "Weight must not be greater than 1120.0 ounces (70 pounds)",
            ));
        }
        self.weight_oz = weight_oz;
        Ok(())
    }

    /// Returns the mailpiece weight in ounces.
    #[must_use]
    pub fn weight_oz(&self) -> f64 {
        self.weight_oz
    }

    /// Sets the return (from) address.
    pub fn set_return_address(&mut self, address: Address) {
        self.return_address = address;
    }

    /// Returns the return (from) address.
    #[must_use]
    pub fn return_address(&self) -> &Address {
        &self.return_address
    }

    /// Sets the destination (to) address.
    pub fn set_destination_address(&mut self, address: Address) {
        self.destination_address = address;
    }

    /// Returns the destination (to) address.
    #[must_use]
    pub fn destination_address(&self) -> &Address {
        &self.destination_address
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address() -> Address {
        Address::new(
            Some("Jane Doe".to_owned()),
            None,
            "123 Main St".to_owned(),
            None,
            None,
            None,
            "Portland".to_owned(),
            "OR".to_owned(),
            "97201".to_owned(),
            None,
            "US".to_owned(),
            None,
            None,
        )
        .unwrap()
    }

    #[test]
    fn test_should_reject_international_mail_class() {
        let result = LabelRequest::new(
            "lxxx",
            CertifiedIntermediary::from_credentials("123456", "secret").unwrap(),
            MailClass::PriorityMailInternational,
            12.0,
            address(),
            address(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_should_accept_domestic_mail_class() {
        let result = LabelRequest::new(
            "lxxx",
            CertifiedIntermediary::from_credentials("123456", "secret").unwrap(),
            MailClass::MediaMail,
            12.0,
            address(),
            address(),
        );
        assert!(result.is_ok());
    }
}
