//! Request for a printable postage label with label-type options.

use crate::address::Address;
use crate::credential::CertifiedIntermediary;
use crate::error::{Error, Result};
use crate::request::RequestHeader;
use crate::types::{LabelSize, MailClass};

/// Maximum mailpiece weight in ounces (70 pounds).
const MAX_WEIGHT_OZ: f64 = 1120.0;

/// Fetches a printable postage label.
///
/// Requires the mail class, the mailpiece weight in ounces, and the
/// return and destination addresses. A label may optionally be requested
/// as a certified-mail or destination-confirm label (mutually exclusive),
/// each of which restricts the acceptable label sizes to its own
/// whitelist. When no size is chosen the carrier default applies: 7x3 for
/// destination-confirm labels, 4x6 otherwise.
#[derive(Debug, Clone)]
pub struct GetPostageLabelRequest {
    pub(crate) header: RequestHeader,
    mail_class: MailClass,
    weight_oz: f64,
    return_address: Address,
    destination_address: Address,
    use_certified_mail: bool,
    use_destination_confirm_mail: bool,
    label_size: Option<LabelSize>,
}

impl GetPostageLabelRequest {
    /// Creates a new label request.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the weight is out of range.
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
            mail_class,
            weight_oz: 1.0,
            return_address,
            destination_address,
            use_certified_mail: false,
            use_destination_confirm_mail: false,
            label_size: None,
        };
        request.set_weight_oz(weight_oz)?;
        Ok(request)
    }

    /// Sets the mail class.
    pub fn set_mail_class(&mut self, mail_class: MailClass) {
        self.mail_class = mail_class;
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

    /// Requests (or clears) a certified-mail label.
    ///
    /// # Errors
    ///
    /// Fails when a destination-confirm label is already requested, or the
    /// chosen label size is not valid for certified mail.
    pub fn set_use_certified_mail(&mut self, use_certified: bool) -> Result<()> {
        if self.use_destination_confirm_mail && use_certified {
            return Err(Error::invalid(
                "Mail can not be both Certified Mail and Destination Confirm Mail",
            ));
        }
        if use_certified {
            if let Some(size) = self.label_size {
                if !size.is_certified_mail_size() {
                    return Err(Error::invalid(
                        "Requested label size not available for use with Certified Mail",
                    ));
                }
            }
        }
        self.use_certified_mail = use_certified;
        Ok(())
    }

    /// True when a certified-mail label is requested.
    #[must_use]
    pub fn use_certified_mail(&self) -> bool {
        self.use_certified_mail
    }

    /// Requests (or clears) a destination-confirm label.
    ///
    /// # Errors
    ///
    /// Fails when a certified-mail label is already requested, or the
    /// chosen label size is not valid for destination-confirm mail.
    pub fn set_use_destination_confirm_mail(&mut self, use_destination_confirm: bool) -> Result<()> {
        if self.use_certified_mail && use_destination_confirm {
            return Err(Error::invalid(
                "Mail can not be both Certified Mail and Destination Confirm Mail",
            ));
        }
        if use_destination_confirm {
            if let Some(size) = self.label_size {
                if !size.is_destination_confirm_size() {
                    return Err(Error::invalid(
                        "Requested label size not available for use with Destination Confirm Mail",
                    ));
                }
            }
        }
        self.use_destination_confirm_mail = use_destination_confirm;
        Ok(())
    }

    /// True when a destination-confirm label is requested.
    #[must_use]
    pub fn use_destination_confirm_mail(&self) -> bool {
        self.use_destination_confirm_mail
    }

    /// Sets the label size, validated against the whitelist of whichever
    /// label type is currently selected.
    pub fn set_label_size(&mut self, size: LabelSize) -> Result<()> {
        if self.use_certified_mail && !size.is_certified_mail_size() {
            return Err(Error::invalid(
                "Label size must be one of the sizes useable with Certified Mail",
            ));
        } else if self.use_destination_confirm_mail && !size.is_destination_confirm_size() {
            return Err(Error::invalid(
                "Label size must be one of the sizes usable with Destination Confirm Mail",
            ));
        } else if !self.use_certified_mail
            && !self.use_destination_confirm_mail
            && !size.is_standard_size()
        {
            return Err(Error::invalid(
                "Label size must be one of the supported label sizes",
            ));
        }
        self.label_size = Some(size);
        Ok(())
    }

    /// Returns the effective label size, falling back to the carrier
    /// default when none was chosen.
    #[must_use]
    pub fn label_size(&self) -> LabelSize {
        self.label_size.unwrap_or(if self.use_destination_confirm_mail {
            LabelSize::Size7x3
        } else {
            LabelSize::Size4x6
        })
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

    fn request() -> GetPostageLabelRequest {
        GetPostageLabelRequest::new(
            "lxxx",
            CertifiedIntermediary::from_credentials("123456", "secret").unwrap(),
            MailClass::Priority,
            12.0,
            address(),
            address(),
        )
        .unwrap()
    }

    #[test]
    fn test_should_enforce_weight_bounds() {
        let mut request = request();
        assert!(request.set_weight_oz(0.0).is_err());
        assert!(request.set_weight_oz(1120.0).is_ok());
        assert!(request.set_weight_oz(1120.1).is_err());
    }

    #[test]
    fn test_should_reject_certified_and_destination_confirm_together() {
        let mut request = request();
        request.set_use_certified_mail(true).unwrap();
        assert!(request.set_use_destination_confirm_mail(true).is_err());
    }

    #[test]
    fn test_should_restrict_label_size_per_label_type() {
        let mut request = request();
        request.set_use_certified_mail(true).unwrap();
        assert!(request.set_label_size(LabelSize::Size8x3).is_ok());
        assert!(request.set_label_size(LabelSize::Size4x8).is_err());
    }

    #[test]
    fn test_should_reject_nonstandard_size_without_label_type() {
        let mut request = request();
        assert!(request.set_label_size(LabelSize::Size7x3).is_err());
        assert!(request.set_label_size(LabelSize::Size4x6).is_ok());
    }

    #[test]
    fn test_should_default_label_size_by_label_type() {
        let mut request = request();
        assert_eq!(request.label_size(), LabelSize::Size4x6);
        request.set_use_destination_confirm_mail(true).unwrap();
        assert_eq!(request.label_size(), LabelSize::Size7x3);
    }
}
