//! Rate-shopping request across the mail classes of a shipment category.

use crate::credential::CertifiedIntermediary;
use crate::request::{RequestHeader, floor_to_tenths};
use crate::types::{MailClass, MailpieceDimensions, MailShape};

/// Requests rates for every eligible mail class at once.
///
/// The mail class here is a shipment-category selector (`Domestic` or
/// `International`); the response carries one `PostagePrice` block per
/// quoted class. The weight is floored to one decimal place on assignment.
#[derive(Debug, Clone)]
pub struct PostageRatesRequest {
    pub(crate) header: RequestHeader,
    mail_class: MailClass,
    weight_oz: f64,
    from_postal_code: String,
    to_postal_code: String,
    from_country_code: Option<String>,
    to_country_code: Option<String>,
    mailpiece_shape: Option<MailShape>,
    mailpiece_dimensions: Option<MailpieceDimensions>,
    services: Vec<(String, String)>,
    date_advance: Option<i32>,
    delivery_time_days: Option<bool>,
    estimated_delivery_date: Option<bool>,
    machinable: Option<bool>,
}

impl PostageRatesRequest {
    /// Creates a rate-shopping request with the required fields.
    #[must_use]
    pub fn new(
        requester_id: impl Into<String>,
        credential: CertifiedIntermediary,
        mail_class: MailClass,
        weight_oz: f64,
        from_postal_code: impl Into<String>,
        to_postal_code: impl Into<String>,
    ) -> Self {
        Self {
            header: RequestHeader::new(requester_id, credential),
            mail_class,
            weight_oz: floor_to_tenths(weight_oz),
            from_postal_code: from_postal_code.into(),
            to_postal_code: to_postal_code.into(),
            from_country_code: None,
            to_country_code: None,
            mailpiece_shape: None,
            mailpiece_dimensions: None,
            services: Vec::new(),
            date_advance: None,
            delivery_time_days: None,
            estimated_delivery_date: None,
            machinable: None,
        }
    }

    /// Sets the shipment-category mail class.
    pub fn set_mail_class(&mut self, mail_class: MailClass) {
        self.mail_class = mail_class;
    }

    /// Returns the mail class.
    #[must_use]
    pub fn mail_class(&self) -> MailClass {
        self.mail_class
    }

    /// Sets the weight in ounces, floored to one decimal place.
    pub fn set_weight_oz(&mut self, weight_oz: f64) {
        self.weight_oz = floor_to_tenths(weight_oz);
    }

    /// Returns the weight in ounces.
    #[must_use]
    pub fn weight_oz(&self) -> f64 {
        self.weight_oz
    }

    /// Sets the origin postal code.
    pub fn set_from_postal_code(&mut self, code: impl Into<String>) {
        self.from_postal_code = code.into();
    }

    /// Returns the origin postal code.
    #[must_use]
    pub fn from_postal_code(&self) -> &str {
        &self.from_postal_code
    }

    /// Sets the destination postal code.
    pub fn set_to_postal_code(&mut self, code: impl Into<String>) {
        self.to_postal_code = code.into();
    }

    /// Returns the destination postal code.
    #[must_use]
    pub fn to_postal_code(&self) -> &str {
        &self.to_postal_code
    }

    /// Sets the origin country code.
    pub fn set_from_country_code(&mut self, code: Option<String>) {
        self.from_country_code = code;
    }

    /// Returns the origin country code.
    #[must_use]
    pub fn from_country_code(&self) -> Option<&str> {
        self.from_country_code.as_deref()
    }

    /// Sets the destination country code.
    pub fn set_to_country_code(&mut self, code: Option<String>) {
        self.to_country_code = code;
    }

    /// Returns the destination country code.
    #[must_use]
    pub fn to_country_code(&self) -> Option<&str> {
        self.to_country_code.as_deref()
    }

    /// Sets the mailpiece shape.
    pub fn set_mailpiece_shape(&mut self, shape: Option<MailShape>) {
        self.mailpiece_shape = shape;
    }

    /// Returns the mailpiece shape.
    #[must_use]
    pub fn mailpiece_shape(&self) -> Option<MailShape> {
        self.mailpiece_shape
    }

    /// Sets the mailpiece dimensions in inches.
    pub fn set_mailpiece_dimensions(&mut self, dimensions: Option<MailpieceDimensions>) {
        self.mailpiece_dimensions = dimensions;
    }

    /// Returns the mailpiece dimensions.
    #[must_use]
    pub fn mailpiece_dimensions(&self) -> Option<&MailpieceDimensions> {
        self.mailpiece_dimensions.as_ref()
    }

    /// Sets the extra services, rendered as attributes of the `Services`
    /// element (name, value) in insertion order.
    pub fn set_services(&mut self, services: Vec<(String, String)>) {
        self.services = services;
    }

    /// Returns the extra services.
    #[must_use]
    pub fn services(&self) -> &[(String, String)] {
        &self.services
    }

    /// Sets the number of days (0-7) to advance-date the label.
    pub fn set_date_advance(&mut self, days: Option<i32>) {
        self.date_advance = days;
    }

    /// Returns the advance-date day count.
    #[must_use]
    pub fn date_advance(&self) -> Option<i32> {
        self.date_advance
    }

    /// Sets whether the response should include delivery time in days.
    pub fn set_delivery_time_days(&mut self, flag: Option<bool>) {
        self.delivery_time_days = flag;
    }

    /// Returns the delivery-time-days flag.
    #[must_use]
    pub fn delivery_time_days(&self) -> Option<bool> {
        self.delivery_time_days
    }

    /// Sets whether the response should include the estimated delivery date.
    pub fn set_estimated_delivery_date(&mut self, flag: Option<bool>) {
        self.estimated_delivery_date = flag;
    }

    /// Returns the estimated-delivery-date flag.
    #[must_use]
    pub fn estimated_delivery_date(&self) -> Option<bool> {
        self.estimated_delivery_date
    }

    /// Sets the machinable flag.
    pub fn set_machinable(&mut self, flag: Option<bool>) {
        self.machinable = flag;
    }

    /// Returns the machinable flag.
    #[must_use]
    pub fn machinable(&self) -> Option<bool> {
        self.machinable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_floor_weight_to_tenths() {
        let credential = CertifiedIntermediary::from_credentials("123456", "secret").unwrap();
        let mut request = PostageRatesRequest::new(
            "lxxx",
            credential,
            MailClass::Domestic,
            7.77,
            "97201",
            "10001",
        );
        assert!((request.weight_oz() - 7.7).abs() < f64::EPSILON);
        request.set_weight_oz(3.99);
        assert!((request.weight_oz() - 3.9).abs() < f64::EPSILON);
    }
}
