//! Single-class postage rate quote request.

use crate::credential::CertifiedIntermediary;
use crate::request::{RequestHeader, floor_to_tenths};
use crate::types::{MailClass, MailpieceDimensions, MailShape, ResponseOptions};

/// Requests a postage rate for one mail class.
///
/// Beyond the required class, weight, and endpoints, the carrier accepts a
/// number of optional rating inputs; unset options are simply omitted from
/// the request document. The weight is floored to one decimal place on
/// assignment, matching the carrier's tenth-ounce rating increments.
#[derive(Debug, Clone)]
pub struct PostageRateRequest {
    pub(crate) header: RequestHeader,
    mail_class: MailClass,
    weight_oz: f64,
    from_postal_code: String,
    to_postal_code: String,
    from_country_code: Option<String>,
    to_country_code: Option<String>,
    mailpiece_shape: Option<MailShape>,
    mailpiece_dimensions: Option<MailpieceDimensions>,
    pricing: Option<String>,
    services: Vec<(String, String)>,
    service_level: Option<String>,
    sunday_holiday_delivery: Option<String>,
    ship_date: Option<String>,
    ship_time: Option<String>,
    date_advance: Option<i32>,
    delivery_time_days: Option<bool>,
    estimated_delivery_date: Option<bool>,
    automation_rate: Option<bool>,
    machinable: Option<bool>,
    package_type_indicator: Option<String>,
    response_options: Option<ResponseOptions>,
}

impl PostageRateRequest {
    /// Creates a rate request with the required fields. Optional rating
    /// inputs are applied through the setters.
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
            pricing: None,
            services: Vec::new(),
            service_level: None,
            sunday_holiday_delivery: None,
            ship_date: None,
            ship_time: None,
            date_advance: None,
            delivery_time_days: None,
            estimated_delivery_date: None,
            automation_rate: None,
            machinable: None,
            package_type_indicator: None,
            response_options: None,
        }
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

    /// Sets the origin country code; not needed for domestic mail.
    pub fn set_from_country_code(&mut self, code: Option<String>) {
        self.from_country_code = code;
    }

    /// Returns the origin country code.
    #[must_use]
    pub fn from_country_code(&self) -> Option<&str> {
        self.from_country_code.as_deref()
    }

    /// Sets the destination country code; not needed for domestic mail.
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

    /// Sets the pricing tier (`CommercialBase`, `CommercialPlus`, or
    /// `Retail`); the carrier derives it from the mail class when omitted.
    pub fn set_pricing(&mut self, pricing: Option<String>) {
        self.pricing = pricing;
    }

    /// Returns the pricing tier.
    #[must_use]
    pub fn pricing(&self) -> Option<&str> {
        self.pricing.as_deref()
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

    /// Sets the service level (`NextDay2ndDayPOToAddressee`).
    pub fn set_service_level(&mut self, level: Option<String>) {
        self.service_level = level;
    }

    /// Returns the service level.
    #[must_use]
    pub fn service_level(&self) -> Option<&str> {
        self.service_level.as_deref()
    }

    /// Sets the Sunday/holiday delivery request flag value.
    pub fn set_sunday_holiday_delivery(&mut self, value: Option<String>) {
        self.sunday_holiday_delivery = value;
    }

    /// Returns the Sunday/holiday delivery request value.
    #[must_use]
    pub fn sunday_holiday_delivery(&self) -> Option<&str> {
        self.sunday_holiday_delivery.as_deref()
    }

    /// Sets the ship date in `MM/DD/YYYY` form.
    pub fn set_ship_date(&mut self, date: Option<String>) {
        self.ship_date = date;
    }

    /// Returns the ship date.
    #[must_use]
    pub fn ship_date(&self) -> Option<&str> {
        self.ship_date.as_deref()
    }

    /// Sets the ship time in `HH:MM AM|PM` form.
    pub fn set_ship_time(&mut self, time: Option<String>) {
        self.ship_time = time;
    }

    /// Returns the ship time.
    #[must_use]
    pub fn ship_time(&self) -> Option<&str> {
        self.ship_time.as_deref()
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

    /// Sets whether the response should include the estimated delivery
    /// date; the carrier requires delivery-time-days for this to apply.
    pub fn set_estimated_delivery_date(&mut self, flag: Option<bool>) {
        self.estimated_delivery_date = flag;
    }

    /// Returns the estimated-delivery-date flag.
    #[must_use]
    pub fn estimated_delivery_date(&self) -> Option<bool> {
        self.estimated_delivery_date
    }

    /// Sets the automation-rate flag (First-Class letters only).
    pub fn set_automation_rate(&mut self, flag: Option<bool>) {
        self.automation_rate = flag;
    }

    /// Returns the automation-rate flag.
    #[must_use]
    pub fn automation_rate(&self) -> Option<bool> {
        self.automation_rate
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

    /// Sets the package type indicator (`Softpack`).
    pub fn set_package_type_indicator(&mut self, indicator: Option<String>) {
        self.package_type_indicator = indicator;
    }

    /// Returns the package type indicator.
    #[must_use]
    pub fn package_type_indicator(&self) -> Option<&str> {
        self.package_type_indicator.as_deref()
    }

    /// Sets the response options.
    pub fn set_response_options(&mut self, options: Option<ResponseOptions>) {
        self.response_options = options;
    }

    /// Returns the response options.
    #[must_use]
    pub fn response_options(&self) -> Option<ResponseOptions> {
        self.response_options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credential() -> CertifiedIntermediary {
        CertifiedIntermediary::from_credentials("123456", "secret").unwrap()
    }

    #[test]
    fn test_should_floor_weight_on_construction() {
        let request = PostageRateRequest::new(
            "lxxx",
            credential(),
            MailClass::Priority,
            11.29,
            "97201",
            "10001",
        );
        assert!((request.weight_oz() - 11.2).abs() < f64::EPSILON);
    }

    #[test]
    fn test_should_floor_weight_on_assignment() {
        let mut request = PostageRateRequest::new(
            "lxxx",
            credential(),
            MailClass::Priority,
            1.0,
            "97201",
            "10001",
        );
        request.set_weight_oz(0.99);
        assert!((request.weight_oz() - 0.9).abs() < f64::EPSILON);
    }
}
