//! Request serialization: converting request types to carrier XML.
//!
//! The carrier's Label Server is order-sensitive for some elements, so
//! every implementation writes its elements in the exact documented
//! sequence. Conventions:
//!
//! - XML declaration: `<?xml version="1.0" encoding="utf-8"?>`
//! - Booleans in elements: `TRUE`/`FALSE`; booleans in attributes:
//!   `true`/`false`
//! - Money: two decimal places (`10.00`)
//! - Credentials: wrapped in `<CertifiedIntermediary>` except for the two
//!   label-fetching requests, which emit the flat form

use std::io::{self, Write};

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesText, Event};

use mailstack_model::address::Address;
use mailstack_model::credential::CertifiedIntermediary;
use mailstack_model::request::{
    ChangePassPhraseRequest, GetPostageLabelRequest, LabelRequest, PostageRateRequest,
    PostageRatesRequest, RecreditRequest, ResetSuspendedAccountRequest, UserSignupRequest,
};
use mailstack_model::types::{MailpieceDimensions, ResponseOptions};

use crate::error::XmlError;

/// Trait for serializing a request as a complete XML element tree.
///
/// Implementors write their own root element (with any attributes) and all
/// child elements. The XML declaration is handled by [`to_xml`].
///
/// Uses `io::Result` because `quick_xml::Writer` closures require
/// `io::Result<()>`.
pub trait LabelXmlSerialize {
    /// Serialize this request into the given writer.
    ///
    /// # Errors
    ///
    /// Returns `io::Error` if writing to the underlying writer fails.
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()>;
}

/// Serialize a request as a complete XML document.
///
/// Serialization is a pure function of the request's current state: the
/// same unmutated request produces byte-identical documents on every call.
///
/// # Errors
///
/// Returns `XmlError` if serialization fails.
pub fn to_xml<T: LabelXmlSerialize>(value: &T) -> Result<String, XmlError> {
    let mut buf = Vec::with_capacity(512);
    let mut writer = Writer::new(&mut buf);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
    value.serialize_xml(&mut writer)?;

    String::from_utf8(buf).map_err(|e| XmlError::ParseError(e.to_string()))
}

// ---------------------------------------------------------------------------
// Helper functions for writing common XML patterns
// ---------------------------------------------------------------------------

/// Write a simple `<tag>text</tag>` element.
fn write_text_element<W: Write>(writer: &mut Writer<W>, tag: &str, text: &str) -> io::Result<()> {
    writer
        .create_element(tag)
        .write_text_content(BytesText::new(text))?;
    Ok(())
}

/// Write `<tag>text</tag>` only if the value is `Some`.
fn write_optional_text<W: Write>(
    writer: &mut Writer<W>,
    tag: &str,
    value: Option<&str>,
) -> io::Result<()> {
    if let Some(v) = value {
        write_text_element(writer, tag, v)?;
    }
    Ok(())
}

/// Write `<tag>TRUE|FALSE</tag>` for an optional boolean.
fn write_optional_bool<W: Write>(
    writer: &mut Writer<W>,
    tag: &str,
    value: Option<bool>,
) -> io::Result<()> {
    if let Some(v) = value {
        write_text_element(writer, tag, if v { "TRUE" } else { "FALSE" })?;
    }
    Ok(())
}

/// Write `<tag>value</tag>` for an optional i32.
fn write_optional_i32<W: Write>(
    writer: &mut Writer<W>,
    tag: &str,
    value: Option<i32>,
) -> io::Result<()> {
    if let Some(v) = value {
        write_text_element(writer, tag, &v.to_string())?;
    }
    Ok(())
}

/// Render a float the short way (`11.2`, `15`), as the rate elements use.
fn fmt_f64(value: f64) -> String {
    format!("{value}")
}

/// Write the `RequesterID`, `RequestID`, and wrapped credential elements
/// shared by most request types.
fn write_request_header<W: Write>(
    writer: &mut Writer<W>,
    requester_id: &str,
    request_id: &str,
    credential: &CertifiedIntermediary,
) -> io::Result<()> {
    write_text_element(writer, "RequesterID", requester_id)?;
    write_text_element(writer, "RequestID", request_id)?;
    credential.serialize_xml(writer)?;
    Ok(())
}

/// Write credentials flat (no `<CertifiedIntermediary>` wrapper), the
/// older form the label-fetching requests still use.
fn write_flat_credentials<W: Write>(
    writer: &mut Writer<W>,
    credential: &CertifiedIntermediary,
) -> io::Result<()> {
    match credential {
        CertifiedIntermediary::Token(token) => write_text_element(writer, "Token", token),
        CertifiedIntermediary::Credentials {
            account_id,
            pass_phrase,
        } => {
            write_text_element(writer, "AccountID", account_id)?;
            write_text_element(writer, "PassPhrase", pass_phrase)
        }
    }
}

impl LabelXmlSerialize for CertifiedIntermediary {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        writer
            .create_element("CertifiedIntermediary")
            .write_inner_content(|w| write_flat_credentials(w, self))?;
        Ok(())
    }
}

impl LabelXmlSerialize for MailpieceDimensions {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        writer
            .create_element("MailpieceDimensions")
            .write_inner_content(|w| {
                write_text_element(w, "Length", &fmt_f64(self.length))?;
                write_text_element(w, "Width", &fmt_f64(self.width))?;
                write_text_element(w, "Height", &fmt_f64(self.height))?;
                Ok(())
            })?;
        Ok(())
    }
}

impl LabelXmlSerialize for ResponseOptions {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        writer
            .create_element("ResponseOptions")
            .with_attribute((
                "PostagePrice",
                if self.postage_price { "TRUE" } else { "FALSE" },
            ))
            .write_empty()?;
        Ok(())
    }
}

/// Write the `Services` element: an empty element whose extra services are
/// carried as attributes.
fn write_services<W: Write>(
    writer: &mut Writer<W>,
    services: &[(String, String)],
) -> io::Result<()> {
    if services.is_empty() {
        return Ok(());
    }
    let mut element = writer.create_element("Services");
    for (name, value) in services {
        element = element.with_attribute((name.as_str(), value.as_str()));
    }
    element.write_empty()?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Request implementations
// ---------------------------------------------------------------------------

impl LabelXmlSerialize for ChangePassPhraseRequest {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        writer
            .create_element("ChangePassPhraseRequest")
            .with_attribute((
                "TokenRequested",
                if self.token_requested() { "true" } else { "false" },
            ))
            .write_inner_content(|w| {
                write_request_header(w, self.requester_id(), self.request_id(), self.credential())?;
                write_text_element(w, "NewPassPhrase", self.new_pass_phrase())?;
                Ok(())
            })?;
        Ok(())
    }
}

impl LabelXmlSerialize for RecreditRequest {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        writer
            .create_element("RecreditRequest")
            .write_inner_content(|w| {
                write_request_header(w, self.requester_id(), self.request_id(), self.credential())?;
                write_text_element(
                    w,
                    "RecreditAmount",
                    &format!("{:.2}", self.recredit_amount()),
                )?;
                Ok(())
            })?;
        Ok(())
    }
}

impl LabelXmlSerialize for PostageRateRequest {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        writer
            .create_element("PostageRateRequest")
            .write_inner_content(|w| {
                write_request_header(w, self.requester_id(), self.request_id(), self.credential())?;
                write_text_element(w, "MailClass", self.mail_class().as_str())?;
                write_text_element(w, "WeightOz", &fmt_f64(self.weight_oz()))?;
                write_text_element(w, "FromPostalCode", self.from_postal_code())?;
                write_text_element(w, "ToPostalCode", self.to_postal_code())?;
                write_services(w, self.services())?;
                write_optional_text(w, "FromCountryCode", self.from_country_code())?;
                write_optional_text(w, "ToCountryCode", self.to_country_code())?;
                write_optional_text(
                    w,
                    "MailpieceShape",
                    self.mailpiece_shape().map(|s| s.as_str()),
                )?;
                write_optional_text(w, "Pricing", self.pricing())?;
                write_optional_text(w, "ServiceLevel", self.service_level())?;
                write_optional_text(w, "SundayHolidayDelivery", self.sunday_holiday_delivery())?;
                write_optional_text(w, "ShipDate", self.ship_date())?;
                write_optional_text(w, "ShipTime", self.ship_time())?;
                write_optional_i32(w, "DateAdvance", self.date_advance())?;
                write_optional_bool(w, "DeliveryTimeDays", self.delivery_time_days())?;
                write_optional_bool(w, "EstimatedDeliveryDate", self.estimated_delivery_date())?;
                write_optional_bool(w, "AutomationRate", self.automation_rate())?;
                write_optional_bool(w, "Machinable", self.machinable())?;
                write_optional_text(w, "PackageTypeIndicator", self.package_type_indicator())?;
                if let Some(dimensions) = self.mailpiece_dimensions() {
                    dimensions.serialize_xml(w)?;
                }
                if let Some(options) = self.response_options() {
                    options.serialize_xml(w)?;
                }
                Ok(())
            })?;
        Ok(())
    }
}

impl LabelXmlSerialize for PostageRatesRequest {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        writer
            .create_element("PostageRatesRequest")
            .write_inner_content(|w| {
                write_request_header(w, self.requester_id(), self.request_id(), self.credential())?;
                write_text_element(w, "MailClass", self.mail_class().as_str())?;
                write_text_element(w, "WeightOz", &fmt_f64(self.weight_oz()))?;
                write_text_element(w, "FromPostalCode", self.from_postal_code())?;
                write_text_element(w, "ToPostalCode", self.to_postal_code())?;
                write_services(w, self.services())?;
                write_optional_text(w, "FromCountryCode", self.from_country_code())?;
                write_optional_text(w, "ToCountryCode", self.to_country_code())?;
                write_optional_text(
                    w,
                    "MailpieceShape",
                    self.mailpiece_shape().map(|s| s.as_str()),
                )?;
                write_optional_i32(w, "DateAdvance", self.date_advance())?;
                write_optional_bool(w, "EstimatedDeliveryDate", self.estimated_delivery_date())?;
                write_optional_bool(w, "DeliveryTimeDays", self.delivery_time_days())?;
                write_optional_bool(w, "Machinable", self.machinable())?;
                if let Some(dimensions) = self.mailpiece_dimensions() {
                    dimensions.serialize_xml(w)?;
                }
                Ok(())
            })?;
        Ok(())
    }
}

/// Write the destination address as the `To*` element run.
fn write_destination_address<W: Write>(writer: &mut Writer<W>, address: &Address) -> io::Result<()> {
    write_optional_text(writer, "ToName", address.name())?;
    write_optional_text(writer, "ToCompany", address.company())?;
    write_text_element(writer, "ToAddress1", address.address_line1())?;
    write_optional_text(writer, "ToAddress2", address.address_line2())?;
    if address.country() != "US" {
        // Address lines 3 and 4 are not accepted on domestic labels.
        write_optional_text(writer, "ToAddress3", address.address_line3())?;
        write_optional_text(writer, "ToAddress4", address.address_line4())?;
    }
    write_text_element(writer, "ToCity", address.city())?;
    write_text_element(writer, "ToState", address.state())?;
    write_text_element(writer, "ToPostalCode", address.postal_code())?;
    write_optional_text(writer, "ToDeliveryPoint", address.delivery_point())?;
    write_optional_text(writer, "ToPhone", address.phone())?;
    write_optional_text(writer, "ToEMail", address.email())?;
    Ok(())
}

/// Write the return address as the `From*`/`ReturnAddress*` element run.
/// Address lines 3 and 4 are never emitted for the return address.
fn write_return_address<W: Write>(
    writer: &mut Writer<W>,
    address: &Address,
    company_first: bool,
) -> io::Result<()> {
    if company_first {
        write_optional_text(writer, "FromCompany", address.company())?;
        write_optional_text(writer, "FromName", address.name())?;
    } else {
        write_optional_text(writer, "FromName", address.name())?;
        write_optional_text(writer, "FromCompany", address.company())?;
    }
    write_text_element(writer, "ReturnAddress1", address.address_line1())?;
    write_optional_text(writer, "ReturnAddress2", address.address_line2())?;
    write_text_element(writer, "FromCity", address.city())?;
    write_text_element(writer, "FromState", address.state())?;
    write_text_element(writer, "FromPostalCode", address.postal_code())?;
    write_optional_text(writer, "FromPhone", address.phone())?;
    write_optional_text(writer, "FromEMail", address.email())?;
    Ok(())
}

impl LabelXmlSerialize for GetPostageLabelRequest {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        let mut element = writer.create_element("LabelRequest");
        if self.use_certified_mail() {
            element = element.with_attribute(("LabelType", "CertifiedMail"));
        }
        if self.use_destination_confirm_mail() {
            element = element.with_attribute(("LabelType", "DestinationConfirm"));
        }
        element = element.with_attribute(("LabelSize", self.label_size().as_str()));
        element.write_inner_content(|w| {
            write_text_element(w, "RequesterID", self.requester_id())?;
            write_flat_credentials(w, self.credential())?;
            write_text_element(w, "MailClass", self.mail_class().as_str())?;
            write_text_element(w, "WeightOz", &format!("{:.2}", self.weight_oz()))?;
            write_text_element(w, "PartnerCustomerID", "UNUSED")?;
            write_text_element(w, "PartnerTransactionID", self.request_id())?;
            write_destination_address(w, self.destination_address())?;
            write_return_address(w, self.return_address(), true)?;
            Ok(())
        })?;
        Ok(())
    }
}

impl LabelXmlSerialize for LabelRequest {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        writer
            .create_element("LabelRequest")
            .write_inner_content(|w| {
                write_text_element(w, "RequesterID", self.requester_id())?;
                write_flat_credentials(w, self.credential())?;
                write_text_element(w, "MailClass", self.mail_class().as_str())?;
                write_text_element(w, "WeightOz", &format!("{:.2}", self.weight_oz()))?;
                write_text_element(w, "PartnerCustomerID", "UNUSED")?;
                write_text_element(w, "PartnerTransactionID", self.request_id())?;
                write_destination_address(w, self.destination_address())?;
                write_return_address(w, self.return_address(), false)?;
                Ok(())
            })?;
        Ok(())
    }
}

impl LabelXmlSerialize for ResetSuspendedAccountRequest {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        writer
            .create_element("ResetSuspendedAccountRequest")
            .write_inner_content(|w| {
                write_text_element(w, "RequesterID", self.requester_id())?;
                write_text_element(w, "RequestID", self.request_id())?;
                write_text_element(w, "AccountID", self.account_id())?;
                write_text_element(w, "ChallengeAnswer", self.challenge_answer())?;
                write_text_element(w, "NewPassPhrase", self.new_pass_phrase())?;
                Ok(())
            })?;
        Ok(())
    }
}

impl LabelXmlSerialize for UserSignupRequest {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        writer
            .create_element("UserSignUpRequest")
            .with_attribute((
                "TokenRequested",
                if self.token_requested() { "true" } else { "false" },
            ))
            .write_inner_content(|w| {
                write_text_element(w, "RequesterID", self.requester_id())?;
                write_text_element(w, "RequestID", self.request_id())?;
                write_text_element(w, "FirstName", self.first_name())?;
                write_text_element(w, "LastName", self.last_name())?;
                write_optional_text(w, "MiddleName", self.middle_name())?;
                write_optional_text(w, "Title", self.title())?;
                write_text_element(w, "EmailAddress", self.email_address())?;
                write_text_element(w, "PhoneNumber", self.phone_number())?;
                write_optional_text(w, "PhoneNumberExt", self.phone_number_ext())?;
                write_optional_text(w, "FaxNumber", self.fax_number())?;
                write_text_element(w, "BillingType", self.billing_type())?;
                write_text_element(w, "PartnerID", self.requester_id())?;
                write_text_element(
                    w,
                    "PaymentDetailsDeferred",
                    if self.payment_details_deferred() {
                        "true"
                    } else {
                        "false"
                    },
                )?;
                write_text_element(w, "ICertify", "true")?;
                Ok(())
            })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mailstack_model::types::MailClass;

    fn credential() -> CertifiedIntermediary {
        CertifiedIntermediary::from_credentials("123456", "secret").unwrap()
    }

    fn token_credential() -> CertifiedIntermediary {
        CertifiedIntermediary::from_token("tok-abc123").unwrap()
    }

    fn us_address() -> Address {
        Address::new(
            Some("Jane Doe".to_owned()),
            None,
            "123 Main St".to_owned(),
            None,
            Some("Suite 3".to_owned()),
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
    fn test_should_wrap_account_credentials_in_certified_intermediary() {
        let xml = to_xml(
            &RecreditRequest::new("lxxx", credential(), 25.0).unwrap(),
        )
        .unwrap();
        assert!(xml.contains(
            "<CertifiedIntermediary><AccountID>123456</AccountID><PassPhrase>secret</PassPhrase></CertifiedIntermediary>"
        ));
        assert!(!xml.contains("<Token>"));
    }

    #[test]
    fn test_should_emit_only_token_for_token_credential() {
        let xml = to_xml(
            &RecreditRequest::new("lxxx", token_credential(), 25.0).unwrap(),
        )
        .unwrap();
        assert!(xml.contains("<CertifiedIntermediary><Token>tok-abc123</Token></CertifiedIntermediary>"));
        assert!(!xml.contains("<AccountID>"));
        assert!(!xml.contains("<PassPhrase>"));
    }

    #[test]
    fn test_should_format_recredit_amount_with_two_decimals() {
        let xml = to_xml(&RecreditRequest::new("lxxx", credential(), 10.0).unwrap()).unwrap();
        assert!(xml.contains("<RecreditAmount>10.00</RecreditAmount>"));
    }

    #[test]
    fn test_should_serialize_identically_on_repeated_calls() {
        let request =
            ChangePassPhraseRequest::new("lxxx", credential(), "new phrase", true).unwrap();
        let first = to_xml(&request).unwrap();
        let second = to_xml(&request).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_should_carry_token_requested_as_root_attribute() {
        let request =
            ChangePassPhraseRequest::new("lxxx", credential(), "new phrase", true).unwrap();
        let xml = to_xml(&request).unwrap();
        assert!(xml.contains("<ChangePassPhraseRequest TokenRequested=\"true\">"));
        assert!(xml.contains("<NewPassPhrase>new phrase</NewPassPhrase>"));
    }

    #[test]
    fn test_should_order_required_rate_elements() {
        let request = PostageRateRequest::new(
            "lxxx",
            credential(),
            MailClass::Priority,
            11.2,
            "97201",
            "10001",
        );
        let xml = to_xml(&request).unwrap();
        let mail_class = xml.find("<MailClass>").unwrap();
        let weight = xml.find("<WeightOz>").unwrap();
        let from = xml.find("<FromPostalCode>").unwrap();
        let to = xml.find("<ToPostalCode>").unwrap();
        assert!(mail_class < weight && weight < from && from < to);
        assert!(xml.contains("<WeightOz>11.2</WeightOz>"));
    }

    #[test]
    fn test_should_render_rate_booleans_upper_case() {
        let mut request = PostageRateRequest::new(
            "lxxx",
            credential(),
            MailClass::Priority,
            8.0,
            "97201",
            "10001",
        );
        request.set_delivery_time_days(Some(true));
        request.set_machinable(Some(false));
        let xml = to_xml(&request).unwrap();
        assert!(xml.contains("<DeliveryTimeDays>TRUE</DeliveryTimeDays>"));
        assert!(xml.contains("<Machinable>FALSE</Machinable>"));
    }

    #[test]
    fn test_should_render_services_as_attributes() {
        let mut request = PostageRateRequest::new(
            "lxxx",
            credential(),
            MailClass::Priority,
            8.0,
            "97201",
            "10001",
        );
        request.set_services(vec![(
            "SignatureConfirmation".to_owned(),
            "ON".to_owned(),
        )]);
        let xml = to_xml(&request).unwrap();
        assert!(xml.contains("<Services SignatureConfirmation=\"ON\"/>"));
    }

    #[test]
    fn test_should_render_response_options_attribute() {
        let mut request = PostageRateRequest::new(
            "lxxx",
            credential(),
            MailClass::Priority,
            8.0,
            "97201",
            "10001",
        );
        request.set_response_options(Some(ResponseOptions::new(true)));
        let xml = to_xml(&request).unwrap();
        assert!(xml.contains("<ResponseOptions PostagePrice=\"TRUE\"/>"));
    }

    #[test]
    fn test_should_emit_flat_credentials_on_label_request() {
        let request = GetPostageLabelRequest::new(
            "lxxx",
            credential(),
            MailClass::Priority,
            12.0,
            us_address(),
            us_address(),
        )
        .unwrap();
        let xml = to_xml(&request).unwrap();
        assert!(!xml.contains("<CertifiedIntermediary>"));
        assert!(xml.contains("<AccountID>123456</AccountID>"));
        assert!(xml.contains("<PassPhrase>secret</PassPhrase>"));
        assert!(xml.contains("LabelSize=\"4x6\""));
        assert!(xml.contains("<WeightOz>12.00</WeightOz>"));
        assert!(xml.contains("<PartnerCustomerID>UNUSED</PartnerCustomerID>"));
    }

    #[test]
    fn test_should_omit_address_lines_3_and_4_for_domestic_labels() {
        let mut domestic_destination = us_address();
        domestic_destination
            .set_address_line3(Some("Dock 9".to_owned()))
            .unwrap();
        let domestic_request = LabelRequest::new(
            "lxxx",
            credential(),
            MailClass::Priority,
            12.0,
            us_address(),
            domestic_destination,
        )
        .unwrap();
        let xml = to_xml(&domestic_request).unwrap();
        assert!(!xml.contains("<ToAddress3>"));

        let mut with_line3 = us_address();
        with_line3.set_country("DE").unwrap();
        with_line3.set_state("Bavaria").unwrap();
        with_line3.set_postal_code("80331").unwrap();
        with_line3
            .set_address_line3(Some("Hinterhaus".to_owned()))
            .unwrap();
        let international_request = LabelRequest::new(
            "lxxx",
            credential(),
            MailClass::Priority,
            12.0,
            us_address(),
            with_line3,
        )
        .unwrap();
        let xml = to_xml(&international_request).unwrap();
        assert!(xml.contains("<ToAddress3>Hinterhaus</ToAddress3>"));
    }

    #[test]
    fn test_should_mark_certified_mail_label_type() {
        let mut request = GetPostageLabelRequest::new(
            "lxxx",
            credential(),
            MailClass::Priority,
            12.0,
            us_address(),
            us_address(),
        )
        .unwrap();
        request.set_use_certified_mail(true).unwrap();
        let xml = to_xml(&request).unwrap();
        assert!(xml.contains("LabelType=\"CertifiedMail\""));
    }

    #[test]
    fn test_should_serialize_reset_request_without_credentials() {
        let request = ResetSuspendedAccountRequest::new(
            "lxxx",
            "123456",
            "first pet",
            "new phrase",
            Some("req-1".to_owned()),
        );
        let xml = to_xml(&request).unwrap();
        assert!(xml.contains("<ResetSuspendedAccountRequest>"));
        assert!(xml.contains("<AccountID>123456</AccountID>"));
        assert!(xml.contains("<ChallengeAnswer>first pet</ChallengeAnswer>"));
        assert!(xml.contains("<RequestID>req-1</RequestID>"));
        assert!(!xml.contains("<CertifiedIntermediary>"));
    }

    #[test]
    fn test_should_escape_reserved_characters() {
        let request = ChangePassPhraseRequest::new(
            "lxxx",
            credential(),
            "a < b & c > d",
            false,
        )
        .unwrap();
        let xml = to_xml(&request).unwrap();
        assert!(xml.contains("<NewPassPhrase>a &lt; b &amp; c &gt; d</NewPassPhrase>"));
    }
}
