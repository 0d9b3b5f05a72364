//! Response parsing: converting carrier XML into typed responses.
//!
//! Responses arrive declared in the `www.envmgr.com/LabelService` default
//! namespace; all element lookups here match on local names so the
//! namespace is effectively stripped. Parsing happens in two steps: the
//! shared envelope (`Status`, echoed ids, `ErrorMessage`) is read first,
//! and only a successful envelope proceeds to the operation payload; a
//! failed response is returned carrying the envelope alone.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use mailstack_model::error::Error as ModelError;
use mailstack_model::response::{
    AccountSummary, ChangePassPhraseRequestResponse, Fees, GroupedExtraServices,
    LabelRequestResponse, Postage, PostagePrice, PostageRateRequestResponse,
    PostageRatesRequestResponse, RatedPostage, RecreditRequestResponse,
    ResetSuspendedAccountResponse, ResponseEnvelope, UserSignupRequestResponse,
};

use crate::error::XmlError;

/// Trait for parsing a response type from raw carrier XML.
pub trait FromResponseXml: Sized {
    /// Parse an instance from the raw response body.
    ///
    /// # Errors
    ///
    /// Returns `XmlError` if the document is malformed, the envelope is
    /// invalid, or a required payload element is missing or out of bounds.
    fn from_response_xml(xml: &str) -> Result<Self, XmlError>;
}

/// Parse the response envelope shared by every operation.
///
/// Fails when the input is empty or no non-empty `Status` element exists.
/// The requester id, request id, and error message are populated when
/// present and re-validated against their length caps; a missing error
/// message leaves the envelope's message empty.
///
/// # Errors
///
/// Returns `XmlError` on malformed XML or an invalid envelope field.
pub fn parse_envelope(xml: &str) -> Result<ResponseEnvelope, XmlError> {
    if xml.is_empty() {
        return Err(ModelError::invalid("XML string is empty.").into());
    }

    let mut reader = new_reader(xml);
    let mut status = None;
    let mut requester_id = None;
    let mut request_id = None;
    let mut error_message = None;

    // The carrier nests the envelope fields directly under the root, but
    // lookups are document-wide (first occurrence wins) to match the
    // loosely schematized responses seen in the wild.
    loop {
        match next_event(&mut reader, "invalid response XML")? {
            Event::Start(e) => {
                let name = local_name(&e)?;
                let slot = match name.as_str() {
                    "Status" => &mut status,
                    "RequesterID" => &mut requester_id,
                    "RequestID" => &mut request_id,
                    "ErrorMessage" => &mut error_message,
                    _ => continue,
                };
                let text = read_text_content(&mut reader, &name)?;
                if slot.is_none() {
                    *slot = Some(text);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    let status_text = status.filter(|s| !s.is_empty()).ok_or_else(|| {
        XmlError::Invalid(ModelError::invalid(
            "Response XML did not contain Status element",
        ))
    })?;
    let status = parse_i32(&status_text)?;

    let mut envelope = ResponseEnvelope::new(status);
    if let Some(id) = requester_id {
        envelope.set_requester_id(id)?;
    }
    if let Some(id) = request_id {
        envelope.set_request_id(id)?;
    }
    if let Some(message) = error_message {
        envelope.set_error_message(message)?;
    }

    tracing::trace!(status, "parsed response envelope");
    Ok(envelope)
}

// ---------------------------------------------------------------------------
// Helper functions for reading common XML patterns
// ---------------------------------------------------------------------------

fn new_reader(xml: &str) -> Reader<&[u8]> {
    let mut reader = Reader::from_reader(xml.as_bytes());
    reader.config_mut().trim_text(true);
    reader
}

/// Read the next event, wrapping library failures with parser context.
fn next_event<'a>(
    reader: &mut Reader<&'a [u8]>,
    context: &str,
) -> Result<Event<'a>, XmlError> {
    reader
        .read_event()
        .map_err(|e| XmlError::malformed(context.to_owned(), e))
}

/// Returns the element's local name (namespace prefix stripped).
fn local_name(start: &BytesStart<'_>) -> Result<String, XmlError> {
    let name = start.local_name();
    std::str::from_utf8(name.as_ref())
        .map(ToOwned::to_owned)
        .map_err(|e| XmlError::ParseError(e.to_string()))
}

/// Read the text content of the current element and consume its end tag.
///
/// Expects the reader to be positioned right after a `Start` event of a
/// leaf element.
fn read_text_content(reader: &mut Reader<&[u8]>, context: &str) -> Result<String, XmlError> {
    let mut text = String::new();
    loop {
        match next_event(reader, context)? {
            Event::Text(e) => {
                let decoded = e
                    .decode()
                    .map_err(|err| XmlError::ParseError(err.to_string()))?;
                let unescaped = quick_xml::escape::unescape(&decoded)
                    .map_err(|err| XmlError::ParseError(err.to_string()))?;
                text.push_str(&unescaped);
            }
            Event::End(_) => return Ok(text),
            Event::Eof => {
                return Err(XmlError::UnexpectedElement(format!(
                    "unexpected EOF while reading {context}"
                )));
            }
            _ => {}
        }
    }
}

/// Skip over an element and all its children.
fn skip_element(reader: &mut Reader<&[u8]>, context: &str) -> Result<(), XmlError> {
    let mut depth: u32 = 1;
    loop {
        match next_event(reader, context)? {
            Event::Start(_) => depth += 1,
            Event::End(_) => {
                depth -= 1;
                if depth == 0 {
                    return Ok(());
                }
            }
            Event::Eof => {
                return Err(XmlError::UnexpectedElement(format!(
                    "unexpected EOF while skipping element in {context}"
                )));
            }
            _ => {}
        }
    }
}

/// Scan the document for the first element with the given local name and
/// return its text content.
fn find_first_text(xml: &str, target: &str) -> Result<Option<String>, XmlError> {
    let mut reader = new_reader(xml);
    loop {
        match next_event(&mut reader, target)? {
            Event::Start(e) => {
                if local_name(&e)? == target {
                    return Ok(Some(read_text_content(&mut reader, target)?));
                }
            }
            Event::Empty(e) => {
                if local_name(&e)? == target {
                    return Ok(Some(String::new()));
                }
            }
            Event::Eof => return Ok(None),
            _ => {}
        }
    }
}

/// Read an attribute's unescaped value.
fn attr_value(start: &BytesStart<'_>, name: &str) -> Result<Option<String>, XmlError> {
    match start.try_get_attribute(name)? {
        Some(attr) => {
            let value = attr
                .unescape_value()
                .map_err(|e| XmlError::ParseError(e.to_string()))?;
            Ok(Some(value.into_owned()))
        }
        None => Ok(None),
    }
}

/// Read a required float attribute, erroring with the owning element's name.
fn require_attr_f64(start: &BytesStart<'_>, name: &str, element: &str) -> Result<f64, XmlError> {
    let value = attr_value(start, name)?
        .ok_or_else(|| XmlError::MissingElement(format!("{element} {name} attribute")))?;
    parse_f64(&value)
}

/// Read an optional float attribute.
fn attr_f64(start: &BytesStart<'_>, name: &str) -> Result<Option<f64>, XmlError> {
    attr_value(start, name)?.map(|v| parse_f64(&v)).transpose()
}

fn parse_i32(s: &str) -> Result<i32, XmlError> {
    s.trim()
        .parse::<i32>()
        .map_err(|e| XmlError::ParseError(format!("invalid i32 '{s}': {e}")))
}

fn parse_f64(s: &str) -> Result<f64, XmlError> {
    s.trim()
        .parse::<f64>()
        .map_err(|e| XmlError::ParseError(format!("invalid f64 '{s}': {e}")))
}

/// Parse a carrier boolean (`TRUE`/`FALSE` in either case).
fn parse_bool(s: &str) -> Result<bool, XmlError> {
    match s.trim() {
        "TRUE" | "true" | "True" => Ok(true),
        "FALSE" | "false" | "False" => Ok(false),
        other => Err(XmlError::ParseError(format!("invalid boolean: {other}"))),
    }
}

// ---------------------------------------------------------------------------
// Envelope-only responses
// ---------------------------------------------------------------------------

impl FromResponseXml for ResetSuspendedAccountResponse {
    fn from_response_xml(xml: &str) -> Result<Self, XmlError> {
        Ok(Self::from_envelope(parse_envelope(xml)?))
    }
}

impl FromResponseXml for ChangePassPhraseRequestResponse {
    fn from_response_xml(xml: &str) -> Result<Self, XmlError> {
        let mut response = Self::from_envelope(parse_envelope(xml)?);
        if !response.is_successful() {
            return Ok(response);
        }
        if let Some(token) = find_first_text(xml, "Token")? {
            response.set_token(token)?;
        }
        Ok(response)
    }
}

impl FromResponseXml for UserSignupRequestResponse {
    fn from_response_xml(xml: &str) -> Result<Self, XmlError> {
        let mut response = Self::from_envelope(parse_envelope(xml)?);
        if !response.is_successful() {
            return Ok(response);
        }
        let confirmation = find_first_text(xml, "ConfirmationNumber")?
            .ok_or_else(|| XmlError::MissingElement("ConfirmationNumber".to_owned()))?;
        response.set_confirmation_number(confirmation);
        if let Some(account_id) = find_first_text(xml, "AccountID")? {
            response.set_account_id(account_id);
        }
        if let Some(token) = find_first_text(xml, "Token")? {
            response.set_token(token);
        }
        Ok(response)
    }
}

// ---------------------------------------------------------------------------
// Recredit response
// ---------------------------------------------------------------------------

#[derive(Default)]
struct AccountFields {
    account_id: Option<String>,
    serial_number: Option<String>,
    postage_balance: Option<String>,
    ascending_balance: Option<String>,
    account_status: Option<String>,
    device_id: Option<String>,
}

/// Read the children of the first `CertifiedIntermediary` element.
fn read_account_block(xml: &str) -> Result<AccountFields, XmlError> {
    const CONTEXT: &str = "CertifiedIntermediary";
    let mut reader = new_reader(xml);

    loop {
        match next_event(&mut reader, CONTEXT)? {
            Event::Start(e) => {
                if local_name(&e)? == CONTEXT {
                    break;
                }
            }
            Event::Eof => return Err(XmlError::MissingElement(CONTEXT.to_owned())),
            _ => {}
        }
    }

    let mut fields = AccountFields::default();
    loop {
        match next_event(&mut reader, CONTEXT)? {
            Event::Start(e) => {
                let name = local_name(&e)?;
                let slot = match name.as_str() {
                    "AccountID" => &mut fields.account_id,
                    "SerialNumber" => &mut fields.serial_number,
                    "PostageBalance" => &mut fields.postage_balance,
                    "AscendingBalance" => &mut fields.ascending_balance,
                    "AccountStatus" => &mut fields.account_status,
                    "DeviceID" => &mut fields.device_id,
                    _ => {
                        skip_element(&mut reader, CONTEXT)?;
                        continue;
                    }
                };
                *slot = Some(read_text_content(&mut reader, &name)?);
            }
            Event::End(_) => break,
            Event::Eof => {
                return Err(XmlError::UnexpectedElement(format!(
                    "unexpected EOF in {CONTEXT}"
                )));
            }
            _ => {}
        }
    }
    Ok(fields)
}

impl FromResponseXml for RecreditRequestResponse {
    fn from_response_xml(xml: &str) -> Result<Self, XmlError> {
        let mut response = Self::from_envelope(parse_envelope(xml)?);
        if !response.is_successful() {
            return Ok(response);
        }

        let fields = read_account_block(xml)?;
        // Each field is individually required; checked in the carrier's
        // documented order, failing fast on the first one missing.
        let require = |value: Option<String>, name: &str| {
            value.ok_or_else(|| XmlError::MissingElement(name.to_owned()))
        };
        let account_id = require(fields.account_id, "AccountID")?;
        let serial_number = require(fields.serial_number, "SerialNumber")?;
        let postage_balance = parse_f64(&require(fields.postage_balance, "PostageBalance")?)?;
        let ascending_balance = parse_f64(&require(fields.ascending_balance, "AscendingBalance")?)?;
        let account_status = require(fields.account_status, "AccountStatus")?;
        let device_id = require(fields.device_id, "DeviceID")?;

        let summary = AccountSummary::new(
            account_id,
            serial_number,
            postage_balance,
            ascending_balance,
            account_status,
            device_id,
        )?;
        response.set_certified_intermediary(summary);
        Ok(response)
    }
}

// ---------------------------------------------------------------------------
// Rate responses
// ---------------------------------------------------------------------------

#[derive(Default)]
struct FlatPostage {
    mail_service: Option<String>,
    rate: Option<f64>,
}

#[derive(Default)]
struct RatePayload {
    zone: Option<i32>,
    prices: Vec<PostagePrice>,
    flat: Option<FlatPostage>,
}

/// Walk the response root, collecting the top-level `Zone`, every
/// `PostagePrice`, and any flat `Postage` element.
fn parse_rate_payload(xml: &str) -> Result<RatePayload, XmlError> {
    const CONTEXT: &str = "rate response";
    let mut reader = new_reader(xml);

    // Position inside the root element.
    loop {
        match next_event(&mut reader, CONTEXT)? {
            Event::Start(_) => break,
            Event::Eof => return Err(XmlError::MissingElement("root element".to_owned())),
            _ => {}
        }
    }

    let mut payload = RatePayload::default();
    loop {
        match next_event(&mut reader, CONTEXT)? {
            Event::Start(e) => match local_name(&e)?.as_str() {
                "Zone" => {
                    let text = read_text_content(&mut reader, "Zone")?;
                    if payload.zone.is_none() {
                        payload.zone = Some(parse_i32(&text)?);
                    }
                }
                "PostagePrice" => {
                    let total = require_attr_f64(&e, "TotalAmount", "PostagePrice")?;
                    payload.prices.push(parse_postage_price(&mut reader, total)?);
                }
                "Postage" => {
                    let flat = parse_flat_postage(&mut reader)?;
                    if payload.flat.is_none() {
                        payload.flat = Some(flat);
                    }
                }
                _ => skip_element(&mut reader, CONTEXT)?,
            },
            Event::End(_) | Event::Eof => break,
            _ => {}
        }
    }
    Ok(payload)
}

/// Parse the minimal `<Postage>` shape: `MailService` and `Rate`.
fn parse_flat_postage(reader: &mut Reader<&[u8]>) -> Result<FlatPostage, XmlError> {
    const CONTEXT: &str = "Postage";
    let mut flat = FlatPostage::default();
    loop {
        match next_event(reader, CONTEXT)? {
            Event::Start(e) => {
                let name = local_name(&e)?;
                match name.as_str() {
                    "MailService" => {
                        flat.mail_service = Some(read_text_content(reader, &name)?);
                    }
                    "Rate" => {
                        let text = read_text_content(reader, &name)?;
                        flat.rate = Some(parse_f64(&text)?);
                    }
                    _ => skip_element(reader, CONTEXT)?,
                }
            }
            Event::End(_) => break,
            Event::Eof => {
                return Err(XmlError::UnexpectedElement(format!(
                    "unexpected EOF in {CONTEXT}"
                )));
            }
            _ => {}
        }
    }
    Ok(flat)
}

/// Parse the children of a `<PostagePrice>` element.
fn parse_postage_price(
    reader: &mut Reader<&[u8]>,
    total_amount: f64,
) -> Result<PostagePrice, XmlError> {
    const CONTEXT: &str = "PostagePrice";
    let mut price = PostagePrice {
        total_amount,
        ..PostagePrice::default()
    };
    loop {
        match next_event(reader, CONTEXT)? {
            Event::Start(e) => match local_name(&e)?.as_str() {
                "Postage" => {
                    let total = require_attr_f64(&e, "TotalAmount", "Postage")?;
                    price.postage = Some(parse_rated_postage(reader, total)?);
                }
                "Fees" => {
                    let total = attr_f64(&e, "TotalAmount")?;
                    price.fees = Some(parse_fees(reader, total)?);
                }
                _ => skip_element(reader, CONTEXT)?,
            },
            Event::End(_) => break,
            Event::Eof => {
                return Err(XmlError::UnexpectedElement(format!(
                    "unexpected EOF in {CONTEXT}"
                )));
            }
            _ => {}
        }
    }
    Ok(price)
}

/// Parse the `<Postage>` block nested inside a `<PostagePrice>`.
fn parse_rated_postage(
    reader: &mut Reader<&[u8]>,
    total_amount: f64,
) -> Result<RatedPostage, XmlError> {
    const CONTEXT: &str = "Postage";
    let mut postage = RatedPostage {
        total_amount,
        ..RatedPostage::default()
    };
    loop {
        match next_event(reader, CONTEXT)? {
            Event::Start(e) => {
                let name = local_name(&e)?;
                match name.as_str() {
                    "MailService" => {
                        postage.mail_service = Some(read_text_content(reader, &name)?);
                    }
                    "Zone" => {
                        let text = read_text_content(reader, &name)?;
                        postage.zone = Some(parse_i32(&text)?);
                    }
                    "IntraNDC" => {
                        let text = read_text_content(reader, &name)?;
                        postage.intra_ndc = Some(parse_bool(&text)?);
                    }
                    "Pricing" => {
                        postage.pricing = Some(read_text_content(reader, &name)?);
                    }
                    _ => skip_element(reader, CONTEXT)?,
                }
            }
            Event::End(_) => break,
            Event::Eof => {
                return Err(XmlError::UnexpectedElement(format!(
                    "unexpected EOF in {CONTEXT}"
                )));
            }
            _ => {}
        }
    }
    Ok(postage)
}

/// Parse the `<Fees>` block of a `<PostagePrice>`.
///
/// Each fee element is optional; `GroupedExtraServices` and `AMDelivery`
/// are handled explicitly rather than by the generic name mapping.
fn parse_fees(reader: &mut Reader<&[u8]>, total_amount: Option<f64>) -> Result<Fees, XmlError> {
    const CONTEXT: &str = "Fees";
    let mut fees = Fees {
        total_amount,
        ..Fees::default()
    };
    loop {
        match next_event(reader, CONTEXT)? {
            Event::Start(e) => {
                let name = local_name(&e)?;
                if name == "GroupedExtraServices" {
                    let services = attr_value(&e, "Services")?;
                    fees.grouped_extra_services =
                        Some(parse_grouped_extra_services(reader, services)?);
                    continue;
                }
                match name.as_str() {
                    "DeliveryTimeDays" => {
                        fees.delivery_time_days = Some(read_text_content(reader, &name)?);
                    }
                    "EstimatedDeliveryDate" => {
                        fees.estimated_delivery_date = Some(read_text_content(reader, &name)?);
                    }
                    _ => match fee_slot(&mut fees, &name) {
                        Some(slot) => {
                            let text = read_text_content(reader, &name)?;
                            *slot = Some(parse_f64(&text)?);
                        }
                        None => skip_element(reader, CONTEXT)?,
                    },
                }
            }
            Event::Empty(e) => {
                // An empty GroupedExtraServices still carries its
                // Services attribute.
                if local_name(&e)? == "GroupedExtraServices" {
                    let services = attr_value(&e, "Services")?;
                    fees.grouped_extra_services =
                        Some(grouped_extra_services_from_attr(services));
                }
            }
            Event::End(_) => break,
            Event::Eof => {
                return Err(XmlError::UnexpectedElement(format!(
                    "unexpected EOF in {CONTEXT}"
                )));
            }
            _ => {}
        }
    }
    Ok(fees)
}

/// Map a fee element's local name to its field in [`Fees`].
fn fee_slot<'f>(fees: &'f mut Fees, name: &str) -> Option<&'f mut Option<f64>> {
    match name {
        "CertificateOfMailing" => Some(&mut fees.certificate_of_mailing),
        "CertifiedMail" => Some(&mut fees.certified_mail),
        "CollectOnDelivery" => Some(&mut fees.collect_on_delivery),
        "DeliveryConfirmation" => Some(&mut fees.delivery_confirmation),
        "ElectronicReturnReceipt" => Some(&mut fees.electronic_return_receipt),
        "InsuredMail" => Some(&mut fees.insured_mail),
        "RegisteredMail" => Some(&mut fees.registered_mail),
        "RestrictedDelivery" => Some(&mut fees.restricted_delivery),
        "ReturnReceipt" => Some(&mut fees.return_receipt),
        "ReturnReceiptForMerchandise" => Some(&mut fees.return_receipt_for_merchandise),
        "SignatureConfirmation" => Some(&mut fees.signature_confirmation),
        "SpecialHandling" => Some(&mut fees.special_handling),
        "AdultSignature" => Some(&mut fees.adult_signature),
        "AdultSignatureRestrictedDelivery" => {
            Some(&mut fees.adult_signature_restricted_delivery)
        }
        "LiveAnimalSurcharge" => Some(&mut fees.live_animal_surcharge),
        "AMDelivery" => Some(&mut fees.am_delivery),
        _ => None,
    }
}

/// Build grouped extra services from the `Services` attribute alone.
fn grouped_extra_services_from_attr(services: Option<String>) -> GroupedExtraServices {
    GroupedExtraServices {
        services: services
            .map(|s| {
                s.split(';')
                    .filter(|part| !part.is_empty())
                    .map(str::to_owned)
                    .collect()
            })
            .unwrap_or_default(),
        fee_amount: None,
    }
}

/// Parse a `<GroupedExtraServices Services="a;b">` element.
fn parse_grouped_extra_services(
    reader: &mut Reader<&[u8]>,
    services: Option<String>,
) -> Result<GroupedExtraServices, XmlError> {
    const CONTEXT: &str = "GroupedExtraServices";
    let mut grouped = grouped_extra_services_from_attr(services);
    loop {
        match next_event(reader, CONTEXT)? {
            Event::Start(e) => {
                let name = local_name(&e)?;
                if name == "FeeAmount" {
                    let text = read_text_content(reader, &name)?;
                    grouped.fee_amount = Some(parse_f64(&text)?);
                } else {
                    skip_element(reader, CONTEXT)?;
                }
            }
            Event::End(_) => break,
            Event::Eof => {
                return Err(XmlError::UnexpectedElement(format!(
                    "unexpected EOF in {CONTEXT}"
                )));
            }
            _ => {}
        }
    }
    Ok(grouped)
}

impl FromResponseXml for PostageRateRequestResponse {
    fn from_response_xml(xml: &str) -> Result<Self, XmlError> {
        let mut response = Self::from_envelope(parse_envelope(xml)?);
        if !response.is_successful() {
            return Ok(response);
        }

        let payload = parse_rate_payload(xml)?;
        if let Some(zone) = payload.zone {
            response.set_zone(zone);
        }
        if let Some(price) = payload.prices.into_iter().next() {
            response.set_postage_price(price);
        } else {
            // No itemized breakdown: the flat Postage pair is the payload,
            // and both of its fields are required.
            let flat = payload
                .flat
                .ok_or_else(|| XmlError::MissingElement("Postage".to_owned()))?;
            let mail_service = flat
                .mail_service
                .ok_or_else(|| XmlError::MissingElement("MailService".to_owned()))?;
            let rate = flat
                .rate
                .ok_or_else(|| XmlError::MissingElement("Rate".to_owned()))?;
            response.set_postage(Postage { mail_service, rate });
        }
        Ok(response)
    }
}

impl FromResponseXml for PostageRatesRequestResponse {
    fn from_response_xml(xml: &str) -> Result<Self, XmlError> {
        let mut response = Self::from_envelope(parse_envelope(xml)?);
        if !response.is_successful() {
            return Ok(response);
        }
        for price in parse_rate_payload(xml)?.prices {
            response.push_postage_price(price);
        }
        Ok(response)
    }
}

// ---------------------------------------------------------------------------
// Label response
// ---------------------------------------------------------------------------

/// Read the chunked `<Label>` form: child fragments carrying `PartNumber`
/// attributes, reassembled in part order.
fn read_label_fragments(xml: &str) -> Result<Option<String>, XmlError> {
    const CONTEXT: &str = "Label";
    let mut reader = new_reader(xml);

    loop {
        match next_event(&mut reader, CONTEXT)? {
            Event::Start(e) => {
                if local_name(&e)? == CONTEXT {
                    break;
                }
            }
            Event::Eof => return Ok(None),
            _ => {}
        }
    }

    let mut fragments: Vec<(usize, String)> = Vec::new();
    loop {
        match next_event(&mut reader, CONTEXT)? {
            Event::Start(e) => {
                let name = local_name(&e)?;
                let part = match attr_value(&e, "PartNumber")? {
                    Some(value) => value
                        .trim()
                        .parse::<usize>()
                        .map_err(|e| XmlError::ParseError(format!("invalid PartNumber: {e}")))?,
                    None => fragments.len(),
                };
                let text = read_text_content(&mut reader, &name)?;
                fragments.push((part, text));
            }
            Event::End(_) => break,
            Event::Eof => {
                return Err(XmlError::UnexpectedElement(format!(
                    "unexpected EOF in {CONTEXT}"
                )));
            }
            _ => {}
        }
    }

    fragments.sort_by_key(|(part, _)| *part);
    let joined = fragments
        .into_iter()
        .map(|(_, text)| text)
        .collect::<String>();
    Ok(Some(joined))
}

impl FromResponseXml for LabelRequestResponse {
    fn from_response_xml(xml: &str) -> Result<Self, XmlError> {
        let mut response = Self::from_envelope(parse_envelope(xml)?);
        if !response.is_successful() {
            return Ok(response);
        }

        // The label arrives either as one base64 run or chunked under a
        // Label element.
        if let Some(data) = find_first_text(xml, "Base64LabelImage")? {
            response.set_base64_label_image(data);
        } else if let Some(data) = read_label_fragments(xml)? {
            response.set_base64_label_image(data);
        } else {
            return Err(ModelError::invalid(
                "API indicated a successful response but returned no label data",
            )
            .into());
        }

        let tracking = find_first_text(xml, "TrackingNumber")?
            .ok_or_else(|| XmlError::MissingElement("TrackingNumber".to_owned()))?;
        response.set_tracking_number(tracking);
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NS: &str = "xmlns=\"www.envmgr.com/LabelService\"";

    #[test]
    fn test_should_reject_empty_xml() {
        assert!(parse_envelope("").is_err());
    }

    #[test]
    fn test_should_require_status_element() {
        let xml = "<ChangePassPhraseRequestResponse><RequestID>1</RequestID></ChangePassPhraseRequestResponse>";
        let err = parse_envelope(xml).unwrap_err();
        assert!(err.to_string().contains("Status"));
    }

    #[test]
    fn test_should_reject_empty_status_element() {
        let xml = "<R><Status></Status></R>";
        assert!(parse_envelope(xml).is_err());
    }

    #[test]
    fn test_should_parse_envelope_through_default_namespace() {
        let xml = format!(
            "<ChangePassPhraseRequestResponse {NS}>\
             <Status>0</Status><RequesterID>lxxx</RequesterID>\
             <RequestID>abc123</RequestID>\
             </ChangePassPhraseRequestResponse>"
        );
        let envelope = parse_envelope(&xml).unwrap();
        assert!(envelope.is_successful());
        assert_eq!(envelope.requester_id(), Some("lxxx"));
        assert_eq!(envelope.request_id(), Some("abc123"));
        assert_eq!(envelope.error_message(), "");
    }

    #[test]
    fn test_should_keep_error_message_on_failure() {
        let xml = "<R><Status>12345</Status><ErrorMessage>Invalid pass phrase</ErrorMessage></R>";
        let envelope = parse_envelope(xml).unwrap();
        assert!(!envelope.is_successful());
        assert_eq!(envelope.status(), 12345);
        assert_eq!(envelope.error_message(), "Invalid pass phrase");
    }

    #[test]
    fn test_should_parse_change_passphrase_token_at_50_chars() {
        let token = "t".repeat(50);
        let xml = format!(
            "<ChangePassPhraseRequestResponse {NS}>\
             <Status>0</Status><Token>{token}</Token>\
             </ChangePassPhraseRequestResponse>"
        );
        let response = ChangePassPhraseRequestResponse::from_response_xml(&xml).unwrap();
        assert!(response.is_successful());
        assert_eq!(response.token(), Some(token.as_str()));
    }

    #[test]
    fn test_should_reject_change_passphrase_token_at_51_chars() {
        let token = "t".repeat(51);
        let xml = format!(
            "<ChangePassPhraseRequestResponse><Status>0</Status><Token>{token}</Token>\
             </ChangePassPhraseRequestResponse>"
        );
        assert!(ChangePassPhraseRequestResponse::from_response_xml(&xml).is_err());
    }

    #[test]
    fn test_should_skip_payload_on_failed_response() {
        let xml = "<ChangePassPhraseRequestResponse><Status>1</Status>\
                   <ErrorMessage>bad credentials</ErrorMessage>\
                   <Token>ignored</Token></ChangePassPhraseRequestResponse>";
        let response = ChangePassPhraseRequestResponse::from_response_xml(xml).unwrap();
        assert!(!response.is_successful());
        assert_eq!(response.token(), None);
        assert_eq!(response.error_message(), "bad credentials");
    }

    fn recredit_xml(device_id_element: &str) -> String {
        format!(
            "<RecreditRequestResponse {NS}><Status>0</Status>\
             <CertifiedIntermediary>\
             <AccountID>123456</AccountID>\
             <SerialNumber>987654</SerialNumber>\
             <PostageBalance>512.50</PostageBalance>\
             <AscendingBalance>87.50</AscendingBalance>\
             <AccountStatus>A</AccountStatus>\
             {device_id_element}\
             </CertifiedIntermediary></RecreditRequestResponse>"
        )
    }

    #[test]
    fn test_should_parse_full_recredit_response() {
        let xml = recredit_xml("<DeviceID>ABCDEF123456</DeviceID>");
        let response = RecreditRequestResponse::from_response_xml(&xml).unwrap();
        assert!(response.is_successful());
        let summary = response.certified_intermediary().unwrap();
        assert_eq!(summary.account_id(), "123456");
        assert_eq!(summary.serial_number(), "987654");
        assert!((summary.postage_balance() - 512.50).abs() < f64::EPSILON);
        assert!((summary.ascending_balance() - 87.50).abs() < f64::EPSILON);
        assert_eq!(summary.account_status(), "A");
        assert_eq!(summary.device_id(), "ABCDEF123456");
    }

    #[test]
    fn test_should_fail_recredit_missing_device_id_by_name() {
        let xml = recredit_xml("");
        let err = RecreditRequestResponse::from_response_xml(&xml).unwrap_err();
        assert!(err.to_string().contains("DeviceID"));
    }

    #[test]
    fn test_should_fail_recredit_without_certified_intermediary() {
        let xml = "<RecreditRequestResponse><Status>0</Status></RecreditRequestResponse>";
        let err = RecreditRequestResponse::from_response_xml(xml).unwrap_err();
        assert!(err.to_string().contains("CertifiedIntermediary"));
    }

    #[test]
    fn test_should_reject_recredit_with_inactive_status() {
        let xml = recredit_xml("<DeviceID>ABCDEF123456</DeviceID>")
            .replace("<AccountStatus>A</AccountStatus>", "<AccountStatus>S</AccountStatus>");
        assert!(RecreditRequestResponse::from_response_xml(&xml).is_err());
    }

    #[test]
    fn test_should_parse_flat_postage_fallback() {
        let xml = format!(
            "<PostageRateResponse {NS}><Status>0</Status><Zone>4</Zone>\
             <Postage><MailService>X</MailService><Rate>10.0</Rate></Postage>\
             </PostageRateResponse>"
        );
        let response = PostageRateRequestResponse::from_response_xml(&xml).unwrap();
        assert_eq!(response.zone(), Some(4));
        let postage = response.postage().unwrap();
        assert_eq!(postage.mail_service, "X");
        assert!((postage.rate - 10.0).abs() < f64::EPSILON);
        assert!(response.postage_price().is_none());
    }

    #[test]
    fn test_should_name_missing_rate_in_flat_fallback() {
        let xml = "<PostageRateResponse><Status>0</Status>\
                   <Postage><MailService>X</MailService></Postage></PostageRateResponse>";
        let err = PostageRateRequestResponse::from_response_xml(xml).unwrap_err();
        assert!(err.to_string().contains("Rate"));
    }

    #[test]
    fn test_should_name_missing_postage_without_price() {
        let xml = "<PostageRateResponse><Status>0</Status></PostageRateResponse>";
        let err = PostageRateRequestResponse::from_response_xml(xml).unwrap_err();
        assert!(err.to_string().contains("Postage"));
    }

    fn itemized_rate_xml() -> String {
        format!(
            "<PostageRateResponse {NS}><Status>0</Status><Zone>7</Zone>\
             <PostagePrice TotalAmount=\"25.05\">\
             <Postage TotalAmount=\"22.50\">\
             <MailService>Priority</MailService>\
             <Zone>7</Zone>\
             <IntraNDC>FALSE</IntraNDC>\
             <Pricing>CommercialBase</Pricing>\
             </Postage>\
             <Fees TotalAmount=\"2.55\">\
             <CertifiedMail>0.00</CertifiedMail>\
             <DeliveryConfirmation>2.55</DeliveryConfirmation>\
             <DeliveryTimeDays>2</DeliveryTimeDays>\
             <EstimatedDeliveryDate>08/09/2026</EstimatedDeliveryDate>\
             <GroupedExtraServices Services=\"AdultSignature;RestrictedDelivery\">\
             <FeeAmount>9.10</FeeAmount>\
             </GroupedExtraServices>\
             </Fees>\
             </PostagePrice></PostageRateResponse>"
        )
    }

    #[test]
    fn test_should_parse_itemized_postage_price() {
        let response = PostageRateRequestResponse::from_response_xml(&itemized_rate_xml()).unwrap();
        assert_eq!(response.zone(), Some(7));
        assert!(response.postage().is_none());

        let price = response.postage_price().unwrap();
        assert!((price.total_amount - 25.05).abs() < f64::EPSILON);

        let postage = price.postage.as_ref().unwrap();
        assert!((postage.total_amount - 22.50).abs() < f64::EPSILON);
        assert_eq!(postage.mail_service.as_deref(), Some("Priority"));
        assert_eq!(postage.zone, Some(7));
        assert_eq!(postage.intra_ndc, Some(false));
        assert_eq!(postage.pricing.as_deref(), Some("CommercialBase"));

        let fees = price.fees.as_ref().unwrap();
        assert_eq!(fees.total_amount, Some(2.55));
        assert_eq!(fees.certified_mail, Some(0.0));
        assert_eq!(fees.delivery_confirmation, Some(2.55));
        assert_eq!(fees.delivery_time_days.as_deref(), Some("2"));
        assert_eq!(fees.estimated_delivery_date.as_deref(), Some("08/09/2026"));

        let grouped = fees.grouped_extra_services.as_ref().unwrap();
        assert_eq!(grouped.services, ["AdultSignature", "RestrictedDelivery"]);
        assert_eq!(grouped.fee_amount, Some(9.10));
    }

    #[test]
    fn test_should_parse_multiple_postage_prices_in_order() {
        let xml = format!(
            "<PostageRatesResponse {NS}><Status>0</Status>\
             <PostagePrice TotalAmount=\"7.50\">\
             <Postage TotalAmount=\"7.50\"><MailService>Priority</MailService></Postage>\
             </PostagePrice>\
             <PostagePrice TotalAmount=\"3.25\">\
             <Postage TotalAmount=\"3.25\"><MailService>First</MailService></Postage>\
             </PostagePrice>\
             </PostageRatesResponse>"
        );
        let response = PostageRatesRequestResponse::from_response_xml(&xml).unwrap();
        let prices = response.postage_prices();
        assert_eq!(prices.len(), 2);
        assert!((prices[0].total_amount - 7.50).abs() < f64::EPSILON);
        assert_eq!(
            prices[0].postage.as_ref().unwrap().mail_service.as_deref(),
            Some("Priority")
        );
        assert_eq!(
            prices[1].postage.as_ref().unwrap().mail_service.as_deref(),
            Some("First")
        );
    }

    #[test]
    fn test_should_return_empty_prices_on_failed_rates_response() {
        let xml = "<PostageRatesResponse><Status>2</Status>\
                   <ErrorMessage>no rates</ErrorMessage></PostageRatesResponse>";
        let response = PostageRatesRequestResponse::from_response_xml(xml).unwrap();
        assert!(!response.is_successful());
        assert!(response.postage_prices().is_empty());
    }

    #[test]
    fn test_should_parse_single_run_label_response() {
        use base64::Engine;
        let encoded = base64::engine::general_purpose::STANDARD.encode(b"label");
        let xml = format!(
            "<LabelRequestResponse {NS}><Status>0</Status>\
             <Base64LabelImage>{encoded}</Base64LabelImage>\
             <TrackingNumber>9400100000000000000000</TrackingNumber>\
             </LabelRequestResponse>"
        );
        let response = LabelRequestResponse::from_response_xml(&xml).unwrap();
        assert_eq!(response.label().unwrap(), b"label");
        assert_eq!(
            response.tracking_number(),
            Some("9400100000000000000000")
        );
    }

    #[test]
    fn test_should_reassemble_label_fragments_by_part_number() {
        let xml = "<LabelRequestResponse><Status>0</Status>\
                   <Label>\
                   <Image PartNumber=\"2\">Qg==</Image>\
                   <Image PartNumber=\"1\">QQ==</Image>\
                   </Label>\
                   <TrackingNumber>940010</TrackingNumber>\
                   </LabelRequestResponse>";
        let response = LabelRequestResponse::from_response_xml(xml).unwrap();
        assert_eq!(response.base64_encoded_label(), Some("QQ==Qg=="));
    }

    #[test]
    fn test_should_fail_label_response_without_label_data() {
        let xml = "<LabelRequestResponse><Status>0</Status>\
                   <TrackingNumber>940010</TrackingNumber></LabelRequestResponse>";
        let err = LabelRequestResponse::from_response_xml(xml).unwrap_err();
        assert!(err.to_string().contains("no label data"));
    }

    #[test]
    fn test_should_require_tracking_number_on_success() {
        let xml = "<LabelRequestResponse><Status>0</Status>\
                   <Base64LabelImage>QQ==</Base64LabelImage></LabelRequestResponse>";
        let err = LabelRequestResponse::from_response_xml(xml).unwrap_err();
        assert!(err.to_string().contains("TrackingNumber"));
    }

    #[test]
    fn test_should_parse_reset_response_envelope_only() {
        let xml = "<ResetSuspendedAccountResponse><Status>0</Status>\
                   </ResetSuspendedAccountResponse>";
        let response = ResetSuspendedAccountResponse::from_response_xml(xml).unwrap();
        assert!(response.is_successful());
    }

    #[test]
    fn test_should_parse_user_signup_response() {
        let xml = "<UserSignUpRequestResponse><Status>0</Status>\
                   <ConfirmationNumber>CN-1</ConfirmationNumber>\
                   <Token>tok</Token></UserSignUpRequestResponse>";
        let response = UserSignupRequestResponse::from_response_xml(xml).unwrap();
        assert_eq!(response.confirmation_number(), Some("CN-1"));
        assert_eq!(response.token(), Some("tok"));
        assert_eq!(response.account_id(), None);
    }

    #[test]
    fn test_should_wrap_malformed_xml_with_context() {
        let xml = "<R><Status>0</Status><Unclosed></R>";
        let err = parse_envelope(xml).unwrap_err();
        assert!(matches!(err, XmlError::Malformed { .. }));
    }
}
