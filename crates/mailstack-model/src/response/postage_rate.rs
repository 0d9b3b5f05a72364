//! Rate response payloads: the minimal and itemized price shapes.

use serde::Serialize;

use crate::response::ResponseEnvelope;

/// The minimal rate shape: a mail service and its rate.
///
/// Returned when the request did not ask for the itemized `PostagePrice`
/// breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Postage {
    /// The quoted mail service.
    pub mail_service: String,
    /// The quoted rate in US dollars.
    pub rate: f64,
}

/// The `Postage` block nested inside an itemized `PostagePrice`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct RatedPostage {
    /// Total postage amount, from the element's `TotalAmount` attribute.
    pub total_amount: f64,
    /// The quoted mail service.
    pub mail_service: Option<String>,
    /// Postal zone to the destination, when the carrier repeats it here.
    pub zone: Option<i32>,
    /// Whether the route stays within one network distribution center.
    pub intra_ndc: Option<bool>,
    /// The pricing tier used for the quote.
    pub pricing: Option<String>,
}

/// Extra services grouped under one combined fee.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct GroupedExtraServices {
    /// Names of the grouped services (semicolon-separated on the wire).
    pub services: Vec<String>,
    /// The combined fee amount.
    pub fee_amount: Option<f64>,
}

/// The itemized fee block of a `PostagePrice`.
///
/// Every fee element is optional; the carrier includes only the fees that
/// apply to the quoted service.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[allow(missing_docs)]
pub struct Fees {
    /// Total fee amount, from the element's `TotalAmount` attribute.
    pub total_amount: Option<f64>,
    pub certificate_of_mailing: Option<f64>,
    pub certified_mail: Option<f64>,
    pub collect_on_delivery: Option<f64>,
    pub delivery_confirmation: Option<f64>,
    pub electronic_return_receipt: Option<f64>,
    pub insured_mail: Option<f64>,
    pub registered_mail: Option<f64>,
    pub restricted_delivery: Option<f64>,
    pub return_receipt: Option<f64>,
    pub return_receipt_for_merchandise: Option<f64>,
    pub signature_confirmation: Option<f64>,
    pub special_handling: Option<f64>,
    pub adult_signature: Option<f64>,
    pub adult_signature_restricted_delivery: Option<f64>,
    pub live_animal_surcharge: Option<f64>,
    pub am_delivery: Option<f64>,
    /// Delivery time in days, as the carrier renders it.
    pub delivery_time_days: Option<String>,
    /// Estimated delivery date, as the carrier renders it.
    pub estimated_delivery_date: Option<String>,
    /// Extra services grouped under one combined fee.
    pub grouped_extra_services: Option<GroupedExtraServices>,
}

/// The fully itemized price breakdown for one quoted mail service.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PostagePrice {
    /// Total price, from the element's `TotalAmount` attribute.
    pub total_amount: f64,
    /// The nested postage block.
    pub postage: Option<RatedPostage>,
    /// The nested fee block.
    pub fees: Option<Fees>,
}

/// Response to a [`crate::request::PostageRateRequest`].
///
/// Carries either the itemized [`PostagePrice`] breakdown (when the
/// request's response options asked for it) or the minimal [`Postage`]
/// pair, never both.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostageRateRequestResponse {
    pub(crate) envelope: ResponseEnvelope,
    zone: Option<i32>,
    postage: Option<Postage>,
    postage_price: Option<PostagePrice>,
}

impl PostageRateRequestResponse {
    /// Wraps a parsed envelope; payload fields are filled in by the XML
    /// layer on success.
    #[must_use]
    pub fn from_envelope(envelope: ResponseEnvelope) -> Self {
        Self {
            envelope,
            zone: None,
            postage: None,
            postage_price: None,
        }
    }

    /// Sets the postal zone to the destination.
    pub fn set_zone(&mut self, zone: i32) {
        self.zone = Some(zone);
    }

    /// Returns the postal zone to the destination, when present.
    #[must_use]
    pub fn zone(&self) -> Option<i32> {
        self.zone
    }

    /// Sets the minimal postage pair.
    pub fn set_postage(&mut self, postage: Postage) {
        self.postage = Some(postage);
    }

    /// Returns the minimal postage pair, when the response used that shape.
    #[must_use]
    pub fn postage(&self) -> Option<&Postage> {
        self.postage.as_ref()
    }

    /// Sets the itemized price breakdown.
    pub fn set_postage_price(&mut self, postage_price: PostagePrice) {
        self.postage_price = Some(postage_price);
    }

    /// Returns the itemized price breakdown, when the response used that
    /// shape.
    #[must_use]
    pub fn postage_price(&self) -> Option<&PostagePrice> {
        self.postage_price.as_ref()
    }
}
