//! Rate-shopping response: one itemized price per quoted mail class.

use serde::Serialize;

use crate::response::postage_rate::PostagePrice;
use crate::response::ResponseEnvelope;

/// Response to a [`crate::request::PostageRatesRequest`].
///
/// Carries the itemized [`PostagePrice`] blocks in the order the carrier
/// quoted them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostageRatesRequestResponse {
    pub(crate) envelope: ResponseEnvelope,
    postage_prices: Vec<PostagePrice>,
}

impl PostageRatesRequestResponse {
    /// Wraps a parsed envelope; prices are filled in by the XML layer on
    /// success.
    #[must_use]
    pub fn from_envelope(envelope: ResponseEnvelope) -> Self {
        Self {
            envelope,
            postage_prices: Vec::new(),
        }
    }

    /// Appends an itemized price.
    pub fn push_postage_price(&mut self, postage_price: PostagePrice) {
        self.postage_prices.push(postage_price);
    }

    /// Returns the itemized prices in document order.
    #[must_use]
    pub fn postage_prices(&self) -> &[PostagePrice] {
        &self.postage_prices
    }
}
