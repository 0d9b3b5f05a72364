//! Response to a label request: the label image and tracking number.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::response::ResponseEnvelope;

/// Response to a label request.
///
/// On success the label arrives either as one base64 run or as numbered
/// fragments that the XML layer reassembles; either way this type holds the
/// complete base64 data. The decoded bytes may be anything from JPEG image
/// data to text-based printer instructions (ZPLII), depending on the
/// requested image format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelRequestResponse {
    pub(crate) envelope: ResponseEnvelope,
    base64_label_image: Option<String>,
    tracking_number: Option<String>,
}

impl LabelRequestResponse {
    /// Wraps a parsed envelope; label data is filled in by the XML layer
    /// on success.
    #[must_use]
    pub fn from_envelope(envelope: ResponseEnvelope) -> Self {
        Self {
            envelope,
            base64_label_image: None,
            tracking_number: None,
        }
    }

    /// Sets the complete base64-encoded label data.
    pub fn set_base64_label_image(&mut self, data: impl Into<String>) {
        self.base64_label_image = Some(data.into());
    }

    /// Returns the base64-encoded label data.
    #[must_use]
    pub fn base64_encoded_label(&self) -> Option<&str> {
        self.base64_label_image.as_deref()
    }

    /// Decodes and returns the label bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when no label data is present or
    /// the data is not valid base64.
    pub fn label(&self) -> Result<Vec<u8>> {
        let encoded = self
            .base64_label_image
            .as_deref()
            .ok_or_else(|| Error::invalid("Response contains no label data"))?;
        BASE64
            .decode(encoded)
            .map_err(|e| Error::invalid(format!("Label data is not valid base64: {e}")))
    }

    /// Sets the tracking number.
    pub fn set_tracking_number(&mut self, tracking_number: impl Into<String>) {
        self.tracking_number = Some(tracking_number.into());
    }

    /// Returns the tracking number. Its length varies with the mail class
    /// and whether the mailpiece is domestic or international.
    #[must_use]
    pub fn tracking_number(&self) -> Option<&str> {
        self.tracking_number.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_decode_base64_label() {
        let mut response = LabelRequestResponse::from_envelope(ResponseEnvelope::new(0));
        response.set_base64_label_image(BASE64.encode(b"label-bytes"));
        assert_eq!(response.label().unwrap(), b"label-bytes");
    }

    #[test]
    fn test_should_error_without_label_data() {
        let response = LabelRequestResponse::from_envelope(ResponseEnvelope::new(0));
        assert!(response.label().is_err());
    }

    #[test]
    fn test_should_error_on_invalid_base64() {
        let mut response = LabelRequestResponse::from_envelope(ResponseEnvelope::new(0));
        response.set_base64_label_image("not base64 !!!");
        assert!(response.label().is_err());
    }
}
