//! Enumerations and small value objects shared across requests.
//!
//! Enum shape follows the model-crate convention: `as_str` for the wire
//! value, `Display` through `as_str`, and a strict `FromStr` that rejects
//! anything outside the allowed set, since these values gate request
//! validity.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Handling priority of a mailpiece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MailClass {
    /// Priority Mail Express.
    PriorityExpress,
    /// First-Class Package Service / First-Class Mail Parcel.
    First,
    /// Library Mail.
    LibraryMail,
    /// Media Mail.
    MediaMail,
    /// Priority Mail.
    Priority,
    /// Parcel Select. SortType and EntryFacility must accompany label
    /// requests using this class.
    ParcelSelect,
    /// Retail Ground; limited to authorized shippers.
    RetailGround,
    /// Priority Mail Express International.
    PriorityMailExpressInternational,
    /// First Class Mail International.
    FirstClassMailInternational,
    /// First Class Package International.
    FirstClassPackageInternational,
    /// Priority Mail International.
    PriorityMailInternational,
    /// Rate-shopping selector for domestic shipments.
    Domestic,
    /// Rate-shopping selector for international shipments.
    International,
}

impl MailClass {
    /// Returns the wire value of this mail class.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PriorityExpress => "PriorityExpress",
            Self::First => "First",
            Self::LibraryMail => "LibraryMail",
            Self::MediaMail => "MediaMail",
            Self::Priority => "Priority",
            Self::ParcelSelect => "ParcelSelect",
            Self::RetailGround => "RetailGround",
            Self::PriorityMailExpressInternational => "PriorityMailExpressInternational",
            Self::FirstClassMailInternational => "FirstClassMailInternational",
            Self::FirstClassPackageInternational => "FirstClassPackageInternational",
            Self::PriorityMailInternational => "PriorityMailInternational",
            Self::Domestic => "Domestic",
            Self::International => "International",
        }
    }

    /// True for the classes a domestic label request accepts.
    #[must_use]
    pub fn is_domestic_label_class(self) -> bool {
        matches!(
            self,
            Self::PriorityExpress
                | Self::First
                | Self::LibraryMail
                | Self::MediaMail
                | Self::Priority
                | Self::ParcelSelect
                | Self::RetailGround
        )
    }
}

impl fmt::Display for MailClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MailClass {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "PriorityExpress" => Ok(Self::PriorityExpress),
            "First" => Ok(Self::First),
            "LibraryMail" => Ok(Self::LibraryMail),
            "MediaMail" => Ok(Self::MediaMail),
            "Priority" => Ok(Self::Priority),
            "ParcelSelect" => Ok(Self::ParcelSelect),
            "RetailGround" => Ok(Self::RetailGround),
            "PriorityMailExpressInternational" => Ok(Self::PriorityMailExpressInternational),
            "FirstClassMailInternational" => Ok(Self::FirstClassMailInternational),
            "FirstClassPackageInternational" => Ok(Self::FirstClassPackageInternational),
            "PriorityMailInternational" => Ok(Self::PriorityMailInternational),
            "Domestic" => Ok(Self::Domestic),
            "International" => Ok(Self::International),
            other => Err(Error::invalid(format!("unknown mail class: {other}"))),
        }
    }
}

/// Physical packaging category of a mailpiece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum MailShape {
    Card,
    Letter,
    Flat,
    Parcel,
    LargeParcel,
    IrregularParcel,
    FlatRateEnvelope,
    FlatRateLegalEnvelope,
    FlatRatePaddedEnvelope,
    FlatRateGiftCardEnvelope,
    FlatRateWindowEnvelope,
    FlatRateCardboardEnvelope,
    SmallFlatRateEnvelope,
    SmallFlatRateBox,
    MediumFlatRateBox,
    LargeFlatRateBox,
    DvdFlatRateBox,
    LargeVideoFlatRateBox,
    RegionalRateBoxA,
    RegionalRateBoxB,
    LargeFlatRateBoardGame,
    Box,
    HalfTrayBox,
    FullTrayBox,
    EmmTrayBox,
    FlatTubTrayBox,
}

impl MailShape {
    /// Returns the wire value of this mail shape.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Card => "Card",
            Self::Letter => "Letter",
            Self::Flat => "Flat",
            Self::Parcel => "Parcel",
            Self::LargeParcel => "LargeParcel",
            Self::IrregularParcel => "IrregularParcel",
            Self::FlatRateEnvelope => "FlatRateEnvelope",
            Self::FlatRateLegalEnvelope => "FlatRateLegalEnvelope",
            Self::FlatRatePaddedEnvelope => "FlatRatePaddedEnvelope",
            Self::FlatRateGiftCardEnvelope => "FlatRateGiftCardEnvelope",
            Self::FlatRateWindowEnvelope => "FlatRateWindowEnvelope",
            Self::FlatRateCardboardEnvelope => "FlatRateCardboardEnvelope",
            Self::SmallFlatRateEnvelope => "SmallFlatRateEnvelope",
            Self::SmallFlatRateBox => "SmallFlatRateBox",
            Self::MediumFlatRateBox => "MediumFlatRateBox",
            Self::LargeFlatRateBox => "LargeFlatRateBox",
            Self::DvdFlatRateBox => "DVDFlatRateBox",
            Self::LargeVideoFlatRateBox => "LargeVideoFlatRateBox",
            Self::RegionalRateBoxA => "RegionalRateBoxA",
            Self::RegionalRateBoxB => "RegionalRateBoxB",
            Self::LargeFlatRateBoardGame => "LargeFlatRateBoardGame",
            Self::Box => "Box",
            Self::HalfTrayBox => "HalfTrayBox",
            Self::FullTrayBox => "FullTrayBox",
            Self::EmmTrayBox => "EMMTrayBox",
            Self::FlatTubTrayBox => "FlatTubTrayBox",
        }
    }
}

impl fmt::Display for MailShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MailShape {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Card" => Ok(Self::Card),
            "Letter" => Ok(Self::Letter),
            "Flat" => Ok(Self::Flat),
            "Parcel" => Ok(Self::Parcel),
            "LargeParcel" => Ok(Self::LargeParcel),
            "IrregularParcel" => Ok(Self::IrregularParcel),
            "FlatRateEnvelope" => Ok(Self::FlatRateEnvelope),
            "FlatRateLegalEnvelope" => Ok(Self::FlatRateLegalEnvelope),
            "FlatRatePaddedEnvelope" => Ok(Self::FlatRatePaddedEnvelope),
            "FlatRateGiftCardEnvelope" => Ok(Self::FlatRateGiftCardEnvelope),
            "FlatRateWindowEnvelope" => Ok(Self::FlatRateWindowEnvelope),
            "FlatRateCardboardEnvelope" => Ok(Self::FlatRateCardboardEnvelope),
            "SmallFlatRateEnvelope" => Ok(Self::SmallFlatRateEnvelope),
            "SmallFlatRateBox" => Ok(Self::SmallFlatRateBox),
            "MediumFlatRateBox" => Ok(Self::MediumFlatRateBox),
            "LargeFlatRateBox" => Ok(Self::LargeFlatRateBox),
            "DVDFlatRateBox" => Ok(Self::DvdFlatRateBox),
            "LargeVideoFlatRateBox" => Ok(Self::LargeVideoFlatRateBox),
            "RegionalRateBoxA" => Ok(Self::RegionalRateBoxA),
            "RegionalRateBoxB" => Ok(Self::RegionalRateBoxB),
            "LargeFlatRateBoardGame" => Ok(Self::LargeFlatRateBoardGame),
            "Box" => Ok(Self::Box),
            "HalfTrayBox" => Ok(Self::HalfTrayBox),
            "FullTrayBox" => Ok(Self::FullTrayBox),
            "EMMTrayBox" => Ok(Self::EmmTrayBox),
            "FlatTubTrayBox" => Ok(Self::FlatTubTrayBox),
            other => Err(Error::invalid(format!("unknown mail shape: {other}"))),
        }
    }
}

/// Printable label sizes.
///
/// Not every size is valid for every label type: certified-mail and
/// destination-confirm labels each have their own whitelist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum LabelSize {
    /// 4" x 6", the default label size.
    Size4x6,
    Size3_5x5_25,
    Size4x4,
    Size4x5,
    Size4x4_5,
    /// 4" x 6.75" Eltron Doc-Tab label.
    DocTab,
    Size6x4,
    Size4x8,
    /// 7" x 3", the default for destination-confirm labels.
    Size7x3,
    /// 2.25" x 7.5" two-part internet label (DYMO #30384).
    Dymo30384,
    /// #10 envelope.
    EnvelopeSize10,
    /// 7" x 5" mailer.
    Mailer7x5,
    Size7x4,
    Size8x3,
    /// 9" x 6" envelope.
    Booklet,
}

impl LabelSize {
    /// Returns the wire value of this label size.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Size4x6 => "4x6",
            Self::Size3_5x5_25 => "3.5x5.25",
            Self::Size4x4 => "4x4",
            Self::Size4x5 => "4x5",
            Self::Size4x4_5 => "4x4.5",
            Self::DocTab => "DocTab",
            Self::Size6x4 => "6x4",
            Self::Size4x8 => "4x8",
            Self::Size7x3 => "7x3",
            Self::Dymo30384 => "Dymo30384",
            Self::EnvelopeSize10 => "EnvelopeSize10",
            Self::Mailer7x5 => "Mailer7x5",
            Self::Size7x4 => "7X4",
            Self::Size8x3 => "8x3",
            Self::Booklet => "Booklet",
        }
    }

    /// True for the sizes valid on an ordinary (mail-class) label.
    #[must_use]
    pub fn is_standard_size(self) -> bool {
        matches!(
            self,
            Self::Size4x6
                | Self::Size3_5x5_25
                | Self::Size4x4
                | Self::Size4x5
                | Self::Size4x4_5
                | Self::DocTab
                | Self::Size6x4
                | Self::Size4x8
        )
    }

    /// True for the sizes valid when destination confirmation is requested.
    #[must_use]
    pub fn is_destination_confirm_size(self) -> bool {
        matches!(
            self,
            Self::Size7x3
                | Self::Size6x4
                | Self::Dymo30384
                | Self::EnvelopeSize10
                | Self::Mailer7x5
        )
    }

    /// True for the sizes valid on a certified-mail label.
    #[must_use]
    pub fn is_certified_mail_size(self) -> bool {
        matches!(
            self,
            Self::Size4x6 | Self::Size7x4 | Self::Size8x3 | Self::Booklet | Self::EnvelopeSize10
        )
    }
}

impl fmt::Display for LabelSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LabelSize {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "4x6" => Ok(Self::Size4x6),
            "3.5x5.25" => Ok(Self::Size3_5x5_25),
            "4x4" => Ok(Self::Size4x4),
            "4x5" => Ok(Self::Size4x5),
            "4x4.5" => Ok(Self::Size4x4_5),
            "DocTab" => Ok(Self::DocTab),
            "6x4" => Ok(Self::Size6x4),
            "4x8" => Ok(Self::Size4x8),
            "7x3" => Ok(Self::Size7x3),
            "Dymo30384" => Ok(Self::Dymo30384),
            "EnvelopeSize10" => Ok(Self::EnvelopeSize10),
            "Mailer7x5" => Ok(Self::Mailer7x5),
            "7X4" => Ok(Self::Size7x4),
            "8x3" => Ok(Self::Size8x3),
            "Booklet" => Ok(Self::Booklet),
            other => Err(Error::invalid(format!("unknown label size: {other}"))),
        }
    }
}

/// Image formats a label can be rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum LabelImageFormat {
    Epl2,
    Zplii,
    Gif,
    GifMonochrome,
    Jpeg,
    JpegMonochrome,
    Png,
    PngMonochrome,
    BmpMonochrome,
    Pdf,
    PdfVector,
    PdfVectorWithFonts,
}

impl LabelImageFormat {
    /// Returns the wire value of this image format.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Epl2 => "EPL2",
            Self::Zplii => "ZPLII",
            Self::Gif => "GIF",
            Self::GifMonochrome => "GIFMONOCHROME",
            Self::Jpeg => "JPEG",
            Self::JpegMonochrome => "JPEGMONOCHROME",
            Self::Png => "PNG",
            Self::PngMonochrome => "PNGMONOCHROME",
            Self::BmpMonochrome => "BMPMONOCHROME",
            Self::Pdf => "PDF",
            Self::PdfVector => "PDFVector",
            Self::PdfVectorWithFonts => "PDFVectorWithFonts",
        }
    }
}

impl fmt::Display for LabelImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LabelImageFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "EPL2" => Ok(Self::Epl2),
            "ZPLII" => Ok(Self::Zplii),
            "GIF" => Ok(Self::Gif),
            "GIFMONOCHROME" => Ok(Self::GifMonochrome),
            "JPEG" => Ok(Self::Jpeg),
            "JPEGMONOCHROME" => Ok(Self::JpegMonochrome),
            "PNG" => Ok(Self::Png),
            "PNGMONOCHROME" => Ok(Self::PngMonochrome),
            "BMPMONOCHROME" => Ok(Self::BmpMonochrome),
            "PDF" => Ok(Self::Pdf),
            "PDFVector" => Ok(Self::PdfVector),
            "PDFVectorWithFonts" => Ok(Self::PdfVectorWithFonts),
            other => Err(Error::invalid(format!("unknown label image format: {other}"))),
        }
    }
}

/// Mailpiece dimensions in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MailpieceDimensions {
    /// Length in inches.
    pub length: f64,
    /// Width in inches.
    pub width: f64,
    /// Height in inches.
    pub height: f64,
}

impl MailpieceDimensions {
    /// Creates a new set of dimensions.
    #[must_use]
    pub fn new(length: f64, width: f64, height: f64) -> Self {
        Self {
            length,
            width,
            height,
        }
    }
}

/// Optional response-content switches carried on rate requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseOptions {
    /// Ask the carrier to include the itemized `PostagePrice` breakdown.
    pub postage_price: bool,
}

impl ResponseOptions {
    /// Creates response options.
    #[must_use]
    pub fn new(postage_price: bool) -> Self {
        Self { postage_price }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_round_trip_mail_class_strings() {
        for class in [
            MailClass::PriorityExpress,
            MailClass::First,
            MailClass::Domestic,
            MailClass::PriorityMailInternational,
        ] {
            assert_eq!(class.as_str().parse::<MailClass>().unwrap(), class);
        }
    }

    #[test]
    fn test_should_reject_unknown_mail_class() {
        assert!("Pigeon".parse::<MailClass>().is_err());
    }

    #[test]
    fn test_should_limit_domestic_label_classes() {
        assert!(MailClass::MediaMail.is_domestic_label_class());
        assert!(!MailClass::PriorityMailInternational.is_domestic_label_class());
        assert!(!MailClass::Domestic.is_domestic_label_class());
    }

    #[test]
    fn test_should_keep_label_size_whitelists_distinct() {
        assert!(LabelSize::Size4x6.is_standard_size());
        assert!(LabelSize::Size4x6.is_certified_mail_size());
        assert!(!LabelSize::Size4x6.is_destination_confirm_size());
        assert!(LabelSize::Size7x3.is_destination_confirm_size());
        assert!(!LabelSize::Size7x3.is_standard_size());
        assert!(LabelSize::EnvelopeSize10.is_certified_mail_size());
        assert!(LabelSize::EnvelopeSize10.is_destination_confirm_size());
    }

    #[test]
    fn test_should_parse_odd_cased_wire_values() {
        assert_eq!("7X4".parse::<LabelSize>().unwrap(), LabelSize::Size7x4);
        assert_eq!(
            "DVDFlatRateBox".parse::<MailShape>().unwrap(),
            MailShape::DvdFlatRateBox
        );
    }
}
