//! XML wire layer for the MailStack Label Server client.
//!
//! This crate converts between the domain types in `mailstack-model` and
//! the carrier's XML dialect:
//!
//! - [`LabelXmlSerialize`] and [`to_xml`] render request documents. Element
//!   order matters to the carrier, so each request type writes its elements
//!   in the documented sequence. Credentials are wrapped in a
//!   `<CertifiedIntermediary>` element everywhere except the two
//!   label-fetching requests, which predate that convention and carry
//!   flat `<AccountID>`/`<PassPhrase>`/`<Token>` children.
//! - [`FromResponseXml`] parses response documents. Responses are declared
//!   in the `www.envmgr.com/LabelService` default namespace; parsing
//!   matches on local element names so the namespace never gets in the
//!   way. The shared envelope (`Status`, ids, error message) is parsed
//!   first, and operation payloads are read only from successful
//!   responses.

pub mod deserialize;
pub mod error;
pub mod serialize;

pub use deserialize::FromResponseXml;
pub use error::XmlError;
pub use serialize::{LabelXmlSerialize, to_xml};
