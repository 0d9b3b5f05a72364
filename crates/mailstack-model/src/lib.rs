//! Domain model for the MailStack Label Server client.
//!
//! This crate holds the strongly-validated value objects and the
//! request/response data types for the carrier's XML API. Nothing here
//! performs I/O: requests are plain data validated at construction and on
//! every mutation, and responses are plain data populated by the XML layer
//! in `mailstack-xml`.
//!
//! # Key components
//!
//! - [`CertifiedIntermediary`]: postage-account credentials (account id +
//!   pass phrase, or a security token)
//! - [`Address`]: a postal address with jurisdiction-dependent validation
//! - [`request`]: one type per API operation, each validating its own
//!   field bounds
//! - [`response`]: the response envelope and per-operation payloads

pub mod address;
pub mod country;
pub mod credential;
pub mod error;
pub mod request;
pub mod response;
pub mod types;

pub use address::Address;
pub use credential::CertifiedIntermediary;
pub use error::{Error, Result};
