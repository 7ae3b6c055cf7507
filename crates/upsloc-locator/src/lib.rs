//! Encoder/decoder for the UPS Locator XML operation.
//!
//! [`build_locator_request`] turns an [`Address`](upsloc_core::Address),
//! [`SearchRadius`](upsloc_core::SearchRadius) and
//! [`SearchOptions`](upsloc_core::SearchOptions) into the ordered
//! `LocatorRequest` document. [`interpret_response`] gates the vendor's reply
//! and converts its `SearchResults` subtree into a `serde_json::Value`.
//! [`LocatorClient`] wires both ends to a [`Transport`].

pub mod access;
pub mod client;
pub mod error;
pub mod request;
pub mod response;
pub mod transport;
pub mod xml;

pub use access::{AccessCredentials, TransactionReference};
pub use client::{LocatorClient, LOCATOR_ENDPOINT};
pub use error::LocatorError;
pub use request::build_locator_request;
pub use response::{check_response, interpret_response, normalize_search_results};
pub use transport::{HttpTransport, Transport};
pub use xml::{parse_document, to_value, XmlElement};
