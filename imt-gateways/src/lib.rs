//! # imt-gateways
//!
//! Gateway implementations towards external services.

pub mod wikidata;

pub use self::wikidata::WikidataGateway;
