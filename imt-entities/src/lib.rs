#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # imt-entities
//!
//! Reusable, agnostic domain entities for ImathiaTour.
//!
//! The entities only contain generic functionality that does not reveal any
//! application-specific business logic.

pub mod category;
pub mod email;
pub mod geo;
pub mod id;
pub mod poi;
pub mod record;
pub mod url {
    pub use url::{ParseError, Url};
}
