//! # imt-core
//!
//! Business logic of the ImathiaTour backend: the catalog repository
//! contract, the gateway seams towards the knowledge base and the
//! credential store, the enrichment parser and the usecases built on
//! top of them.

pub mod entities {
    pub use imt_entities::{
        category::*, email::*, geo::*, id::*, poi::*, record::*, url,
    };
}

pub mod enrich;
pub mod gateways {
    pub mod credentials;
    pub mod entity;
}
pub mod repositories;
pub mod usecases;
