#[macro_use]
extern crate log;

use imt_core::gateways::{credentials::CredentialStore, entity::EntityGateway};

mod adapters {
    pub mod json;
}
mod web;

pub use web::{Cfg, TeamMember};

pub async fn run(
    catalog: imt_catalog::Catalog,
    credentials: Box<dyn CredentialStore + Send + Sync>,
    entities: Box<dyn EntityGateway + Send + Sync>,
    enable_cors: bool,
    cfg: Cfg,
    version: &'static str,
) {
    web::run(catalog, credentials, entities, enable_cors, cfg, version).await;
}
