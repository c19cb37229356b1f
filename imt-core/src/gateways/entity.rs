use thiserror::Error;

use crate::entities::{EntityId, ExternalRecord};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request to the knowledge base failed: {0}")]
    Request(#[source] anyhow::Error),
    #[error("The knowledge base returned no record for {0}")]
    MissingEntity(EntityId),
}

/// Read access to the external knowledge base.
///
/// A fetch is a single bounded request. Callers must not expect
/// retries or caching; repeated calls with the same id may return
/// different records if the remote data changes.
pub trait EntityGateway {
    fn fetch_entity(&self, id: &EntityId) -> Result<ExternalRecord, FetchError>;
}
