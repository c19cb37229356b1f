use crate::{id::Id, record::EntityId};

/// Local catalog reference to an external knowledge-base record,
/// prior to enrichment.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PoiStub {
    pub id: Id,
    /// Local display name, used when no label can be resolved.
    pub name: Option<String>,
    /// Link into the external knowledge base. A stub without a
    /// linked entity cannot be enriched.
    pub entity: Option<EntityId>,
    /// Local long description maintained in the seed catalog.
    pub description: Option<String>,
}
