use crate::id::Id;

/// A curated POI category of the local catalog.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Category {
    pub id: Id,
    pub title: String,
}
