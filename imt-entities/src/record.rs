use std::{
    borrow::Borrow,
    collections::{BTreeMap, HashMap},
    fmt,
};

use crate::{geo::Coordinate, url::Url};

/// Stable identifier of a record in the external knowledge base,
/// e.g. `Q160023`.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct EntityId(String);

impl EntityId {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<String> for EntityId {
    fn from(from: String) -> Self {
        Self(from)
    }
}

impl From<&str> for EntityId {
    fn from(from: &str) -> Self {
        from.to_owned().into()
    }
}

impl From<EntityId> for String {
    fn from(from: EntityId) -> Self {
        from.0
    }
}

impl Borrow<str> for EntityId {
    fn borrow(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        f.write_str(self.as_str())
    }
}

/// A single decoded property value of an external record.
#[derive(Debug, Clone, PartialEq)]
pub enum ClaimValue {
    Coordinate(Coordinate),
    Text(String),
}

/// Raw per-entity data as returned by the external knowledge base.
///
/// Labels and descriptions are keyed by language code, claims by
/// property identifier and site links by site identifier. Label and
/// description maps are ordered so that fallback selection stays
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExternalRecord {
    pub labels: BTreeMap<String, String>,
    pub descriptions: BTreeMap<String, String>,
    pub claims: HashMap<String, ClaimValue>,
    pub sitelinks: HashMap<String, Url>,
}
