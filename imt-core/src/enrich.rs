// Extraction of presentation fields from raw knowledge-base records.

use std::collections::BTreeMap;

use crate::entities::{url::Url, ClaimValue, Coordinate, EntityId, ExternalRecord};

/// Languages considered for labels and descriptions, in preference order.
pub const PREFERRED_LANGUAGES: [&str; 2] = ["el", "en"];

/// Property id of the coordinate-location claim.
pub const PROP_COORDINATE_LOCATION: &str = "P625";
/// Property id of the image-filename claim.
pub const PROP_IMAGE: &str = "P18";

const SITELINK_WIKIPEDIA_EL: &str = "elwiki";
const SITELINK_WIKIPEDIA_EN: &str = "enwiki";

const THUMB_BASE_URL: &str = "https://upload.wikimedia.org/wikipedia/commons/thumb/4/4a";
/// Pixel width requested for derived thumbnails.
pub const THUMB_WIDTH_PX: u32 = 1000;

/// The flat set of presentation fields extracted from one record.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedEntity {
    pub title: String,
    pub description: Option<String>,
    pub pos: Coordinate,
    pub image_url: Option<Url>,
    pub wikipedia_url: Option<Url>,
}

/// Normalize a raw record into presentation fields.
///
/// Missing coordinates collapse to the `(0.0, 0.0)` sentinel instead of
/// propagating absence; callers cannot distinguish "no data" from a
/// record that genuinely points at null island.
pub fn parse_entity(id: &EntityId, record: &ExternalRecord) -> ParsedEntity {
    let title = pick_localized(&record.labels)
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| id.to_string());
    let description = pick_localized(&record.descriptions).map(ToOwned::to_owned);
    let pos = match record.claims.get(PROP_COORDINATE_LOCATION) {
        Some(ClaimValue::Coordinate(pos)) => *pos,
        _ => Coordinate::default(),
    };
    let image_url = match record.claims.get(PROP_IMAGE) {
        Some(ClaimValue::Text(filename)) => commons_thumbnail_url(filename, THUMB_WIDTH_PX),
        _ => None,
    };
    let wikipedia_url = record
        .sitelinks
        .get(SITELINK_WIKIPEDIA_EL)
        .or_else(|| record.sitelinks.get(SITELINK_WIKIPEDIA_EN))
        .cloned();
    ParsedEntity {
        title,
        description,
        pos,
        image_url,
        wikipedia_url,
    }
}

/// Pick the value of the first preferred language, falling back to any
/// available value.
fn pick_localized(values: &BTreeMap<String, String>) -> Option<&str> {
    PREFERRED_LANGUAGES
        .iter()
        .find_map(|lang| values.get(*lang))
        .or_else(|| values.values().next())
        .map(String::as_str)
}

/// Derive a Commons thumbnail URL for an image filename.
///
/// The fixed `/4/4a/` path segment ignores the hash-based storage
/// layout of the media host, so the derived URL is best-effort and
/// does not resolve for every filename.
pub fn commons_thumbnail_url(filename: &str, width: u32) -> Option<Url> {
    let filename = filename.trim();
    if filename.is_empty() {
        return None;
    }
    let safe = filename.replace(' ', "_");
    format!("{THUMB_BASE_URL}/{safe}/{width}px-{safe}")
        .parse()
        .ok()
}
