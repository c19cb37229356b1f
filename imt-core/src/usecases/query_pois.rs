use super::prelude::*;
use crate::{
    enrich::{self, ParsedEntity},
    entities::url::Url,
};

/// A POI stub merged with the fields extracted from its
/// knowledge-base record.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedPoi {
    pub id: Id,
    pub title: String,
    pub short: Option<String>,
    pub pos: Coordinate,
    pub image_url: Option<Url>,
    pub wikipedia_url: Option<Url>,
}

pub fn query_pois<R: CatalogRepo>(
    repo: &R,
    gateway: &dyn EntityGateway,
    category_id: &Id,
) -> Result<Vec<EnrichedPoi>> {
    let stubs = repo.pois_of_category(category_id)?;
    let mut pois = Vec::with_capacity(stubs.len());
    for stub in stubs {
        pois.push(enrich_stub(gateway, stub)?);
    }
    Ok(pois)
}

fn enrich_stub(gateway: &dyn EntityGateway, stub: PoiStub) -> Result<EnrichedPoi> {
    let PoiStub {
        id,
        name,
        entity,
        description: _,
    } = stub;
    let Some(entity) = entity else {
        // Unlinked stubs are served from local metadata only.
        return Ok(EnrichedPoi {
            title: name.unwrap_or_else(|| id.to_string()),
            id,
            short: None,
            pos: Coordinate::default(),
            image_url: None,
            wikipedia_url: None,
        });
    };
    log::debug!("Enriching POI '{id}' from entity {entity}");
    let record = gateway.fetch_entity(&entity)?;
    let ParsedEntity {
        title,
        description,
        pos,
        image_url,
        wikipedia_url,
    } = enrich::parse_entity(&entity, &record);
    Ok(EnrichedPoi {
        id,
        title,
        short: description,
        pos,
        image_url,
        wikipedia_url,
    })
}
