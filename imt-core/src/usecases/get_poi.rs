use super::prelude::*;
use crate::{enrich, entities::url::Url};

/// Number of images every detail view presents, provided enough
/// placeholder images are configured.
pub const DETAIL_IMAGE_COUNT: usize = 3;

/// The fully assembled detail view of a single POI.
#[derive(Debug, Clone, PartialEq)]
pub struct PoiDetails {
    pub id: Id,
    pub category_id: Id,
    pub category_title: String,
    pub title: String,
    pub short: Option<String>,
    pub pos: Coordinate,
    pub wikipedia_url: Option<Url>,
    pub images: Vec<Url>,
    pub description: Option<String>,
}

pub fn get_poi<R: CatalogRepo>(
    repo: &R,
    gateway: &dyn EntityGateway,
    poi_id: &Id,
    extra_images: &[Url],
) -> Result<PoiDetails> {
    let (stub, category_id) = repo.find_poi(poi_id)?;
    let PoiStub {
        id,
        name: _,
        entity,
        description,
    } = stub;
    let entity = entity.ok_or(Error::UnlinkedPoi)?;
    let record = gateway.fetch_entity(&entity)?;
    let parsed = enrich::parse_entity(&entity, &record);
    let category_title = repo.category_title(&category_id);
    let images = assemble_image_list(parsed.image_url, extra_images);
    Ok(PoiDetails {
        id,
        category_id,
        category_title,
        title: parsed.title,
        short: parsed.description,
        pos: parsed.pos,
        wikipedia_url: parsed.wikipedia_url,
        images,
        description,
    })
}

/// The primary image (if any) followed by the configured placeholder
/// images, truncated to [`DETAIL_IMAGE_COUNT`] entries.
fn assemble_image_list(primary: Option<Url>, extra_images: &[Url]) -> Vec<Url> {
    primary
        .into_iter()
        .chain(extra_images.iter().cloned())
        .take(DETAIL_IMAGE_COUNT)
        .collect()
}
