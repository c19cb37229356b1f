use super::*;

#[get("/categories", format = "application/json")]
pub fn get_categories(_account: Account, catalog: &State<Catalog>) -> Result<Vec<json::Category>> {
    let categories = usecases::query_categories(catalog.inner())?;
    Ok(Json(categories.into_iter().map(to_json::category).collect()))
}

#[get("/categories/<id>/pois", format = "application/json")]
pub fn get_category_pois(
    _account: Account,
    catalog: &State<Catalog>,
    entities: &State<Entities>,
    id: String,
) -> Result<Vec<json::PoiSummary>> {
    let pois = usecases::query_pois(catalog.inner(), &*entities.0, &id.into())?;
    Ok(Json(pois.into_iter().map(to_json::poi_summary).collect()))
}

#[get("/pois/<id>", format = "application/json")]
pub fn get_poi(
    _account: Account,
    catalog: &State<Catalog>,
    entities: &State<Entities>,
    cfg: &State<Cfg>,
    id: String,
) -> Result<json::PoiDetails> {
    let details = usecases::get_poi(
        catalog.inner(),
        &*entities.0,
        &id.into(),
        &cfg.extra_images,
    )?;
    Ok(Json(to_json::poi_details(details)))
}
