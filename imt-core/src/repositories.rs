// Low-level catalog access traits.
// The catalog is built once at startup and is immutable afterwards,
// so implementations may be shared freely between threads.

use crate::entities::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait CatalogRepo {
    /// All categories in seed order, each with its POI count.
    fn all_categories(&self) -> Result<Vec<(Category, usize)>>;

    /// The POI stubs of a single category, in seed order.
    fn pois_of_category(&self, category_id: &Id) -> Result<Vec<PoiStub>>;

    /// Locate a POI stub across all categories and return it together
    /// with the id of the owning category. The first match in seed
    /// order wins.
    fn find_poi(&self, poi_id: &Id) -> Result<(PoiStub, Id)>;

    /// The display title of a category, falling back to the id itself
    /// for unknown categories.
    fn category_title(&self, category_id: &Id) -> String;
}
