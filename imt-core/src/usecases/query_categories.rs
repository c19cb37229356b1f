use super::prelude::*;

pub fn query_categories<R: CatalogRepo>(repo: &R) -> Result<Vec<(Category, usize)>> {
    Ok(repo.all_categories()?)
}
