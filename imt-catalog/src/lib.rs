//! # imt-catalog
//!
//! The immutable in-memory catalog of categories and POI stubs,
//! loaded once at startup from a JSON seed file.

use std::{fs, path::Path};

use anyhow::{Context, Result};

use imt_core::{
    entities::*,
    repositories::{CatalogRepo, Error as RepoError},
};

pub mod seed;

/// Hard cap on the number of POI stubs retained per category,
/// applied at load time.
pub const MAX_POIS_PER_CATEGORY: usize = 5;

#[derive(Debug, Default)]
pub struct Catalog {
    categories: Vec<CategoryEntry>,
}

#[derive(Debug)]
struct CategoryEntry {
    category: Category,
    pois: Vec<PoiStub>,
}

impl Catalog {
    pub fn try_load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let seed_string = fs::read_to_string(path)
            .with_context(|| format!("Unable to read seed file {}", path.display()))?;
        let seed: seed::SeedFile = serde_json::from_str(&seed_string)
            .with_context(|| format!("Unable to parse seed file {}", path.display()))?;
        let catalog = Self::from_seed(seed);
        log::info!(
            "Loaded {} categories with {} POIs from {}",
            catalog.category_count(),
            catalog.poi_count(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn from_seed(seed: seed::SeedFile) -> Self {
        let seed::SeedFile { categories, pois } = seed;
        let categories = categories
            .into_iter()
            .map(|category| {
                // The cap applies to the raw id list, before unknown
                // keys are dropped.
                let stubs = category
                    .poi_ids
                    .iter()
                    .take(MAX_POIS_PER_CATEGORY)
                    .filter_map(|key| pois.get(key))
                    .map(|poi| PoiStub {
                        id: poi.id.as_str().into(),
                        name: poi.name.clone(),
                        entity: poi.wikidata_qid.as_deref().map(Into::into),
                        description: poi.description.clone(),
                    })
                    .collect();
                CategoryEntry {
                    category: Category {
                        id: category.id.into(),
                        title: category.name,
                    },
                    pois: stubs,
                }
            })
            .collect();
        Self { categories }
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    pub fn poi_count(&self) -> usize {
        self.categories.iter().map(|entry| entry.pois.len()).sum()
    }
}

impl CatalogRepo for Catalog {
    fn all_categories(&self) -> Result<Vec<(Category, usize)>, RepoError> {
        Ok(self
            .categories
            .iter()
            .map(|entry| (entry.category.clone(), entry.pois.len()))
            .collect())
    }

    fn pois_of_category(&self, category_id: &Id) -> Result<Vec<PoiStub>, RepoError> {
        self.categories
            .iter()
            .find(|entry| entry.category.id == *category_id)
            .map(|entry| entry.pois.clone())
            .ok_or(RepoError::NotFound)
    }

    fn find_poi(&self, poi_id: &Id) -> Result<(PoiStub, Id), RepoError> {
        // Linear scan in seed order; the first match wins if an id
        // were ever duplicated across categories.
        self.categories
            .iter()
            .find_map(|entry| {
                entry
                    .pois
                    .iter()
                    .find(|stub| stub.id == *poi_id)
                    .map(|stub| (stub.clone(), entry.category.id.clone()))
            })
            .ok_or(RepoError::NotFound)
    }

    fn category_title(&self, category_id: &Id) -> String {
        self.categories
            .iter()
            .find(|entry| entry.category.id == *category_id)
            .map(|entry| entry.category.title.clone())
            .unwrap_or_else(|| category_id.to_string())
    }
}
