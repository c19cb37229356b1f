// On-disk schema of the catalog seed file.

use std::collections::HashMap;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedFile {
    pub categories: Vec<SeedCategory>,
    pub pois: HashMap<String, SeedPoi>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedCategory {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub poi_ids: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedPoi {
    pub id: String,
    pub name: Option<String>,
    pub wikidata_qid: Option<String>,
    pub description: Option<String>,
}
