use std::{
    collections::{BTreeMap, HashMap},
    time::Duration,
};

use anyhow::anyhow;
use serde::Deserialize;

use imt_core::{
    entities::{url::Url, ClaimValue, Coordinate, EntityId, ExternalRecord},
    gateways::entity::{EntityGateway, FetchError},
};

/// Languages requested for labels and descriptions, in preference order.
const REQUEST_LANGUAGES: &str = "el|en";

/// Knowledge-base gateway backed by the Wikidata `wbgetentities` API.
///
/// Every fetch is a single bounded request without retries or caching.
#[derive(Debug, Clone)]
pub struct WikidataGateway {
    api_url: String,
    client: reqwest::blocking::Client,
}

impl WikidataGateway {
    pub fn new(api_url: String, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self { api_url, client })
    }
}

impl EntityGateway for WikidataGateway {
    fn fetch_entity(&self, id: &EntityId) -> Result<ExternalRecord, FetchError> {
        log::debug!("Fetching entity {id} from {}", self.api_url);
        let response = self
            .client
            .get(&self.api_url)
            .query(&[
                ("action", "wbgetentities"),
                ("ids", id.as_str()),
                ("format", "json"),
                ("languages", REQUEST_LANGUAGES),
                ("origin", "*"),
            ])
            .send()
            .and_then(|response| response.error_for_status())
            .map_err(|err| FetchError::Request(anyhow!(err)))?;
        let mut response: EntitiesResponse = response
            .json()
            .map_err(|err| FetchError::Request(anyhow!(err)))?;
        let doc = response
            .entities
            .remove(id.as_str())
            .ok_or_else(|| FetchError::MissingEntity(id.clone()))?;
        Ok(into_record(doc))
    }
}

// --- wire format of the `wbgetentities` response --- //

#[derive(Debug, Deserialize)]
struct EntitiesResponse {
    #[serde(default)]
    entities: HashMap<String, EntityDoc>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct EntityDoc {
    labels: BTreeMap<String, LocalizedValue>,
    descriptions: BTreeMap<String, LocalizedValue>,
    claims: HashMap<String, Vec<Claim>>,
    sitelinks: HashMap<String, Sitelink>,
}

#[derive(Debug, Deserialize)]
struct LocalizedValue {
    value: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Claim {
    mainsnak: MainSnak,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct MainSnak {
    datavalue: Option<DataValue>,
}

#[derive(Debug, Deserialize)]
struct DataValue {
    value: serde_json::Value,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Sitelink {
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CoordinateValue {
    latitude: f64,
    longitude: f64,
}

fn into_record(doc: EntityDoc) -> ExternalRecord {
    let EntityDoc {
        labels,
        descriptions,
        claims,
        sitelinks,
    } = doc;
    let mut record = ExternalRecord {
        labels: localized_values(labels),
        descriptions: localized_values(descriptions),
        ..Default::default()
    };
    for (property, claims) in claims {
        // Only the first claim of a property is considered.
        let Some(datavalue) = claims
            .into_iter()
            .next()
            .and_then(|claim| claim.mainsnak.datavalue)
        else {
            continue;
        };
        if let Some(value) = decode_claim(datavalue.value) {
            record.claims.insert(property, value);
        }
    }
    record.sitelinks = sitelinks
        .into_iter()
        .filter_map(|(site, link)| {
            let url = link.url?.parse::<Url>().ok()?;
            Some((site, url))
        })
        .collect();
    record
}

fn localized_values(values: BTreeMap<String, LocalizedValue>) -> BTreeMap<String, String> {
    values
        .into_iter()
        .map(|(lang, localized)| (lang, localized.value))
        .collect()
}

fn decode_claim(value: serde_json::Value) -> Option<ClaimValue> {
    match value {
        serde_json::Value::String(text) => Some(ClaimValue::Text(text)),
        value => serde_json::from_value::<CoordinateValue>(value)
            .ok()
            .map(|c| {
                ClaimValue::Coordinate(Coordinate {
                    lat: c.latitude,
                    lon: c.longitude,
                })
            }),
    }
}
