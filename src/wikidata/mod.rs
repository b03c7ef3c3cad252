use crate::errors::AcquireError;
use crate::images::models::{Image, ImageProvider};
use crate::locations::models::Location;
use crate::map::models::LatLng;
use crate::wikidata::consts::{ITEM_IMAGES_LIMIT, MAX_RANDOM_OFFSET};
use crate::wikidata::models::{ImageBinding, LocationBinding, SparqlResponse};
use async_trait::async_trait;
use rand::Rng;
use serde::de::DeserializeOwned;
use url::Url;

pub mod consts;
pub mod models;

/// Read-only view of the knowledge base backing the game.
#[async_trait]
pub trait WikidataApi: Send + Sync + 'static {
    /// Up to `limit` random photographed places with coordinates.
    async fn random_locations(&self, limit: usize) -> Result<Vec<Location>, AcquireError>;

    /// Direct photo URLs attached to a knowledge base item.
    async fn item_images(&self, item_uri: &str) -> Result<Vec<Image>, AcquireError>;
}

#[derive(Clone)]
pub struct WikidataClient {
    http: reqwest::Client,
    sparql_url: Url,
    language: String,
}

impl WikidataClient {
    pub fn new(http: reqwest::Client, sparql_url: Url, language: &str) -> Self {
        Self {
            http,
            sparql_url,
            language: language.to_string(),
        }
    }

    async fn run_query<B: DeserializeOwned>(
        &self,
        query: &str,
    ) -> Result<SparqlResponse<B>, AcquireError> {
        let response = self
            .http
            .get(self.sparql_url.clone())
            .query(&[("query", query), ("format", "json")])
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }
}

#[async_trait]
impl WikidataApi for WikidataClient {
    async fn random_locations(&self, limit: usize) -> Result<Vec<Location>, AcquireError> {
        let offset = rand::thread_rng().gen_range(0..MAX_RANDOM_OFFSET);
        tracing::debug!(limit, offset, "Querying the SPARQL endpoint for random locations.");
        let query = random_locations_query(limit, offset, &self.language);
        let response: SparqlResponse<LocationBinding> = self.run_query(&query).await?;
        let locations = locations_from_bindings(response.results.bindings);
        if locations.is_empty() {
            return Err(AcquireError::LocationUnavailable(String::from(
                "the knowledge base returned no usable rows",
            )));
        }
        Ok(locations)
    }

    async fn item_images(&self, item_uri: &str) -> Result<Vec<Image>, AcquireError> {
        tracing::debug!(item_uri, "Querying the SPARQL endpoint for item photos.");
        let query = item_images_query(item_uri, ITEM_IMAGES_LIMIT);
        let response: SparqlResponse<ImageBinding> = self.run_query(&query).await?;
        Ok(images_from_bindings(response.results.bindings))
    }
}

/// Samples random photographed places. The inner subquery pins down items
/// that carry both a photo and a coordinate statement; the label service
/// resolves names and descriptions in the preferred language afterwards.
fn random_locations_query(limit: usize, offset: u64, language: &str) -> String {
    format!(
        r#"SELECT ?item ?itemLabel ?itemDescription ?countryLabel ?lat ?lon WHERE {{
  {{
    SELECT ?item ?lat ?lon WHERE {{
      ?item wdt:P18 ?photo .
      ?item p:P625 ?coordinate .
      ?coordinate psv:P625 ?node .
      ?node wikibase:geoLatitude ?lat .
      ?node wikibase:geoLongitude ?lon .
    }} LIMIT {limit} OFFSET {offset}
  }}
  OPTIONAL {{ ?item wdt:P17 ?country . }}
  SERVICE wikibase:label {{ bd:serviceParam wikibase:language "{language},en". }}
}}"#
    )
}

fn item_images_query(item_uri: &str, limit: usize) -> String {
    format!("SELECT ?image WHERE {{ <{item_uri}> wdt:P18 ?image . }} LIMIT {limit}")
}

fn locations_from_bindings(bindings: Vec<LocationBinding>) -> Vec<Location> {
    bindings.into_iter().filter_map(location_from_binding).collect()
}

fn location_from_binding(binding: LocationBinding) -> Option<Location> {
    let lat = match binding.lat.value.parse::<f64>() {
        Ok(lat) => lat,
        Err(_) => {
            tracing::warn!(value = %binding.lat.value, "Dropping a row with an unparsable latitude.");
            return None;
        }
    };
    let lng = match binding.lon.value.parse::<f64>() {
        Ok(lng) => lng,
        Err(_) => {
            tracing::warn!(value = %binding.lon.value, "Dropping a row with an unparsable longitude.");
            return None;
        }
    };
    Some(Location {
        id: Some(binding.item.value),
        name: binding.item_label.value,
        country: binding.country_label.map(|cell| cell.value).unwrap_or_default(),
        description: binding.item_description.map(|cell| cell.value).unwrap_or_default(),
        coords: LatLng { lat, lng },
    })
}

fn images_from_bindings(bindings: Vec<ImageBinding>) -> Vec<Image> {
    bindings
        .into_iter()
        .map(|binding| {
            let url = ensure_https(binding.image.value);
            let title = url.rsplit('/').next().unwrap_or_default().replace("%20", " ");
            Image {
                thumb_url: url.clone(),
                url,
                title,
                license: String::new(),
                provider: ImageProvider::Wikidata,
            }
        })
        .collect()
}

// The knowledge base hands out `http://` file URLs; the media host redirects
// them to `https://` anyway, so skip the redirect hop.
fn ensure_https(url: String) -> String {
    match url.strip_prefix("http://") {
        Some(rest) => format!("https://{rest}"),
        None => url,
    }
}
