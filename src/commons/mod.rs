use crate::commons::consts::{
    GEOSEARCH_LIMIT, GEOSEARCH_RADIUS_METERS, THUMBNAIL_WIDTH, TITLE_SEARCH_LIMIT,
};
use crate::commons::models::{CommonsPage, CommonsQueryResponse};
use crate::errors::AcquireError;
use crate::images::models::{Image, ImageProvider};
use crate::map::models::LatLng;
use async_trait::async_trait;
use url::Url;

pub mod consts;
pub mod models;
#[cfg(test)]
pub mod tests;

/// Read-only view of the media repository backing the game.
#[async_trait]
pub trait CommonsApi: Send + Sync + 'static {
    /// Photos taken near the given coordinates, closest first.
    async fn geosearch_images(&self, around: LatLng) -> Result<Vec<Image>, AcquireError>;

    /// Photos matching a free-text title search.
    async fn search_images_by_title(&self, title: &str) -> Result<Vec<Image>, AcquireError>;
}

#[derive(Clone)]
pub struct CommonsClient {
    http: reqwest::Client,
    api_url: Url,
}

impl CommonsClient {
    pub fn new(http: reqwest::Client, api_url: Url) -> Self {
        Self { http, api_url }
    }

    async fn run_query(
        &self,
        params: &[(&str, String)],
    ) -> Result<CommonsQueryResponse, AcquireError> {
        let response = self
            .http
            .get(self.api_url.clone())
            .query(params)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }
}

#[async_trait]
impl CommonsApi for CommonsClient {
    async fn geosearch_images(&self, around: LatLng) -> Result<Vec<Image>, AcquireError> {
        tracing::debug!(lat = around.lat, lng = around.lng, "Running a geosearch for photos.");
        let params = [
            ("action", String::from("query")),
            ("format", String::from("json")),
            ("generator", String::from("geosearch")),
            ("ggsprimary", String::from("all")),
            ("ggsnamespace", String::from("6")),
            ("ggsradius", GEOSEARCH_RADIUS_METERS.to_string()),
            ("ggscoord", format!("{}|{}", around.lat, around.lng)),
            ("ggslimit", GEOSEARCH_LIMIT.to_string()),
            ("prop", String::from("imageinfo")),
            ("iiprop", String::from("url|extmetadata")),
            ("iiurlwidth", THUMBNAIL_WIDTH.to_string()),
            ("origin", String::from("*")),
        ];
        let response = self.run_query(&params).await?;
        Ok(images_from_response(response, ImageProvider::Commons))
    }

    async fn search_images_by_title(&self, title: &str) -> Result<Vec<Image>, AcquireError> {
        tracing::debug!(title, "Running a title search for photos.");
        let params = [
            ("action", String::from("query")),
            ("format", String::from("json")),
            ("generator", String::from("search")),
            ("gsrsearch", title.to_string()),
            ("gsrnamespace", String::from("6")),
            ("gsrlimit", TITLE_SEARCH_LIMIT.to_string()),
            ("prop", String::from("imageinfo")),
            ("iiprop", String::from("url|extmetadata")),
            ("iiurlwidth", THUMBNAIL_WIDTH.to_string()),
            ("origin", String::from("*")),
        ];
        let response = self.run_query(&params).await?;
        Ok(images_from_response(response, ImageProvider::GenericSearch))
    }
}

fn images_from_response(response: CommonsQueryResponse, provider: ImageProvider) -> Vec<Image> {
    let Some(query) = response.query else {
        return Vec::new();
    };
    let mut pages: Vec<CommonsPage> = query.pages.into_values().collect();
    pages.sort_by_key(|page| page.index.unwrap_or(i64::MAX));
    pages
        .into_iter()
        .filter_map(|page| image_from_page(page, provider))
        .collect()
}

fn image_from_page(page: CommonsPage, provider: ImageProvider) -> Option<Image> {
    let info = page.imageinfo?.into_iter().next()?;
    let license = info
        .extmetadata
        .and_then(|metadata| metadata.license_short_name)
        .map(|cell| cell.value)
        .unwrap_or_default();
    let title = page.title.trim_start_matches("File:").to_string();
    let thumb_url = info.thumburl.unwrap_or_else(|| info.url.clone());
    Some(Image {
        url: info.url,
        thumb_url,
        title,
        license,
        provider,
    })
}
