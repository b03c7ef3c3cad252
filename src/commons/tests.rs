use crate::commons::models::CommonsQueryResponse;
use crate::commons::{images_from_response, CommonsApi};
use crate::errors::AcquireError;
use crate::images::models::{Image, ImageProvider};
use crate::map::models::LatLng;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::Mutex;

pub fn fake_image(title: &str, provider: ImageProvider) -> Image {
    Image {
        url: format!("https://upload.example.org/{title}"),
        thumb_url: format!("https://upload.example.org/thumb/{title}"),
        title: title.to_string(),
        license: String::from("CC BY-SA 4.0"),
        provider,
    }
}

/// Scripted stand-in for the media repository. Hands out queued responses in
/// order and records what was asked of it.
#[derive(Clone, Default)]
pub struct FakeCommons {
    state: Arc<Mutex<FakeCommonsState>>,
}

#[derive(Default)]
struct FakeCommonsState {
    geosearch_results: VecDeque<Result<Vec<Image>, AcquireError>>,
    title_results: VecDeque<Result<Vec<Image>, AcquireError>>,
    geosearch_calls: usize,
    title_calls: usize,
}

impl FakeCommons {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn push_geosearch(&self, images: Vec<Image>) {
        self.state.lock().await.geosearch_results.push_back(Ok(images));
    }

    pub async fn push_geosearch_error(&self, message: &str) {
        self.state
            .lock()
            .await
            .geosearch_results
            .push_back(Err(AcquireError::Transport(message.to_string())));
    }

    pub async fn push_title_search(&self, images: Vec<Image>) {
        self.state.lock().await.title_results.push_back(Ok(images));
    }

    pub async fn geosearch_calls(&self) -> usize {
        self.state.lock().await.geosearch_calls
    }

    pub async fn title_calls(&self) -> usize {
        self.state.lock().await.title_calls
    }
}

#[async_trait]
impl CommonsApi for FakeCommons {
    async fn geosearch_images(&self, _around: LatLng) -> Result<Vec<Image>, AcquireError> {
        let mut state = self.state.lock().await;
        state.geosearch_calls += 1;
        state.geosearch_results.pop_front().unwrap_or(Ok(Vec::new()))
    }

    async fn search_images_by_title(&self, _title: &str) -> Result<Vec<Image>, AcquireError> {
        let mut state = self.state.lock().await;
        state.title_calls += 1;
        state.title_results.pop_front().unwrap_or(Ok(Vec::new()))
    }
}

const GEOSEARCH_RESPONSE: &str = r#"{
    "batchcomplete": "",
    "query": {
        "pages": {
            "317966": {
                "pageid": 317966,
                "ns": 6,
                "title": "File:Tour Eiffel Wikimedia Commons.jpg",
                "index": 2,
                "imageinfo": [{
                    "url": "https://upload.wikimedia.org/wikipedia/commons/8/85/Tour_Eiffel_Wikimedia_Commons.jpg",
                    "thumburl": "https://upload.wikimedia.org/wikipedia/commons/thumb/8/85/Tour_Eiffel_Wikimedia_Commons.jpg/500px-Tour_Eiffel_Wikimedia_Commons.jpg",
                    "descriptionurl": "https://commons.wikimedia.org/wiki/File:Tour_Eiffel_Wikimedia_Commons.jpg",
                    "extmetadata": {
                        "LicenseShortName": {"value": "CC BY-SA 3.0", "source": "commons-desc-page", "hidden": ""}
                    }
                }]
            },
            "2129": {
                "pageid": 2129,
                "ns": 6,
                "title": "File:Champ de Mars.jpg",
                "index": 1,
                "imageinfo": [{
                    "url": "https://upload.wikimedia.org/wikipedia/commons/c/c0/Champ_de_Mars.jpg"
                }]
            },
            "99": {
                "pageid": 99,
                "ns": 6,
                "title": "File:Broken.jpg",
                "index": 3
            }
        }
    }
}"#;

#[test]
fn orders_pages_by_generator_index_and_maps_fields() {
    let response: CommonsQueryResponse = serde_json::from_str(GEOSEARCH_RESPONSE).unwrap();

    let images = images_from_response(response, ImageProvider::Commons);

    assert_eq!(images.len(), 2);
    assert_eq!(images[0].title, "Champ de Mars.jpg");
    assert_eq!(images[1].title, "Tour Eiffel Wikimedia Commons.jpg");
    assert!(images.iter().all(|image| image.provider == ImageProvider::Commons));
}

#[test]
fn thumbnail_falls_back_to_the_full_url() {
    let response: CommonsQueryResponse = serde_json::from_str(GEOSEARCH_RESPONSE).unwrap();

    let images = images_from_response(response, ImageProvider::Commons);

    assert_eq!(images[0].thumb_url, images[0].url);
    assert!(images[1].thumb_url.contains("/500px-"));
    assert_ne!(images[1].thumb_url, images[1].url);
}

#[test]
fn missing_license_metadata_becomes_an_empty_string() {
    let response: CommonsQueryResponse = serde_json::from_str(GEOSEARCH_RESPONSE).unwrap();

    let images = images_from_response(response, ImageProvider::Commons);

    assert_eq!(images[0].license, "");
    assert_eq!(images[1].license, "CC BY-SA 3.0");
}

#[test]
fn response_without_a_query_key_yields_no_images() {
    let response: CommonsQueryResponse = serde_json::from_str(r#"{"batchcomplete": ""}"#).unwrap();

    let images = images_from_response(response, ImageProvider::Commons);

    assert!(images.is_empty());
}
