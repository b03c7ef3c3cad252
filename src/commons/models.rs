use serde::Deserialize;
use std::collections::HashMap;

/// Top level of a MediaWiki `action=query` response. The `query` key is
/// absent entirely when a generator matches nothing.
#[derive(Debug, Deserialize)]
pub struct CommonsQueryResponse {
    pub query: Option<CommonsQuery>,
}

#[derive(Debug, Deserialize)]
pub struct CommonsQuery {
    #[serde(default)]
    pub pages: HashMap<String, CommonsPage>,
}

#[derive(Debug, Deserialize)]
pub struct CommonsPage {
    pub title: String,
    /// Position within the generator's result order. Pages arrive keyed by
    /// page id, so this is the only way to restore that order.
    pub index: Option<i64>,
    pub imageinfo: Option<Vec<ImageInfo>>,
}

#[derive(Debug, Deserialize)]
pub struct ImageInfo {
    pub url: String,
    pub thumburl: Option<String>,
    pub extmetadata: Option<ExtMetadata>,
}

#[derive(Debug, Deserialize)]
pub struct ExtMetadata {
    #[serde(rename = "LicenseShortName")]
    pub license_short_name: Option<MetadataValue>,
}

#[derive(Debug, Deserialize)]
pub struct MetadataValue {
    pub value: String,
}
