use serde::Serialize;

/// Which lookup strategy produced an image.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub enum ImageProvider {
    Commons,
    Wikidata,
    GenericSearch,
}

/// One photo of the round's location.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub url: String,
    /// Smaller rendition when the provider offers one; otherwise same as `url`.
    pub thumb_url: String,
    pub title: String,
    /// Short license name; empty when the provider reported none.
    pub license: String,
    pub provider: ImageProvider,
}
