use crate::map::models::LatLng;
use serde::Serialize;

/// A place the player is asked to find on the map.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Knowledge base entity URI; `None` for curated landmarks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub country: String,
    pub description: String,
    pub coords: LatLng,
}
