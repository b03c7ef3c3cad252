use crate::commons::CommonsApi;
use crate::errors::AcquireError;
use crate::images::models::Image;
use crate::locations::models::Location;
use crate::wikidata::WikidataApi;

pub mod models;

/// Finds photos for a location, trying strategies from most to least
/// specific: a geosearch around the coordinates first, then photos attached
/// to the knowledge base item itself. Curated locations carry no item id and
/// get a title search instead.
pub struct ImageResolver<W, C> {
    wikidata: W,
    commons: C,
}

impl<W, C> ImageResolver<W, C>
where
    W: WikidataApi,
    C: CommonsApi,
{
    pub fn new(wikidata: W, commons: C) -> Self {
        Self { wikidata, commons }
    }

    /// Never resolves to an empty list: a round either gets photos or fails.
    pub async fn resolve(&self, location: &Location) -> Result<Vec<Image>, AcquireError> {
        let Some(item_uri) = &location.id else {
            let images = self.commons.search_images_by_title(&location.name).await?;
            if images.is_empty() {
                return Err(AcquireError::NoImagesFound);
            }
            return Ok(images);
        };
        match self.commons.geosearch_images(location.coords).await {
            Ok(images) if !images.is_empty() => return Ok(images),
            Ok(_) => {
                tracing::debug!(name = %location.name, "No photos nearby, trying item photos.")
            }
            Err(error) => {
                tracing::warn!(%error, "Geosearch failed, trying item photos.")
            }
        }
        let images = self.wikidata.item_images(item_uri).await?;
        if images.is_empty() {
            return Err(AcquireError::NoImagesFound);
        }
        Ok(images)
    }
}
