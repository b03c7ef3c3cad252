/// Search radius around the target coordinates, in meters.
pub const GEOSEARCH_RADIUS_METERS: u32 = 5000;

/// How many nearby photos to ask for at most.
pub const GEOSEARCH_LIMIT: usize = 20;

/// How many photos a title search returns at most.
pub const TITLE_SEARCH_LIMIT: usize = 5;

/// Width of the thumbnail renditions the media host is asked to produce.
pub const THUMBNAIL_WIDTH: u32 = 500;
