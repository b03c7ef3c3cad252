pub const EARTH_RADIUS_KM: f64 = 6371.0;
pub const MAX_SCORE: u64 = 5000;
pub const SCORE_DECAY_KM: f64 = 2000.0;
pub const MAX_SCORED_DISTANCE_KM: f64 = 20000.0;
