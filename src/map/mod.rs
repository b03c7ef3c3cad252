use consts::{EARTH_RADIUS_KM, MAX_SCORE, MAX_SCORED_DISTANCE_KM, SCORE_DECAY_KM};
use models::{LatLng, RoundResult};

pub mod consts;
pub mod models;
#[cfg(test)]
pub mod tests;

/// Great-circle distance between two points in kilometers (haversine).
pub fn distance_km(a: LatLng, b: LatLng) -> f64 {
    let phi_1 = a.lat * std::f64::consts::PI / 180.0;
    let phi_2 = b.lat * std::f64::consts::PI / 180.0;
    let delta_phi = (b.lat - a.lat) * std::f64::consts::PI / 180.0;
    let delta_lambda = (b.lng - a.lng) * std::f64::consts::PI / 180.0;
    let h = (delta_phi / 2.0).sin().powi(2)
        + phi_1.cos() * phi_2.cos() * (delta_lambda / 2.0).sin().powi(2);
    let c = 2.0 * (h.sqrt().atan2((1.0 - h).sqrt()));
    EARTH_RADIUS_KM * c
}

/// Points for a guess that landed `distance_km` away from the target.
/// Exponential decay from `MAX_SCORE` at zero distance, hard zero from
/// `MAX_SCORED_DISTANCE_KM` onwards.
pub fn score(distance_km: f64) -> u64 {
    if distance_km >= MAX_SCORED_DISTANCE_KM {
        return 0;
    }
    (MAX_SCORE as f64 * (-distance_km / SCORE_DECAY_KM).exp()).round() as u64
}

pub fn estimate_guess(guess: LatLng, target: LatLng) -> RoundResult {
    let distance_km = distance_km(guess, target);
    RoundResult {
        distance_km,
        points: score(distance_km),
    }
}
