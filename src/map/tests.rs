use crate::map::consts::MAX_SCORE;
use crate::map::models::LatLng;
use crate::map::{distance_km, estimate_guess, score};

const EIFFEL_TOWER: LatLng = LatLng {
    lat: 48.8584,
    lng: 2.2945,
};

#[test]
fn perfect_guess_earns_max_score() {
    assert_eq!(score(0.0), MAX_SCORE);
}

#[test]
fn hopeless_guesses_earn_nothing() {
    assert_eq!(score(20000.0), 0);
    assert_eq!(score(20001.0), 0);
    assert_eq!(score(1e9), 0);
}

#[test]
fn score_never_increases_with_distance() {
    let mut previous = score(0.0);
    for step in 1..=80 {
        let current = score(step as f64 * 250.0);
        assert!(
            current <= previous,
            "score grew between {} km and {} km",
            (step - 1) * 250,
            step * 250,
        );
        previous = current;
    }
}

#[test]
fn score_follows_exponential_decay() {
    assert_eq!(score(2000.0), 1839);
    assert_eq!(score(500.0), 3894);
    assert_eq!(score(100.0), 4756);
}

#[test]
fn distance_from_a_point_to_itself_is_zero() {
    let points = [
        EIFFEL_TOWER,
        LatLng { lat: 0.0, lng: 0.0 },
        LatLng {
            lat: -33.8568,
            lng: 151.2153,
        },
        LatLng {
            lat: 89.9,
            lng: -179.9,
        },
    ];
    for point in points {
        assert!(distance_km(point, point).abs() < 1e-9);
    }
}

#[test]
fn distance_is_symmetric() {
    let paris = LatLng {
        lat: 48.8566,
        lng: 2.3522,
    };
    let tokyo = LatLng {
        lat: 35.6762,
        lng: 139.6503,
    };
    assert!((distance_km(paris, tokyo) - distance_km(tokyo, paris)).abs() < 1e-9);
}

#[test]
fn distance_respects_the_triangle_inequality() {
    let paris = LatLng {
        lat: 48.8566,
        lng: 2.3522,
    };
    let new_york = LatLng {
        lat: 40.7128,
        lng: -74.0060,
    };
    let tokyo = LatLng {
        lat: 35.6762,
        lng: 139.6503,
    };
    let direct = distance_km(paris, tokyo);
    let detour = distance_km(paris, new_york) + distance_km(new_york, tokyo);
    assert!(direct <= detour + 1e-6);
}

#[test]
fn paris_to_london_is_about_344_km() {
    let paris = LatLng {
        lat: 48.8566,
        lng: 2.3522,
    };
    let london = LatLng {
        lat: 51.5074,
        lng: -0.1278,
    };
    let distance = distance_km(paris, london);
    assert!((distance - 343.6).abs() < 1.0, "got {distance} km");
}

#[test]
fn guessing_the_eiffel_tower_exactly_scores_max() {
    let result = estimate_guess(EIFFEL_TOWER, EIFFEL_TOWER);
    assert!(result.distance_km.abs() < 1e-9);
    assert_eq!(result.points, MAX_SCORE);
}

#[test]
fn antipodal_guess_is_half_the_circumference_away() {
    let origin = LatLng { lat: 0.0, lng: 0.0 };
    let antipode = LatLng {
        lat: 0.0,
        lng: 180.0,
    };
    let result = estimate_guess(origin, antipode);
    assert!((result.distance_km - 20015.1).abs() < 1.0, "got {} km", result.distance_km);
    assert_eq!(result.points, 0);
}
