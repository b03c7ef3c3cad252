use crate::locations::models::Location;
use crate::map::models::LatLng;
use rand::Rng;

/// Well-known landmarks with verified coordinates, playable without a single
/// network round-trip.
pub(super) const LANDMARKS: [(&str, &str, &str, f64, f64); 12] = [
    (
        "Eiffel Tower",
        "France",
        "wrought-iron lattice tower in Paris",
        48.858296,
        2.294479,
    ),
    (
        "Statue of Liberty",
        "United States of America",
        "colossal statue in New York Harbor",
        40.689167,
        -74.044444,
    ),
    (
        "Great Pyramid of Giza",
        "Egypt",
        "oldest of the Seven Wonders of the Ancient World",
        29.979167,
        31.134167,
    ),
    (
        "Sydney Opera House",
        "Australia",
        "performing arts centre on Sydney Harbour",
        -33.858611,
        151.214167,
    ),
    (
        "Taj Mahal",
        "India",
        "marble mausoleum in Agra",
        27.175,
        78.041944,
    ),
    (
        "Colosseum",
        "Italy",
        "ancient amphitheatre in the centre of Rome",
        41.890278,
        12.492222,
    ),
    (
        "Machu Picchu",
        "Peru",
        "fifteenth-century Inca citadel in the Andes",
        -13.163333,
        -72.545556,
    ),
    (
        "Christ the Redeemer",
        "Brazil",
        "statue of Jesus atop Mount Corcovado in Rio de Janeiro",
        -22.951944,
        -43.210556,
    ),
    (
        "Mount Fuji",
        "Japan",
        "highest mountain in Japan",
        35.360556,
        138.727778,
    ),
    (
        "Golden Gate Bridge",
        "United States of America",
        "suspension bridge across the Golden Gate strait",
        37.819722,
        -122.478611,
    ),
    (
        "Big Ben",
        "United Kingdom",
        "clock tower at the Palace of Westminster in London",
        51.500729,
        -0.124625,
    ),
    (
        "Table Mountain",
        "South Africa",
        "flat-topped mountain overlooking Cape Town",
        -33.9575,
        18.403333,
    ),
];

pub fn random() -> Location {
    let index = rand::thread_rng().gen_range(0..LANDMARKS.len());
    location_at(index)
}

pub(super) fn location_at(index: usize) -> Location {
    let (name, country, description, lat, lng) = LANDMARKS[index];
    Location {
        id: None,
        name: name.to_string(),
        country: country.to_string(),
        description: description.to_string(),
        coords: LatLng { lat, lng },
    }
}
