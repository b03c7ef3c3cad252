use crate::cli::Args;
use std::str::FromStr;
use url::Url;

pub fn fake_args() -> Args {
    Args {
        rounds: 5,
        language: String::from("en"),
        sparql_url: Url::from_str("https://query.wikidata.org/sparql")
            .expect("Failed to construct the fake SPARQL URL."),
        commons_url: Url::from_str("https://commons.wikimedia.org/w/api.php")
            .expect("Failed to construct the fake media API URL."),
        curated_only: false,
        prefetch_size: 10,
        retry_delay_ms: 1500,
        slideshow_interval_ms: 4000,
        request_timeout_secs: 30,
    }
}
