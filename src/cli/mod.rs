use crate::game::consts::{RETRY_DELAY_MS, ROUNDS_PER_GAME, SLIDESHOW_INTERVAL_MS};
use crate::locations::consts::PREFETCH_BATCH_SIZE;
use clap::Parser;
use url::Url;
#[cfg(test)]
pub mod tests;

#[derive(Debug, Parser)]
pub struct Args {
    #[arg(long)]
    #[arg(default_value_t = ROUNDS_PER_GAME)]
    pub rounds: u64,
    #[arg(long)]
    #[arg(default_value = "en")]
    pub language: String,
    #[arg(long)]
    #[arg(default_value = "https://query.wikidata.org/sparql")]
    pub sparql_url: Url,
    #[arg(long)]
    #[arg(default_value = "https://commons.wikimedia.org/w/api.php")]
    pub commons_url: Url,
    #[arg(long)]
    pub curated_only: bool,
    #[arg(long)]
    #[arg(default_value_t = PREFETCH_BATCH_SIZE)]
    pub prefetch_size: usize,
    #[arg(long)]
    #[arg(default_value_t = RETRY_DELAY_MS)]
    pub retry_delay_ms: u64,
    #[arg(long)]
    #[arg(default_value_t = SLIDESHOW_INTERVAL_MS)]
    pub slideshow_interval_ms: u64,
    #[arg(long)]
    #[arg(default_value_t = 30)]
    pub request_timeout_secs: u64,
}
