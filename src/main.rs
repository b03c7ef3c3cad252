use crate::cli::Args;
use crate::commons::CommonsClient;
use crate::game::GameSession;
use crate::wikidata::WikidataClient;
use clap::Parser;
use std::time::Duration;
use tokio::sync::mpsc;

mod cli;
mod commons;
mod console;
mod errors;
mod game;
mod images;
mod locations;
mod logging;
mod map;
mod wikidata;

#[tokio::main]
async fn main() {
    let args = Args::parse();
    logging::init(&args);

    let http = reqwest::Client::builder()
        .user_agent(concat!("strabo/", env!("CARGO_PKG_VERSION")))
        .timeout(Duration::from_secs(args.request_timeout_secs))
        .build()
        .expect("Failed to build the HTTP client.");
    let wikidata = WikidataClient::new(http.clone(), args.sparql_url.clone(), &args.language);
    let commons = CommonsClient::new(http, args.commons_url.clone());

    let (commands_tx, commands_rx) = mpsc::unbounded_channel();
    let (events_tx, events_rx) = mpsc::unbounded_channel();
    let session = GameSession::new(&args, wikidata, commons, commands_rx, events_tx);
    tokio::spawn(session.run());

    console::run(commands_tx, events_rx).await;
}
