use crate::cli::Args;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub fn init(_args: &Args) {
    let env_filter = EnvFilter::default().add_directive("strabo=info".parse().unwrap());
    // Logs go to stderr so they never interleave with the game's own output.
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
