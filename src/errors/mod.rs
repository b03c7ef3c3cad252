use thiserror::Error;

/// Failures in the location/image acquisition pipeline. None of these are
/// fatal: the game surfaces them to the player and retries the round.
#[derive(Debug, Error)]
pub enum AcquireError {
    #[error("no location available: {0}")]
    LocationUnavailable(String),
    #[error("no images found for this location")]
    NoImagesFound,
    #[error("transport failure: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for AcquireError {
    fn from(error: reqwest::Error) -> Self {
        AcquireError::Transport(error.to_string())
    }
}
