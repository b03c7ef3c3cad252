/// How many rounds one game lasts by default.
pub const ROUNDS_PER_GAME: u64 = 5;

/// How long a failed round waits before it is retried.
pub const RETRY_DELAY_MS: u64 = 1500;

/// How often slideshow mode moves to the next photo.
pub const SLIDESHOW_INTERVAL_MS: u64 = 4000;
