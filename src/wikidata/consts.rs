/// Upper bound for the random query offset. The knowledge base holds far more
/// photographed places than this, so any offset below it lands on real rows.
pub const MAX_RANDOM_OFFSET: u64 = 1_000_000;

/// How many direct item photos to ask for at most.
pub const ITEM_IMAGES_LIMIT: usize = 10;
