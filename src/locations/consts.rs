/// How many locations one background prefetch asks the knowledge base for.
pub const PREFETCH_BATCH_SIZE: usize = 10;
