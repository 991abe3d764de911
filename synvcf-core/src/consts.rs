pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SOURCE_NAME: &str = "synvcf";

pub const DEFAULT_NUM_ROWS: usize = 10;
pub const DEFAULT_NUM_SAMPLES: usize = 10;
pub const DEFAULT_CHROMOSOME: &str = "chr1";
pub const DEFAULT_SAMPLE_PREFIX: &str = "sample_";
pub const DEFAULT_PHASED: bool = true;
pub const DEFAULT_LARGE_FORMAT: bool = true;

/// Width of zero-padded sample indices, e.g. `sample_0000001`.
pub const PADDED_ID_WIDTH: usize = 7;
