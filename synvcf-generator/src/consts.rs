use std::ops::Range;

/// Canonical allele alphabet, in tie-break order.
pub const ALLELES: [u8; 4] = *b"ACGT";

/// Synthetic chromosome length is `num_rows * SYNTHETIC_LENGTH_FACTOR` when no
/// reference directory is configured.
pub const SYNTHETIC_LENGTH_FACTOR: u64 = 100;

pub const QUAL_RANGE: Range<u32> = 10..100;

pub const VARIANT_ID: &str = ".";
pub const FILTER_PASS: &str = "PASS";

pub const FORMAT_SMALL: &str = "GT";
pub const FORMAT_LARGE: &str = "GT:AD:DP:GQ:PL";

pub const PHASED_GENOTYPES: [&str; 4] = ["0|0", "1|0", "0|1", "1|1"];
pub const UNPHASED_GENOTYPES: [&str; 3] = ["0/0", "0/1", "1/1"];

/// Per-sample `AD:DP:GQ:PL` suffixes for large-format output.
pub const EXTRA_METRICS: [&str; 4] = [
    "0,30:30:89:913,89,0",
    "0,10:10:49:413,33,0",
    "0,20:20:55:489,89,0",
    "0,40:00:66:726,85,0",
];

/// Reference file named in the header when no reference directory is used.
pub const DEFAULT_REFERENCE_NAME: &str = "sample.fa";
pub const REFERENCE_URL_BASE: &str = "ftp://ftp.example.com/";

pub const VCF_EXTENSION: &str = ".vcf";
pub const VCF_GZ_EXTENSION: &str = ".vcf.gz";

/// Mixed into the seed of the per-row stream so it never mirrors the
/// structural stream.
pub const FAST_STREAM_SALT: u64 = 0x9E37_79B9_7F4A_7C15;

pub fn info_field(num_samples: usize) -> String {
    format!("DP=10;AF=0.5;NS={num_samples}")
}
