pub const METADATA_FILE_NAME: &str = "sequence_metadata.json";
pub const SEQUENCE_FILE_PREFIX: &str = "reference_";
pub const SEQUENCE_FILE_EXTENSION: &str = "seq";

/// File name used for one chromosome's flat sequence, e.g. `reference_chr1.seq`.
pub fn sequence_file_name(chromosome: &str) -> String {
    format!("{SEQUENCE_FILE_PREFIX}{chromosome}.{SEQUENCE_FILE_EXTENSION}")
}
