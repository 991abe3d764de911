use rand::Rng;
use uuid::Builder;

use synvcf_core::consts::{PADDED_ID_WIDTH, SOURCE_NAME, VERSION};
use synvcf_core::{GeneratorConfig, SampleIdStyle};

use crate::consts::REFERENCE_URL_BASE;

/// Fixed leading columns of the `#CHROM` line.
pub const FIXED_COLUMNS: [&str; 9] = [
    "#CHROM", "POS", "ID", "REF", "ALT", "QUAL", "FILTER", "INFO", "FORMAT",
];

///
/// A chromosome as declared in the header.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contig {
    pub name: String,
    pub length: u64,
}

///
/// Generate one name per sample: prefix plus a plain index, a 7-digit
/// zero-padded index, or a random UUID.
///
/// UUIDs are built from `rng` rather than OS entropy so a seeded pass stays
/// reproducible.
pub fn sample_names<R: Rng + ?Sized>(config: &GeneratorConfig, rng: &mut R) -> Vec<String> {
    let prefix = config.sample_prefix();
    (1..=config.num_samples())
        .map(|i| match config.id_style() {
            SampleIdStyle::Count => format!("{prefix}{i}"),
            SampleIdStyle::PaddedCount => format!("{prefix}{i:0width$}", width = PADDED_ID_WIDTH),
            SampleIdStyle::Uuid => {
                let token = Builder::from_random_bytes(rng.random()).into_uuid();
                format!("{prefix}{token}")
            }
        })
        .collect()
}

///
/// Build the VCF header, one newline-terminated line per entry, ending with
/// the `#CHROM` column line.
///
/// # Arguments:
/// - contigs: declared chromosomes with their lengths, in output order
/// - reference_name: file name for the `##reference` provenance line
/// - large_format: also declare the `AD`, `DP`, `GQ` and `PL` FORMAT fields
/// - samples: sample column names
pub fn header_lines(
    contigs: &[Contig],
    reference_name: &str,
    large_format: bool,
    samples: &[String],
) -> Vec<String> {
    let mut lines = vec![
        "##fileformat=VCFv4.2".to_string(),
        format!("##source={SOURCE_NAME} {VERSION}"),
        r#"##FILTER=<ID=PASS,Description="All filters passed">"#.to_string(),
        r#"##INFO=<ID=NS,Number=1,Type=Integer,Description="Number of Samples With Data">"#
            .to_string(),
    ];

    lines.extend(
        contigs
            .iter()
            .map(|c| format!("##contig=<ID={},length={}>", c.name, c.length)),
    );

    lines.extend([
        format!("##reference={REFERENCE_URL_BASE}{reference_name}"),
        r#"##INFO=<ID=AF,Number=A,Type=Float,Description="Estimated allele frequency in the range (0,1)">"#.to_string(),
        r#"##INFO=<ID=DP,Number=1,Type=Integer,Description="Approximate read depth; some reads may have been filtered">"#.to_string(),
        r#"##FORMAT=<ID=GT,Number=1,Type=String,Description="Genotype">"#.to_string(),
    ]);

    if large_format {
        lines.extend([
            r#"##FORMAT=<ID=AD,Number=R,Type=Integer,Description="Allelic depths for the ref and alt alleles in the order listed">"#.to_string(),
            r#"##FORMAT=<ID=DP,Number=1,Type=Integer,Description="Approximate read depth (reads with MQ=255 or with bad mates are filtered)">"#.to_string(),
            r#"##FORMAT=<ID=GQ,Number=1,Type=Integer,Description="Genotype Quality">"#.to_string(),
            r#"##FORMAT=<ID=PL,Number=G,Type=Integer,Description="Phred-scaled genotype Likelihoods">"#.to_string(),
        ]);
    }

    let columns: Vec<&str> = FIXED_COLUMNS
        .iter()
        .copied()
        .chain(samples.iter().map(String::as_str))
        .collect();
    lines.push(columns.join("\t"));

    lines
        .into_iter()
        .map(|mut line| {
            line.push('\n');
            line
        })
        .collect()
}
