//! Flags shared by every subcommand that generates VCF output.
use std::path::PathBuf;

use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, value_parser};

use synvcf_core::GeneratorSettings;
use synvcf_generator::OutputType;

pub const ARG_NUM_ROWS: &str = "num-rows";
pub const ARG_NUM_SAMPLES: &str = "num-samples";
pub const ARG_CHROMOSOMES: &str = "chromosomes";
pub const ARG_SEED: &str = "seed";
pub const ARG_SAMPLE_PREFIX: &str = "sample-prefix";
pub const ARG_ID_TYPE: &str = "id-type";
pub const ARG_UNPHASED: &str = "unphased";
pub const ARG_SMALL_FORMAT: &str = "small-format";
pub const ARG_REFERENCE_DIR: &str = "reference-dir";
pub const ARG_CONFIG: &str = "config";
pub const ARG_OUTPUT_TYPE: &str = "output-type";

pub fn generator_args() -> Vec<Arg> {
    vec![
        Arg::new(ARG_NUM_ROWS)
            .short('r')
            .long(ARG_NUM_ROWS)
            .value_parser(value_parser!(usize))
            .help("Number of variant rows per chromosome [default: 10]"),
        Arg::new(ARG_NUM_SAMPLES)
            .short('s')
            .long(ARG_NUM_SAMPLES)
            .value_parser(value_parser!(usize))
            .help("Number of sample columns [default: 10]"),
        Arg::new(ARG_CHROMOSOMES)
            .short('c')
            .long(ARG_CHROMOSOMES)
            .value_delimiter(',')
            .help("Comma separated chromosomes to emit, in order [default: chr1]"),
        Arg::new(ARG_SEED)
            .long(ARG_SEED)
            .value_parser(value_parser!(u64))
            .help("Seed for reproducible output; random when omitted"),
        Arg::new(ARG_SAMPLE_PREFIX)
            .short('p')
            .long(ARG_SAMPLE_PREFIX)
            .help("Prefix for sample names [default: sample_]"),
        Arg::new(ARG_ID_TYPE)
            .short('i')
            .long(ARG_ID_TYPE)
            .help("Sample name style: count, padded_count or uuid [default: padded_count]"),
        Arg::new(ARG_UNPHASED)
            .long(ARG_UNPHASED)
            .action(ArgAction::SetTrue)
            .help("Emit unphased genotypes (0/1) instead of phased (0|1)"),
        Arg::new(ARG_SMALL_FORMAT)
            .long(ARG_SMALL_FORMAT)
            .action(ArgAction::SetTrue)
            .help("Emit only GT, without AD:DP:GQ:PL"),
        Arg::new(ARG_REFERENCE_DIR)
            .short('f')
            .long(ARG_REFERENCE_DIR)
            .value_parser(value_parser!(PathBuf))
            .help("Directory created by import-reference; REF bases are read from it"),
        Arg::new(ARG_CONFIG)
            .long(ARG_CONFIG)
            .value_parser(value_parser!(PathBuf))
            .help("YAML settings file; command line flags take precedence"),
        Arg::new(ARG_OUTPUT_TYPE)
            .long(ARG_OUTPUT_TYPE)
            .value_parser(["vcf", "gzip", "bgzip"])
            .help("Output compression"),
    ]
}

///
/// Collect generator settings from the command line, layered over the
/// `--config` file when one is given.
///
pub fn settings_from_matches(matches: &ArgMatches) -> Result<GeneratorSettings> {
    let base = match matches.get_one::<PathBuf>(ARG_CONFIG) {
        Some(path) => GeneratorSettings::from_yaml_file(path)?,
        None => GeneratorSettings::default(),
    };

    let flags = GeneratorSettings {
        num_rows: matches.get_one::<usize>(ARG_NUM_ROWS).copied(),
        num_samples: matches.get_one::<usize>(ARG_NUM_SAMPLES).copied(),
        chromosomes: matches
            .get_many::<String>(ARG_CHROMOSOMES)
            .map(|values| values.map(|c| c.trim().to_string()).collect()),
        sample_prefix: matches.get_one::<String>(ARG_SAMPLE_PREFIX).cloned(),
        id_type: matches.get_one::<String>(ARG_ID_TYPE).cloned(),
        phased: matches.get_flag(ARG_UNPHASED).then_some(false),
        large_format: matches.get_flag(ARG_SMALL_FORMAT).then_some(false),
        reference_dir: matches.get_one::<PathBuf>(ARG_REFERENCE_DIR).cloned(),
        seed: matches.get_one::<u64>(ARG_SEED).copied(),
    };

    Ok(base.overlay(flags))
}

/// The `--output-type` flag, if given.
pub fn output_type_from_matches(matches: &ArgMatches) -> Result<Option<OutputType>> {
    Ok(matches
        .get_one::<String>(ARG_OUTPUT_TYPE)
        .map(|raw| raw.parse::<OutputType>())
        .transpose()?)
}
