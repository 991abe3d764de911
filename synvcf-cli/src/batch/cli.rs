use std::path::PathBuf;

use clap::{Arg, ArgAction, Command, value_parser};

use crate::common::generator_args;

pub const BATCH_CMD: &str = "generate-batch";
pub const DEFAULT_NUM_VCFS: &str = "10";

pub fn create_batch_cli() -> Command {
    Command::new(BATCH_CMD)
        .about("Generate many synthetic VCF files in parallel from one configuration.")
        .arg_required_else_help(true)
        .arg(
            Arg::new("output-dir")
                .short('d')
                .long("output-dir")
                .required(true)
                .value_parser(value_parser!(PathBuf))
                .help("Directory for the generated files, created if absent"),
        )
        .arg(
            Arg::new("num-vcfs")
                .short('n')
                .long("num-vcfs")
                .default_value(DEFAULT_NUM_VCFS)
                .value_parser(value_parser!(usize))
                .help("Number of files to generate"),
        )
        .arg(
            Arg::new("vcf-prefix")
                .short('v')
                .long("vcf-prefix")
                .default_value("")
                .help("File name prefix, followed by a random UUID"),
        )
        .arg(
            Arg::new("threads")
                .short('t')
                .long("threads")
                .value_parser(value_parser!(usize))
                .help("Worker threads [default: available parallelism]"),
        )
        .arg(
            Arg::new("progress")
                .long("progress")
                .action(ArgAction::SetTrue)
                .help("Show a progress bar"),
        )
        .args(generator_args())
}
