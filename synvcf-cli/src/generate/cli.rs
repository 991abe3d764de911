use std::path::PathBuf;

use clap::{Arg, Command, value_parser};

use crate::common::generator_args;

pub const GENERATE_CMD: &str = "generate";

pub fn create_generate_cli() -> Command {
    Command::new(GENERATE_CMD)
        .about("Generate one synthetic VCF file, or stream it to stdout.")
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(value_parser!(PathBuf))
                .help("Output path; *.gz paths are gzipped unless --output-type says otherwise"),
        )
        .args(generator_args())
}
