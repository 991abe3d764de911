use std::path::PathBuf;

use clap::{Arg, Command, value_parser};

pub const IMPORT_CMD: &str = "import-reference";

pub fn create_import_cli() -> Command {
    Command::new(IMPORT_CMD)
        .about("Import a FASTA file into a reference directory usable with --reference-dir.")
        .arg_required_else_help(true)
        .arg(
            Arg::new("fasta")
                .required(true)
                .value_parser(value_parser!(PathBuf))
                .help("Plain or gzipped FASTA file"),
        )
        .arg(
            Arg::new("output")
                .required(true)
                .value_parser(value_parser!(PathBuf))
                .help("Reference directory to write"),
        )
        .arg(
            Arg::new("chromosomes")
                .short('c')
                .long("chromosomes")
                .value_delimiter(',')
                .help("Only import these records"),
        )
}
