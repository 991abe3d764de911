mod batch;
mod common;
mod generate;
mod import;

use anyhow::Result;
use clap::Command;
use tracing_subscriber::EnvFilter;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "synvcf";
    pub const DEFAULT_LOG_FILTER: &str = "synvcf=info";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .author("Databio")
        .about("Generate reproducible synthetic multi-sample VCF files for benchmarking and testing.")
        .subcommand_required(true)
        .subcommand(generate::cli::create_generate_cli())
        .subcommand(batch::cli::create_batch_cli())
        .subcommand(import::cli::create_import_cli())
}

fn init_logging() {
    // target prefix "synvcf" also covers the synvcf_* library crates
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(consts::DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_logging();

    let app = build_parser();
    let matches = app.get_matches();

    match matches.subcommand() {
        //
        // SINGLE FILE
        //
        Some((generate::cli::GENERATE_CMD, matches)) => {
            generate::handlers::run_generate(matches)?;
        }

        //
        // BATCH
        //
        Some((batch::cli::BATCH_CMD, matches)) => {
            batch::handlers::run_batch(matches)?;
        }

        //
        // REFERENCE IMPORT
        //
        Some((import::cli::IMPORT_CMD, matches)) => {
            import::handlers::run_import(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
