use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::ArgMatches;

use synvcf_refstore::import_reference;

pub fn run_import(matches: &ArgMatches) -> Result<()> {
    let fasta = matches
        .get_one::<PathBuf>("fasta")
        .context("A path to a FASTA file is required.")?;
    let output = matches
        .get_one::<PathBuf>("output")
        .context("An output directory is required.")?;
    let include: Option<Vec<String>> = matches
        .get_many::<String>("chromosomes")
        .map(|values| values.map(|c| c.trim().to_string()).collect());

    let manifest = import_reference(fasta, output, include.as_deref())?;
    for chromosome in manifest.chromosomes() {
        println!("{chromosome}");
    }

    Ok(())
}
