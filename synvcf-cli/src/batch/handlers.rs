use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::ArgMatches;

use synvcf_generator::{BatchOrchestrator, VirtualVcf, default_threads};

use crate::common::{output_type_from_matches, settings_from_matches};

pub fn run_batch(matches: &ArgMatches) -> Result<()> {
    let output_dir = matches
        .get_one::<PathBuf>("output-dir")
        .context("An output directory is required.")?;
    let num_vcfs = matches
        .get_one::<usize>("num-vcfs")
        .copied()
        .context("A number of files is required.")?;
    let vcf_prefix = matches
        .get_one::<String>("vcf-prefix")
        .cloned()
        .unwrap_or_default();
    let threads = matches
        .get_one::<usize>("threads")
        .copied()
        .unwrap_or_else(default_threads);

    let config = settings_from_matches(matches)?.into_config()?;
    let vcf = VirtualVcf::new(config)?;

    let mut orchestrator = BatchOrchestrator::new(output_dir)
        .vcf_prefix(vcf_prefix)
        .threads(threads)
        .show_progress(matches.get_flag("progress"));
    if let Some(output_type) = output_type_from_matches(matches)? {
        orchestrator = orchestrator.output_type(output_type);
    }

    let report = orchestrator.run(&vcf, num_vcfs)?;
    for file in &report.files {
        println!("{}", file.display());
    }

    Ok(())
}
