use std::path::PathBuf;

use anyhow::Result;
use clap::ArgMatches;
use tracing::info;

use synvcf_generator::{OutputType, VirtualVcf, write_vcf_file, write_vcf_stdout};

use crate::common::{output_type_from_matches, settings_from_matches};

pub fn run_generate(matches: &ArgMatches) -> Result<()> {
    let config = settings_from_matches(matches)?.into_config()?;
    let output = matches.get_one::<PathBuf>("output");

    let output_type = match output_type_from_matches(matches)? {
        Some(output_type) => output_type,
        None => output.map_or(OutputType::Vcf, |path| OutputType::from_path(path)),
    };

    let vcf = VirtualVcf::new(config)?;
    let lines = match output {
        Some(path) => write_vcf_file(vcf.pass()?, path, output_type)?,
        None => write_vcf_stdout(vcf.pass()?, output_type)?,
    };

    info!(
        lines,
        output = %output.map_or("<stdout>".to_string(), |p| p.display().to_string()),
        output_type = %output_type,
        "wrote VCF"
    );

    Ok(())
}
