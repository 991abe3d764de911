use std::fmt::{self, Display};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use flate2::Compression;
use flate2::write::GzEncoder;

use synvcf_core::utils::is_gzipped;
use synvcf_core::{Result, SynVcfError};

use crate::consts::{VCF_EXTENSION, VCF_GZ_EXTENSION};

///
/// How generated lines are written out.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputType {
    #[default]
    Vcf,
    Gzip,
    /// Block gzip, readable by tabix-aware tools.
    Bgzip,
}

impl OutputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputType::Vcf => "vcf",
            OutputType::Gzip => "gzip",
            OutputType::Bgzip => "bgzip",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            OutputType::Vcf => VCF_EXTENSION,
            OutputType::Gzip | OutputType::Bgzip => VCF_GZ_EXTENSION,
        }
    }

    /// `Gzip` for `*.gz` paths, `Vcf` otherwise.
    pub fn from_path(path: &Path) -> Self {
        match is_gzipped(path) {
            true => OutputType::Gzip,
            false => OutputType::Vcf,
        }
    }
}

impl FromStr for OutputType {
    type Err = SynVcfError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "vcf" | "plain" => Ok(OutputType::Vcf),
            "gzip" | "gz" => Ok(OutputType::Gzip),
            "bgzip" | "bgzf" => Ok(OutputType::Bgzip),
            other => Err(SynVcfError::configuration(
                "output_type",
                format!("unknown output type '{other}', expected vcf, gzip or bgzip"),
            )),
        }
    }
}

impl Display for OutputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn write_lines<I, W>(lines: I, writer: &mut W) -> Result<io::Result<usize>>
where
    I: IntoIterator<Item = Result<String>>,
    W: Write,
{
    let mut count = 0;
    for line in lines {
        let line = line?;
        if let Err(e) = writer.write_all(line.as_bytes()) {
            return Ok(Err(e));
        }
        count += 1;
    }
    Ok(Ok(count))
}

///
/// Write generated lines to `writer`, compressing per `output_type`.
///
/// Generation errors are returned as-is; I/O errors become
/// [SynVcfError::SinkWrite] tagged with `destination`. Returns the number of
/// lines written.
pub fn write_vcf<I, W>(lines: I, writer: W, output_type: OutputType, destination: &str) -> Result<usize>
where
    I: IntoIterator<Item = Result<String>>,
    W: Write,
{
    let sink_err = |e: io::Error| SynVcfError::sink_write(destination, e);

    match output_type {
        OutputType::Vcf => {
            let mut writer = BufWriter::new(writer);
            let count = write_lines(lines, &mut writer)?.map_err(sink_err)?;
            writer.flush().map_err(sink_err)?;
            Ok(count)
        }
        OutputType::Gzip => {
            let mut encoder = GzEncoder::new(BufWriter::new(writer), Compression::default());
            let count = write_lines(lines, &mut encoder)?.map_err(sink_err)?;
            let mut inner = encoder.finish().map_err(sink_err)?;
            inner.flush().map_err(sink_err)?;
            Ok(count)
        }
        OutputType::Bgzip => {
            let mut encoder = noodles_bgzf::io::Writer::new(BufWriter::new(writer));
            let count = write_lines(lines, &mut encoder)?.map_err(sink_err)?;
            let mut inner = encoder.finish().map_err(sink_err)?;
            inner.flush().map_err(sink_err)?;
            Ok(count)
        }
    }
}

///
/// Create (or truncate) `path` and write every line into it.
///
pub fn write_vcf_file<I>(lines: I, path: &Path, output_type: OutputType) -> Result<usize>
where
    I: IntoIterator<Item = Result<String>>,
{
    let destination = path.display().to_string();
    let file = File::create(path).map_err(|e| SynVcfError::sink_write(&destination, e))?;
    write_vcf(lines, file, output_type, &destination)
}

pub fn write_vcf_stdout<I>(lines: I, output_type: OutputType) -> Result<usize>
where
    I: IntoIterator<Item = Result<String>>,
{
    write_vcf(lines, io::stdout().lock(), output_type, "<stdout>")
}
