use std::collections::HashSet;
use std::fmt::{self, Display};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use rand::Rng;

use crate::consts::*;
use crate::errors::{Result, SynVcfError};

///
/// How generated sample column names are suffixed after the prefix.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SampleIdStyle {
    /// `sample_1`, `sample_2`, ...
    Count,
    /// `sample_0000001`, `sample_0000002`, ...
    #[default]
    PaddedCount,
    /// `sample_<random unique token>`
    Uuid,
}

impl SampleIdStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            SampleIdStyle::Count => "count",
            SampleIdStyle::PaddedCount => "padded_count",
            SampleIdStyle::Uuid => "uuid",
        }
    }
}

impl FromStr for SampleIdStyle {
    type Err = SynVcfError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "count" => Ok(SampleIdStyle::Count),
            "padded_count" => Ok(SampleIdStyle::PaddedCount),
            "uuid" => Ok(SampleIdStyle::Uuid),
            other => Err(SynVcfError::configuration(
                "id_type",
                format!("unexpected sample ID type \"{other}\" (expected count, padded_count or uuid)"),
            )),
        }
    }
}

impl Display for SampleIdStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

///
/// The virtual callset to synthesize. Immutable once built; cloning it is how
/// a configuration is handed to another worker by value.
///
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    num_rows: usize,
    num_samples: usize,
    chromosomes: Vec<String>,
    sample_prefix: String,
    id_style: SampleIdStyle,
    phased: bool,
    large_format: bool,
    reference_dir: Option<PathBuf>,
    requested_seed: Option<u64>,
    seed: u64,
}

impl GeneratorConfig {
    pub fn builder() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::default()
    }

    /// Rows generated per chromosome.
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn num_samples(&self) -> usize {
        self.num_samples
    }

    pub fn chromosomes(&self) -> &[String] {
        &self.chromosomes
    }

    pub fn sample_prefix(&self) -> &str {
        &self.sample_prefix
    }

    pub fn id_style(&self) -> SampleIdStyle {
        self.id_style
    }

    pub fn phased(&self) -> bool {
        self.phased
    }

    pub fn large_format(&self) -> bool {
        self.large_format
    }

    pub fn reference_dir(&self) -> Option<&Path> {
        self.reference_dir.as_deref()
    }

    /// The seed the caller asked for, if any.
    pub fn requested_seed(&self) -> Option<u64> {
        self.requested_seed
    }

    /// The seed every generation pass starts from. Equal to the requested
    /// seed, or drawn once from OS entropy when none was requested.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

///
/// Builder for [GeneratorConfig]. Unset fields take the CLI defaults.
///
#[derive(Debug, Clone)]
pub struct GeneratorConfigBuilder {
    num_rows: usize,
    num_samples: usize,
    chromosomes: Vec<String>,
    sample_prefix: String,
    id_style: SampleIdStyle,
    phased: bool,
    large_format: bool,
    reference_dir: Option<PathBuf>,
    seed: Option<u64>,
}

impl Default for GeneratorConfigBuilder {
    fn default() -> Self {
        Self {
            num_rows: DEFAULT_NUM_ROWS,
            num_samples: DEFAULT_NUM_SAMPLES,
            chromosomes: vec![DEFAULT_CHROMOSOME.to_string()],
            sample_prefix: DEFAULT_SAMPLE_PREFIX.to_string(),
            id_style: SampleIdStyle::default(),
            phased: DEFAULT_PHASED,
            large_format: DEFAULT_LARGE_FORMAT,
            reference_dir: None,
            seed: None,
        }
    }
}

impl GeneratorConfigBuilder {
    pub fn num_rows(mut self, num_rows: usize) -> Self {
        self.num_rows = num_rows;
        self
    }

    pub fn num_samples(mut self, num_samples: usize) -> Self {
        self.num_samples = num_samples;
        self
    }

    pub fn chromosomes<I, S>(mut self, chromosomes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.chromosomes = chromosomes.into_iter().map(Into::into).collect();
        self
    }

    pub fn sample_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.sample_prefix = prefix.into();
        self
    }

    pub fn id_style(mut self, id_style: SampleIdStyle) -> Self {
        self.id_style = id_style;
        self
    }

    pub fn phased(mut self, phased: bool) -> Self {
        self.phased = phased;
        self
    }

    pub fn large_format(mut self, large_format: bool) -> Self {
        self.large_format = large_format;
        self
    }

    pub fn reference_dir(mut self, reference_dir: Option<PathBuf>) -> Self {
        self.reference_dir = reference_dir;
        self
    }

    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    ///
    /// Validate and freeze the configuration.
    ///
    /// Fails with [SynVcfError::Configuration] naming the offending field.
    pub fn build(self) -> Result<GeneratorConfig> {
        if self.num_samples < 1 {
            return Err(SynVcfError::configuration(
                "num_samples",
                format!("number of samples must be greater than 0, got {}", self.num_samples),
            ));
        }
        if self.num_rows < 1 {
            return Err(SynVcfError::configuration(
                "num_rows",
                format!("number of rows must be greater than 0, got {}", self.num_rows),
            ));
        }
        if self.chromosomes.is_empty() {
            return Err(SynVcfError::configuration(
                "chromosomes",
                "at least one chromosome is required",
            ));
        }
        if self.chromosomes.iter().any(|c| c.trim().is_empty()) {
            return Err(SynVcfError::configuration(
                "chromosomes",
                "chromosome identifiers must not be empty",
            ));
        }
        let mut seen = HashSet::new();
        if let Some(duplicate) = self.chromosomes.iter().find(|c| !seen.insert(c.as_str())) {
            return Err(SynVcfError::configuration(
                "chromosomes",
                format!("chromosome {duplicate} is listed more than once"),
            ));
        }

        let seed = self.seed.unwrap_or_else(|| rand::rng().random());

        Ok(GeneratorConfig {
            num_rows: self.num_rows,
            num_samples: self.num_samples,
            chromosomes: self.chromosomes,
            sample_prefix: self.sample_prefix,
            id_style: self.id_style,
            phased: self.phased,
            large_format: self.large_format,
            reference_dir: self.reference_dir,
            requested_seed: self.seed,
            seed,
        })
    }
}
