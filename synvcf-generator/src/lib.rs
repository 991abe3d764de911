//! # Synthetic VCF generation
//!
//! Builds reproducible multi-sample VCF files with a tunable number of
//! samples, rows and chromosomes. REF bases come from an imported reference
//! when one is configured; genotypes are drawn once per pass and rotated
//! across sample columns row by row.
//!
//! ```rust,no_run
//! use synvcf_core::GeneratorConfig;
//! use synvcf_generator::{OutputType, VirtualVcf, write_vcf_file};
//!
//! let config = GeneratorConfig::builder()
//!     .num_rows(100)
//!     .num_samples(20)
//!     .seed(Some(42))
//!     .build()?;
//! let vcf = VirtualVcf::new(config)?;
//! write_vcf_file(vcf.pass()?, "calls.vcf".as_ref(), OutputType::Vcf)?;
//! # Ok::<(), synvcf_core::SynVcfError>(())
//! ```
pub mod alleles;
pub mod batch;
pub mod consts;
pub mod genotype;
pub mod header;
pub mod record;
pub mod rng;
pub mod sink;
pub mod vcf;

pub use batch::{BatchOrchestrator, BatchReport, default_threads};
pub use genotype::GenotypeSampler;
pub use header::Contig;
pub use record::RowRecord;
pub use sink::{OutputType, write_vcf, write_vcf_file, write_vcf_stdout};
pub use vcf::{PassPhase, VcfPass, VirtualVcf};
