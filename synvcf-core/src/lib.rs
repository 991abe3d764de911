//! # Core types for synthetic VCF generation
//!
//! Holds what every other synvcf crate agrees on: the validated
//! [`GeneratorConfig`], the optional YAML [`GeneratorSettings`] layer that
//! feeds it, and the [`SynVcfError`] taxonomy.
pub mod consts;
pub mod errors;
pub mod models;
pub mod utils;

pub use errors::{Result, SynVcfError};
pub use models::{GeneratorConfig, GeneratorConfigBuilder, GeneratorSettings, SampleIdStyle};
