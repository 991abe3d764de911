use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error type shared by every synvcf crate.
#[derive(Error, Debug)]
pub enum SynVcfError {
    /// A generator or batch setting is out of range or unparseable.
    #[error("Invalid configuration for `{field}`: {message}")]
    Configuration { field: &'static str, message: String },

    /// A configured chromosome is not listed in the reference manifest.
    #[error("\"{0}\" does not exist in the reference data")]
    UnknownChromosome(String),

    /// The manifest or a sequence file is missing or unreadable.
    #[error("Reference data unavailable at {path:?}: {reason}")]
    ReferenceUnavailable { path: PathBuf, reason: String },

    /// Writing to an output file or stream failed.
    #[error("Failed to write VCF output to {destination}: {source}")]
    SinkWrite {
        destination: String,
        #[source]
        source: io::Error,
    },

    /// One or more tasks of a batch run failed. `written` keeps the outputs
    /// that did complete, `first` is a representative failure.
    #[error("{failed} of {total} batch outputs failed; first failure: {first}")]
    Batch {
        failed: usize,
        total: usize,
        written: Vec<PathBuf>,
        first: Box<SynVcfError>,
    },
}

impl SynVcfError {
    pub fn configuration(field: &'static str, message: impl Into<String>) -> Self {
        SynVcfError::Configuration {
            field,
            message: message.into(),
        }
    }

    pub fn reference_unavailable(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        SynVcfError::ReferenceUnavailable {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub fn sink_write(destination: impl Into<String>, source: io::Error) -> Self {
        SynVcfError::SinkWrite {
            destination: destination.into(),
            source,
        }
    }
}

/// Result type alias for synvcf operations.
pub type Result<T> = std::result::Result<T, SynVcfError>;
