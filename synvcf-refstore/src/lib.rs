//! # Reference sequence store
//!
//! Read-only, position-addressable access to imported chromosome sequences.
//!
//! An imported reference is a directory holding a `sequence_metadata.json`
//! manifest plus one flat `reference_<chromosome>.seq` file per chromosome:
//! uppercase bases only, no header and no line breaks, so the base at VCF
//! position *p* sits at byte offset *p - 1*.
//!
//! - [`import`] - turn a (gzipped) FASTA file into such a directory
//! - [`manifest`] - the manifest model
//! - [`sequence`] - a memory-mapped view over one chromosome
//! - [`store`] - chromosome lookup over a reference directory
pub mod consts;
pub mod import;
pub mod manifest;
pub mod sequence;
pub mod store;

pub use consts::*;
pub use import::import_reference;
pub use manifest::ReferenceManifest;
pub use sequence::ReferenceHandle;
pub use store::ReferenceStore;
