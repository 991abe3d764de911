use std::path::{Path, PathBuf};

use synvcf_core::{Result, SynVcfError};

use crate::manifest::ReferenceManifest;
use crate::sequence::ReferenceHandle;

///
/// An imported reference directory: the manifest plus on-demand access to
/// each chromosome's sequence.
///
/// Cloning is cheap enough to hand every worker its own copy; handles opened
/// from a store are never shared.
///
#[derive(Debug, Clone)]
pub struct ReferenceStore {
    dir: PathBuf,
    manifest: ReferenceManifest,
}

impl ReferenceStore {
    pub fn open(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            return Err(SynVcfError::reference_unavailable(
                dir,
                "not a reference directory",
            ));
        }
        let manifest = ReferenceManifest::from_dir(dir)?;
        Ok(Self {
            dir: dir.to_path_buf(),
            manifest,
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn manifest(&self) -> &ReferenceManifest {
        &self.manifest
    }

    /// Name of the FASTA file this store was imported from.
    pub fn source_file(&self) -> &str {
        &self.manifest.reference_file
    }

    pub fn contains(&self, chromosome: &str) -> bool {
        self.manifest.reference_files.contains_key(chromosome)
    }

    ///
    /// Resolve a chromosome to its sequence file.
    ///
    /// Fails with [SynVcfError::UnknownChromosome] if the manifest doesn't list it.
    pub fn sequence_path(&self, chromosome: &str) -> Result<PathBuf> {
        self.manifest
            .sequence_file(chromosome)
            .map(|file| self.dir.join(file))
            .ok_or_else(|| SynVcfError::UnknownChromosome(chromosome.to_string()))
    }

    pub fn open_sequence(&self, chromosome: &str) -> Result<ReferenceHandle> {
        ReferenceHandle::open(&self.sequence_path(chromosome)?)
    }

    ///
    /// Length of a chromosome, measured through a short-lived handle.
    ///
    pub fn sequence_length(&self, chromosome: &str) -> Result<u64> {
        let handle = self.open_sequence(chromosome)?;
        Ok(handle.length())
    }
}
