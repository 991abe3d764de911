use std::fs::File;
use std::path::{Path, PathBuf};

use memmap2::Mmap;
use tracing::debug;

use synvcf_core::{Result, SynVcfError};

///
/// Read-only, memory-mapped view over one chromosome's flat sequence file.
///
/// The mapping is released by [ReferenceHandle::close] or when the handle is
/// dropped, whichever comes first.
///
#[derive(Debug)]
pub struct ReferenceHandle {
    path: PathBuf,
    mmap: Option<Mmap>,
}

impl ReferenceHandle {
    ///
    /// Map a sequence file into memory.
    ///
    /// # Arguments:
    /// - path: path to a flat `.seq` file
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| SynVcfError::reference_unavailable(path, e))?;

        // SAFETY: sequence files are never modified after import.
        let mmap = unsafe { Mmap::map(&file) }.map_err(|e| {
            SynVcfError::reference_unavailable(path, format!("failed to memory-map: {e}"))
        })?;

        debug!(path = %path.display(), length = mmap.len(), "opened reference sequence");

        Ok(Self {
            path: path.to_path_buf(),
            mmap: Some(mmap),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sequence length in bases; `0` once closed.
    pub fn length(&self) -> u64 {
        self.mmap.as_ref().map_or(0, |m| m.len() as u64)
    }

    ///
    /// Base at a 1-based position (byte offset `position - 1`).
    ///
    /// Returns `None` outside `[1, length()]` or after the handle was closed.
    pub fn base_at(&self, position: u64) -> Option<u8> {
        let offset = usize::try_from(position.checked_sub(1)?).ok()?;
        self.mmap.as_ref()?.get(offset).copied()
    }

    pub fn is_open(&self) -> bool {
        self.mmap.is_some()
    }

    /// Release the mapping. Safe to call more than once.
    pub fn close(&mut self) {
        if self.mmap.take().is_some() {
            debug!(path = %self.path.display(), "closed reference sequence");
        }
    }
}

impl Drop for ReferenceHandle {
    fn drop(&mut self) {
        self.close();
    }
}
