use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use synvcf_core::consts::VERSION;
use synvcf_core::{Result, SynVcfError};

use crate::consts::METADATA_FILE_NAME;

///
/// Manifest of an imported reference directory: which flat sequence file
/// holds which chromosome, plus where the data came from.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceManifest {
    /// File name of the FASTA the directory was imported from.
    pub reference_file: String,
    /// Version of the tool that performed the import.
    #[serde(default, alias = "synthetic-vcf-generator-version")]
    pub generator_version: String,
    /// Chromosome id -> sequence file name, relative to the directory.
    pub reference_files: BTreeMap<String, String>,
}

impl ReferenceManifest {
    pub fn new(reference_file: impl Into<String>) -> Self {
        Self {
            reference_file: reference_file.into(),
            generator_version: VERSION.to_string(),
            reference_files: BTreeMap::new(),
        }
    }

    ///
    /// Load the manifest stored in a reference directory.
    ///
    /// # Arguments:
    /// - dir: the imported reference directory
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let path = dir.join(METADATA_FILE_NAME);
        let raw = fs::read_to_string(&path)
            .map_err(|e| SynVcfError::reference_unavailable(&path, e))?;
        serde_json::from_str(&raw).map_err(|e| {
            SynVcfError::reference_unavailable(&path, format!("malformed manifest: {e}"))
        })
    }

    ///
    /// Write the manifest, pretty-printed, into a reference directory.
    ///
    pub fn write_to_dir(&self, dir: &Path) -> Result<()> {
        let path = dir.join(METADATA_FILE_NAME);
        let file = File::create(&path)
            .map_err(|e| SynVcfError::sink_write(path.display().to_string(), e))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self).map_err(|e| {
            SynVcfError::sink_write(path.display().to_string(), std::io::Error::other(e))
        })?;
        writer
            .flush()
            .map_err(|e| SynVcfError::sink_write(path.display().to_string(), e))
    }

    pub fn sequence_file(&self, chromosome: &str) -> Option<&str> {
        self.reference_files.get(chromosome).map(String::as_str)
    }

    pub fn chromosomes(&self) -> impl Iterator<Item = &str> {
        self.reference_files.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_round_trip_through_dir() {
        let dir = tempfile::tempdir().unwrap();
        let mut manifest = ReferenceManifest::new("hg38.fa");
        manifest
            .reference_files
            .insert("chr1".to_string(), "reference_chr1.seq".to_string());
        manifest.write_to_dir(dir.path()).unwrap();

        let loaded = ReferenceManifest::from_dir(dir.path()).unwrap();
        assert_eq!(loaded, manifest);
        assert_eq!(loaded.sequence_file("chr1"), Some("reference_chr1.seq"));
        assert_eq!(loaded.sequence_file("chr2"), None);
    }

    #[rstest]
    fn test_reads_hand_written_manifest() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(METADATA_FILE_NAME),
            r#"{
                "reference_file": "tiny.fa",
                "generator_version": "0.1.0",
                "reference_files": {"chrA": "reference_chrA.seq", "chrB": "reference_chrB.seq"}
            }"#,
        )
        .unwrap();

        let manifest = ReferenceManifest::from_dir(dir.path()).unwrap();
        assert_eq!(manifest.reference_file, "tiny.fa");
        assert_eq!(manifest.chromosomes().collect::<Vec<_>>(), vec!["chrA", "chrB"]);
    }

    #[rstest]
    #[case(r#""synthetic-vcf-generator-version": "0.2.1","#, "0.2.1")]
    #[case("", "")]
    fn test_reads_legacy_version_key(#[case] version_entry: &str, #[case] expected: &str) {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(METADATA_FILE_NAME),
            format!(
                r#"{{
    "reference_file": "Homo_sapiens.fa",
    {version_entry}
    "reference_files": {{"1": "reference_1.seq"}}
}}"#
            ),
        )
        .unwrap();

        let manifest = ReferenceManifest::from_dir(dir.path()).unwrap();
        assert_eq!(manifest.generator_version, expected);
        assert_eq!(manifest.sequence_file("1"), Some("reference_1.seq"));
    }

    #[rstest]
    fn test_missing_manifest_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let err = ReferenceManifest::from_dir(dir.path()).unwrap_err();
        assert!(matches!(err, SynVcfError::ReferenceUnavailable { .. }));
    }

    #[rstest]
    fn test_malformed_manifest_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(METADATA_FILE_NAME), "{not json").unwrap();
        let err = ReferenceManifest::from_dir(dir.path()).unwrap_err();
        assert!(err.to_string().contains("malformed manifest"));
    }
}
