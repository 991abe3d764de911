use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{BufRead, BufWriter, Write};
use std::path::Path;

use tracing::{debug, info};

use synvcf_core::utils::get_dynamic_reader;
use synvcf_core::{Result, SynVcfError};

use crate::consts::sequence_file_name;
use crate::manifest::ReferenceManifest;

struct OpenSequence {
    id: String,
    writer: BufWriter<File>,
    length: u64,
}

///
/// Import a FASTA file into a reference directory.
///
/// Each selected record is written as a flat uppercase `reference_<id>.seq`
/// file, and a `sequence_metadata.json` manifest is written alongside. The
/// record id is the header text up to the first space.
///
/// # Arguments:
/// - fasta: path to a plain or gzipped FASTA file
/// - output_dir: directory to import into, created if absent
/// - include: optional list of record ids to keep; all records otherwise
///
pub fn import_reference(
    fasta: &Path,
    output_dir: &Path,
    include: Option<&[String]>,
) -> Result<ReferenceManifest> {
    let include: Option<HashSet<&str>> =
        include.map(|ids| ids.iter().map(String::as_str).collect());

    fs::create_dir_all(output_dir)
        .map_err(|e| SynVcfError::sink_write(output_dir.display().to_string(), e))?;

    let reader =
        get_dynamic_reader(fasta).map_err(|e| SynVcfError::reference_unavailable(fasta, e))?;

    let source_name = fasta
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut manifest = ReferenceManifest::new(source_name);

    let mut current: Option<OpenSequence> = None;

    for line in reader.lines() {
        let line = line.map_err(|e| SynVcfError::reference_unavailable(fasta, e))?;

        if let Some(header) = line.strip_prefix('>') {
            if let Some(done) = current.take() {
                finish_sequence(done, output_dir, &mut manifest)?;
                if include
                    .as_ref()
                    .is_some_and(|ids| ids.len() == manifest.reference_files.len())
                {
                    break;
                }
            }

            let id = header.split(' ').next().unwrap_or_default().trim().to_string();
            let wanted = include.as_ref().is_none_or(|ids| ids.contains(id.as_str()));
            if wanted && !id.is_empty() {
                let path = output_dir.join(sequence_file_name(&id));
                let file = File::create(&path)
                    .map_err(|e| SynVcfError::sink_write(path.display().to_string(), e))?;
                current = Some(OpenSequence {
                    id,
                    writer: BufWriter::new(file),
                    length: 0,
                });
            }
        } else if let Some(sequence) = current.as_mut() {
            let bases = line.trim_end().to_ascii_uppercase();
            sequence
                .writer
                .write_all(bases.as_bytes())
                .map_err(|e| SynVcfError::sink_write(sequence_file_name(&sequence.id), e))?;
            sequence.length += bases.len() as u64;
        }
    }

    if let Some(done) = current.take() {
        finish_sequence(done, output_dir, &mut manifest)?;
    }

    if let Some(ids) = include {
        let mut missing: Vec<&str> = ids
            .into_iter()
            .filter(|id| !manifest.reference_files.contains_key(*id))
            .collect();
        missing.sort_unstable();
        if let Some(first) = missing.first() {
            return Err(SynVcfError::UnknownChromosome(first.to_string()));
        }
    }

    manifest.write_to_dir(output_dir)?;
    info!(
        fasta = %fasta.display(),
        sequences = manifest.reference_files.len(),
        "imported reference"
    );

    Ok(manifest)
}

fn finish_sequence(
    mut sequence: OpenSequence,
    output_dir: &Path,
    manifest: &mut ReferenceManifest,
) -> Result<()> {
    let file_name = sequence_file_name(&sequence.id);
    sequence
        .writer
        .flush()
        .map_err(|e| SynVcfError::sink_write(output_dir.join(&file_name).display().to_string(), e))?;
    debug!(chromosome = %sequence.id, length = sequence.length, "wrote sequence");
    manifest.reference_files.insert(sequence.id, file_name);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::ReferenceStore;
    use flate2::Compression;
    use flate2::write::GzEncoder;
    use pretty_assertions::assert_eq;
    use rstest::*;
    use tempfile::TempDir;

    const FASTA: &str = ">chr1 primary assembly\nacgtac\nGTNN\n>chr2\nTTTT\n\n>chrM\nGA\n";

    #[fixture]
    fn fasta_dir() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("tiny.fa"), FASTA).unwrap();

        let mut encoder = GzEncoder::new(
            File::create(dir.path().join("tiny.fa.gz")).unwrap(),
            Compression::default(),
        );
        encoder.write_all(FASTA.as_bytes()).unwrap();
        encoder.finish().unwrap();
        dir
    }

    #[rstest]
    #[case("tiny.fa")]
    #[case("tiny.fa.gz")]
    fn test_import_all(fasta_dir: TempDir, #[case] name: &str) {
        let out = fasta_dir.path().join("imported");
        let manifest = import_reference(&fasta_dir.path().join(name), &out, None).unwrap();

        assert_eq!(manifest.reference_file, name);
        assert_eq!(
            manifest.chromosomes().collect::<Vec<_>>(),
            vec!["chr1", "chr2", "chrM"]
        );
        assert_eq!(
            std::fs::read_to_string(out.join("reference_chr1.seq")).unwrap(),
            "ACGTACGTNN"
        );
        assert_eq!(
            std::fs::read_to_string(out.join("reference_chr2.seq")).unwrap(),
            "TTTT"
        );

        let store = ReferenceStore::open(&out).unwrap();
        assert_eq!(store.sequence_length("chrM").unwrap(), 2);
    }

    #[rstest]
    fn test_import_subset(fasta_dir: TempDir) {
        let out = fasta_dir.path().join("subset");
        let include = vec!["chr2".to_string()];
        let manifest =
            import_reference(&fasta_dir.path().join("tiny.fa"), &out, Some(&include)).unwrap();

        assert_eq!(manifest.chromosomes().collect::<Vec<_>>(), vec!["chr2"]);
        assert!(!out.join("reference_chr1.seq").exists());
        assert!(!out.join("reference_chrM.seq").exists());
    }

    #[rstest]
    fn test_import_missing_include(fasta_dir: TempDir) {
        let out = fasta_dir.path().join("subset");
        let include = vec!["chr1".to_string(), "chr22".to_string()];
        let err = import_reference(&fasta_dir.path().join("tiny.fa"), &out, Some(&include))
            .unwrap_err();
        match err {
            SynVcfError::UnknownChromosome(chrom) => assert_eq!(chrom, "chr22"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[rstest]
    fn test_import_missing_fasta(fasta_dir: TempDir) {
        let err = import_reference(
            &fasta_dir.path().join("absent.fa"),
            &fasta_dir.path().join("out"),
            None,
        )
        .unwrap_err();
        assert!(matches!(err, SynVcfError::ReferenceUnavailable { .. }));
    }
}
