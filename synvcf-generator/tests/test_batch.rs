use std::fs::File;
use std::io::Read;
use std::path::Path;

use flate2::read::MultiGzDecoder;
use pretty_assertions::assert_eq;
use rstest::*;
use tempfile::TempDir;

use synvcf_core::{GeneratorConfig, SynVcfError};
use synvcf_generator::{BatchOrchestrator, OutputType, VirtualVcf};
use synvcf_refstore::import_reference;

#[fixture]
fn workspace() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let fasta = dir.path().join("batch.fa");
    std::fs::write(
        &fasta,
        ">chr1\nACGTACGTACGTACGTACGTACGTACGTACGTACGTACGTACGTACGTAC\n>chr2\nTTGGCCAATTGGCCAATTGGCCAA\n",
    )
    .unwrap();
    import_reference(&fasta, &dir.path().join("reference"), None).unwrap();
    dir
}

fn reference_vcf(root: &Path) -> VirtualVcf {
    let config = GeneratorConfig::builder()
        .num_rows(12)
        .num_samples(25)
        .chromosomes(["chr1", "chr2"])
        .reference_dir(Some(root.join("reference")))
        .build()
        .unwrap();
    VirtualVcf::new(config).unwrap()
}

fn read_decoded(path: &Path) -> String {
    let mut content = String::new();
    MultiGzDecoder::new(File::open(path).unwrap())
        .read_to_string(&mut content)
        .unwrap();
    content
}

#[rstest]
fn test_batch_files_are_identical(workspace: TempDir) {
    let vcf = reference_vcf(workspace.path());
    let out = workspace.path().join("out");

    let report = BatchOrchestrator::new(&out)
        .vcf_prefix("synthetic_")
        .threads(3)
        .run(&vcf, 3)
        .unwrap();

    assert_eq!(report.files.len(), 3);
    let contents: Vec<String> = report
        .files
        .iter()
        .map(|f| std::fs::read_to_string(f).unwrap())
        .collect();
    assert!(contents[0].starts_with("##fileformat=VCFv4.2\n"));
    assert_eq!(contents[0], contents[1]);
    assert_eq!(contents[1], contents[2]);

    let mut names: Vec<String> = report
        .files
        .iter()
        .map(|f| f.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names.dedup();
    assert_eq!(names.len(), 3);
    assert!(names.iter().all(|n| n.starts_with("synthetic_") && n.ends_with(".vcf")));
}

#[rstest]
#[case(OutputType::Gzip)]
#[case(OutputType::Bgzip)]
fn test_compressed_batch(workspace: TempDir, #[case] output_type: OutputType) {
    let vcf = reference_vcf(workspace.path());
    let out = workspace.path().join("gz");

    let report = BatchOrchestrator::new(&out)
        .output_type(output_type)
        .threads(2)
        .run(&vcf, 2)
        .unwrap();

    assert!(report.files.iter().all(|f| f.to_string_lossy().ends_with(".vcf.gz")));
    let expected: String = vcf
        .pass()
        .unwrap()
        .collect::<synvcf_core::Result<String>>()
        .unwrap();
    for file in &report.files {
        assert_eq!(read_decoded(file), expected);
    }
}

#[rstest]
fn test_output_directory_is_created(workspace: TempDir) {
    let vcf = reference_vcf(workspace.path());
    let out = workspace.path().join("nested").join("dir");
    let report = BatchOrchestrator::new(&out).threads(1).run(&vcf, 1).unwrap();
    assert!(out.is_dir());
    assert!(report.files[0].starts_with(&out));
}

#[rstest]
fn test_failed_tasks_are_reported(workspace: TempDir) {
    let vcf = reference_vcf(workspace.path());

    // the prefix names a subdirectory that does not exist, so every file fails
    let err = BatchOrchestrator::new(workspace.path().join("out"))
        .vcf_prefix("missing/")
        .threads(2)
        .run(&vcf, 3)
        .unwrap_err();

    match err {
        SynVcfError::Batch {
            failed,
            total,
            written,
            first,
        } => {
            assert_eq!(failed, 3);
            assert_eq!(total, 3);
            assert!(written.is_empty());
            assert!(matches!(*first, SynVcfError::SinkWrite { .. }));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[rstest]
fn test_one_failure_is_not_masked(workspace: TempDir) {
    let vcf = reference_vcf(workspace.path());
    let out = workspace.path().join("mixed");
    let paths = vec![
        out.join("first.vcf"),
        out.join("no_such_dir").join("second.vcf"),
        out.join("third.vcf"),
    ];

    let err = BatchOrchestrator::new(&out)
        .threads(3)
        .run_paths(&vcf, paths)
        .unwrap_err();

    let expected: String = vcf
        .pass()
        .unwrap()
        .collect::<synvcf_core::Result<String>>()
        .unwrap();
    match err {
        SynVcfError::Batch {
            failed,
            total,
            written,
            first,
        } => {
            assert_eq!(failed, 1);
            assert_eq!(total, 3);
            assert_eq!(written, vec![out.join("first.vcf"), out.join("third.vcf")]);
            for file in &written {
                assert_eq!(std::fs::read_to_string(file).unwrap(), expected);
            }
            assert!(matches!(*first, SynVcfError::SinkWrite { .. }));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[rstest]
fn test_zero_threads_is_rejected(workspace: TempDir) {
    let vcf = reference_vcf(workspace.path());
    let err = BatchOrchestrator::new(workspace.path().join("out"))
        .threads(0)
        .run(&vcf, 1)
        .unwrap_err();
    assert!(matches!(err, SynVcfError::Configuration { field: "threads", .. }));
}
