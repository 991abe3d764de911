//! Concurrent generation of many VCF files from one configuration.
//!
//! Every task gets its own clone of the [VirtualVcf] and runs a full pass.
//! Clones share the resolved seed, so every file in a batch has the same
//! content and only the file names differ.
use std::fs;
use std::path::{Path, PathBuf};
use std::thread;

use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use tracing::{info, warn};
use uuid::Uuid;

use synvcf_core::{Result, SynVcfError};

use crate::sink::{OutputType, write_vcf_file};
use crate::vcf::VirtualVcf;

/// Worker count used when none is given.
pub fn default_threads() -> usize {
    thread::available_parallelism().map_or(1, |n| n.get())
}

///
/// Files produced by a successful batch run, in task order.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    pub files: Vec<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct BatchOrchestrator {
    output_dir: PathBuf,
    vcf_prefix: String,
    output_type: OutputType,
    threads: usize,
    show_progress: bool,
}

impl BatchOrchestrator {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            vcf_prefix: String::new(),
            output_type: OutputType::default(),
            threads: default_threads(),
            show_progress: false,
        }
    }

    pub fn vcf_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.vcf_prefix = prefix.into();
        self
    }

    pub fn output_type(mut self, output_type: OutputType) -> Self {
        self.output_type = output_type;
        self
    }

    pub fn threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    pub fn show_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    ///
    /// Allocate `num_vcfs` fresh file paths: `<prefix><uuid v4><extension>`.
    ///
    pub fn output_paths(&self, num_vcfs: usize) -> Vec<PathBuf> {
        (0..num_vcfs)
            .map(|_| {
                self.output_dir.join(format!(
                    "{}{}{}",
                    self.vcf_prefix,
                    Uuid::new_v4(),
                    self.output_type.extension()
                ))
            })
            .collect()
    }

    fn progress_bar(&self, len: u64) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }
        let pb = ProgressBar::new(len);
        let style = ProgressStyle::with_template(
            "[{elapsed_precise}] {bar:40.cyan/blue} {pos:>7}/{len:7} {msg}",
        )
        .map(|s| s.progress_chars("##-"))
        .unwrap_or_else(|_| ProgressStyle::default_bar());
        pb.set_style(style);
        pb.set_message("Writing VCF files");
        pb
    }

    ///
    /// Write `num_vcfs` complete files under freshly allocated names and wait
    /// for all of them. See [BatchOrchestrator::run_paths].
    ///
    /// # Arguments:
    /// - vcf: the configured generator, cloned once per task
    /// - num_vcfs: number of files to produce
    pub fn run(&self, vcf: &VirtualVcf, num_vcfs: usize) -> Result<BatchReport> {
        self.run_paths(vcf, self.output_paths(num_vcfs))
    }

    ///
    /// Write one complete file per path and wait for all of them.
    ///
    /// A failing task does not stop the others. If any task failed the result
    /// is [SynVcfError::Batch], carrying the files that were written and the
    /// first failure in task order.
    pub fn run_paths(&self, vcf: &VirtualVcf, paths: Vec<PathBuf>) -> Result<BatchReport> {
        if self.threads == 0 {
            return Err(SynVcfError::configuration(
                "threads",
                "thread count must be greater than 0",
            ));
        }

        fs::create_dir_all(&self.output_dir)
            .map_err(|e| SynVcfError::sink_write(self.output_dir.display().to_string(), e))?;

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.threads)
            .build()
            .map_err(|e| SynVcfError::configuration("threads", e.to_string()))?;

        let pb = self.progress_bar(paths.len() as u64);

        info!(
            files = paths.len(),
            threads = self.threads,
            dir = %self.output_dir.display(),
            "starting batch"
        );

        let results: Vec<(PathBuf, Result<usize>)> = pool.install(|| {
            paths
                .into_par_iter()
                .map(|path| {
                    let task = vcf.clone();
                    let written = task
                        .pass()
                        .and_then(|pass| write_vcf_file(pass, &path, self.output_type));
                    pb.inc(1);
                    (path, written)
                })
                .collect()
        });
        pb.finish_and_clear();

        let total = results.len();
        let mut files = Vec::with_capacity(total);
        let mut failures = Vec::new();
        for (path, written) in results {
            match written {
                Ok(lines) => {
                    info!(path = %path.display(), lines, "wrote VCF");
                    files.push(path);
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "batch output failed");
                    failures.push(e);
                }
            }
        }

        let failed = failures.len();
        match failures.into_iter().next() {
            None => {
                info!(files = total, "batch complete");
                Ok(BatchReport { files })
            }
            Some(first) => Err(SynVcfError::Batch {
                failed,
                total,
                written: files,
                first: Box::new(first),
            }),
        }
    }
}
