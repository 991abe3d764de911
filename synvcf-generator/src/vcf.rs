//! Generation passes over a configured callset.
//!
//! A [VirtualVcf] holds the validated configuration and resolved contigs.
//! Each call to [VirtualVcf::pass] builds an independent [VcfPass] with its
//! own random streams and genotype ring, so two passes from the same
//! `VirtualVcf` yield identical text.
use std::mem;
use std::vec;

use rand::Rng;
use rand::seq::index;
use tracing::{debug, info};

use synvcf_core::{GeneratorConfig, Result, SynVcfError};
use synvcf_refstore::{ReferenceHandle, ReferenceStore};

use crate::alleles::resolve_ref_alt;
use crate::consts::{
    ALLELES, DEFAULT_REFERENCE_NAME, FILTER_PASS, FORMAT_LARGE, FORMAT_SMALL, QUAL_RANGE,
    SYNTHETIC_LENGTH_FACTOR, VARIANT_ID, info_field,
};
use crate::genotype::GenotypeSampler;
use crate::header::{Contig, header_lines, sample_names};
use crate::record::RowRecord;
use crate::rng::PassRngs;

///
/// A validated, ready-to-run synthetic callset.
///
/// All fallible setup happens in [VirtualVcf::new]: the reference directory
/// is opened, every chromosome is resolved and measured, and chromosomes too
/// short to hold `num_rows` distinct positions are rejected.
#[derive(Debug, Clone)]
pub struct VirtualVcf {
    config: GeneratorConfig,
    reference: Option<ReferenceStore>,
    contigs: Vec<Contig>,
}

impl VirtualVcf {
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        let reference = config
            .reference_dir()
            .map(ReferenceStore::open)
            .transpose()?;

        let rows = config.num_rows() as u64;
        let contigs = config
            .chromosomes()
            .iter()
            .map(|name| {
                let length = match &reference {
                    Some(store) => store.sequence_length(name)?,
                    None => rows * SYNTHETIC_LENGTH_FACTOR,
                };
                if length.saturating_sub(1) < rows {
                    return Err(SynVcfError::configuration(
                        "num_rows",
                        format!(
                            "chromosome {name} has {length} bases, too short for {rows} distinct positions"
                        ),
                    ));
                }
                Ok(Contig {
                    name: name.clone(),
                    length,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        info!(
            chromosomes = contigs.len(),
            rows = config.num_rows(),
            samples = config.num_samples(),
            reference = reference.is_some(),
            seed = config.seed(),
            "configured generator"
        );

        Ok(Self {
            config,
            reference,
            contigs,
        })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn contigs(&self) -> &[Contig] {
        &self.contigs
    }

    pub fn reference(&self) -> Option<&ReferenceStore> {
        self.reference.as_ref()
    }

    /// File name written into the `##reference` header line.
    pub fn reference_name(&self) -> &str {
        self.reference
            .as_ref()
            .map_or(DEFAULT_REFERENCE_NAME, |store| store.source_file())
    }

    ///
    /// Start a fresh generation pass.
    ///
    pub fn pass(&self) -> Result<VcfPass<'_>> {
        let config = &self.config;
        let mut rngs = PassRngs::from_seed(config.seed());

        let sampler = GenotypeSampler::new(
            config.num_samples(),
            config.phased(),
            config.large_format(),
            &mut rngs.structural,
        )?;
        let samples = sample_names(config, &mut rngs.structural);
        let header = header_lines(
            &self.contigs,
            self.reference_name(),
            config.large_format(),
            &samples,
        );

        Ok(VcfPass {
            vcf: self,
            rows: RowGenerator {
                rngs,
                sampler,
                info: info_field(config.num_samples()),
                format: match config.large_format() {
                    true => FORMAT_LARGE,
                    false => FORMAT_SMALL,
                },
            },
            header,
            state: PassState::Unstarted,
        })
    }
}

///
/// Where a pass currently is.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassPhase {
    Unstarted,
    Header,
    /// Emitting rows for the chromosome at this index of the contig list.
    Chromosome(usize),
    Done,
}

struct ChromosomeCursor {
    index: usize,
    handle: Option<ReferenceHandle>,
    positions: vec::IntoIter<u64>,
}

enum PassState {
    Unstarted,
    Header(vec::IntoIter<String>),
    Chromosome(ChromosomeCursor),
    Done,
}

struct RowGenerator {
    rngs: PassRngs,
    sampler: GenotypeSampler,
    info: String,
    format: &'static str,
}

impl RowGenerator {
    fn row_line(&mut self, chromosome: &str, position: u64, handle: Option<&ReferenceHandle>) -> String {
        let fast = &mut self.rngs.fast;
        let ref_index = fast.random_range(0..ALLELES.len());
        let alt_offset = fast.random_range(1..ALLELES.len());
        let reference_base = handle.map(|h| h.base_at(position).unwrap_or(b'N'));
        let (reference, alternate) = resolve_ref_alt(reference_base, ref_index, alt_offset);
        let qual = fast.random_range(QUAL_RANGE);
        self.sampler.rotate_random(fast);

        let record = RowRecord {
            chromosome,
            position,
            id: VARIANT_ID,
            reference,
            alternate,
            qual,
            filter: FILTER_PASS,
            info: &self.info,
            format: self.format,
            samples: self.sampler.columns(),
        };
        let mut line = record.to_string();
        line.push('\n');
        line
    }
}

///
/// Draw `rows` distinct positions from `[1, length - 1]`, sorted ascending.
///
pub fn sample_positions<R: Rng + ?Sized>(rng: &mut R, length: u64, rows: usize) -> Result<Vec<u64>> {
    let span = usize::try_from(length.saturating_sub(1))
        .map_err(|_| SynVcfError::configuration("chromosomes", format!("length {length} out of range")))?;
    if span < rows {
        return Err(SynVcfError::configuration(
            "num_rows",
            format!("cannot draw {rows} distinct positions from {span}"),
        ));
    }

    let mut positions: Vec<u64> = index::sample(rng, span, rows)
        .into_iter()
        .map(|i| i as u64 + 1)
        .collect();
    positions.sort_unstable();
    Ok(positions)
}

///
/// One complete, deterministic walk over a [VirtualVcf]: header lines first,
/// then each chromosome's rows in configured order.
///
/// Every item is a single newline-terminated line. A reference handle is held
/// only while its chromosome's rows are being emitted.
pub struct VcfPass<'a> {
    vcf: &'a VirtualVcf,
    rows: RowGenerator,
    header: Vec<String>,
    state: PassState,
}

impl VcfPass<'_> {
    pub fn phase(&self) -> PassPhase {
        match &self.state {
            PassState::Unstarted => PassPhase::Unstarted,
            PassState::Header(_) => PassPhase::Header,
            PassState::Chromosome(cursor) => PassPhase::Chromosome(cursor.index),
            PassState::Done => PassPhase::Done,
        }
    }

    /// True while a chromosome's reference sequence is mapped.
    pub fn has_open_reference(&self) -> bool {
        match &self.state {
            PassState::Chromosome(cursor) => cursor.handle.as_ref().is_some_and(|h| h.is_open()),
            _ => false,
        }
    }

    /// Current order of the sample columns.
    pub fn sample_columns(&self) -> &[String] {
        self.rows.sampler.columns()
    }

    fn advance(&mut self, index: usize) -> Result<()> {
        // stays Done if opening the next chromosome fails
        self.state = PassState::Done;

        let vcf = self.vcf;
        let Some(contig) = vcf.contigs.get(index) else {
            debug!("pass complete");
            return Ok(());
        };

        let handle = vcf
            .reference
            .as_ref()
            .map(|store| store.open_sequence(&contig.name))
            .transpose()?;
        let positions = sample_positions(
            &mut self.rows.rngs.structural,
            contig.length,
            vcf.config.num_rows(),
        )?;

        debug!(chromosome = %contig.name, rows = positions.len(), "emitting chromosome");
        self.state = PassState::Chromosome(ChromosomeCursor {
            index,
            handle,
            positions: positions.into_iter(),
        });
        Ok(())
    }
}

impl Iterator for VcfPass<'_> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let vcf = self.vcf;
        loop {
            let next_index = match &mut self.state {
                PassState::Unstarted => {
                    let header = mem::take(&mut self.header);
                    self.state = PassState::Header(header.into_iter());
                    continue;
                }
                PassState::Header(lines) => match lines.next() {
                    Some(line) => return Some(Ok(line)),
                    None => 0,
                },
                PassState::Chromosome(cursor) => {
                    if let Some(position) = cursor.positions.next() {
                        let chromosome = &vcf.contigs[cursor.index].name;
                        return Some(Ok(self.rows.row_line(
                            chromosome,
                            position,
                            cursor.handle.as_ref(),
                        )));
                    }
                    if let Some(handle) = cursor.handle.as_mut() {
                        handle.close();
                    }
                    cursor.index + 1
                }
                PassState::Done => return None,
            };

            if let Err(e) = self.advance(next_index) {
                return Some(Err(e));
            }
        }
    }
}
