//! Per-pass genotype column pool.
//!
//! Genotype values are drawn once per pass; every row then reuses the same
//! values in a rotated order. The multiset of values is therefore fixed for
//! the whole pass and only their assignment to sample columns changes.
use std::collections::BTreeMap;

use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;
use rand::seq::IndexedRandom;

use synvcf_core::{Result, SynVcfError};

use crate::consts::{EXTRA_METRICS, PHASED_GENOTYPES, UNPHASED_GENOTYPES};

///
/// Canonical genotype patterns and their draw weights.
///
/// Weights use integer division on the sample count, so the rarer patterns
/// only appear once the callset is large enough.
pub fn genotype_weights(num_samples: usize, phased: bool) -> Vec<(&'static str, usize)> {
    let s = num_samples;
    if phased {
        vec![
            (PHASED_GENOTYPES[0], 10 * s),
            (PHASED_GENOTYPES[1], s / 500),
            (PHASED_GENOTYPES[2], s / 500),
            (PHASED_GENOTYPES[3], s / 300),
        ]
    } else {
        vec![
            (UNPHASED_GENOTYPES[0], 10 * s),
            (UNPHASED_GENOTYPES[1], s / 250),
            (UNPHASED_GENOTYPES[2], s / 300),
        ]
    }
}

/// Largest left rotation applied between two rows.
pub fn max_rotation(num_samples: usize) -> usize {
    if num_samples >= 10 {
        (num_samples / 10).max(1)
    } else {
        num_samples
    }
}

/// Genotype part of a sample column, i.e. everything before the first `:`.
pub fn core_pattern(column: &str) -> &str {
    column.split(':').next().unwrap_or(column)
}

#[derive(Debug, Clone)]
pub struct GenotypeSampler {
    hom_ref: &'static str,
    phased: bool,
    columns: Vec<String>,
    max_rotation: usize,
}

impl GenotypeSampler {
    ///
    /// Draw the working set of sample columns for one pass.
    ///
    /// # Arguments:
    /// - num_samples: number of sample columns
    /// - phased: use `|` patterns instead of `/`
    /// - large_format: append one fixed metrics suffix per pattern
    /// - rng: the pass's structural stream
    pub fn new<R: Rng + ?Sized>(
        num_samples: usize,
        phased: bool,
        large_format: bool,
        rng: &mut R,
    ) -> Result<Self> {
        let weighted = genotype_weights(num_samples, phased);
        let hom_ref = weighted[0].0;

        let patterns: Vec<String> = weighted
            .iter()
            .map(|(pattern, _)| match large_format {
                true => {
                    let metrics = EXTRA_METRICS.choose(rng).copied().unwrap_or(EXTRA_METRICS[0]);
                    format!("{pattern}:{metrics}")
                }
                false => pattern.to_string(),
            })
            .collect();

        let distribution = WeightedIndex::new(weighted.iter().map(|(_, weight)| *weight))
            .map_err(|e| SynVcfError::configuration("num_samples", e.to_string()))?;

        let mut columns: Vec<String> = (0..num_samples)
            .map(|_| patterns[distribution.sample(rng)].clone())
            .collect();

        // at least one sample must carry a non-reference allele
        if columns.iter().all(|c| core_pattern(c) == hom_ref) {
            if let Some(first) = columns.first_mut() {
                *first = match phased {
                    true => first.replacen('0', "1", 1),
                    false => first.replacen("0/0", "0/1", 1),
                };
            }
        }

        Ok(Self {
            hom_ref,
            phased,
            columns,
            max_rotation: max_rotation(num_samples),
        })
    }

    /// Sample columns in their current order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn max_rotation(&self) -> usize {
        self.max_rotation
    }

    pub fn phased(&self) -> bool {
        self.phased
    }

    /// Rotate the ring of columns left by `amount`.
    pub fn rotate(&mut self, amount: usize) {
        let len = self.columns.len();
        if len > 0 {
            self.columns.rotate_left(amount % len);
        }
    }

    ///
    /// Rotate left by a random amount in `[1, max_rotation]` and return it.
    ///
    pub fn rotate_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        let amount = rng.random_range(1..=self.max_rotation);
        self.rotate(amount);
        amount
    }

    /// Number of columns per core genotype pattern.
    pub fn core_tally(&self) -> BTreeMap<String, usize> {
        let mut tally = BTreeMap::new();
        for column in &self.columns {
            *tally.entry(core_pattern(column).to_string()).or_insert(0) += 1;
        }
        tally
    }

    /// True when at least one column is not homozygous-reference.
    pub fn is_non_trivial(&self) -> bool {
        self.columns.iter().any(|c| core_pattern(c) != self.hom_ref)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::rng::PassRngs;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case(1, 1)]
    #[case(9, 9)]
    #[case(10, 1)]
    #[case(19, 1)]
    #[case(250, 25)]
    fn test_max_rotation(#[case] samples: usize, #[case] expected: usize) {
        assert_eq!(max_rotation(samples), expected);
    }

    #[rstest]
    fn test_weights_use_integer_division() {
        assert_eq!(
            genotype_weights(1000, true),
            vec![("0|0", 10000), ("1|0", 2), ("0|1", 2), ("1|1", 3)]
        );
        assert_eq!(
            genotype_weights(299, false),
            vec![("0/0", 2990), ("0/1", 1), ("1/1", 0)]
        );
    }

    #[rstest]
    fn test_core_pattern() {
        assert_eq!(core_pattern("0|1:0,30:30:89:913,89,0"), "0|1");
        assert_eq!(core_pattern("1/1"), "1/1");
    }

    #[rstest]
    #[case(true)]
    #[case(false)]
    fn test_small_callset_is_forced_non_trivial(#[case] phased: bool) {
        // with fewer than 250 samples only the hom-ref pattern has weight
        for seed in 0..20 {
            let mut rngs = PassRngs::from_seed(seed);
            let sampler = GenotypeSampler::new(5, phased, false, &mut rngs.structural).unwrap();
            assert!(sampler.is_non_trivial());
            let expected_first = if phased { "1|0" } else { "0/1" };
            assert_eq!(sampler.columns()[0], expected_first);
            assert_eq!(sampler.columns().len(), 5);
        }
    }

    #[rstest]
    fn test_large_format_suffix_is_fixed_per_pattern() {
        let mut rngs = PassRngs::from_seed(3);
        let sampler = GenotypeSampler::new(40, true, true, &mut rngs.structural).unwrap();

        let mut suffix_by_pattern: BTreeMap<&str, &str> = BTreeMap::new();
        for column in sampler.columns() {
            let (pattern, suffix) = column.split_once(':').unwrap();
            assert!(EXTRA_METRICS.contains(&suffix));
            let seen = suffix_by_pattern.entry(pattern).or_insert(suffix);
            // the forced "1|0" keeps the hom-ref suffix, every other pattern is uniform
            if pattern != "1|0" {
                assert_eq!(*seen, suffix);
            }
        }
    }

    #[rstest]
    fn test_rotation_keeps_the_multiset() {
        let mut rngs = PassRngs::from_seed(9);
        let mut sampler = GenotypeSampler::new(1200, true, false, &mut rngs.structural).unwrap();
        let before = sampler.core_tally();
        assert!(before.contains_key("0|0"));
        let before_len = sampler.columns().len();

        for _ in 0..50 {
            let amount = sampler.rotate_random(&mut rngs.fast);
            assert!((1..=120).contains(&amount));
        }

        assert_eq!(sampler.core_tally(), before);
        assert_eq!(sampler.columns().len(), before_len);
    }

    #[rstest]
    fn test_rotate_left() {
        let mut rngs = PassRngs::from_seed(1);
        let mut sampler = GenotypeSampler::new(4, true, false, &mut rngs.structural).unwrap();
        let original = sampler.columns().to_vec();

        sampler.rotate(1);
        let mut expected = original.clone();
        expected.rotate_left(1);
        assert_eq!(sampler.columns(), expected.as_slice());

        sampler.rotate(3);
        assert_eq!(sampler.columns(), original.as_slice());
    }
}
