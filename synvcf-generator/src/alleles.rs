use crate::consts::ALLELES;

///
/// Position of a base in the canonical alphabet, if it is one of `A`, `C`, `G`, `T`.
///
pub fn allele_index(base: u8) -> Option<usize> {
    ALLELES.iter().position(|&a| a == base)
}

///
/// Pick the REF and ALT bases for one row.
///
/// # Arguments:
/// - reference_base: the base read from the reference, or `None` when no
///   reference is active (REF then comes from `ref_index`)
/// - ref_index: random index in `[0, 3]`
/// - alt_offset: random offset in `[1, 3]`
///
/// ALT is the canonical base `alt_offset` steps to the left of REF, wrapping
/// around the alphabet, so it never equals REF. A non-canonical reference base
/// (e.g. `N`) is kept as REF and ALT is taken relative to `ref_index` instead.
pub fn resolve_ref_alt(reference_base: Option<u8>, ref_index: usize, alt_offset: usize) -> (u8, u8) {
    let reference = reference_base.unwrap_or(ALLELES[ref_index % ALLELES.len()]);
    let anchor = allele_index(reference).unwrap_or(ref_index);
    let n = ALLELES.len();
    let alternate = ALLELES[(anchor % n + n - alt_offset % n) % n];
    (reference, alternate)
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case(0, 1, b'A', b'T')]
    #[case(0, 2, b'A', b'G')]
    #[case(0, 3, b'A', b'C')]
    #[case(1, 1, b'C', b'A')]
    #[case(2, 3, b'G', b'T')]
    #[case(3, 1, b'T', b'G')]
    fn test_synthetic_ref(
        #[case] ref_index: usize,
        #[case] offset: usize,
        #[case] expected_ref: u8,
        #[case] expected_alt: u8,
    ) {
        assert_eq!(
            resolve_ref_alt(None, ref_index, offset),
            (expected_ref, expected_alt)
        );
    }

    #[rstest]
    fn test_reference_base_overrides_ref_index() {
        // REF comes from the reference; ref_index is ignored for canonical bases
        assert_eq!(resolve_ref_alt(Some(b'G'), 0, 1), (b'G', b'C'));
        assert_eq!(resolve_ref_alt(Some(b'G'), 3, 1), (b'G', b'C'));
    }

    #[rstest]
    fn test_non_canonical_reference_uses_ref_index() {
        assert_eq!(resolve_ref_alt(Some(b'N'), 2, 1), (b'N', b'C'));
        assert_eq!(resolve_ref_alt(Some(b'R'), 0, 1), (b'R', b'T'));
    }

    #[rstest]
    fn test_alt_never_equals_ref() {
        for base in ALLELES {
            for ref_index in 0..4 {
                for offset in 1..4 {
                    let (r, a) = resolve_ref_alt(Some(base), ref_index, offset);
                    assert_ne!(r, a);
                    assert!(ALLELES.contains(&a));
                }
            }
        }
    }
}
