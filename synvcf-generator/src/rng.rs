use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::consts::FAST_STREAM_SALT;

///
/// The two random streams a generation pass draws from.
///
/// - `structural`: pattern metrics, genotype draws, UUID sample names and
///   per-chromosome position sampling.
/// - `fast`: per-row numeric draws (REF index, ALT offset, QUAL, rotation).
///
/// Both are derived from one seed, so one seed fixes the entire pass.
#[derive(Debug, Clone)]
pub struct PassRngs {
    pub structural: StdRng,
    pub fast: Xoshiro256PlusPlus,
}

impl PassRngs {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            structural: StdRng::seed_from_u64(seed),
            fast: Xoshiro256PlusPlus::seed_from_u64(seed ^ FAST_STREAM_SALT),
        }
    }
}
