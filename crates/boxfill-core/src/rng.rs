//! Random number generation for engines and neighborhoods.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// The generator every engine owns.
///
/// ChaCha keeps seeded runs reproducible across platforms and `rand` releases.
pub type SearchRng = ChaCha8Rng;

/// Creates a seeded generator, or one seeded from OS entropy when `seed` is `None`.
pub fn rng_from_seed(seed: Option<u64>) -> SearchRng {
    match seed {
        Some(seed) => SearchRng::seed_from_u64(seed),
        None => SearchRng::from_os_rng(),
    }
}
