//! Seeded randomness for spawn positions
//!
//! Each game instance owns its own generator; nothing here is global.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::MAX_SAMPLE_RETRIES;

/// Generator used by every simulation
pub type SimRng = Pcg32;

/// Create a generator from a run seed
pub fn seeded(seed: u64) -> SimRng {
    Pcg32::seed_from_u64(seed)
}

/// Draw an integer in `[0, max]` that is an exact multiple of `step`.
///
/// Rejection sampling with a retry cap. If every draw is rejected the last
/// draw is snapped down to the grid, which still satisfies the alignment.
pub fn random_aligned<R: Rng>(rng: &mut R, max: i32, step: i32) -> i32 {
    assert!(step > 0, "alignment step must be positive");
    assert!(max >= 0, "sample range must be non-empty");

    let mut value = 0;
    for _ in 0..MAX_SAMPLE_RETRIES {
        value = rng.random_range(0..=max);
        if value % step == 0 {
            return value;
        }
    }

    log::warn!(
        "No aligned sample after {} retries (max={}, step={}), snapping {}",
        MAX_SAMPLE_RETRIES,
        max,
        step,
        value
    );
    value - value % step
}
