//! Random seeding.

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::LifeState;
use crate::automaton;

/// Makes `count` randomly drawn cells alive using a deterministic RNG seeded
/// with `seed`. Draws may repeat.
///
/// # Safety
/// - `ptr` must be a valid pointer to a LifeState, or null
///
/// # Returns
/// Number of cells that went from dead to alive, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn gol_seed_random(ptr: *mut LifeState, count: u32, seed: u64) -> u64 {
    if ptr.is_null() {
        return 0;
    }

    let mut rng = StdRng::seed_from_u64(seed);
    automaton::seed_random((*ptr).grid_mut(), count as usize, &mut rng) as u64
}
