//! Random initial populations.

use rand::Rng;
use tracing::debug;

use super::grid::{Grid, Representation};
use crate::state::CellState;

/// Make `count` uniformly drawn cells alive.
///
/// Draws are independent and may repeat, so fewer than `count` cells can end
/// up alive. Returns how many cells went from dead to alive.
pub fn seed_random<R, G>(grid: &mut Grid<R>, count: usize, rng: &mut G) -> usize
where
    R: Representation,
    G: Rng + ?Sized,
{
    let mut born = 0;
    for _ in 0..count {
        let x = rng.gen_range(0..grid.width());
        let y = rng.gen_range(0..grid.height());
        if !grid.get_state(x, y).is_alive() {
            born += 1;
        }
        grid.set_cell_state(x, y, CellState::Alive);
    }

    debug!(draws = count, born, "seeded grid");
    born
}
