//! Generation stepping with the B3/S23 rule.
//!
//! A step is split into a decide phase, which stages every cell's next state
//! while reading only current states, and a commit phase, which publishes the
//! staged states. Neighbor counts therefore always see generation N.

use tracing::trace;

use super::grid::{Grid, Representation};
use crate::error::Result;
use crate::state::CellState;

/// Moore neighborhood offsets (the 3x3 block minus its center).
pub const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Count alive neighbors around `(x, y)`, wrapping at the edges.
///
/// Accepts any coordinates, like [`Grid::get_state`].
pub fn count_alive_neighbors<R>(grid: &Grid<R>, x: i32, y: i32) -> u8 {
    // Offsets are applied to the wrapped center so they cannot overflow.
    let (x, y) = grid.wrap(x, y);
    NEIGHBOR_OFFSETS
        .iter()
        .filter(|&&(dx, dy)| grid.get_state(x + dx, y + dy).is_alive())
        .count() as u8
}

/// B3/S23:
/// - Birth: a dead cell with exactly 3 neighbors becomes alive
/// - Survival: an alive cell with 2 or 3 neighbors stays alive
/// - Everything else is dead next generation
#[inline]
pub fn next_state(current: CellState, alive_neighbors: u8) -> CellState {
    match (current, alive_neighbors) {
        (CellState::Dead, 3) => CellState::Alive,
        (CellState::Alive, 2) | (CellState::Alive, 3) => CellState::Alive,
        _ => CellState::Dead,
    }
}

/// Stage the next state of every cell. Current states are left untouched.
pub fn decide_phase<R: Representation>(grid: &mut Grid<R>) {
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let neighbors = count_alive_neighbors(grid, x, y);
            let next = next_state(grid.get_state(x, y), neighbors);
            grid.stage_next_state(x, y, next);
        }
    }
}

/// Publish every staged state, notifying representations.
pub fn commit_phase<R: Representation>(grid: &mut Grid<R>) {
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            grid.commit_cell(x, y);
        }
    }
}

/// Advance the grid by exactly one generation.
pub fn advance<R: Representation>(grid: &mut Grid<R>) {
    decide_phase(grid);
    commit_phase(grid);
}

/// A grid together with its generation counter.
pub struct Simulator<R = ()> {
    grid: Grid<R>,
    generation: u64,
}

impl Simulator<()> {
    pub fn headless(width: i32, height: i32) -> Result<Self> {
        Ok(Simulator::new(Grid::headless(width, height)?))
    }
}

impl<R: Representation> Simulator<R> {
    pub fn new(grid: Grid<R>) -> Self {
        Simulator {
            grid,
            generation: 0,
        }
    }

    /// Build the grid and the simulator in one go. See [`Grid::new`].
    pub fn with_representation<F>(width: i32, height: i32, init: F) -> Result<Self>
    where
        F: FnMut(i32, i32) -> R,
    {
        Ok(Simulator::new(Grid::new(width, height, init)?))
    }

    /// Step forward one generation.
    pub fn advance(&mut self) {
        advance(&mut self.grid);
        self.generation += 1;
        trace!(generation = self.generation, "advanced");
    }

    pub fn grid(&self) -> &Grid<R> {
        &self.grid
    }

    /// Mutable access for seeding and interactive toggles between steps.
    pub fn grid_mut(&mut self) -> &mut Grid<R> {
        &mut self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn into_grid(self) -> Grid<R> {
        self.grid
    }
}
