//! Core automaton logic and grid operations.
//!
//! This module contains the grid storage, the two-phase stepping, seeding,
//! and region snapshots. The FFI layer in `ffi/` calls these functions.

pub mod grid;
pub mod region;
pub mod seeding;
pub mod stepping;

pub use grid::{Grid, Representation};
pub use region::{extract_region, import_region};
pub use seeding::seed_random;
pub use stepping::{
    advance, commit_phase, count_alive_neighbors, decide_phase, next_state, Simulator,
};
