//! C FFI layer for host engine integration.
//!
//! This module exports C ABI functions for a game engine that renders the
//! simulation, e.g. through a native plugin. All functions are marked with
//! `#[no_mangle]` and use `extern "C"`.
//!
//! The actual logic is in the `automaton` module. These functions are thin wrappers
//! that handle null checks, pointer safety, and C-to-Rust conversions. Nothing
//! here panics on bad input; rejected calls (null handles, out-of-range writes,
//! non-positive or unallocatable dimensions) return a failure value instead.
//!
//! Host callbacks run while the library holds the handle mutably, so they must
//! not re-enter `gol_*` with that same handle.

use std::ffi::c_void;

use crate::automaton::{Representation, Simulator};
use crate::state::CellState;

pub mod grid;
pub mod lifecycle;
pub mod region;
pub mod seeding;

pub use grid::{gol_alive_count, gol_get_cell, gol_set_cell, gol_step};
pub use lifecycle::{
    gol_create, gol_create_bound, gol_destroy, gol_get_generation, gol_height, gol_width,
};
pub use region::{gol_extract_region, gol_import_region};
pub use seeding::gol_seed_random;

/// Host callback that builds the object mirroring cell `(x, y)` and returns its handle.
pub type SpawnFn = unsafe extern "C" fn(user_data: *mut c_void, x: i32, y: i32) -> u64;

/// Host callback told about a cell's new state (0 = dead, 1 = alive).
pub type UpdateFn = unsafe extern "C" fn(user_data: *mut c_void, handle: u64, alive: u8);

/// A cell's host-side twin: an opaque handle plus the callback that updates it.
pub struct HostCell {
    handle: u64,
    update: Option<UpdateFn>,
    user_data: *mut c_void,
}

impl HostCell {
    pub fn handle(&self) -> u64 {
        self.handle
    }
}

impl Representation for HostCell {
    fn update(&mut self, state: CellState) {
        if let Some(update) = self.update {
            // SAFETY: the host promised at creation that the callback accepts user_data.
            unsafe { update(self.user_data, self.handle, state.as_u8()) }
        }
    }
}

/// Opaque handle type handed out across the C boundary.
pub type LifeState = Simulator<HostCell>;
