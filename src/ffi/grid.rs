//! Cell access and stepping.

use tracing::warn;

use super::LifeState;
use crate::state::CellState;

/// Sets a cell to alive (non-zero) or dead (0) and notifies its host object.
///
/// # Safety
/// - `ptr` must be a valid pointer to a LifeState, or null
///
/// # Returns
/// 0 on success, 1 on failure (null pointer or coordinates outside the grid).
#[no_mangle]
pub unsafe extern "C" fn gol_set_cell(ptr: *mut LifeState, x: i32, y: i32, alive: u8) -> i32 {
    if ptr.is_null() {
        return 1;
    }

    let grid = (*ptr).grid_mut();
    if !grid.in_bounds(x, y) {
        warn!(x, y, "gol_set_cell outside grid");
        return 1;
    }

    grid.set_cell_state(x, y, CellState::from_u8(alive));
    0
}

/// Gets the state of a cell (0 = dead, 1 = alive).
///
/// Coordinates wrap around the grid edges, so any pair is valid.
///
/// # Safety
/// - `ptr` must be a valid pointer to a LifeState, or null
///
/// # Returns
/// 0 if null pointer or dead; 1 if alive.
#[no_mangle]
pub unsafe extern "C" fn gol_get_cell(ptr: *const LifeState, x: i32, y: i32) -> u8 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).grid().get_state(x, y).as_u8()
}

/// Advances the simulation by one generation (B3/S23, toroidal).
///
/// # Safety
/// - `ptr` must be a valid pointer to a LifeState, or null
#[no_mangle]
pub unsafe extern "C" fn gol_step(ptr: *mut LifeState) {
    if ptr.is_null() {
        return;
    }
    (*ptr).advance();
}

/// # Safety
/// - `ptr` must be a valid pointer to a LifeState, or null
///
/// # Returns
/// Number of alive cells, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn gol_alive_count(ptr: *const LifeState) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).grid().alive_count() as u64
}
