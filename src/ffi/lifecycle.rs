//! Handle creation, destruction, and metadata queries.

use std::ffi::c_void;
use std::ptr;

use tracing::warn;

use super::{HostCell, LifeState, SpawnFn, UpdateFn};
use crate::automaton::Simulator;

/// Creates a headless `width` x `height` simulation with all cells dead.
///
/// # Returns
/// A pointer to a new LifeState, or null if either dimension is not positive
/// or the grid is too large to allocate.
///
/// # Safety
/// The returned pointer must eventually be freed with `gol_destroy()`.
#[no_mangle]
pub extern "C" fn gol_create(width: i32, height: i32) -> *mut LifeState {
    create(width, height, None, None, ptr::null_mut())
}

/// Creates a simulation whose cells are mirrored by host-side objects.
///
/// `spawn(user_data, x, y)` is called once per cell in row-major order and
/// returns the host handle for that cell. `update(user_data, handle, alive)`
/// is called whenever a cell's current state is written. Either callback may
/// be null.
///
/// # Returns
/// A pointer to a new LifeState, or null if either dimension is not positive
/// or the grid is too large to allocate.
///
/// # Safety
/// - The callbacks must be safe to call with `user_data` for as long as the
///   handle lives
/// - The callbacks must not call back into any `gol_*` function with the
///   handle being created or updated; calls on one handle must never overlap
/// - The returned pointer must eventually be freed with `gol_destroy()`
#[no_mangle]
pub unsafe extern "C" fn gol_create_bound(
    width: i32,
    height: i32,
    spawn: Option<SpawnFn>,
    update: Option<UpdateFn>,
    user_data: *mut c_void,
) -> *mut LifeState {
    create(width, height, spawn, update, user_data)
}

fn create(
    width: i32,
    height: i32,
    spawn: Option<SpawnFn>,
    update: Option<UpdateFn>,
    user_data: *mut c_void,
) -> *mut LifeState {
    let result = Simulator::with_representation(width, height, |x, y| {
        // SAFETY: the caller of gol_create_bound vouches for spawn and user_data.
        let handle = spawn.map_or(0, |spawn| unsafe { spawn(user_data, x, y) });
        HostCell {
            handle,
            update,
            user_data,
        }
    });

    match result {
        Ok(state) => Box::into_raw(Box::new(state)),
        Err(err) => {
            warn!(%err, "rejected gol_create");
            ptr::null_mut()
        }
    }
}

/// Destroys a simulation and frees its memory.
///
/// # Safety
/// - `ptr` must be a valid pointer returned by `gol_create*()`, or null
/// - `ptr` must not be used after this call
#[no_mangle]
pub unsafe extern "C" fn gol_destroy(ptr: *mut LifeState) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
    }
}

/// Gets the current generation counter.
///
/// # Safety
/// - `ptr` must be a valid pointer to a LifeState, or null
///
/// # Returns
/// The generation counter, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn gol_get_generation(ptr: *const LifeState) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).generation()
}

/// # Safety
/// - `ptr` must be a valid pointer to a LifeState, or null
///
/// # Returns
/// Grid width, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn gol_width(ptr: *const LifeState) -> i32 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).grid().width()
}

/// # Safety
/// - `ptr` must be a valid pointer to a LifeState, or null
///
/// # Returns
/// Grid height, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn gol_height(ptr: *const LifeState) -> i32 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).grid().height()
}
