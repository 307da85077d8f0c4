//! Region extraction and import.

use std::slice;

use super::LifeState;
use crate::automaton;

/// Extracts a rectangular region of cells into a flat output buffer.
///
/// The buffer is filled row by row (y changes slowest, x fastest), one byte
/// per cell. Bounds are half-open and clamped to the grid.
///
/// # Safety
/// - `ptr` must be a valid pointer to a LifeState, or null
/// - `out_buf` must point to at least `out_len` writable bytes, or be null
///
/// # Returns
/// The number of bytes written, or 0 on error.
#[no_mangle]
pub unsafe extern "C" fn gol_extract_region(
    ptr: *const LifeState,
    out_buf: *mut u8,
    out_len: usize,
    min_x: i32,
    min_y: i32,
    max_x: i32,
    max_y: i32,
) -> u64 {
    if ptr.is_null() || out_buf.is_null() {
        return 0;
    }

    let out_slice = slice::from_raw_parts_mut(out_buf, out_len);
    automaton::extract_region((*ptr).grid(), out_slice, min_x, min_y, max_x, max_y)
}

/// Imports a rectangular region of cells from a flat buffer.
///
/// Same layout as `gol_extract_region`; 0 = dead, non-zero = alive. Host
/// objects are notified for every imported cell.
///
/// # Safety
/// - `ptr` must be a valid pointer to a LifeState, or null
/// - `in_buf` must point to at least `in_len` readable bytes, or be null
///
/// # Returns
/// Number of bytes read from the buffer, or 0 on error.
#[no_mangle]
pub unsafe extern "C" fn gol_import_region(
    ptr: *mut LifeState,
    in_buf: *const u8,
    in_len: usize,
    min_x: i32,
    min_y: i32,
    max_x: i32,
    max_y: i32,
) -> u64 {
    if ptr.is_null() || in_buf.is_null() {
        return 0;
    }

    let in_slice = slice::from_raw_parts(in_buf, in_len);
    automaton::import_region((*ptr).grid_mut(), in_slice, min_x, min_y, max_x, max_y)
}
