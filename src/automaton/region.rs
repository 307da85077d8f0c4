//! Region extraction and import operations.

use super::grid::{Grid, Representation};
use crate::state::CellState;

/// Clamp a rectangle to the grid. Returns `None` for an empty or inverted region.
fn clamp_region<R>(
    grid: &Grid<R>,
    min_x: i32,
    min_y: i32,
    max_x: i32,
    max_y: i32,
) -> Option<(i32, i32, i32, i32)> {
    let min_x = min_x.clamp(0, grid.width());
    let min_y = min_y.clamp(0, grid.height());
    let max_x = max_x.clamp(0, grid.width());
    let max_y = max_y.clamp(0, grid.height());

    if min_x >= max_x || min_y >= max_y {
        return None;
    }
    Some((min_x, min_y, max_x, max_y))
}

/// Extract a rectangular region of current states into a flat buffer.
///
/// # Layout
/// Row-major: y changes slowest, x fastest. One byte per cell, 0 = dead,
/// 1 = alive. Bounds are half-open and clamped to the grid.
///
/// # Returns
/// Number of bytes written, or 0 if the region is empty or `out_buf` is too small.
pub fn extract_region<R>(
    grid: &Grid<R>,
    out_buf: &mut [u8],
    min_x: i32,
    min_y: i32,
    max_x: i32,
    max_y: i32,
) -> u64 {
    let Some((min_x, min_y, max_x, max_y)) = clamp_region(grid, min_x, min_y, max_x, max_y)
    else {
        return 0;
    };

    let total_size = (max_x - min_x) as usize * (max_y - min_y) as usize;
    if out_buf.len() < total_size {
        return 0;
    }

    let mut offset = 0;
    for y in min_y..max_y {
        for x in min_x..max_x {
            out_buf[offset] = grid.get_state(x, y).as_u8();
            offset += 1;
        }
    }

    offset as u64
}

/// Import a rectangular region from a flat buffer into the grid.
///
/// Uses the same layout as [`extract_region`]; any non-zero byte is alive.
/// Every write goes through [`Grid::set_cell_state`], so bound
/// representations are notified.
///
/// # Returns
/// Number of bytes read, or 0 if the region is empty or `in_buf` is too short.
pub fn import_region<R: Representation>(
    grid: &mut Grid<R>,
    in_buf: &[u8],
    min_x: i32,
    min_y: i32,
    max_x: i32,
    max_y: i32,
) -> u64 {
    let Some((min_x, min_y, max_x, max_y)) = clamp_region(grid, min_x, min_y, max_x, max_y)
    else {
        return 0;
    };

    let total_size = (max_x - min_x) as usize * (max_y - min_y) as usize;
    if in_buf.len() < total_size {
        return 0;
    }

    let mut offset = 0;
    for y in min_y..max_y {
        for x in min_x..max_x {
            grid.set_cell_state(x, y, CellState::from_u8(in_buf[offset]));
            offset += 1;
        }
    }

    offset as u64
}
