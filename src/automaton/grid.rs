//! Toroidal grid storage and cell access.

use std::fmt;

use tracing::debug;

use crate::error::{Error, Result};
use crate::state::{Cell, CellState};

/// Something outside the simulation that mirrors one cell, e.g. a sprite.
///
/// One value is built per cell when the grid is created and is told about
/// every write to that cell's current state.
pub trait Representation {
    fn update(&mut self, state: CellState);
}

/// Headless grids carry no representation.
impl Representation for () {
    #[inline]
    fn update(&mut self, _state: CellState) {}
}

/// A fixed-size grid of cells whose edges wrap around on both axes.
pub struct Grid<R = ()> {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
    representations: Vec<R>,
}

impl Grid<()> {
    /// Create a grid with no bound representation.
    pub fn headless(width: i32, height: i32) -> Result<Self> {
        Self::new(width, height, |_, _| ())
    }
}

impl<R: Representation> Grid<R> {
    /// Allocate a `width` x `height` grid with every cell dead.
    ///
    /// Fails with [`Error::InvalidDimension`] for a non-positive side and
    /// [`Error::TooLarge`] when the cell storage cannot be allocated.
    /// `init` is called exactly once per cell in row-major order (y outer,
    /// x inner) and its result is bound to that cell.
    pub fn new<F>(width: i32, height: i32, mut init: F) -> Result<Self>
    where
        F: FnMut(i32, i32) -> R,
    {
        if width <= 0 || height <= 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let too_large = || Error::TooLarge { width, height };
        let size = (width as usize)
            .checked_mul(height as usize)
            .ok_or_else(too_large)?;
        let mut cells = Vec::new();
        cells.try_reserve_exact(size).map_err(|_| too_large())?;
        let mut representations = Vec::new();
        representations
            .try_reserve_exact(size)
            .map_err(|_| too_large())?;

        for y in 0..height {
            for x in 0..width {
                cells.push(Cell::new(x, y));
                representations.push(init(x, y));
            }
        }

        debug!(width, height, "created grid");

        Ok(Grid {
            width,
            height,
            cells,
            representations,
        })
    }

    /// Set the current state of an in-range cell and notify its representation.
    ///
    /// # Panics
    /// If `(x, y)` is outside the grid.
    pub fn set_cell_state(&mut self, x: i32, y: i32, state: CellState) {
        let idx = self.checked_index(x, y);
        self.cells[idx].current_state = state;
        self.representations[idx].update(state);
    }

    /// Stage the state this cell will take on the next commit.
    ///
    /// # Panics
    /// If `(x, y)` is outside the grid.
    pub fn stage_next_state(&mut self, x: i32, y: i32, state: CellState) {
        let idx = self.checked_index(x, y);
        self.cells[idx].next_state = state;
    }

    /// Copy the staged state into the current state and notify the representation.
    ///
    /// # Panics
    /// If `(x, y)` is outside the grid.
    pub fn commit_cell(&mut self, x: i32, y: i32) {
        let idx = self.checked_index(x, y);
        let next = self.cells[idx].next_state;
        self.set_cell_state(x, y, next);
    }

    pub fn representation_mut(&mut self, x: i32, y: i32) -> &mut R {
        let idx = self.wrapped_index(x, y);
        &mut self.representations[idx]
    }
}

impl<R> Grid<R> {
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: construction rejects empty grids.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Check if coordinates are within grid bounds.
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    /// Reduce arbitrary coordinates onto the torus.
    #[inline]
    pub fn wrap(&self, x: i32, y: i32) -> (i32, i32) {
        (x.rem_euclid(self.width), y.rem_euclid(self.height))
    }

    /// Current state at `(x mod width, y mod height)`. Never fails.
    #[inline]
    pub fn get_state(&self, x: i32, y: i32) -> CellState {
        self.cells[self.wrapped_index(x, y)].current_state
    }

    /// The cell at the wrapped position.
    #[inline]
    pub fn cell(&self, x: i32, y: i32) -> &Cell {
        &self.cells[self.wrapped_index(x, y)]
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter()
    }

    pub fn representation(&self, x: i32, y: i32) -> &R {
        &self.representations[self.wrapped_index(x, y)]
    }

    pub fn alive_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.current_state.is_alive())
            .count()
    }

    #[inline]
    fn index_of(&self, x: i32, y: i32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    #[inline]
    fn wrapped_index(&self, x: i32, y: i32) -> usize {
        let (x, y) = self.wrap(x, y);
        self.index_of(x, y)
    }

    #[inline]
    fn checked_index(&self, x: i32, y: i32) -> usize {
        assert!(
            self.in_bounds(x, y),
            "cell ({}, {}) is outside the {}x{} grid",
            x,
            y,
            self.width,
            self.height
        );
        self.index_of(x, y)
    }
}

/// Text dump: `#` for alive, `.` for dead, one line per row.
impl<R> fmt::Display for Grid<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width as usize) {
            for cell in row {
                let glyph = if cell.current_state.is_alive() { '#' } else { '.' };
                write!(f, "{}", glyph)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
