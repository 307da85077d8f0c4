//! Cell state and the per-position cell record.

use std::ops::Not;

/// State of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellState {
    Alive,
    #[default]
    Dead,
}

impl CellState {
    #[inline]
    pub fn is_alive(self) -> bool {
        self == CellState::Alive
    }

    /// Byte encoding used across the C ABI and region buffers (0 = dead, 1 = alive).
    #[inline]
    pub fn as_u8(self) -> u8 {
        match self {
            CellState::Alive => 1,
            CellState::Dead => 0,
        }
    }

    /// Any non-zero byte is alive.
    #[inline]
    pub fn from_u8(value: u8) -> Self {
        if value == 0 {
            CellState::Dead
        } else {
            CellState::Alive
        }
    }
}

impl From<bool> for CellState {
    #[inline]
    fn from(alive: bool) -> Self {
        if alive {
            CellState::Alive
        } else {
            CellState::Dead
        }
    }
}

impl Not for CellState {
    type Output = Self;

    #[inline]
    fn not(self) -> Self::Output {
        match self {
            CellState::Alive => CellState::Dead,
            CellState::Dead => CellState::Alive,
        }
    }
}

/// One grid position.
///
/// The coordinates are fixed when the grid is built. `next_state` is scratch
/// space for the decide phase and only becomes visible through a commit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    x: i32,
    y: i32,
    pub(crate) current_state: CellState,
    pub(crate) next_state: CellState,
}

impl Cell {
    pub(crate) fn new(x: i32, y: i32) -> Self {
        Cell {
            x,
            y,
            current_state: CellState::Dead,
            next_state: CellState::Dead,
        }
    }

    #[inline]
    pub fn x(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> i32 {
        self.y
    }

    #[inline]
    pub fn current_state(&self) -> CellState {
        self.current_state
    }

    /// Staged state for the upcoming generation.
    #[inline]
    pub fn next_state(&self) -> CellState {
        self.next_state
    }
}
