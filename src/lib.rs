//! Life Automata - Conway's Game of Life on a toroidal grid
//!
//! The simulation core is independent of any renderer. A host attaches its
//! own per-cell objects through the [`Representation`] trait (or the C ABI in
//! [`ffi`]) and drives time by calling [`Simulator::advance`].

pub mod automaton;
pub mod config;
pub mod error;
pub mod ffi;
pub mod state;


pub use automaton::{Grid, Representation, Simulator};
pub use config::SimulationConfig;
pub use error::{Error, Result};
pub use state::{Cell, CellState};
