//! **maze-core**: grid model for the maze pathfinding workspace.
//!
//! This crate provides the data the searches consume: geometry primitives,
//! cells, a fixed-size row-major grid with one start and one end, and the
//! ASCII text format used by tests and the demo.

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;

pub use cell::{Cell, Tile};
pub use error::GridError;
pub use geom::{Point, Range};
pub use grid::Grid;
