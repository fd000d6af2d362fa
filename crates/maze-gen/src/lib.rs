//! Board generation for the maze game and visualizer: random levels with
//! level-scaled wall density, and perfect mazes.

pub mod error;
pub mod level;
pub mod maze;

pub use error::LevelError;
pub use level::{Level, LevelConfig, LevelGen};
