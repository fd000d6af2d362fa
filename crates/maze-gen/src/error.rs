use maze_core::GridError;
use thiserror::Error;

/// Generator error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LevelError {
    #[error("board of {rows}x{cols} is too small (need at least 1x4)")]
    TooSmall { rows: i32, cols: i32 },

    #[error("maze of {rows}x{cols} has fewer than two open cells")]
    MazeTooSmall { rows: i32, cols: i32 },

    #[error("level numbers start at 1")]
    ZeroLevel,

    #[error(transparent)]
    Grid(#[from] GridError),
}

pub type Result<T> = std::result::Result<T, LevelError>;
