//! Errors raised while building or parsing a [`Grid`](crate::Grid).

use thiserror::Error;

use crate::geom::Point;

/// Grid construction error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("grid has no cells")]
    EmptyGrid,

    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown glyph {glyph:?} at {pos}")]
    UnknownGlyph { glyph: char, pos: Point },

    #[error("grid has no start cell")]
    MissingStart,

    #[error("grid has no end cell")]
    MissingEnd,

    #[error("second start cell at {0}")]
    DuplicateStart(Point),

    #[error("second end cell at {0}")]
    DuplicateEnd(Point),

    #[error("{0} is outside the grid")]
    OutOfBounds(Point),

    #[error("start and end are both at {0}")]
    StartIsEnd(Point),
}

pub type Result<T> = std::result::Result<T, GridError>;
