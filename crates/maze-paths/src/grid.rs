//! [`Pather`] for the maze grid: in-bounds cardinal moves onto non-wall
//! cells, Manhattan estimate.

use maze_core::{Grid, Point, Range};

use crate::distance::manhattan;
use crate::traits::{AstarPather, Pather};

impl Pather for Grid {
    #[inline]
    fn bounds(&self) -> Range {
        Grid::bounds(self)
    }

    #[inline]
    fn passable(&self, p: Point) -> bool {
        !self.is_wall(p)
    }
}

impl AstarPather for Grid {
    #[inline]
    fn estimate(&self, from: Point, to: Point) -> i32 {
        manhattan(from, to)
    }
}
