use maze_core::{Point, Range};

use crate::neighbors;

/// Minimal pathfinding interface: the searchable area, which cells may be
/// entered, and neighbour enumeration.
pub trait Pather {
    /// The rectangle searches are confined to.
    fn bounds(&self) -> Range;

    /// Whether a search may enter `p`. Read on every expansion, never cached
    /// across searches.
    fn passable(&self, p: Point) -> bool;

    /// Append the in-bounds neighbours of `p` into `buf`, in search order.
    /// The caller clears `buf` before calling. Passability is not checked
    /// here; searches filter with [`passable`](Self::passable).
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        neighbors::push_cardinal(p, self.bounds(), buf);
    }
}

/// Pather with an admissible heuristic, as needed by A*.
pub trait AstarPather: Pather {
    /// Heuristic estimate of the number of steps from `from` to `to`.
    /// Must never overestimate the true cost (admissible).
    fn estimate(&self, from: Point, to: Point) -> i32;
}
