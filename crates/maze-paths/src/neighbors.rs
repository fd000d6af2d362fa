use maze_core::{Point, Range};

/// Push the cardinal neighbours of `p` that lie inside `bounds`, in the
/// order up, down, left, right.
///
/// BFS and DFS visit orders, and the DFS path itself, follow from this
/// order.
#[inline]
pub(crate) fn push_cardinal(p: Point, bounds: Range, buf: &mut Vec<Point>) {
    buf.extend(p.neighbors_4().into_iter().filter(|&n| bounds.contains(n)));
}

/// Cached neighbor computation helper.
///
/// Reuses one buffer across calls.
pub struct Neighbors {
    buf: Vec<Point>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Return the in-bounds cardinal neighbours of `p`: up, down, left,
    /// right. No wall filtering happens here.
    pub fn cardinal(&mut self, p: Point, bounds: Range) -> &[Point] {
        self.buf.clear();
        push_cardinal(p, bounds, &mut self.buf);
        &self.buf
    }
}
