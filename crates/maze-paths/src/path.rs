use maze_core::{Point, Range};

use crate::PathRange;
use crate::pathrange::NO_PARENT;

/// Rebuild a path by walking predecessor links back from `end`.
///
/// `parents` is indexed like `bounds` (row-major); the walk stops at the
/// first cell whose parent is `usize::MAX`, which is the start. The result
/// runs from start to `end` inclusive.
///
/// Returns an empty path if `end` lies outside `bounds`, or if the links are
/// malformed: an index past `parents` or `bounds`, or a cycle (a walk longer
/// than the number of cells).
pub fn reconstruct(parents: &[usize], bounds: Range, end: Point) -> Vec<Point> {
    let Some(mut ci) = bounds.index(end) else {
        return Vec::new();
    };
    let len = bounds.len().min(parents.len());
    let mut path = Vec::new();
    while ci != NO_PARENT {
        let Some(&parent) = parents.get(ci).filter(|_| ci < len && path.len() < len) else {
            return Vec::new();
        };
        path.push(bounds.point(ci));
        ci = parent;
    }
    path.reverse();
    path
}

impl PathRange {
    /// Path from the current search's start to the cell at `end_idx`.
    pub(crate) fn path_to(&self, end_idx: usize) -> Vec<Point> {
        reconstruct(&self.parents, self.rng, self.point(end_idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walks_back_and_reverses() {
        // 1×4 corridor: 0 <- 1 <- 2 <- 3
        let bounds = Range::sized(1, 4);
        let parents = [NO_PARENT, 0, 1, 2];
        assert_eq!(
            reconstruct(&parents, bounds, Point::new(0, 3)),
            vec![
                Point::new(0, 0),
                Point::new(0, 1),
                Point::new(0, 2),
                Point::new(0, 3),
            ]
        );
    }

    #[test]
    fn start_alone() {
        let bounds = Range::sized(2, 2);
        let parents = [NO_PARENT; 4];
        assert_eq!(
            reconstruct(&parents, bounds, Point::new(1, 1)),
            vec![Point::new(1, 1)]
        );
    }

    #[test]
    fn follows_turns() {
        // 2×2: (0,0) -> (1,0) -> (1,1)
        let bounds = Range::sized(2, 2);
        let parents = [NO_PARENT, NO_PARENT, 0, 2];
        assert_eq!(
            reconstruct(&parents, bounds, Point::new(1, 1)),
            vec![Point::new(0, 0), Point::new(1, 0), Point::new(1, 1)]
        );
    }

    #[test]
    fn short_parents_are_empty() {
        let bounds = Range::sized(2, 2);
        assert!(reconstruct(&[NO_PARENT, 0], bounds, Point::new(1, 1)).is_empty());
    }

    #[test]
    fn link_outside_bounds_is_empty() {
        let bounds = Range::sized(1, 3);
        assert!(reconstruct(&[NO_PARENT, 7, 1], bounds, Point::new(0, 2)).is_empty());
    }

    #[test]
    fn cycle_is_empty() {
        // 1 -> 2 -> 1, never reaching a start
        let bounds = Range::sized(1, 3);
        assert!(reconstruct(&[NO_PARENT, 2, 1], bounds, Point::new(0, 2)).is_empty());
    }

    #[test]
    fn longer_parents_than_bounds_still_work() {
        // Scratch arrays may outgrow the current range.
        let bounds = Range::sized(1, 2);
        let parents = [NO_PARENT, 0, 5, 5, 5];
        assert_eq!(
            reconstruct(&parents, bounds, Point::new(0, 1)),
            vec![Point::new(0, 0), Point::new(0, 1)]
        );
    }

    #[test]
    fn outside_end_is_empty() {
        let parents = [NO_PARENT; 4];
        assert!(reconstruct(&parents, Range::sized(2, 2), Point::new(3, 0)).is_empty());
    }
}
