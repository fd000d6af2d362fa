use maze_core::Point;

/// Manhattan (L1) distance between two points: `|Δrow| + |Δcol|`.
///
/// Admissible and consistent on a 4-connected unit-cost grid.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_is_symmetric() {
        let a = Point::new(0, 0);
        let b = Point::new(4, 4);
        assert_eq!(manhattan(a, b), 8);
        assert_eq!(manhattan(b, a), 8);
        assert_eq!(manhattan(Point::new(2, 7), Point::new(5, 1)), 9);
        assert_eq!(manhattan(a, a), 0);
    }
}
