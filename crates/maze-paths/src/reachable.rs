//! Reachability flood fill.

use maze_core::Point;

use crate::PathRange;
use crate::traits::Pather;

impl PathRange {
    /// Every cell reachable from `p` through passable cells, `p` included,
    /// in discovery order.
    ///
    /// This is the set a search explores when its goal is unreachable.
    /// Returns an empty vector if `p` is outside the range.
    pub fn reachable<P: Pather>(&mut self, pather: &P, p: Point) -> Vec<Point> {
        let mut result = Vec::new();
        let Some(si) = self.idx(p) else {
            return result;
        };
        let cur_gen = self.next_generation();

        let mut stack = std::mem::take(&mut self.stack);
        let mut nbuf = std::mem::take(&mut self.nbuf);
        stack.clear();

        self.seen[si] = cur_gen;
        stack.push((si, si));
        result.push(p);

        while let Some((ci, _)) = stack.pop() {
            let cp = self.point(ci);
            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                if self.seen[ni] == cur_gen || !pather.passable(np) {
                    continue;
                }
                self.seen[ni] = cur_gen;
                stack.push((ni, ci));
                result.push(np);
            }
        }

        self.stack = stack;
        self.nbuf = nbuf;
        result
    }
}
