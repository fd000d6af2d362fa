use maze_core::Point;

use crate::PathRange;
use crate::pathrange::NO_PARENT;
use crate::result::SearchResult;
use crate::traits::Pather;

impl PathRange {
    /// Depth-first search from `from` to `to`.
    ///
    /// Stack entries are `(cell, parent)`. Cells are marked when popped,
    /// not when pushed, so a cell may sit on the stack several times; the
    /// stale copies are discarded as they come up. Neighbours are pushed in
    /// order up, down, left, right, so "right" is explored first.
    ///
    /// The returned path is a valid route but usually not the shortest.
    pub fn dfs_path<P: Pather>(&mut self, pather: &P, from: Point, to: Point) -> SearchResult {
        let mut result = SearchResult::default();
        let Some(si) = self.idx(from) else {
            return self.finish("dfs", from, to, result);
        };
        let goal = self.idx(to);
        let cur_gen = self.next_generation();

        let mut stack = std::mem::take(&mut self.stack);
        let mut nbuf = std::mem::take(&mut self.nbuf);
        stack.clear();
        stack.push((si, NO_PARENT));

        while let Some((ci, parent)) = stack.pop() {
            if self.seen[ci] == cur_gen {
                continue;
            }
            self.seen[ci] = cur_gen;
            self.parents[ci] = parent;

            let cp = self.point(ci);
            result.visited.push(cp);

            if Some(ci) == goal {
                result.path = Some(self.path_to(ci));
                break;
            }

            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                if !pather.passable(np) {
                    continue;
                }
                if let Some(ni) = self.idx(np) {
                    stack.push((ni, ci));
                }
            }
        }

        self.stack = stack;
        self.nbuf = nbuf;
        self.finish("dfs", from, to, result)
    }
}
