use std::collections::BinaryHeap;

use maze_core::Point;

use crate::PathRange;
use crate::pathrange::{NO_PARENT, NodeRef};
use crate::result::SearchResult;
use crate::traits::AstarPather;

impl PathRange {
    /// Compute the shortest path from `from` to `to` using A*.
    ///
    /// Every step costs 1 and `pather.estimate` guides the search; with an
    /// admissible, consistent estimate (Manhattan on a 4-connected grid) the
    /// path has the same length as the BFS one. A cell is finalised the
    /// first time it is popped; later heap entries for it are stale and
    /// skipped.
    pub fn astar_path<P: AstarPather>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
    ) -> SearchResult {
        let mut result = SearchResult::default();
        let Some(si) = self.idx(from) else {
            return self.finish("astar", from, to, result);
        };
        let goal = self.idx(to);
        let cur_gen = self.next_generation();

        self.seen[si] = cur_gen;
        self.g[si] = 0;
        self.parents[si] = NO_PARENT;

        let h = pather.estimate(from, to);
        let mut seq = 0u32;
        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        open.push(NodeRef { idx: si, f: h, h, seq });

        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some(current) = open.pop() {
            let ci = current.idx;

            // Skip stale entries.
            if self.closed[ci] == cur_gen {
                continue;
            }
            self.closed[ci] = cur_gen;

            let cp = self.point(ci);
            result.visited.push(cp);

            if Some(ci) == goal {
                result.path = Some(self.path_to(ci));
                break;
            }

            let tentative_g = self.g[ci] + 1;

            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                if self.closed[ni] == cur_gen || !pather.passable(np) {
                    continue;
                }
                if self.seen[ni] == cur_gen && tentative_g >= self.g[ni] {
                    continue;
                }
                self.seen[ni] = cur_gen;
                self.g[ni] = tentative_g;
                self.parents[ni] = ci;

                let h = pather.estimate(np, to);
                seq = seq.wrapping_add(1);
                open.push(NodeRef {
                    idx: ni,
                    f: tentative_g + h,
                    h,
                    seq,
                });
            }
        }

        self.nbuf = nbuf;
        self.finish("astar", from, to, result)
    }
}
