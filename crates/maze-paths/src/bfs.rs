use maze_core::Point;

use crate::PathRange;
use crate::pathrange::NO_PARENT;
use crate::result::SearchResult;
use crate::traits::Pather;

impl PathRange {
    /// Breadth-first search from `from` to `to`.
    ///
    /// Cells are marked when enqueued, so each reachable cell is visited at
    /// most once, in non-decreasing step distance. The search stops as soon
    /// as `to` is dequeued, which makes the returned path a minimum-step
    /// route; among equally short routes, neighbour order (up, down, left,
    /// right) decides.
    pub fn bfs_path<P: Pather>(&mut self, pather: &P, from: Point, to: Point) -> SearchResult {
        let mut result = SearchResult::default();
        let Some(si) = self.idx(from) else {
            return self.finish("bfs", from, to, result);
        };
        let goal = self.idx(to);
        let cur_gen = self.next_generation();

        let mut queue = std::mem::take(&mut self.queue);
        let mut nbuf = std::mem::take(&mut self.nbuf);
        queue.clear();

        self.seen[si] = cur_gen;
        self.parents[si] = NO_PARENT;
        queue.push_back(si);

        while let Some(ci) = queue.pop_front() {
            let cp = self.point(ci);
            result.visited.push(cp);

            if Some(ci) == goal {
                result.path = Some(self.path_to(ci));
                break;
            }

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
                self.parents[ni] = ci;
                queue.push_back(ni);
            }
        }

        self.queue = queue;
        self.nbuf = nbuf;
        self.finish("bfs", from, to, result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{assert_valid_path, grid, pts};

    #[test]
    fn open_grid_shortest_path() {
        let g = grid(
            "S....
             .....
             .....
             .....
             ....E",
        );
        let r = PathRange::new(g.bounds()).bfs_path(&g, g.start(), g.end());
        let path = r.path.as_ref().unwrap();
        assert_eq!(path.len(), 9);
        assert!(r.visited.len() <= 25);
        assert_valid_path(&g, path);
    }

    #[test]
    fn visit_order_follows_neighbor_order() {
        let g = grid(
            "...
             .S.
             ..E",
        );
        let r = PathRange::new(g.bounds()).bfs_path(&g, g.start(), g.end());
        assert_eq!(
            r.visited,
            pts(&[(1, 1), (0, 1), (2, 1), (1, 0), (1, 2), (0, 0), (0, 2), (2, 0), (2, 2)])
        );
        // (2,2) is first discovered from (2,1): down before right.
        assert_eq!(r.path, Some(pts(&[(1, 1), (2, 1), (2, 2)])));
    }

    #[test]
    fn routes_around_walls() {
        let g = grid(
            "S#...
             .#.#.
             ...#E",
        );
        let r = PathRange::new(g.bounds()).bfs_path(&g, g.start(), g.end());
        assert_eq!(
            r.path,
            Some(pts(&[
                (0, 0),
                (1, 0),
                (2, 0),
                (2, 1),
                (2, 2),
                (1, 2),
                (0, 2),
                (0, 3),
                (0, 4),
                (1, 4),
                (2, 4),
            ]))
        );
    }

    #[test]
    fn walled_off_end() {
        let g = grid(
            "S..
             ###
             ..E",
        );
        let r = PathRange::new(g.bounds()).bfs_path(&g, g.start(), g.end());
        assert_eq!(r.path, None);
        assert_eq!(r.visited, pts(&[(0, 0), (0, 1), (0, 2)]));
    }

    #[test]
    fn start_equals_end() {
        let g = grid("S.\n.E");
        let r = PathRange::new(g.bounds()).bfs_path(&g, g.start(), g.start());
        assert_eq!(r.path, Some(vec![g.start()]));
        assert_eq!(r.visited, vec![g.start()]);
    }

    #[test]
    fn reused_range_gives_same_answer() {
        let g = grid(
            "S.#.
             ..#.
             ....
             .#.E",
        );
        let mut pr = PathRange::new(g.bounds());
        let first = pr.bfs_path(&g, g.start(), g.end());
        let _ = pr.bfs_path(&g, g.end(), g.start());
        let again = pr.bfs_path(&g, g.start(), g.end());
        assert_eq!(first, again);
    }

    #[test]
    fn outside_start_finds_nothing() {
        let g = grid("S.\n.E");
        let r = PathRange::new(g.bounds()).bfs_path(&g, Point::new(5, 5), g.end());
        assert!(r.visited.is_empty());
        assert_eq!(r.path, None);
    }
}
