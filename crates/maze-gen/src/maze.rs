//! Perfect mazes carved with a randomised depth-first backtracker.
//!
//! Open cells sit on even coordinates; the odd coordinates between them are
//! walls until a passage is carved through. Every open cell is connected to
//! every other by exactly one route.

use log::debug;
use maze_core::{Grid, Point, Range};
use rand::Rng;

use crate::error::{LevelError, Result};
use crate::level::LevelGen;

const STEPS: [Point; 4] = [
    Point::new(-2, 0),
    Point::new(2, 0),
    Point::new(0, -2),
    Point::new(0, 2),
];

impl<R: Rng> LevelGen<R> {
    /// Carve a `rows × cols` maze. Start is the top-left cell, end the
    /// bottom-right-most open cell.
    pub fn maze(&mut self, rows: i32, cols: i32) -> Result<Grid> {
        let bounds = Range::sized(rows, cols);
        let end = Point::new((rows - 1) / 2 * 2, (cols - 1) / 2 * 2);
        if bounds.is_empty() || end == Point::ZERO {
            return Err(LevelError::MazeTooSmall { rows, cols });
        }

        let mut open = vec![false; bounds.len()];
        let mut stack = vec![Point::ZERO];
        let mut options = Vec::with_capacity(4);
        open[0] = true;

        while let Some(&cur) = stack.last() {
            options.clear();
            options.extend(STEPS.iter().map(|&d| cur + d).filter(|&n| {
                bounds.index(n).is_some_and(|i| !open[i])
            }));
            if options.is_empty() {
                stack.pop();
                continue;
            }
            let next = options[self.rng.random_range(0..options.len())];
            let between = Point::new((cur.row + next.row) / 2, (cur.col + next.col) / 2);
            for p in [between, next] {
                if let Some(i) = bounds.index(p) {
                    open[i] = true;
                }
            }
            stack.push(next);
        }

        let grid = Grid::with_walls(rows, cols, Point::ZERO, end, |p| {
            bounds.index(p).is_some_and(|i| !open[i])
        })?;
        debug!("carved {rows}x{cols} maze, {} walls", grid.wall_count());
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::LevelConfig;
    use maze_paths::{PathRange, bfs};

    fn maze_gen(seed: u64) -> LevelGen<rand::rngs::StdRng> {
        LevelGen::seeded(LevelConfig::default(), seed).unwrap()
    }

    #[test]
    fn mazes_are_always_solvable() {
        for seed in 0..20 {
            let g = maze_gen(seed).maze(15, 31).unwrap();
            assert_eq!(g.start(), Point::new(0, 0));
            assert_eq!(g.end(), Point::new(14, 30));
            assert!(bfs(&g, g.start(), g.end()).found(), "seed {seed}\n{g}");
        }
    }

    #[test]
    fn every_even_cell_is_open_and_connected() {
        let g = maze_gen(11).maze(9, 9).unwrap();
        let mut pr = PathRange::new(g.bounds());
        let reach = pr.reachable(&g, g.start());
        for p in g.bounds() {
            if p.row % 2 == 0 && p.col % 2 == 0 {
                assert!(!g.is_wall(p), "{p}");
                assert!(reach.contains(&p), "{p}");
            }
            if p.row % 2 == 1 && p.col % 2 == 1 {
                assert!(g.is_wall(p), "{p}");
            }
        }
        // A spanning tree over 25 cells carves 24 passages.
        assert_eq!(reach.len(), 25 + 24);
    }

    #[test]
    fn even_sized_board_keeps_last_row_walled() {
        let g = maze_gen(2).maze(6, 6).unwrap();
        assert_eq!(g.end(), Point::new(4, 4));
        assert!(bfs(&g, g.start(), g.end()).found());
    }

    #[test]
    fn seeded_mazes_repeat() {
        assert_eq!(maze_gen(5).maze(11, 21), maze_gen(5).maze(11, 21));
    }

    #[test]
    fn too_small() {
        assert_eq!(
            maze_gen(0).maze(1, 1),
            Err(LevelError::MazeTooSmall { rows: 1, cols: 1 })
        );
        assert_eq!(
            maze_gen(0).maze(2, 2),
            Err(LevelError::MazeTooSmall { rows: 2, cols: 2 })
        );
        assert!(maze_gen(0).maze(1, 3).is_ok());
    }
}
