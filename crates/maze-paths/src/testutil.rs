//! Helpers shared by the search tests.

use std::collections::{HashSet, VecDeque};

use maze_core::{Grid, Point};
use rand::Rng;

use crate::distance::manhattan;
use crate::result::SearchResult;
use crate::traits::Pather;

pub(crate) fn grid(s: &str) -> Grid {
    s.parse().expect("test grid")
}

pub(crate) fn pts(v: &[(i32, i32)]) -> Vec<Point> {
    v.iter().map(|&p| Point::from(p)).collect()
}

/// In bounds, never a wall, every step one cardinal move.
pub(crate) fn assert_valid_path(g: &Grid, path: &[Point]) {
    assert!(!path.is_empty());
    for &p in path {
        assert!(g.contains(p), "{p} outside grid");
        assert!(!g.is_wall(p), "{p} is a wall");
    }
    for w in path.windows(2) {
        assert_eq!(manhattan(w[0], w[1]), 1, "{} -> {} is not a step", w[0], w[1]);
    }
}

/// Step count between two cells by repeated relaxation over the whole grid,
/// independent of any queue discipline. Returns the number of cells on a
/// shortest path, endpoints included.
pub(crate) fn reference_distance(g: &Grid, from: Point, to: Point) -> Option<usize> {
    let b = g.bounds();
    let mut dist = vec![usize::MAX; b.len()];
    dist[b.index(from)?] = 0;
    let mut changed = true;
    while changed {
        changed = false;
        for p in b {
            if g.is_wall(p) && p != from {
                continue;
            }
            let i = b.index(p)?;
            for n in p.neighbors_4() {
                let Some(ni) = b.index(n) else { continue };
                if dist[ni] != usize::MAX && dist[ni] + 1 < dist[i] {
                    dist[i] = dist[ni] + 1;
                    changed = true;
                }
            }
        }
    }
    let d = dist[b.index(to)?];
    (d != usize::MAX).then(|| d + 1)
}

/// Random grid with distinct start and end.
pub(crate) fn random_grid(rng: &mut impl Rng, rows: i32, cols: i32, wall_pct: f64) -> Grid {
    loop {
        let start = Point::new(rng.random_range(0..rows), rng.random_range(0..cols));
        let end = Point::new(rng.random_range(0..rows), rng.random_range(0..cols));
        if start == end {
            continue;
        }
        let walls: Vec<bool> = (0..rows * cols).map(|_| rng.random_bool(wall_pct)).collect();
        let g = Grid::with_walls(rows, cols, start, end, |p| {
            walls[(p.row * cols + p.col) as usize]
        });
        if let Ok(g) = g {
            return g;
        }
    }
}

/// BFS where every queue entry carries its own path prefix.
pub(crate) fn prefix_bfs(g: &Grid, start: Point, end: Point) -> SearchResult {
    let mut result = SearchResult::default();
    let mut visited = HashSet::from([start]);
    let mut queue = VecDeque::from([(start, vec![start])]);
    let mut buf = Vec::new();
    while let Some((cur, path)) = queue.pop_front() {
        result.visited.push(cur);
        if cur == end {
            result.path = Some(path);
            return result;
        }
        buf.clear();
        g.neighbors(cur, &mut buf);
        for &n in &buf {
            if !visited.contains(&n) && !g.is_wall(n) {
                visited.insert(n);
                let mut next = path.clone();
                next.push(n);
                queue.push_back((n, next));
            }
        }
    }
    result
}

/// DFS where every stack entry carries its own path prefix.
pub(crate) fn prefix_dfs(g: &Grid, start: Point, end: Point) -> SearchResult {
    let mut result = SearchResult::default();
    let mut visited = HashSet::new();
    let mut stack = vec![(start, vec![start])];
    let mut buf = Vec::new();
    while let Some((cur, path)) = stack.pop() {
        if !visited.insert(cur) {
            continue;
        }
        result.visited.push(cur);
        if cur == end {
            result.path = Some(path);
            return result;
        }
        buf.clear();
        g.neighbors(cur, &mut buf);
        for &n in &buf {
            if !g.is_wall(n) {
                let mut next = path.clone();
                next.push(n);
                stack.push((n, next));
            }
        }
    }
    result
}
