//! One-shot search entry points and the algorithm selector.
//!
//! The free functions allocate fresh scratch space per call and keep no
//! state between calls, so the same grid and endpoints always give the same
//! result. Use a [`PathRange`] directly to reuse scratch space across many
//! queries.

use std::fmt;
use std::str::FromStr;

use maze_core::Point;

use crate::PathRange;
use crate::result::SearchResult;
use crate::traits::{AstarPather, Pather};

/// Breadth-first search: minimum-step path.
pub fn bfs<P: Pather>(pather: &P, start: Point, end: Point) -> SearchResult {
    PathRange::new(pather.bounds()).bfs_path(pather, start, end)
}

/// Depth-first search: some path, usually not the shortest.
pub fn dfs<P: Pather>(pather: &P, start: Point, end: Point) -> SearchResult {
    PathRange::new(pather.bounds()).dfs_path(pather, start, end)
}

/// A* search with the pather's estimate: minimum-step path.
pub fn astar<P: AstarPather>(pather: &P, start: Point, end: Point) -> SearchResult {
    PathRange::new(pather.bounds()).astar_path(pather, start, end)
}

/// The search algorithms on offer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    #[default]
    Bfs,
    Dfs,
    AStar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Bfs, Algorithm::Dfs, Algorithm::AStar];

    /// Run this algorithm with scratch space from `range`.
    pub fn run<P: AstarPather>(
        self,
        range: &mut PathRange,
        pather: &P,
        start: Point,
        end: Point,
    ) -> SearchResult {
        match self {
            Algorithm::Bfs => range.bfs_path(pather, start, end),
            Algorithm::Dfs => range.dfs_path(pather, start, end),
            Algorithm::AStar => range.astar_path(pather, start, end),
        }
    }

    /// Whether the returned path is guaranteed to be a shortest one.
    pub const fn is_optimal(self) -> bool {
        !matches!(self, Algorithm::Dfs)
    }

    /// One-line summary for menus.
    pub const fn description(self) -> &'static str {
        match self {
            Algorithm::Bfs => "Finds shortest path",
            Algorithm::Dfs => "Explores deep first",
            Algorithm::AStar => "Heuristic shortest path",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Algorithm::Bfs => "BFS",
            Algorithm::Dfs => "DFS",
            Algorithm::AStar => "A*",
        })
    }
}

/// Error returned when parsing an unknown algorithm name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown algorithm {0:?} (expected bfs, dfs or astar)")]
pub struct ParseAlgorithmError(pub String);

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "dfs" => Ok(Algorithm::Dfs),
            "astar" | "a*" | "a-star" => Ok(Algorithm::AStar),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}
