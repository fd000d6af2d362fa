//! Pathfinding over maze grids.
//!
//! This crate provides the three classical searches the visualizer
//! animates, each returning the order in which cells were finalised along
//! with the path found:
//!
//! - **BFS** minimum-step search ([`bfs`], [`PathRange::bfs_path`])
//! - **DFS** depth-first exploration ([`dfs`], [`PathRange::dfs_path`])
//! - **A\*** Manhattan-guided minimum-step search ([`astar`], [`PathRange::astar_path`])
//!
//! Searches never write to the grid. Costs, visited marks and predecessor
//! links live in flat arrays owned by [`PathRange`], and every path is
//! rebuilt from predecessor links by [`reconstruct`].
//!
//! Neighbours are always enumerated up, down, left, right. Visit orders and
//! the DFS path depend on that order.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | BFS, DFS, reachability |
//! | [`AstarPather`] : [`Pather`] | A* |
//!
//! [`maze_core::Grid`] implements both.

mod astar;
mod bfs;
mod dfs;
mod distance;
mod grid;
mod neighbors;
mod path;
mod pathrange;
mod reachable;
mod result;
mod search;
mod traits;

#[cfg(test)]
mod testutil;

pub use distance::manhattan;
pub use neighbors::Neighbors;
pub use path::reconstruct;
pub use pathrange::PathRange;
pub use result::SearchResult;
pub use search::{Algorithm, ParseAlgorithmError, astar, bfs, dfs};
pub use traits::{AstarPather, Pather};
