//! The [`Grid`] type: a fixed-size, row-major maze of [`Cell`]s.
//!
//! A grid always holds exactly one start and one end cell, neither of which
//! is ever a wall. Wall flags are the only mutable state; editing goes
//! through [`set_wall`](Grid::set_wall) / [`toggle_wall`](Grid::toggle_wall),
//! which refuse to touch the start and end cells.
//!
//! Cloning a `Grid` yields an independent snapshot, which is what callers
//! hand to a search when the live grid may be edited afterwards.
//!
//! # Text format
//!
//! ```text
//! S..#
//! .#..
//! ...E
//! ```
//!
//! `S` start, `E` end, `#` wall, `.` floor. Surrounding whitespace and blank
//! lines are ignored; every row must have the same width.
//!
//! With the `serde` feature a grid is stored as this text, and loading goes
//! through the same checks as parsing.

use std::fmt;
use std::str::FromStr;

use crate::cell::{Cell, Tile};
use crate::error::{GridError, Result};
use crate::geom::{Point, Range};

/// A rectangular maze grid.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "String", try_from = "String")
)]
pub struct Grid {
    cells: Vec<Cell>,
    bounds: Range,
    start: Point,
    end: Point,
}

impl Grid {
    /// Create an open grid (no walls) of `rows × cols` cells.
    pub fn new(rows: i32, cols: i32, start: Point, end: Point) -> Result<Self> {
        Self::with_walls(rows, cols, start, end, |_| false)
    }

    /// Create a grid whose walls are chosen by `is_wall`.
    ///
    /// `is_wall` is called once per cell in row-major order, start and end
    /// included, but its answer is ignored for those two cells.
    pub fn with_walls(
        rows: i32,
        cols: i32,
        start: Point,
        end: Point,
        mut is_wall: impl FnMut(Point) -> bool,
    ) -> Result<Self> {
        let bounds = Range::sized(rows, cols);
        if bounds.is_empty() {
            return Err(GridError::EmptyGrid);
        }
        if !bounds.contains(start) {
            return Err(GridError::OutOfBounds(start));
        }
        if !bounds.contains(end) {
            return Err(GridError::OutOfBounds(end));
        }
        if start == end {
            return Err(GridError::StartIsEnd(start));
        }
        let cells = bounds
            .iter()
            .map(|p| {
                let wall = is_wall(p);
                let tile = if p == start {
                    Tile::Start
                } else if p == end {
                    Tile::End
                } else if wall {
                    Tile::Wall
                } else {
                    Tile::Floor
                };
                Cell::new(p, tile)
            })
            .collect();
        Ok(Self {
            cells,
            bounds,
            start,
            end,
        })
    }

    /// The bounding range `[0, rows) × [0, cols)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.rows()
    }

    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.cols()
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Position of the start cell.
    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    /// Position of the end cell.
    #[inline]
    pub fn end(&self) -> Point {
        self.end
    }

    /// The cell at `p`, or `None` if `p` is outside the grid.
    #[inline]
    pub fn at(&self, p: Point) -> Option<&Cell> {
        self.bounds.index(p).map(|i| &self.cells[i])
    }

    /// Whether `p` is a wall. Points outside the grid count as walls.
    #[inline]
    pub fn is_wall(&self, p: Point) -> bool {
        self.at(p).is_none_or(Cell::is_wall)
    }

    /// Set or clear the wall at `p`.
    ///
    /// Returns `true` if the cell changed. The start and end cells and
    /// points outside the grid are left alone.
    pub fn set_wall(&mut self, p: Point, wall: bool) -> bool {
        let Some(i) = self.bounds.index(p) else {
            return false;
        };
        let cell = &mut self.cells[i];
        let tile = match (cell.tile, wall) {
            (Tile::Floor, true) => Tile::Wall,
            (Tile::Wall, false) => Tile::Floor,
            _ => return false,
        };
        cell.tile = tile;
        true
    }

    /// Flip the wall at `p`. Same restrictions as [`set_wall`](Self::set_wall).
    pub fn toggle_wall(&mut self, p: Point) -> bool {
        let wall = self.at(p).is_some_and(Cell::is_wall);
        self.set_wall(p, !wall)
    }

    /// Remove every wall.
    pub fn clear_walls(&mut self) {
        for cell in self.cells.iter_mut().filter(|c| c.is_wall()) {
            cell.tile = Tile::Floor;
        }
    }

    /// Number of wall cells.
    pub fn wall_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_wall()).count()
    }

    /// Cells of row `row`, or an empty slice if out of range.
    pub fn row(&self, row: i32) -> &[Cell] {
        if row < 0 || row >= self.rows() {
            return &[];
        }
        let cols = self.cols() as usize;
        let r = row as usize;
        &self.cells[r * cols..(r + 1) * cols]
    }

    /// Iterate over all cells in row-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self> {
        let lines: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let Some(first) = lines.first() else {
            return Err(GridError::EmptyGrid);
        };
        let cols = first.chars().count();

        let mut start = None;
        let mut end = None;
        let mut walls = Vec::with_capacity(lines.len() * cols);
        for (r, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != cols {
                return Err(GridError::Ragged {
                    row: r,
                    expected: cols,
                    found,
                });
            }
            for (c, glyph) in line.chars().enumerate() {
                let pos = Point::new(r as i32, c as i32);
                let tile =
                    Tile::from_glyph(glyph).ok_or(GridError::UnknownGlyph { glyph, pos })?;
                match tile {
                    Tile::Start if start.is_some() => return Err(GridError::DuplicateStart(pos)),
                    Tile::End if end.is_some() => return Err(GridError::DuplicateEnd(pos)),
                    Tile::Start => start = Some(pos),
                    Tile::End => end = Some(pos),
                    _ => {}
                }
                walls.push(tile == Tile::Wall);
            }
        }

        let start = start.ok_or(GridError::MissingStart)?;
        let end = end.ok_or(GridError::MissingEnd)?;
        let bounds = Range::sized(lines.len() as i32, cols as i32);
        Grid::with_walls(bounds.rows(), bounds.cols(), start, end, |p| {
            bounds.index(p).is_some_and(|i| walls[i])
        })
    }
}

impl TryFrom<String> for Grid {
    type Error = GridError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Grid> for String {
    fn from(g: Grid) -> Self {
        g.to_string()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows() {
            for cell in self.row(r) {
                write!(f, "{}", cell.tile().glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
