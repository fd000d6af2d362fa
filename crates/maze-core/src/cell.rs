//! The [`Cell`] type: one position of the maze grid.

use crate::geom::Point;

/// What occupies a cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    #[default]
    Floor,
    Wall,
    Start,
    End,
}

impl Tile {
    /// ASCII glyph used by the text format.
    #[inline]
    pub const fn glyph(self) -> char {
        match self {
            Tile::Floor => '.',
            Tile::Wall => '#',
            Tile::Start => 'S',
            Tile::End => 'E',
        }
    }

    /// Parse an ASCII glyph.
    #[inline]
    pub const fn from_glyph(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Tile::Floor),
            '#' => Some(Tile::Wall),
            'S' => Some(Tile::Start),
            'E' => Some(Tile::End),
            _ => None,
        }
    }
}

/// A grid cell. Position and start/end flags are fixed for the lifetime of
/// the grid; only the wall flag is edited.
///
/// Search bookkeeping (costs, visited marks, predecessors) is never stored
/// here; searches keep it in their own scratch arrays.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub(crate) pos: Point,
    pub(crate) tile: Tile,
}

impl Cell {
    #[inline]
    pub(crate) const fn new(pos: Point, tile: Tile) -> Self {
        Self { pos, tile }
    }

    #[inline]
    pub const fn pos(&self) -> Point {
        self.pos
    }

    #[inline]
    pub const fn row(&self) -> i32 {
        self.pos.row
    }

    #[inline]
    pub const fn col(&self) -> i32 {
        self.pos.col
    }

    #[inline]
    pub const fn tile(&self) -> Tile {
        self.tile
    }

    #[inline]
    pub fn is_start(&self) -> bool {
        self.tile == Tile::Start
    }

    #[inline]
    pub fn is_end(&self) -> bool {
        self.tile == Tile::End
    }

    #[inline]
    pub fn is_wall(&self) -> bool {
        self.tile == Tile::Wall
    }

    /// Whether a search may step onto this cell.
    #[inline]
    pub fn is_passable(&self) -> bool {
        !self.is_wall()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyphs_round_trip() {
        for t in [Tile::Floor, Tile::Wall, Tile::Start, Tile::End] {
            assert_eq!(Tile::from_glyph(t.glyph()), Some(t));
        }
        assert_eq!(Tile::from_glyph('x'), None);
    }

    #[test]
    fn flags_follow_tile() {
        let c = Cell::new(Point::new(2, 3), Tile::Start);
        assert_eq!((c.row(), c.col()), (2, 3));
        assert!(c.is_start());
        assert!(!c.is_end());
        assert!(c.is_passable());

        let w = Cell::new(Point::new(0, 0), Tile::Wall);
        assert!(w.is_wall());
        assert!(!w.is_passable());
    }
}
