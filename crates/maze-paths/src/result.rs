use maze_core::Point;

/// Outcome of one search.
///
/// `visited` is the exact order in which cells were finalised; callers use
/// it to animate the exploration. `path` runs from start to end inclusive,
/// or is `None` when the end cannot be reached. An unreachable end is an
/// ordinary outcome, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    pub visited: Vec<Point>,
    pub path: Option<Vec<Point>>,
}

impl SearchResult {
    /// Whether a path was found.
    #[inline]
    pub fn found(&self) -> bool {
        self.path.is_some()
    }

    /// Number of cells on the path, endpoints included.
    #[inline]
    pub fn path_len(&self) -> Option<usize> {
        self.path.as_ref().map(Vec::len)
    }

    /// Number of moves needed to walk the path.
    #[inline]
    pub fn steps(&self) -> Option<usize> {
        self.path_len().map(|n| n.saturating_sub(1))
    }

    /// Number of cells the search finalised.
    #[inline]
    pub fn explored(&self) -> usize {
        self.visited.len()
    }
}
