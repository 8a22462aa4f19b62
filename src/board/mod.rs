//! Board representation for Gomoku

pub mod board;
pub mod trial;


// Re-exports
pub use board::Board;
pub use trial::TrialStone;

/// Default board size (15x15)
pub const DEFAULT_BOARD_SIZE: usize = 15;

/// Stones in a row needed to win
pub const WIN_LENGTH: usize = 5;

/// Stone colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Black,
    White,
}

impl Side {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Side {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Side::Black => "Black",
            Side::White => "White",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Content of a single intersection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Side),
}

impl Cell {
    /// Side owning this cell, if any
    #[inline]
    pub fn side(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(side) => Some(side),
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// Position on the board; `x` is the column, `y` the row.
///
/// A move is a `Pos` naming an empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub x: usize,
    pub y: usize,
}

impl Pos {
    #[inline]
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Step `k` cells along `(dx, dy)`, or `None` if that leaves a board of `size`.
    #[inline]
    pub fn offset(self, dx: i32, dy: i32, k: i32, size: usize) -> Option<Pos> {
        let nx = self.x as i32 + dx * k;
        let ny = self.y as i32 + dy * k;
        if nx >= 0 && ny >= 0 && (nx as usize) < size && (ny as usize) < size {
            Some(Pos::new(nx as usize, ny as usize))
        } else {
            None
        }
    }

    /// Chebyshev distance, 1 for the 8 neighbours
    pub fn distance(self, other: Pos) -> usize {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Row-major ordering, the order in which candidate moves are generated.
impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
