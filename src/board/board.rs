//! Square board of cells

use super::{Cell, Pos, Side, DEFAULT_BOARD_SIZE, WIN_LENGTH};

/// Game board, stored row-major.
///
/// Coordinates handed to the accessors are assumed to be in range; callers
/// validate user input first (see [`Board::contains`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty `size` x `size` board.
    pub fn new(size: usize) -> Self {
        assert!(size >= WIN_LENGTH, "board must be at least {WIN_LENGTH}x{WIN_LENGTH}");
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.size && y < self.size, "({x}, {y}) off a {0}x{0} board", self.size);
        y * self.size + x
    }

    /// Check whether signed coordinates fall on the board
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.size && (y as usize) < self.size
    }

    /// Get cell at position
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Cell {
        self.cells[self.index(x, y)]
    }

    #[inline]
    pub fn at(&self, pos: Pos) -> Cell {
        self.get(pos.x, pos.y)
    }

    #[inline]
    pub fn is_empty_at(&self, x: usize, y: usize) -> bool {
        self.get(x, y).is_empty()
    }

    /// Place a stone. The cell must be empty.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, side: Side) {
        let idx = self.index(x, y);
        debug_assert!(self.cells[idx].is_empty(), "({x}, {y}) is already occupied");
        self.cells[idx] = Cell::Occupied(side);
    }

    /// Remove a stone. Only search backtracking uses this.
    #[inline]
    pub fn clear(&mut self, x: usize, y: usize) {
        let idx = self.index(x, y);
        self.cells[idx] = Cell::Empty;
    }

    /// Empty every cell
    pub fn reset(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Cells of row `y`, left to right
    #[inline]
    pub fn row(&self, y: usize) -> &[Cell] {
        let start = y * self.size;
        &self.cells[start..start + self.size]
    }

    /// Occupied cells in row-major order
    pub fn occupied(&self) -> impl Iterator<Item = (Pos, Side)> + '_ {
        self.cells.iter().enumerate().filter_map(move |(idx, cell)| {
            cell.side()
                .map(|side| (Pos::new(idx % self.size, idx / self.size), side))
        })
    }

    /// Total stones on board
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Check if board is empty
    pub fn is_board_empty(&self) -> bool {
        self.cells.iter().all(|c| c.is_empty())
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_SIZE)
    }
}
