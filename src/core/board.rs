//! Board module - owns the full grid of cells
//!
//! The board is a W x H grid (sized at construction) stored as a flat
//! row-major array. Coordinates are (x, y) with x growing rightward and y
//! growing downward. The board is the single owner of cell state: the
//! active-piece controller and the lock step are its only mutators.

use arrayvec::ArrayVec;

use crate::types::Cell;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u8,
    height: u8,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board. Both dimensions must fit the 4x4 piece frame.
    pub fn new(width: u8, height: u8) -> Self {
        assert!(width >= 4 && height >= 4, "board must be at least 4x4");
        Self {
            width,
            height,
            cells: vec![Cell::Empty; width as usize * height as usize],
        }
    }

    #[inline]
    fn index(&self, x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= self.width as i8 || y < 0 || y >= self.height as i8 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Get cell at (x, y); `None` if out of bounds.
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at (x, y). Returns false if out of bounds.
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// In bounds and settled.
    pub fn is_settled(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Cell::Settled))
    }

    /// In bounds and not settled: a position the falling piece may occupy.
    pub fn is_open(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Cell::Empty | Cell::Active))
    }

    /// Reset every cell to `Empty`.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// True iff any cell belongs to a falling piece.
    pub fn has_active_piece(&self) -> bool {
        self.cells.iter().any(|c| c.is_active())
    }

    /// True iff every cell in row `y` is settled.
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.height as usize {
            return false;
        }
        let w = self.width as usize;
        self.cells[y * w..(y + 1) * w].iter().all(|c| c.is_settled())
    }

    /// Remove row `y`: shift every row above it down by one and clear row 0.
    /// Preserves stacking order.
    pub fn collapse_row(&mut self, y: usize) {
        if y >= self.height as usize {
            return;
        }
        let w = self.width as usize;
        for row in (1..=y).rev() {
            let src = (row - 1) * w;
            let dst = row * w;
            self.cells.copy_within(src..src + w, dst);
        }
        self.cells[..w].fill(Cell::Empty);
    }

    /// Scan rows bottom-to-top, collapsing each full row and re-examining the
    /// same index afterward (rows shifted down into it may be full as well).
    /// Returns the cleared row indices, bottom-up, as they were at collapse
    /// time. A locking piece spans at most four rows, hence the capacity.
    pub fn clear_full_lines_and_collapse(&mut self) -> ArrayVec<usize, 4> {
        let mut cleared = ArrayVec::new();
        let mut y = self.height as usize;
        while y > 0 {
            let row = y - 1;
            if self.is_row_full(row) {
                self.collapse_row(row);
                cleared.push(row);
                // stay on this index
            } else {
                y -= 1;
            }
        }
        cleared
    }

    /// Convert every active cell to settled (lock support).
    pub fn settle_active(&mut self) {
        for cell in &mut self.cells {
            if cell.is_active() {
                *cell = Cell::Settled;
            }
        }
    }

    /// Remove every active cell (rotation rewrite support).
    pub fn erase_active(&mut self) {
        for cell in &mut self.cells {
            if cell.is_active() {
                *cell = Cell::Empty;
            }
        }
    }

    /// Number of settled cells on the whole board.
    pub fn settled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_settled()).count()
    }

    /// Flat row-major view of the grid (render sink).
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}
