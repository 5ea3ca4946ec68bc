//! Active-piece controller
//!
//! The falling piece is represented directly on the board as `Active` cells,
//! bounded by a 4x4 frame whose top-left anchor is tracked here. Moves and
//! rotations are checked against walls and settled cells before any cell is
//! touched; an illegal move or rotation is a silent no-op, never an error.

use crate::core::shapes::{rotated, Mask4};
use crate::core::Board;
use crate::types::{Cell, RotateDir};

/// Top-left anchor of the active piece's 4x4 orientation frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveFrame {
    pub x: i8,
    pub y: i8,
}

/// Wall-kick candidates, tried in order; first fit wins.
pub const WALL_KICKS: [(i8, i8); 4] = [(0, 0), (1, 0), (-1, 0), (0, -1)];

/// Board plus the anchor of the piece currently falling on it.
#[derive(Debug, Clone)]
pub struct Playfield {
    board: Board,
    frame: Option<ActiveFrame>,
}

impl Playfield {
    pub fn new(width: u8, height: u8) -> Self {
        Self {
            board: Board::new(width, height),
            frame: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn frame(&self) -> Option<ActiveFrame> {
        self.frame
    }

    /// Clear the grid and drop the frame (new game).
    pub fn reset(&mut self) {
        self.board.clear();
        self.frame = None;
    }

    /// Place a new piece with its frame anchored at `(col, 0)`.
    ///
    /// Fails without touching the board if any mask cell would land on a
    /// settled cell - the loss condition, checked strictly before placement.
    pub fn spawn(&mut self, mask: &Mask4, col: i8) -> bool {
        for (r, row) in mask.iter().enumerate() {
            for (c, &set) in row.iter().enumerate() {
                if set && !self.board.is_open(col + c as i8, r as i8) {
                    return false;
                }
            }
        }
        for (r, row) in mask.iter().enumerate() {
            for (c, &set) in row.iter().enumerate() {
                if set {
                    self.board.set(col + c as i8, r as i8, Cell::Active);
                }
            }
        }
        self.frame = Some(ActiveFrame { x: col, y: 0 });
        true
    }

    /// True iff every active cell can shift by `dx` columns without leaving
    /// the board or landing on a settled cell.
    pub fn can_move_horizontal(&self, dx: i8) -> bool {
        let w = self.board.width() as i8;
        for y in 0..self.board.height() as i8 {
            for x in 0..w {
                if self.board.get(x, y) != Some(Cell::Active) {
                    continue;
                }
                let nx = x + dx;
                if nx < 0 || nx >= w {
                    return false;
                }
                if self.board.is_settled(nx, y) {
                    return false;
                }
            }
        }
        true
    }

    /// Shift the piece horizontally. Cells are processed rightmost-first when
    /// moving right and leftmost-first when moving left, so a moved cell never
    /// clobbers one still waiting to move in the same row.
    pub fn move_horizontal(&mut self, dx: i8) {
        if dx == 0 || !self.can_move_horizontal(dx) {
            return;
        }
        let w = self.board.width() as i8;
        for y in 0..self.board.height() as i8 {
            for i in 0..w {
                let x = if dx > 0 { w - 1 - i } else { i };
                if self.board.get(x, y) == Some(Cell::Active) {
                    self.board.set(x + dx, y, Cell::Active);
                    self.board.set(x, y, Cell::Empty);
                }
            }
        }
        if let Some(frame) = &mut self.frame {
            frame.x += dx;
        }
    }

    /// True iff every active cell has a non-settled, in-bounds cell below it.
    pub fn can_fall(&self) -> bool {
        let h = self.board.height() as i8;
        for y in (0..h).rev() {
            for x in 0..self.board.width() as i8 {
                if self.board.get(x, y) != Some(Cell::Active) {
                    continue;
                }
                if y + 1 >= h || self.board.is_settled(x, y + 1) {
                    return false;
                }
            }
        }
        true
    }

    /// Shift the piece down one row, bottom rows first.
    pub fn fall(&mut self) {
        for y in (0..self.board.height() as i8).rev() {
            for x in 0..self.board.width() as i8 {
                if self.board.get(x, y) == Some(Cell::Active) {
                    self.board.set(x, y + 1, Cell::Active);
                    self.board.set(x, y, Cell::Empty);
                }
            }
        }
        if let Some(frame) = &mut self.frame {
            frame.y += 1;
        }
    }

    /// Rotate the piece a quarter turn, trying each wall-kick anchor in order.
    /// If no candidate fits, orientation and anchor are left unchanged.
    pub fn rotate(&mut self, dir: RotateDir) {
        let Some(frame) = self.frame else {
            return;
        };
        let candidate = rotated(&self.extract_frame(frame), dir);
        for (dx, dy) in WALL_KICKS {
            let nx = frame.x + dx;
            let ny = frame.y + dy;
            if self.can_place(&candidate, nx, ny) {
                self.board.erase_active();
                self.write_frame(&candidate, nx, ny);
                self.frame = Some(ActiveFrame { x: nx, y: ny });
                return;
            }
        }
    }

    /// Settle the piece, collapse full rows, and destroy the frame.
    /// Returns the number of rows cleared.
    pub fn lock(&mut self) -> usize {
        self.board.settle_active();
        self.frame = None;
        self.board.clear_full_lines_and_collapse().len()
    }

    /// Copy the piece's local 4x4 mask out of the board at its anchor.
    fn extract_frame(&self, frame: ActiveFrame) -> Mask4 {
        let mut out = [[false; 4]; 4];
        for (r, row) in out.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell =
                    self.board.get(frame.x + c as i8, frame.y + r as i8) == Some(Cell::Active);
            }
        }
        out
    }

    fn can_place(&self, mask: &Mask4, fx: i8, fy: i8) -> bool {
        for (r, row) in mask.iter().enumerate() {
            for (c, &set) in row.iter().enumerate() {
                if set && !self.board.is_open(fx + c as i8, fy + r as i8) {
                    return false;
                }
            }
        }
        true
    }

    fn write_frame(&mut self, mask: &Mask4, fx: i8, fy: i8) {
        for (r, row) in mask.iter().enumerate() {
            for (c, &set) in row.iter().enumerate() {
                if set {
                    self.board.set(fx + c as i8, fy + r as i8, Cell::Active);
                }
            }
        }
    }
}
