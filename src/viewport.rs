/// Mapping between the logical canvas and terminal cells.
///
/// Row 0 is the HUD and the last row is the controls hint; the canvas is
/// stretched over the rows in between and over every column.

use crate::entities::{Rect, SCREEN_HEIGHT, SCREEN_WIDTH};

/// First terminal row of the play area.
pub const PLAY_TOP: u16 = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
}

/// A block of cells, end-exclusive on both axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellSpan {
    pub col0: u16,
    pub row0: u16,
    pub col1: u16,
    pub row1: u16,
}

impl Viewport {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self { cols, rows }
    }

    fn play_cols(&self) -> u16 {
        self.cols.max(1)
    }

    /// Rows available to the canvas (never zero, even on a tiny terminal).
    pub fn play_rows(&self) -> u16 {
        self.rows.saturating_sub(2).max(1)
    }

    fn col_of(&self, x: f32) -> f32 {
        x * self.play_cols() as f32 / SCREEN_WIDTH
    }

    fn row_of(&self, y: f32) -> f32 {
        y * self.play_rows() as f32 / SCREEN_HEIGHT
    }

    /// Logical centre of a terminal cell, or `None` outside the play area.
    pub fn to_logical(&self, col: u16, row: u16) -> Option<(f32, f32)> {
        if col >= self.play_cols() || row < PLAY_TOP || row >= PLAY_TOP + self.play_rows() {
            return None;
        }
        let x = (col as f32 + 0.5) * SCREEN_WIDTH / self.play_cols() as f32;
        let y = ((row - PLAY_TOP) as f32 + 0.5) * SCREEN_HEIGHT / self.play_rows() as f32;
        Some((x, y))
    }

    /// Cell containing a logical point.  Not clipped, so points off the
    /// canvas give cells off the play area.
    pub fn to_cell(&self, x: f32, y: f32) -> (i32, i32) {
        let col = self.col_of(x).floor() as i32;
        let row = self.row_of(y).floor() as i32 + PLAY_TOP as i32;
        (col, row)
    }

    /// Cells whose centre lies inside `rect`, clipped to the play area.
    ///
    /// These are exactly the cells a click on which lands on `rect`.
    pub fn span(&self, rect: &Rect) -> Option<CellSpan> {
        let top = PLAY_TOP as f32;
        let bottom = (PLAY_TOP + self.play_rows()) as f32;

        let col0 = (self.col_of(rect.x) - 0.5).ceil().max(0.0);
        let col1 = (self.col_of(rect.x + rect.w) - 0.5)
            .ceil()
            .min(self.play_cols() as f32);
        let row0 = (self.row_of(rect.y) - 0.5).ceil() + top;
        let row1 = (self.row_of(rect.y + rect.h) - 0.5).ceil() + top;
        let (row0, row1) = (row0.max(top), row1.min(bottom));

        if col0 >= col1 || row0 >= row1 {
            return None;
        }
        Some(CellSpan {
            col0: col0 as u16,
            row0: row0 as u16,
            col1: col1 as u16,
            row1: row1 as u16,
        })
    }
}
