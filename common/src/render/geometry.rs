use crate::games::tictactoe::BOARD_SIZE;

pub const DEFAULT_CELL_SIZE: f32 = 100.0;
pub const STATUS_BAR_HEIGHT: f32 = 30.0;
pub const SYMBOL_STROKE_WIDTH: f32 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardGeometry {
    pub cell_size: f32,
}

impl Default for BoardGeometry {
    fn default() -> Self {
        Self::new(DEFAULT_CELL_SIZE)
    }
}

impl BoardGeometry {
    pub fn new(cell_size: f32) -> Self {
        Self { cell_size }
    }

    /// Side of the square board canvas, status bar excluded.
    pub fn canvas_size(&self) -> f32 {
        self.cell_size * BOARD_SIZE as f32
    }

    pub fn status_bar_height(&self) -> f32 {
        STATUS_BAR_HEIGHT
    }

    pub fn window_size(&self) -> (f32, f32) {
        (self.canvas_size(), self.canvas_size() + self.status_bar_height())
    }

    pub fn cell_padding(&self) -> f32 {
        self.cell_size / 6.0
    }

    pub fn symbol_size(&self) -> f32 {
        self.cell_size - self.cell_padding() * 2.0
    }

    pub fn stroke_width(&self) -> f32 {
        SYMBOL_STROKE_WIDTH
    }

    /// Pixel offset from the canvas origin to grid `(row, col)`.
    /// Float-to-int casts saturate, so negative offsets land on 0 and anything
    /// past the grid comes back out of range for the controller to ignore.
    pub fn cell_at(&self, x: f32, y: f32) -> (usize, usize) {
        let row = (y / self.cell_size) as usize;
        let col = (x / self.cell_size) as usize;
        (row, col)
    }

    /// Top-left corner of a cell as `(x, y)` from the canvas origin.
    pub fn cell_origin(&self, row: usize, col: usize) -> (f32, f32) {
        (col as f32 * self.cell_size, row as f32 * self.cell_size)
    }

    pub fn cell_center(&self, row: usize, col: usize) -> (f32, f32) {
        let (x, y) = self.cell_origin(row, col);
        let half = self.cell_size / 2.0;
        (x + half, y + half)
    }
}
