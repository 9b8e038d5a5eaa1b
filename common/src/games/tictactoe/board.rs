use super::types::{BOARD_SIZE, CellContent, Player};

/// Fixed 3x3 grid. Indices outside `0..BOARD_SIZE` panic; the controller validates before calling in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Board {
    cells: [[CellContent; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, row: usize, col: usize) -> CellContent {
        self.cells[row][col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: CellContent) {
        self.cells[row][col] = value;
    }

    pub fn reset_all(&mut self) {
        for row in self.cells.iter_mut() {
            row.fill(CellContent::Empty);
        }
    }

    /// Row-major iteration over `(row, col, content)`.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, CellContent)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, line)| {
            line.iter()
                .enumerate()
                .map(move |(col, &content)| (row, col, content))
        })
    }

    /// Whether `player`, having just taken `(row, col)`, now owns a full line.
    /// Both diagonals are always scanned, whether or not the cell lies on one.
    pub fn has_won(&self, player: Player, row: usize, col: usize) -> bool {
        self.check_row(player, row) || self.check_column(player, col) || self.check_diagonals(player)
    }

    pub fn check_row(&self, player: Player, row: usize) -> bool {
        let mark = CellContent::from(player);
        (0..BOARD_SIZE).all(|col| self.cells[row][col] == mark)
    }

    pub fn check_column(&self, player: Player, col: usize) -> bool {
        let mark = CellContent::from(player);
        (0..BOARD_SIZE).all(|row| self.cells[row][col] == mark)
    }

    pub fn check_diagonals(&self, player: Player) -> bool {
        let mark = CellContent::from(player);
        let main = (0..BOARD_SIZE).all(|i| self.cells[i][i] == mark);
        let anti = (0..BOARD_SIZE).all(|i| self.cells[i][BOARD_SIZE - 1 - i] == mark);
        main || anti
    }

    /// Full board. Only meaningful once `has_won` came back false for the last move.
    pub fn is_draw(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != CellContent::Empty))
    }
}
