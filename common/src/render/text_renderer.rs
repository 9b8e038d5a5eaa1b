use super::Renderer;
use crate::games::tictactoe::{BOARD_SIZE, Player, StatusTone};

/// Plain-text rendering, one character per cell.
#[derive(Debug, Clone)]
pub struct TextRenderer {
    cells: [[char; BOARD_SIZE]; BOARD_SIZE],
    status: String,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextRenderer {
    pub fn new() -> Self {
        Self {
            cells: [[' '; BOARD_SIZE]; BOARD_SIZE],
            status: String::new(),
        }
    }

    pub fn output(&self) -> String {
        let separator = format!("\n{}\n", ["-"; BOARD_SIZE].join("+"));
        let rows: Vec<String> = self
            .cells
            .iter()
            .map(|row| row.iter().map(char::to_string).collect::<Vec<_>>().join("|"))
            .collect();

        format!("{}\n{}\n", rows.join(separator.as_str()), self.status)
    }
}

impl Renderer for TextRenderer {
    fn draw_grid(&mut self) {
        self.cells = [[' '; BOARD_SIZE]; BOARD_SIZE];
    }

    fn draw_mark(&mut self, row: usize, col: usize, player: Player) {
        self.cells[row][col] = player.symbol();
    }

    fn draw_status(&mut self, message: &str, tone: StatusTone) {
        self.status = match tone {
            StatusTone::Normal => message.to_string(),
            StatusTone::Alert => format!("! {}", message),
        };
    }
}
