mod board;
mod game_state;
mod status;
mod types;
mod win_detector;

pub use board::Board;
pub use game_state::TicTacToeGame;
pub use status::{StatusTone, status_message, status_tone};
pub use types::{BOARD_SIZE, CellContent, GamePhase, MoveOutcome, Player, Position, WinningLine};
pub use win_detector::find_winning_line;
