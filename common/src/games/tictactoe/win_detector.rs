use super::board::Board;
use super::types::{BOARD_SIZE, CellContent, Player, Position, WinningLine};

const LAST: usize = BOARD_SIZE - 1;

/// Rows, then columns, then the main diagonal, then the anti-diagonal.
const LINES: [(Position, (isize, isize)); 2 * BOARD_SIZE + 2] = [
    (Position { row: 0, col: 0 }, (0, 1)),
    (Position { row: 1, col: 0 }, (0, 1)),
    (Position { row: 2, col: 0 }, (0, 1)),
    (Position { row: 0, col: 0 }, (1, 0)),
    (Position { row: 0, col: 1 }, (1, 0)),
    (Position { row: 0, col: 2 }, (1, 0)),
    (Position { row: 0, col: 0 }, (1, 1)),
    (Position { row: 0, col: LAST }, (1, -1)),
];

pub fn find_winning_line(board: &Board, player: Player) -> Option<WinningLine> {
    let mark = CellContent::from(player);

    LINES.iter().find_map(|&(start, (d_row, d_col))| {
        let step = |i: usize| {
            Position::new(
                start.row.wrapping_add_signed(d_row * i as isize),
                start.col.wrapping_add_signed(d_col * i as isize),
            )
        };

        let complete = (0..BOARD_SIZE).all(|i| {
            let pos = step(i);
            board.get(pos.row, pos.col) == mark
        });

        complete.then(|| WinningLine::new(player, start, step(LAST)))
    })
}
