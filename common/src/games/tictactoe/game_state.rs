use crate::log;
use super::board::Board;
use super::types::{BOARD_SIZE, CellContent, GamePhase, MoveOutcome, Player, WinningLine};
use super::win_detector::find_winning_line;

/// Match state: board, phase and mover, always updated together.
#[derive(Debug, Clone)]
pub struct TicTacToeGame {
    board: Board,
    phase: GamePhase,
    mover: Player,
}

impl Default for TicTacToeGame {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGame {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            phase: GamePhase::Playing,
            mover: Player::Cross,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_phase(&self) -> GamePhase {
        self.phase
    }

    /// Only meaningful while the phase is `Playing`.
    pub fn current_mover(&self) -> Player {
        self.mover
    }

    pub fn reset(&mut self) {
        self.board.reset_all();
        self.phase = GamePhase::Playing;
        self.mover = Player::Cross;
    }

    /// Any call after the game ended restarts it, whatever the coordinates.
    /// Out-of-range or occupied cells are ignored while playing.
    pub fn attempt_move(&mut self, row: usize, col: usize) -> MoveOutcome {
        if self.phase.is_over() {
            log!("Game over ({:?}), starting a new one", self.phase);
            self.reset();
            return MoveOutcome::Reset;
        }

        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return MoveOutcome::Ignored;
        }

        if self.board.get(row, col) != CellContent::Empty {
            return MoveOutcome::Ignored;
        }

        let mover = self.mover;
        self.board.set(row, col, mover.into());
        self.update_phase(mover, row, col);

        match self.phase {
            GamePhase::Playing => self.mover = mover.opponent(),
            GamePhase::Draw | GamePhase::CrossWon | GamePhase::NoughtWon => {
                log!("{} played ({}, {}), game ended: {:?}", mover.symbol(), row, col, self.phase);
            }
        }

        MoveOutcome::Placed
    }

    fn update_phase(&mut self, mover: Player, row: usize, col: usize) {
        if self.board.has_won(mover, row, col) {
            self.phase = GamePhase::won_by(mover);
        } else if self.board.is_draw() {
            self.phase = GamePhase::Draw;
        }
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        match self.phase {
            GamePhase::CrossWon => find_winning_line(&self.board, Player::Cross),
            GamePhase::NoughtWon => find_winning_line(&self.board, Player::Nought),
            GamePhase::Playing | GamePhase::Draw => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Position;

    fn play(game: &mut TicTacToeGame, moves: &[(usize, usize)]) {
        for &(row, col) in moves {
            assert_eq!(game.attempt_move(row, col), MoveOutcome::Placed);
        }
    }

    fn assert_fresh(game: &TicTacToeGame) {
        assert_eq!(game.current_phase(), GamePhase::Playing);
        assert_eq!(game.current_mover(), Player::Cross);
        assert!(game.board().cells().all(|(_, _, c)| c == CellContent::Empty));
    }

    #[test]
    fn test_new_game_starts_with_cross() {
        let game = TicTacToeGame::new();
        assert_fresh(&game);
    }

    #[test]
    fn test_move_places_mover_symbol_and_flips() {
        let mut game = TicTacToeGame::new();

        assert_eq!(game.attempt_move(1, 1), MoveOutcome::Placed);
        assert_eq!(game.board().get(1, 1), CellContent::Cross);
        assert_eq!(game.current_mover(), Player::Nought);

        assert_eq!(game.attempt_move(0, 0), MoveOutcome::Placed);
        assert_eq!(game.board().get(0, 0), CellContent::Nought);
        assert_eq!(game.current_mover(), Player::Cross);
    }

    #[test]
    fn test_mover_alternates_strictly() {
        let mut game = TicTacToeGame::new();
        let moves = [(0, 0), (1, 1), (2, 2), (0, 1), (2, 1), (2, 0)];
        let mut expected = Player::Cross;

        for (row, col) in moves {
            assert_eq!(game.current_mover(), expected);
            game.attempt_move(row, col);
            assert_eq!(game.current_phase(), GamePhase::Playing);
            expected = expected.opponent();
        }
    }

    #[test]
    fn test_occupied_cell_is_ignored() {
        let mut game = TicTacToeGame::new();
        play(&mut game, &[(0, 0)]);
        let before = game.clone();

        assert_eq!(game.attempt_move(0, 0), MoveOutcome::Ignored);
        assert_eq!(game.board(), before.board());
        assert_eq!(game.current_phase(), before.current_phase());
        assert_eq!(game.current_mover(), before.current_mover());
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let mut game = TicTacToeGame::new();

        assert_eq!(game.attempt_move(3, 0), MoveOutcome::Ignored);
        assert_eq!(game.attempt_move(0, 3), MoveOutcome::Ignored);
        assert_eq!(game.attempt_move(usize::MAX, usize::MAX), MoveOutcome::Ignored);
        assert_fresh(&game);
    }

    #[test]
    fn test_cross_wins_top_row_in_any_order() {
        let mut game = TicTacToeGame::new();
        play(&mut game, &[(0, 2), (1, 0), (0, 0), (2, 2)]);
        assert_eq!(game.current_phase(), GamePhase::Playing);

        play(&mut game, &[(0, 1)]);
        assert_eq!(game.current_phase(), GamePhase::CrossWon);
    }

    #[test]
    fn test_mover_does_not_flip_after_winning_move() {
        let mut game = TicTacToeGame::new();
        play(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);

        assert_eq!(game.current_phase(), GamePhase::CrossWon);
        assert_eq!(game.current_mover(), Player::Cross);
    }

    #[test]
    fn test_nought_wins_anti_diagonal() {
        let mut game = TicTacToeGame::new();
        play(&mut game, &[(0, 0), (0, 2), (0, 1), (1, 1), (2, 2), (2, 0)]);

        assert_eq!(game.current_phase(), GamePhase::NoughtWon);
    }

    #[test]
    fn test_bent_line_does_not_win() {
        let mut game = TicTacToeGame::new();
        play(&mut game, &[(0, 1), (0, 0), (1, 0), (1, 1), (2, 2), (2, 0)]);

        assert_eq!(game.current_phase(), GamePhase::Playing);
    }

    #[test]
    fn test_draw_on_ninth_move_not_earlier() {
        // X O X
        // X O O
        // O X X
        let mut game = TicTacToeGame::new();
        let moves = [
            (0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2),
        ];

        for (i, &(row, col)) in moves.iter().enumerate() {
            assert_eq!(game.current_phase(), GamePhase::Playing, "ended early at move {}", i);
            game.attempt_move(row, col);
        }

        assert_eq!(game.current_phase(), GamePhase::Draw);
        assert_eq!(game.winning_line(), None);
    }

    #[test]
    fn test_board_filling_win_is_a_win_not_a_draw() {
        // X O X
        // O X O
        // O X X  <- the ninth move completes the main diagonal
        let mut game = TicTacToeGame::new();
        play(
            &mut game,
            &[(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2), (2, 1), (2, 0), (2, 2)],
        );

        assert!(game.board().is_draw());
        assert_eq!(game.current_phase(), GamePhase::CrossWon);
    }

    #[test]
    fn test_any_click_after_game_over_resets() {
        let mut game = TicTacToeGame::new();
        play(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        assert_eq!(game.current_phase(), GamePhase::CrossWon);

        assert_eq!(game.attempt_move(42, 7), MoveOutcome::Reset);
        assert_fresh(&game);
    }

    #[test]
    fn test_click_on_occupied_cell_after_draw_resets() {
        let mut game = TicTacToeGame::new();
        play(
            &mut game,
            &[(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)],
        );
        assert_eq!(game.current_phase(), GamePhase::Draw);

        assert_eq!(game.attempt_move(0, 0), MoveOutcome::Reset);
        assert_fresh(&game);
    }

    #[test]
    fn test_winning_line_reported_after_win() {
        let mut game = TicTacToeGame::new();
        assert_eq!(game.winning_line(), None);

        play(&mut game, &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 0)]);

        let line = game.winning_line().unwrap();
        assert_eq!(line.player, Player::Cross);
        assert_eq!(line.start, Position::new(0, 0));
        assert_eq!(line.end, Position::new(2, 0));
    }

    #[test]
    fn test_explicit_reset_mid_game() {
        let mut game = TicTacToeGame::new();
        play(&mut game, &[(0, 0), (2, 2)]);

        game.reset();
        assert_fresh(&game);
    }
}
