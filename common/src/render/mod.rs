mod geometry;
mod text_renderer;

pub use geometry::BoardGeometry;
pub use text_renderer::TextRenderer;

use crate::games::tictactoe::{
    CellContent, Player, StatusTone, TicTacToeGame, WinningLine, status_message, status_tone,
};

/// Drawing capability. Implementations only ever see read-only match data.
pub trait Renderer {
    fn draw_grid(&mut self);

    fn draw_mark(&mut self, row: usize, col: usize, player: Player);

    fn draw_winning_line(&mut self, _line: &WinningLine) {}

    fn draw_status(&mut self, message: &str, tone: StatusTone);
}

pub fn render_match(game: &TicTacToeGame, renderer: &mut impl Renderer) {
    renderer.draw_grid();

    for (row, col, content) in game.board().cells() {
        match content {
            CellContent::Cross => renderer.draw_mark(row, col, Player::Cross),
            CellContent::Nought => renderer.draw_mark(row, col, Player::Nought),
            CellContent::Empty => {}
        }
    }

    if let Some(line) = game.winning_line() {
        renderer.draw_winning_line(&line);
    }

    let phase = game.current_phase();
    renderer.draw_status(status_message(phase, game.current_mover()), status_tone(phase));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Position;

    #[derive(Default)]
    struct RecordingRenderer {
        grids: usize,
        marks: Vec<(usize, usize, Player)>,
        lines: Vec<WinningLine>,
        status: Option<(String, StatusTone)>,
    }

    impl Renderer for RecordingRenderer {
        fn draw_grid(&mut self) {
            self.grids += 1;
        }

        fn draw_mark(&mut self, row: usize, col: usize, player: Player) {
            self.marks.push((row, col, player));
        }

        fn draw_winning_line(&mut self, line: &WinningLine) {
            self.lines.push(*line);
        }

        fn draw_status(&mut self, message: &str, tone: StatusTone) {
            self.status = Some((message.to_string(), tone));
        }
    }

    #[test]
    fn test_render_empty_game() {
        let game = TicTacToeGame::new();
        let mut renderer = RecordingRenderer::default();

        render_match(&game, &mut renderer);

        assert_eq!(renderer.grids, 1);
        assert!(renderer.marks.is_empty());
        assert!(renderer.lines.is_empty());
        assert_eq!(renderer.status, Some(("X's Turn".to_string(), StatusTone::Normal)));
    }

    #[test]
    fn test_render_marks_in_row_major_order() {
        let mut game = TicTacToeGame::new();
        game.attempt_move(2, 2);
        game.attempt_move(0, 1);
        let mut renderer = RecordingRenderer::default();

        render_match(&game, &mut renderer);

        assert_eq!(renderer.marks, vec![(0, 1, Player::Nought), (2, 2, Player::Cross)]);
        assert_eq!(renderer.status, Some(("X's Turn".to_string(), StatusTone::Normal)));
    }

    #[test]
    fn test_render_won_game_draws_line_and_alert() {
        let mut game = TicTacToeGame::new();
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            game.attempt_move(row, col);
        }
        let mut renderer = RecordingRenderer::default();

        render_match(&game, &mut renderer);

        assert_eq!(
            renderer.lines,
            vec![WinningLine::new(Player::Cross, Position::new(0, 0), Position::new(0, 2))]
        );
        assert_eq!(
            renderer.status,
            Some(("'X' Won! Click to play again.".to_string(), StatusTone::Alert))
        );
    }
}
