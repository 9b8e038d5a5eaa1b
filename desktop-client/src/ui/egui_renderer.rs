use common::games::tictactoe::{BOARD_SIZE, Player, StatusTone, WinningLine};
use common::render::{BoardGeometry, Renderer};
use eframe::egui;

use crate::colors;

const GRID_LINE_WIDTH: f32 = 2.0;
const WINNING_LINE_WIDTH: f32 = 6.0;
const STATUS_FONT_SIZE: f32 = 14.0;
const STATUS_TEXT_INSET: f32 = 5.0;

/// Paints the board onto an egui canvas whose top-left corner is `origin`.
pub struct EguiRenderer {
    painter: egui::Painter,
    origin: egui::Pos2,
    geometry: BoardGeometry,
}

impl EguiRenderer {
    pub fn new(painter: egui::Painter, origin: egui::Pos2, geometry: BoardGeometry) -> Self {
        Self {
            painter,
            origin,
            geometry,
        }
    }

    fn to_screen(&self, (x, y): (f32, f32)) -> egui::Pos2 {
        self.origin + egui::vec2(x, y)
    }

    fn cell_rect(&self, row: usize, col: usize) -> egui::Rect {
        egui::Rect::from_min_size(
            self.to_screen(self.geometry.cell_origin(row, col)),
            egui::Vec2::splat(self.geometry.cell_size),
        )
    }

    fn draw_cross(&self, rect: egui::Rect) {
        let padding = self.geometry.cell_padding();
        let stroke = egui::Stroke::new(self.geometry.stroke_width(), colors::CROSS);
        let inner = rect.shrink(padding);

        self.painter
            .line_segment([inner.left_top(), inner.right_bottom()], stroke);
        self.painter
            .line_segment([inner.right_top(), inner.left_bottom()], stroke);
    }

    fn draw_nought(&self, rect: egui::Rect) {
        let radius = self.geometry.symbol_size() / 2.0;
        let stroke = egui::Stroke::new(self.geometry.stroke_width(), colors::NOUGHT);

        self.painter.circle_stroke(rect.center(), radius, stroke);
    }
}

impl Renderer for EguiRenderer {
    fn draw_grid(&mut self) {
        let size = self.geometry.canvas_size();
        let canvas = egui::Rect::from_min_size(self.origin, egui::Vec2::splat(size));
        let stroke = egui::Stroke::new(GRID_LINE_WIDTH, colors::GRID);

        self.painter.rect_filled(canvas, 0.0, colors::BACKGROUND);

        for i in 0..=BOARD_SIZE {
            let offset = i as f32 * self.geometry.cell_size;
            self.painter.line_segment(
                [self.to_screen((offset, 0.0)), self.to_screen((offset, size))],
                stroke,
            );
            self.painter.line_segment(
                [self.to_screen((0.0, offset)), self.to_screen((size, offset))],
                stroke,
            );
        }
    }

    fn draw_mark(&mut self, row: usize, col: usize, player: Player) {
        let rect = self.cell_rect(row, col);
        match player {
            Player::Cross => self.draw_cross(rect),
            Player::Nought => self.draw_nought(rect),
        }
    }

    fn draw_winning_line(&mut self, line: &WinningLine) {
        let start = self.to_screen(self.geometry.cell_center(line.start.row, line.start.col));
        let end = self.to_screen(self.geometry.cell_center(line.end.row, line.end.col));

        self.painter.line_segment(
            [start, end],
            egui::Stroke::new(WINNING_LINE_WIDTH, colors::WINNING_LINE),
        );
    }

    fn draw_status(&mut self, message: &str, tone: StatusTone) {
        let canvas_size = self.geometry.canvas_size();
        let bar = egui::Rect::from_min_size(
            self.to_screen((0.0, canvas_size)),
            egui::vec2(canvas_size, self.geometry.status_bar_height()),
        );
        let color = match tone {
            StatusTone::Normal => colors::STATUS_TEXT,
            StatusTone::Alert => colors::STATUS_ALERT,
        };

        self.painter.rect_filled(bar, 0.0, colors::STATUS_BACKGROUND);
        self.painter.text(
            bar.left_center() + egui::vec2(STATUS_TEXT_INSET, 0.0),
            egui::Align2::LEFT_CENTER,
            message,
            egui::FontId::monospace(STATUS_FONT_SIZE),
            color,
        );
    }
}
