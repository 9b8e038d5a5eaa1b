use egui::Color32;

pub const BACKGROUND: Color32 = Color32::WHITE;
pub const GRID: Color32 = Color32::BLACK;
pub const CROSS: Color32 = Color32::from_rgb(220, 50, 50);
pub const NOUGHT: Color32 = Color32::from_rgb(50, 50, 220);
pub const WINNING_LINE: Color32 = Color32::from_rgba_premultiplied(40, 160, 40, 160);
pub const STATUS_BACKGROUND: Color32 = Color32::LIGHT_GRAY;
pub const STATUS_TEXT: Color32 = Color32::BLACK;
pub const STATUS_ALERT: Color32 = Color32::RED;
