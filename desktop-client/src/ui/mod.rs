mod egui_renderer;

pub use egui_renderer::EguiRenderer;
