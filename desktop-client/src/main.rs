mod app;
mod colors;
mod config;
mod ui;

use clap::Parser;
use common::config::Validate;
use common::render::BoardGeometry;
use common::{log, logger};
use eframe::egui;

use app::TicTacToeApp;
use config::get_config_manager;

const DEFAULT_LOG_PREFIX: &str = "Client";

#[derive(Parser)]
#[command(name = "tic_tac_toe")]
struct Args {
    /// Cell side in pixels; overrides the config file.
    #[arg(long)]
    cell_size: Option<f32>,

    #[arg(long)]
    use_log_prefix: bool,

    /// Write the effective config back to the config file.
    #[arg(long)]
    save_config: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager = get_config_manager();
    let mut config = config_manager.get_config()?;
    if let Some(cell_size) = args.cell_size {
        config.cell_size = cell_size;
    }
    config.validate()?;

    let prefix = match (&config.log_prefix, args.use_log_prefix) {
        (Some(prefix), _) => Some(prefix.clone()),
        (None, true) => Some(DEFAULT_LOG_PREFIX.to_string()),
        (None, false) => None,
    };
    logger::init_logger(prefix);

    if args.save_config {
        config_manager.set_config(&config)?;
        log!("Saved config");
    }

    let geometry = BoardGeometry::new(config.cell_size);
    let (width, height) = geometry.window_size();
    log!("Starting {} with {}px cells", config.window_title, config.cell_size);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width, height])
            .with_resizable(false)
            .with_title(config.window_title.clone()),
        ..Default::default()
    };

    eframe::run_native(
        &config.window_title,
        options,
        Box::new(move |_cc| Ok(Box::new(TicTacToeApp::new(geometry)))),
    )?;

    Ok(())
}
