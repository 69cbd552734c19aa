mod app;
mod theme;

use app::VidgrabApp;
use vidgrab_core::{config, logging};

fn main() -> eframe::Result<()> {
    logging::init();

    let cfg = match config::load_or_init() {
        Ok(cfg) => cfg,
        Err(err) => {
            tracing::warn!("config unavailable ({err:#}); using defaults");
            config::VidgrabConfig::default()
        }
    };
    tracing::debug!("loaded config: {:?}", cfg);
    tracing::info!("vidgrab starting...");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(app::WINDOW_TITLE)
            .with_inner_size(app::WINDOW_SIZE)
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(
        "vidgrab",
        options,
        Box::new(|cc| {
            theme::apply_theme(&cc.egui_ctx);
            Ok(Box::new(VidgrabApp::new(cfg)))
        }),
    )
}
