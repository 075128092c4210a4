//! Kalaha GUI
//!
//! Play Kalaha against the AI or another player.
//!
//! Environment:
//! - `RUST_LOG`: log filter (default `info`)
//! - `KALAHA_SEED`: fixed seed for the AI's tie-breaks
//! - `KALAHA_DIFFICULTY`: starting difficulty (`easy`, `medium`, `hard`)

use kalaha::ui::{AppSettings, KalahaApp};
use kalaha::Difficulty;

fn main() -> Result<(), eframe::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = AppSettings {
        seed: std::env::var("KALAHA_SEED").ok().and_then(|s| {
            let seed = s.trim().parse().ok();
            if seed.is_none() {
                log::warn!("ignoring KALAHA_SEED={s:?}: not an unsigned integer");
            }
            seed
        }),
        difficulty: std::env::var("KALAHA_DIFFICULTY")
            .map(|name| Difficulty::from_name(&name))
            .unwrap_or_default(),
    };
    log::info!(
        "starting Kalaha ({} difficulty, seed {:?})",
        settings.difficulty,
        settings.seed
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 640.0])
            .with_min_inner_size([820.0, 520.0])
            .with_title("Kalaha"),
        ..Default::default()
    };

    eframe::run_native(
        "Kalaha",
        options,
        Box::new(move |cc| Ok(Box::new(KalahaApp::new(cc, settings)))),
    )
}
