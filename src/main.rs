//! Cube Bounce entry point
//!
//! Usage: `cube-bounce [settings.json]` (defaults to `cube-bounce.json`).
//! Controls: W/A/S/D move the camera, Escape quits.

use std::path::PathBuf;
use std::process::ExitCode;

use cube_bounce::settings::{SETTINGS_FILE, Settings};

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Cube Bounce starting...");

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(SETTINGS_FILE));

    let result = Settings::load(&path).and_then(cube_bounce::app::run);
    match result {
        Ok(()) => {
            log::info!("Cube Bounce exited");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            eprintln!("cube-bounce: {e}");
            ExitCode::FAILURE
        }
    }
}
