/// Wire3D Terminal Viewer - Wireframe Cube
///
/// Draws a perspective-projected wireframe cube and lets you fly the camera
/// around it.
/// Controls:
///   - W/S, A/D, Q/E: Move the camera along Z, X and Y
///   - Left/Right, Up/Down, N/M: Rotate the cube about Y, Z and X
///   - R: Reset
///   - ESC / Ctrl-C: Quit
///
/// Environment:
///   - WIRE3D_FOCAL_DISTANCE, WIRE3D_PROJECTION, WIRE3D_ROTATION: viewer settings
///   - WIRE3D_LOG: write the log (filtered by RUST_LOG) to this file

use log::info;
use std::fs::File;
use wire3d_core::ViewerConfig;
use wire3d_terminal::{TerminalApp, ViewerError};

fn init_logging() {
    if let Ok(path) = std::env::var("WIRE3D_LOG") {
        match File::create(&path) {
            Ok(file) => {
                env_logger::Builder::from_default_env()
                    .target(env_logger::Target::Pipe(Box::new(file)))
                    .init();
            }
            Err(e) => {
                eprintln!("Failed to create log file {}: {}", path, e);
                env_logger::Builder::from_default_env().init();
            }
        }
    } else {
        env_logger::Builder::from_default_env().init();
    }
}

fn main() -> Result<(), ViewerError> {
    init_logging();

    let config = ViewerConfig::from_env()?;
    info!(
        "starting: focal distance {}, projection {}, rotation {}",
        config.focal_distance, config.projection, config.rotation
    );

    let mut app = TerminalApp::new(config)?;
    app.run()?;

    info!("stopped after {} frames", app.frames());
    Ok(())
}
