// Replay a recorded gesture script against a canvas and save the final frame.
//
// usage: bezier-canvas-session <script.json> [output.png] [config.json]

use bezier_canvas::modules::session::load_script;
use bezier_canvas::{BezierCanvas, CanvasConfig};
use log::{error, info};
use std::env;
use std::process;
use std::time::Instant;

const CANVAS_WIDTH_UNITS: u32 = 6;
const CANVAS_HEIGHT_UNITS: u32 = 6;
const DEFAULT_OUTPUT: &str = "session.png";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(script_path) = args.first() else {
        error!("missing gesture script");
        eprintln!("usage: bezier-canvas-session <script.json> [output.png] [config.json]");
        process::exit(2);
    };
    let output_path = args.get(1).map(String::as_str).unwrap_or(DEFAULT_OUTPUT);
    let config = match args.get(2) {
        Some(path) => CanvasConfig::from_json_file(path)?,
        None => CanvasConfig::default(),
    };

    let start_time = Instant::now();
    let gestures = load_script(script_path)?;
    info!("loaded {} gestures from {}", gestures.len(), script_path);

    let mut canvas = BezierCanvas::with_config(CANVAS_WIDTH_UNITS, CANVAS_HEIGHT_UNITS, config)?;
    canvas.show(gestures.into_iter())?;
    canvas.save_to_file(output_path)?;

    info!(
        "{} anchors, closed: {}, saved to {} in {:?}",
        canvas.anchors().len(),
        canvas.is_closed(),
        output_path,
        start_time.elapsed()
    );
    Ok(())
}
