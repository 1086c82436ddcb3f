// Draw the four-anchor demo curve on a 6 x 6 canvas and save it as a PNG.

use bezier_canvas::modules::render::ViewFlags;
use bezier_canvas::BezierCanvas;
use log::info;

const OUTPUT_PATH: &str = "new.png";
const ANCHORS: [(f64, f64); 4] = [(0.0, 0.0), (340.0, 20.0), (460.0, 46.0), (600.0, 600.0)];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut canvas = BezierCanvas::new(6, 6)?;
    for (x, y) in ANCHORS {
        canvas.add_anchor(x, y);
    }

    canvas.update_view(ViewFlags::curve_only())?;
    canvas.save_to_file(OUTPUT_PATH)?;

    info!(
        "wrote {} curve samples to {}",
        canvas.curve_points().len(),
        OUTPUT_PATH
    );
    Ok(())
}
