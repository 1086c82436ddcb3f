use bezier_canvas::modules::render::ViewFlags;
use bezier_canvas::{anchors, pt, BezierCanvas};

#[test]
fn test_complete_workflow() {
    // The four-anchor demo curve on a 6 x 6 canvas
    let mut canvas = BezierCanvas::new(6, 6).unwrap();
    canvas.add_anchor(0.0, 0.0);
    canvas.add_anchor(340.0, 20.0);
    canvas.add_anchor(460.0, 46.0);
    canvas.add_anchor(600.0, 600.0);

    let curve = canvas.curve_points();
    assert_eq!(curve.len(), 50);
    assert_eq!(curve[0], pt!(0, 0));
    assert_eq!(curve[49], pt!(600, 600));

    canvas.update_view(ViewFlags::curve_only()).unwrap();

    // The curve leaves a dark trace on the white background
    let matrix = canvas.to_binary_matrix().unwrap();
    assert_eq!(matrix.shape(), (600, 600));
    let dark = matrix.iter().filter(|light| !**light).count();
    assert!(dark > 300, "only {} dark pixels", dark);
}

#[test]
fn test_model_matches_canvas() {
    let model = anchors!([(0, 0), (340, 20), (460, 46), (600, 600)]);

    let mut canvas = BezierCanvas::new(6, 6).unwrap();
    for anchor in model.anchors() {
        canvas.add_anchor(anchor.x, anchor.y);
    }

    assert_eq!(canvas.curve_points(), model.evaluate());
}
