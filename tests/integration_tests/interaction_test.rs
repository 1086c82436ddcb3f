use bezier_canvas::modules::interaction::Phase;
use bezier_canvas::modules::render::Palette;
use bezier_canvas::modules::session::{load_script, parse_script, Gesture};
use bezier_canvas::{pt, BezierCanvas, CanvasConfig};

#[test]
fn test_click_on_empty_area_adds_anchor() {
    let mut canvas = BezierCanvas::new(6, 6).unwrap();

    canvas.press(5.0, 5.0).unwrap();
    canvas.release(5.0, 5.0).unwrap();

    assert_eq!(canvas.anchors(), &[pt!(5, 5)]);
    assert_eq!(canvas.phase(), Phase::Idle);
}

#[test]
fn test_drag_moves_anchor_to_release_position() {
    let mut canvas = BezierCanvas::new(6, 6).unwrap();
    canvas.add_anchor(100.0, 100.0);
    canvas.add_anchor(300.0, 300.0);
    canvas.add_anchor(500.0, 100.0);

    canvas.press(300.0, 300.0).unwrap();
    canvas.move_to(304.0, 296.0).unwrap();
    canvas.move_to(350.0, 420.0).unwrap();
    canvas.release(350.0, 420.0).unwrap();

    assert_eq!(canvas.anchors().len(), 3);
    assert_eq!(canvas.anchors()[1], pt!(350, 420));
}

#[test]
fn test_close_drag_and_reopen_path() {
    let mut canvas = BezierCanvas::new(6, 6).unwrap();
    let script = parse_script(
        r#"[
            { "kind": "click", "x": 100, "y": 100 },
            { "kind": "click", "x": 300, "y": 500 },
            { "kind": "click", "x": 500, "y": 100 },
            { "kind": "click", "x": 101, "y": 99 }
        ]"#,
    )
    .unwrap();
    for gesture in script {
        canvas.apply_gesture(gesture).unwrap();
    }

    assert!(canvas.is_closed());
    assert_eq!(canvas.anchors().len(), 4);
    assert_eq!(canvas.anchors()[0], canvas.anchors()[3]);

    // dragging the start of a closed path moves both ends
    canvas
        .apply_gesture(Gesture::Drag { from: pt!(100, 100), to: pt!(150, 200), steps: 20 })
        .unwrap();
    assert_eq!(canvas.anchors()[0], pt!(150, 200));
    assert_eq!(canvas.anchors()[3], pt!(150, 200));

    // clicking the start again reopens, dropping both ends
    canvas.apply_gesture(Gesture::Click { x: 150.0, y: 200.0 }).unwrap();
    assert!(!canvas.is_closed());
    assert_eq!(canvas.anchors(), &[pt!(300, 500), pt!(500, 100)]);
}

#[test]
fn test_legacy_hit_test_configuration() {
    let config = CanvasConfig::from_json_str(r#"{ "hit_test": "legacy", "pick_radius": 50 }"#).unwrap();
    let mut canvas = BezierCanvas::with_config(6, 6, config).unwrap();
    canvas.add_anchor(100.0, 500.0);
    canvas.add_anchor(300.0, 100.0);

    // picked 30 units above the second anchor: the legacy y check still matches
    canvas.apply_gesture(Gesture::Click { x: 300.0, y: 130.0 }).unwrap();
    assert_eq!(canvas.anchors(), &[pt!(100, 500)]);
}

#[test]
fn test_box_hit_test_ignores_distant_pick() {
    let config = CanvasConfig::from_json_str(r#"{ "pick_radius": 50 }"#).unwrap();
    let mut canvas = BezierCanvas::with_config(6, 6, config).unwrap();
    canvas.add_anchor(100.0, 500.0);
    canvas.add_anchor(300.0, 100.0);

    canvas.apply_gesture(Gesture::Click { x: 300.0, y: 130.0 }).unwrap();
    assert_eq!(canvas.anchors().len(), 2);
}

#[test]
fn test_replay_triangle_session() {
    let script = load_script(concat!(env!("CARGO_MANIFEST_DIR"), "/demos/triangle_session.json")).unwrap();
    assert_eq!(script.len(), 5);

    let mut canvas = BezierCanvas::new(6, 6).unwrap();
    canvas.show(script.into_iter()).unwrap();

    assert_eq!(canvas.palette(), Palette::interactive());
    assert!(canvas.is_closed());
    assert_eq!(
        canvas.anchors(),
        &[pt!(100, 100), pt!(320, 560), pt!(520, 120), pt!(100, 100)]
    );
    assert_eq!(canvas.phase(), Phase::Idle);
}
