use bezier_canvas::modules::render::{ExportFormat, ViewFlags};
use bezier_canvas::{BezierCanvas, CanvasError};

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

fn demo_canvas() -> BezierCanvas {
    let mut canvas = BezierCanvas::new(2, 3).unwrap();
    canvas.add_anchor(10.0, 10.0);
    canvas.add_anchor(100.0, 290.0);
    canvas.add_anchor(190.0, 10.0);
    canvas.update_view(ViewFlags::default()).unwrap();
    canvas
}

#[test]
fn test_save_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("curve.png");

    demo_canvas().save_to_file(&path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(bytes[..8], PNG_SIGNATURE);

    let decoded = image::open(&path).unwrap().to_rgb8();
    assert_eq!(decoded.dimensions(), (200, 300));
}

#[test]
fn test_export_bmp() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("curve.bmp");

    demo_canvas().export(&path, ExportFormat::Bmp).unwrap();
    assert_eq!(&std::fs::read(&path).unwrap()[..2], b"BM");
}

#[test]
fn test_png_bytes_match_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("curve.png");
    let canvas = demo_canvas();

    canvas.save_to_file(&path).unwrap();
    let from_file = image::open(&path).unwrap().to_rgb8();
    let from_bytes = image::load_from_memory(&canvas.to_png_bytes().unwrap())
        .unwrap()
        .to_rgb8();
    assert_eq!(from_file, from_bytes);
}

#[test]
fn test_binary_matrix_of_empty_canvas_is_all_light() {
    let canvas = BezierCanvas::new(1, 2).unwrap();
    let matrix = canvas.to_binary_matrix().unwrap();

    assert_eq!(matrix.shape(), (200, 100));
    assert!(matrix.iter().all(|light| *light));
}

#[test]
fn test_export_failure_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no_such_dir").join("curve.png");

    assert!(matches!(
        demo_canvas().save_to_file(&path),
        Err(CanvasError::Image(_))
    ));
}
