#![cfg(feature = "svg-io")]

use geartrain::{GearTrain, Viewport};

#[test]
fn scene_renders_to_a_standalone_document() {
    let viewport = Viewport::new(414.0, 896.0);
    let train = GearTrain::planetary(&viewport).unwrap();
    let text = train.scene().to_svg_document(&viewport).to_string();

    assert!(text.starts_with("<svg"));
    assert!(text.contains("viewBox"));
    // ten path elements: a stroke and a fill layer per gear
    assert_eq!(text.matches("<path").count(), 10);
    assert_eq!(text.matches("fill-rule=\"evenodd\"").count(), 5);
    assert_eq!(text.matches("stroke=\"#000000\"").count(), 5);
    // the three blues of the train
    assert!(text.contains("#c6dbef"));
    assert!(text.contains("#6baed6"));
    assert!(text.contains("#9ecae1"));
    // carrier frame lands on the viewport center, unrotated at tick zero
    assert!(text.contains("translate(207 448) rotate(0)"));
    assert!(text.contains("d=\"M"));
}

#[test]
fn frame_rotation_reaches_the_transform_in_degrees() {
    let viewport = Viewport::new(414.0, 896.0);
    let mut train = GearTrain::planetary(&viewport).unwrap();
    // drive the frame a known distance: 100 ticks at speed 0.003 under the
    // default orbit ratio accumulates 0.6 radians
    for _ in 0..100 {
        train.tick();
    }
    let text = train.scene().to_svg_document(&viewport).to_string();
    let degrees = train.scene().frame.rotation_degrees();
    assert!(text.contains(&format!("rotate({degrees})")));
}

#[test]
fn save_svg_writes_a_file() {
    let viewport = Viewport::new(414.0, 896.0);
    let train = GearTrain::planetary(&viewport).unwrap();
    let path = std::env::temp_dir().join("geartrain_save_svg_test.svg");
    train.scene().save_svg(&path, &viewport).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("<svg"));
    assert!(written.contains("</svg>"));
    let _ = std::fs::remove_file(&path);
}
