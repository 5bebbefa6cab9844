mod support;

use geartrain::{
    errors::ValidationError,
    float_types::{Real, TAU},
    interaction::Gesture,
    kinematics::FrameMode,
    scene::Paint,
    train::{GearTrain, Layout, TrainConfig, VIEW_MARGIN, Viewport},
};
use std::time::Duration;

use crate::support::{approx_eq, radius_of};

fn phone() -> Viewport {
    Viewport::new(414.0, 896.0)
}

fn train() -> GearTrain {
    GearTrain::planetary(&phone()).unwrap()
}

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

#[test]
fn layout_measures_the_working_square() {
    let layout = Layout::from_viewport(&phone()).unwrap();
    assert!(approx_eq(layout.scale, 414.0 - 2.0 * VIEW_MARGIN, 1e-12));
    assert!(approx_eq(layout.center.x, 207.0, 1e-12));
    assert!(approx_eq(layout.center.y, 448.0, 1e-12));
}

#[test]
fn degenerate_viewports_are_rejected() {
    // exactly two margins wide leaves a zero working square
    for viewport in [
        Viewport::new(2.0 * VIEW_MARGIN, 896.0),
        Viewport::new(10.0, 896.0),
        Viewport::new(414.0, 0.0),
        Viewport::new(Real::NAN, 896.0),
        Viewport::new(414.0, Real::NAN),
    ] {
        assert!(matches!(
            Layout::from_viewport(&viewport),
            Err(ValidationError::DegenerateViewport { .. })
        ));
    }
}

#[test]
fn planetary_assembles_the_classic_five() {
    let train = train();
    let gears = train.gears();
    assert_eq!(gears.len(), 5);

    let annulus = &gears[0];
    assert!(annulus.is_ring());
    assert_eq!(annulus.teeth(), 80);
    assert!(approx_eq(annulus.signed_radius(), -0.5, 1e-12));
    assert_eq!(annulus.fill().to_hex(), "#c6dbef");
    assert!(approx_eq(radius_of(annulus.origin()), 0.0, 1e-12));

    let sun = &gears[1];
    assert!(!sun.is_ring());
    assert_eq!(sun.teeth(), 16);
    assert!(approx_eq(sun.signed_radius(), 0.1, 1e-12));
    assert_eq!(sun.fill().to_hex(), "#6baed6");

    for planet in &gears[2..] {
        assert!(!planet.is_ring());
        assert_eq!(planet.teeth(), 32);
        assert!(approx_eq(planet.signed_radius(), -0.2, 1e-12));
        assert_eq!(planet.fill().to_hex(), "#9ecae1");
    }
    // first planet hangs straight up from the carrier center
    assert!(approx_eq(gears[2].origin().x, 0.0, 1e-12));
    assert!(approx_eq(gears[2].origin().y, -0.3, 1e-12));
}

/// The gear table is not arbitrary: planets orbit at the sum of sun and
/// planet pitch radii, the annulus encloses orbit plus planet, and the
/// three planets sit a third of a turn apart.
#[test]
fn planetary_geometry_meshes() {
    let train = train();
    let gears = train.gears();
    let sun_radius = gears[1].signed_radius().abs();
    let planet_radius = gears[2].signed_radius().abs();
    let annulus_radius = gears[0].signed_radius().abs();

    for planet in &gears[2..] {
        let orbit = radius_of(planet.origin());
        assert!(approx_eq(orbit, sun_radius + planet_radius, 1e-9));
        assert!(approx_eq(annulus_radius, orbit + planet_radius, 1e-9));
    }
    for (a, b) in [(2, 3), (2, 4), (3, 4)] {
        let dot = gears[a].origin().coords.dot(&gears[b].origin().coords);
        // |a||b|cos(120°) = 0.3 * 0.3 * -0.5
        assert!(approx_eq(dot, -0.045, 1e-9));
    }
}

#[test]
fn scene_paints_each_gear_stroke_then_fill() {
    let train = train();
    let scene = train.scene();
    assert_eq!(scene.len(), 10);
    assert_eq!(scene.strokes().count(), 5);
    assert_eq!(scene.fills().count(), 5);

    for (index, pair) in scene.commands.chunks(2).enumerate() {
        let gear = &train.gears()[index];
        assert!(matches!(pair[0].paint, Paint::Stroke(color) if color.to_hex() == "#000000"));
        assert!(matches!(pair[1].paint, Paint::Fill(color) if color == gear.fill()));
        // both layers of one gear share placement and geometry
        assert_eq!(pair[0].transform, pair[1].transform);
        assert!(std::ptr::eq(pair[0].path, pair[1].path));
    }
}

#[test]
fn outlines_are_memoized_for_the_train_lifetime() {
    let train = train();
    let first = train.outlines().as_ptr();
    assert_eq!(first, train.outlines().as_ptr());

    let scene_a = train.scene();
    let scene_b = train.scene();
    assert!(std::ptr::eq(scene_a.commands[0].path, scene_b.commands[0].path));
    assert!(std::ptr::eq(scene_a.commands[0].path, &train.outlines()[0]));
}

#[test]
fn frame_transform_centers_the_carrier() {
    let mut train = train();
    for _ in 0..50 {
        train.tick();
    }
    let scene = train.scene();
    assert!(approx_eq(scene.frame.translation.x, 207.0, 1e-9));
    assert!(approx_eq(scene.frame.translation.y, 448.0, 1e-9));
    assert!(approx_eq(
        scene.frame.rotation,
        train.state().frame_angle.rem_euclid(TAU),
        1e-9
    ));
}

#[test]
fn ticks_and_taps_walk_the_frame_modes() {
    let mut train = train();
    assert_eq!(train.frame_mode(), Some(FrameMode::Orbit));

    for _ in 0..100 {
        train.tick();
    }
    assert!(approx_eq(train.state().drive_angle, 0.3, 1e-9));
    // orbit ratio 0.5 doubles the drive rate
    assert!(approx_eq(train.state().frame_angle, 0.6, 1e-9));

    train.touch_start(ms(1_000));
    assert_eq!(train.touch_end(ms(1_100)), Some(Gesture::Tap));
    assert_eq!(train.frame_mode(), Some(FrameMode::Locked));

    let frozen = train.state().frame_angle;
    for _ in 0..50 {
        train.tick();
    }
    assert_eq!(train.state().frame_angle, frozen);
    assert!(approx_eq(train.state().drive_angle, 0.45, 1e-9));

    train.touch_start(ms(2_000));
    assert_eq!(train.touch_end(ms(2_100)), Some(Gesture::Tap));
    assert_eq!(train.frame_mode(), Some(FrameMode::Reverse));
    for _ in 0..10 {
        train.tick();
    }
    // ratio -0.1 runs the frame backwards at ten times the drive rate
    assert!(approx_eq(train.state().frame_angle, frozen - 0.3, 1e-9));

    train.touch_start(ms(3_000));
    assert_eq!(train.touch_end(ms(3_700)), Some(Gesture::Hold));
    assert_eq!(train.frame_mode(), Some(FrameMode::Reverse));

    train.touch_start(ms(4_000));
    assert_eq!(train.touch_end(ms(4_100)), Some(Gesture::Tap));
    assert_eq!(train.frame_mode(), Some(FrameMode::Orbit));
}

#[test]
fn config_overrides_reach_every_subsystem() {
    let config = TrainConfig {
        tooth_depth: 0.01,
        bore_radius: 0.03,
        angular_speed: 0.005,
        tap_threshold: ms(200),
    };
    let mut train = GearTrain::with_config(&phone(), &config).unwrap();
    assert!(approx_eq(train.profile().tooth_depth(), 0.01, 1e-12));
    assert!(approx_eq(train.profile().bore_radius(), 0.03, 1e-12));

    train.tick();
    assert!(approx_eq(train.state().drive_angle, 0.005, 1e-12));

    // 250ms sits over the shortened threshold
    train.touch_start(ms(0));
    assert_eq!(train.touch_end(ms(250)), Some(Gesture::Hold));
    train.touch_start(ms(1_000));
    assert_eq!(train.touch_end(ms(1_150)), Some(Gesture::Tap));
    assert_eq!(train.frame_mode(), Some(FrameMode::Locked));
}

#[test]
fn scrubbing_the_state_moves_the_scene() {
    let mut train = train();
    train.state_mut().drive_angle = 1.0;
    let scene = train.scene();
    // sun gear pair sits at commands[2], commands[3]; radius +0.1 spins it
    // ten radians, normalized into one turn
    let spin: Real = 1.0 / 0.1;
    let expected = spin.rem_euclid(TAU);
    assert!(approx_eq(scene.commands[2].transform.rotation, expected, 1e-9));
    assert!(approx_eq(scene.commands[3].transform.rotation, expected, 1e-9));
}
