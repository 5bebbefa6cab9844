//! The planetary train itself: layout, configuration, per-tick scenes.
//!
//! [`GearTrain`] is the facade that wires the rest of the crate together.
//! Construction validates a gear table against a viewport, builds the tooth
//! profile, and hands back a value that owns the kinematic state, the touch
//! tracker, and a lazily computed cache of gear outlines. Hosts then call
//! [`GearTrain::tick`] once per animation frame, forward pointer events to
//! [`GearTrain::touch_start`] and [`GearTrain::touch_end`], and render
//! whatever [`GearTrain::scene`] returns.

use crate::errors::ValidationError;
use crate::float_types::{Real, TAU};
use crate::gear::{Color, GearSpec, ToothProfile};
use crate::interaction::{DEFAULT_TAP_THRESHOLD, Gesture, TouchTracker};
use crate::kinematics::{FrameMode, KinematicState};
use crate::path::ClosedPath;
use crate::scene::{DrawCommand, Paint, ScenePass};
use log::debug;
use nalgebra::Point2;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::sync::OnceLock;
use std::time::Duration;

/// Pixels of breathing room kept on each side of the square working area.
pub const VIEW_MARGIN: Real = 20.0;

/// Planet centers sit this far from the sun, in normalized layout units.
/// Equals the sun pitch radius plus the planet pitch radius, so the pair
/// meshes exactly; the annulus pitch radius is this plus the planet radius.
const PLANET_ORBIT: Real = 0.3;

// fills from the d3 "Blues" scheme, plus a black hairline
const ANNULUS_FILL: Color = Color::new(0xc6, 0xdb, 0xef);
const SUN_FILL: Color = Color::new(0x6b, 0xae, 0xd6);
const PLANET_FILL: Color = Color::new(0x9e, 0xca, 0xe1);
const STROKE_COLOR: Color = Color::BLACK;

/// Host drawing surface, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: Real,
    pub height: Real,
}

impl Viewport {
    pub const fn new(width: Real, height: Real) -> Self {
        Viewport { width, height }
    }
}

/// Where normalized coordinates land on the host surface.
///
/// `scale` multiplies every normalized length (the viewport width minus a
/// [`VIEW_MARGIN`] on each side); `center` is where the carrier frame's
/// origin goes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub center: Point2<Real>,
    pub scale: Real,
}

impl Layout {
    /// Derives the layout for a viewport.
    ///
    /// Fails with [`ValidationError::DegenerateViewport`] when the margins
    /// leave no working area, or when either extent is non-finite or
    /// non-positive.
    pub fn from_viewport(viewport: &Viewport) -> Result<Self, ValidationError> {
        let scale = viewport.width - 2.0 * VIEW_MARGIN;
        let usable = scale.is_finite() && scale > 0.0;
        if !usable || !(viewport.height.is_finite() && viewport.height > 0.0) {
            return Err(ValidationError::DegenerateViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        Ok(Layout {
            center: Point2::new(viewport.width * 0.5, viewport.height * 0.5),
            scale,
        })
    }
}

/// The empirical constants of the illustration, all overridable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrainConfig {
    /// Half tooth height in normalized units; teeth span pitch ± this.
    pub tooth_depth: Real,
    /// Axle hole radius of external gears, normalized units.
    pub bore_radius: Real,
    /// Drive phase advance per tick, radians.
    pub angular_speed: Real,
    /// Press duration below which a release counts as a tap.
    pub tap_threshold: Duration,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            tooth_depth: 0.008,
            bore_radius: 0.02,
            angular_speed: 0.003,
            tap_threshold: DEFAULT_TAP_THRESHOLD,
        }
    }
}

/// A validated, animatable gear assembly.
///
/// Owns everything mutable. Outlines are computed once, on first use, and
/// shared by reference with every [`ScenePass`] after that; ticking and
/// tapping never touch the geometry.
#[derive(Clone, Debug)]
pub struct GearTrain {
    gears: Vec<GearSpec>,
    profile: ToothProfile,
    layout: Layout,
    angular_speed: Real,
    state: KinematicState,
    touch: TouchTracker,
    outlines: OnceLock<Vec<ClosedPath>>,
}

impl GearTrain {
    /// The classic five-gear planetary assembly, sized for `viewport`.
    ///
    /// An 80-tooth internal annulus, a 16-tooth sun, and three 32-tooth
    /// planets spaced a third of a turn apart on the carrier.
    pub fn planetary(viewport: &Viewport) -> Result<Self, ValidationError> {
        GearTrain::with_config(viewport, &TrainConfig::default())
    }

    /// [`GearTrain::planetary`] with the empirical constants overridden.
    pub fn with_config(viewport: &Viewport, config: &TrainConfig) -> Result<Self, ValidationError> {
        let layout = Layout::from_viewport(viewport)?;
        let profile = ToothProfile::new(config.tooth_depth, config.bore_radius, layout.scale)?;
        let (sin, cos) = (TAU / 3.0).sin_cos();
        let gears = vec![
            GearSpec::new(ANNULUS_FILL, 80, -0.5, Point2::origin(), true)?,
            GearSpec::new(SUN_FILL, 16, 0.1, Point2::origin(), false)?,
            GearSpec::new(PLANET_FILL, 32, -0.2, Point2::new(0.0, -PLANET_ORBIT), false)?,
            GearSpec::new(
                PLANET_FILL,
                32,
                -0.2,
                Point2::new(-PLANET_ORBIT * sin, -PLANET_ORBIT * cos),
                false,
            )?,
            GearSpec::new(
                PLANET_FILL,
                32,
                -0.2,
                Point2::new(PLANET_ORBIT * sin, -PLANET_ORBIT * cos),
                false,
            )?,
        ];
        debug!(
            "planetary train: {} gears over a {:.0}px working square",
            gears.len(),
            layout.scale
        );
        Ok(GearTrain {
            gears,
            profile,
            layout,
            angular_speed: config.angular_speed,
            state: KinematicState::new(),
            touch: TouchTracker::new(config.tap_threshold),
            outlines: OnceLock::new(),
        })
    }

    pub fn gears(&self) -> &[GearSpec] {
        &self.gears
    }

    pub const fn profile(&self) -> &ToothProfile {
        &self.profile
    }

    pub const fn layout(&self) -> &Layout {
        &self.layout
    }

    pub const fn state(&self) -> &KinematicState {
        &self.state
    }

    /// Mutable kinematic state, for hosts that drive it directly (scrubbing
    /// a timeline, restoring a session). Everyday animation wants
    /// [`GearTrain::tick`].
    pub fn state_mut(&mut self) -> &mut KinematicState {
        &mut self.state
    }

    /// The current frame mode, unless the ratio has been set off-cycle.
    pub fn frame_mode(&self) -> Option<FrameMode> {
        self.state.frame_mode()
    }

    /// Advances the animation one tick at the configured angular speed.
    pub fn tick(&mut self) {
        self.state.advance(self.angular_speed);
    }

    /// Forwards a pointer-down at timestamp `at`.
    pub fn touch_start(&mut self, at: Duration) {
        self.touch.touch_start(at);
    }

    /// Forwards a pointer-up at timestamp `at`; taps cycle the frame mode.
    pub fn touch_end(&mut self, at: Duration) -> Option<Gesture> {
        self.touch.touch_end(at, &mut self.state)
    }

    /// All gear outlines, in gear order. Computed on first call, memoized
    /// for the life of the train.
    #[cfg(not(feature = "parallel"))]
    pub fn outlines(&self) -> &[ClosedPath] {
        self.outlines.get_or_init(|| {
            self.gears
                .iter()
                .map(|gear| gear.outline(&self.profile))
                .collect()
        })
    }

    /// All gear outlines, in gear order. Computed on first call, memoized
    /// for the life of the train.
    #[cfg(feature = "parallel")]
    pub fn outlines(&self) -> &[ClosedPath] {
        self.outlines.get_or_init(|| {
            self.gears
                .par_iter()
                .map(|gear| gear.outline(&self.profile))
                .collect()
        })
    }

    /// Builds the draw list for the current state.
    ///
    /// Per gear, a black hairline stroke and then the fill on top of it,
    /// both referencing the same memoized outline; gears come out in train
    /// order under one shared carrier-frame placement.
    pub fn scene(&self) -> ScenePass<'_> {
        let frame = self.state.frame_transform(&self.layout);
        let outlines = self.outlines();
        let mut commands = Vec::with_capacity(outlines.len() * 2);
        for (gear, outline) in self.gears.iter().zip(outlines) {
            let transform = self.state.gear_transform(gear, &self.layout);
            commands.push(DrawCommand {
                path: outline,
                transform,
                paint: Paint::Stroke(STROKE_COLOR),
            });
            commands.push(DrawCommand {
                path: outline,
                transform,
                paint: Paint::Fill(gear.fill()),
            });
        }
        ScenePass { frame, commands }
    }
}
