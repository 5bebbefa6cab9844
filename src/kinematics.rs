//! Rotation state and the pure derivations that place every gear.
//!
//! Angles are radians everywhere inside the crate. Degrees exist only at the
//! final hand-off, in [`Transform2::rotation_degrees`], because SVG's
//! `rotate` operator wants them. One call to [`KinematicState::advance`]
//! moves the shared drive phase by the configured angular speed; each gear's
//! own rotation is then *derived* from that phase as
//! `drive_angle / signed_radius`, which keeps the surface speed
//! `|rotation * radius|` identical for every gear in the train and makes
//! opposite-signed radii counter-rotate. Nothing per-gear is ever stored, so
//! the gears cannot drift out of mesh no matter how long the animation runs.

use crate::float_types::{Real, TAU};
use crate::gear::GearSpec;
use crate::train::Layout;
use nalgebra::{Matrix3, Point2, Rotation2, Translation2, Vector2};

/// The three carrier-frame behaviors a tap cycles through.
///
/// Each mode names a frame ratio. The ratio divides the drive speed to give
/// the carrier frame's angular speed, so `Orbit` turns the whole assembly at
/// twice the drive rate, `Locked` pins it, and `Reverse` spins it the other
/// way at ten times the drive rate.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FrameMode {
    /// Frame ratio `0.5`: the assembly orbits with the planets.
    Orbit,
    /// Frame ratio `0.0`: the frame holds still.
    Locked,
    /// Frame ratio `-0.1`: the frame counter-rotates, fast.
    Reverse,
}

impl FrameMode {
    /// The frame ratio this mode stands for.
    pub const fn ratio(self) -> Real {
        match self {
            FrameMode::Orbit => 0.5,
            FrameMode::Locked => 0.0,
            FrameMode::Reverse => -0.1,
        }
    }

    /// The mode after this one in the tap cycle.
    pub const fn next(self) -> Self {
        match self {
            FrameMode::Orbit => FrameMode::Locked,
            FrameMode::Locked => FrameMode::Reverse,
            FrameMode::Reverse => FrameMode::Orbit,
        }
    }

    /// Recovers the mode from a stored ratio, if it is one of the three
    /// cycle values. Comparison is exact: these are the same constants
    /// [`FrameMode::ratio`] writes, not measured quantities.
    pub fn from_ratio(ratio: Real) -> Option<Self> {
        [FrameMode::Orbit, FrameMode::Locked, FrameMode::Reverse]
            .into_iter()
            .find(|mode| mode.ratio() == ratio)
    }
}

/// A rigid 2D placement: rotate about the local origin, then translate.
///
/// Matches a renderer that nests `rotate(..)` inside `translate(..)`, and
/// equals the homogeneous product `T * R`. The stored rotation is normalized
/// into `[0, τ)` at construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform2 {
    pub translation: Vector2<Real>,
    pub rotation: Real,
}

impl Transform2 {
    /// Builds a placement, normalizing `rotation` into `[0, τ)`.
    pub fn new(translation: Vector2<Real>, rotation: Real) -> Self {
        Transform2 {
            translation,
            rotation: rotation.rem_euclid(TAU),
        }
    }

    /// The identity placement.
    pub fn identity() -> Self {
        Transform2::new(Vector2::zeros(), 0.0)
    }

    /// Rotation in degrees. The single place radians leave this crate;
    /// everything internal stays in radians.
    pub fn rotation_degrees(&self) -> Real {
        self.rotation.to_degrees()
    }

    /// Applies the placement to a point: rotation first, then translation.
    pub fn apply(&self, point: Point2<Real>) -> Point2<Real> {
        let (sin, cos) = self.rotation.sin_cos();
        Point2::new(
            cos * point.x - sin * point.y + self.translation.x,
            sin * point.x + cos * point.y + self.translation.y,
        )
    }

    /// The same placement as a homogeneous matrix.
    pub fn to_homogeneous(&self) -> Matrix3<Real> {
        Translation2::from(self.translation).to_homogeneous()
            * Rotation2::new(self.rotation).to_homogeneous()
    }
}

/// Everything that rotates, in one owned value.
///
/// Callers own the state and pass it by reference into [`advance`] once per
/// tick and into the derivation methods whenever they render. The tap
/// controller writes exactly one field, `frame_ratio`; nothing else mutates
/// outside [`advance`]. Both angle fields accumulate without bound and are
/// normalized only when a [`Transform2`] is derived from them.
///
/// [`advance`]: KinematicState::advance
#[derive(Clone, Debug, PartialEq)]
pub struct KinematicState {
    /// Shared drive phase, radians.
    pub drive_angle: Real,
    /// Carrier-frame angle, radians.
    pub frame_angle: Real,
    /// Current frame ratio. Normally one of the [`FrameMode`] ratios, but
    /// any nonzero finite value animates the frame at `speed / ratio`.
    pub frame_ratio: Real,
}

impl Default for KinematicState {
    fn default() -> Self {
        Self::new()
    }
}

impl KinematicState {
    /// Initial state: zero angles, frame in [`FrameMode::Orbit`].
    pub const fn new() -> Self {
        KinematicState {
            drive_angle: 0.0,
            frame_angle: 0.0,
            frame_ratio: FrameMode::Orbit.ratio(),
        }
    }

    /// The [`FrameMode`] matching the current ratio, or `None` if the ratio
    /// has been set to a value outside the tap cycle.
    pub fn frame_mode(&self) -> Option<FrameMode> {
        FrameMode::from_ratio(self.frame_ratio)
    }

    /// Advances one animation tick.
    ///
    /// The drive phase always moves by `angular_speed`. The carrier frame
    /// moves by `angular_speed / frame_ratio`, except at ratio zero where it
    /// holds still rather than dividing.
    pub fn advance(&mut self, angular_speed: Real) {
        self.drive_angle += angular_speed;
        if self.frame_ratio != 0.0 {
            self.frame_angle += angular_speed / self.frame_ratio;
        }
    }

    /// One gear's accumulated rotation in radians.
    ///
    /// Derived, never stored: the drive phase divided by the gear's signed
    /// pitch radius. Construction rejects zero radii, so the division is
    /// total.
    pub fn gear_rotation(&self, spec: &GearSpec) -> Real {
        self.drive_angle / spec.signed_radius()
    }

    /// Placement of one gear in frame-local pixels: translate to the gear's
    /// origin scaled by the layout, then spin by [`Self::gear_rotation`].
    pub fn gear_transform(&self, spec: &GearSpec, layout: &Layout) -> Transform2 {
        Transform2::new(spec.origin().coords * layout.scale, self.gear_rotation(spec))
    }

    /// Placement of the whole carrier frame: translate to the viewport
    /// center, then spin by the accumulated frame angle.
    pub fn frame_transform(&self, layout: &Layout) -> Transform2 {
        Transform2::new(layout.center.coords, self.frame_angle)
    }
}
