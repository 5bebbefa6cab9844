//! Gear descriptors and the trapezoidal-tooth outline generator.
//!
//! A [`GearSpec`] is a tiny, validated description of one gear in the train:
//! tooth count, signed pitch radius, normalized origin, fill color, and
//! whether the gear is an internal ring (annulus). [`GearSpec::outline`]
//! turns it into a [`ClosedPath`] built from a simplified trapezoidal tooth
//! profile rather than a true involute; the outline is a pure function of
//! spec and profile, so [`GearTrain`](crate::train::GearTrain) generates it
//! once per gear and memoizes it for the session.

use crate::errors::ValidationError;
use crate::float_types::{FRAC_PI_2, PI, Real};
use crate::path::{ArcSweep, ClosedPath, PathCmd};
use nalgebra::Point2;

/// An RGB fill color, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    /// CSS/SVG hex form, e.g. `#6baed6`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Share of a half-tooth pitch spent on each slanted tooth flank.
///
/// An empirical constant inherited from the layout this crate reproduces;
/// override it per profile with [`ToothProfile::with_flank_fraction`].
pub const DEFAULT_FLANK_FRACTION: Real = 1.0 / 3.0;

/// The three global outline constants shared by every gear in a train, plus
/// the flank fraction.
///
/// `tooth_depth` and `bore_radius` are in the same normalized units as a
/// gear's pitch radius; `scale` maps those units onto the render surface and
/// is baked into every generated coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToothProfile {
    tooth_depth: Real,
    bore_radius: Real,
    scale: Real,
    flank_fraction: Real,
}

impl ToothProfile {
    /// Validate and build a profile. All three constants must be finite and
    /// strictly positive.
    pub fn new(
        tooth_depth: Real,
        bore_radius: Real,
        scale: Real,
    ) -> Result<Self, ValidationError> {
        for (name, value) in [
            ("tooth_depth", tooth_depth),
            ("bore_radius", bore_radius),
            ("scale", scale),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ValidationError::NonPositiveConstant { name, value });
            }
        }
        Ok(ToothProfile {
            tooth_depth,
            bore_radius,
            scale,
            flank_fraction: DEFAULT_FLANK_FRACTION,
        })
    }

    /// Replace the flank fraction. Must lie in `(0, 0.5]`; at exactly `0.5`
    /// the tip arc degenerates to a point and the tooth becomes triangular.
    pub fn with_flank_fraction(mut self, fraction: Real) -> Result<Self, ValidationError> {
        if !(fraction.is_finite() && fraction > 0.0 && fraction <= 0.5) {
            return Err(ValidationError::FlankFractionOutOfRange(fraction));
        }
        self.flank_fraction = fraction;
        Ok(self)
    }

    pub const fn tooth_depth(&self) -> Real {
        self.tooth_depth
    }

    pub const fn bore_radius(&self) -> Real {
        self.bore_radius
    }

    pub const fn scale(&self) -> Real {
        self.scale
    }

    pub const fn flank_fraction(&self) -> Real {
        self.flank_fraction
    }
}

/// The four radii a gear outline is built from, in normalized units
/// (multiply by the profile scale for surface coordinates).
///
/// For a ring gear `root > tip`: the teeth are cut on the inner circumference,
/// so the tooth tips point inward and the root circle lies outside them. `rim`
/// is the bore circle of a standard gear and the outer rim of a ring gear.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToothRadii {
    pub root: Real,
    pub pitch: Real,
    pub tip: Real,
    pub rim: Real,
}

/// One gear of the train: immutable once constructed, validated up front.
#[derive(Debug, Clone, PartialEq)]
pub struct GearSpec {
    fill: Color,
    teeth: usize,
    signed_radius: Real,
    origin: Point2<Real>,
    ring: bool,
}

impl GearSpec {
    /// Validate and build a gear spec.
    ///
    /// # Parameters
    ///
    /// - `fill`: fill color handed through to the draw list
    /// - `teeth`: number of teeth, at least 1
    /// - `signed_radius`: pitch radius in normalized layout units; the sign
    ///   encodes mesh handedness (an internal mesh runs opposite an external
    ///   one) and must not be zero
    /// - `origin`: gear center in normalized layout units
    /// - `ring`: `true` for an internal ring gear (annulus)
    pub fn new(
        fill: Color,
        teeth: usize,
        signed_radius: Real,
        origin: Point2<Real>,
        ring: bool,
    ) -> Result<Self, ValidationError> {
        if teeth == 0 {
            return Err(ValidationError::ZeroTeeth);
        }
        if !signed_radius.is_finite() {
            return Err(ValidationError::NonFiniteRadius(signed_radius));
        }
        if signed_radius == 0.0 {
            return Err(ValidationError::ZeroPitchRadius);
        }
        if !(origin.x.is_finite() && origin.y.is_finite()) {
            return Err(ValidationError::NonFiniteOrigin {
                x: origin.x,
                y: origin.y,
            });
        }
        Ok(GearSpec {
            fill,
            teeth,
            signed_radius,
            origin,
            ring,
        })
    }

    pub const fn fill(&self) -> Color {
        self.fill
    }

    pub const fn teeth(&self) -> usize {
        self.teeth
    }

    pub const fn signed_radius(&self) -> Real {
        self.signed_radius
    }

    pub const fn origin(&self) -> Point2<Real> {
        self.origin
    }

    pub const fn is_ring(&self) -> bool {
        self.ring
    }

    /// The radii the outline generator will use for this gear under the
    /// given profile, in normalized units.
    pub fn radii(&self, profile: &ToothProfile) -> ToothRadii {
        let pitch = self.signed_radius.abs();
        if self.ring {
            ToothRadii {
                root: pitch + profile.tooth_depth,
                pitch,
                tip: pitch - profile.tooth_depth,
                rim: pitch + profile.tooth_depth * 3.0,
            }
        } else {
            ToothRadii {
                root: pitch - profile.tooth_depth,
                pitch,
                tip: pitch + profile.tooth_depth,
                rim: profile.bore_radius,
            }
        }
    }

    /// Generate the closed outline for this gear.
    ///
    /// ## Tooth ring
    ///
    /// The outline walks `teeth` angular periods of `2·da` each, where
    /// `da = π / teeth`, starting at `−π/2` (twelve o'clock); ring gears
    /// start one further half-tooth along so ring and pinion teeth phase
    /// correctly when meshed. Each period emits, in order:
    ///
    /// 1. an arc along the root circle spanning `da`,
    /// 2. a radial line from the root to the pitch circle,
    /// 3. a slanted flank out to the tip circle across `f·da`,
    /// 4. an arc along the tip circle spanning `(1 − 2f)·da`,
    /// 5. a slanted flank back to the pitch circle across `f·da`,
    /// 6. a radial line back down to the root circle,
    ///
    /// with `f` the profile's flank fraction (⅓ by default, which gives the
    /// tip arc the same `da/3` share as each flank). The angles accumulate
    /// monotonically, so after `teeth` periods the walk has covered a full
    /// turn and an explicit [`PathCmd::Close`] seals the ring.
    ///
    /// ## Bore / rim
    ///
    /// A second sub-path follows: the bore circle (standard gear) or outer
    /// rim circle (ring gear) as two half-turn arcs wound **opposite** to the
    /// tooth arcs, so a parity fill rule leaves it hollow. See the
    /// [`crate::path`] docs for the fill-rule caveat.
    ///
    /// The result is a pure function of `self` and `profile`: identical
    /// inputs produce an identical command list, so callers may memoize
    /// outlines per spec for the life of the session.
    pub fn outline(&self, profile: &ToothProfile) -> ClosedPath {
        let n = self.teeth;
        let ToothRadii {
            root,
            pitch,
            tip,
            rim,
        } = self.radii(profile);
        let scale = profile.scale;
        let f = profile.flank_fraction;

        let da = PI / n as Real;
        let mut a = -FRAC_PI_2 + if self.ring { da } else { 0.0 };

        let mut path = ClosedPath::new();
        path.push(PathCmd::MoveTo(polar(root, a, scale)));
        for _ in 0..n {
            a += da;
            path.push(PathCmd::ArcTo {
                radius: root * scale,
                sweep: ArcSweep::Positive,
                to: polar(root, a, scale),
            });
            path.push(PathCmd::LineTo(polar(pitch, a, scale)));
            a += f * da;
            path.push(PathCmd::LineTo(polar(tip, a, scale)));
            a += (1.0 - 2.0 * f) * da;
            path.push(PathCmd::ArcTo {
                radius: tip * scale,
                sweep: ArcSweep::Positive,
                to: polar(tip, a, scale),
            });
            a += f * da;
            path.push(PathCmd::LineTo(polar(pitch, a, scale)));
            path.push(PathCmd::LineTo(polar(root, a, scale)));
        }
        path.push(PathCmd::Close);

        // bore (or rim) circle as two half-turn arcs, wound the other way
        let r = rim * scale;
        path.push(PathCmd::MoveTo(Point2::new(0.0, -r)));
        path.push(PathCmd::ArcTo {
            radius: r,
            sweep: ArcSweep::Negative,
            to: Point2::new(0.0, r),
        });
        path.push(PathCmd::ArcTo {
            radius: r,
            sweep: ArcSweep::Negative,
            to: Point2::new(0.0, -r),
        });
        path.push(PathCmd::Close);
        path
    }
}

#[inline]
fn polar(radius: Real, angle: Real, scale: Real) -> Point2<Real> {
    Point2::new(radius * angle.cos() * scale, radius * angle.sin() * scale)
}
