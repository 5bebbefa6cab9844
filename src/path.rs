//! Closed vector paths built from move / line / circular-arc / close commands.
//!
//! This is the output language of the gear outline generator: a flat, ordered
//! command list in absolute, pre-scaled coordinates. Sub-paths begin at a
//! [`PathCmd::MoveTo`] and end at a [`PathCmd::Close`]; a gear outline carries
//! two of them (tooth ring, then bore/rim circle) wound in opposite directions
//! so that a parity ("evenodd") fill rule renders the second as a hole.
//!
//! Renderers that consume the commands directly must use an even-odd fill
//! rule; a nonzero-winding rule also works here because the windings oppose,
//! but even-odd is the convention this crate documents and emits.

use crate::float_types::{Real, TAU, tolerance};
use geo::{LineString, Orient, Polygon as GeoPolygon, coord, orient::Direction};
use nalgebra::{Point2, Vector2};

/// Direction of a circular arc, mirroring the SVG `sweep` flag.
///
/// `Positive` is sweep-flag 1: the arc runs in the positive-angle direction
/// of the coordinate frame (visually clockwise when +y points down, as in
/// screen space). `Negative` is sweep-flag 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArcSweep {
    Positive,
    Negative,
}

impl ArcSweep {
    /// The opposite direction.
    pub const fn reversed(self) -> Self {
        match self {
            ArcSweep::Positive => ArcSweep::Negative,
            ArcSweep::Negative => ArcSweep::Positive,
        }
    }

    /// Numeric SVG sweep flag (`0` or `1`).
    pub const fn flag(self) -> u8 {
        match self {
            ArcSweep::Positive => 1,
            ArcSweep::Negative => 0,
        }
    }
}

/// One absolute path-drawing instruction.
///
/// Arcs are circular (`rx == ry`), never larger than a half turn, and
/// expressed in SVG endpoint parameterisation: the segment runs from the
/// previous command's endpoint to `to` along a circle of the given `radius`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCmd {
    MoveTo(Point2<Real>),
    LineTo(Point2<Real>),
    ArcTo {
        radius: Real,
        sweep: ArcSweep,
        to: Point2<Real>,
    },
    Close,
}

impl PathCmd {
    /// The point this command leaves the pen at, if it moves the pen.
    /// `Close` returns `None`; it implicitly returns to the sub-path start.
    pub const fn end_point(&self) -> Option<Point2<Real>> {
        match self {
            PathCmd::MoveTo(p) | PathCmd::LineTo(p) | PathCmd::ArcTo { to: p, .. } => Some(*p),
            PathCmd::Close => None,
        }
    }
}

/// An ordered sequence of path commands describing one or more closed loops.
///
/// Equality is structural and exact, which is what makes outline generation
/// testably deterministic: the same inputs must produce the same command list
/// byte for byte.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClosedPath {
    cmds: Vec<PathCmd>,
}

impl ClosedPath {
    pub const fn new() -> Self {
        Self { cmds: Vec::new() }
    }

    pub fn from_cmds(cmds: Vec<PathCmd>) -> Self {
        Self { cmds }
    }

    pub fn commands(&self) -> &[PathCmd] {
        &self.cmds
    }

    pub fn len(&self) -> usize {
        self.cmds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    pub fn push(&mut self, cmd: PathCmd) {
        self.cmds.push(cmd);
    }

    /// Split the command list into its sub-paths. Each returned slice starts
    /// at a `MoveTo` (commands before the first `MoveTo`, if any, form a
    /// degenerate leading slice).
    pub fn subpaths(&self) -> impl Iterator<Item = &[PathCmd]> {
        // chunk boundaries at every MoveTo
        let mut bounds: Vec<usize> = self
            .cmds
            .iter()
            .enumerate()
            .filter_map(|(i, c)| matches!(c, PathCmd::MoveTo(_)).then_some(i))
            .collect();
        if bounds.first() != Some(&0) {
            bounds.insert(0, 0);
        }
        bounds.push(self.cmds.len());
        bounds
            .windows(2)
            .map(|w| &self.cmds[w[0]..w[1]])
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .into_iter()
    }

    /// True when every sub-path ends with an explicit `Close`.
    pub fn is_closed(&self) -> bool {
        !self.is_empty()
            && self
                .subpaths()
                .all(|sub| matches!(sub.last(), Some(PathCmd::Close)))
    }

    /// Approximate each sub-path with a polyline, resolving arcs to sampled
    /// circle segments. `segments_per_turn` sets the resolution of a full
    /// circle; each arc gets a proportional share (at least one segment).
    ///
    /// Closed sub-paths repeat their start point at the end, so the returned
    /// rings satisfy `first == last`.
    pub fn flatten(&self, segments_per_turn: usize) -> Vec<Vec<Point2<Real>>> {
        let per_turn = segments_per_turn.max(4);
        let mut rings: Vec<Vec<Point2<Real>>> = Vec::new();
        let mut current: Vec<Point2<Real>> = Vec::new();
        let mut start: Option<Point2<Real>> = None;
        let mut pen: Option<Point2<Real>> = None;

        for cmd in &self.cmds {
            match *cmd {
                PathCmd::MoveTo(p) => {
                    if !current.is_empty() {
                        rings.push(std::mem::take(&mut current));
                    }
                    current.push(p);
                    start = Some(p);
                    pen = Some(p);
                },
                PathCmd::LineTo(p) => {
                    current.push(p);
                    pen = Some(p);
                },
                PathCmd::ArcTo { radius, sweep, to } => {
                    if let Some(from) = pen {
                        append_arc(&mut current, from, to, radius, sweep, per_turn);
                    } else {
                        current.push(to);
                    }
                    pen = Some(to);
                },
                PathCmd::Close => {
                    if let Some(s) = start {
                        current.push(s);
                        pen = Some(s);
                    }
                    if !current.is_empty() {
                        rings.push(std::mem::take(&mut current));
                    }
                },
            }
        }
        if !current.is_empty() {
            rings.push(current);
        }
        rings
    }

    /// Convert to a [`geo::Polygon`]: the first sub-path becomes the exterior
    /// ring, every further sub-path an interior ring (the bore hole of a
    /// standard gear, the inner rim edge of a ring gear), orientation
    /// normalized the conventional way (CCW exterior, CW interiors).
    pub fn to_polygon(&self, segments_per_turn: usize) -> GeoPolygon<Real> {
        let mut rings = self.flatten(segments_per_turn).into_iter();
        let exterior = rings
            .next()
            .map(ring_to_line_string)
            .unwrap_or_else(|| LineString::new(vec![]));
        let interiors: Vec<LineString<Real>> = rings.map(ring_to_line_string).collect();
        GeoPolygon::new(exterior, interiors).orient(Direction::Default)
    }

    /// Axis-aligned bounds of the flattened outline as `(min, max)`.
    /// Returns `None` for an empty path.
    pub fn bounds(&self) -> Option<(Point2<Real>, Point2<Real>)> {
        let mut min = Point2::new(Real::MAX, Real::MAX);
        let mut max = Point2::new(Real::MIN, Real::MIN);
        let mut seen = false;
        for ring in self.flatten(64) {
            for p in ring {
                seen = true;
                min.x = min.x.min(p.x);
                min.y = min.y.min(p.y);
                max.x = max.x.max(p.x);
                max.y = max.y.max(p.y);
            }
        }
        seen.then_some((min, max))
    }
}

fn ring_to_line_string(ring: Vec<Point2<Real>>) -> LineString<Real> {
    LineString::new(ring.into_iter().map(|p| coord! { x: p.x, y: p.y }).collect())
}

/// Recover the center of a circular arc from its SVG endpoint
/// parameterisation (rx = ry, x-rotation 0, large-arc 0).
///
/// Degenerate radii are clamped up to the half-chord, the leniency the SVG
/// spec mandates when rounding leaves the circle too small to reach both
/// endpoints. Returns the center and the effective radius.
pub fn arc_center(
    from: Point2<Real>,
    to: Point2<Real>,
    radius: Real,
    sweep: ArcSweep,
) -> (Point2<Real>, Real) {
    let mid = nalgebra::center(&from, &to);
    let half: Vector2<Real> = (from - to) * 0.5;
    let d = half.norm();
    if d <= tolerance() {
        // zero-length chord: treat the arc as a point
        return (mid, radius.max(0.0));
    }
    let r = radius.max(d);
    let h = (r * r - d * d).max(0.0).sqrt();
    // perpendicular of the half-chord; sign per W3C F.6.5 with large-arc = 0
    let n = Vector2::new(half.y, -half.x) / d;
    let center = match sweep {
        ArcSweep::Positive => mid + n * h,
        ArcSweep::Negative => mid - n * h,
    };
    (center, r)
}

fn append_arc(
    out: &mut Vec<Point2<Real>>,
    from: Point2<Real>,
    to: Point2<Real>,
    radius: Real,
    sweep: ArcSweep,
    segments_per_turn: usize,
) {
    let (center, r) = arc_center(from, to, radius, sweep);
    let a0 = (from.y - center.y).atan2(from.x - center.x);
    let a1 = (to.y - center.y).atan2(to.x - center.x);
    let delta = match sweep {
        ArcSweep::Positive => (a1 - a0).rem_euclid(TAU),
        ArcSweep::Negative => -((a0 - a1).rem_euclid(TAU)),
    };
    let steps = ((delta.abs() / TAU) * segments_per_turn as Real).ceil() as usize;
    let steps = steps.max(1);
    for k in 1..steps {
        let a = a0 + delta * (k as Real) / (steps as Real);
        out.push(Point2::new(center.x + r * a.cos(), center.y + r * a.sin()));
    }
    // land exactly on the commanded endpoint
    out.push(to);
}
