//! Test support library
//! Provides various helper functions & utilities for tests.

use geartrain::{
    float_types::Real,
    path::{ClosedPath, PathCmd},
};
use nalgebra::Point2;

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Every point the pen lands on, in command order. `Close` commands
/// contribute nothing (they return to the sub-path start implicitly).
pub fn endpoints(path: &ClosedPath) -> Vec<Point2<Real>> {
    path.commands()
        .iter()
        .filter_map(PathCmd::end_point)
        .collect()
}

/// Distance of a point from the origin.
pub fn radius_of(point: Point2<Real>) -> Real {
    point.coords.norm()
}

/// Rotate a point about the origin by `angle` radians.
pub fn rotate(point: Point2<Real>, angle: Real) -> Point2<Real> {
    let (sin, cos) = angle.sin_cos();
    Point2::new(cos * point.x - sin * point.y, sin * point.x + cos * point.y)
}
