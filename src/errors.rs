//! Validation errors
//!
//! Gear specs and profile constants are fixed at construction time; every
//! malformed input is rejected here, up front, so the generator and the
//! kinematic model never see a spec that could produce NaN or degenerate
//! geometry.

use crate::float_types::Real;

/// All the possible validation issues we might encounter
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// (ZeroTeeth) A gear needs at least one tooth
    #[error("(ZeroTeeth) A gear needs at least one tooth")]
    ZeroTeeth,
    /// (ZeroPitchRadius) The signed pitch radius is zero; the gear ratio `drive / radius` is undefined
    #[error(
        "(ZeroPitchRadius) The signed pitch radius is zero; the gear ratio drive/radius is undefined"
    )]
    ZeroPitchRadius,
    /// (NonFiniteRadius) The signed pitch radius has a NaN or infinite
    #[error("(NonFiniteRadius) The signed pitch radius ({0}) has a NaN or infinite")]
    NonFiniteRadius(Real),
    /// (NonFiniteOrigin) An origin coordinate has a NaN or infinite
    #[error("(NonFiniteOrigin) The origin ({x}, {y}) has a NaN or infinite")]
    NonFiniteOrigin { x: Real, y: Real },
    /// (NonPositiveConstant) A profile constant that must be strictly positive is not
    #[error("(NonPositiveConstant) Profile constant `{name}` must be > 0, got {value}")]
    NonPositiveConstant { name: &'static str, value: Real },
    /// (FlankFractionOutOfRange) The tooth flank fraction must lie in (0, 1/2]
    #[error("(FlankFractionOutOfRange) Flank fraction must lie in (0, 0.5], got {0}")]
    FlankFractionOutOfRange(Real),
    /// (DegenerateViewport) The viewport is too small to derive a positive scale
    #[error("(DegenerateViewport) Viewport {width}x{height} leaves no positive drawing scale")]
    DegenerateViewport { width: Real, height: Real },
}
