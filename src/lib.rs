//! An animated, interactive **planetary gear train** as a library: gear
//! outlines generated as closed vector paths, a kinematic model derived from
//! one shared drive phase so the mesh can never slip, and a tap-driven cycle
//! of carrier-frame modes. Everything is deterministic and host-agnostic;
//! hosts feed in ticks and pointer timestamps and draw the returned scene
//! passes however they like.
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - **svg-io**: render scene passes to SVG documents, plus the demo binary
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: use rayon to compute gear outlines across threads

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod errors;
pub mod float_types;
pub mod gear;
pub mod interaction;
pub mod io;
pub mod kinematics;
pub mod path;
pub mod scene;
pub mod train;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use gear::GearSpec;
pub use train::{GearTrain, TrainConfig, Viewport};
