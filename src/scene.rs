//! The flat draw list handed to renderers.
//!
//! A [`ScenePass`] is one frame of the animation reduced to data: an outer
//! carrier-frame placement plus an ordered run of path/placement/paint
//! triples. Renderers walk it front to back with no knowledge of gears,
//! ratios, or ticks; anything that can nest one transform inside another and
//! fill a path under the even-odd rule can draw the train.

use crate::gear::Color;
use crate::kinematics::Transform2;
use crate::path::ClosedPath;

/// How one path is painted.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Paint {
    /// Fill the interior under the even-odd rule, so the second sub-path
    /// reads as a hole.
    Fill(Color),
    /// Stroke the boundary hairline-thin.
    Stroke(Color),
}

impl Paint {
    /// The color being painted, whichever way.
    pub const fn color(self) -> Color {
        match self {
            Paint::Fill(color) | Paint::Stroke(color) => color,
        }
    }
}

/// One path at one placement with one paint.
#[derive(Clone, Copy, Debug)]
pub struct DrawCommand<'a> {
    pub path: &'a ClosedPath,
    /// Placement in frame-local pixels; nests inside [`ScenePass::frame`].
    pub transform: Transform2,
    pub paint: Paint,
}

/// Everything a renderer needs for one frame.
///
/// Commands are emitted in paint order: for each gear, its stroke first and
/// its fill on top, gears in train order. Paths are borrowed from the
/// train's memoized outlines, so a pass is cheap to build every tick.
#[derive(Clone, Debug)]
pub struct ScenePass<'a> {
    /// Outer carrier placement; every command nests inside it.
    pub frame: Transform2,
    pub commands: Vec<DrawCommand<'a>>,
}

impl<'a> ScenePass<'a> {
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// The commands that fill, in order.
    pub fn fills(&self) -> impl Iterator<Item = &DrawCommand<'a>> {
        self.commands
            .iter()
            .filter(|command| matches!(command.paint, Paint::Fill(_)))
    }

    /// The commands that stroke, in order.
    pub fn strokes(&self) -> impl Iterator<Item = &DrawCommand<'a>> {
        self.commands
            .iter()
            .filter(|command| matches!(command.paint, Paint::Stroke(_)))
    }
}
