//! SVG export: command lists to path data, scene passes to documents.
//!
//! The lowering is direct. [`PathCmd`] was shaped as the subset of SVG path
//! syntax the outlines need, so each command maps to one `d`-attribute
//! instruction; placements become `translate(..) rotate(..)` transform
//! attributes, with the rotation converted to degrees at this boundary and
//! nowhere else. Fills always carry `fill-rule="evenodd"` so the second
//! sub-path of a gear outline cuts its hole.

use super::IoError;
use crate::kinematics::Transform2;
use crate::path::{ClosedPath, PathCmd};
use crate::scene::{Paint, ScenePass};
use crate::train::Viewport;
use svg::Document;
use svg::node::element::path::Data;
use svg::node::element::{Group, Path as SvgPath};

fn transform_attribute(transform: &Transform2) -> String {
    format!(
        "translate({} {}) rotate({})",
        transform.translation.x,
        transform.translation.y,
        transform.rotation_degrees()
    )
}

impl ClosedPath {
    /// Lowers the command list into SVG path data for a `d` attribute.
    pub fn to_path_data(&self) -> Data {
        let mut data = Data::new();
        for command in self.commands() {
            data = match *command {
                PathCmd::MoveTo(point) => data.move_to((point.x, point.y)),
                PathCmd::LineTo(point) => data.line_to((point.x, point.y)),
                PathCmd::ArcTo { radius, sweep, to } => {
                    data.elliptical_arc_to((radius, radius, 0, 0, sweep.flag(), to.x, to.y))
                },
                PathCmd::Close => data.close(),
            };
        }
        data
    }
}

impl ScenePass<'_> {
    /// Renders the pass as a standalone SVG document sized to `viewport`.
    ///
    /// One outer group carries the carrier-frame transform; each draw
    /// command becomes a path element with its own gear transform nested
    /// inside, in the pass's paint order.
    pub fn to_svg_document(&self, viewport: &Viewport) -> Document {
        let mut frame = Group::new().set("transform", transform_attribute(&self.frame));
        for command in &self.commands {
            let element = SvgPath::new()
                .set("transform", transform_attribute(&command.transform))
                .set("d", command.path.to_path_data());
            let element = match command.paint {
                Paint::Fill(color) => element
                    .set("fill", color.to_hex())
                    .set("fill-rule", "evenodd")
                    .set("stroke", "none"),
                Paint::Stroke(color) => element
                    .set("fill", "none")
                    .set("stroke", color.to_hex())
                    .set("stroke-width", 1),
            };
            frame = frame.add(element);
        }
        Document::new()
            .set("width", viewport.width)
            .set("height", viewport.height)
            .set("viewBox", (0.0, 0.0, viewport.width, viewport.height))
            .add(frame)
    }

    /// Writes the pass to `path` as an SVG file.
    pub fn save_svg(
        &self,
        path: impl AsRef<std::path::Path>,
        viewport: &Viewport,
    ) -> Result<(), IoError> {
        svg::save(path, &self.to_svg_document(viewport))?;
        Ok(())
    }
}
