// Copyright 2026 the Plumage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::kurbo::{Affine, BezPath, Point, Size};

use crate::font::Font;
use crate::style::Style;

/// A clip region expressed as an arbitrary outline under a transform.
#[derive(Clone, Debug, PartialEq)]
pub struct ClipPath {
    /// The clipping outline.
    pub path: BezPath,
    /// Transform from the outline's coordinates to canvas coordinates.
    pub transform: Affine,
}

impl ClipPath {
    /// Creates a clip path.
    pub fn new(path: BezPath, transform: Affine) -> Self {
        Self { path, transform }
    }
}

/// The drawing surface contract artists render through.
///
/// Styling travels as a whole [`Style`] handle rather than unpacked per-call parameters;
/// implementations read whichever attributes they honor and ignore the rest. Tessellation,
/// text layout, and rasterization all live behind this trait, outside this crate.
pub trait Renderer {
    /// Strokes `path` under `transform` using the attributes of `style`.
    fn draw_path(&mut self, style: &Style, path: &BezPath, transform: Affine);

    /// Draws `text` in `font`, anchored at `position` in canvas coordinates and rotated by
    /// `angle` degrees counter-clockwise about the anchor.
    fn draw_text(&mut self, style: &Style, font: &Font, position: Point, text: &str, angle: f64);

    /// Opens a logical group, for renderers with structured output. The default
    /// implementation does nothing.
    fn open_group(&mut self, name: &str, gid: Option<&str>) {
        let _ = (name, gid);
    }

    /// Closes the most recently opened group. The default implementation does nothing.
    fn close_group(&mut self, name: &str) {
        let _ = name;
    }

    /// The size of the target canvas in points.
    fn canvas_size(&self) -> Size;
}
