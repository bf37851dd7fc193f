// Copyright 2026 the Plumage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Test support: a renderer that records draw commands instead of rasterizing.

use peniko::kurbo::{Affine, BezPath, Point, Size};

use crate::font::Font;
use crate::render::Renderer;
use crate::style::Style;

/// One recorded renderer call.
///
/// Styles are snapshotted with [`Style::deep_clone`] at call time, so a recorded command
/// reflects the attribute values as they were when the call happened, even if the shared
/// handle is mutated afterwards.
#[derive(Clone, Debug)]
pub enum DrawCommand {
    /// A [`Renderer::draw_path`] call.
    Path {
        /// Snapshot of the style at call time.
        style: Style,
        /// The stroked path.
        path: BezPath,
        /// The data-to-canvas transform.
        transform: Affine,
    },
    /// A [`Renderer::draw_text`] call.
    Text {
        /// Snapshot of the style at call time.
        style: Style,
        /// The font the text was drawn in.
        font: Font,
        /// The anchor position in canvas coordinates.
        position: Point,
        /// The drawn text.
        text: String,
        /// Rotation in degrees counter-clockwise.
        angle: f64,
    },
    /// A [`Renderer::open_group`] call.
    OpenGroup {
        /// The group name.
        name: String,
        /// The forwarded group id, if any.
        gid: Option<String>,
    },
    /// A [`Renderer::close_group`] call.
    CloseGroup {
        /// The group name.
        name: String,
    },
}

/// A [`Renderer`] that records every call for later inspection.
#[derive(Clone, Debug)]
pub struct RecordingRenderer {
    size: Size,
    commands: Vec<DrawCommand>,
}

impl RecordingRenderer {
    /// Creates a recorder with an arbitrary 640×480 point canvas.
    pub fn new() -> Self {
        Self::with_size(Size::new(640.0, 480.0))
    }

    /// Creates a recorder reporting `size` as its canvas size.
    pub fn with_size(size: Size) -> Self {
        Self {
            size,
            commands: Vec::new(),
        }
    }

    /// The recorded calls, in order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Discards all recorded calls.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Default for RecordingRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for RecordingRenderer {
    fn draw_path(&mut self, style: &Style, path: &BezPath, transform: Affine) {
        self.commands.push(DrawCommand::Path {
            style: style.deep_clone(),
            path: path.clone(),
            transform,
        });
    }

    fn draw_text(&mut self, style: &Style, font: &Font, position: Point, text: &str, angle: f64) {
        self.commands.push(DrawCommand::Text {
            style: style.deep_clone(),
            font: font.clone(),
            position,
            text: text.to_owned(),
            angle,
        });
    }

    fn open_group(&mut self, name: &str, gid: Option<&str>) {
        self.commands.push(DrawCommand::OpenGroup {
            name: name.to_owned(),
            gid: gid.map(str::to_owned),
        });
    }

    fn close_group(&mut self, name: &str) {
        self.commands.push(DrawCommand::CloseGroup {
            name: name.to_owned(),
        });
    }

    fn canvas_size(&self) -> Size {
        self.size
    }
}
