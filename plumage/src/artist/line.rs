// Copyright 2026 the Plumage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::any::Any;

use log::trace;
use peniko::kurbo::{Affine, BezPath, Point, Rect};

use super::Common;
use crate::attach::AttachError;
use crate::render::{ClipPath, Renderer};
use crate::style::Style;

/// A styled polyline artist.
///
/// `Line` carries only its vertices and the shared artist state; every stylistic attribute
/// lives in the attached [`Style`]. Markers at the vertices are not supported — only the
/// connecting stroke is drawn.
#[derive(Clone, Debug)]
pub struct Line {
    points: Vec<Point>,
    common: Common,
}

impl Line {
    /// Creates a line through `points`, in data coordinates, with no style attached.
    pub fn new(points: impl IntoIterator<Item = impl Into<Point>>) -> Self {
        Self {
            points: points.into_iter().map(Into::into).collect(),
            common: Common::new(),
        }
    }

    /// Attaches `style`, builder-style.
    pub fn with_style(mut self, style: Style) -> Self {
        self.common.style.set(Some(style));
        self
    }

    /// The vertices of the line.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Replaces the vertices of the line.
    pub fn set_points(&mut self, points: impl IntoIterator<Item = impl Into<Point>>) {
        self.points = points.into_iter().map(Into::into).collect();
    }

    /// The attached style, if any.
    pub fn style(&self) -> Option<&Style> {
        self.common.style.get()
    }

    /// Attaches `style`, or detaches with `None`.
    pub fn set_style(&mut self, style: Option<Style>) {
        self.common.style.set(style);
    }

    /// Type-erased style assignment; a mismatch leaves the current style in place.
    pub fn set_style_any(&mut self, value: Option<Box<dyn Any>>) -> Result<(), AttachError> {
        self.common.style.set_any(value)
    }

    /// Whether the line is drawn at all.
    pub fn visible(&self) -> bool {
        self.common.visible
    }

    /// Sets whether the line is drawn at all.
    pub fn set_visible(&mut self, visible: bool) {
        self.common.visible = visible;
    }

    /// Transform from data coordinates to canvas coordinates.
    pub fn transform(&self) -> Affine {
        self.common.transform
    }

    /// Sets the data-to-canvas transform.
    pub fn set_transform(&mut self, transform: Affine) {
        self.common.transform = transform;
    }

    /// The artist-level rectangular clip, if any.
    pub fn clip_rect(&self) -> Option<Rect> {
        self.common.clip_rect
    }

    /// Sets or clears the artist-level rectangular clip.
    pub fn set_clip_rect(&mut self, clip_rect: Option<Rect>) {
        self.common.clip_rect = clip_rect;
    }

    /// The artist-level clip path, if any.
    pub fn clip_path(&self) -> Option<&ClipPath> {
        self.common.clip_path.as_ref()
    }

    /// Sets or clears the artist-level clip path.
    pub fn set_clip_path(&mut self, clip_path: Option<ClipPath>) {
        self.common.clip_path = clip_path;
    }

    /// The artist's pixel-snapping preference.
    pub fn snap(&self) -> Option<bool> {
        self.common.snap
    }

    /// Sets the artist's pixel-snapping preference, used when a default style is
    /// synthesized.
    pub fn set_snap(&mut self, snap: Option<bool>) {
        self.common.snap = snap;
    }

    /// The group id forwarded to [`Renderer::open_group`].
    pub fn gid(&self) -> Option<&str> {
        self.common.gid.as_deref()
    }

    /// Sets or clears the group id.
    pub fn set_gid(&mut self, gid: Option<&str>) {
        self.common.gid = gid.map(str::to_owned);
    }

    /// Renders the line through `renderer`.
    ///
    /// If no style is attached, one is synthesized from the current
    /// [`defaults`](crate::defaults) and attached for subsequent draws. The artist's clip
    /// state is applied to the style unless the style already clips, then the path and the
    /// style handle are handed to [`Renderer::draw_path`].
    pub fn draw(&mut self, renderer: &mut dyn Renderer) {
        if !self.common.visible {
            return;
        }
        if self.points.is_empty() {
            trace!("line has no points; skipping draw");
            return;
        }

        let style = self.common.style_or_default("line");
        self.common.resolve_clip(&style);

        renderer.open_group("line", self.common.gid.as_deref());
        let mut path = BezPath::new();
        path.move_to(self.points[0]);
        for &point in &self.points[1..] {
            path.line_to(point);
        }
        renderer.draw_path(&style, &path, self.common.transform);
        renderer.close_group("line");
    }
}
