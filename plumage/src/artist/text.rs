// Copyright 2026 the Plumage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::any::Any;

use log::trace;
use peniko::kurbo::{Affine, Point, Rect};

use super::Common;
use crate::attach::{AttachError, Slot};
use crate::defaults;
use crate::font::Font;
use crate::render::{ClipPath, Renderer};
use crate::style::Style;

/// A styled text label artist.
///
/// Layout and glyph rendering are the renderer's business; `Text` carries the string, its
/// anchor position, a rotation angle, and two attachment slots — one for the [`Style`] and
/// one for the [`Font`]. Remember that fonts attach by value (see [`Font`]).
#[derive(Clone, Debug)]
pub struct Text {
    position: Point,
    text: String,
    angle: f64,
    font: Slot<Font>,
    common: Common,
}

impl Text {
    /// Creates a label anchored at `position`, in data coordinates, with no style or font
    /// attached.
    pub fn new(position: impl Into<Point>, text: impl Into<String>) -> Self {
        Self {
            position: position.into(),
            text: text.into(),
            angle: 0.0,
            font: Slot::new("font"),
            common: Common::new(),
        }
    }

    /// Attaches `style`, builder-style.
    pub fn with_style(mut self, style: Style) -> Self {
        self.common.style.set(Some(style));
        self
    }

    /// Attaches `font`, builder-style.
    pub fn with_font(mut self, font: Font) -> Self {
        self.font.set(Some(font));
        self
    }

    /// The anchor position in data coordinates.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Moves the anchor position.
    pub fn set_position(&mut self, position: impl Into<Point>) {
        self.position = position.into();
    }

    /// The label text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the label text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// The rotation angle in degrees counter-clockwise.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Sets the rotation angle in degrees counter-clockwise.
    pub fn set_angle(&mut self, angle: f64) {
        self.angle = angle;
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

    /// The attached font, if any.
    pub fn font(&self) -> Option<&Font> {
        self.font.get()
    }

    /// Mutable access to the attached font, if any.
    ///
    /// Because fonts attach by value, this is the way to edit a font that is already
    /// attached.
    pub fn font_mut(&mut self) -> Option<&mut Font> {
        self.font.get_mut()
    }

    /// Attaches a copy of `font`, or detaches with `None`.
    pub fn set_font(&mut self, font: Option<Font>) {
        self.font.set(font);
    }

    /// Type-erased font assignment; a mismatch leaves the current font in place.
    pub fn set_font_any(&mut self, value: Option<Box<dyn Any>>) -> Result<(), AttachError> {
        self.font.set_any(value)
    }

    /// Whether the label is drawn at all.
    pub fn visible(&self) -> bool {
        self.common.visible
    }

    /// Sets whether the label is drawn at all.
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

    /// Renders the label through `renderer`.
    ///
    /// Style resolution mirrors [`Line::draw`](crate::artist::Line::draw): an attached
    /// style, or one synthesized from the current [`defaults`](crate::defaults) and
    /// attached for subsequent draws; the artist's clip state is applied to the style
    /// unless it already clips. The font resolves the same way, from the registry's font
    /// defaults.
    pub fn draw(&mut self, renderer: &mut dyn Renderer) {
        if !self.common.visible {
            return;
        }
        if self.text.is_empty() {
            trace!("text label is empty; skipping draw");
            return;
        }

        let style = self.common.style_or_default("text");
        self.common.resolve_clip(&style);
        let font = match self.font.get() {
            Some(font) => font.clone(),
            None => {
                let font = default_font();
                self.font.set(Some(font.clone()));
                font
            }
        };

        renderer.open_group("text", self.common.gid.as_deref());
        let position = self.common.transform * self.position;
        renderer.draw_text(&style, &font, position, &self.text, self.angle);
        renderer.close_group("text");
    }
}

/// Builds a font from the current process-wide defaults.
fn default_font() -> Font {
    let defaults = defaults::current();
    let mut font = Font::new();
    font.set_family(defaults.font_family);
    font.set_style(defaults.font_style);
    font.set_variant(defaults.font_variant);
    font.set_weight(defaults.font_weight);
    font.set_stretch(defaults.font_stretch);
    font.set_size(defaults.font_size);
    font
}
