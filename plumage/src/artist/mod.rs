// Copyright 2026 the Plumage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawable primitives that consult an attached [`Style`].
//!
//! An artist holds geometry plus a style slot. At draw time it resolves its style (the
//! attached handle, or one synthesized from [`defaults`](crate::defaults) and attached for
//! subsequent draws), applies its clip state to that style, and hands the style to the
//! [`Renderer`](crate::Renderer) in place of per-call style parameters.

mod line;
mod text;

pub use line::Line;
pub use text::Text;

use log::debug;
use peniko::kurbo::{Affine, Rect};

use crate::attach::Slot;
use crate::defaults;
use crate::render::ClipPath;
use crate::style::Style;

/// State every artist carries: visibility, transform, clip, snap, group id, style slot.
#[derive(Clone, Debug)]
pub(crate) struct Common {
    pub(crate) visible: bool,
    pub(crate) transform: Affine,
    pub(crate) clip_rect: Option<Rect>,
    pub(crate) clip_path: Option<ClipPath>,
    pub(crate) snap: Option<bool>,
    pub(crate) gid: Option<String>,
    pub(crate) style: Slot<Style>,
}

impl Common {
    pub(crate) fn new() -> Self {
        Self {
            visible: true,
            transform: Affine::IDENTITY,
            clip_rect: None,
            clip_path: None,
            snap: None,
            gid: None,
            style: Slot::new("style"),
        }
    }

    /// The attached style, or a freshly synthesized default.
    ///
    /// Synthesis happens at draw time, reading the registry as it is *now*, and the result
    /// is attached so subsequent draws reuse it.
    pub(crate) fn style_or_default(&mut self, artist: &str) -> Style {
        if let Some(style) = self.style.get() {
            return style.clone();
        }
        debug!("no style attached to {artist}; synthesizing one from the defaults registry");
        let style = default_style(self.snap);
        self.style.set(Some(style.clone()));
        style
    }

    /// Applies the artist's clip state to `style`, unless the style already clips.
    pub(crate) fn resolve_clip(&self, style: &Style) {
        if style.clip_rect().is_none() && style.clip_path().is_none() {
            style.set_clip_rect(self.clip_rect);
            style.set_clip_path(self.clip_path.clone());
        }
    }
}

/// Builds a style from the current process-wide defaults.
///
/// A dashed default linestyle selects the dash cap/join defaults; a solid one selects the
/// solid cap/join defaults.
pub(crate) fn default_style(snap: Option<bool>) -> Style {
    let defaults = defaults::current();
    let style = Style::new();
    style.set_antialiased(defaults.antialiased);
    style.set_linewidth(defaults.linewidth);
    style.set_linestyle(defaults.linestyle);
    if defaults.linestyle.is_dashed() {
        style.set_capstyle(defaults.dash_capstyle);
        style.set_joinstyle(defaults.dash_joinstyle);
    } else {
        style.set_capstyle(defaults.solid_capstyle);
        style.set_joinstyle(defaults.solid_joinstyle);
    }
    style.set_snap(snap.or(defaults.snap));
    style.set_color(defaults.color);
    style
}
