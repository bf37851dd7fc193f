// Copyright 2026 the Plumage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The process-wide rendering defaults registry.
//!
//! When an artist reaches draw time with no style attached, it synthesizes one from the
//! values held here, read at draw time rather than at artist construction. The registry is plain
//! process-wide state with no reload semantics: [`current`] snapshots it, [`replace`] and
//! [`update`] mutate it, and [`scoped`] installs a temporary override that restores the
//! previous values on drop (and serializes with other overrides, so concurrent tests cannot
//! observe each other's settings).

use once_cell::sync::Lazy;
use std::sync::{Mutex, MutexGuard, PoisonError, RwLock};

use paint_primitives::{
    CapStyle, FontFamily, FontStretch, FontStyle, FontVariant, FontWeight, JoinStyle, LineStyle,
};
use peniko::Color;

/// The default attribute values consulted by artists with no attached style.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderDefaults {
    /// Whether synthesized styles are antialiased.
    pub antialiased: bool,
    /// Default stroke width in points.
    pub linewidth: f32,
    /// Default stroke pattern.
    pub linestyle: LineStyle,
    /// Default foreground color.
    pub color: Color,
    /// Cap used when the default linestyle is solid.
    pub solid_capstyle: CapStyle,
    /// Join used when the default linestyle is solid.
    pub solid_joinstyle: JoinStyle,
    /// Cap used when the default linestyle is dashed.
    pub dash_capstyle: CapStyle,
    /// Join used when the default linestyle is dashed.
    pub dash_joinstyle: JoinStyle,
    /// Default pixel-snapping preference.
    pub snap: Option<bool>,
    /// Default font family for text artists.
    pub font_family: FontFamily,
    /// Default font slope.
    pub font_style: FontStyle,
    /// Default font capitalization variant.
    pub font_variant: FontVariant,
    /// Default font weight.
    pub font_weight: FontWeight,
    /// Default font stretch.
    pub font_stretch: FontStretch,
    /// Default font size in points.
    pub font_size: f32,
}

impl Default for RenderDefaults {
    fn default() -> Self {
        Self {
            antialiased: true,
            linewidth: 1.5,
            linestyle: LineStyle::Solid,
            color: Color::from_rgb8(0x1F, 0x77, 0xB4),
            solid_capstyle: CapStyle::Projecting,
            solid_joinstyle: JoinStyle::Round,
            dash_capstyle: CapStyle::Butt,
            dash_joinstyle: JoinStyle::Round,
            snap: None,
            font_family: FontFamily::default(),
            font_style: FontStyle::default(),
            font_variant: FontVariant::default(),
            font_weight: FontWeight::default(),
            font_stretch: FontStretch::default(),
            font_size: 10.0,
        }
    }
}

static REGISTRY: Lazy<RwLock<RenderDefaults>> =
    Lazy::new(|| RwLock::new(RenderDefaults::default()));

/// A snapshot of the current defaults.
pub fn current() -> RenderDefaults {
    REGISTRY
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Installs `defaults`, returning the previously installed values.
pub fn replace(defaults: RenderDefaults) -> RenderDefaults {
    std::mem::replace(
        &mut *REGISTRY.write().unwrap_or_else(PoisonError::into_inner),
        defaults,
    )
}

/// Edits the defaults in place.
///
/// ```
/// plumage::defaults::update(|defaults| defaults.linewidth = 2.0);
/// # plumage::defaults::update(|defaults| defaults.linewidth = 1.5);
/// ```
pub fn update(f: impl FnOnce(&mut RenderDefaults)) {
    f(&mut REGISTRY.write().unwrap_or_else(PoisonError::into_inner));
}

/// Installs `defaults` for the lifetime of the returned guard, restoring the previous
/// values on drop.
///
/// Guards serialize with each other, so overlapping overrides from concurrent tests block
/// rather than interleave.
pub fn scoped(defaults: RenderDefaults) -> ScopedDefaults {
    static SERIAL: Mutex<()> = Mutex::new(());
    let exclusive = SERIAL.lock().unwrap_or_else(PoisonError::into_inner);
    let previous = replace(defaults);
    ScopedDefaults {
        previous: Some(previous),
        _exclusive: exclusive,
    }
}

/// Guard for a [`scoped`] defaults override.
#[derive(Debug)]
pub struct ScopedDefaults {
    previous: Option<RenderDefaults>,
    _exclusive: MutexGuard<'static, ()>,
}

impl Drop for ScopedDefaults {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            replace(previous);
        }
    }
}
