// Copyright 2026 the Plumage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use paint_primitives::{FontFamily, FontStretch, FontStyle, FontVariant, FontWeight};

/// A bundle of font attributes for text artists.
///
/// Unlike [`Style`](crate::Style), `Font` has plain value semantics: attaching one to an
/// artist stores a *copy*, so later edits to the original are not seen by artists it was
/// already attached to. This asymmetry is inherited from the design being explored here and
/// is deliberate enough to document: re-attach the font (or edit it through
/// [`Text::font_mut`](crate::artist::Text::font_mut)) to restyle existing artists.
#[derive(Clone, Debug, PartialEq)]
pub struct Font {
    family: FontFamily,
    style: FontStyle,
    variant: FontVariant,
    weight: FontWeight,
    stretch: FontStretch,
    size: f32,
}

impl Default for Font {
    fn default() -> Self {
        Self {
            family: FontFamily::default(),
            style: FontStyle::default(),
            variant: FontVariant::default(),
            weight: FontWeight::default(),
            stretch: FontStretch::default(),
            size: 10.0,
        }
    }
}

impl Font {
    /// Creates a font with the default attributes: sans-serif, upright, normal weight and
    /// stretch, 10 points.
    pub fn new() -> Self {
        Self::default()
    }

    /// The font family.
    pub fn family(&self) -> &FontFamily {
        &self.family
    }

    /// Sets the font family.
    pub fn set_family(&mut self, family: FontFamily) {
        self.family = family;
    }

    /// The slope.
    pub fn style(&self) -> FontStyle {
        self.style
    }

    /// Sets the slope.
    pub fn set_style(&mut self, style: FontStyle) {
        self.style = style;
    }

    /// The capitalization variant.
    pub fn variant(&self) -> FontVariant {
        self.variant
    }

    /// Sets the capitalization variant.
    pub fn set_variant(&mut self, variant: FontVariant) {
        self.variant = variant;
    }

    /// The weight.
    pub fn weight(&self) -> FontWeight {
        self.weight
    }

    /// Sets the weight.
    pub fn set_weight(&mut self, weight: FontWeight) {
        self.weight = weight;
    }

    /// The stretch.
    pub fn stretch(&self) -> FontStretch {
        self.stretch
    }

    /// Sets the stretch.
    pub fn set_stretch(&mut self, stretch: FontStretch) {
        self.stretch = stretch;
    }

    /// The size in points.
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Sets the size in points.
    pub fn set_size(&mut self, size: f32) {
        self.size = size;
    }
}
