// Copyright 2026 the Plumage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::borrow::ToOwned;
use alloc::string::String;
use core::fmt;

/// A font family: a concrete face name or one of the generic fallback classes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FontFamily {
    /// A named face, e.g. `"DejaVu Sans"`.
    Named(String),
    /// A serifed generic family.
    Serif,
    /// A sans-serif generic family. This is the default value.
    SansSerif,
    /// A cursive generic family.
    Cursive,
    /// A decorative generic family.
    Fantasy,
    /// A fixed-pitch generic family.
    Monospace,
}

impl FontFamily {
    /// Parses a family name, mapping the generic keywords and treating anything else as a
    /// named face.
    ///
    /// ```
    /// use paint_primitives::FontFamily;
    ///
    /// assert_eq!(FontFamily::parse("monospace"), FontFamily::Monospace);
    /// assert_eq!(
    ///     FontFamily::parse("DejaVu Sans"),
    ///     FontFamily::Named("DejaVu Sans".into())
    /// );
    /// ```
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "serif" => Self::Serif,
            "sans-serif" => Self::SansSerif,
            "cursive" => Self::Cursive,
            "fantasy" => Self::Fantasy,
            "monospace" => Self::Monospace,
            name => Self::Named(name.to_owned()),
        }
    }
}

impl Default for FontFamily {
    fn default() -> Self {
        Self::SansSerif
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.write_str(name),
            Self::Serif => f.write_str("serif"),
            Self::SansSerif => f.write_str("sans-serif"),
            Self::Cursive => f.write_str("cursive"),
            Self::Fantasy => f.write_str("fantasy"),
            Self::Monospace => f.write_str("monospace"),
        }
    }
}

/// Slope of a font face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FontStyle {
    /// Upright. This is the default value.
    #[default]
    Normal,
    /// True italic.
    Italic,
    /// Slanted upright forms.
    Oblique,
}

impl FontStyle {
    /// Parses a font style name.
    ///
    /// ```
    /// use paint_primitives::FontStyle;
    ///
    /// assert_eq!(FontStyle::parse("italic"), Some(FontStyle::Italic));
    /// assert_eq!(FontStyle::parse("upright"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.trim() {
            "normal" => Self::Normal,
            "italic" => Self::Italic,
            "oblique" => Self::Oblique,
            _ => return None,
        })
    }
}

impl fmt::Display for FontStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Normal => "normal",
            Self::Italic => "italic",
            Self::Oblique => "oblique",
        })
    }
}

/// Capitalization variant of a font.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FontVariant {
    /// Regular glyphs. This is the default value.
    #[default]
    Normal,
    /// Lowercase letters rendered as reduced capitals.
    SmallCaps,
}

impl FontVariant {
    /// Parses a font variant name.
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.trim() {
            "normal" => Self::Normal,
            "small-caps" => Self::SmallCaps,
            _ => return None,
        })
    }
}

impl fmt::Display for FontVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Normal => "normal",
            Self::SmallCaps => "small-caps",
        })
    }
}

/// Visual weight class of a font, on a numeric scale from 0 to 1000.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct FontWeight(f32);

impl FontWeight {
    /// Weight value of 100.
    pub const ULTRALIGHT: Self = Self(100.0);

    /// Weight value of 200.
    pub const LIGHT: Self = Self(200.0);

    /// Weight value of 400. This is the default value.
    pub const NORMAL: Self = Self(400.0);

    /// Weight value of 500.
    pub const MEDIUM: Self = Self(500.0);

    /// Weight value of 600.
    pub const SEMIBOLD: Self = Self(600.0);

    /// Weight value of 700.
    pub const BOLD: Self = Self(700.0);

    /// Weight value of 800.
    pub const HEAVY: Self = Self(800.0);

    /// Weight value of 900.
    pub const BLACK: Self = Self(900.0);

    /// Creates a new weight value.
    pub fn new(weight: f32) -> Self {
        Self(weight)
    }

    /// Returns the underlying weight value.
    pub fn value(self) -> f32 {
        self.0
    }

    /// Parses a weight keyword or number.
    ///
    /// Supported syntax (after trimming ASCII whitespace): the keywords `ultralight`,
    /// `light`, `normal` (aliases `regular`, `book`), `medium` (alias `roman`),
    /// `semibold` (aliases `demibold`, `demi`), `bold`, `heavy` (alias `extra bold`),
    /// `black`, or a number.
    ///
    /// This parser is case-sensitive and does not clamp the numeric range.
    ///
    /// ```
    /// use paint_primitives::FontWeight;
    ///
    /// assert_eq!(FontWeight::parse("bold"), Some(FontWeight::BOLD));
    /// assert_eq!(FontWeight::parse("demibold"), Some(FontWeight::SEMIBOLD));
    /// assert_eq!(FontWeight::parse("650"), Some(FontWeight::new(650.0)));
    /// assert_eq!(FontWeight::parse("wiry"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Some(match s {
            "ultralight" => Self::ULTRALIGHT,
            "light" => Self::LIGHT,
            "normal" | "regular" | "book" => Self::NORMAL,
            "medium" | "roman" => Self::MEDIUM,
            "semibold" | "demibold" | "demi" => Self::SEMIBOLD,
            "bold" => Self::BOLD,
            "heavy" | "extra bold" => Self::HEAVY,
            "black" => Self::BLACK,
            _ => Self(s.parse::<f32>().ok()?),
        })
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "The keyword mapping is only used when the cast is lossless (checked)."
        )]
        let int_value = self.0 as i32;

        if self.0 == int_value as f32 {
            let keyword = match int_value {
                100 => "ultralight",
                200 => "light",
                400 => "normal",
                500 => "medium",
                600 => "semibold",
                700 => "bold",
                800 => "heavy",
                900 => "black",
                _ => return write!(f, "{}", self.0),
            };
            f.write_str(keyword)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Visual width of a font, on a numeric scale from 0 to 1000 with 500 as normal.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct FontStretch(f32);

impl FontStretch {
    /// Stretch value of 100.
    pub const ULTRA_CONDENSED: Self = Self(100.0);

    /// Stretch value of 200.
    pub const EXTRA_CONDENSED: Self = Self(200.0);

    /// Stretch value of 300.
    pub const CONDENSED: Self = Self(300.0);

    /// Stretch value of 400.
    pub const SEMI_CONDENSED: Self = Self(400.0);

    /// Stretch value of 500. This is the default value.
    pub const NORMAL: Self = Self(500.0);

    /// Stretch value of 600.
    pub const SEMI_EXPANDED: Self = Self(600.0);

    /// Stretch value of 700.
    pub const EXPANDED: Self = Self(700.0);

    /// Stretch value of 800.
    pub const EXTRA_EXPANDED: Self = Self(800.0);

    /// Stretch value of 900.
    pub const ULTRA_EXPANDED: Self = Self(900.0);

    /// Creates a new stretch value.
    pub fn new(stretch: f32) -> Self {
        Self(stretch)
    }

    /// Returns the underlying stretch value.
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns `true` if the stretch is condensed (less than normal).
    pub fn is_condensed(self) -> bool {
        self < Self::NORMAL
    }

    /// Returns `true` if the stretch is expanded (greater than normal).
    pub fn is_expanded(self) -> bool {
        self > Self::NORMAL
    }

    /// Parses a stretch keyword or number.
    ///
    /// ```
    /// use paint_primitives::FontStretch;
    ///
    /// assert_eq!(
    ///     FontStretch::parse("semi-expanded"),
    ///     Some(FontStretch::SEMI_EXPANDED)
    /// );
    /// assert_eq!(FontStretch::parse("450"), Some(FontStretch::new(450.0)));
    /// assert_eq!(FontStretch::parse("wide"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Some(match s {
            "ultra-condensed" => Self::ULTRA_CONDENSED,
            "extra-condensed" => Self::EXTRA_CONDENSED,
            "condensed" => Self::CONDENSED,
            "semi-condensed" => Self::SEMI_CONDENSED,
            "normal" => Self::NORMAL,
            "semi-expanded" => Self::SEMI_EXPANDED,
            "expanded" => Self::EXPANDED,
            "extra-expanded" => Self::EXTRA_EXPANDED,
            "ultra-expanded" => Self::ULTRA_EXPANDED,
            _ => Self(s.parse::<f32>().ok()?),
        })
    }
}

impl Default for FontStretch {
    fn default() -> Self {
        Self::NORMAL
    }
}

impl fmt::Display for FontStretch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "The keyword mapping is only used when the cast is lossless (checked)."
        )]
        let int_value = self.0 as i32;

        if self.0 == int_value as f32 {
            let keyword = match int_value {
                100 => "ultra-condensed",
                200 => "extra-condensed",
                300 => "condensed",
                400 => "semi-condensed",
                500 => "normal",
                600 => "semi-expanded",
                700 => "expanded",
                800 => "extra-expanded",
                900 => "ultra-expanded",
                _ => return write!(f, "{}", self.0),
            };
            f.write_str(keyword)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FontFamily, FontStretch, FontStyle, FontVariant, FontWeight};
    use alloc::string::ToString;

    #[test]
    fn family_parse_generic_and_named() {
        assert_eq!(FontFamily::parse("serif"), FontFamily::Serif);
        assert_eq!(FontFamily::parse(" sans-serif "), FontFamily::SansSerif);
        assert_eq!(
            FontFamily::parse("Iosevka"),
            FontFamily::Named("Iosevka".into())
        );
    }

    #[test]
    fn weight_parse_keywords_aliases_and_numbers() {
        assert_eq!(FontWeight::parse("normal"), Some(FontWeight::NORMAL));
        assert_eq!(FontWeight::parse("regular"), Some(FontWeight::NORMAL));
        assert_eq!(FontWeight::parse("demi"), Some(FontWeight::SEMIBOLD));
        assert_eq!(FontWeight::parse("extra bold"), Some(FontWeight::HEAVY));
        assert_eq!(FontWeight::parse(" 350 "), Some(FontWeight::new(350.0)));
        assert_eq!(FontWeight::parse("chunky"), None);
    }

    #[test]
    fn weight_display_round_trips_keywords() {
        assert_eq!(FontWeight::BOLD.to_string(), "bold");
        assert_eq!(FontWeight::new(650.0).to_string(), "650");
    }

    #[test]
    fn stretch_parse_and_classification() {
        assert_eq!(
            FontStretch::parse("condensed"),
            Some(FontStretch::CONDENSED)
        );
        assert!(FontStretch::CONDENSED.is_condensed());
        assert!(FontStretch::EXPANDED.is_expanded());
        assert!(!FontStretch::NORMAL.is_condensed());
        assert_eq!(FontStretch::parse("narrow"), None);
    }

    #[test]
    fn style_and_variant_parse() {
        assert_eq!(FontStyle::parse("oblique"), Some(FontStyle::Oblique));
        assert_eq!(FontVariant::parse("small-caps"), Some(FontVariant::SmallCaps));
        assert_eq!(FontVariant::parse("smallcaps"), None);
    }
}
