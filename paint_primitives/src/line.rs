// Copyright 2026 the Plumage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// The stroke pattern of a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LineStyle {
    /// A continuous stroke. This is the default value.
    #[default]
    Solid,
    /// Evenly spaced dashes.
    Dashed,
    /// Alternating dashes and dots.
    DashDot,
    /// Closely spaced dots.
    Dotted,
}

impl LineStyle {
    /// Parses a line style name or its shorthand notation.
    ///
    /// Supported syntax (after trimming ASCII whitespace):
    /// - `solid` or `-`
    /// - `dashed` or `--`
    /// - `dashdot` or `-.`
    /// - `dotted` or `:`
    ///
    /// ```
    /// use paint_primitives::LineStyle;
    ///
    /// assert_eq!(LineStyle::parse("solid"), Some(LineStyle::Solid));
    /// assert_eq!(LineStyle::parse("--"), Some(LineStyle::Dashed));
    /// assert_eq!(LineStyle::parse("-."), Some(LineStyle::DashDot));
    /// assert_eq!(LineStyle::parse("wavy"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.trim() {
            "solid" | "-" => Self::Solid,
            "dashed" | "--" => Self::Dashed,
            "dashdot" | "-." => Self::DashDot,
            "dotted" | ":" => Self::Dotted,
            _ => return None,
        })
    }

    /// Returns `true` for the broken (non-solid) stroke patterns.
    pub fn is_dashed(self) -> bool {
        !matches!(self, Self::Solid)
    }

    /// The shorthand notation for this style.
    pub fn shorthand(self) -> &'static str {
        match self {
            Self::Solid => "-",
            Self::Dashed => "--",
            Self::DashDot => "-.",
            Self::Dotted => ":",
        }
    }
}

impl fmt::Display for LineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Solid => "solid",
            Self::Dashed => "dashed",
            Self::DashDot => "dashdot",
            Self::Dotted => "dotted",
        })
    }
}

/// The shape drawn at the open ends of a stroke.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CapStyle {
    /// The stroke stops exactly at the endpoint. This is the default value.
    #[default]
    Butt,
    /// The stroke extends past the endpoint by half the line width.
    Projecting,
    /// A semicircle is drawn around the endpoint.
    Round,
}

impl CapStyle {
    /// Parses a cap style name.
    ///
    /// ```
    /// use paint_primitives::CapStyle;
    ///
    /// assert_eq!(CapStyle::parse("round"), Some(CapStyle::Round));
    /// assert_eq!(CapStyle::parse("square"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.trim() {
            "butt" => Self::Butt,
            "projecting" => Self::Projecting,
            "round" => Self::Round,
            _ => return None,
        })
    }
}

impl fmt::Display for CapStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Butt => "butt",
            Self::Projecting => "projecting",
            Self::Round => "round",
        })
    }
}

/// The shape drawn where two stroke segments meet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum JoinStyle {
    /// Segment edges are extended to a sharp point. This is the default value.
    #[default]
    Miter,
    /// The corner is rounded off.
    Round,
    /// The corner is cut off flat.
    Bevel,
}

impl JoinStyle {
    /// Parses a join style name.
    ///
    /// ```
    /// use paint_primitives::JoinStyle;
    ///
    /// assert_eq!(JoinStyle::parse("bevel"), Some(JoinStyle::Bevel));
    /// assert_eq!(JoinStyle::parse("pointy"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.trim() {
            "miter" => Self::Miter,
            "round" => Self::Round,
            "bevel" => Self::Bevel,
            _ => return None,
        })
    }
}

impl fmt::Display for JoinStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Miter => "miter",
            Self::Round => "round",
            Self::Bevel => "bevel",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{CapStyle, JoinStyle, LineStyle};

    #[test]
    fn linestyle_parse_names_and_shorthand() {
        assert_eq!(LineStyle::parse("solid"), Some(LineStyle::Solid));
        assert_eq!(LineStyle::parse("-"), Some(LineStyle::Solid));
        assert_eq!(LineStyle::parse(" dashed "), Some(LineStyle::Dashed));
        assert_eq!(LineStyle::parse(":"), Some(LineStyle::Dotted));
        assert_eq!(LineStyle::parse("-."), Some(LineStyle::DashDot));
        assert_eq!(LineStyle::parse(""), None);
        assert_eq!(LineStyle::parse("---"), None);
    }

    #[test]
    fn linestyle_dashedness() {
        assert!(!LineStyle::Solid.is_dashed());
        assert!(LineStyle::Dashed.is_dashed());
        assert!(LineStyle::DashDot.is_dashed());
        assert!(LineStyle::Dotted.is_dashed());
    }

    #[test]
    fn shorthand_round_trips_through_parse() {
        for style in [
            LineStyle::Solid,
            LineStyle::Dashed,
            LineStyle::DashDot,
            LineStyle::Dotted,
        ] {
            assert_eq!(LineStyle::parse(style.shorthand()), Some(style));
        }
    }

    #[test]
    fn cap_and_join_parse() {
        assert_eq!(CapStyle::parse("butt"), Some(CapStyle::Butt));
        assert_eq!(CapStyle::parse("projecting"), Some(CapStyle::Projecting));
        assert_eq!(JoinStyle::parse("miter"), Some(JoinStyle::Miter));
        assert_eq!(JoinStyle::parse("round"), Some(JoinStyle::Round));
        assert_eq!(CapStyle::parse("miter"), None);
    }
}
