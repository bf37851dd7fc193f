// Copyright 2026 the Plumage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::cell::RefCell;
use std::rc::Rc;

use paint_primitives::{
    CapStyle, DashPattern, DashSegments, JoinStyle, LineStyle, SketchParams,
};
use peniko::Color;
use peniko::color::Srgb;
use peniko::kurbo::Rect;

use crate::error::StyleError;
use crate::render::ClipPath;

/// The attribute record behind a [`Style`] handle.
#[derive(Clone, Debug, PartialEq)]
struct StyleData {
    color: Color,
    alpha: Option<f32>,
    antialiased: bool,
    linewidth: f32,
    linestyle: LineStyle,
    capstyle: CapStyle,
    joinstyle: JoinStyle,
    dash_offset: f32,
    dashes: Option<DashSegments>,
    clip_rect: Option<Rect>,
    clip_path: Option<ClipPath>,
    snap: Option<bool>,
    sketch: Option<SketchParams>,
    hatch: Option<String>,
    url: Option<String>,
    gid: Option<String>,
}

impl Default for StyleData {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            alpha: None,
            antialiased: true,
            linewidth: 1.0,
            linestyle: LineStyle::Solid,
            capstyle: CapStyle::Butt,
            joinstyle: JoinStyle::Miter,
            dash_offset: 0.0,
            dashes: None,
            clip_rect: None,
            clip_path: None,
            snap: None,
            sketch: None,
            hatch: None,
            url: None,
            gid: None,
        }
    }
}

/// A shareable bundle of graphics-context attributes.
///
/// `Style` is a reference-counted handle: [`clone`](Clone::clone) produces another handle
/// to the *same* attribute record, and a mutation through any handle is immediately visible
/// through all of them. Attaching one style to several artists and editing it afterwards is
/// the intended way to restyle a group at once. Use [`deep_clone`](Style::deep_clone) for an
/// independent copy and [`ptr_eq`](Style::ptr_eq) to test handle identity.
///
/// Setters take `&self`; the record lives behind a [`RefCell`]. The crate is
/// single-threaded by design, so no locking is involved.
///
/// Equality (`==`) compares attribute values, not handle identity.
///
/// ```
/// use plumage::Style;
///
/// let style = Style::new();
/// let alias = style.clone();
/// alias.set_linewidth(2.5);
/// assert_eq!(style.linewidth(), 2.5);
/// assert!(style.ptr_eq(&alias));
/// assert!(!style.ptr_eq(&style.deep_clone()));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Style {
    data: Rc<RefCell<StyleData>>,
}

impl PartialEq for Style {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.data, &other.data) || *self.data.borrow() == *other.data.borrow()
    }
}

impl Style {
    /// Creates a style with the built-in attribute defaults: black, solid, one point wide,
    /// butt caps, miter joins, no clip, no dash.
    ///
    /// These are the underlying context defaults; for styles derived from the process-wide
    /// registry, see [`defaults`](crate::defaults) and the artists' lazy synthesis.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if `self` and `other` are handles to the same attribute record.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }

    /// Creates an independent style carrying the same attribute values.
    pub fn deep_clone(&self) -> Self {
        Self {
            data: Rc::new(RefCell::new(self.data.borrow().clone())),
        }
    }

    /// The foreground color.
    pub fn color(&self) -> Color {
        self.data.borrow().color
    }

    /// Sets the foreground color.
    pub fn set_color(&self, color: Color) {
        self.data.borrow_mut().color = color;
    }

    /// Sets the foreground color from a CSS color string such as `"#484D7A"` or `"rebeccapurple"`.
    pub fn set_color_str(&self, color: &str) -> Result<(), StyleError> {
        self.set_color(color_from_str(color)?);
        Ok(())
    }

    /// The alpha override, if any.
    ///
    /// `None` means the color's own alpha applies unmodified.
    pub fn alpha(&self) -> Option<f32> {
        self.data.borrow().alpha
    }

    /// Sets or clears the alpha override.
    pub fn set_alpha(&self, alpha: Option<f32>) {
        self.data.borrow_mut().alpha = alpha;
    }

    /// Whether strokes are antialiased.
    pub fn antialiased(&self) -> bool {
        self.data.borrow().antialiased
    }

    /// Sets whether strokes are antialiased.
    pub fn set_antialiased(&self, antialiased: bool) {
        self.data.borrow_mut().antialiased = antialiased;
    }

    /// The stroke width in points.
    pub fn linewidth(&self) -> f32 {
        self.data.borrow().linewidth
    }

    /// Sets the stroke width in points.
    pub fn set_linewidth(&self, linewidth: f32) {
        self.data.borrow_mut().linewidth = linewidth;
    }

    /// The stroke pattern.
    pub fn linestyle(&self) -> LineStyle {
        self.data.borrow().linestyle
    }

    /// Sets the stroke pattern.
    pub fn set_linestyle(&self, linestyle: LineStyle) {
        self.data.borrow_mut().linestyle = linestyle;
    }

    /// The stroke end cap.
    pub fn capstyle(&self) -> CapStyle {
        self.data.borrow().capstyle
    }

    /// Sets the stroke end cap.
    pub fn set_capstyle(&self, capstyle: CapStyle) {
        self.data.borrow_mut().capstyle = capstyle;
    }

    /// The stroke corner join.
    pub fn joinstyle(&self) -> JoinStyle {
        self.data.borrow().joinstyle
    }

    /// Sets the stroke corner join.
    pub fn set_joinstyle(&self, joinstyle: JoinStyle) {
        self.data.borrow_mut().joinstyle = joinstyle;
    }

    /// The distance into the dash pattern at which the stroke starts, in points.
    pub fn dash_offset(&self) -> f32 {
        self.data.borrow().dash_offset
    }

    /// Sets the dash offset, independently of the segment list.
    pub fn set_dash_offset(&self, offset: f32) {
        self.data.borrow_mut().dash_offset = offset;
    }

    /// The dash segment list, if one is set.
    pub fn dashes(&self) -> Option<DashSegments> {
        self.data.borrow().dashes.clone()
    }

    /// Sets the dash segment list; `None` restores a solid stroke.
    ///
    /// Every segment must be strictly positive. On rejection the stored dash state is left
    /// untouched.
    pub fn set_dashes(&self, dashes: Option<&[f32]>) -> Result<(), StyleError> {
        let validated = match dashes {
            Some(segments) => {
                let pattern = DashPattern::new(self.dash_offset(), segments.iter().copied())?;
                Some(pattern.segments().iter().copied().collect())
            }
            None => None,
        };
        self.data.borrow_mut().dashes = validated;
        Ok(())
    }

    /// The combined dash state as a single pattern, the shape renderers consume.
    ///
    /// Returns `None` when no segment list is set.
    pub fn dash_pattern(&self) -> Option<DashPattern> {
        let data = self.data.borrow();
        data.dashes.as_ref().map(|segments| {
            DashPattern::new(data.dash_offset, segments.iter().copied())
                .expect("stored dash segments were validated on assignment")
        })
    }

    /// The rectangular clip region, if any, in canvas coordinates.
    pub fn clip_rect(&self) -> Option<Rect> {
        self.data.borrow().clip_rect
    }

    /// Sets or clears the rectangular clip region.
    pub fn set_clip_rect(&self, clip_rect: Option<Rect>) {
        self.data.borrow_mut().clip_rect = clip_rect;
    }

    /// The clip path, if any.
    pub fn clip_path(&self) -> Option<ClipPath> {
        self.data.borrow().clip_path.clone()
    }

    /// Sets or clears the clip path.
    pub fn set_clip_path(&self, clip_path: Option<ClipPath>) {
        self.data.borrow_mut().clip_path = clip_path;
    }

    /// The pixel-snapping preference: `Some(true)` to snap, `Some(false)` to never snap,
    /// `None` to let the renderer decide.
    pub fn snap(&self) -> Option<bool> {
        self.data.borrow().snap
    }

    /// Sets the pixel-snapping preference.
    pub fn set_snap(&self, snap: Option<bool>) {
        self.data.borrow_mut().snap = snap;
    }

    /// The sketch wobble parameters, if the effect is active.
    pub fn sketch(&self) -> Option<SketchParams> {
        self.data.borrow().sketch
    }

    /// Sets or clears the sketch wobble parameters wholesale.
    pub fn set_sketch(&self, sketch: Option<SketchParams>) {
        self.data.borrow_mut().sketch = sketch;
    }

    /// Sets the sketch scale, preserving any current length and randomness.
    ///
    /// If the effect is inactive it is activated with the default length and randomness.
    pub fn set_sketch_scale(&self, scale: f32) {
        let mut data = self.data.borrow_mut();
        match &mut data.sketch {
            Some(params) => params.scale = scale,
            None => data.sketch = Some(SketchParams::new(scale)),
        }
    }

    /// Sets the sketch wavelength, preserving any current scale and randomness.
    ///
    /// If the effect is inactive it is activated with a neutral scale of `1.0`.
    pub fn set_sketch_length(&self, length: f32) {
        let mut data = self.data.borrow_mut();
        match &mut data.sketch {
            Some(params) => params.length = length,
            None => {
                let mut params = SketchParams::new(1.0);
                params.length = length;
                data.sketch = Some(params);
            }
        }
    }

    /// Sets the sketch randomness, preserving any current scale and wavelength.
    ///
    /// If the effect is inactive it is activated with a neutral scale of `1.0`.
    pub fn set_sketch_randomness(&self, randomness: f32) {
        let mut data = self.data.borrow_mut();
        match &mut data.sketch {
            Some(params) => params.randomness = randomness,
            None => {
                let mut params = SketchParams::new(1.0);
                params.randomness = randomness;
                data.sketch = Some(params);
            }
        }
    }

    /// The hatching pattern, if any, e.g. `"///"`.
    pub fn hatch(&self) -> Option<String> {
        self.data.borrow().hatch.clone()
    }

    /// Sets or clears the hatching pattern.
    pub fn set_hatch(&self, hatch: Option<&str>) {
        self.data.borrow_mut().hatch = hatch.map(str::to_owned);
    }

    /// The hyperlink target, if any, for renderers that support links.
    pub fn url(&self) -> Option<String> {
        self.data.borrow().url.clone()
    }

    /// Sets or clears the hyperlink target.
    pub fn set_url(&self, url: Option<&str>) {
        self.data.borrow_mut().url = url.map(str::to_owned);
    }

    /// The group id, if any, for renderers with structured output.
    pub fn gid(&self) -> Option<String> {
        self.data.borrow().gid.clone()
    }

    /// Sets or clears the group id.
    pub fn set_gid(&self, gid: Option<&str>) {
        self.data.borrow_mut().gid = gid.map(str::to_owned);
    }

    /// Builds a style from `(name, value)` pairs, applied in iteration order.
    ///
    /// Unrecognized names and mismatched value kinds are rejected; see [`Style::apply`] for
    /// the recognized set.
    ///
    /// ```
    /// use plumage::{Style, StyleValue};
    ///
    /// let style = Style::from_entries([
    ///     ("color", StyleValue::from("#E98300")),
    ///     ("alpha", StyleValue::from(0.9)),
    ///     ("linewidth", StyleValue::from(3.2)),
    /// ])
    /// .unwrap();
    /// assert_eq!(style.alpha(), Some(0.9));
    /// assert!(Style::from_entries([("chartreuse", StyleValue::from(1.0))]).is_err());
    /// ```
    pub fn from_entries<'a, I>(entries: I) -> Result<Self, StyleError>
    where
        I: IntoIterator<Item = (&'a str, StyleValue)>,
    {
        let style = Self::new();
        for (name, value) in entries {
            style.apply(name, value)?;
        }
        Ok(style)
    }

    /// Assigns one named property from a dynamically-typed value.
    ///
    /// Recognized names: `color`, `alpha`, `antialiased`, `linewidth`, `linestyle`,
    /// `capstyle`, `joinstyle`, `dashes`, `dash_offset`, `snap`, `hatch`, `url`, `gid`,
    /// `sketch_scale`, `sketch_length`, `sketch_randomness`. Anything else fails with
    /// [`StyleError::UnknownProperty`], and a value of the wrong kind fails with
    /// [`StyleError::InvalidValue`]; either way the style is left unchanged.
    pub fn apply(&self, name: &str, value: StyleValue) -> Result<(), StyleError> {
        match name {
            "color" => match value {
                StyleValue::Color(color) => {
                    self.set_color(color);
                    Ok(())
                }
                StyleValue::Str(s) => self.set_color_str(&s),
                other => Err(invalid(name, "a color or color string", &other)),
            },
            "alpha" => {
                self.set_alpha(Some(float(name, value)?));
                Ok(())
            }
            "antialiased" => {
                self.set_antialiased(boolean(name, value)?);
                Ok(())
            }
            "linewidth" => {
                self.set_linewidth(float(name, value)?);
                Ok(())
            }
            "linestyle" => match value {
                StyleValue::LineStyle(linestyle) => {
                    self.set_linestyle(linestyle);
                    Ok(())
                }
                StyleValue::Str(ref s) => match LineStyle::parse(s) {
                    Some(linestyle) => {
                        self.set_linestyle(linestyle);
                        Ok(())
                    }
                    None => Err(invalid(name, "a line style name or shorthand", &value)),
                },
                other => Err(invalid(name, "a line style name or shorthand", &other)),
            },
            "capstyle" => match value {
                StyleValue::Cap(capstyle) => {
                    self.set_capstyle(capstyle);
                    Ok(())
                }
                StyleValue::Str(ref s) => match CapStyle::parse(s) {
                    Some(capstyle) => {
                        self.set_capstyle(capstyle);
                        Ok(())
                    }
                    None => Err(invalid(name, "a cap style name", &value)),
                },
                other => Err(invalid(name, "a cap style name", &other)),
            },
            "joinstyle" => match value {
                StyleValue::Join(joinstyle) => {
                    self.set_joinstyle(joinstyle);
                    Ok(())
                }
                StyleValue::Str(ref s) => match JoinStyle::parse(s) {
                    Some(joinstyle) => {
                        self.set_joinstyle(joinstyle);
                        Ok(())
                    }
                    None => Err(invalid(name, "a join style name", &value)),
                },
                other => Err(invalid(name, "a join style name", &other)),
            },
            "dashes" => match value {
                StyleValue::Floats(segments) => self.set_dashes(Some(&segments)),
                other => Err(invalid(name, "a list of segment lengths", &other)),
            },
            "dash_offset" => {
                self.set_dash_offset(float(name, value)?);
                Ok(())
            }
            "snap" => {
                self.set_snap(Some(boolean(name, value)?));
                Ok(())
            }
            "hatch" => {
                self.set_hatch(Some(&string(name, value)?));
                Ok(())
            }
            "url" => {
                self.set_url(Some(&string(name, value)?));
                Ok(())
            }
            "gid" => {
                self.set_gid(Some(&string(name, value)?));
                Ok(())
            }
            "sketch_scale" => {
                self.set_sketch_scale(float(name, value)?);
                Ok(())
            }
            "sketch_length" => {
                self.set_sketch_length(float(name, value)?);
                Ok(())
            }
            "sketch_randomness" => {
                self.set_sketch_randomness(float(name, value)?);
                Ok(())
            }
            _ => Err(StyleError::UnknownProperty {
                name: name.to_owned(),
            }),
        }
    }
}

/// A dynamically-typed property value for [`Style::apply`] and [`Style::from_entries`].
#[derive(Clone, Debug, PartialEq)]
pub enum StyleValue {
    /// A numeric value.
    Float(f32),
    /// A boolean value.
    Bool(bool),
    /// A string value; color and enum-valued properties parse it.
    Str(String),
    /// A color value.
    Color(Color),
    /// A list of numbers, for `dashes`.
    Floats(Vec<f32>),
    /// A line style.
    LineStyle(LineStyle),
    /// A cap style.
    Cap(CapStyle),
    /// A join style.
    Join(JoinStyle),
}

impl StyleValue {
    /// A short description of the value's kind, for error messages.
    fn kind(&self) -> &'static str {
        match self {
            Self::Float(_) => "a number",
            Self::Bool(_) => "a boolean",
            Self::Str(_) => "a string",
            Self::Color(_) => "a color",
            Self::Floats(_) => "a list of numbers",
            Self::LineStyle(_) => "a line style",
            Self::Cap(_) => "a cap style",
            Self::Join(_) => "a join style",
        }
    }
}

impl From<f32> for StyleValue {
    fn from(value: f32) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for StyleValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<Color> for StyleValue {
    fn from(value: Color) -> Self {
        Self::Color(value)
    }
}

impl From<Vec<f32>> for StyleValue {
    fn from(value: Vec<f32>) -> Self {
        Self::Floats(value)
    }
}

impl From<&[f32]> for StyleValue {
    fn from(value: &[f32]) -> Self {
        Self::Floats(value.to_vec())
    }
}

impl From<LineStyle> for StyleValue {
    fn from(value: LineStyle) -> Self {
        Self::LineStyle(value)
    }
}

impl From<CapStyle> for StyleValue {
    fn from(value: CapStyle) -> Self {
        Self::Cap(value)
    }
}

impl From<JoinStyle> for StyleValue {
    fn from(value: JoinStyle) -> Self {
        Self::Join(value)
    }
}

/// Parses a CSS color string into the crate's color type.
pub(crate) fn color_from_str(s: &str) -> Result<Color, StyleError> {
    peniko::color::parse_color(s)
        .map(|color| color.to_alpha_color::<Srgb>())
        .map_err(|_| StyleError::InvalidColor {
            input: s.to_owned(),
        })
}

fn invalid(name: &str, expected: &'static str, found: &StyleValue) -> StyleError {
    StyleError::InvalidValue {
        name: name.to_owned(),
        expected,
        found: found.kind().to_owned(),
    }
}

fn float(name: &str, value: StyleValue) -> Result<f32, StyleError> {
    match value {
        StyleValue::Float(v) => Ok(v),
        other => Err(invalid(name, "a number", &other)),
    }
}

fn boolean(name: &str, value: StyleValue) -> Result<bool, StyleError> {
    match value {
        StyleValue::Bool(v) => Ok(v),
        other => Err(invalid(name, "a boolean", &other)),
    }
}

fn string(name: &str, value: StyleValue) -> Result<String, StyleError> {
    match value {
        StyleValue::Str(v) => Ok(v),
        other => Err(invalid(name, "a string", &other)),
    }
}
