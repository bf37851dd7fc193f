// Copyright 2026 the Plumage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use smallvec::SmallVec;

/// Segment storage for dash patterns.
///
/// Four segments cover the common on/off/on/off form without spilling to the heap.
pub type DashSegments = SmallVec<[f32; 4]>;

/// A dash pattern: a starting offset plus alternating on/off segment lengths, in points.
///
/// An empty segment list renders as a solid stroke. Every segment must be strictly
/// positive; the constructor enforces this, so a held `DashPattern` is always valid.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct DashPattern {
    offset: f32,
    segments: DashSegments,
}

impl DashPattern {
    /// Creates a dash pattern, rejecting segments that are not strictly positive.
    ///
    /// ```
    /// use paint_primitives::DashPattern;
    ///
    /// assert!(DashPattern::new(0.0, [4.0, 1.5]).is_ok());
    /// let err = DashPattern::new(0.0, [2.0, -1.0]).unwrap_err();
    /// assert_eq!(err.index(), 1);
    /// ```
    pub fn new(
        offset: f32,
        segments: impl IntoIterator<Item = f32>,
    ) -> Result<Self, DashPatternError> {
        let segments: DashSegments = segments.into_iter().collect();
        for (index, &value) in segments.iter().enumerate() {
            // `!(value > 0.0)` also rejects NaN.
            if !(value > 0.0) {
                return Err(DashPatternError { index, value });
            }
        }
        Ok(Self { offset, segments })
    }

    /// The distance into the pattern at which the stroke starts, in points.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Replaces the starting offset, leaving the segments untouched.
    pub fn set_offset(&mut self, offset: f32) {
        self.offset = offset;
    }

    /// The alternating on/off segment lengths, in points.
    pub fn segments(&self) -> &[f32] {
        &self.segments
    }

    /// Returns `true` if the pattern has no segments and renders as a solid stroke.
    pub fn is_solid(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Error produced when a dash segment is zero, negative, or NaN.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DashPatternError {
    index: usize,
    value: f32,
}

impl DashPatternError {
    /// The position of the offending segment in the supplied list.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The rejected segment value.
    pub fn value(&self) -> f32 {
        self.value
    }
}

impl fmt::Display for DashPatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "dash segment {} is {}; all dash lengths must be positive",
            self.index, self.value
        )
    }
}

impl core::error::Error for DashPatternError {}

#[cfg(test)]
mod tests {
    use super::DashPattern;

    #[test]
    fn valid_patterns_are_accepted() {
        let pattern = DashPattern::new(1.0, [6.0, 2.0, 1.0, 2.0]).unwrap();
        assert_eq!(pattern.offset(), 1.0);
        assert_eq!(pattern.segments(), &[6.0, 2.0, 1.0, 2.0]);
        assert!(!pattern.is_solid());
    }

    #[test]
    fn empty_pattern_is_solid() {
        let pattern = DashPattern::new(0.0, []).unwrap();
        assert!(pattern.is_solid());
    }

    #[test]
    fn non_positive_segments_are_rejected() {
        let err = DashPattern::new(0.0, [2.0, -1.0]).unwrap_err();
        assert_eq!(err.index(), 1);
        assert_eq!(err.value(), -1.0);

        let err = DashPattern::new(0.0, [0.0]).unwrap_err();
        assert_eq!(err.index(), 0);

        assert!(DashPattern::new(0.0, [1.0, f32::NAN]).is_err());
    }

    #[test]
    fn offset_may_be_any_value() {
        // Negative offsets shift the pattern backwards; only segments are constrained.
        assert!(DashPattern::new(-3.0, [1.0]).is_ok());
    }
}
