// Copyright 2026 the Plumage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Parameters of the hand-drawn "sketch" wobble applied to a stroke.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SketchParams {
    /// Amplitude of the wobble perpendicular to the stroke, in points.
    pub scale: f32,
    /// Wavelength of the wobble along the stroke, in points.
    pub length: f32,
    /// Random seed factor shifting the wobble phase.
    pub randomness: f32,
}

impl SketchParams {
    /// Wavelength used when only a scale is given.
    pub const DEFAULT_LENGTH: f32 = 128.0;

    /// Randomness used when only a scale is given.
    pub const DEFAULT_RANDOMNESS: f32 = 16.0;

    /// Creates sketch parameters with the default length and randomness.
    ///
    /// ```
    /// use paint_primitives::SketchParams;
    ///
    /// let params = SketchParams::new(2.0);
    /// assert_eq!(params.scale, 2.0);
    /// assert_eq!(params.length, SketchParams::DEFAULT_LENGTH);
    /// ```
    pub fn new(scale: f32) -> Self {
        Self {
            scale,
            length: Self::DEFAULT_LENGTH,
            randomness: Self::DEFAULT_RANDOMNESS,
        }
    }
}
