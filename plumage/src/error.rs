// Copyright 2026 the Plumage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use paint_primitives::DashPatternError;

/// Errors produced by [`Style`](crate::Style) setters and [`Style::from_entries`].
///
/// All failures are immediate and local to the call that caused them; the style's stored
/// state is never mutated by a failing assignment.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum StyleError {
    /// A dash segment was zero, negative, or NaN.
    InvalidDash(DashPatternError),
    /// A property name outside the recognized set was supplied.
    UnknownProperty {
        /// The offending key.
        name: String,
    },
    /// A recognized property was given a value of the wrong kind.
    InvalidValue {
        /// The property being assigned.
        name: String,
        /// What the property accepts.
        expected: &'static str,
        /// A description of what was supplied.
        found: String,
    },
    /// A color string could not be parsed.
    InvalidColor {
        /// The rejected input.
        input: String,
    },
}

impl fmt::Display for StyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDash(err) => err.fmt(f),
            Self::UnknownProperty { name } => {
                write!(f, "`{name}` is not a recognized style property")
            }
            Self::InvalidValue {
                name,
                expected,
                found,
            } => {
                write!(f, "property `{name}` expects {expected}, got {found}")
            }
            Self::InvalidColor { input } => {
                write!(f, "`{input}` is not a recognized color")
            }
        }
    }
}

impl core::error::Error for StyleError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::InvalidDash(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DashPatternError> for StyleError {
    fn from(err: DashPatternError) -> Self {
        Self::InvalidDash(err)
    }
}
