// Copyright 2026 the Plumage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fundamental paint and line property types.
//!
//! This crate is a lightweight, `no_std`-friendly vocabulary layer shared between style
//! systems and renderer backends. It holds small, typed representations of the "leaf"
//! styling concepts: line patterns, stroke caps and joins, dash patterns, sketch wobble
//! parameters, and font attributes.
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for forward
//!   compatibility.
//!
//! ## Example
//!
//! ```
//! use paint_primitives::{DashPattern, LineStyle};
//!
//! let style = LineStyle::parse("--").unwrap();
//! assert_eq!(style, LineStyle::Dashed);
//! assert!(style.is_dashed());
//!
//! let dashes = DashPattern::new(0.0, [4.0, 1.5]).unwrap();
//! assert_eq!(dashes.segments(), &[4.0, 1.5]);
//! ```

// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;

mod dash;
mod font;
mod line;
mod sketch;

pub use dash::{DashPattern, DashPatternError, DashSegments};
pub use font::{FontFamily, FontStretch, FontStyle, FontVariant, FontWeight};
pub use line::{CapStyle, JoinStyle, LineStyle};
pub use sketch::SketchParams;
