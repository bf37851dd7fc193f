// Copyright 2026 the Plumage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Decoupled, shareable style objects for plot artists.
//!
//! Plot libraries conventionally hang dozens of getter/setter pairs off every drawable
//! ("artist"). This crate explores the inverse arrangement: a [`Style`] is constructed on its
//! own, attached to one or more artists, and consulted by the artist only at draw time. The
//! benefits this is probing:
//!
//! - styles can be generated from an external source (such as a stylesheet) and applied to
//!   artists by a visitor, rather than being assembled call-by-call on each artist;
//! - artists shrink to their geometry plus a style slot; attributes an artist does not use
//!   are simply ignored by its draw routine;
//! - one `Style` handle shared by several artists restyles all of them at once.
//!
//! [`Style`] is a reference-counted handle: clones are cheap and all clones observe
//! mutations immediately. [`Font`] deliberately does **not** share this property; see its
//! docs for the caveat.
//!
//! Artists with no attached style synthesize one from the process-wide
//! [`defaults`] registry at draw time, then hand it to a [`Renderer`] in place of the
//! conventional per-call style parameters. Rendering itself (tessellation, text layout,
//! rasterization) is entirely the renderer's business; this crate contributes no drawing
//! algorithm of its own.
//!
//! ## Example
//!
//! ```
//! use plumage::artist::Line;
//! use plumage::testing::{DrawCommand, RecordingRenderer};
//! use plumage::{Style, StyleValue};
//!
//! let style = Style::new();
//! style.set_color_str("#484D7A").unwrap();
//! style.set_linewidth(3.2);
//!
//! // Two lines sharing one style: restyling the handle restyles both.
//! let mut sine = Line::new([(0.0, 0.0), (1.0, 1.0)]).with_style(style.clone());
//! let mut cosine = Line::new([(0.0, 1.0), (1.0, 0.0)]).with_style(style.clone());
//! style.set_linewidth(1.0);
//!
//! let mut renderer = RecordingRenderer::new();
//! sine.draw(&mut renderer);
//! cosine.draw(&mut renderer);
//! let widths: Vec<f32> = renderer
//!     .commands()
//!     .iter()
//!     .filter_map(|command| match command {
//!         DrawCommand::Path { style, .. } => Some(style.linewidth()),
//!         _ => None,
//!     })
//!     .collect();
//! assert_eq!(widths, [1.0, 1.0]);
//!
//! // The same style, built from key/value pairs instead.
//! let from_entries = Style::from_entries([
//!     ("color", StyleValue::from("#484D7A")),
//!     ("linewidth", StyleValue::from(3.2)),
//! ])
//! .unwrap();
//! assert_eq!(from_entries.linewidth(), 3.2);
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

pub mod artist;
mod attach;
pub mod defaults;
mod error;
mod font;
mod render;
mod style;
pub mod testing;

#[cfg(test)]
mod tests;

pub use attach::{AttachError, Slot};
pub use error::StyleError;
pub use font::Font;
pub use render::{ClipPath, Renderer};
pub use style::{Style, StyleValue};

pub use paint_primitives as primitives;
pub use peniko;
pub use peniko::kurbo;
