// Copyright 2026 the Plumage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Crate-level behavioral tests for the style/artist protocol.

use paint_primitives::{CapStyle, JoinStyle, LineStyle, SketchParams};
use peniko::Color;
use peniko::kurbo::{Point, Rect, Size};

use crate::artist::{Line, Text};
use crate::defaults::{self, RenderDefaults};
use crate::error::StyleError;
use crate::testing::{DrawCommand, RecordingRenderer};
use crate::{Style, StyleValue};

fn sample_line() -> Line {
    Line::new([(0.0, 0.0), (1.0, 1.0), (2.0, 0.5)])
}

/// The style snapshot of the only `draw_path` call in `renderer`.
fn only_path_style(renderer: &RecordingRenderer) -> Style {
    let mut styles = renderer.commands().iter().filter_map(|command| {
        if let DrawCommand::Path { style, .. } = command {
            Some(style.clone())
        } else {
            None
        }
    });
    let style = styles.next().expect("expected one draw_path call");
    assert!(styles.next().is_none(), "expected exactly one draw_path call");
    style
}

#[test]
fn style_round_trips_by_identity() {
    let style = Style::new();
    let mut line = sample_line();
    line.set_style(Some(style.clone()));
    let read_back = line.style().expect("style should be attached");
    assert!(style.ptr_eq(read_back), "read-back must be the same handle, not a copy");
}

#[test]
fn shared_style_mutation_is_visible_through_all_holders() {
    let style = Style::new();
    let line = sample_line().with_style(style.clone());
    let text = Text::new((0.0, 0.0), "label").with_style(style.clone());

    style.set_linewidth(4.0);
    style.set_capstyle(CapStyle::Round);

    let through_line = line.style().unwrap();
    let through_text = text.style().unwrap();
    assert_eq!(through_line.linewidth(), 4.0);
    assert_eq!(through_text.linewidth(), 4.0);
    assert_eq!(through_line.capstyle(), CapStyle::Round);

    // And mutation through one artist's handle is visible through the other.
    through_line.set_linewidth(0.5);
    assert_eq!(through_text.linewidth(), 0.5);
}

#[test]
fn mismatched_attachment_fails_and_preserves_previous_value() {
    let style = Style::new();
    let mut line = sample_line();
    line.set_style(Some(style.clone()));

    let err = line
        .set_style_any(Some(Box::new("not a style")))
        .unwrap_err();
    assert_eq!(err.attribute(), "style");
    assert!(err.expected().contains("Style"));
    assert!(err.to_string().contains("style"));

    let kept = line.style().expect("previous style must survive the failed assignment");
    assert!(style.ptr_eq(kept));
}

#[test]
fn from_entries_applies_each_pair() {
    let style = Style::from_entries([
        ("color", StyleValue::from("#E98300")),
        ("alpha", StyleValue::from(0.9)),
        ("linewidth", StyleValue::from(3.2)),
    ])
    .unwrap();

    assert_eq!(
        style.color().to_rgba8(),
        Color::from_rgb8(0xE9, 0x83, 0x00).to_rgba8()
    );
    assert_eq!(style.alpha(), Some(0.9));
    assert_eq!(style.linewidth(), 3.2);
}

#[test]
fn from_entries_rejects_unknown_keys() {
    let err = Style::from_entries([("linewdith", StyleValue::from(3.2))]).unwrap_err();
    assert_eq!(
        err,
        StyleError::UnknownProperty {
            name: "linewdith".to_owned()
        }
    );
}

#[test]
fn from_entries_rejects_mismatched_value_kinds() {
    let err = Style::from_entries([("linewidth", StyleValue::from("wide"))]).unwrap_err();
    match err {
        StyleError::InvalidValue { name, found, .. } => {
            assert_eq!(name, "linewidth");
            assert_eq!(found, "a string");
        }
        other => panic!("expected InvalidValue, got {other:?}"),
    }

    let err = Style::from_entries([("color", StyleValue::from("#GGGGGG"))]).unwrap_err();
    assert!(matches!(err, StyleError::InvalidColor { .. }));
}

#[test]
fn from_entries_parses_enum_valued_strings() {
    let style = Style::from_entries([
        ("linestyle", StyleValue::from("--")),
        ("capstyle", StyleValue::from("round")),
        ("joinstyle", StyleValue::from("bevel")),
    ])
    .unwrap();
    assert_eq!(style.linestyle(), LineStyle::Dashed);
    assert_eq!(style.capstyle(), CapStyle::Round);
    assert_eq!(style.joinstyle(), JoinStyle::Bevel);
}

#[test]
fn non_positive_dash_segments_are_rejected_without_mutation() {
    let style = Style::new();
    let err = style.set_dashes(Some(&[2.0, -1.0])).unwrap_err();
    assert!(matches!(err, StyleError::InvalidDash(_)));
    assert!(style.dashes().is_none(), "failed assignment must not store anything");

    style.set_dashes(Some(&[4.0, 1.0])).unwrap();
    assert!(style.set_dashes(Some(&[0.0])).is_err());
    let kept = style.dashes().expect("previous dashes must survive");
    assert_eq!(kept.as_slice(), &[4.0, 1.0]);
}

#[test]
fn dash_offset_and_dashes_are_independent() {
    let style = Style::new();
    style.set_dash_offset(2.5);
    assert!(style.dashes().is_none());
    assert!(style.dash_pattern().is_none());

    style.set_dashes(Some(&[6.0, 2.0])).unwrap();
    let pattern = style.dash_pattern().unwrap();
    assert_eq!(pattern.offset(), 2.5);
    assert_eq!(pattern.segments(), &[6.0, 2.0]);

    style.set_dashes(None).unwrap();
    assert_eq!(style.dash_offset(), 2.5);
}

#[test]
fn default_style_reads_registry_at_draw_time() {
    // The artist is constructed before the override: synthesis must still see it.
    let mut line = sample_line();

    let overridden = RenderDefaults {
        linewidth: 4.5,
        color: Color::from_rgb8(0xFF, 0x00, 0x00),
        ..RenderDefaults::default()
    };
    let _guard = defaults::scoped(overridden);

    let mut renderer = RecordingRenderer::new();
    line.draw(&mut renderer);

    let style = only_path_style(&renderer);
    assert_eq!(style.linewidth(), 4.5);
    assert_eq!(
        style.color().to_rgba8(),
        Color::from_rgb8(0xFF, 0x00, 0x00).to_rgba8()
    );
    assert_eq!(style.linestyle(), LineStyle::Solid);

    // The synthesized style is attached for subsequent draws.
    assert!(line.style().is_some());
}

#[test]
fn solid_default_linestyle_selects_solid_cap_and_join() {
    let overridden = RenderDefaults {
        linestyle: LineStyle::Solid,
        solid_capstyle: CapStyle::Projecting,
        solid_joinstyle: JoinStyle::Round,
        dash_capstyle: CapStyle::Butt,
        dash_joinstyle: JoinStyle::Miter,
        ..RenderDefaults::default()
    };
    let _guard = defaults::scoped(overridden);

    let mut renderer = RecordingRenderer::new();
    sample_line().draw(&mut renderer);

    let style = only_path_style(&renderer);
    assert_eq!(style.capstyle(), CapStyle::Projecting);
    assert_eq!(style.joinstyle(), JoinStyle::Round);
}

#[test]
fn dashed_default_linestyle_selects_dash_cap_and_join() {
    let overridden = RenderDefaults {
        linestyle: LineStyle::DashDot,
        solid_capstyle: CapStyle::Projecting,
        solid_joinstyle: JoinStyle::Round,
        dash_capstyle: CapStyle::Round,
        dash_joinstyle: JoinStyle::Bevel,
        ..RenderDefaults::default()
    };
    let _guard = defaults::scoped(overridden);

    let mut renderer = RecordingRenderer::new();
    sample_line().draw(&mut renderer);

    let style = only_path_style(&renderer);
    assert_eq!(style.linestyle(), LineStyle::DashDot);
    assert_eq!(style.capstyle(), CapStyle::Round);
    assert_eq!(style.joinstyle(), JoinStyle::Bevel);
}

#[test]
fn sketch_setters_preserve_sibling_components() {
    let style = Style::new();
    style.set_sketch_scale(2.0);
    style.set_sketch_length(64.0);
    style.set_sketch_randomness(3.0);

    assert_eq!(
        style.sketch(),
        Some(SketchParams {
            scale: 2.0,
            length: 64.0,
            randomness: 3.0,
        })
    );

    // Re-setting one component must not reset the others.
    style.set_sketch_scale(5.0);
    let sketch = style.sketch().unwrap();
    assert_eq!(sketch.length, 64.0);
    assert_eq!(sketch.randomness, 3.0);
}

#[test]
fn invisible_artists_draw_nothing() {
    let _guard = defaults::scoped(RenderDefaults::default());
    let mut renderer = RecordingRenderer::new();

    let mut line = sample_line();
    line.set_visible(false);
    line.draw(&mut renderer);

    let mut text = Text::new((0.0, 0.0), "hidden");
    text.set_visible(false);
    text.draw(&mut renderer);

    assert!(renderer.commands().is_empty());
    // Invisible artists must not even synthesize a style.
    assert!(line.style().is_none());
}

#[test]
fn clip_resolution_prefers_the_style_clip() {
    let _guard = defaults::scoped(RenderDefaults::default());

    // Artist clip flows onto a style that has none.
    let style = Style::new();
    let mut line = sample_line().with_style(style.clone());
    let artist_clip = Rect::new(0.0, 0.0, 10.0, 10.0);
    line.set_clip_rect(Some(artist_clip));
    line.draw(&mut RecordingRenderer::new());
    assert_eq!(style.clip_rect(), Some(artist_clip));

    // A style that already clips keeps its own region.
    let style = Style::new();
    let style_clip = Rect::new(1.0, 1.0, 2.0, 2.0);
    style.set_clip_rect(Some(style_clip));
    let mut line = sample_line().with_style(style.clone());
    line.set_clip_rect(Some(artist_clip));
    line.draw(&mut RecordingRenderer::new());
    assert_eq!(style.clip_rect(), Some(style_clip));
}

#[test]
fn line_draw_brackets_the_path_in_a_group() {
    let _guard = defaults::scoped(RenderDefaults::default());
    let mut renderer = RecordingRenderer::new();

    let mut line = sample_line();
    line.set_gid(Some("trace-7"));
    line.draw(&mut renderer);

    let commands = renderer.commands();
    assert_eq!(commands.len(), 3);
    assert!(matches!(
        &commands[0],
        DrawCommand::OpenGroup { name, gid } if name == "line" && gid.as_deref() == Some("trace-7")
    ));
    assert!(matches!(&commands[1], DrawCommand::Path { .. }));
    assert!(matches!(
        &commands[2],
        DrawCommand::CloseGroup { name } if name == "line"
    ));
}

#[test]
fn text_draw_synthesizes_style_and_font_from_defaults() {
    let overridden = RenderDefaults {
        font_size: 14.0,
        ..RenderDefaults::default()
    };
    let _guard = defaults::scoped(overridden);

    let mut renderer = RecordingRenderer::new();
    let mut text = Text::new((3.0, 4.0), "caption");
    text.draw(&mut renderer);

    let command = renderer
        .commands()
        .iter()
        .find(|command| matches!(command, DrawCommand::Text { .. }))
        .expect("expected a draw_text call");
    let DrawCommand::Text {
        style,
        font,
        position,
        text: drawn,
        angle,
    } = command
    else {
        unreachable!()
    };
    assert_eq!(style.linewidth(), RenderDefaults::default().linewidth);
    assert_eq!(font.size(), 14.0);
    assert_eq!(*position, Point::new(3.0, 4.0));
    assert_eq!(drawn, "caption");
    assert_eq!(*angle, 0.0);
}

#[test]
fn empty_artists_skip_drawing() {
    let _guard = defaults::scoped(RenderDefaults::default());
    let mut renderer = RecordingRenderer::new();

    Line::new(Vec::<Point>::new()).draw(&mut renderer);
    Text::new((0.0, 0.0), "").draw(&mut renderer);

    assert!(renderer.commands().is_empty());
}

#[test]
fn recording_renderer_reports_its_canvas_size() {
    use crate::render::Renderer;

    let renderer = RecordingRenderer::with_size(Size::new(320.0, 200.0));
    assert_eq!(renderer.canvas_size(), Size::new(320.0, 200.0));
}

#[test]
fn value_equality_differs_from_identity() {
    let a = Style::new();
    let b = Style::new();
    assert_eq!(a, b);
    assert!(!a.ptr_eq(&b));

    b.set_linewidth(9.0);
    assert_ne!(a, b);

    let alias = a.clone();
    assert!(a.ptr_eq(&alias));
}
