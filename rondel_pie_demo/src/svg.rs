// Copyright 2026 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump utilities for `rondel_pie_demo`.

use kurbo::Point;
use peniko::Color;
use rondel_pie::{PieLayout, PlacedText};
use rondel_text::{TextAnchor, TextStyle};

/// Serializes a computed layout as a standalone SVG document.
pub(crate) fn layout_to_svg(layout: &PieLayout) -> String {
    let view = layout.view;
    let mut out = String::new();

    out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
    out.push_str(&format!(
        r#"viewBox="{} {} {} {}" width="{}" height="{}">"#,
        view.x0,
        view.y0,
        view.width(),
        view.height(),
        view.width(),
        view.height()
    ));
    out.push('\n');

    if let Some(background) = layout.background {
        out.push_str(&format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
            view.x0,
            view.y0,
            view.width(),
            view.height(),
            hex(background)
        ));
        out.push('\n');
    }

    for segment in &layout.segments {
        let path = segment.to_path(0.1);
        out.push_str(&format!(r#"<path d="{}" fill="{}""#, path.to_svg(), hex(segment.fill)));
        if let Some(stroke) = layout.segment_stroke {
            out.push_str(&format!(
                r#" stroke="{}" stroke-width="{}""#,
                hex(stroke.color),
                stroke.width
            ));
        }
        out.push_str("/>\n");
    }

    for line in &layout.connectors {
        let points: Vec<String> = line
            .points
            .iter()
            .map(|p| format!("{},{}", p.x, p.y))
            .collect();
        out.push_str(&format!(
            r#"<polyline points="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
            points.join(" "),
            hex(line.color),
            line.width
        ));
        out.push('\n');
    }

    for label in layout.inner_labels.iter().chain(&layout.outer_labels) {
        write_text(
            &mut out,
            &label.text,
            label.anchor,
            label.align,
            &label.style,
            label.color,
        );
    }

    for heading in [&layout.title, &layout.subtitle, &layout.footer]
        .into_iter()
        .flatten()
    {
        let PlacedText {
            text,
            anchor,
            align,
            style,
            color,
        } = heading;
        write_text(&mut out, text, *anchor, *align, style, *color);
    }

    out.push_str("</svg>\n");
    out
}

fn write_text(
    out: &mut String,
    text: &str,
    anchor: Point,
    align: TextAnchor,
    style: &TextStyle,
    color: Color,
) {
    let align = match align {
        TextAnchor::Start => "start",
        TextAnchor::Middle => "middle",
        TextAnchor::End => "end",
    };
    out.push_str(&format!(
        r#"<text x="{}" y="{}" font-size="{}" font-family="{}" dominant-baseline="middle" text-anchor="{}" fill="{}">{}</text>"#,
        anchor.x,
        anchor.y,
        style.font_size,
        style.font_family.as_css_family(),
        align,
        hex(color),
        escape_xml(text)
    ));
    out.push('\n');
}

fn hex(color: Color) -> String {
    let rgba = color.to_rgba8();
    format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
