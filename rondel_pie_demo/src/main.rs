// Copyright 2026 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pie layout demos for `rondel_pie`.
//!
//! Each demo builds a spec, runs a layout pass with the heuristic measurer,
//! and dumps the geometry as an SVG file next to the working directory.

mod svg;

use std::f64::consts::FRAC_PI_2;

use kurbo::Size;
use peniko::Color;
use rondel_pie::{
    Datum, HeaderLocation, LabelFormat, PieChart, PieLayout, PieSpec, SortOrder,
};
use rondel_text::HeuristicTextMeasurer;

fn main() {
    let measurer = HeuristicTextMeasurer;
    let demos = [
        ("basic", basic_demo()),
        ("donut", donut_demo()),
        ("crowded", crowded_demo()),
    ];

    for (name, spec) in demos {
        let layout = PieLayout::arrange(&spec, &measurer).expect("layout");
        let file = format!("rondel_{name}.svg");
        std::fs::write(&file, svg::layout_to_svg(&layout)).expect("write svg");
        println!("wrote {file}");
    }

    // The stateful wrapper: open a segment and report its pull-out vector.
    let mut chart = PieChart::new(basic_demo(), &measurer).expect("layout");
    chart.open_segment(2);
    if let Some(info) = chart.open_segment_info() {
        println!(
            "open segment: {} ({}%), pull-out ({:.1}, {:.1})",
            info.segment.label, info.segment.percentage, info.pull_out.x, info.pull_out.y
        );
    }
}

fn basic_demo() -> PieSpec {
    PieSpec::new(vec![
        Datum::new("Desktop", 10.0),
        Datum::new("Tablet", 20.0),
        Datum::new("Mobile", 70.0),
    ])
    .with_title("Sessions by device")
    .with_footer("source: access logs, last 30 days")
    .with_start_angle(-FRAC_PI_2)
}

fn donut_demo() -> PieSpec {
    PieSpec::new(vec![
        Datum::new("North", 35.0),
        Datum::new("South", 25.0),
        Datum::new("East", 22.0),
        Datum::new("West", 18.0),
    ])
    .with_title("Regions")
    .with_header_location(HeaderLocation::PieCenter)
    .with_donut_ratio(0.55)
    .with_sort_order(SortOrder::ValueDesc)
    .with_outer_format(LabelFormat::LabelPercentage)
    .with_start_angle(-FRAC_PI_2)
}

/// Many thin segments on one side: exercises the collision sweep.
fn crowded_demo() -> PieSpec {
    let mut data: Vec<Datum> = (1..=9)
        .map(|i| Datum::new(format!("team {i}"), 2.0))
        .collect();
    data.push(Datum::new("everyone else", 82.0));

    PieSpec::new(data)
        .with_canvas_size(Size::new(640.0, 480.0))
        .with_title("Issue volume")
        .with_subtitle("greedy label separation")
        .with_inner_format(LabelFormat::None)
        .with_background(Color::from_rgb8(0xfa, 0xfa, 0xf8))
        .with_start_angle(-FRAC_PI_2)
}
