//! レーダーチャート（SVG）

use fruit_grader_common::{
    register_chart_components, radar_series, score_tooltip, svg_points, PredictionResult,
    RadarGeometry,
};
use leptos::prelude::*;

const GEOMETRY: RadarGeometry = RadarGeometry {
    cx: 120.0,
    cy: 120.0,
    radius: 90.0,
};

/// 目盛りリングの位置（外周に対する割合）
const RINGS: [f64; 4] = [0.25, 0.5, 0.75, 1.0];

#[component]
pub fn RadarChart(result: PredictionResult) -> impl IntoView {
    let style = &register_chart_components().radar;
    let series = radar_series(&result);
    let axes = series.len();

    let data_points = svg_points(&GEOMETRY.points(&series, style));
    let rings = RINGS
        .iter()
        .map(|ratio| {
            let points = svg_points(&GEOMETRY.ring(axes, *ratio));
            view! { <polygon points=points fill="none" stroke="#e5e7eb" stroke-width="1" /> }
        })
        .collect_view();
    let spokes = GEOMETRY
        .spokes(axes)
        .into_iter()
        .map(|(x, y)| {
            view! {
                <line
                    x1=GEOMETRY.cx.to_string()
                    y1=GEOMETRY.cy.to_string()
                    x2=format!("{:.2}", x)
                    y2=format!("{:.2}", y)
                    stroke="#e5e7eb"
                    stroke-width="1"
                />
            }
        })
        .collect_view();
    let legend = series
        .iter()
        .map(|axis| {
            view! {
                <li class="radar-axis" title=score_tooltip(axis.value)>
                    <span class="radar-axis-label">{axis.label}</span>
                    <span class="radar-axis-value" style=format!("color: {}", style.tick_color)>
                        {axis.value.to_string()}
                    </span>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="radar">
            <svg viewBox="0 0 240 240" class="radar-svg">
                {rings}
                {spokes}
                <polygon
                    points=data_points
                    fill=style.fill_color
                    stroke=style.border_color
                    stroke-width=style.border_width.to_string()
                />
            </svg>
            <p class="radar-dataset">{result.fruit.clone()}</p>
            <ul class="radar-legend">{legend}</ul>
        </div>
    }
}
