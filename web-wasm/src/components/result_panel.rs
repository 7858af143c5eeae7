//! 判定結果パネル
//!
//! ゲージ・品質バッジ・果物バッジ・レーダーチャート

use crate::components::radar_chart::RadarChart;
use fruit_grader_common::{
    display_fruit_name, fruit_emoji, gauge_dash_array, gauge_labels, PredictionResult, Quality,
};
use leptos::prelude::*;

/// ゲージの半円（半径90）
const GAUGE_PATH: &str = "M10,100 A90,90 0 0,1 190,100";

const ESTIMATION_TOOLTIP: &str = "Based on visual texture, color, and size using machine learning.";

#[component]
pub fn FreshnessGauge(result: PredictionResult) -> impl IntoView {
    let (fresh_label, rotten_label) = gauge_labels(&result);

    view! {
        <div class="gauge">
            <svg viewBox="0 0 200 100" class="gauge-svg">
                <path d=GAUGE_PATH fill="none" stroke="#e5e7eb" stroke-width="16" />
                <path
                    d=GAUGE_PATH
                    fill="none"
                    stroke="url(#freshGradient)"
                    stroke-width="16"
                    stroke-dasharray=gauge_dash_array(result.fresh)
                    stroke-linecap="round"
                />
                <defs>
                    <linearGradient id="freshGradient" x1="0%" y1="0%" x2="100%" y2="0%">
                        <stop offset="0%" stop-color="#6ee7b7" />
                        <stop offset="100%" stop-color="#10b981" />
                    </linearGradient>
                </defs>
            </svg>
            <div class="gauge-labels">
                <div class="gauge-fresh">{fresh_label}</div>
                <div class="gauge-rotten">{rotten_label}</div>
            </div>
        </div>
    }
}

#[component]
pub fn ResultPanel(result: PredictionResult) -> impl IntoView {
    let quality = Quality::from_fresh(result.fresh);

    view! {
        <div class="result-panel">
            <h2>"Prediction Results"</h2>
            <p class="text-muted tooltip" title=ESTIMATION_TOOLTIP>
                "This estimation is based on visual features."
            </p>

            <FreshnessGauge result=result.clone() />

            <div class=format!("badge badge-{}", quality.tone())>
                {format!("Fruit Quality: {}", quality.label())}
            </div>

            <div class="badge badge-fruit">
                <span>{fruit_emoji(&result.fruit)}</span>
                <span>{display_fruit_name(&result.fruit)}</span>
            </div>

            <RadarChart result=result.clone() />
        </div>
    }
}

/// 結果がまだない時の案内
#[component]
pub fn EmptyResult() -> impl IntoView {
    view! {
        <div class="result-empty">
            <div class="upload-icon">"🍓"</div>
            <h3>"Start by uploading a fruit image"</h3>
            <p class="text-muted">"Results will appear here once uploaded."</p>
        </div>
    }
}
