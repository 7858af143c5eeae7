//! 結果表示用の値の導出
//!
//! すべて副作用のない純粋関数。予測結果が変わるたびに再計算する。

use crate::types::PredictionResult;

/// ゲージ半円の全周長（半径90の半円: π × 90）
pub const GAUGE_FULL_ARC: f64 = 282.74;

/// 果物名 → 絵文字
const FRUIT_EMOJIS: &[(&str, &str)] = &[
    ("apple", "🍎"),
    ("banana", "🍌"),
    ("orange", "🍊"),
    ("mango", "🥭"),
];

const DEFAULT_FRUIT_EMOJI: &str = "🍓";

/// 品質区分
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quality {
    Low,
    Medium,
    High,
}

impl Quality {
    /// 鮮度スコアから区分を決める（≤40: Low, ≤75: Medium, それ以外: High）
    pub fn from_fresh(fresh: u8) -> Self {
        if fresh <= 40 {
            Quality::Low
        } else if fresh <= 75 {
            Quality::Medium
        } else {
            Quality::High
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Quality::Low => "Low",
            Quality::Medium => "Medium",
            Quality::High => "High",
        }
    }

    /// バッジの色系統
    pub fn tone(&self) -> &'static str {
        match self {
            Quality::Low => "red",
            Quality::Medium => "yellow",
            Quality::High => "green",
        }
    }
}

pub fn quality_label(fresh: u8) -> &'static str {
    Quality::from_fresh(fresh).label()
}

/// 果物名に対応する絵文字（大文字小文字を区別しない、不明なら🍓）
pub fn fruit_emoji(name: &str) -> &'static str {
    FRUIT_EMOJIS
        .iter()
        .find(|(fruit, _)| fruit.eq_ignore_ascii_case(name))
        .map(|(_, emoji)| *emoji)
        .unwrap_or(DEFAULT_FRUIT_EMOJI)
}

/// 先頭文字のみ大文字にする
pub fn display_fruit_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// レーダーチャートの軸
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RadarAxis {
    pub label: &'static str,
    pub value: u8,
}

pub const RADAR_LABELS: [&str; 5] = ["Freshness", "Ripeness", "Damage", "Color Quality", "Size"];

/// 鮮度スコア1つから5軸の表示値を作る
///
/// Freshness以外の4軸は実測値ではなく、鮮度スコアからの簡易ヒューリスティック:
/// - Ripeness: 鮮度 > 50 なら 80、それ以外 100（熟しすぎ）
/// - Damage: 鮮度 > 50 なら 10、それ以外 100
/// - Color Quality: 鮮度 > 70 なら 90、> 40 なら 70、それ以外 50
/// - Size: 鮮度 > 60 なら 80、それ以外 60
pub fn radar_scores(fresh: u8) -> [u8; 5] {
    let ripeness = if fresh > 50 { 80 } else { 100 };
    let damage = if fresh > 50 { 10 } else { 100 };
    let color_quality = if fresh > 70 {
        90
    } else if fresh > 40 {
        70
    } else {
        50
    };
    let size = if fresh > 60 { 80 } else { 60 };
    [fresh, ripeness, damage, color_quality, size]
}

pub fn radar_series(result: &PredictionResult) -> [RadarAxis; 5] {
    let scores = radar_scores(result.fresh);
    std::array::from_fn(|i| RadarAxis {
        label: RADAR_LABELS[i],
        value: scores[i],
    })
}

/// ゲージの弧の長さ
pub fn gauge_arc_length(fresh: u8) -> f64 {
    (fresh as f64 / 100.0) * GAUGE_FULL_ARC
}

/// SVGの `stroke-dasharray` 値
pub fn gauge_dash_array(fresh: u8) -> String {
    format!("{} {}", gauge_arc_length(fresh), GAUGE_FULL_ARC)
}

/// ゲージ下のラベル（Fresh, Rotten）
///
/// どちらもサービスの値をそのまま表示し、`100 - fresh` で補完しない
pub fn gauge_labels(result: &PredictionResult) -> (String, String) {
    (
        format!("{}% Fresh", result.fresh),
        format!("{}% Rotten", result.rotten),
    )
}

pub fn score_tooltip(value: u8) -> String {
    format!("Score: {}", value)
}
