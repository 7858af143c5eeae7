//! 判定結果の端末表示
//!
//! ブラウザのゲージ・バッジ・レーダーチャートに相当する内容をテキストで出力する

use fruit_grader_common::{
    display_fruit_name, fruit_emoji, gauge_arc_length, gauge_labels, radar_series,
    PredictionResult, Quality, GAUGE_FULL_ARC,
};
use serde::Serialize;

/// ゲージバーの幅（文字数）
const GAUGE_WIDTH: usize = 20;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarEntry {
    pub label: &'static str,
    pub value: u8,
}

/// JSON出力用のレポート
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub fruit: String,
    pub emoji: &'static str,
    pub fresh: u8,
    pub rotten: u8,
    pub quality: &'static str,
    pub radar: Vec<RadarEntry>,
}

impl Report {
    pub fn from_result(result: &PredictionResult) -> Self {
        Self {
            fruit: result.fruit.clone(),
            emoji: fruit_emoji(&result.fruit),
            fresh: result.fresh,
            rotten: result.rotten,
            quality: Quality::from_fresh(result.fresh).label(),
            radar: radar_series(result)
                .iter()
                .map(|axis| RadarEntry {
                    label: axis.label,
                    value: axis.value,
                })
                .collect(),
        }
    }
}

/// 0〜100の値を固定幅のバーにする
fn bar(filled_ratio: f64) -> String {
    let filled = (filled_ratio.clamp(0.0, 1.0) * GAUGE_WIDTH as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(GAUGE_WIDTH - filled))
}

pub fn render_text(result: &PredictionResult) -> String {
    let quality = Quality::from_fresh(result.fresh);
    let (fresh_label, rotten_label) = gauge_labels(result);
    let mut lines = vec![
        "Prediction Results".to_string(),
        String::new(),
        format!(
            "{} {}",
            fruit_emoji(&result.fruit),
            display_fruit_name(&result.fruit)
        ),
        format!(
            "{} {} / {}",
            bar(gauge_arc_length(result.fresh) / GAUGE_FULL_ARC),
            fresh_label,
            rotten_label
        ),
        format!("Fruit Quality: {}", quality.label()),
        String::new(),
    ];

    for axis in radar_series(result) {
        lines.push(format!(
            "  {:<14} {} {:>3}",
            axis.label,
            bar(axis.value as f64 / 100.0),
            axis.value
        ));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apple() -> PredictionResult {
        PredictionResult {
            fresh: 83,
            rotten: 17,
            fruit: "apple".to_string(),
        }
    }

    #[test]
    fn test_bar_width() {
        assert_eq!(bar(0.0).chars().count(), GAUGE_WIDTH);
        assert_eq!(bar(1.0), "█".repeat(GAUGE_WIDTH));
        assert_eq!(bar(0.5).chars().filter(|c| *c == '█').count(), 10);
    }

    #[test]
    fn test_render_text() {
        let text = render_text(&apple());
        assert!(text.contains("🍎 Apple"));
        assert!(text.contains("83% Fresh / 17% Rotten"));
        assert!(text.contains("Fruit Quality: High"));
        assert!(text.contains("Color Quality"));
    }

    #[test]
    fn test_render_text_keeps_reported_rotten() {
        let result = PredictionResult {
            fresh: 51,
            rotten: 51,
            fruit: "banana".to_string(),
        };
        assert!(render_text(&result).contains("51% Fresh / 51% Rotten"));
    }

    #[test]
    fn test_report_json() {
        let report = Report::from_result(&apple());
        let json = serde_json::to_value(&report).expect("シリアライズ失敗");
        assert_eq!(json["quality"], "High");
        assert_eq!(json["emoji"], "🍎");
        assert_eq!(json["radar"][2]["label"], "Damage");
        assert_eq!(json["radar"][2]["value"], 10);
    }
}
