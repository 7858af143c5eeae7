//! レーダーチャートの登録と描画ジオメトリ
//!
//! チャート部品の登録はプロセス全体で1回だけ行う。
//! `register_chart_components` は何度呼んでも同じレジストリを返す。

use crate::presenter::RadarAxis;
use std::sync::OnceLock;

/// チャート部品
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartComponent {
    RadialLinearScale,
    PointElement,
    LineElement,
    Filler,
    Tooltip,
    Legend,
}

/// レーダーチャートのスタイル
#[derive(Debug, Clone, PartialEq)]
pub struct RadarStyle {
    pub suggested_min: f64,
    pub suggested_max: f64,
    pub fill_color: &'static str,
    pub border_color: &'static str,
    pub border_width: f64,
    pub tick_color: &'static str,
}

/// 登録済みのチャート部品とスタイル
#[derive(Debug)]
pub struct ChartRegistry {
    components: Vec<ChartComponent>,
    pub radar: RadarStyle,
}

impl ChartRegistry {
    pub fn components(&self) -> &[ChartComponent] {
        &self.components
    }

    pub fn is_registered(&self, component: ChartComponent) -> bool {
        self.components.contains(&component)
    }
}

static REGISTRY: OnceLock<ChartRegistry> = OnceLock::new();

/// チャート部品を登録（初回のみ実行）
pub fn register_chart_components() -> &'static ChartRegistry {
    REGISTRY.get_or_init(|| {
        tracing::debug!("チャート部品を登録");
        ChartRegistry {
            components: vec![
                ChartComponent::RadialLinearScale,
                ChartComponent::PointElement,
                ChartComponent::LineElement,
                ChartComponent::Filler,
                ChartComponent::Tooltip,
                ChartComponent::Legend,
            ],
            radar: RadarStyle {
                suggested_min: 0.0,
                suggested_max: 100.0,
                fill_color: "rgba(16,185,129,0.2)",
                border_color: "#10b981",
                border_width: 1.0,
                tick_color: "#4B5563",
            },
        }
    })
}

/// 描画領域（中心と半径）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadarGeometry {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
}

impl RadarGeometry {
    /// i番目の軸の角度（真上から時計回り）
    fn angle(&self, index: usize, count: usize) -> f64 {
        -std::f64::consts::FRAC_PI_2 + std::f64::consts::TAU * index as f64 / count as f64
    }

    fn point(&self, index: usize, count: usize, ratio: f64) -> (f64, f64) {
        let angle = self.angle(index, count);
        (
            self.cx + self.radius * ratio * angle.cos(),
            self.cy + self.radius * ratio * angle.sin(),
        )
    }

    /// 各軸の値を頂点座標に変換（値は表示レンジにクランプ）
    pub fn points(&self, series: &[RadarAxis], style: &RadarStyle) -> Vec<(f64, f64)> {
        let span = style.suggested_max - style.suggested_min;
        series
            .iter()
            .enumerate()
            .map(|(i, axis)| {
                let ratio = if span > 0.0 {
                    ((axis.value as f64 - style.suggested_min) / span).clamp(0.0, 1.0)
                } else {
                    0.0
                };
                self.point(i, series.len(), ratio)
            })
            .collect()
    }

    /// 軸線の終点（外周）
    pub fn spokes(&self, count: usize) -> Vec<(f64, f64)> {
        (0..count).map(|i| self.point(i, count, 1.0)).collect()
    }

    /// 目盛りリング（外周に対する割合ごと）の多角形
    pub fn ring(&self, count: usize, ratio: f64) -> Vec<(f64, f64)> {
        (0..count).map(|i| self.point(i, count, ratio)).collect()
    }
}

/// SVG polygonの `points` 属性値
pub fn svg_points(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{:.2},{:.2}", x, y))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presenter::radar_series;
    use crate::types::PredictionResult;

    const GEOMETRY: RadarGeometry = RadarGeometry {
        cx: 100.0,
        cy: 100.0,
        radius: 80.0,
    };

    #[test]
    fn test_registration_is_idempotent() {
        let first = register_chart_components();
        let second = register_chart_components();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first.components().len(), 6);
        assert!(first.is_registered(ChartComponent::RadialLinearScale));
        assert!(first.is_registered(ChartComponent::Filler));
    }

    #[test]
    fn test_radar_style() {
        let style = &register_chart_components().radar;
        assert_eq!(style.suggested_min, 0.0);
        assert_eq!(style.suggested_max, 100.0);
        assert_eq!(style.border_color, "#10b981");
    }

    #[test]
    fn test_first_axis_points_up() {
        let style = &register_chart_components().radar;
        let result = PredictionResult { fresh: 100, rotten: 0, fruit: "apple".into() };
        let points = GEOMETRY.points(&radar_series(&result), style);
        assert_eq!(points.len(), 5);
        let (x, y) = points[0];
        assert!((x - 100.0).abs() < 1e-9);
        assert!((y - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_value_sits_on_center() {
        let style = &register_chart_components().radar;
        let result = PredictionResult { fresh: 0, rotten: 100, fruit: "apple".into() };
        let points = GEOMETRY.points(&radar_series(&result), style);
        let (x, y) = points[0];
        assert!((x - 100.0).abs() < 1e-9);
        assert!((y - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_spokes_on_outer_ring() {
        for (x, y) in GEOMETRY.spokes(5) {
            let distance = ((x - 100.0).powi(2) + (y - 100.0).powi(2)).sqrt();
            assert!((distance - 80.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_svg_points() {
        assert_eq!(svg_points(&[(1.0, 2.5), (3.333, 4.0)]), "1.00,2.50 3.33,4.00");
        assert_eq!(svg_points(&[]), "");
    }
}
