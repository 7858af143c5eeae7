//! 予測APIレスポンスのパーサー
//!
//! レスポンスJSONを `PredictionResult` に変換する。
//! 数値は四捨五入（0.5は切り上げ）し、0〜100の範囲外は不正なレスポンスとして扱う。

use crate::error::SubmissionError;
use crate::types::{PredictionResponse, PredictionResult};

/// 0.5を切り上げる四捨五入
///
/// # Examples
/// ```
/// use fruit_grader_common::round_half_up;
///
/// assert_eq!(round_half_up(82.5), 83.0);
/// assert_eq!(round_half_up(17.4), 17.0);
/// ```
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

fn to_score(field: &str, value: f64) -> Result<u8, SubmissionError> {
    if !value.is_finite() {
        return Err(SubmissionError::BadResponse(format!("{} is not a finite number", field)));
    }
    let rounded = round_half_up(value);
    if !(0.0..=100.0).contains(&rounded) {
        return Err(SubmissionError::BadResponse(format!(
            "{} out of range: {}",
            field, value
        )));
    }
    Ok(rounded as u8)
}

impl PredictionResponse {
    /// 表示用の予測結果に変換
    pub fn into_result(self) -> Result<PredictionResult, SubmissionError> {
        Ok(PredictionResult {
            fresh: to_score("freshness", self.freshness)?,
            rotten: to_score("rotten", self.rotten)?,
            fruit: self.fruit,
        })
    }
}

/// レスポンスボディ（JSON文字列）をパース
///
/// # Arguments
/// * `body` - `{"freshness": number, "rotten": number, "fruit": string}`
///
/// # Returns
/// * `Ok(PredictionResult)` - 丸め済みの結果
/// * `Err(SubmissionError::BadResponse)` - JSON不正・フィールド欠落・範囲外
pub fn parse_prediction(body: &str) -> Result<PredictionResult, SubmissionError> {
    let response: PredictionResponse = serde_json::from_str(body)
        .map_err(|e| SubmissionError::BadResponse(e.to_string()))?;
    response.into_result()
}
