//! 予測APIクライアント（reqwest + multipart）

use crate::error::{FruitGraderError, Result};
use fruit_grader_common::{
    parse_prediction, predict_url, PredictionResult, PredictionService, SelectedFile,
    SubmissionError, UPLOAD_FIELD_NAME,
};
use reqwest::multipart::{Form, Part};

/// `POST {base}/predict` にmultipartで画像を送るクライアント
///
/// タイムアウト・リトライは設定しない
pub struct HttpPredictionClient {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpPredictionClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| FruitGraderError::HttpClient(e.to_string()))?;
        Ok(Self {
            http,
            endpoint: predict_url(base_url),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl PredictionService<Vec<u8>> for HttpPredictionClient {
    async fn predict(
        &self,
        file: &SelectedFile<Vec<u8>>,
    ) -> std::result::Result<PredictionResult, SubmissionError> {
        let part = Part::bytes(file.body.clone())
            .file_name(file.name.clone())
            .mime_str(&file.media_type)
            .map_err(|e| SubmissionError::Transport(e.to_string()))?;
        let form = Form::new().part(UPLOAD_FIELD_NAME, part);

        tracing::debug!(endpoint = %self.endpoint, file = %file.name, size = file.size, "画像を送信");

        let response = self
            .http
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| SubmissionError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SubmissionError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(SubmissionError::BadResponse(format!("HTTP {}: {}", status, body)));
        }

        parse_prediction(&body)
    }
}
