//! 予測API連携（fetch + FormData）
//!
//! Content-Typeはブラウザにboundary付きで設定させるため指定しない

use fruit_grader_common::{
    predict_url, PredictionResponse, PredictionResult, PredictionService, SelectedFile,
    SubmissionError, UPLOAD_FIELD_NAME,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, RequestMode, Response};

/// `POST {base}/predict` クライアント
#[derive(Debug, Clone)]
pub struct FetchClient {
    endpoint: String,
}

impl FetchClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            endpoint: predict_url(base_url),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn send(&self, file: &File) -> Result<Response, JsValue> {
        let form = FormData::new()?;
        form.append_with_blob_and_filename(UPLOAD_FIELD_NAME, file, &file.name())?;

        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_mode(RequestMode::Cors);
        opts.set_body(&JsValue::from(form));

        let request = Request::new_with_str_and_init(&self.endpoint, &opts)?;
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("window not available"))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
        resp_value.dyn_into()
    }

    async fn request(
        &self,
        file: &SelectedFile<File>,
    ) -> Result<PredictionResult, SubmissionError> {
        let resp = self
            .send(&file.body)
            .await
            .map_err(|e| SubmissionError::Transport(js_detail(&e)))?;

        if !resp.ok() {
            return Err(SubmissionError::BadResponse(format!("HTTP {}", resp.status())));
        }

        let json_promise = resp
            .json()
            .map_err(|e| SubmissionError::BadResponse(js_detail(&e)))?;
        let json = JsFuture::from(json_promise)
            .await
            .map_err(|e| SubmissionError::BadResponse(js_detail(&e)))?;
        let body: PredictionResponse = serde_wasm_bindgen::from_value(json)
            .map_err(|e| SubmissionError::BadResponse(e.to_string()))?;

        body.into_result()
    }
}

impl PredictionService<File> for FetchClient {
    async fn predict(
        &self,
        file: &SelectedFile<File>,
    ) -> Result<PredictionResult, SubmissionError> {
        let outcome = self.request(file).await;
        if let Err(err) = &outcome {
            gloo::console::error!("Prediction failed", err.to_string());
        }
        outcome
    }
}

fn js_detail(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
