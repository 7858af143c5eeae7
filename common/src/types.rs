//! ワークフローで扱うデータ型
//!
//! ブラウザ(WASM)とCLIで共有される型:
//! - SelectedFile: ユーザーが選択した画像（本体ハンドルはホストごとに異なる）
//! - PredictionResponse: 予測APIのレスポンスボディ
//! - PredictionResult: 画面表示用に丸めた予測結果

use serde::{Deserialize, Serialize};

/// アップロード可能な最大サイズ（5 MiB）
pub const MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

/// multipartのファイルパート名
pub const UPLOAD_FIELD_NAME: &str = "file";

/// 予測エンドポイントのパス
pub const PREDICT_PATH: &str = "/predict";

/// ベースURLから予測エンドポイントのURLを組み立てる
///
/// 末尾のスラッシュは1つにまとめる。URLの妥当性は検証しない。
///
/// # Examples
/// ```
/// use fruit_grader_common::predict_url;
///
/// assert_eq!(predict_url("http://localhost:8000/"), "http://localhost:8000/predict");
/// ```
pub fn predict_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), PREDICT_PATH)
}

/// ユーザーが選択したファイル
///
/// `body` はブラウザでは `web_sys::File`、CLIでは `Vec<u8>`
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile<B> {
    pub name: String,
    /// 宣言されたMIMEタイプ（例: "image/jpeg"）
    pub media_type: String,
    /// バイト数
    pub size: u64,
    pub body: B,
}

impl<B> SelectedFile<B> {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, size: u64, body: B) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            size,
            body,
        }
    }
}

impl SelectedFile<Vec<u8>> {
    /// バイト列からファイルを作る（サイズはバイト列の長さ）
    pub fn from_bytes(
        name: impl Into<String>,
        media_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        let size = bytes.len() as u64;
        Self::new(name, media_type, size, bytes)
    }
}

/// 予測APIのレスポンスボディ
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub freshness: f64,
    pub rotten: f64,
    pub fruit: String,
}

/// 予測結果（表示用）
///
/// `fresh` と `rotten` は個別に丸められるため、合計が100になるとは限らない
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub fresh: u8,
    pub rotten: u8,
    /// APIの値そのまま（大文字小文字も保持）
    pub fruit: String,
}
