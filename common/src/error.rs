//! エラー型定義

use thiserror::Error;

/// 送信失敗時にユーザーへ表示する唯一のメッセージ
///
/// 内部エラーの詳細はログにのみ出力し、画面には出さない
pub const GENERIC_SUBMISSION_MESSAGE: &str = "Failed to upload or process the image.";

/// ファイル選択時の検証エラー
///
/// Display文字列はそのままユーザーに表示される
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Only image files are allowed.")]
    NotAnImage,

    #[error("File size must be less than 5MB.")]
    TooLarge,
}

/// 予測APIへの送信エラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    /// 接続失敗・リクエスト構築失敗など
    #[error("transport error: {0}")]
    Transport(String),

    /// 2xx以外のステータス、または不正なレスポンスボディ
    #[error("bad response: {0}")]
    BadResponse(String),
}

impl SubmissionError {
    /// ユーザー向けメッセージ（常に汎用メッセージ）
    pub fn user_message(&self) -> &'static str {
        GENERIC_SUBMISSION_MESSAGE
    }
}
