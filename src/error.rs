use fruit_grader_common::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FruitGraderError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("予測APIのURLが設定されていません。`fruit-grader config --set-api-url URL` または環境変数 FRUIT_API_URL で設定してください")]
    MissingApiUrl,

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// ワークフローのエラー欄の内容（送信失敗の詳細はログのみ）
    #[error("{0}")]
    Prediction(String),

    #[error("HTTPクライアント初期化エラー: {0}")]
    HttpClient(String),

    #[error("入力エラー: {0}")]
    Prompt(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FruitGraderError>;
