//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use fruit_grader::error::FruitGraderError;
use fruit_grader::scanner;
use fruit_grader_common::{ValidationError, GENERIC_SUBMISSION_MESSAGE};
use std::path::Path;

/// 存在しないファイルを読み込んだ場合
#[test]
fn test_load_nonexistent_file() {
    let result = scanner::load_candidate(Path::new("/nonexistent/path/12345.jpg"));
    assert!(matches!(result, Err(FruitGraderError::FileNotFound(_))));
}

/// ディレクトリを指定した場合
#[test]
fn test_load_directory() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let result = scanner::load_candidate(dir.path());
    assert!(matches!(result, Err(FruitGraderError::FileNotFound(_))));
}

/// FruitGraderErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        FruitGraderError::Config("テスト設定エラー".to_string()),
        FruitGraderError::FileNotFound("apple.jpg".to_string()),
        FruitGraderError::HttpClient("TLS初期化失敗".to_string()),
        FruitGraderError::Prompt("入力中断".to_string()),
        FruitGraderError::Prediction(GENERIC_SUBMISSION_MESSAGE.to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// MissingApiUrlエラーのメッセージ確認
#[test]
fn test_missing_api_url_message() {
    let display = format!("{}", FruitGraderError::MissingApiUrl);
    assert!(display.contains("fruit-grader config"));
    assert!(display.contains("FRUIT_API_URL"));
}

/// 検証エラーはユーザー向け文言をそのまま表示
#[test]
fn test_validation_error_conversion() {
    let err: FruitGraderError = ValidationError::TooLarge.into();
    assert!(matches!(err, FruitGraderError::Validation(ValidationError::TooLarge)));
    assert_eq!(err.to_string(), "File size must be less than 5MB.");
}

/// 送信失敗は汎用メッセージのみ
#[test]
fn test_prediction_error_display() {
    let err = FruitGraderError::Prediction(GENERIC_SUBMISSION_MESSAGE.to_string());
    assert_eq!(err.to_string(), "Failed to upload or process the image.");
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: FruitGraderError = io_err.into();

    assert!(matches!(err, FruitGraderError::Io(_)));
    assert!(format!("{}", err).contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: FruitGraderError = json_err.into();

    assert!(matches!(err, FruitGraderError::JsonParse(_)));
}
