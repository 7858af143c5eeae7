//! ビルド時設定

/// 予測APIのベースURL（ビルド時の環境変数 `FRUIT_API_URL`）
pub const API_BASE_URL: &str = match option_env!("FRUIT_API_URL") {
    Some(url) => url,
    None => "http://localhost:8000",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_base_url_is_set() {
        assert!(!API_BASE_URL.is_empty());
        assert!(fruit_grader_common::predict_url(API_BASE_URL).ends_with("/predict"));
    }
}
