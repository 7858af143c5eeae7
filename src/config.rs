use crate::error::{FruitGraderError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// ベースURLを上書きする環境変数
pub const API_URL_ENV: &str = "FRUIT_API_URL";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    pub api_url: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| FruitGraderError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("fruit-grader").join("config.json"))
    }

    /// ベースURLを決定
    ///
    /// 優先順位: コマンドライン引数 > 環境変数 > 設定ファイル
    pub fn resolve_api_url(&self, cli_override: Option<&str>) -> Result<String> {
        let env_value = std::env::var(API_URL_ENV).ok();
        Self::pick_api_url(cli_override, env_value.as_deref(), self.api_url.as_deref())
    }

    fn pick_api_url(
        cli_override: Option<&str>,
        env_value: Option<&str>,
        configured: Option<&str>,
    ) -> Result<String> {
        [cli_override, env_value, configured]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|url| !url.is_empty())
            .map(str::to_string)
            .ok_or(FruitGraderError::MissingApiUrl)
    }

    pub fn set_api_url(&mut self, url: String) -> Result<()> {
        self.api_url = Some(url);
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_api_url_priority() {
        let url = Config::pick_api_url(Some("http://cli"), Some("http://env"), Some("http://file"));
        assert_eq!(url.unwrap(), "http://cli");

        let url = Config::pick_api_url(None, Some("http://env"), Some("http://file"));
        assert_eq!(url.unwrap(), "http://env");

        let url = Config::pick_api_url(None, None, Some("http://file"));
        assert_eq!(url.unwrap(), "http://file");
    }

    #[test]
    fn test_pick_api_url_skips_blank() {
        let url = Config::pick_api_url(Some("  "), Some(""), Some("http://file"));
        assert_eq!(url.unwrap(), "http://file");
    }

    #[test]
    fn test_pick_api_url_missing() {
        let err = Config::pick_api_url(None, None, None).unwrap_err();
        assert!(matches!(err, FruitGraderError::MissingApiUrl));
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("nested").join("config.json");

        let config = Config {
            api_url: Some("http://localhost:8000".to_string()),
        };
        config.save_to(&path).expect("設定保存失敗");

        let loaded = Config::load_from(&path).expect("設定読み込み失敗");
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let loaded = Config::load_from(&dir.path().join("none.json")).unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(FruitGraderError::JsonParse(_))
        ));
    }
}
