use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fruit-grader")]
#[command(about = "果物画像の鮮度判定クライアント", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 画像を1枚送信して判定結果を表示
    Predict {
        /// 果物画像のパス
        #[arg(required = true)]
        image: PathBuf,

        /// 予測APIのベースURL（設定ファイル・環境変数より優先）
        #[arg(long)]
        api_url: Option<String>,

        /// 出力形式 (text/json)
        #[arg(short, long, default_value = "text")]
        format: ReportFormat,
    },

    /// 対話モード（画像選択・送信・リセットを繰り返す）
    Interactive {
        /// 予測APIのベースURL
        #[arg(long)]
        api_url: Option<String>,
    },

    /// 設定を表示/編集
    Config {
        /// 予測APIのベースURLを設定
        #[arg(long)]
        set_api_url: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            _ => Err(format!("Unknown format: {}. Use text or json", s)),
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "text"),
            ReportFormat::Json => write!(f, "json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_format_from_str() {
        assert_eq!("text".parse::<ReportFormat>(), Ok(ReportFormat::Text));
        assert_eq!("JSON".parse::<ReportFormat>(), Ok(ReportFormat::Json));
        assert!("xml".parse::<ReportFormat>().is_err());
    }

    #[test]
    fn test_parse_predict_command() {
        let cli = Cli::try_parse_from([
            "fruit-grader",
            "predict",
            "apple.jpg",
            "--api-url",
            "http://localhost:9000",
            "--format",
            "json",
            "-v",
        ])
        .expect("引数パース失敗");

        assert!(cli.verbose);
        match cli.command {
            Commands::Predict { image, api_url, format } => {
                assert_eq!(image, PathBuf::from("apple.jpg"));
                assert_eq!(api_url.as_deref(), Some("http://localhost:9000"));
                assert_eq!(format, ReportFormat::Json);
            }
            _ => panic!("predictコマンドではない"),
        }
    }

    #[test]
    fn test_predict_requires_image() {
        assert!(Cli::try_parse_from(["fruit-grader", "predict"]).is_err());
    }
}
