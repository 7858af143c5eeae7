//! ローカル画像ファイルの読み込み
//!
//! MIMEタイプは内容から判定し、判定できなければ拡張子を使う

use crate::error::{FruitGraderError, Result};
use fruit_grader_common::{SelectedFile, MAX_UPLOAD_BYTES};
use image::ImageFormat;
use std::io::Read;
use std::path::Path;

/// 判定できなかった場合のMIMEタイプ
pub const UNKNOWN_MEDIA_TYPE: &str = "application/octet-stream";

/// 形式判定に使う先頭バイト数
const SNIFF_LEN: u64 = 64;

/// 先頭バイトと拡張子からMIMEタイプを判定
pub fn detect_media_type(head: &[u8], path: &Path) -> &'static str {
    image::guess_format(head)
        .or_else(|_| ImageFormat::from_path(path))
        .map(|format| format.to_mime_type())
        .unwrap_or(UNKNOWN_MEDIA_TYPE)
}

/// 画像ファイルを選択候補として読み込む
///
/// 上限サイズを超えるファイルは本体を読まず、先頭バイトのみで判定する
/// （検証で拒否されるため）。`size` は常に実ファイルのサイズ。
pub fn load_candidate(path: &Path) -> Result<SelectedFile<Vec<u8>>> {
    if !path.is_file() {
        return Err(FruitGraderError::FileNotFound(path.display().to_string()));
    }

    let size = std::fs::metadata(path)?.len();
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    let body = if size <= MAX_UPLOAD_BYTES {
        std::fs::read(path)?
    } else {
        let mut head = Vec::with_capacity(SNIFF_LEN as usize);
        std::fs::File::open(path)?.take(SNIFF_LEN).read_to_end(&mut head)?;
        head
    };

    let media_type = detect_media_type(&body, path);
    tracing::debug!(file = %name, size, media_type, "画像を読み込み");

    let body = if size <= MAX_UPLOAD_BYTES { body } else { Vec::new() };
    Ok(SelectedFile::new(name, media_type, size, body))
}
