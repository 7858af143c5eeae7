//! 端末向けのプレビュー
//!
//! ブラウザのBlob URLの代わりに、ファイル名・サイズ・画像の寸法を表示する

use fruit_grader_common::{PreviewSource, SelectedFile};
use std::io::Cursor;

#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPreviews;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePreview {
    pub name: String,
    pub size: u64,
    /// デコードできなかった場合はNone
    pub dimensions: Option<(u32, u32)>,
}

impl ImagePreview {
    pub fn describe(&self) -> String {
        let size = format_size(self.size);
        match self.dimensions {
            Some((w, h)) => format!("{} ({}x{}, {})", self.name, w, h, size),
            None => format!("{} ({})", self.name, size),
        }
    }
}

fn format_size(bytes: u64) -> String {
    const KIB: f64 = 1024.0;
    let bytes_f = bytes as f64;
    if bytes_f >= KIB * KIB {
        format!("{:.1} MB", bytes_f / (KIB * KIB))
    } else if bytes_f >= KIB {
        format!("{:.1} KB", bytes_f / KIB)
    } else {
        format!("{} B", bytes)
    }
}

fn read_dimensions(bytes: &[u8]) -> Option<(u32, u32)> {
    image::ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .ok()?
        .into_dimensions()
        .ok()
}

impl PreviewSource<Vec<u8>> for TerminalPreviews {
    type Handle = ImagePreview;

    fn open(&self, file: &SelectedFile<Vec<u8>>) -> ImagePreview {
        ImagePreview {
            name: file.name.clone(),
            size: file.size,
            dimensions: read_dimensions(&file.body),
        }
    }
}
