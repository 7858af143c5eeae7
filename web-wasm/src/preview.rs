//! Blob URLによる画像プレビュー
//!
//! `ObjectUrl` はDrop時に `URL.revokeObjectURL` を呼ぶ

use fruit_grader_common::{PreviewSource, SelectedFile};
use web_sys::{File, Url};

/// `URL.createObjectURL` で作ったURL
#[derive(Debug)]
pub struct ObjectUrl(String);

impl ObjectUrl {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        let _ = Url::revoke_object_url(&self.0);
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BlobPreviews;

impl PreviewSource<File> for BlobPreviews {
    /// URL作成に失敗した場合はプレビューなし
    type Handle = Option<ObjectUrl>;

    fn open(&self, file: &SelectedFile<File>) -> Option<ObjectUrl> {
        match Url::create_object_url_with_blob(&file.body) {
            Ok(url) => Some(ObjectUrl(url)),
            Err(e) => {
                gloo::console::warn!("Preview unavailable", e);
                None
            }
        }
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_blob_preview_creates_blob_url() {
        let parts = js_sys::Array::new();
        parts.push(&wasm_bindgen::JsValue::from_str("fake"));
        let file = File::new_with_str_sequence(&parts, "apple.jpg").expect("File作成失敗");
        let selected = SelectedFile::new("apple.jpg", "image/jpeg", 4, file);

        let handle = BlobPreviews.open(&selected).expect("プレビュー作成失敗");
        assert!(handle.as_str().starts_with("blob:"));
    }
}
