//! アップロードエリアコンポーネント

use leptos::prelude::*;
use web_sys::{File, HtmlInputElement};

#[component]
pub fn UploadArea<N, F>(file_name: N, on_file_selected: F) -> impl IntoView
where
    N: Fn() -> Option<String> + Send + 'static,
    F: Fn(File) + 'static,
{
    let on_change = move |ev: web_sys::Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            on_file_selected(file);
        }
        // 同じファイルを選び直しても change が発火するように
        input.set_value("");
    };

    view! {
        <label class="upload-area">
            <input type="file" accept="image/*" class="hidden" on:change=on_change />
            <div class="upload-icon">"📷"</div>
            <span class="upload-text">
                {move || file_name().unwrap_or_else(|| "Click to upload a fruit image".to_string())}
            </span>
        </label>
    }
}
