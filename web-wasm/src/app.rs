//! メインアプリケーションコンポーネント

use crate::api::predict::FetchClient;
use crate::components::{
    header::Header,
    loading_spinner::LoadingSpinner,
    result_panel::{EmptyResult, ResultPanel},
    upload_area::UploadArea,
};
use crate::config::API_BASE_URL;
use crate::preview::BlobPreviews;
use fruit_grader_common::{
    register_chart_components, PredictionService, SelectedFile, UploadWorkflow,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;

/// ブラウザ版ワークフロー（本体は `web_sys::File`、プレビューはBlob URL）
pub type BrowserWorkflow = UploadWorkflow<File, BlobPreviews>;

/// 選択されたファイルを候補に変換
fn to_candidate(file: File) -> SelectedFile<File> {
    SelectedFile::new(file.name(), file.type_(), file.size() as u64, file)
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    register_chart_components();

    // Fileは!Sendなのでローカルシグナルに置く
    let workflow = RwSignal::new_local(BrowserWorkflow::new(BlobPreviews));
    let client = FetchClient::new(API_BASE_URL);

    // ファイル選択ハンドラ
    let on_file_selected = move |file: File| {
        workflow.update(|w| {
            let _ = w.select_file(to_candidate(file));
        });
    };

    // 送信ハンドラ
    let on_submit = move |_| {
        let Some(ticket) = workflow.try_update(|w| w.begin_submission()).flatten() else {
            return;
        };
        let client = client.clone();
        spawn_local(async move {
            let outcome = client.predict(&ticket.file).await;
            workflow.update(|w| {
                w.complete_submission(ticket.id, outcome);
            });
        });
    };

    // リセットハンドラ
    let on_reset = move |_| workflow.update(|w| w.reset());

    let file_name = move || workflow.with(|w| w.selected_file().map(|f| f.name.clone()));
    let preview_url = move || {
        workflow.with(|w| {
            w.preview()
                .and_then(|handle| handle.as_ref())
                .map(|url| url.as_str().to_string())
        })
    };
    let error = move || workflow.with(|w| w.error().map(str::to_string));
    let can_submit = move || workflow.with(|w| w.can_submit());
    let is_busy = move || workflow.with(|w| w.is_busy());
    let has_result = move || workflow.with(|w| w.result().is_some());

    view! {
        <div class="page">
            <div class=move || if has_result() { "card card-wide" } else { "card" }>
                <div class="panel panel-left">
                    <Header />

                    <UploadArea file_name=file_name on_file_selected=on_file_selected />

                    {move || preview_url().map(|url| view! {
                        <div class="preview">
                            <img src=url alt="Preview" />
                        </div>
                    })}

                    {move || error().map(|message| view! { <p class="error-text">{message}</p> })}

                    <button
                        class="btn btn-primary"
                        disabled=move || !can_submit()
                        on:click=on_submit
                    >
                        {move || if is_busy() {
                            view! { <LoadingSpinner /> }.into_any()
                        } else {
                            view! { "Upload & Predict" }.into_any()
                        }}
                    </button>

                    <button class="btn btn-secondary" on:click=on_reset>
                        "Reset"
                    </button>
                </div>

                <div class="panel panel-right">
                    {move || match workflow.with(|w| w.result().cloned()) {
                        Some(result) => view! { <ResultPanel result=result /> }.into_any(),
                        None => view! { <EmptyResult /> }.into_any(),
                    }}
                </div>
            </div>
        </div>
    }
}
