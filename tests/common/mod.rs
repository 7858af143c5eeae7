//! テスト用の予測APIモックサーバー

#![allow(dead_code)]

use anyhow::Result;
use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    http::StatusCode,
    routing::post,
    Router,
};
use std::sync::Arc;
use tokio::{net::TcpListener, sync::Mutex};

/// サーバーが受け取ったmultipartパート
#[derive(Debug, Clone)]
pub struct ReceivedPart {
    pub name: Option<String>,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub len: usize,
}

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    body: String,
    received: Arc<Mutex<Vec<ReceivedPart>>>,
}

pub struct MockServer {
    pub base_url: String,
    received: Arc<Mutex<Vec<ReceivedPart>>>,
}

impl MockServer {
    pub async fn received(&self) -> Vec<ReceivedPart> {
        self.received.lock().await.clone()
    }
}

async fn handle_predict(
    State(state): State<MockState>,
    mut multipart: Multipart,
) -> (StatusCode, String) {
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().map(str::to_string);
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let len = field.bytes().await.map(|b| b.len()).unwrap_or_default();
        state.received.lock().await.push(ReceivedPart {
            name,
            file_name,
            content_type,
            len,
        });
    }
    (state.status, state.body.clone())
}

/// `/predict` が固定のステータスとボディを返すサーバーを起動
pub async fn spawn_predict_server(status: StatusCode, body: &str) -> Result<MockServer> {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let received = Arc::new(Mutex::new(Vec::new()));
    let state = MockState {
        status,
        body: body.to_string(),
        received: received.clone(),
    };
    let app = Router::new()
        .route("/predict", post(handle_predict))
        .layer(DefaultBodyLimit::max(8 * 1024 * 1024))
        .with_state(state);
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok(MockServer {
        base_url: format!("http://{addr}"),
        received,
    })
}

/// 接続できないベースURL（一度bindしてすぐ閉じたポート）
pub async fn closed_base_url() -> Result<String> {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(format!("http://{addr}"))
}

/// JPEGのマジックバイトで始まるダミー画像
pub fn fake_jpeg(size: usize) -> Vec<u8> {
    let mut bytes = b"\xFF\xD8\xFF\xE0\0\x10JFIF\0".to_vec();
    bytes.resize(size, 0);
    bytes
}
