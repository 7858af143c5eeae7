//! アップロードワークフロー
//!
//! ファイル選択 → 予測APIへの送信 → 結果表示 の状態遷移を管理する。
//! ホスト（ブラウザ/CLI）は `begin_submission` と `complete_submission` の間で
//! ネットワーク呼び出しを行う。各リクエストは選択IDでタグ付けされ、
//! 選択が変わった後に届いた古いレスポンスは破棄される。

use crate::error::{SubmissionError, ValidationError, GENERIC_SUBMISSION_MESSAGE};
use crate::types::{PredictionResult, SelectedFile};
use crate::validate::validate_file;

/// プレビューハンドルの生成元
///
/// ハンドルは `Drop` で解放される（ブラウザではBlob URLのrevoke）。
/// 選択ファイルが置き換わる・クリアされるたびに古いハンドルは破棄される。
pub trait PreviewSource<B> {
    type Handle;

    fn open(&self, file: &SelectedFile<B>) -> Self::Handle;
}

/// 予測APIクライアント
#[allow(async_fn_in_trait)]
pub trait PredictionService<B> {
    async fn predict(&self, file: &SelectedFile<B>) -> Result<PredictionResult, SubmissionError>;
}

/// 選択ごとに振られるID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectionId(u64);

/// 送信開始時に発行されるチケット
#[derive(Debug, Clone)]
pub struct SubmissionTicket<B> {
    pub id: SelectionId,
    pub file: SelectedFile<B>,
}

/// ワークフローの状態
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowState {
    Idle,
    FileSelected,
    Submitting,
    Succeeded,
    Failed(String),
}

impl WorkflowState {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkflowState::Idle => "idle",
            WorkflowState::FileSelected => "file-selected",
            WorkflowState::Submitting => "submitting",
            WorkflowState::Succeeded => "succeeded",
            WorkflowState::Failed(_) => "failed",
        }
    }
}

/// 送信完了の扱い
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Succeeded,
    Failed,
    /// 選択が変わっていたため破棄
    Stale,
}

struct Staged<B, H> {
    id: SelectionId,
    file: SelectedFile<B>,
    preview: H,
}

/// アップロードワークフローのコントローラ
pub struct UploadWorkflow<B, P: PreviewSource<B>> {
    previews: P,
    staged: Option<Staged<B, P::Handle>>,
    result: Option<PredictionResult>,
    error: Option<String>,
    in_flight: Option<SelectionId>,
    next_id: u64,
}

impl<B, P: PreviewSource<B>> UploadWorkflow<B, P> {
    pub fn new(previews: P) -> Self {
        Self {
            previews,
            staged: None,
            result: None,
            error: None,
            in_flight: None,
            next_id: 0,
        }
    }

    /// ファイルを選択
    ///
    /// 成功時: ファイルを保持し、プレビューを作り直し、前回の結果とエラーをクリアする。
    /// 失敗時: 選択中のファイルとプレビューはそのまま、エラーのみ設定する（結果は残す）。
    pub fn select_file(&mut self, candidate: SelectedFile<B>) -> Result<(), ValidationError> {
        if let Err(err) = validate_file(&candidate) {
            tracing::debug!(
                file = %candidate.name,
                media_type = %candidate.media_type,
                size = candidate.size,
                "ファイルを拒否: {}",
                err
            );
            self.error = Some(err.to_string());
            return Err(err);
        }

        self.next_id += 1;
        let id = SelectionId(self.next_id);
        // 古いハンドルを先に解放してから新しいプレビューを作る
        self.staged = None;
        let preview = self.previews.open(&candidate);
        tracing::debug!(file = %candidate.name, size = candidate.size, "ファイルを選択");
        self.staged = Some(Staged {
            id,
            file: candidate,
            preview,
        });
        self.result = None;
        self.error = None;
        Ok(())
    }

    /// 送信を開始
    ///
    /// ファイル未選択、または送信中のリクエストがある場合は `None`
    pub fn begin_submission(&mut self) -> Option<SubmissionTicket<B>>
    where
        B: Clone,
    {
        if self.in_flight.is_some() {
            return None;
        }
        let staged = self.staged.as_ref()?;
        self.in_flight = Some(staged.id);
        self.error = None;
        self.result = None;
        Some(SubmissionTicket {
            id: staged.id,
            file: staged.file.clone(),
        })
    }

    /// 送信結果を反映
    ///
    /// 送信中フラグは必ず解除する。チケットの選択IDが現在の選択と異なる場合、
    /// またはそのIDの送信が既に完了している場合は結果・エラーに触れず
    /// `Completion::Stale` を返す。
    pub fn complete_submission(
        &mut self,
        id: SelectionId,
        outcome: Result<PredictionResult, SubmissionError>,
    ) -> Completion {
        let was_in_flight = self.in_flight == Some(id);
        if was_in_flight {
            self.in_flight = None;
        }

        let current = self.staged.as_ref().map(|s| s.id);
        if !was_in_flight || current != Some(id) {
            tracing::debug!(?id, ?current, ok = outcome.is_ok(), "古いレスポンスを破棄");
            return Completion::Stale;
        }

        match outcome {
            Ok(result) => {
                tracing::debug!(
                    fresh = result.fresh,
                    rotten = result.rotten,
                    fruit = %result.fruit,
                    "予測成功"
                );
                self.result = Some(result);
                Completion::Succeeded
            }
            Err(err) => {
                tracing::error!("Prediction failed: {}", err);
                self.error = Some(GENERIC_SUBMISSION_MESSAGE.to_string());
                Completion::Failed
            }
        }
    }

    /// 選択中のファイルを送信し、結果を反映する
    ///
    /// 送信できない場合は何もせず `None`
    pub async fn submit<S>(&mut self, service: &S) -> Option<Completion>
    where
        B: Clone,
        S: PredictionService<B>,
    {
        let ticket = self.begin_submission()?;
        let outcome = service.predict(&ticket.file).await;
        Some(self.complete_submission(ticket.id, outcome))
    }

    /// 初期状態に戻す
    ///
    /// 送信中のリクエストは中断しない（完了時に破棄される）
    pub fn reset(&mut self) {
        self.staged = None;
        self.result = None;
        self.error = None;
    }

    pub fn state(&self) -> WorkflowState {
        let staged_id = self.staged.as_ref().map(|s| s.id);
        if self.in_flight.is_some() && self.in_flight == staged_id {
            return WorkflowState::Submitting;
        }
        if let Some(message) = &self.error {
            return WorkflowState::Failed(message.clone());
        }
        if self.result.is_some() {
            return WorkflowState::Succeeded;
        }
        if self.staged.is_some() {
            return WorkflowState::FileSelected;
        }
        WorkflowState::Idle
    }

    /// 送信ボタンを有効にできるか
    pub fn can_submit(&self) -> bool {
        self.staged.is_some() && self.in_flight.is_none()
    }

    /// リクエストが送信中か（選択が変わった後の古いリクエストも含む）
    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn selected_file(&self) -> Option<&SelectedFile<B>> {
        self.staged.as_ref().map(|s| &s.file)
    }

    pub fn selection_id(&self) -> Option<SelectionId> {
        self.staged.as_ref().map(|s| s.id)
    }

    pub fn preview(&self) -> Option<&P::Handle> {
        self.staged.as_ref().map(|s| &s.preview)
    }

    pub fn result(&self) -> Option<&PredictionResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
