//! CLIのワークフロー操作
//!
//! 画面のボタンに相当する操作（画像選択・送信・リセット）を端末で行う

use crate::cli::ReportFormat;
use crate::client::HttpPredictionClient;
use crate::error::{FruitGraderError, Result};
use crate::preview::TerminalPreviews;
use crate::report;
use crate::scanner;
use dialoguer::{Input, Select};
use fruit_grader_common::{Completion, PredictionService, UploadWorkflow, WorkflowState};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

pub type CliWorkflow = UploadWorkflow<Vec<u8>, TerminalPreviews>;

pub fn new_workflow() -> CliWorkflow {
    UploadWorkflow::new(TerminalPreviews)
}

/// ファイルを読み込んで選択する
pub fn select_path(workflow: &mut CliWorkflow, path: &Path) -> Result<()> {
    let candidate = scanner::load_candidate(path)?;
    workflow.select_file(candidate)?;
    if let Some(preview) = workflow.preview() {
        println!("✔ {}", preview.describe());
    }
    Ok(())
}

/// スピナーを表示しながら送信する
pub async fn submit_with_spinner<S>(workflow: &mut CliWorkflow, service: &S) -> Option<Completion>
where
    S: PredictionService<Vec<u8>>,
{
    if !workflow.can_submit() {
        return None;
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("Uploading & predicting...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let completion = workflow.submit(service).await;

    spinner.finish_and_clear();
    completion
}

/// ワークフローの現在の結果を出力し、失敗ならエラーを返す
pub fn print_outcome(workflow: &CliWorkflow, format: ReportFormat) -> Result<()> {
    match workflow.state() {
        WorkflowState::Succeeded => {
            if let Some(result) = workflow.result() {
                match format {
                    ReportFormat::Text => println!("{}", report::render_text(result)),
                    ReportFormat::Json => println!(
                        "{}",
                        serde_json::to_string_pretty(&report::Report::from_result(result))?
                    ),
                }
            }
            Ok(())
        }
        WorkflowState::Failed(message) => Err(FruitGraderError::Prediction(message)),
        _ => Ok(()),
    }
}

const ACTIONS: &[&str] = &["Select image", "Upload & Predict", "Reset", "Quit"];

/// 対話モード
pub async fn run_interactive(client: &HttpPredictionClient) -> Result<()> {
    let mut workflow = new_workflow();
    println!("🍎 Fruit Grading System");
    println!("  API: {}\n", client.endpoint());

    loop {
        let status = match workflow.preview() {
            Some(preview) => format!("[{}] {}", workflow.state().as_str(), preview.describe()),
            None => format!("[{}] Click to upload a fruit image", workflow.state().as_str()),
        };
        println!("{}", status);

        let choice = Select::new()
            .with_prompt("操作を選択")
            .items(ACTIONS)
            .default(if workflow.can_submit() { 1 } else { 0 })
            .interact()
            .map_err(|e| FruitGraderError::Prompt(e.to_string()))?;

        match choice {
            0 => {
                let input: String = Input::new()
                    .with_prompt("画像ファイルのパス")
                    .interact_text()
                    .map_err(|e| FruitGraderError::Prompt(e.to_string()))?;
                // 検証エラーはワークフローのエラー欄に残るので表示して続行
                if let Err(err) = select_path(&mut workflow, Path::new(input.trim())) {
                    println!("✘ {}", err);
                }
            }
            1 => {
                if submit_with_spinner(&mut workflow, client).await.is_none() {
                    println!("先に画像を選択してください");
                    continue;
                }
                match print_outcome(&workflow, ReportFormat::Text) {
                    Ok(()) => {}
                    Err(err) => println!("✘ {}", err),
                }
            }
            2 => {
                workflow.reset();
                println!("リセットしました");
            }
            _ => break,
        }
        println!();
    }

    Ok(())
}
