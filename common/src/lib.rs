//! Fruit Grader Common Library
//!
//! ブラウザ(WASM)とCLIで共有されるアップロードワークフロー、型、表示ロジック

pub mod types;
pub mod error;
pub mod validate;
pub mod parser;
pub mod workflow;
pub mod presenter;
pub mod chart;

pub use types::{
    predict_url, PredictionResponse, PredictionResult, SelectedFile, MAX_UPLOAD_BYTES,
    PREDICT_PATH, UPLOAD_FIELD_NAME,
};
pub use error::{SubmissionError, ValidationError, GENERIC_SUBMISSION_MESSAGE};
pub use validate::{validate_file, validate_metadata};
pub use parser::{parse_prediction, round_half_up};
pub use workflow::{
    Completion, PredictionService, PreviewSource, SelectionId, SubmissionTicket, UploadWorkflow,
    WorkflowState,
};
pub use presenter::{
    display_fruit_name, fruit_emoji, gauge_arc_length, gauge_dash_array, gauge_labels,
    quality_label, radar_scores, radar_series, score_tooltip, Quality, RadarAxis, GAUGE_FULL_ARC,
    RADAR_LABELS,
};
pub use chart::{
    register_chart_components, svg_points, ChartComponent, ChartRegistry, RadarGeometry, RadarStyle,
};
