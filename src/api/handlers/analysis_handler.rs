use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::debug;

use crate::{
    api::{
        app_state::AppState,
        dto::analysis_dto::{AnalyzeRequest, AnalyzeResponse, ScoredLabelResponse},
        dto::diary_dto::DiaryEntryResponse,
    },
    error::AppError,
    services::analysis::AnalysisOutcome,
};

/// 分析一段文本并视结果写入日记
pub async fn analyze(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Analyzing text for session {}", session_id);

    state.metrics.record_analysis();
    let outcome = state
        .analysis_service
        .analyze(&session_id, &request.text)
        .await
        .inspect_err(|_| state.metrics.record_error())?;

    match outcome {
        AnalysisOutcome::Detected { entry, result } => {
            state.metrics.record_entry();
            // top_k 为 0 表示不截断
            let shown = if state.top_k > 0 {
                result.detected.len().min(state.top_k)
            } else {
                result.detected.len()
            };
            let response = AnalyzeResponse {
                outcome: "detected".to_string(),
                top: result.top().map(ScoredLabelResponse::from),
                detected: result.detected[..shown]
                    .iter()
                    .map(ScoredLabelResponse::from)
                    .collect(),
                entry: Some(DiaryEntryResponse::from(&entry)),
                threshold: result.threshold,
                message: None,
            };
            Ok((StatusCode::CREATED, Json(response)))
        }
        AnalysisOutcome::NoStrongEmotion { result } => {
            state.metrics.record_no_strong_emotion();
            let response = AnalyzeResponse {
                outcome: "no_strong_emotion".to_string(),
                top: None,
                detected: Vec::new(),
                entry: None,
                threshold: result.threshold,
                message: Some(
                    "No emotion reached the detection threshold, try a more expressive sentence"
                        .to_string(),
                ),
            };
            Ok((StatusCode::OK, Json(response)))
        }
    }
}
