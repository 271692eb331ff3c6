use axum::{
    Json,
    extract::{Path, Query, State},
    http::header,
    response::IntoResponse,
};
use tracing::debug;

use crate::{
    api::{app_state::AppState, dto::diary_dto::*},
    error::AppError,
    services::diary::EntryOrder,
    services::{distribution, export},
};

/// 读取会话日记
pub async fn list_diary(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Query(params): Query<ListDiaryParams>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Listing diary for session {}", session_id);

    let order = match params.order.as_deref() {
        Some("desc") => EntryOrder::Desc,
        Some("asc") | None => EntryOrder::Asc,
        Some(other) => {
            return Err(AppError::Validation(format!(
                "unknown order '{}', expected 'asc' or 'desc'",
                other
            )));
        }
    };

    let entries = state.diary_service.entries(&session_id, order).await?;
    let response = DiaryListResponse {
        session_id,
        total: entries.len(),
        entries: entries.iter().map(DiaryEntryResponse::from).collect(),
        order: match order {
            EntryOrder::Asc => "asc".to_string(),
            EntryOrder::Desc => "desc".to_string(),
        },
    };

    Ok(Json(response))
}

/// 当前日记的分布摘要，每次请求重新计算
pub async fn get_distribution(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Computing distribution for session {}", session_id);

    let entries = state
        .diary_service
        .entries(&session_id, EntryOrder::Asc)
        .await?;
    let summary = distribution::summarize(&entries);

    Ok(Json(DistributionResponse::from_summary(&session_id, &summary)))
}

/// 导出日记为纯文本报告
pub async fn export_diary(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Exporting diary for session {}", session_id);

    let entries = state
        .diary_service
        .entries(&session_id, EntryOrder::Asc)
        .await?;
    let report = export::render_report(&entries);
    state.metrics.record_export();

    Ok((
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        report,
    ))
}

/// 重置会话日记
pub async fn reset_diary(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Resetting diary for session {}", session_id);

    state.diary_service.reset(&session_id).await?;

    let response = ResetDiaryResponse {
        session_id,
        message: "Diary reset successfully".to_string(),
    };

    Ok(Json(response))
}
