//! API 模块
//!
//! 提供 REST API 支持。

pub mod app_state;
pub mod dto;
pub mod handlers;
pub mod routes;

use crate::api::app_state::AppState;
use axum::{
    Router,
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn create_router(app_state: AppState) -> Router {
    let api = Router::new()
        .merge(routes::analysis_routes::create_analysis_router())
        .merge(routes::diary_routes::create_diary_router())
        .merge(routes::label_routes::create_label_router());

    Router::new()
        .nest("/api/v1", api)
        .layer(axum::middleware::from_fn_with_state(
            app_state.clone(),
            track_request_metrics,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

/// 记录请求指标的中间件
async fn track_request_metrics(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    let start = std::time::Instant::now();
    let response = next.run(req).await;
    state
        .metrics
        .record_http_request(start.elapsed().as_millis() as u64);
    response
}
