//! Diary Routes
//!
//! 定义日记读取、分布统计、导出与重置的 API 路由。

use crate::api::handlers::diary_handler::*;
use axum::{
    Router,
    routing::{delete, get},
};

use crate::api::app_state::AppState;

/// 创建日记路由器
pub fn create_diary_router() -> Router<AppState> {
    Router::new()
        .route("/sessions/:id/diary", get(list_diary))
        .route("/sessions/:id/diary", delete(reset_diary))
        .route("/sessions/:id/distribution", get(get_distribution))
        .route("/sessions/:id/export", get(export_diary))
}
