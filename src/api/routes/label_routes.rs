//! Label Routes

use crate::api::handlers::label_handler::list_labels;
use axum::{Router, routing::get};

use crate::api::app_state::AppState;

/// 创建标签路由器
pub fn create_label_router() -> Router<AppState> {
    Router::new().route("/labels", get(list_labels))
}
