use axum::{Json, response::IntoResponse};

use crate::api::dto::label_dto::{LabelListResponse, LabelResponse};
use crate::models::label::builtin_labels;

/// 内置标签注册表及展示元数据
pub async fn list_labels() -> impl IntoResponse {
    let labels = builtin_labels();
    Json(LabelListResponse {
        labels: labels.iter().map(LabelResponse::from).collect(),
    })
}
