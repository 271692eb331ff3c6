//! 标签 DTO

use serde::Serialize;

use crate::models::label::{EmotionLabel, label_style};

/// 标签响应
#[derive(Debug, Serialize)]
pub struct LabelResponse {
    /// 标签名
    pub name: String,
    /// 表情符号
    pub emoji: String,
    /// 背景色
    pub color: String,
    /// 反应 GIF 地址
    pub gif_url: Option<String>,
}

impl From<&EmotionLabel> for LabelResponse {
    fn from(label: &EmotionLabel) -> Self {
        let style = label_style(label);
        Self {
            name: label.to_string(),
            emoji: style.emoji.to_string(),
            color: style.color.to_string(),
            gif_url: style.gif_url.map(|u| u.to_string()),
        }
    }
}

/// 标签列表响应
#[derive(Debug, Serialize)]
pub struct LabelListResponse {
    /// 内置标签集合
    pub labels: Vec<LabelResponse>,
}
