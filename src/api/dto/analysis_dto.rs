//! 分析 DTO
//!
//! 定义文本分析相关的请求和响应数据结构。

use serde::{Deserialize, Serialize};

use crate::api::dto::diary_dto::DiaryEntryResponse;
use crate::models::label::label_style;
use crate::models::score::ScoredLabel;

/// 分析请求
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct AnalyzeRequest {
    /// 待分析文本
    pub text: String,
}

/// 带展示元数据的得分项
#[derive(Debug, Serialize)]
pub struct ScoredLabelResponse {
    /// 标签名
    pub label: String,
    /// 模型置信度
    pub score: f64,
    /// 表情符号
    pub emoji: String,
    /// 背景色
    pub color: String,
    /// 反应 GIF 地址
    pub gif_url: Option<String>,
}

impl From<&ScoredLabel> for ScoredLabelResponse {
    fn from(scored: &ScoredLabel) -> Self {
        let style = label_style(&scored.label);
        Self {
            label: scored.label.to_string(),
            score: scored.score,
            emoji: style.emoji.to_string(),
            color: style.color.to_string(),
            gif_url: style.gif_url.map(|u| u.to_string()),
        }
    }
}

/// 分析响应
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    /// 结果类型: "detected" 或 "no_strong_emotion"
    pub outcome: String,
    /// 排名最高的情绪（达到阈值时）
    pub top: Option<ScoredLabelResponse>,
    /// 达到阈值的情绪，按排名排列
    pub detected: Vec<ScoredLabelResponse>,
    /// 新写入的日记条目（达到阈值时）
    pub entry: Option<DiaryEntryResponse>,
    /// 生效的检测阈值
    pub threshold: f64,
    /// 提示消息
    pub message: Option<String>,
}
