//! 日记 DTO
//!
//! 定义日记读取、分布统计与重置相关的响应数据结构。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::diary::DiaryEntry;
use crate::models::label::label_style;
use crate::services::distribution::{DistributionSummary, LabelShare};

/// 日记条目响应
#[derive(Debug, Serialize)]
pub struct DiaryEntryResponse {
    /// 条目 ID
    pub id: String,
    /// 序号
    pub index: u64,
    /// 原始文本
    pub text: String,
    /// top 情绪标签
    pub top_label: String,
    /// top 情绪得分
    pub top_score: f64,
    /// top 情绪表情符号
    pub emoji: String,
    /// 创建时刻的检测分布
    pub distribution: Vec<DistributionItemResponse>,
    /// 创建时间
    pub created_at: DateTime<Utc>,
}

/// 条目内单个分布项
#[derive(Debug, Serialize)]
pub struct DistributionItemResponse {
    /// 标签名
    pub label: String,
    /// 得分
    pub score: f64,
}

impl From<&DiaryEntry> for DiaryEntryResponse {
    fn from(entry: &DiaryEntry) -> Self {
        let style = label_style(&entry.top_label);
        Self {
            id: entry.id.clone(),
            index: entry.index,
            text: entry.text.clone(),
            top_label: entry.top_label.to_string(),
            top_score: entry.top_score,
            emoji: style.emoji.to_string(),
            distribution: entry
                .distribution
                .iter()
                .map(|s| DistributionItemResponse {
                    label: s.label.to_string(),
                    score: s.score,
                })
                .collect(),
            created_at: entry.created_at,
        }
    }
}

/// 日记列表查询参数
#[derive(Debug, Deserialize, Default)]
pub struct ListDiaryParams {
    /// 顺序: "asc"（插入顺序）或 "desc"（最近在前）
    pub order: Option<String>,
}

/// 日记列表响应
#[derive(Debug, Serialize)]
pub struct DiaryListResponse {
    /// 会话 ID
    pub session_id: String,
    /// 条目列表
    pub entries: Vec<DiaryEntryResponse>,
    /// 总数
    pub total: usize,
    /// 实际使用的顺序
    pub order: String,
}

/// 标签分布项响应
#[derive(Debug, Serialize)]
pub struct LabelShareResponse {
    /// 标签名
    pub label: String,
    /// 出现次数
    pub count: u64,
    /// 得分累加
    pub score_sum: f64,
    /// 条目占比
    pub share: f64,
    /// 背景色（图表层直接取用）
    pub color: String,
}

impl From<&LabelShare> for LabelShareResponse {
    fn from(share: &LabelShare) -> Self {
        let style = label_style(&share.label);
        Self {
            label: share.label.to_string(),
            count: share.count,
            score_sum: share.score_sum,
            share: share.share,
            color: style.color.to_string(),
        }
    }
}

/// 分布摘要响应
#[derive(Debug, Serialize)]
pub struct DistributionResponse {
    /// 会话 ID
    pub session_id: String,
    /// 逐标签统计
    pub labels: Vec<LabelShareResponse>,
    /// 条目总数
    pub total_entries: u64,
}

impl DistributionResponse {
    pub fn from_summary(session_id: &str, summary: &DistributionSummary) -> Self {
        Self {
            session_id: session_id.to_string(),
            labels: summary.labels.iter().map(LabelShareResponse::from).collect(),
            total_entries: summary.total_entries,
        }
    }
}

/// 重置日记响应
#[derive(Debug, Serialize)]
pub struct ResetDiaryResponse {
    /// 会话 ID
    pub session_id: String,
    /// 消息
    pub message: String,
}
