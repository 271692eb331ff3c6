//! 分布统计聚合器
//!
//! 基于当前日记条目的 top 标签即时计算分布摘要。
//! 摘要从不缓存，每次调用重新计算，避免与日记状态脱节。

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::diary::DiaryEntry;
use crate::models::label::EmotionLabel;

/// 单个标签的统计
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelShare {
    /// 情绪标签
    pub label: EmotionLabel,
    /// 作为 top 情绪出现的次数
    pub count: u64,
    /// top 得分累加
    pub score_sum: f64,
    /// 占全部条目的比例
    pub share: f64,
}

/// 分布摘要
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DistributionSummary {
    /// 逐标签统计（次数降序，同次数按标签名升序）
    pub labels: Vec<LabelShare>,
    /// 条目总数
    pub total_entries: u64,
}

impl DistributionSummary {
    /// 摘要是否为空
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// 计算分布摘要
///
/// 保证：各标签 count 之和等于条目总数；空日记得到空摘要。
pub fn summarize(entries: &[DiaryEntry]) -> DistributionSummary {
    let mut counts: BTreeMap<EmotionLabel, (u64, f64)> = BTreeMap::new();
    for entry in entries {
        let slot = counts.entry(entry.top_label.clone()).or_insert((0, 0.0));
        slot.0 += 1;
        slot.1 += entry.top_score;
    }

    let total = entries.len() as u64;
    let mut labels: Vec<LabelShare> = counts
        .into_iter()
        .map(|(label, (count, score_sum))| LabelShare {
            label,
            count,
            score_sum,
            share: if total > 0 {
                count as f64 / total as f64
            } else {
                0.0
            },
        })
        .collect();

    // BTreeMap 已按标签名有序，稳定排序后同次数仍保持名称升序
    labels.sort_by(|a, b| b.count.cmp(&a.count));

    DistributionSummary {
        labels,
        total_entries: total,
    }
}
